//! The closed set of failure kinds the registry service reports.

use std::fmt;

use crate::fault::Fault;

/// A failure kind reported by the registry service.
///
/// The set is closed: the service reports exactly these kinds. Each kind has
/// a stable default code string ([`code`](Self::code)) and a fixed fault
/// classification ([`fault`](Self::fault)). Callers that need per-code
/// handling should switch on [`RegistryError::code`](crate::RegistryError::code),
/// which honors per-instance overrides; the kind itself is the decoded
/// identity of the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryErrorKind {
    /// The layer upload contains no layer parts.
    EmptyUpload,
    /// The image was already pushed, with no change to the manifest or tags
    /// since the last push.
    ImageAlreadyExists,
    /// The digest computed by the registry does not match the digest supplied
    /// for the image.
    ImageDigestMismatch,
    /// The requested image does not exist in the repository.
    ImageNotFound,
    /// The tag is already in use and the repository enforces tag immutability.
    ImageTagAlreadyExists,
    /// The digest computed by the registry for the layer does not match the
    /// digest supplied.
    InvalidLayer,
    /// A layer part has an invalid size, or its first byte is not consecutive
    /// with the last byte of the previous part.
    InvalidLayerPart,
    /// A request parameter is invalid.
    InvalidParameter,
    /// A tag key or value exceeds the allowed length.
    InvalidTagParameter,
    /// The layer already exists in the repository.
    LayerAlreadyExists,
    /// A layer part is smaller than the minimum part size.
    LayerPartTooSmall,
    /// One or more layers do not exist or are not valid for the repository.
    LayersNotFound,
    /// The operation would exceed a service quota for the account.
    LimitExceeded,
    /// The manifest list references an image that does not exist.
    ReferencedImagesNotFound,
    /// The registry does not exist.
    RegistryNotFound,
    /// The repository already exists in the registry.
    RepositoryAlreadyExists,
    /// The repository has no catalog data.
    RepositoryCatalogDataNotFound,
    /// The repository still contains images; deleting it requires force.
    RepositoryNotEmpty,
    /// The repository does not exist in the registry.
    RepositoryNotFound,
    /// The repository has no associated repository policy.
    RepositoryPolicyNotFound,
    /// The service failed on its side.
    Server,
    /// The repository is already at its tag limit.
    TooManyTags,
    /// The action is not supported in the target region.
    UnsupportedCommand,
    /// The upload does not exist, or the upload ID is not valid for the
    /// repository.
    UploadNotFound,
}

impl RegistryErrorKind {
    /// Every kind the service reports, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::EmptyUpload,
        Self::ImageAlreadyExists,
        Self::ImageDigestMismatch,
        Self::ImageNotFound,
        Self::ImageTagAlreadyExists,
        Self::InvalidLayer,
        Self::InvalidLayerPart,
        Self::InvalidParameter,
        Self::InvalidTagParameter,
        Self::LayerAlreadyExists,
        Self::LayerPartTooSmall,
        Self::LayersNotFound,
        Self::LimitExceeded,
        Self::ReferencedImagesNotFound,
        Self::RegistryNotFound,
        Self::RepositoryAlreadyExists,
        Self::RepositoryCatalogDataNotFound,
        Self::RepositoryNotEmpty,
        Self::RepositoryNotFound,
        Self::RepositoryPolicyNotFound,
        Self::Server,
        Self::TooManyTags,
        Self::UnsupportedCommand,
        Self::UploadNotFound,
    ];

    /// Returns the stable default code string for this kind.
    ///
    /// This is what [`RegistryError::code`](crate::RegistryError::code)
    /// reports unless the service supplied a more specific override.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyUpload => "EmptyUploadException",
            Self::ImageAlreadyExists => "ImageAlreadyExistsException",
            Self::ImageDigestMismatch => "ImageDigestDoesNotMatchException",
            Self::ImageNotFound => "ImageNotFoundException",
            Self::ImageTagAlreadyExists => "ImageTagAlreadyExistsException",
            Self::InvalidLayer => "InvalidLayerException",
            Self::InvalidLayerPart => "InvalidLayerPartException",
            Self::InvalidParameter => "InvalidParameterException",
            Self::InvalidTagParameter => "InvalidTagParameterException",
            Self::LayerAlreadyExists => "LayerAlreadyExistsException",
            Self::LayerPartTooSmall => "LayerPartTooSmallException",
            Self::LayersNotFound => "LayersNotFoundException",
            Self::LimitExceeded => "LimitExceededException",
            Self::ReferencedImagesNotFound => "ReferencedImagesNotFoundException",
            Self::RegistryNotFound => "RegistryNotFoundException",
            Self::RepositoryAlreadyExists => "RepositoryAlreadyExistsException",
            Self::RepositoryCatalogDataNotFound => "RepositoryCatalogDataNotFoundException",
            Self::RepositoryNotEmpty => "RepositoryNotEmptyException",
            Self::RepositoryNotFound => "RepositoryNotFoundException",
            Self::RepositoryPolicyNotFound => "RepositoryPolicyNotFoundException",
            Self::Server => "ServerException",
            Self::TooManyTags => "TooManyTagsException",
            Self::UnsupportedCommand => "UnsupportedCommandException",
            Self::UploadNotFound => "UploadNotFoundException",
        }
    }

    /// Returns the fixed fault classification for this kind.
    ///
    /// Only [`Server`](Self::Server) is a service-side fault; everything else
    /// is caused by the request.
    #[must_use]
    pub const fn fault(self) -> Fault {
        match self {
            Self::Server => Fault::Server,
            _ => Fault::Client,
        }
    }

    /// Looks up a kind from its default code string.
    ///
    /// Returns `None` for codes outside the closed set; the decode layer owns
    /// the handling of unmodeled codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for RegistryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_distinct() {
        let codes: HashSet<&str> = RegistryErrorKind::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), RegistryErrorKind::ALL.len());
    }

    #[test]
    fn test_from_code_round_trips() {
        for kind in RegistryErrorKind::ALL {
            assert_eq!(RegistryErrorKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(RegistryErrorKind::from_code("ThrottlingException"), None);
        assert_eq!(RegistryErrorKind::from_code(""), None);
        // Lookup is exact, not case-insensitive.
        assert_eq!(RegistryErrorKind::from_code("serverexception"), None);
    }

    #[test]
    fn test_only_server_is_server_fault() {
        for kind in RegistryErrorKind::ALL {
            if kind == RegistryErrorKind::Server {
                assert!(kind.fault().is_server());
            } else {
                assert!(kind.fault().is_client(), "{kind} must be a client fault");
            }
        }
    }

    #[test]
    fn test_display_is_default_code() {
        assert_eq!(
            RegistryErrorKind::ImageDigestMismatch.to_string(),
            "ImageDigestDoesNotMatchException"
        );
        assert_eq!(RegistryErrorKind::Server.to_string(), "ServerException");
    }
}
