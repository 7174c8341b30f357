//! The error value carried by failed registry operations.

use thiserror::Error;

use crate::fault::Fault;
use crate::kind::RegistryErrorKind;

/// Resume context attached to
/// [`RegistryErrorKind::InvalidLayerPart`] failures.
///
/// Carries enough of the upload state to resume or diagnose a chunked layer
/// upload without re-querying the service. Every field is optional; the
/// service populates what it knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerPartDetails {
    /// Registry the upload targets.
    pub registry_id: Option<String>,
    /// Repository the upload targets.
    pub repository_name: Option<String>,
    /// Identifier of the interrupted upload.
    pub upload_id: Option<String>,
    /// Offset of the last byte the service accepted.
    pub last_valid_byte_received: Option<i64>,
}

/// An error reported by the registry service for a failed operation.
///
/// Values are produced once, by the transport layer after it decodes a
/// failure response, and are read-only from then on. Construction cannot
/// fail and every accessor is total: absent fields read as empty or `None`,
/// never as a secondary failure.
///
/// The display form is `"<code>: <message>"` with the message rendered empty
/// when the service sent none; logs built from it stay byte-compatible with
/// the service's own error rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", self.code(), self.message())]
pub struct RegistryError {
    kind: RegistryErrorKind,
    message: Option<String>,
    code_override: Option<String>,
    layer_part: Option<LayerPartDetails>,
}

impl RegistryError {
    /// Creates an error of the given kind with no message or diagnostics.
    #[must_use]
    pub const fn new(kind: RegistryErrorKind) -> Self {
        Self {
            kind,
            message: None,
            code_override: None,
            layer_part: None,
        }
    }

    /// Attaches the human-readable message reported by the service.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replaces the kind's default code with a more specific one from the
    /// service (e.g. a code carrying a retry hint suffix).
    ///
    /// The override changes what [`code`](Self::code) reports; it never
    /// changes the fault classification.
    #[must_use]
    pub fn with_code_override(mut self, code: impl Into<String>) -> Self {
        self.code_override = Some(code.into());
        self
    }

    /// Attaches chunked-upload resume context.
    ///
    /// Only [`RegistryErrorKind::InvalidLayerPart`] failures carry these;
    /// the diagnostic accessors stay total either way.
    #[must_use]
    pub fn with_layer_part_details(mut self, details: LayerPartDetails) -> Self {
        self.layer_part = Some(details);
        self
    }

    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> RegistryErrorKind {
        self.kind
    }

    /// Returns the machine-readable code to switch on.
    ///
    /// This is the service-supplied override when present and the kind's
    /// default code otherwise.
    #[must_use]
    pub fn code(&self) -> &str {
        self.code_override
            .as_deref()
            .unwrap_or_else(|| self.kind.code())
    }

    /// Returns the human-readable message, or `""` when the service sent
    /// none.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Returns the fixed fault classification of the kind.
    #[must_use]
    pub const fn fault(&self) -> Fault {
        self.kind.fault()
    }

    /// Returns true if the failure is classified as caused by the request.
    #[must_use]
    pub const fn is_client_fault(&self) -> bool {
        self.fault().is_client()
    }

    /// Returns true if the failure is classified as service-side.
    #[must_use]
    pub const fn is_server_fault(&self) -> bool {
        self.fault().is_server()
    }

    /// Returns the chunked-upload resume context, when present.
    #[must_use]
    pub const fn layer_part_details(&self) -> Option<&LayerPartDetails> {
        self.layer_part.as_ref()
    }

    /// Registry the failed upload targeted, when reported.
    #[must_use]
    pub fn registry_id(&self) -> Option<&str> {
        self.layer_part.as_ref()?.registry_id.as_deref()
    }

    /// Repository the failed upload targeted, when reported.
    #[must_use]
    pub fn repository_name(&self) -> Option<&str> {
        self.layer_part.as_ref()?.repository_name.as_deref()
    }

    /// Identifier of the interrupted upload, when reported.
    #[must_use]
    pub fn upload_id(&self) -> Option<&str> {
        self.layer_part.as_ref()?.upload_id.as_deref()
    }

    /// Offset of the last byte the service accepted, when reported.
    #[must_use]
    pub fn last_valid_byte_received(&self) -> Option<i64> {
        self.layer_part.as_ref()?.last_valid_byte_received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = RegistryError::new(RegistryErrorKind::RepositoryNotFound)
            .with_message("repository 'my-repo' not found");
        assert_eq!(
            err.to_string(),
            "RepositoryNotFoundException: repository 'my-repo' not found"
        );
    }

    #[test]
    fn test_display_with_absent_message() {
        let err = RegistryError::new(RegistryErrorKind::EmptyUpload);
        assert_eq!(err.to_string(), "EmptyUploadException: ");
    }

    #[test]
    fn test_code_override_takes_precedence() {
        let err = RegistryError::new(RegistryErrorKind::LimitExceeded)
            .with_code_override("LimitExceededException_Retryable");
        assert_eq!(err.code(), "LimitExceededException_Retryable");
        assert_eq!(err.to_string(), "LimitExceededException_Retryable: ");
    }

    #[test]
    fn test_message_defaults_to_empty() {
        let err = RegistryError::new(RegistryErrorKind::Server);
        assert_eq!(err.message(), "");
    }

    #[test]
    fn test_fault_predicates() {
        assert!(RegistryError::new(RegistryErrorKind::Server).is_server_fault());
        assert!(RegistryError::new(RegistryErrorKind::ImageNotFound).is_client_fault());
    }

    #[test]
    fn test_diagnostics_absent_by_default() {
        let err = RegistryError::new(RegistryErrorKind::InvalidLayerPart);
        assert!(err.layer_part_details().is_none());
        assert_eq!(err.registry_id(), None);
        assert_eq!(err.repository_name(), None);
        assert_eq!(err.upload_id(), None);
        assert_eq!(err.last_valid_byte_received(), None);
    }
}
