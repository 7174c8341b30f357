//! Fault classification for registry failures.

use std::fmt;

/// Which side of the connection caused a failure.
///
/// Client faults are caused by the request and generally will not succeed on
/// retry; server faults are service-side and generally will. The
/// classification is advisory: retry policy itself lives with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The request caused the failure.
    Client,
    /// The failure occurred inside the service.
    Server,
}

impl Fault {
    /// Returns true if the caller caused the failure.
    #[must_use]
    pub const fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }

    /// Returns true if the service caused the failure.
    #[must_use]
    pub const fn is_server(self) -> bool {
        matches!(self, Self::Server)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Client => "client",
            Self::Server => "server",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Fault::Client.is_client());
        assert!(!Fault::Client.is_server());
        assert!(Fault::Server.is_server());
        assert!(!Fault::Server.is_client());
    }

    #[test]
    fn test_display() {
        assert_eq!(Fault::Client.to_string(), "client");
        assert_eq!(Fault::Server.to_string(), "server");
    }
}
