//! Error type handed to callers.

use serde::{Deserialize, Serialize};

use crate::storefront::PlatformError;

/// `HRESULT_FROM_WIN32(ERROR_NO_SUCH_USER)` — the extended error the platform
/// reports when no user is signed in to the store.
pub(crate) const E_NO_SUCH_USER: i32 = 0x8007_0525_u32 as i32;

/// A failed store operation.
///
/// `code` is the platform's numeric error code rendered in decimal (failure
/// HRESULTs come out negative, e.g. `"-2147023579"`). `details` is carried
/// for wire-shape compatibility and is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    pub code: String,
    pub message: String,
    pub details: String,
}

impl StoreError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: String::new(),
        }
    }

    /// Classifies a non-zero extended error from a completed product query.
    /// The no-signed-in-user case gets a clearer message; everything else is
    /// a generic failure.
    pub(crate) fn from_extended_error(code: i32) -> Self {
        let message = if code == E_NO_SUCH_USER {
            "Error while getting associated store products, no user connected"
        } else {
            "Error while getting associated store products"
        };
        Self::new(code.to_string(), message)
    }
}

impl From<PlatformError> for StoreError {
    fn from(err: PlatformError) -> Self {
        Self::new(err.code.to_string(), err.message)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error_code_renders_as_decimal() {
        let err = StoreError::from(PlatformError {
            code: 0x8000_4005_u32 as i32, // E_FAIL
            message: "Unspecified error".to_string(),
        });
        assert_eq!(err.code, "-2147467259");
        assert_eq!(err.message, "Unspecified error");
        assert_eq!(err.details, "");
    }

    #[test]
    fn test_no_such_user_extended_error_gets_specific_message() {
        let err = StoreError::from_extended_error(E_NO_SUCH_USER);
        assert_eq!(err.code, E_NO_SUCH_USER.to_string());
        assert!(err.message.contains("no user connected"));
    }

    #[test]
    fn test_other_extended_errors_get_generic_message() {
        let err = StoreError::from_extended_error(0x8000_4005_u32 as i32);
        assert_eq!(
            err.message,
            "Error while getting associated store products"
        );
        assert!(!err.message.contains("no user connected"));
    }
}
