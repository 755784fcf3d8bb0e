//! Authentication service for the shared API key.

use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Checks the shared secret that guards the management API.
///
/// Comparison runs in constant time with respect to the key contents, so
/// response timing does not reveal how many leading bytes matched.
pub struct AuthService {
    api_key: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// An empty `api_key` rejects every request.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Authenticates the key supplied with a request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the key is missing or does not match.
    pub fn authenticate(&self, provided: Option<&str>) -> Result<(), AppError> {
        let Some(provided) = provided else {
            return Err(AppError::Unauthorized);
        };

        if self.api_key.is_empty() {
            return Err(AppError::Unauthorized);
        }

        if bool::from(provided.as_bytes().ct_eq(self.api_key.as_bytes())) {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
