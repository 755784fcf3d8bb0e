//! Short code generation and validation utilities.
//!
//! Generated codes come from the thread-local generator in [`rand`], which is a
//! CSPRNG seeded once per thread from the operating system. Rapid successive
//! calls therefore never share a seed.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 10;

/// Longest custom code accepted from callers.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Reserved codes that cannot be claimed as custom codes.
///
/// `/api/...` paths are routed to the management API, so a link under `api`
/// could never be resolved with a tag.
const RESERVED_CODES: &[&str] = &["api"];

/// Generates a random short code.
///
/// Produces [`CODE_LENGTH`] characters drawn uniformly from `[a-zA-Z0-9]`.
/// Uniqueness is not guaranteed here; the link store rejects duplicates.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 10);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied custom code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved code
///
/// Anything else could not be routed as a single path segment.
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::InvalidCode {
            code: code.to_string(),
            reason: "custom code must be 1-64 characters",
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::InvalidCode {
            code: code.to_string(),
            reason: "custom code can only contain letters, digits, '-' and '_'",
        });
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::InvalidCode {
            code: code.to_string(),
            reason: "this code is reserved",
        });
    }

    Ok(())
}
