//! Validation of link targets.
//!
//! Targets are stored exactly as given; the redirect must go to the same
//! string the caller submitted, so nothing is normalized here.

use url::{ParseError, Url};

use crate::error::{AppError, InvalidUrlKind};

/// Checks that `original_url` is an absolute URL with a scheme and a host.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] with:
/// - [`InvalidUrlKind::Relative`] when the input has no scheme (`not-a-url`, `/a/b`)
/// - [`InvalidUrlKind::MissingHost`] when the scheme carries no host (`mailto:x`)
/// - [`InvalidUrlKind::Malformed`] for anything the URL parser rejects outright,
///   and for control characters, which the parser would silently strip
///
/// # Examples
///
/// ```ignore
/// assert!(validate_original_url("https://example.com/page?x=1").is_ok());
/// assert!(validate_original_url("not-a-url").is_err());
/// ```
pub fn validate_original_url(original_url: &str) -> Result<(), AppError> {
    let invalid = |kind| AppError::InvalidUrl {
        url: original_url.to_string(),
        kind,
    };

    // The stored string is sent back verbatim as `Location`.
    if original_url.chars().any(char::is_control) {
        return Err(invalid(InvalidUrlKind::Malformed));
    }

    match Url::parse(original_url) {
        Ok(url) if url.has_host() => Ok(()),
        Ok(_) => Err(invalid(InvalidUrlKind::MissingHost)),
        Err(ParseError::RelativeUrlWithoutBase) => Err(invalid(InvalidUrlKind::Relative)),
        Err(_) => Err(invalid(InvalidUrlKind::Malformed)),
    }
}
