//! Utility functions for code generation and request validation.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`url_validator`] - Absolute URL checks for link targets

pub mod code_generator;
pub mod url_validator;
