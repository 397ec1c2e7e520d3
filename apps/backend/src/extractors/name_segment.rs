//! Player and game names as URL path segments.
//!
//! Names may contain spaces, slashes or anything else a user types, so they
//! travel in paths as unpadded URL-safe base64.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub fn encode_segment(name: &str) -> String {
    URL_SAFE_NO_PAD.encode(name.as_bytes())
}

pub fn decode_segment(segment: &str) -> Result<String, AppError> {
    let bytes = URL_SAFE_NO_PAD.decode(segment.as_bytes()).map_err(|_| {
        AppError::invalid(
            ErrorCode::InvalidIdentifier,
            format!("Identifier '{segment}' is not valid"),
        )
    })?;
    String::from_utf8(bytes).map_err(|_| {
        AppError::invalid(
            ErrorCode::InvalidIdentifier,
            format!("Identifier '{segment}' does not decode to text"),
        )
    })
}
