//! Hex color validation shared by every entity that carries a display color.

use crate::error::CoreError;

/// Validate that a color string is in `#RRGGBB` hex format.
pub fn validate_hex_color(color: &str) -> Result<(), CoreError> {
    if color.len() != 7 {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must be in #RRGGBB hex format"
        )));
    }

    let Some(hex_part) = color.strip_prefix('#') else {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must start with '#'"
        )));
    };

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must contain only hex digits after '#'"
        )));
    }

    Ok(())
}
