//! Primitive text conversion seam.
//!
//! Responsibilities:
//! - Convert raw attribute and key text into declared scalar types.
//! - Name the target type in conversion diagnostics.
//!
//! Does NOT handle:
//! - Reading attributes off elements (see the `decode` module).
//!
//! Invariants:
//! - Every attribute and mapping key passes through [`convert`]; no decoder
//!   parses primitive text itself.
//! - Conversion failure never falls back to a default value.

use crate::cursor::Position;
use crate::error::ConfigError;

/// Types decodable from configuration text.
///
/// The set of implementations is the conversion registry: each one pairs a
/// target type with its parsing function and a diagnostic name.
pub trait FromConfigText: Sized {
    /// Target type name used in `ValueConversionFailure` diagnostics.
    const TARGET: &'static str;

    /// Parse `raw`, returning `None` when the text is malformed for this
    /// type.
    fn from_config_text(raw: &str) -> Option<Self>;
}

impl FromConfigText for bool {
    const TARGET: &'static str = "boolean";

    /// Accepts `true`/`false` (ASCII case-insensitive) and `1`/`0`, trimmed.
    fn from_config_text(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
            Some(true)
        } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
            Some(false)
        } else {
            None
        }
    }
}

impl FromConfigText for u16 {
    const TARGET: &'static str = "integer";

    fn from_config_text(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl FromConfigText for i64 {
    const TARGET: &'static str = "integer";

    fn from_config_text(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl FromConfigText for String {
    const TARGET: &'static str = "string";

    fn from_config_text(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Convert raw text to its declared target type, reporting the raw text and
/// the target type name on failure.
pub(crate) fn convert<T: FromConfigText>(raw: &str, position: Position) -> Result<T, ConfigError> {
    T::from_config_text(raw).ok_or_else(|| ConfigError::ValueConversionFailure {
        raw: raw.to_string(),
        target: T::TARGET,
        position,
    })
}
