//! Numeric rounding and canonical decimal text.
//!
//! Results are rounded to a fixed number of decimal places before display,
//! then rendered as trimmed decimal text: no trailing zeros, no dangling
//! decimal point, integral values without a fractional part.

/// Number of decimal places results are rounded to before display.
pub const DISPLAY_DECIMALS: u32 = 12;

const ROUND_SCALE: f64 = 1e12;

/// Render a result as canonical trimmed decimal text.
///
/// Rounds to [`DISPLAY_DECIMALS`] places first. Integral values render
/// without a trailing point (`"10"`, not `"10.0"`), zero renders as `"0"`
/// (never `"-0"`). Non-finite values render via their plain `Display`
/// text; these only occur as residue of chaining past an error and are
/// absorbed by the next finiteness check.
///
/// # Example
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let scaled = n * ROUND_SCALE;
    // Magnitudes large enough to overflow the scaling step already have no
    // fractional digits to round away.
    let rounded = if scaled.is_finite() {
        scaled.round() / ROUND_SCALE
    } else {
        n
    };
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

/// Parse operand text produced by the engine.
///
/// Every mutation keeps the operand text a valid partial numeral, so this
/// cannot fail in practice; the NaN fallback routes any residue into the
/// normal non-finite error path instead of panicking.
pub(crate) fn parse_numeral(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

/// Check that text is a well-formed operand numeral: optional leading `-`,
/// at least one digit, at most one `.`, nothing else. The non-finite
/// `Display` forms are also accepted since they can legitimately appear as
/// chaining residue.
pub(crate) fn is_valid_numeral(text: &str) -> bool {
    if matches!(text, "inf" | "-inf" | "NaN") {
        return true;
    }
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|&c| c == '.').count() <= 1
}
