/// Formats an `f64` the way JavaScript's `String(number)` does.
///
/// Integral values print without a decimal point, so a resolved sub-result
/// substituted back into an expression reads `"6"` rather than `"6.0"` and
/// still parses as a number on the next pass. Non-finite values use the
/// `NaN`/`Infinity` spellings.
///
/// # Examples
///
/// ```
/// use string_expression_util::strings::format_number;
///
/// assert_eq!(format_number(6.0), "6");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // f64's Display already drops the fractional part of integral values.
    n.to_string()
}
