/// Below this magnitude fractional results switch to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e-4;

/// Render an evaluation result for display.
///
/// Integral values print without a fractional part (`20`, not `20.0`), and
/// negative zero prints as `0`. Fractions use the shortest decimal form that
/// round-trips, switching to exponent form (`1e-05`) for magnitudes under
/// `1e-4`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else if value.abs() < EXPONENT_THRESHOLD {
        exponent_form(value)
    } else {
        format!("{}", value)
    }
}

/// `1.5e-7` becomes `1.5e-07`: explicit sign, at least two exponent digits.
fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}
