//! `%g`-style number formatting for conversion results.

/// Formats `value` with `digits` significant digits the way C's `%g` does:
/// fixed notation for moderate exponents, scientific otherwise, trailing
/// zeros removed.
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    // The exponent is taken after rounding, so 999999.5 becomes 1e+06
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_significant(1000.0, 6), "1000");
        assert_eq!(format_significant(1.609344, 6), "1.60934");
        assert_eq!(format_significant(-273.15, 6), "-273.15");
        assert_eq!(format_significant(0.0001, 6), "0.0001");
        assert_eq!(format_significant(123456.0, 6), "123456");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_significant(1_000_000.0, 6), "1e+06");
        assert_eq!(format_significant(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_significant(0.00001, 6), "1e-05");
        assert_eq!(format_significant(-4.84814e-6, 6), "-4.84814e-06");
        assert_eq!(format_significant(8.0 * 1024f64.powi(5), 6), "9.0072e+15");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(format_significant(999999.5, 6), "1e+06");
        assert_eq!(format_significant(9.9999996, 6), "10");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_significant(0.0, 6), "0");
        assert_eq!(format_significant(f64::INFINITY, 6), "inf");
        assert_eq!(format_significant(f64::NAN, 6), "NaN");
    }
}
