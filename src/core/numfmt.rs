//! Number formatting
//!
//! Renders quantities as short human-readable strings: magnitude suffixes
//! (K/M/B/T) for large values, thousands separators for four-digit integers,
//! fixed-point decimals otherwise.

/// Format a quantity with magnitude suffixes, honoring `sigfigs` decimal
/// places. Tiers are evaluated top-down; the first match wins.
///
/// Note the asymmetric K tier: values from 10,000 up get the suffix, values
/// from 1,000 to 9,999 get thousands commas instead.
pub fn format_number(x: f64, sigfigs: u32) -> String {
    let prec = sigfigs as usize;
    if x >= 1e15 {
        format!("{:.*E}", prec, x)
    } else if x >= 1e12 {
        format!("{:.*}T", prec, x / 1e12)
    } else if x >= 1e9 {
        format!("{:.*}B", prec, x / 1e9)
    } else if x >= 1e6 {
        format!("{:.*}M", prec, x / 1e6)
    } else if x >= 1e4 {
        format!("{:.*}K", prec, x / 1e3)
    } else if x >= 1e3 {
        add_int_commas(x as i64)
    } else if x == x.trunc() {
        format!("{}", x as i64)
    } else {
        format!("{:.*}", prec, x)
    }
}

/// Number of integer digits in `x`: 0 for zero, `floor(log10 x) + 1` for
/// x >= 1, and a non-positive `floor(log10 x)` for 0 < x < 1 (signaling a
/// sub-unit magnitude). NaN counts as 0.
pub fn int_digits(x: f64) -> i32 {
    if !x.is_finite() || x == 0.0 {
        return 0;
    }
    let x = x.abs();
    if x >= 1.0 {
        x.log10().floor() as i32 + 1
    } else {
        x.log10().floor() as i32
    }
}

/// Render an optional numeric cell. Absent or non-finite values become the
/// sentinel `--`; whole numbers drop their decimals.
pub fn format_opt_number(x: Option<f64>) -> String {
    match x {
        None => "--".to_string(),
        Some(v) if !v.is_finite() => "--".to_string(),
        Some(v) if v == v.trunc() => format!("{}", v as i64),
        Some(v) => format!("{:.2}", v),
    }
}

/// Render an optional text cell, `--` when absent.
pub fn format_opt_str(s: Option<&str>) -> String {
    match s {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

fn add_int_commas(x: i64) -> String {
    let digits = x.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_integer() {
        assert_eq!(format_number(5.0, 1), "5");
        assert_eq!(format_number(0.0, 1), "0");
        assert_eq!(format_number(999.0, 3), "999");
    }

    #[test]
    fn test_format_thousands_commas() {
        assert_eq!(format_number(1500.0, 1), "1,500");
        assert_eq!(format_number(9999.0, 1), "9,999");
        assert_eq!(format_number(1000.0, 1), "1,000");
    }

    #[test]
    fn test_format_suffixes() {
        assert_eq!(format_number(12000.0, 1), "12.0K");
        assert_eq!(format_number(10000.0, 1), "10.0K");
        assert_eq!(format_number(3_000_000.0, 2), "3.00M");
        assert_eq!(format_number(2.5e9, 1), "2.5B");
        assert_eq!(format_number(7.2e12, 1), "7.2T");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_number(1e15, 1), "1.0E15");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_number(2.5, 1), "2.5");
        assert_eq!(format_number(0.125, 2), "0.13");
    }

    #[test]
    fn test_int_digits() {
        assert_eq!(int_digits(0.0), 0);
        assert_eq!(int_digits(1.0), 1);
        assert_eq!(int_digits(9.0), 1);
        assert_eq!(int_digits(10.0), 2);
        assert_eq!(int_digits(999.0), 3);
        assert_eq!(int_digits(0.05), -2);
        assert_eq!(int_digits(f64::NAN), 0);
    }

    #[test]
    fn test_format_opt_number() {
        assert_eq!(format_opt_number(None), "--");
        assert_eq!(format_opt_number(Some(f64::NAN)), "--");
        assert_eq!(format_opt_number(Some(11.0)), "11");
        assert_eq!(format_opt_number(Some(1.25)), "1.25");
        assert_eq!(format_opt_number(Some(0.5)), "0.50");
    }

    #[test]
    fn test_format_opt_str() {
        assert_eq!(format_opt_str(None), "--");
        assert_eq!(format_opt_str(Some("")), "--");
        assert_eq!(format_opt_str(Some("1d8 slashing")), "1d8 slashing");
    }

    #[test]
    fn test_add_int_commas() {
        assert_eq!(add_int_commas(1), "1");
        assert_eq!(add_int_commas(999), "999");
        assert_eq!(add_int_commas(1000), "1,000");
        assert_eq!(add_int_commas(1234567), "1,234,567");
    }
}
