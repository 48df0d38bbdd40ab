//! Number formatting shared by the CSV export, chart labels and text summary.

/// Cell text for the aggregated CSV.
///
/// Whole numbers carry no decimal part; anything else keeps Rust's
/// shortest round-trip representation so the file reads back exactly.
pub fn format_count(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Human-readable count with thousands separators, e.g. `1,234,567`.
/// Fractional values keep their shortest decimal form: `1,234.5`.
pub fn format_thousands(value: f64) -> String {
    let text = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    };

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Short axis label, e.g. `250K`, `1.5B`.
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (scale, suffix) in UNITS {
        if value.abs() >= scale {
            return format!("{}{}", trim_decimal(value / scale), suffix);
        }
    }
    trim_decimal(value)
}

fn trim_decimal(value: f64) -> String {
    let text = format!("{:.1}", value);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(100.0), "100");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(2.5), "2.5");
        assert_eq!(format_count(-3.0), "-3");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(-1234567.0), "-1,234,567");
        assert_eq!(format_thousands(1234.5), "1,234.5");
        assert_eq!(format_thousands(1234.05), "1,234.05");
        assert_eq!(format_thousands(-0.25), "-0.25");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(250_000.0), "250K");
        assert_eq!(format_compact(1_500_000_000.0), "1.5B");
        assert_eq!(format_compact(2e12), "2T");
    }
}
