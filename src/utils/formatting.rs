//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Round to one decimal, half away from zero.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Print a number without a trailing ".0" when it is integral
/// (5 → "5", 5.25 → "5.25").
pub fn fmt_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Derived metrics always show exactly one decimal ("5.0").
pub fn fmt_metric(v: f64) -> String {
    format!("{:.1}", v)
}
