//! Display formatting for the comparison page.
//!
//! All functions are pure. The thousands separator stands in for the host
//! locale and defaults to `,`.

pub const DEFAULT_SEPARATOR: char = ',';

/// Truncate toward zero and group thousands with `,`.
///
/// `format_number(1234.0) == "1,234"`, `format_number(999.9) == "999"`.
pub fn format_number(num: f64) -> String {
    format_number_with(num, DEFAULT_SEPARATOR)
}

/// [`format_number`] with an explicit separator. Negative and non-finite
/// input renders as `"0"`.
pub fn format_number_with(num: f64, separator: char) -> String {
    group_digits(truncate(num), separator)
}

/// Elapsed seconds as `"{n} seconds"`, `"{n} minutes"` or `"{n} hours"`.
///
/// Minutes and hours round half-up. 60 is already `"1 minutes"` and 3600
/// already `"1 hours"`.
pub fn format_time(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds} seconds")
    } else if seconds < 3600 {
        format!("{} minutes", div_round_half_up(seconds, 60))
    } else {
        format!("{} hours", div_round_half_up(seconds, 3600))
    }
}

/// Whole percent, rounded half-up: `"67%"`.
pub fn format_percent(percent: f64) -> String {
    let rounded = if percent.is_finite() && percent > 0.0 {
        (percent + 0.5).floor() as u64
    } else {
        0
    };
    format!("{rounded}%")
}

/// Dollar amount with grouped whole part and two decimals: `"$3,450.00"`.
pub fn format_usd(amount: f64) -> String {
    format_usd_with(amount, DEFAULT_SEPARATOR)
}

pub fn format_usd_with(amount: f64, separator: char) -> String {
    let cents = if amount.is_finite() && amount > 0.0 {
        (amount * 100.0).round() as u64
    } else {
        0
    };
    format!(
        "${}.{:02}",
        group_digits(cents / 100, separator),
        cents % 100
    )
}

fn truncate(num: f64) -> u64 {
    if num.is_finite() && num > 0.0 {
        // `as` saturates for values beyond u64::MAX.
        num.trunc() as u64
    } else {
        0
    }
}

fn div_round_half_up(n: u64, d: u64) -> u64 {
    let q = n / d;
    let r = n % d;
    if r >= d - d / 2 {
        q + 1
    } else {
        q
    }
}

fn group_digits(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
