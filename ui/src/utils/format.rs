//! Display formatting for money, dates and percentages.

use jiff::civil::Date;
use rust_decimal::Decimal;

/// `$1,234.50`, with a leading minus for negative amounts.
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((&text, "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// `Jun 5, 2024`
pub fn short_date(date: Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

/// `Jun`
pub fn month_label(month: Date) -> String {
    month.strftime("%b").to_string()
}

/// `+12.5%` or `-3.0%`.
pub fn signed_percent(pct: Decimal) -> String {
    let sign = if pct.is_sign_positive() { "+" } else { "" };
    format!("{sign}{pct:.1}%")
}
