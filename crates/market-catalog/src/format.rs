//! Locale-dependent formatting of prices, numbers and dates.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};
use market_core::Language;

use crate::transport::Currency;

/// Group separator used by ru-RU / kk-KZ number formatting (no-break space).
pub const NBSP: char = '\u{a0}';

/// Tenge sign.
pub const TENGE: &str = "₸";

/// Kazakhstan time (UTC+5), used for displayed dates.
const KZ_OFFSET_SECS: i32 = 5 * 3600;

const RU_MONTHS: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

const KK_MONTHS: [&str; 12] = [
    "қаң.", "ақп.", "нау.", "сәу.", "мам.", "мау.", "шіл.", "там.", "қыр.", "қаз.", "қар.",
    "жел.",
];

/// Group the digits of `value` in threes, separated by `separator`.
pub fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Integer formatted the way ru-RU / kk-KZ locales do (`1 250 000`, no-break spaces).
pub fn format_number(value: i64, _language: Language) -> String {
    group_thousands(value, NBSP)
}

/// Listing price: the localized "free" word for zero, otherwise the
/// space-grouped amount followed by the tenge sign.
pub fn format_price(price: i64, language: Language) -> String {
    format_price_in(price, Currency::Kzt, language)
}

/// Like [`format_price`], with the symbol of `currency`.
pub fn format_price_in(price: i64, currency: Currency, language: Language) -> String {
    if price == 0 {
        return language.pick("Бесплатно", "Тегін").to_string();
    }
    format!("{} {}", group_thousands(price, ' '), currency.symbol())
}

fn kz_offset() -> FixedOffset {
    FixedOffset::east_opt(KZ_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Medium date in the page language (`15 янв. 2024 г.` / `2024 ж. 15 қаң.`).
pub fn format_date(date: &DateTime<Utc>, language: Language) -> String {
    let local = date.with_timezone(&kz_offset());
    let month = local.month0() as usize;
    match language {
        Language::Ru => format!("{} {} {} г.", local.day(), RU_MONTHS[month], local.year()),
        Language::Kk => format!("{} ж. {} {}", local.year(), local.day(), KK_MONTHS[month]),
    }
}

/// Russian plural form for `n` (`1 день`, `2 дня`, `5 дней`).
pub fn ru_plural<'a>(n: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let (n10, n100) = (n % 10, n % 100);
    if n10 == 1 && n100 != 11 {
        one
    } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
        few
    } else {
        many
    }
}

/// How long ago a listing was posted, relative to `now`.
///
/// Falls back to [`format_date`] after a week.
pub fn relative_time(created: &DateTime<Utc>, now: &DateTime<Utc>, language: Language) -> String {
    let elapsed = now.signed_duration_since(*created);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        return language.pick("только что", "жаңа ғана").to_string();
    }
    if minutes < 60 {
        return match language {
            Language::Ru => format!("{} {} назад", minutes, ru_plural(minutes, "минуту", "минуты", "минут")),
            Language::Kk => format!("{} минут бұрын", minutes),
        };
    }
    if hours < 24 {
        return match language {
            Language::Ru => format!("{} {} назад", hours, ru_plural(hours, "час", "часа", "часов")),
            Language::Kk => format!("{} сағат бұрын", hours),
        };
    }
    if days < 7 {
        return match language {
            Language::Ru => format!("{} {} назад", days, ru_plural(days, "день", "дня", "дней")),
            Language::Kk => format!("{} күн бұрын", days),
        };
    }
    format_date(created, language)
}
