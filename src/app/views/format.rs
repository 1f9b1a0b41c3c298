use chrono::{Datelike, NaiveDate};

const SHORT_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// French short date, e.g. `5 nov. 2023`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        SHORT_MONTHS[date.month0() as usize],
        date.year()
    )
}
