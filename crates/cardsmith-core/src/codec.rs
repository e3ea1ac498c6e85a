//! Pipe-delimited line format `NUMBER|MM|YYYY|CVV`.
//!
//! No escaping is performed: a `|` inside a field cannot round-trip.

use crate::FIELD_SEPARATOR;
use crate::types::CardRecord;

/// Parses one line into a record.
///
/// Returns `None` when the line has fewer than four fields. Fields are
/// trimmed and anything after the fourth is ignored.
pub fn parse_record(line: &str) -> Option<CardRecord> {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
    let number = fields.next()?;
    let month = fields.next()?;
    let year = fields.next()?;
    let security_code = fields.next()?;
    Some(CardRecord::new(number, month, year, security_code))
}

pub fn format_record(record: &CardRecord) -> String {
    format!(
        "{number}{sep}{month}{sep}{year}{sep}{code}",
        number = record.number,
        month = record.expiry_month,
        year = record.expiry_year,
        code = record.security_code,
        sep = FIELD_SEPARATOR,
    )
}

/// Bulk text export: one formatted line per record, newline-joined.
pub fn export_lines<'a>(records: impl IntoIterator<Item = &'a CardRecord>) -> String {
    records
        .into_iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a text blob into its non-blank lines, in order.
pub fn import_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}
