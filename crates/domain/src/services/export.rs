//! CSV export of invites.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::Invite;

/// Column titles of the invite export.
pub const INVITES_CSV_HEADER: [&str; 4] = ["Person Name", "Village", "Total", "Created At"];

/// Attachment name offered to the browser.
pub const INVITES_CSV_FILENAME: &str = "invites.csv";

const LINE_TERMINATOR: &str = "\r\n";

/// Render invites as CSV, one row per invite in the given order.
pub fn invites_to_csv(invites: &[Invite]) -> String {
    let mut csv = String::new();
    push_row(&mut csv, INVITES_CSV_HEADER.iter().map(|h| h.to_string()));

    for invite in invites {
        push_row(
            &mut csv,
            [
                invite.person_name.clone(),
                invite.village_name.clone(),
                invite.total_people.to_string(),
                format_timestamp(&invite.created_at),
            ],
        );
    }

    csv
}

/// RFC 3339 in UTC with microsecond precision, e.g. `2026-03-28T20:00:00.000000Z`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn push_row(csv: &mut String, fields: impl IntoIterator<Item = String>) {
    let row: Vec<String> = fields.into_iter().map(|f| escape_csv(&f)).collect();
    csv.push_str(&row.join(","));
    csv.push_str(LINE_TERMINATOR);
}

/// Escape a value for CSV output.
fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
