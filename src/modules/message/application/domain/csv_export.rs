use chrono::{DateTime, NaiveDate, Utc};

use super::entities::ContactMessage;

const HEADER: &str = "Name,Email,Subject,Message,Date";

/// A rendered inbox export, ready to be served as a download.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl CsvExport {
    pub fn build(messages: &[ContactMessage], today: NaiveDate) -> Self {
        Self {
            filename: export_filename(today),
            content: render_csv(messages),
        }
    }
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("contact_messages_{}.csv", today.format("%Y-%m-%d"))
}

/// `Jan 5, 2025, 03:04 PM`, in UTC.
pub fn format_message_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// One line per message. Fields are not quoted; commas in the message body
/// become semicolons, everything else is written as stored.
pub fn render_csv(messages: &[ContactMessage]) -> String {
    let mut lines = Vec::with_capacity(messages.len() + 1);
    lines.push(HEADER.to_string());

    for m in messages {
        let date = m.created_at.as_ref().map(format_message_date).unwrap_or_default();
        lines.push(
            [
                m.name.as_str(),
                m.email.as_str(),
                m.subject.as_str(),
                &m.message.replace(',', ";"),
                &date,
            ]
            .join(","),
        );
    }

    lines.join("\n")
}
