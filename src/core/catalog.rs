//! POT catalog serialization.

use chrono::Local;

use crate::core::StringRecord;

/// Timestamp format of the `POT-Creation-Date` header field.
pub const CREATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M%z";

/// Current local time formatted for the catalog header.
pub fn creation_date_now() -> String {
    Local::now().format(CREATION_DATE_FORMAT).to_string()
}

/// The fixed header block, terminated by the blank line that precedes the
/// first record.
pub fn header(creation_date: &str) -> String {
    let lines = [
        "msgid \"\"".to_string(),
        "msgstr \"\"".to_string(),
        "\"Project-Id-Version: PACKAGE VERSION\\n\"".to_string(),
        "\"Report-Msgid-Bugs-To: \\n\"".to_string(),
        format!("\"POT-Creation-Date: {}\\n\"", creation_date),
        "\"PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\\n\"".to_string(),
        "\"Last-Translator: Automatically generated\\n\"".to_string(),
        "\"Language-Team: none\\n\"".to_string(),
        "\"Language: \\n\"".to_string(),
        "\"MIME-Version: 1.0\\n\"".to_string(),
        "\"Content-Type: text/plain; charset=UTF-8\\n\"".to_string(),
        "\"Content-Transfer-Encoding: 8bit\\n\"".to_string(),
        "\"X-Generator: Translate Toolkit 1.6.0\\n\"".to_string(),
        "\"Plural-Forms: nplurals=2; plural=(n != 1);\\n\"".to_string(),
    ];
    lines.join("\n") + "\n\n"
}

/// Serialize deduplicated records into catalog text.
///
/// Records are separated by exactly one blank line and the text ends with a
/// newline. With no records the output is the header alone.
pub fn write_catalog(records: &[StringRecord], creation_date: &str) -> String {
    let blocks: Vec<String> = records.iter().map(format_record).collect();
    let mut catalog = header(creation_date);
    if !blocks.is_empty() {
        catalog.push_str(&blocks.join("\n\n"));
        catalog.push('\n');
    }
    catalog
}

fn format_record(record: &StringRecord) -> String {
    let mut parts: Vec<String> = record
        .locations
        .iter()
        .map(|loc| format!("#: {}:{}", loc.filepath, loc.lineno))
        .collect();
    parts.push(format!("msgid {}", quote(&record.msgid)));

    match &record.msgid_plural {
        Some(plural) => {
            parts.push(format!("msgid_plural {}", quote(plural)));
            parts.push("msgstr[0] \"\"".to_string());
            parts.push("msgstr[1] \"\"".to_string());
        }
        None => parts.push("msgstr \"\"".to_string()),
    }

    parts.join("\n")
}

/// Wrap `text` in double quotes, escaping it for a PO string.
pub fn quote(text: &str) -> String {
    format!("\"{}\"", escape(text))
}

/// Escape backslashes, double quotes and control characters that would
/// otherwise break the line-oriented catalog format.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
