//! View Projection
//!
//! Pure helpers turning controller state into what the surface displays.
//! Nothing here performs I/O.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::models::Item;

/// Mutually exclusive content panels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    Loading,
    #[default]
    Empty,
    Error(String),
    List,
}

/// One rendered list entry. `text_html` is already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: i64,
    pub text_html: String,
    pub timestamp: String,
}

/// Connectivity banner contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Banner {
    pub text: String,
    pub class: String,
    pub endpoint: Option<String>,
}

/// Escape every markup-significant character, unconditionally.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 todo".to_string()
    } else {
        format!("{} todos", count)
    }
}

/// Most recently created (highest id) first
pub fn sort_newest_first(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted
}

pub fn item_rows(items: &[Item], now: DateTime<Utc>) -> Vec<ItemRow> {
    sort_newest_first(items)
        .into_iter()
        .map(|item| ItemRow {
            id: item.id,
            text_html: escape_html(&item.text),
            timestamp: format_timestamp(&item.created_at, now),
        })
        .collect()
}

/// Relative time for the last week, a calendar date beyond that.
/// Values that do not parse are shown as-is.
pub fn format_timestamp(raw: &str, now: DateTime<Utc>) -> String {
    let Some(created) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let minutes = (now - created).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        created.format("%-m/%-d/%Y").to_string()
    }
}

/// `👤 User: <first 12 chars>...`
pub fn short_identity(id: &str) -> String {
    let short: String = id.chars().take(12).collect();
    format!("👤 User: {}...", short)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(id: i64, text: &str) -> Item {
        Item {
            id,
            text: text.to_string(),
            created_at: String::new(),
        }
    }

    fn unescape_html(html: &str) -> String {
        html.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 todos");
        assert_eq!(count_label(1), "1 todo");
        assert_eq!(count_label(2), "2 todos");
    }

    #[test]
    fn test_sort_descending_by_id() {
        let items = vec![item(1, "a"), item(7, "b"), item(3, "c")];
        let ids: Vec<i64> = sort_newest_first(&items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 3, 1]);
    }

    #[test]
    fn test_escape_removes_markup_characters() {
        let samples = [
            "<script>alert('x')</script>",
            "Tom & \"Jerry\"",
            "plain text",
            "&amp; already",
            "",
        ];
        for text in samples {
            let escaped = escape_html(text);
            assert!(!escaped.contains('<'));
            assert!(!escaped.contains('>'));
            assert!(!escaped.contains('"'));
            assert!(!escaped.contains('\''));
            assert_eq!(unescape_html(&escaped), text);
        }
    }

    #[test]
    fn test_rows_are_escaped_and_sorted() {
        let items = vec![item(1, "<b>one</b>"), item(2, "two")];
        let rows = item_rows(&items, now());
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[1].text_html, "&lt;b&gt;one&lt;/b&gt;");
    }

    #[test]
    fn test_relative_timestamps() {
        assert_eq!(format_timestamp("2024-05-10T11:59:30Z", now()), "just now");
        assert_eq!(format_timestamp("2024-05-10T11:59:00Z", now()), "1 minute ago");
        assert_eq!(format_timestamp("2024-05-10T11:15:00Z", now()), "45 minutes ago");
        assert_eq!(format_timestamp("2024-05-10T09:00:00Z", now()), "3 hours ago");
        assert_eq!(format_timestamp("2024-05-09T12:00:00", now()), "1 day ago");
        assert_eq!(format_timestamp("2024-04-01T08:00:00Z", now()), "4/1/2024");
    }

    #[test]
    fn test_unparsable_timestamp_is_verbatim() {
        assert_eq!(format_timestamp("yesterday-ish", now()), "yesterday-ish");
        assert_eq!(format_timestamp("", now()), "");
        assert_eq!(format_timestamp("123", now()), "123");
    }

    #[test]
    fn test_short_identity() {
        assert_eq!(
            short_identity("user_abcdefghi_lx1k2"),
            "👤 User: user_abcdefg..."
        );
    }
}
