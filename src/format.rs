use comrak::{ComrakOptions, markdown_to_html};
use once_cell::sync::Lazy;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.hardbreaks = true;
    options
});

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

const HISTORY_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Render model output. Raw HTML in the text is escaped.
pub fn render_markdown(md: &str) -> String {
    markdown_to_html(md, &MARKDOWN_OPTIONS)
}

fn local_datetime(timestamp_millis: i64) -> Option<OffsetDateTime> {
    let nanos = i128::from(timestamp_millis) * 1_000_000;
    let mut datetime = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    Some(datetime)
}

pub fn format_message_time(timestamp_millis: i64) -> Option<String> {
    local_datetime(timestamp_millis)?.format(MESSAGE_TIME_FORMAT).ok()
}

pub fn format_history_date(timestamp_millis: i64) -> Option<String> {
    local_datetime(timestamp_millis)?.format(HISTORY_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_and_bold() {
        let html = render_markdown("## Next steps\n**Call your doctor**");
        assert!(html.contains("<h2>Next steps</h2>"));
        assert!(html.contains("<strong>Call your doctor</strong>"));
    }

    #[test]
    fn raw_html_is_not_passed_through() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn time_has_meridiem() {
        let formatted = format_message_time(0).unwrap();
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
        assert_eq!(formatted.len(), "12:00 AM".len());
    }

    #[test]
    fn date_is_iso_like() {
        let formatted = format_history_date(1_700_000_000_000).unwrap();
        assert_eq!(formatted.len(), 10);
        assert!(formatted.starts_with("2023-11-1"));
    }
}
