//! Helpers for the small amount of markup authored inside pack strings.
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").ok());
static SCHEDULE_MARKER: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\b(OPEN|LIVE):").ok());

/// Split a string on `<br>`, `<br/>` or `<br />` (any case).
#[must_use]
pub fn split_line_breaks(text: &str) -> Vec<&str> {
    match LINE_BREAK.as_ref() {
        Some(re) => re.split(text).map(str::trim).collect(),
        None => vec![text],
    }
}

/// Replace line-break markup with single spaces.
#[must_use]
pub fn strip_line_breaks(text: &str) -> String {
    split_line_breaks(text)
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMarker {
    Open,
    Live,
}

impl ScheduleMarker {
    /// `ui` label key carrying the localized marker text.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Live => "live",
        }
    }

    /// Marker text shown when the pack has no label for it.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Live => "LIVE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleSegment<'a> {
    Marker(ScheduleMarker),
    Text(&'a str),
}

/// Break a schedule line like `OPEN: 22:00 LIVE: 23:30` into marker and text runs.
#[must_use]
pub fn schedule_segments(schedule: &str) -> Vec<ScheduleSegment<'_>> {
    let Some(re) = SCHEDULE_MARKER.as_ref() else {
        return vec![ScheduleSegment::Text(schedule)];
    };
    let mut segments = Vec::new();
    let mut cursor = 0;
    for caps in re.captures_iter(schedule) {
        let (Some(whole), Some(word)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(ScheduleSegment::Text(&schedule[cursor..whole.start()]));
        }
        let marker = if word.as_str() == "OPEN" {
            ScheduleMarker::Open
        } else {
            ScheduleMarker::Live
        };
        segments.push(ScheduleSegment::Marker(marker));
        cursor = whole.end();
    }
    if cursor < schedule.len() {
        segments.push(ScheduleSegment::Text(&schedule[cursor..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_line_break_spellings() {
        assert_eq!(strip_line_breaks("Night<br/>Owl"), "Night Owl");
        assert_eq!(strip_line_breaks("Night<BR>Owl <br /> Party"), "Night Owl Party");
        assert_eq!(strip_line_breaks("Plain"), "Plain");
    }

    #[test]
    fn splits_title_lines() {
        assert_eq!(split_line_breaks("DRUNK<br/>OWL"), vec!["DRUNK", "OWL"]);
    }

    #[test]
    fn schedule_markers_become_segments() {
        let segments = schedule_segments("OPEN: 22:00 / LIVE: 23:30");
        assert_eq!(
            segments,
            vec![
                ScheduleSegment::Marker(ScheduleMarker::Open),
                ScheduleSegment::Text(" 22:00 / "),
                ScheduleSegment::Marker(ScheduleMarker::Live),
                ScheduleSegment::Text(" 23:30"),
            ]
        );
        assert_eq!(
            schedule_segments("from 22:00"),
            vec![ScheduleSegment::Text("from 22:00")]
        );
    }
}
