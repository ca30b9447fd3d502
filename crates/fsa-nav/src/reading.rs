//! Reading-time estimate and scroll-driven remaining-time readout.

use serde::Serialize;

pub const WORDS_PER_MINUTE: usize = 200;

/// Scroll offset past which the sticky progress header is shown.
pub const STICKY_THRESHOLD: f64 = 300.0;

/// Words in `text`, split on any whitespace.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rough `innerText` of an HTML document: tags become word breaks and
/// `<script>`/`<style>` bodies are dropped.
///
/// A `<` that does not open a tag (`a < b`, or one never closed by `>`)
/// is kept as text.
#[must_use]
pub fn visible_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let tag = &rest[open..];
        let opens_tag = tag[1..]
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphabetic() || matches!(ch, '/' | '!' | '?'));
        let close = tag.find('>').filter(|_| opens_tag);
        let Some(close) = close else {
            text.push('<');
            rest = &tag[1..];
            continue;
        };
        text.push(' ');
        let name = tag[1..close]
            .split(|ch: char| ch.is_whitespace() || ch == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        rest = &tag[close + 1..];
        if name == "script" || name == "style" {
            let end = format!("</{name}");
            rest = rest
                .to_ascii_lowercase()
                .find(&end)
                .and_then(|at| rest[at..].find('>').map(|gt| &rest[at + gt + 1..]))
                .unwrap_or_default();
        }
    }
    text.push_str(rest);
    text
}

/// `ceil(words / 200)` minutes. Empty text reads in zero minutes.
#[must_use]
pub fn reading_minutes(text: &str) -> u32 {
    let minutes = word_count(text).div_ceil(WORDS_PER_MINUTE);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// How far down the document the viewport is, in percent.
///
/// A document no taller than the viewport cannot scroll and counts as fully
/// read.
#[must_use]
pub fn scroll_percentage(scroll_y: f64, viewport_height: f64, document_height: f64) -> f64 {
    let max_scroll = document_height - viewport_height;
    if max_scroll <= 0.0 {
        return 100.0;
    }
    (scroll_y / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// `ceil(total * (1 - percent / 100))`, with `percent` clamped to 0..=100.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn remaining_minutes(total: u32, percent: f64) -> u32 {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    (f64::from(total) * (100.0 - percent) / 100.0).ceil() as u32
}

/// Badge text for the remaining time.
#[must_use]
pub fn remaining_label(minutes: u32) -> String {
    if minutes <= 1 {
        "Almost done".to_string()
    } else {
        format!("{minutes} min left")
    }
}

#[must_use]
pub fn sticky_visible(scroll_y: f64) -> bool {
    scroll_y > STICKY_THRESHOLD
}

/// One scroll event's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// What the indicator shows after a scroll event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingUpdate {
    pub percent: f64,
    pub remaining_minutes: u32,
    pub label: String,
    pub sticky_visible: bool,
}

/// Reading-progress state of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingProgress {
    pub title: String,
    pub words: usize,
    pub total_minutes: u32,
}

impl ReadingProgress {
    /// Measure `text`, the visible content of the page titled `title`.
    #[must_use]
    pub fn new(title: impl Into<String>, text: &str) -> Self {
        Self {
            title: title.into(),
            words: word_count(text),
            total_minutes: reading_minutes(text),
        }
    }

    /// Label before any scrolling.
    #[must_use]
    pub fn initial_label(&self) -> String {
        remaining_label(self.total_minutes)
    }

    #[must_use]
    pub fn at_percent(&self, percent: f64) -> ReadingUpdate {
        self.update(percent, 0.0)
    }

    #[must_use]
    pub fn on_scroll(&self, metrics: ScrollMetrics) -> ReadingUpdate {
        let percent = scroll_percentage(
            metrics.scroll_y,
            metrics.viewport_height,
            metrics.document_height,
        );
        self.update(percent, metrics.scroll_y)
    }

    fn update(&self, percent: f64, scroll_y: f64) -> ReadingUpdate {
        let remaining = remaining_minutes(self.total_minutes, percent);
        ReadingUpdate {
            percent,
            remaining_minutes: remaining,
            label: remaining_label(remaining),
            sticky_visible: sticky_visible(scroll_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(200, 1)]
    #[case(201, 2)]
    #[case(1000, 5)]
    fn minutes_round_up(#[case] count: usize, #[case] expected: u32) {
        assert_eq!(reading_minutes(&words(count)), expected);
    }

    #[test]
    fn whitespace_runs_count_once() {
        assert_eq!(word_count("  one\n\ttwo   three  "), 3);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(450.0, 50.0)]
    #[case(900.0, 100.0)]
    #[case(2000.0, 100.0)]
    #[case(-40.0, 0.0)]
    fn percentage_is_clamped(#[case] scroll_y: f64, #[case] expected: f64) {
        assert!((scroll_percentage(scroll_y, 600.0, 1500.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn short_documents_count_as_read() {
        assert!((scroll_percentage(0.0, 800.0, 600.0) - 100.0).abs() < f64::EPSILON);
        assert!((scroll_percentage(0.0, 800.0, 800.0) - 100.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(10, 0.0, 10)]
    #[case(10, 30.0, 7)]
    #[case(10, 35.0, 7)]
    #[case(10, 100.0, 0)]
    #[case(10, 150.0, 0)]
    #[case(3, 50.0, 2)]
    fn remaining_rounds_up(#[case] total: u32, #[case] percent: f64, #[case] expected: u32) {
        assert_eq!(remaining_minutes(total, percent), expected);
    }

    #[rstest]
    #[case(0, "Almost done")]
    #[case(1, "Almost done")]
    #[case(2, "2 min left")]
    fn labels(#[case] minutes: u32, #[case] expected: &str) {
        assert_eq!(remaining_label(minutes), expected);
    }

    #[test]
    fn scroll_updates_readout_and_sticky_header() {
        let page = ReadingProgress::new("Debt Strategy", &words(1000));
        assert_eq!(page.initial_label(), "5 min left");

        let top = page.on_scroll(ScrollMetrics {
            scroll_y: 300.0,
            viewport_height: 600.0,
            document_height: 3600.0,
        });
        assert!(!top.sticky_visible);
        assert_eq!(top.remaining_minutes, 5);

        let later = page.on_scroll(ScrollMetrics {
            scroll_y: 2400.0,
            viewport_height: 600.0,
            document_height: 3600.0,
        });
        assert!(later.sticky_visible);
        assert_eq!(later.remaining_minutes, 1);
        assert_eq!(later.label, "Almost done");
    }

    #[test]
    fn visible_text_drops_markup_and_scripts() {
        let html = r#"<html><head><style>p { color: red }</style>
            <script type="module">let hidden = "words here";</script></head>
            <body><h1>Budgeting</h1><p>Track every<b>dollar</b> you spend.</p></body></html>"#;
        let text = visible_text(html);
        assert_eq!(word_count(&text), 6);
        assert!(!text.contains("hidden"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn visible_text_of_plain_text_is_unchanged() {
        assert_eq!(visible_text("no markup here"), "no markup here");
    }

    #[test]
    fn stray_angle_brackets_stay_in_the_text() {
        let text = visible_text("<p>Keep debt < 30 percent of your limit every month</p>");
        assert_eq!(word_count(&text), 10);
        assert!(text.contains("every month"));

        let unclosed = visible_text("<p>Spend less than you earn <b");
        assert_eq!(word_count(&unclosed), 6);
        assert!(unclosed.contains("earn"));
    }
}
