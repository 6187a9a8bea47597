//! Ruby (furigana) markup lexer
//!
//! Vocabulary and scene text carry readings inline:
//!
//! - `｜` opens an explicit base span (any characters up to the reading)
//! - `《…》` holds the reading for the span right before it
//! - a run of kanji without `｜` is picked up automatically
//!
//! `｜今日《きょう》は｜学校《がっこう》です。` lexes to
//! `[今日/きょう, は, 学校/がっこう, です。]`.

use serde::{Deserialize, Serialize};

const BASE_MARKER: char = '｜';
const READING_OPEN: char = '《';
const READING_CLOSE: char = '》';

/// One displayable piece of text, optionally with its reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubySegment {
    pub base: String,
    /// Empty for plain segments
    #[serde(default)]
    pub reading: String,
}

impl RubySegment {
    pub fn plain(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            reading: String::new(),
        }
    }

    pub fn annotated(base: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            reading: reading.into(),
        }
    }

    pub fn has_reading(&self) -> bool {
        !self.reading.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Plain,
    /// Collecting a base span; `explicit` when opened with `｜`
    Base { explicit: bool },
    Reading,
}

struct Lexer {
    segments: Vec<RubySegment>,
    base: String,
    reading: String,
    mode: Mode,
}

impl Lexer {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            base: String::new(),
            reading: String::new(),
            mode: Mode::Plain,
        }
    }

    fn flush_plain(&mut self) {
        if !self.base.is_empty() {
            let base = std::mem::take(&mut self.base);
            self.segments.push(RubySegment::plain(base));
        }
    }

    fn open_reading(&mut self) {
        // Only a base span can carry a reading; plain text before `《` stays plain
        if self.mode == Mode::Plain {
            self.flush_plain();
        }
        self.reading.clear();
        self.mode = Mode::Reading;
    }

    fn close_reading(&mut self) {
        let base = std::mem::take(&mut self.base);
        let reading = std::mem::take(&mut self.reading);
        if !base.is_empty() {
            if reading.is_empty() {
                self.segments.push(RubySegment::plain(base));
            } else {
                self.segments.push(RubySegment::annotated(base, reading));
            }
        }
        self.mode = Mode::Plain;
    }

    fn open_base(&mut self) {
        self.flush_plain();
        self.mode = Mode::Base { explicit: true };
    }

    fn push_text(&mut self, c: char) {
        match self.mode {
            Mode::Reading => self.reading.push(c),
            Mode::Base { explicit: true } => self.base.push(c),
            Mode::Base { explicit: false } => {
                if !is_kanji(c) {
                    self.flush_plain();
                    self.mode = Mode::Plain;
                }
                self.base.push(c);
            }
            Mode::Plain => {
                if is_kanji(c) {
                    self.flush_plain();
                    self.mode = Mode::Base { explicit: false };
                }
                self.base.push(c);
            }
        }
    }

    fn feed(&mut self, c: char) {
        match (c, self.mode) {
            // No nesting inside a reading
            (READING_OPEN | BASE_MARKER, Mode::Reading) => {}
            (READING_OPEN, _) => self.open_reading(),
            (READING_CLOSE, Mode::Reading) => self.close_reading(),
            // Stray closing bracket
            (READING_CLOSE, _) => {}
            (BASE_MARKER, _) => self.open_base(),
            _ => self.push_text(c),
        }
    }

    fn finish(mut self) -> Vec<RubySegment> {
        if self.mode == Mode::Reading {
            // Unterminated reading: keep both halves as plain text
            self.flush_plain();
            let reading = std::mem::take(&mut self.reading);
            if !reading.is_empty() {
                self.segments.push(RubySegment::plain(reading));
            }
        } else {
            self.flush_plain();
        }
        self.segments
    }
}

/// Split ruby markup into display segments
pub fn parse(text: &str) -> Vec<RubySegment> {
    let mut lexer = Lexer::new();
    for c in text.chars() {
        lexer.feed(c);
    }
    lexer.finish()
}

/// CJK unified ideographs, extension A and extension B
///
/// The iteration mark `々` (U+3005) is not in these ranges, so a run such
/// as `人々《ひとびと》` needs an explicit `｜` to keep its reading.
pub fn is_kanji(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FAF | 0x3400..=0x4DBF | 0x20000..=0x2A6DF
    )
}

/// The text without readings, as it reads on the page
pub fn plain_text(segments: &[RubySegment]) -> String {
    segments.iter().map(|s| s.base.as_str()).collect()
}

/// Readings inlined in full-width parentheses, e.g. `今日（きょう）は`
pub fn annotated_text(segments: &[RubySegment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.has_reading() {
                format!("{}（{}）", s.base, s.reading)
            } else {
                s.base.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_markers() {
        let segments = parse("｜今日《きょう》は｜学校《がっこう》です。");
        assert_eq!(
            segments,
            vec![
                RubySegment::annotated("今日", "きょう"),
                RubySegment::plain("は"),
                RubySegment::annotated("学校", "がっこう"),
                RubySegment::plain("です。"),
            ]
        );
    }

    #[test]
    fn test_explicit_span_may_contain_kana() {
        let segments = parse("｜消しゴム《けしごむ》");
        assert_eq!(segments, vec![RubySegment::annotated("消しゴム", "けしごむ")]);
    }

    #[test]
    fn test_kanji_run_detected_without_marker() {
        let segments = parse("給食《きゅうしょく》の時間");
        assert_eq!(
            segments,
            vec![
                RubySegment::annotated("給食", "きゅうしょく"),
                RubySegment::plain("の"),
                RubySegment::plain("時間"),
            ]
        );
    }

    #[test]
    fn test_plain_prefix_before_marker() {
        let segments = parse("ゴミ｜箱《ばこ》");
        assert_eq!(
            segments,
            vec![RubySegment::plain("ゴミ"), RubySegment::annotated("箱", "ばこ")]
        );
    }

    #[test]
    fn test_reading_after_kana_is_dropped() {
        let segments = parse("おかわり《おかわり》です");
        assert_eq!(
            segments,
            vec![RubySegment::plain("おかわり"), RubySegment::plain("です")]
        );
    }

    #[test]
    fn test_unmatched_close_ignored() {
        let segments = parse("ノート》です");
        assert_eq!(segments, vec![RubySegment::plain("ノートです")]);
    }

    #[test]
    fn test_empty_reading_keeps_base() {
        let segments = parse("｜机《》の上");
        assert_eq!(
            segments,
            vec![
                RubySegment::plain("机"),
                RubySegment::plain("の"),
                RubySegment::plain("上"),
            ]
        );
    }

    #[test]
    fn test_unterminated_reading() {
        let segments = parse("｜机《つく");
        assert_eq!(
            segments,
            vec![RubySegment::plain("机"), RubySegment::plain("つく")]
        );
    }

    #[test]
    fn test_trailing_plain_flushed() {
        let segments = parse("ありがとう");
        assert_eq!(segments, vec![RubySegment::plain("ありがとう")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_bases_cover_source_text() {
        let sources = [
            "｜朝《あさ》の｜会《かい》・｜帰《かえ》りの｜会《かい》",
            "チャイムが鳴って、｜休《やす》み｜時間《じかん》になりました。",
            "｜当番《とうばん》を｜決《き》めて、ほうきで｜床《ゆか》を｜掃《は》いたり",
        ];
        for source in sources {
            let segments = parse(source);

            // Strip markers and reading spans from the source
            let mut expected = String::new();
            let mut in_reading = false;
            for c in source.chars() {
                match c {
                    READING_OPEN => in_reading = true,
                    READING_CLOSE => in_reading = false,
                    BASE_MARKER => {}
                    _ if !in_reading => expected.push(c),
                    _ => {}
                }
            }
            assert_eq!(plain_text(&segments), expected);

            let marked = source.matches(READING_OPEN).count();
            assert_eq!(segments.iter().filter(|s| s.has_reading()).count(), marked);
        }
    }

    #[test]
    fn test_annotated_text() {
        let segments = parse("｜今日《きょう》は");
        assert_eq!(annotated_text(&segments), "今日（きょう）は");
        assert_eq!(plain_text(&segments), "今日は");
    }

    #[test]
    fn test_is_kanji() {
        assert!(is_kanji('漢'));
        assert!(is_kanji('㐀'));
        assert!(!is_kanji('か'));
        assert!(!is_kanji('カ'));
        assert!(!is_kanji('a'));
    }

    #[test]
    fn test_iteration_mark_needs_explicit_marker() {
        assert!(!is_kanji('々'));
        assert_eq!(
            parse("人々《ひとびと》"),
            vec![RubySegment::plain("人"), RubySegment::plain("々")]
        );
        assert_eq!(
            parse("｜人々《ひとびと》"),
            vec![RubySegment::annotated("人々", "ひとびと")]
        );
    }
}
