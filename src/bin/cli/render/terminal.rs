use vocab_quest_lib::ruby::RubySegment;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap text in a color when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Render segments inline, with readings in full-width parentheses after their base
pub fn render_ruby(segments: &[RubySegment], use_color: bool) -> String {
    segments
        .iter()
        .map(|s| {
            if s.has_reading() {
                let reading = format!("（{}）", s.reading);
                format!("{}{}", s.base, paint(&reading, Color::DIM, use_color))
            } else {
                s.base.clone()
            }
        })
        .collect()
}

/// Three-step mastery meter, e.g. `●●○`
pub fn mastery_meter(level: u8, max: u8) -> String {
    (0..max)
        .map(|i| if i < level { '\u{25CF}' } else { '\u{25CB}' })
        .collect()
}

/// Fixed-width progress bar for a fraction between 0 and 1
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Display width treating CJK and full-width characters as two columns
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| match c as u32 {
            0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F | 0xFF00..=0xFF60 | 0xFFE0..=0xFFE6 | 0x20000..=0x3FFFD => 2,
            _ => 1,
        })
        .sum()
}

/// Pad text on the right to a display width
pub fn pad(text: &str, width: usize) -> String {
    let used = display_width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}
