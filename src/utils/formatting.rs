//! Formatting utilities used for CLI outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut `s` to at most `width` terminal columns, ending with "…" when cut.
pub fn truncate_display(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// Polarity with explicit sign and three decimals: `+0.250`, `-0.100`.
pub fn fmt_polarity(value: f64) -> String {
    format!("{:+.3}", value)
}

/// Horizontal bar for text charts.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let n = ((value / max) * width as f64).round() as usize;
    "█".repeat(n.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_display_width() {
        assert_eq!(truncate_display("short", 10), "short");
        assert_eq!(truncate_display("a longer title", 8), "a longe…");
        assert_eq!(UnicodeWidthStr::width(truncate_display("日本語のタイトル", 7).as_str()), 7);
    }

    #[test]
    fn pads_wide_glyphs() {
        assert_eq!(pad_right("日本", 6), "日本  ");
    }

    #[test]
    fn polarity_has_sign() {
        assert_eq!(fmt_polarity(0.25), "+0.250");
        assert_eq!(fmt_polarity(-0.1), "-0.100");
    }

    #[test]
    fn bar_scales() {
        assert_eq!(bar(5.0, 10.0, 10).chars().count(), 5);
        assert_eq!(bar(0.0, 10.0, 10), "");
    }
}
