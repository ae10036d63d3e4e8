#![forbid(unsafe_code)]

//! Text measurement, wrapping, and truncation.
//!
//! Widths are terminal display widths (`unicode-width`), not byte or char
//! counts, so emoji icons and box-drawing glyphs measure correctly.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Bullet markers that get a hanging indent when wrapped.
const BULLETS: [&str; 3] = ["• ", "- ", "* "];

const ELLIPSIS: &str = "…";

/// Display width of a string in terminal columns.
#[inline]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Word-wrap `text` to `width` columns.
///
/// Explicit `\n` line breaks are kept, runs of whitespace collapse to one
/// space, and words longer than `width` are broken at grapheme boundaries.
/// Lines starting with a bullet marker wrap with a hanging indent under the
/// bullet's text. Returns no lines when `width` is 0.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }

        let indent = BULLETS
            .iter()
            .find(|b| trimmed.starts_with(**b))
            .map_or(0, |b| display_width(b))
            .min(width.saturating_sub(1));
        wrap_line(trimmed, width, indent, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, width: usize, hanging_indent: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;
    let mut first_line = true;

    for word in line.split_whitespace() {
        let word_width = display_width(word);
        let limit = if first_line { width } else { width - hanging_indent };

        if current_width > 0 && current_width + 1 + word_width <= limit {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            push_line(out, &current, first_line, hanging_indent);
            first_line = false;
            current.clear();
            current_width = 0;
        }

        let limit = if first_line { width } else { width - hanging_indent };
        if word_width <= limit {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard-break an over-long word.
        for grapheme in word.graphemes(true) {
            let g_width = display_width(grapheme);
            let limit = if first_line { width } else { width - hanging_indent };
            if current_width + g_width > limit && current_width > 0 {
                push_line(out, &current, first_line, hanging_indent);
                first_line = false;
                current.clear();
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += g_width;
        }
    }

    if current_width > 0 {
        push_line(out, &current, first_line, hanging_indent);
    }
}

fn push_line(out: &mut Vec<String>, text: &str, first_line: bool, hanging_indent: usize) {
    if first_line || hanging_indent == 0 {
        out.push(text.to_string());
    } else {
        out.push(format!("{}{text}", " ".repeat(hanging_indent)));
    }
}

/// Truncate `text` to at most `width` columns, ending with `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - display_width(ELLIPSIS);
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let g_width = display_width(grapheme);
        if used + g_width > budget {
            break;
        }
        out.push_str(grapheme);
        used += g_width;
    }
    out.push_str(ELLIPSIS);
    out
}
