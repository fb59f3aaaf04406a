use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `s` so it fits in `width` columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_owned();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Keeps the tail of `s` visible within `width` columns, so a cursor at the
/// end of a long input stays on screen. Returns the visible slice and the
/// number of columns skipped on the left.
pub fn tail_to_width(s: &str, width: usize) -> (&str, usize) {
    let total = s.width();
    if total <= width {
        return (s, 0);
    }

    let mut skipped = 0;
    for (index, c) in s.char_indices() {
        if total - skipped <= width {
            return (&s[index..], skipped);
        }
        skipped += c.width().unwrap_or(0);
    }
    ("", total)
}

/// Longest prefix of `s` that fits in `width` columns, cut without a marker.
pub fn head_to_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, c) in s.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &s[..index];
        }
    }
    s
}
