// src/core/sanitize.rs

/// Glyphs the agenda center sprinkles into category headers. The mojibake
/// form shows up when the page was decoded as cp1252; strip it first.
pub const DECORATIVE_GLYPHS: &[&str] = &["â–¼", "▼", "▲", "►", "▶", "•"];

/// Collapse every whitespace run (newlines, tabs, NBSP included) to one space
/// and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Trim each fragment and glue them together with no separator.
pub fn join_trimmed<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts.into_iter().map(str::trim).collect()
}

/// Remove decorative glyphs, then surrounding whitespace.
pub fn strip_glyphs(s: &str) -> String {
    let mut out = s.to_string();
    for g in DECORATIVE_GLYPHS {
        if out.contains(g) {
            out = out.replace(g, "");
        }
    }
    out.trim().to_string()
}

/// Minimal escaping for text placed inside HTML element content or attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_all_whitespace_kinds() {
        assert_eq!(normalize_ws("  Regular\n\tMeeting \u{a0} Agenda \r\n"), "Regular Meeting Agenda");
        assert_eq!(normalize_ws(""), "");
        assert_eq!(normalize_ws(" \n\t "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["a  b", "\nJun 10,\t2024 ", "Board of\u{a0}\u{a0}Ed", "x", ""] {
            let once = normalize_ws(s);
            assert_eq!(normalize_ws(&once), once);
        }
    }

    #[test]
    fn glyphs_are_stripped_then_trimmed() {
        assert_eq!(strip_glyphs("▼ Board of Education"), "Board of Education");
        assert_eq!(strip_glyphs("â–¼Planning & Zoning "), "Planning & Zoning");
        assert_eq!(strip_glyphs("Town Council"), "Town Council");
    }

    #[test]
    fn join_trimmed_drops_fragment_padding() {
        assert_eq!(join_trimmed(["  ▼ ", "Board of ", " Education"]), "▼Board ofEducation");
    }

    #[test]
    fn escape_html_covers_markup_chars() {
        assert_eq!(escape_html(r#"P&Z <"B">"#), "P&amp;Z &lt;&quot;B&quot;&gt;");
    }
}
