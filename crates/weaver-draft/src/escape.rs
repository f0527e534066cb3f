use std::fmt::Write;

const NBSP: &str = "&nbsp;";

/// Escape a run of characters for HTML body text.
///
/// Newlines become `<br>\n` and `& < >` are escaped; everything else passes
/// through. Spaces in the leading and trailing runs of the escaped output are
/// then replaced with `&nbsp;` so browsers keep them. Interior spaces stay
/// literal.
pub fn render_text(chars: &[char]) -> String {
    let mut escaped = String::with_capacity(chars.len());
    for &c in chars {
        let _ = escape_char(&mut escaped, c);
    }
    collapse_edge_spaces(&escaped)
}

pub fn escape_char<W: Write>(writer: &mut W, c: char) -> std::fmt::Result {
    match c {
        '\n' => writer.write_str("<br>\n"),
        '&' => writer.write_str("&amp;"),
        '<' => writer.write_str("&lt;"),
        '>' => writer.write_str("&gt;"),
        _ => writer.write_char(c),
    }
}

fn collapse_edge_spaces(text: &str) -> String {
    let body = text.trim_start_matches(' ');
    let leading = text.len() - body.len();
    let core = body.trim_end_matches(' ');
    let trailing = body.len() - core.len();

    let mut out = String::with_capacity(text.len() + (leading + trailing) * (NBSP.len() - 1));
    out.extend(std::iter::repeat_n(NBSP, leading));
    out.push_str(core);
    out.extend(std::iter::repeat_n(NBSP, trailing));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(s: &str) -> String {
        render_text(&s.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_escapes_special_characters() {
        assert_eq!(render("&<>\n"), "&amp;&lt;&gt;<br>\n");
    }

    #[test]
    fn test_passes_other_characters_through() {
        assert_eq!(render("\"quoted\" 'text' é"), "\"quoted\" 'text' é");
    }

    #[test]
    fn test_edge_spaces_become_nbsp() {
        assert_eq!(render("  ab  "), "&nbsp;&nbsp;ab&nbsp;&nbsp;");
    }

    #[test]
    fn test_interior_spaces_untouched() {
        assert_eq!(render(" a b  c "), "&nbsp;a b  c&nbsp;");
    }

    #[test]
    fn test_all_spaces() {
        assert_eq!(render("   "), "&nbsp;&nbsp;&nbsp;");
    }

    #[test]
    fn test_space_after_line_break_is_interior() {
        assert_eq!(render("a\n b"), "a<br>\n b");
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(""), "");
    }
}
