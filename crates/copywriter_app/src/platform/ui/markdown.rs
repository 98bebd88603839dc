//! Maps markdown to styled terminal lines.
//!
//! Covers what the reply formatter produces: headings, dividers, paragraphs,
//! strong and emphasis spans, bullet and numbered lists.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::constants::{BOLD, DIVIDER, GREETING, HEADING, ITALIC, LIST_BULLET, TEXT_PRIMARY};

pub fn render_markdown(markdown: &str, width: u16) -> Vec<Line<'static>> {
    markdown.lines().map(|line| render_line(line, width)).collect()
}

fn render_line(line: &str, width: u16) -> Line<'static> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::default();
    }
    if matches!(trimmed, "---" | "***" | "___") {
        return Line::from(Span::styled(
            "─".repeat(usize::from(width.max(1))),
            Style::default().fg(DIVIDER),
        ));
    }
    if let Some((level, text)) = parse_heading(trimmed) {
        let color = if level == 3 { GREETING } else { HEADING };
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        return Line::from(inline_spans(text, style));
    }

    let paragraph = Style::default().fg(TEXT_PRIMARY);
    if let Some((indent, marker, text)) = parse_list_item(line) {
        let mut spans = vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(marker, Style::default().fg(LIST_BULLET)),
        ];
        spans.extend(inline_spans(text, paragraph));
        return Line::from(spans);
    }

    Line::from(inline_spans(line, paragraph))
}

fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    Some((level, text.trim()))
}

fn parse_list_item(line: &str) -> Option<(usize, String, &str)> {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();

    for bullet in ["- ", "* ", "+ "] {
        if let Some(text) = trimmed.strip_prefix(bullet) {
            return Some((indent, "• ".to_string(), text));
        }
    }

    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(text) = trimmed[digits..].strip_prefix(". ") {
            return Some((indent, format!("{}. ", &trimmed[..digits]), text));
        }
    }
    None
}

fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**").filter(|end| *end > 0) {
                flush(&mut spans, &mut plain, base);
                let strong = base.fg(BOLD).add_modifier(Modifier::BOLD);
                spans.extend(inline_spans(&after[..end], strong));
                rest = &after[end + 2..];
                continue;
            }
        } else if c == '*' || (c == '_' && !plain.chars().last().is_some_and(char::is_alphanumeric))
        {
            let after = &rest[1..];
            if let Some(end) = after.find(c).filter(|end| *end > 0) {
                flush(&mut spans, &mut plain, base);
                let emphasis = base.fg(ITALIC).add_modifier(Modifier::ITALIC);
                spans.extend(inline_spans(&after[..end], emphasis));
                rest = &after[end + 1..];
                continue;
            }
        }
        plain.push(c);
        rest = &rest[c.len_utf8()..];
    }

    flush(&mut spans, &mut plain, base);
    spans
}

fn flush(spans: &mut Vec<Span<'static>>, plain: &mut String, style: Style) {
    if !plain.is_empty() {
        spans.push(Span::styled(std::mem::take(plain), style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn greeting_heading_is_styled_without_markers() {
        let lines = render_markdown("### Vážený zákazník,", 20);
        assert_eq!(text_of(&lines[0]), "Vážený zákazník,");
        assert_eq!(lines[0].spans[0].style.fg, Some(GREETING));
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn divider_spans_the_width() {
        let lines = render_markdown("\n---\n", 5);
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[0]), "");
        assert_eq!(text_of(&lines[1]), "─────");
    }

    #[test]
    fn strong_and_emphasis_drop_their_markers() {
        let lines = render_markdown("**🔔 TIP:** pozri *toto* a snake_case_name", 40);
        let spans = &lines[0].spans;

        assert_eq!(text_of(&lines[0]), "🔔 TIP: pozri toto a snake_case_name");
        assert_eq!(spans[0].content, "🔔 TIP:");
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[2].content, "toto");
        assert!(spans[2].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        let lines = render_markdown("**Tím \n**🔔 TIP:** rýchlo**", 40);
        assert_eq!(text_of(&lines[0]), "**Tím ");
        assert_eq!(text_of(&lines[1]), "🔔 TIP: rýchlo**");
    }

    #[test]
    fn list_items_get_markers() {
        let lines = render_markdown("- item one\n  * nested\n2. second", 40);
        assert_eq!(text_of(&lines[0]), "• item one");
        assert_eq!(text_of(&lines[1]), "  • nested");
        assert_eq!(text_of(&lines[2]), "2. second");
    }

    #[test]
    fn italic_sign_off_is_not_a_bullet() {
        let lines = render_markdown("*S úctou,*", 40);
        assert_eq!(text_of(&lines[0]), "S úctou,");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::ITALIC));
    }
}
