use copywriter_core::{AppViewModel, NotificationView, Severity};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::constants::*;
use super::layout::{screen_layout, toast_areas};
use super::markdown::render_markdown;

pub fn render(frame: &mut Frame, view: &AppViewModel, response_scroll: u16) {
    let area = frame.area();
    let layout = screen_layout(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        layout.title,
    );

    render_prompt(frame, view, layout.prompt);
    frame.render_widget(Paragraph::new(button_line(view)), layout.buttons);

    if view.show_response {
        render_response(frame, view, layout.response, response_scroll);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(TEXT_MUTED))),
        layout.status,
    );

    render_notifications(frame, &view.notifications, area);
}

fn render_prompt(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let border = if view.loading { BORDER_DIM } else { ACCENT };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(LABEL_PROMPT);
    let inner = block.inner(area);

    // Split on '\n' rather than lines() so a trailing Enter shows an empty line.
    let prompt_lines: Vec<&str> = view.prompt.split('\n').collect();
    let offset = prompt_lines.len().saturating_sub(usize::from(inner.height.max(1)));

    let paragraph = if view.prompt.is_empty() {
        Paragraph::new(Span::styled(
            PLACEHOLDER_PROMPT,
            Style::default().fg(TEXT_MUTED),
        ))
    } else {
        let text_style = if view.loading {
            Style::default().fg(TEXT_MUTED)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };
        let lines: Vec<Line> = prompt_lines
            .iter()
            .map(|line| Line::styled(line.to_string(), text_style))
            .collect();
        Paragraph::new(lines).scroll((clamp_u16(offset), 0))
    };
    frame.render_widget(paragraph.block(block), area);

    if !view.loading && inner.width > 0 && inner.height > 0 {
        let last = prompt_lines.last().copied().unwrap_or_default();
        let x = clamp_u16(last.width()).min(inner.width - 1);
        let y = clamp_u16(prompt_lines.len() - 1 - offset).min(inner.height - 1);
        frame.set_cursor_position(Position::new(inner.x + x, inner.y + y));
    }
}

fn button_line(view: &AppViewModel) -> Line<'static> {
    let enabled = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(TEXT_MUTED);

    let send = if view.can_submit {
        Span::styled(format!("[ {BUTTON_SEND} ]"), enabled)
    } else {
        Span::styled(format!("[ {BUTTON_SENDING} ]"), disabled)
    };
    let mut spans = vec![
        send,
        Span::raw(" "),
        Span::styled(format!("[ {BUTTON_CLEAR} ]"), enabled),
    ];
    if view.can_copy {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("[ {BUTTON_COPY} ]"), enabled));
    }
    Line::from(spans)
}

fn render_response(frame: &mut Frame, view: &AppViewModel, area: Rect, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_DIM))
        .title(LABEL_RESPONSE);
    let inner = block.inner(area);

    let paragraph = if view.loading {
        let frame_index = (view.spinner_step % SPINNER.len() as u64) as usize;
        Paragraph::new(Line::from(vec![
            Span::styled(SPINNER[frame_index], Style::default().fg(ACCENT)),
            Span::raw(" "),
            Span::styled(LABEL_WAITING, Style::default().fg(TEXT_MUTED)),
        ]))
    } else {
        response_paragraph(&view.response_markdown, inner.width).scroll((scroll, 0))
    };
    frame.render_widget(paragraph.block(block), area);
}

fn response_paragraph(markdown: &str, width: u16) -> Paragraph<'static> {
    Paragraph::new(render_markdown(markdown, width)).wrap(Wrap { trim: false })
}

/// Largest scroll offset that still fills `viewport` with reply rows.
///
/// Counts rows after wrapping, so a single long paragraph scrolls too.
pub fn max_response_scroll(markdown: &str, viewport: Rect) -> u16 {
    if viewport.width == 0 || viewport.height == 0 {
        return 0;
    }
    let rows = response_paragraph(markdown, viewport.width).line_count(viewport.width);
    clamp_u16(rows).saturating_sub(viewport.height)
}

fn render_notifications(frame: &mut Frame, notifications: &[NotificationView], area: Rect) {
    let newest_first: Vec<&NotificationView> = notifications.iter().rev().collect();
    let widths: Vec<u16> = newest_first
        .iter()
        .map(|n| clamp_u16(n.text.width()).saturating_add(4))
        .collect();

    for (notification, toast) in newest_first.iter().zip(toast_areas(area, &widths)) {
        let color = match notification.severity {
            Severity::Success => SUCCESS,
            Severity::Error => ERROR,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        frame.render_widget(Clear, toast);
        frame.render_widget(
            Paragraph::new(Span::styled(
                notification.text.clone(),
                Style::default().fg(TEXT_PRIMARY),
            ))
            .alignment(Alignment::Center)
            .block(block),
            toast,
        );
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_paragraph_scrolls_past_the_first_screen() {
        let reply = "x".repeat(300);

        assert_eq!(max_response_scroll(&reply, Rect::new(0, 0, 10, 10)), 20);
    }

    #[test]
    fn short_reply_does_not_scroll() {
        assert_eq!(max_response_scroll("Dobrý deň,\nOK", Rect::new(0, 0, 40, 10)), 0);
        assert_eq!(max_response_scroll("text", Rect::new(0, 0, 0, 0)), 0);
    }
}
