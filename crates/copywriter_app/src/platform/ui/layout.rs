use ratatui::layout::{Constraint, Layout, Margin, Rect};

pub const PROMPT_HEIGHT: u16 = 8;
pub const TOAST_HEIGHT: u16 = 3;
pub const TOAST_MAX_WIDTH: u16 = 76;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub prompt: Rect,
    pub buttons: Rect,
    pub response: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(PROMPT_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenLayout {
        title: chunks[0],
        prompt: chunks[1],
        buttons: chunks[2],
        response: chunks[3],
        status: chunks[4],
    }
}

/// Text area of the bordered response panel.
pub fn response_viewport(area: Rect) -> Rect {
    screen_layout(area).response.inner(Margin::new(1, 1))
}

/// Toast boxes stacked upward from the bottom-right corner, above the status line.
///
/// `widths` are the desired outer widths, newest first. Toasts that no longer
/// fit vertically are dropped, so the result may be shorter than `widths`.
pub fn toast_areas(area: Rect, widths: &[u16]) -> Vec<Rect> {
    let mut bottom = area.bottom().saturating_sub(1);
    let mut rects = Vec::with_capacity(widths.len());
    for &desired in widths {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let width = desired.min(TOAST_MAX_WIDTH).min(area.width);
        let y = bottom - TOAST_HEIGHT;
        rects.push(Rect::new(area.right() - width, y, width, TOAST_HEIGHT));
        bottom = y;
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_fill_the_screen_top_to_bottom() {
        let layout = screen_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.title, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.prompt, Rect::new(0, 1, 80, PROMPT_HEIGHT));
        assert_eq!(layout.buttons, Rect::new(0, 9, 80, 1));
        assert_eq!(layout.response, Rect::new(0, 10, 80, 13));
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn response_viewport_excludes_the_border() {
        let viewport = response_viewport(Rect::new(0, 0, 80, 24));

        assert_eq!(viewport, Rect::new(1, 11, 78, 11));
    }

    #[test]
    fn toasts_stack_upward_from_bottom_right() {
        let areas = toast_areas(Rect::new(0, 0, 80, 24), &[20, 30]);

        assert_eq!(areas, vec![Rect::new(60, 20, 20, 3), Rect::new(50, 17, 30, 3)]);
    }

    #[test]
    fn toasts_that_do_not_fit_are_dropped() {
        let areas = toast_areas(Rect::new(0, 0, 10, 7), &[100, 5, 5]);

        assert_eq!(areas, vec![Rect::new(0, 3, 10, 3), Rect::new(5, 0, 5, 3)]);
    }
}
