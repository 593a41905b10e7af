use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

const MESSAGE: &str = "✓ Email copied to clipboard";

/// Render the copy notice in the bottom right of `size` while acknowledged.
///
pub fn toast(frame: &mut Frame, size: Rect, state: &State) {
    if !state.is_contact_copied() {
        return;
    }
    let area = toast_rect(size, MESSAGE.chars().count() as u16 + 4);
    let style = styling::success_style(state.get_theme());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Span::styled(MESSAGE, style))
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        area,
    );
}

fn toast_rect(size: Rect, width: u16) -> Rect {
    let width = width.min(size.width);
    let height = 3.min(size.height);
    Rect {
        x: size.x + size.width - width,
        y: size.y + size.height - height,
        width,
        height,
    }
}
