use super::{information, projects, Frame};
use crate::state::{Section, State};
use crate::ui::widgets::styling;
use ratatui::layout::Rect;

/// Logical offset units per terminal row.
const UNITS_PER_ROW: f64 = 10.0;

/// Render the displayed section according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    let section_frame = state.section_frame();
    let (area, lift) = place(size, section_frame.offset);
    let fade = styling::fade_style(&section_frame);

    match section_frame.section {
        Section::Information => information::information(frame, area, lift, fade, state),
        Section::Projects => {
            projects::projects(frame, area, lift, fade, section_frame.since_entry, state)
        }
    }
}

/// Translate a vertical offset into the area to draw in. Positive offsets push
/// the section down; negative offsets are returned as rows to lift the
/// content by, since the area cannot move above its top edge.
///
fn place(size: Rect, offset: f64) -> (Rect, u16) {
    let rows = (offset / UNITS_PER_ROW).round() as i32;
    if rows > 0 {
        let rows = u16::try_from(rows).unwrap_or(u16::MAX).min(size.height);
        (
            Rect {
                y: size.y + rows,
                height: size.height - rows,
                ..size
            },
            0,
        )
    } else {
        (size, u16::try_from(rows.unsigned_abs()).unwrap_or(u16::MAX))
    }
}
