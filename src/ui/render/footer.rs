use super::Frame;
use crate::state::{Section, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LEFT_LABEL: &str = "© 2025";
const RIGHT_LABEL: &str = "PORTFOLIO";

/// Format the key hints for the active section.
///
fn hints_for_section(section: Section) -> &'static str {
    match section {
        Section::Information => {
            "i/p/tab: switch  j/k: scroll  c: copy email  1-9: open link  d: log  q: quit"
        }
        Section::Projects => {
            "i/p/tab: switch  j/k: select  enter: open  c: copy email  d: log  q: quit"
        }
    }
}

/// Render the bottom navigation bar.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.text.to_color()));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .split(rows[0]);

    let corner = styling::heading_style(theme);
    frame.render_widget(
        Paragraph::new(Span::styled(LEFT_LABEL, corner)).alignment(Alignment::Left),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(tabs(state)).alignment(Alignment::Center),
        columns[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(RIGHT_LABEL, corner)).alignment(Alignment::Right),
        columns[2],
    );

    let hints = Paragraph::new(Span::styled(
        hints_for_section(state.active_section()),
        styling::muted_text_style(theme),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hints, rows[1]);
}

/// Navigation tabs with the active section highlighted.
///
fn tabs(state: &State) -> Line<'static> {
    let theme = state.get_theme();
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *section == state.active_section() {
            styling::active_tab_style(theme)
        } else {
            styling::inactive_tab_style(theme)
        };
        spans.push(Span::styled(
            format!(" {} ", section.label().to_uppercase()),
            style,
        ));
    }
    Line::from(spans)
}
