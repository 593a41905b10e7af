use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use std::time::Duration;

const CARD_HEIGHT: u16 = 8;
const HEADER_HEIGHT: u16 = 3;
/// Scale a card is revealed from.
const REVEAL_SCALE: f64 = 0.95;

/// Render the project gallery, keeping the selected card in view. While the
/// section is entering, cards reveal one after another.
///
pub fn projects(
    frame: &mut Frame,
    size: Rect,
    lift: u16,
    fade: Style,
    since_entry: Option<Duration>,
    state: &State,
) {
    let theme = state.get_theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .horizontal_margin(2)
        .split(size);

    let header = Paragraph::new(vec![
        Line::from(Span::styled("PROJECTS", styling::banner_style(theme))),
        Line::default(),
    ])
    .style(fade)
    .scroll((lift, 0));
    frame.render_widget(header, chunks[0]);

    let projects = &state.get_portfolio().projects;
    if projects.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No projects yet.",
            styling::muted_text_style(theme),
        ))
        .style(fade);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let area = chunks[1];
    let selected = state.current_project_index();
    let visible = usize::from((area.height / CARD_HEIGHT).max(1));
    let first = first_visible(selected, visible);

    for (slot, (index, project)) in projects.iter().enumerate().skip(first).take(visible).enumerate() {
        let offset = u16::try_from(slot).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT);
        if offset >= area.height {
            break;
        }
        let reveal = state
            .get_transition_policy()
            .item_progress(index, since_entry);
        if reveal <= 0.0 {
            continue;
        }
        let card = scaled(
            Rect {
                y: area.y + offset,
                height: CARD_HEIGHT.min(area.height - offset),
                ..area
            },
            reveal,
        );

        let is_selected = index == selected;
        let mut title = vec![
            Span::styled(format!(" {:02} ", index + 1), styling::muted_text_style(theme)),
            Span::styled(format!("{} ", project.title), styling::active_block_title_style()),
        ];
        if project.link.is_some() {
            title.push(Span::styled("↗ ", styling::muted_text_style(theme)));
        }
        let border_style = if is_selected {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title))
            .border_style(border_style)
            .padding(Padding::horizontal(1));

        let body = vec![
            Line::from(Span::styled(
                project.tag.clone(),
                styling::muted_text_style(theme),
            )),
            Line::default(),
            Line::from(Span::styled(
                project.description.clone(),
                styling::normal_text_style(theme),
            )),
        ];
        let paragraph = Paragraph::new(body)
            .block(block)
            .style(styling::reveal_style(fade, reveal))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, card);
    }
}

/// Shrink `card` horizontally about its centre for a reveal at `progress`.
///
fn scaled(card: Rect, progress: f64) -> Rect {
    let scale = REVEAL_SCALE + (1.0 - REVEAL_SCALE) * progress.clamp(0.0, 1.0);
    let inset = ((1.0 - scale) * f64::from(card.width) / 2.0).round() as u16;
    let inset = inset.min(card.width / 2);
    Rect {
        x: card.x + inset,
        width: card.width - inset * 2,
        ..card
    }
}

/// Index of the first card to draw so that `selected` is within the window.
///
fn first_visible(selected: usize, visible: usize) -> usize {
    (selected + 1).saturating_sub(visible.max(1))
}
