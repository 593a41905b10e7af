use super::Frame;
use crate::content::Portfolio;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

const COPIED_LABEL: &str = "Address Copied!";
const RULE_WIDTH: usize = 48;
const PADDING: u16 = 2;

/// Render the information section.
///
pub fn information(frame: &mut Frame, size: Rect, lift: u16, fade: Style, state: &mut State) {
    let lines = information_lines(
        state.get_portfolio(),
        state.get_theme(),
        state.is_contact_copied(),
    );
    let rows = wrapped_height(&lines, size.width.saturating_sub(PADDING * 2));
    state.clamp_information_scroll(rows.saturating_sub(size.height / 2));
    let scroll = state.information_scroll().saturating_add(lift);

    let paragraph = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(PADDING)))
        .style(fade)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, size);
}

/// Build the information section's lines. Outbound links are numbered in the
/// same order as `Portfolio::contact_links`.
///
pub fn information_lines(portfolio: &Portfolio, theme: &Theme, copied: bool) -> Vec<Line<'static>> {
    let heading = styling::heading_style(theme);
    let text = styling::normal_text_style(theme);
    let muted = styling::muted_text_style(theme);
    let strong = text.add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    let mut link_number = 0;

    for name in &portfolio.identity.name {
        lines.push(Line::from(Span::styled(
            name.clone(),
            styling::banner_style(theme),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        portfolio.identity.headline.clone(),
        muted,
    )));

    let contact = &portfolio.contact;
    section_heading(&mut lines, "Contact", heading);
    if let Some(availability) = &contact.availability {
        lines.push(Line::from(vec![
            Span::styled("● ", styling::success_style(theme)),
            Span::styled(availability.clone(), text),
        ]));
    }
    let button = if copied {
        Span::styled(format!("[ {} ]", COPIED_LABEL), styling::success_style(theme))
    } else {
        Span::styled(format!("[ {} ]", contact.email), strong)
    };
    lines.push(Line::from(vec![button, Span::styled("  c: copy", muted)]));
    if let Some(scheduling) = &contact.scheduling {
        link_number += 1;
        lines.push(link_line(link_number, &scheduling.label, text, muted));
    }
    for social in &contact.socials {
        link_number += 1;
        lines.push(link_line(link_number, &social.label, text, muted));
    }

    section_heading(&mut lines, "About", heading);
    lines.push(Line::from(Span::styled(portfolio.about.clone(), text)));

    if !portfolio.focus.is_empty() {
        section_heading(&mut lines, "Focus", heading);
        let mut tags = Vec::new();
        for tag in &portfolio.focus {
            tags.push(Span::styled(format!("⟨{}⟩", tag), strong));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));
    }

    if let Some(education) = &portfolio.education {
        section_heading(&mut lines, "Education", heading);
        lines.push(Line::from(Span::styled(education.program.clone(), strong)));
        lines.push(Line::from(Span::styled(
            education.institution.clone(),
            muted,
        )));
        if let Some(expected) = &education.expected {
            lines.push(Line::from(Span::styled(expected.clone(), muted)));
        }
        if let Some(summary) = &education.summary {
            lines.push(Line::from(Span::styled(summary.clone(), text)));
        }
    }

    if !portfolio.experience.is_empty() {
        section_heading(&mut lines, "Work Experience", heading);
        for job in &portfolio.experience {
            lines.push(Line::from(vec![
                Span::styled(job.company.clone(), strong),
                Span::styled(format!("  {}", job.period), muted),
            ]));
            lines.push(Line::from(Span::styled(job.role.clone(), muted)));
        }
    }

    if !portfolio.skills.is_empty() {
        section_heading(&mut lines, "Technical Skills", heading);
        for group in &portfolio.skills {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", group.label), strong),
                Span::styled(group.items.clone(), muted),
            ]));
        }
    }

    if !portfolio.achievements.is_empty() {
        section_heading(&mut lines, "Achievements", heading);
        for achievement in &portfolio.achievements {
            lines.push(Line::from(vec![
                Span::styled("→ ", strong),
                Span::styled(achievement.clone(), text),
            ]));
        }
    }

    if let Some(cta) = &portfolio.call_to_action {
        section_heading(&mut lines, &cta.heading, heading);
        lines.push(Line::from(Span::styled(cta.body.clone(), text)));
        link_number += 1;
        lines.push(link_line(link_number, &cta.label, text, muted));
    }

    lines
}

/// Number of rows `lines` take once word-wrapped to `width` columns. Errs on
/// the high side: a word pushed onto a new row is charged the space before it.
///
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let rows: usize = lines.iter().map(|line| wrapped_rows(line, usize::from(width))).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn wrapped_rows(line: &Line, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    let mut rows = 1;
    let mut used = 0;
    for word in text.split(' ') {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
            continue;
        }
        let mut remaining = len;
        if used > 0 {
            rows += 1;
            remaining += 1;
        }
        while remaining > width {
            rows += 1;
            remaining -= width;
        }
        used = remaining;
    }
    rows
}

fn section_heading(lines: &mut Vec<Line<'static>>, title: &str, style: Style) {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "─".repeat(RULE_WIDTH),
        style.remove_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(title.to_uppercase(), style)));
}

fn link_line(number: usize, label: &str, text: Style, muted: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{}] ", number), muted),
        Span::styled(label.to_string(), text.add_modifier(Modifier::UNDERLINED)),
    ])
}
