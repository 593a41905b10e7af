use crate::state::SectionFrame;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for small uppercase section headings.
///
pub fn heading_style(theme: &Theme) -> Style {
    muted_text_style(theme).add_modifier(Modifier::BOLD)
}

/// Return the style for the hero banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the selected navigation tab.
///
pub fn active_tab_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.on_primary.to_color())
        .bg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for unselected navigation tabs.
///
pub fn inactive_tab_style(theme: &Theme) -> Style {
    muted_text_style(theme)
}

/// Return the style for success notices.
///
pub fn success_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.success.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the overall style for a section while it fades in or out.
///
pub fn fade_style(frame: &SectionFrame) -> Style {
    reveal_style(Style::default(), frame.opacity)
}

/// Dim `style` while `progress` is below one half.
///
pub fn reveal_style(style: Style, progress: f64) -> Style {
    if progress < 0.5 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}
