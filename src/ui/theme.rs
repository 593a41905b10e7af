use log::*;
use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub on_primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// RGB color value.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ink()
    }
}

impl Theme {
    /// Dark theme with an off-white foreground and a warm accent.
    ///
    pub fn ink() -> Self {
        Theme {
            name: "ink".to_string(),
            primary: ColorSpec::new(245, 240, 230),    // Paper
            on_primary: ColorSpec::new(18, 18, 18),    // Ink
            banner: ColorSpec::new(245, 240, 230),     // Paper
            text: ColorSpec::new(228, 228, 228),       // Light gray
            text_muted: ColorSpec::new(140, 140, 140), // Mid gray
            success: ColorSpec::new(74, 222, 128),     // Green
            border_active: ColorSpec::new(245, 240, 230),
            border_normal: ColorSpec::new(64, 64, 64),
        }
    }

    /// Light theme, the inverse of ink.
    ///
    pub fn paper() -> Self {
        Theme {
            name: "paper".to_string(),
            primary: ColorSpec::new(18, 18, 18),
            on_primary: ColorSpec::new(250, 248, 242),
            banner: ColorSpec::new(18, 18, 18),
            text: ColorSpec::new(38, 38, 38),
            text_muted: ColorSpec::new(115, 115, 115),
            success: ColorSpec::new(22, 163, 74),
            border_active: ColorSpec::new(18, 18, 18),
            border_normal: ColorSpec::new(212, 212, 212),
        }
    }

    /// Names of the built-in themes.
    ///
    pub fn available() -> Vec<&'static str> {
        vec!["ink", "paper"]
    }

    /// Look up a theme by name, falling back to the default.
    ///
    pub fn by_name(name: &str) -> Self {
        match name {
            "ink" => Self::ink(),
            "paper" => Self::paper(),
            other => {
                warn!(
                    "Unknown theme '{}', using default. Available: {}.",
                    other,
                    Self::available().join(", ")
                );
                Self::default()
            }
        }
    }
}
