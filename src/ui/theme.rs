use log::*;
use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// Color specification as an RGB triple.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::rose_pine_dawn()
    }
}

impl Theme {
    /// Names accepted by `Theme::by_name`.
    ///
    pub const NAMES: [&'static str; 2] = ["rose-pine-dawn", "tokyo-night"];

    /// Return the theme with the given name, falling back to the default
    /// theme for unknown names.
    ///
    pub fn by_name(name: &str) -> Self {
        match name {
            "rose-pine-dawn" => Self::rose_pine_dawn(),
            "tokyo-night" => Self::tokyo_night(),
            other => {
                warn!(
                    "Unknown theme '{}', expected one of {:?}; using default.",
                    other,
                    Self::NAMES
                );
                Self::default()
            }
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(161, 119, 255),    // Iris
            accent: ColorSpec::rgb(255, 109, 146),     // Rose
            text: ColorSpec::rgb(88, 82, 96),          // Text
            text_muted: ColorSpec::rgb(152, 147, 165), // Muted
            success: ColorSpec::rgb(40, 105, 131),     // Pine
            warning: ColorSpec::rgb(234, 157, 52),     // Gold
            error: ColorSpec::rgb(180, 99, 122),       // Love
            border_active: ColorSpec::rgb(161, 119, 255),
            border_normal: ColorSpec::rgb(152, 147, 165),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),
            accent: ColorSpec::rgb(187, 154, 247),
            text: ColorSpec::rgb(192, 202, 245),
            text_muted: ColorSpec::rgb(86, 95, 137),
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(224, 175, 104),
            error: ColorSpec::rgb(247, 118, 142),
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(86, 95, 137),
        }
    }
}
