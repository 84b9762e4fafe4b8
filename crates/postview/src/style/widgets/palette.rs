//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme (default).
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub surface_sunken: Color,
    pub background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // State colors
    pub hover: Color,
    pub selected: Color,
    pub accent_red: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,

    // Overlay backdrop
    pub scrim: Color,
    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.11, 0.35, 0.74),
            primary_light: Color::from_rgb(0.30, 0.52, 0.88),

            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(0.985, 0.985, 0.99),
            surface_sunken: Color::from_rgb(0.95, 0.955, 0.965),
            background: Color::from_rgb(0.97, 0.975, 0.98),

            text_primary: Color::from_rgb(0.12, 0.13, 0.16),
            text_secondary: Color::from_rgb(0.40, 0.43, 0.50),
            text_muted: Color::from_rgb(0.58, 0.61, 0.67),
            text_on_primary: Color::WHITE,

            hover: Color::from_rgb(0.94, 0.95, 0.97),
            selected: Color::from_rgb(0.90, 0.94, 1.0),
            accent_red: Color::from_rgb(0.82, 0.24, 0.27),

            border_subtle: Color::from_rgb(0.90, 0.91, 0.93),
            border_medium: Color::from_rgb(0.82, 0.84, 0.87),

            scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.64),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.36, 0.60, 0.98),
            primary_light: Color::from_rgb(0.52, 0.71, 1.0),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.18),
            surface_sunken: Color::from_rgb(0.09, 0.10, 0.11),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.08, 0.09, 0.11),

            hover: Color::from_rgb(0.17, 0.18, 0.21),
            selected: Color::from_rgb(0.14, 0.20, 0.30),
            accent_red: Color::from_rgb(1.0, 0.40, 0.42),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.78),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.30),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to dark mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
