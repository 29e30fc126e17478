//! Color theme registry.
//!
//! A fixed mapping from theme name to a {primary, hover, glow} color
//! triple. Lookup by name is partial; unknown names return `None` so a
//! bad selection can never corrupt the applied state.

use crate::color::Rgb;

/// Theme applied when nothing valid has been persisted.
pub const DEFAULT_THEME: ThemeName = ThemeName::Gold;

/// The three colors a theme carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Rgb,
    pub hover: Rgb,
    pub glow: Rgb,
}

impl Theme {
    const fn new(primary: Rgb, hover: Rgb, glow: Rgb) -> Self {
        Self {
            primary,
            hover,
            glow,
        }
    }
}

/// Names of the registered themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Gold,
    Blue,
    Purple,
    Green,
    Red,
    Cyan,
    Orange,
    Pink,
    Teal,
    Indigo,
    Lime,
    White,
}

impl ThemeName {
    /// Every registered theme, in selector order.
    pub const ALL: [ThemeName; 12] = [
        Self::Gold,
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Red,
        Self::Cyan,
        Self::Orange,
        Self::Pink,
        Self::Teal,
        Self::Indigo,
        Self::Lime,
        Self::White,
    ];

    /// Look up a theme by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gold" => Some(Self::Gold),
            "blue" => Some(Self::Blue),
            "purple" => Some(Self::Purple),
            "green" => Some(Self::Green),
            "red" => Some(Self::Red),
            "cyan" => Some(Self::Cyan),
            "orange" => Some(Self::Orange),
            "pink" => Some(Self::Pink),
            "teal" => Some(Self::Teal),
            "indigo" => Some(Self::Indigo),
            "lime" => Some(Self::Lime),
            "white" => Some(Self::White),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Red => "red",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Teal => "teal",
            Self::Indigo => "indigo",
            Self::Lime => "lime",
            Self::White => "white",
        }
    }

    /// The next theme in selector order, wrapping at the end.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous theme in selector order, wrapping at the start.
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The color triple for this theme.
    pub fn theme(&self) -> Theme {
        match self {
            Self::Gold => Theme::new(
                Rgb::new(0xd4, 0xaf, 0x37),
                Rgb::new(0xf4, 0xd0, 0x3f),
                Rgb::new(0xff, 0xd7, 0x00),
            ),
            Self::Blue => Theme::new(
                Rgb::new(0x4a, 0x90, 0xe2),
                Rgb::new(0x67, 0xb5, 0xff),
                Rgb::new(0x5d, 0xad, 0xe2),
            ),
            Self::Purple => Theme::new(
                Rgb::new(0x9b, 0x59, 0xb6),
                Rgb::new(0xc0, 0x84, 0xfc),
                Rgb::new(0xa7, 0x8b, 0xfa),
            ),
            Self::Green => Theme::new(
                Rgb::new(0x2e, 0xcc, 0x71),
                Rgb::new(0x4a, 0xde, 0x80),
                Rgb::new(0x34, 0xd3, 0x99),
            ),
            Self::Red => Theme::new(
                Rgb::new(0xe7, 0x4c, 0x3c),
                Rgb::new(0xf8, 0x71, 0x71),
                Rgb::new(0xef, 0x44, 0x44),
            ),
            Self::Cyan => Theme::new(
                Rgb::new(0x1a, 0xbc, 0x9c),
                Rgb::new(0x22, 0xd3, 0xee),
                Rgb::new(0x06, 0xb6, 0xd4),
            ),
            Self::Orange => Theme::new(
                Rgb::new(0xf3, 0x9c, 0x12),
                Rgb::new(0xfb, 0x92, 0x3c),
                Rgb::new(0xfd, 0xba, 0x74),
            ),
            Self::Pink => Theme::new(
                Rgb::new(0xe9, 0x1e, 0x63),
                Rgb::new(0xf4, 0x72, 0xb6),
                Rgb::new(0xf9, 0xa8, 0xd4),
            ),
            Self::Teal => Theme::new(
                Rgb::new(0x00, 0x96, 0x88),
                Rgb::new(0x14, 0xb8, 0xa6),
                Rgb::new(0x2d, 0xd4, 0xbf),
            ),
            Self::Indigo => Theme::new(
                Rgb::new(0x3f, 0x51, 0xb5),
                Rgb::new(0x81, 0x8c, 0xf8),
                Rgb::new(0xa5, 0xb4, 0xfc),
            ),
            Self::Lime => Theme::new(
                Rgb::new(0x8b, 0xc3, 0x4a),
                Rgb::new(0xa3, 0xe6, 0x35),
                Rgb::new(0xbe, 0xf2, 0x64),
            ),
            Self::White => Theme::new(
                Rgb::new(0xe0, 0xe0, 0xe0),
                Rgb::new(0xff, 0xff, 0xff),
                Rgb::new(0xf5, 0xf5, 0xf5),
            ),
        }
    }
}
