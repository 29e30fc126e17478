//! Theme selector strip.
//!
//! One swatch per registered theme along the bottom row, with exactly
//! one carrying the active marker. Swatches are clickable; the hit test
//! maps a cell position back to the theme under it.

use bandi_core::ThemeName;
use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};

/// Cells occupied by one swatch: marker column plus two color cells.
const SWATCH_WIDTH: u16 = 3;

/// Selector state: which theme is marked active.
#[derive(Debug, Default)]
pub struct ThemePicker {
    active: ThemeName,
}

impl ThemePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as the single active selector.
    pub fn set_active(&mut self, name: ThemeName) {
        self.active = name;
    }

    pub fn active(&self) -> ThemeName {
        self.active
    }

    /// The theme under a click at (`column`, `row`), if the click landed
    /// on a swatch within the strip `area`.
    pub fn hit_test(&self, column: u16, row: u16, area: Rect) -> Option<ThemeName> {
        if row != area.y || column < area.x || column >= area.x + area.width {
            return None;
        }
        let idx = ((column - area.x) / SWATCH_WIDTH) as usize;
        ThemeName::ALL.get(idx).copied()
    }

    /// Render the strip: swatches, the active theme's name and primary
    /// hex, and key hints.
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for name in ThemeName::ALL {
            let theme = name.theme();
            if name == self.active {
                spans.push(Span::styled("▸", Style::new().fg(theme.hover.color())));
            } else {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled("██", Style::new().fg(theme.primary.color())));
        }

        let active = self.active.theme();
        spans.push(Span::styled(
            format!("  {} {}", self.active.as_str(), active.primary.hex()),
            Style::new().fg(active.glow.color()),
        ));
        spans.push("  q quit  ←/→ theme".dark_gray());
        Line::from(spans)
    }
}
