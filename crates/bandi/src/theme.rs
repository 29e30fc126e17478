//! Theme application.
//!
//! `ThemeController` turns a theme name into applied state: it updates
//! the applied color record, publishes the primary color into the shared
//! slot the particle field polls, moves the selector's active marker,
//! and persists the choice. Unknown names are ignored without touching
//! any state, and a refused persistence write never affects what is on
//! screen.

use bandi_config::{Config, ConfigStore};
use bandi_core::{ColorSlot, DEFAULT_THEME, Theme, ThemeName};

use crate::picker::ThemePicker;

/// The currently applied theme.
#[derive(Debug, Clone, Copy)]
pub struct AppliedTheme {
    pub name: ThemeName,
    pub colors: Theme,
}

/// Owns theme selection state end to end.
pub struct ThemeController {
    applied: AppliedTheme,
    picker: ThemePicker,
    slot: ColorSlot,
    store: ConfigStore,
    config: Config,
}

impl ThemeController {
    pub fn new(slot: ColorSlot, store: ConfigStore) -> Self {
        let config = store.load();
        Self {
            applied: AppliedTheme {
                name: DEFAULT_THEME,
                colors: DEFAULT_THEME.theme(),
            },
            picker: ThemePicker::new(),
            slot,
            store,
            config,
        }
    }

    /// Apply `name` if it is registered; unknown names are a no-op.
    pub fn apply_theme(&mut self, name: &str) {
        let Some(theme_name) = ThemeName::from_name(name) else {
            return;
        };
        let colors = theme_name.theme();
        self.applied = AppliedTheme {
            name: theme_name,
            colors,
        };
        self.slot.publish(colors.primary);
        self.picker.set_active(theme_name);
        self.config.theme = name.to_string();
        // The on-screen theme stays valid even when the write is refused
        let _ = self.store.save(&self.config);
    }

    /// Apply the persisted theme, falling back to the default when
    /// nothing valid was saved. Called once at startup.
    pub fn load_saved_theme(&mut self) {
        let saved = ThemeName::from_name(&self.config.theme).unwrap_or(DEFAULT_THEME);
        self.apply_theme(saved.as_str());
    }

    /// Apply the next theme in selector order.
    pub fn cycle_next(&mut self) {
        self.apply_theme(self.applied.name.next().as_str());
    }

    /// Apply the previous theme in selector order.
    pub fn cycle_prev(&mut self) {
        self.apply_theme(self.applied.name.prev().as_str());
    }

    pub fn applied(&self) -> AppliedTheme {
        self.applied
    }

    pub fn picker(&self) -> &ThemePicker {
        &self.picker
    }

    /// Configured particle count.
    pub fn particle_count(&self) -> usize {
        self.config.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandi_core::Rgb;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn slot() -> ColorSlot {
        ColorSlot::new(DEFAULT_THEME.theme().primary)
    }

    fn controller() -> ThemeController {
        ThemeController::new(slot(), ConfigStore::disabled())
    }

    fn temp_path(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("bandi-theme-{}-{}.toml", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_apply_known_theme() {
        let mut themes = controller();
        themes.apply_theme("blue");

        let applied = themes.applied();
        assert_eq!(applied.name, ThemeName::Blue);
        assert_eq!(applied.colors.primary, ThemeName::Blue.theme().primary);
        assert_eq!(themes.picker().active(), ThemeName::Blue);
    }

    #[test]
    fn test_apply_publishes_to_the_slot() {
        let slot = slot();
        let reader = slot.clone();
        let mut themes = ThemeController::new(slot, ConfigStore::disabled());

        themes.apply_theme("red");
        assert_eq!(reader.current(), Rgb::from_hex("#e74c3c").unwrap());
    }

    #[test]
    fn test_apply_every_registered_theme() {
        let mut themes = controller();
        for name in ThemeName::ALL {
            themes.apply_theme(name.as_str());
            assert_eq!(themes.applied().colors.primary, name.theme().primary);
            assert_eq!(themes.picker().active(), name);
        }
    }

    #[test]
    fn test_apply_unknown_theme_changes_nothing() {
        let mut themes = controller();
        themes.apply_theme("purple");

        themes.apply_theme("chartreuse");
        assert_eq!(themes.applied().name, ThemeName::Purple);
        assert_eq!(themes.picker().active(), ThemeName::Purple);
    }

    #[test]
    fn test_load_saved_theme_defaults_when_nothing_persisted() {
        let mut themes = controller();
        themes.load_saved_theme();
        assert_eq!(themes.applied().name, ThemeName::Gold);
        assert_eq!(themes.picker().active(), ThemeName::Gold);
    }

    #[test]
    fn test_load_saved_theme_defaults_on_unrecognized_value() {
        let path = temp_path("bogus");
        fs::write(&path, "theme = \"mauve\"\n").unwrap();
        let mut themes = ThemeController::new(slot(), ConfigStore::at(path.clone()));

        themes.load_saved_theme();
        assert_eq!(themes.applied().name, ThemeName::Gold);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_selection_survives_reload() {
        let path = temp_path("reload");
        let store = ConfigStore::at(path.clone());

        let mut first = ThemeController::new(slot(), store.clone());
        first.apply_theme("blue");
        assert_eq!(store.load().theme, "blue");

        let mut second = ThemeController::new(slot(), store);
        second.load_saved_theme();
        assert_eq!(
            second.applied().colors.primary,
            Rgb::from_hex("#4a90e2").unwrap()
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_cycle() {
        let mut themes = controller();
        themes.apply_theme("white");
        themes.cycle_next();
        assert_eq!(themes.applied().name, ThemeName::Gold); // wraps
        themes.cycle_prev();
        assert_eq!(themes.applied().name, ThemeName::White);
    }

    #[test]
    fn test_particle_count_from_config() {
        let path = temp_path("count");
        fs::write(&path, "particles = 25\n").unwrap();
        let themes = ThemeController::new(slot(), ConfigStore::at(path.clone()));
        assert_eq!(themes.particle_count(), 25);
        let _ = fs::remove_file(path);
    }
}
