use anyhow::Result;
use crossterm::event::KeyCode;
use keyhue::avatar::{Avatar, initials};
use keyhue::config::{Palette, Settings};
use keyhue::{Color, ColorGenerator};
use tracing::{debug, warn};

use super::AppEvent;

/// Letters shown on each preview tile.
const TILE_INITIALS: usize = 2;

/// The top-level state of the palette preview.
pub struct App {
    pub running: bool,
    pub keys: Vec<String>,
    pub selected_key_index: usize,
    pub input: String,
    pub random_swatch: Option<Color>,
    pub status: Option<String>,
    settings: Settings,
    palette_names: Vec<String>,
    palette_index: usize,
    palette: Palette,
}

impl App {
    pub fn new(settings: Settings, keys: Vec<String>) -> Result<Self> {
        let palette_names = settings.palette_names();
        let palette_index = palette_names
            .iter()
            .position(|name| *name == settings.palette)
            .unwrap_or(0);
        let palette = settings.generator(Some(palette_names[palette_index].as_str()))?;
        Ok(Self {
            running: true,
            keys,
            selected_key_index: 0,
            input: String::new(),
            random_swatch: None,
            status: None,
            settings,
            palette_names,
            palette_index,
            palette,
        })
    }

    pub fn generator(&self) -> &ColorGenerator {
        &self.palette
    }

    pub fn palette_name(&self) -> &str {
        &self.palette_names[self.palette_index]
    }

    /// Tile for `key` in the active palette.
    pub fn avatar_for(&self, key: &str) -> Avatar {
        Avatar::builder()
            .round()
            .with_border(1)
            .bold()
            .build(&initials(key, TILE_INITIALS), self.palette.get_color(key))
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.running = false,
            KeyCode::Enter => self.add_key(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Tab => self.cycle_palette(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            KeyCode::Delete => self.remove_selected(),
            KeyCode::F(5) => self.random_swatch = Some(self.palette.random_color()),
            _ => {}
        }
    }

    fn add_key(&mut self) {
        let key = self.input.trim().to_string();
        self.input.clear();
        if key.is_empty() {
            return;
        }
        if let Some(index) = self.keys.iter().position(|k| *k == key) {
            self.selected_key_index = index;
            self.status = Some(format!("'{key}' is already listed"));
            return;
        }
        self.status = None;
        self.keys.push(key);
        self.selected_key_index = self.keys.len() - 1;
    }

    fn remove_selected(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        self.keys.remove(self.selected_key_index);
        if self.selected_key_index >= self.keys.len() {
            self.selected_key_index = self.keys.len().saturating_sub(1);
        }
    }

    fn select_prev(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        if self.selected_key_index == 0 {
            self.selected_key_index = self.keys.len() - 1;
        } else {
            self.selected_key_index -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        self.selected_key_index = (self.selected_key_index + 1) % self.keys.len();
    }

    /// Moves to the next palette, skipping custom palettes that fail to load.
    fn cycle_palette(&mut self) {
        let count = self.palette_names.len();
        let mut skipped = None;
        for step in 1..=count {
            let index = (self.palette_index + step) % count;
            let name = &self.palette_names[index];
            match self.settings.generator(Some(name.as_str())) {
                Ok(palette) => {
                    debug!(palette = %name, "switched palette");
                    self.palette = palette;
                    self.palette_index = index;
                    self.random_swatch = None;
                    self.status = skipped;
                    return;
                }
                Err(err) => {
                    warn!(palette = %name, error = %err, "skipping palette");
                    skipped = Some(format!("Skipped {name}: {err}"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Settings::default(), Vec::new()).unwrap()
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(AppEvent::KeyPress(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typed_key_is_added_on_enter() {
        let mut app = app();
        type_str(&mut app, " ada lovelace ");
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert_eq!(app.keys, ["ada lovelace"]);
        assert!(app.input.is_empty());

        let avatar = app.avatar_for("ada lovelace");
        assert_eq!(avatar.text(), "AL");
        assert_eq!(avatar.color(), app.generator().get_color("ada lovelace"));
        assert_eq!(avatar.border_color(), avatar.color().darker_shade());
    }

    #[test]
    fn blank_and_duplicate_keys_are_ignored() {
        let mut app = App::new(Settings::default(), vec!["a".into(), "b".into()]).unwrap();
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        type_str(&mut app, "a");
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert_eq!(app.keys, ["a", "b"]);
        assert_eq!(app.selected_key_index, 0);
        assert!(app.status.is_some());
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = app();
        type_str(&mut app, "abc");
        app.update(AppEvent::KeyPress(KeyCode::Backspace));
        assert_eq!(app.input, "ab");
    }

    #[test]
    fn tab_cycles_through_palettes() {
        let mut app = app();
        assert_eq!(app.palette_name(), "default");
        app.update(AppEvent::KeyPress(KeyCode::Tab));
        assert_eq!(app.palette_name(), "material");
        assert_eq!(app.generator().len(), 17);
        app.update(AppEvent::KeyPress(KeyCode::Tab));
        assert_eq!(app.palette_name(), "default");
        assert_eq!(app.generator().len(), 9);
    }

    #[test]
    fn broken_palette_is_skipped() {
        let mut settings = Settings {
            palette: "material".to_string(),
            ..Settings::default()
        };
        settings.palettes.insert("empty".to_string(), Vec::new());
        let mut app = App::new(settings, Vec::new()).unwrap();
        app.update(AppEvent::KeyPress(KeyCode::Tab));
        assert_eq!(app.palette_name(), "default");
        assert!(app.status.as_deref().is_some_and(|s| s.contains("empty")));
    }

    #[test]
    fn starts_on_configured_palette() {
        let settings = Settings {
            palette: "material".to_string(),
            ..Settings::default()
        };
        let app = App::new(settings, Vec::new()).unwrap();
        assert_eq!(app.palette_name(), "material");
    }

    #[test]
    fn selection_wraps_and_survives_removal() {
        let mut app = App::new(
            Settings::default(),
            vec!["a".into(), "b".into(), "c".into()],
        )
        .unwrap();
        app.update(AppEvent::KeyPress(KeyCode::Up));
        assert_eq!(app.selected_key_index, 2);
        app.update(AppEvent::KeyPress(KeyCode::Delete));
        assert_eq!(app.keys, ["a", "b"]);
        assert_eq!(app.selected_key_index, 1);
        app.update(AppEvent::KeyPress(KeyCode::Down));
        assert_eq!(app.selected_key_index, 0);
        app.update(AppEvent::KeyPress(KeyCode::Delete));
        app.update(AppEvent::KeyPress(KeyCode::Delete));
        assert!(app.keys.is_empty());
        app.update(AppEvent::KeyPress(KeyCode::Delete));
        assert_eq!(app.selected_key_index, 0);
    }

    #[test]
    fn f5_rolls_a_palette_color() {
        let mut app = app();
        app.update(AppEvent::KeyPress(KeyCode::F(5)));
        let swatch = app.random_swatch.unwrap();
        assert!(app.generator().colors().contains(&swatch));
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.update(AppEvent::KeyPress(KeyCode::Esc));
        assert!(!app.running);
    }
}
