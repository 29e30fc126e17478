use std::io::stdout;
use std::time::Duration;

use bandi_config::ConfigStore;
use bandi_core::{ColorSlot, DEFAULT_THEME, PointerState};
use bandi_field::{ParticleField, canvas_size, cell_center};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::Rect;
use ratatui::{DefaultTerminal, Frame};

mod picker;
mod theme;

use theme::ThemeController;

/// Poll timeout between frames, roughly a 60 Hz redraw.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
    let terminal = ratatui::init();
    let result = run(terminal);
    ratatui::restore();
    let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    result
}

fn run(mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    App::new(size.width, size.height).run(terminal)
}

/// The main application which holds the field, pointer, and theme state.
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated particle field.
    field: ParticleField,
    /// Last known pointer position.
    pointer: PointerState,
    /// Theme selection, application, and persistence.
    themes: ThemeController,
    /// Area of the last rendered frame, for mouse hit testing.
    last_area: Rect,
}

impl App {
    /// Construct the app for a terminal of the given cell dimensions.
    pub fn new(cols: u16, rows: u16) -> Self {
        let slot = ColorSlot::new(DEFAULT_THEME.theme().primary);
        let mut themes = ThemeController::new(slot.clone(), ConfigStore::new());
        themes.load_saved_theme();

        let (width, height) = canvas_size(cols, rows);
        let field = ParticleField::new(themes.particle_count(), width, height, slot);

        Self {
            running: false,
            field,
            pointer: PointerState::default(),
            themes,
            last_area: Rect::default(),
        }
    }

    /// Run the application's main loop until cancelled.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders one frame: the particle field behind, the theme selector
    /// strip along the bottom edge.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        self.field.render(frame, &self.pointer);

        if area.height > 0 {
            frame.render_widget(self.themes.picker().line(), self.picker_area());
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout for a steady redraw rate.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.pointer.left(),
                Event::Resize(cols, rows) => {
                    let (width, height) = canvas_size(cols, rows);
                    self.field.resize(width, height);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c') | KeyCode::Right) => self.themes.cycle_next(),
            (_, KeyCode::Left) => self.themes.cycle_prev(),
            _ => {}
        }
    }

    /// Handles mouse events: movement drives the pointer tracker, a
    /// left click on the selector strip applies that theme.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let (x, y) = cell_center(mouse.column, mouse.row);
                self.pointer.moved(x, y);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let strip = self.picker_area();
                if let Some(name) = self.themes.picker().hit_test(mouse.column, mouse.row, strip) {
                    self.themes.apply_theme(name.as_str());
                }
            }
            _ => {}
        }
    }

    /// The bottom row holding the theme selector strip.
    fn picker_area(&self) -> Rect {
        let area = self.last_area;
        Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: area.height.min(1),
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
