use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::AppConfig;
use crate::curve::{Scenario, Snapshot};
use crate::models::{CoffeeCount, Preset};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{chart, coffees, header, metrics, moments, statusbar, verdict};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub scenario: Scenario,
    pub should_quit: bool,
    /// Regenerated whenever the scenario changes.
    pub snapshot: Snapshot,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let scenario = Scenario::new(config.curve.preset, config.curve.default_coffees);
        let snapshot = scenario
            .render(config.display.hour_format)
            .context("Energy table is empty")?;
        Ok(App {
            view: View::Dashboard,
            config,
            scenario,
            should_quit: false,
            snapshot,
        })
    }

    fn set_scenario(&mut self, scenario: Scenario) {
        if scenario == self.scenario {
            return;
        }
        match scenario.render(self.config.display.hour_format) {
            Some(snapshot) => {
                log::debug!("Scenario changed to {:?}", scenario);
                self.scenario = scenario;
                self.snapshot = snapshot;
            }
            None => log::error!("Scenario {:?} produced an empty table", scenario),
        }
    }

    fn set_coffees(&mut self, coffees: CoffeeCount) {
        // The two-shot day does not respond to the slider.
        if self.scenario.preset == Preset::Slider {
            self.set_scenario(Scenario::new(Preset::Slider, coffees));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let coffees = self.scenario.coffees;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                self.set_coffees(coffees.decrement());
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
                self.set_coffees(coffees.increment());
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(count) = c
                    .to_digit(10)
                    .and_then(|d| CoffeeCount::new(d as i64).ok())
                {
                    self.set_coffees(count);
                }
            }
            KeyCode::Char('p') => {
                let next = Scenario::new(self.scenario.preset.toggled(), coffees);
                self.set_scenario(next);
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.scenario);
        statusbar::render(frame, outer_chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(outer_chunks[1]);

        // Left column: chart over the verdict
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(12), Constraint::Length(8)])
            .split(columns[0]);

        chart::render(frame, left_chunks[0], &self.snapshot);
        verdict::render(frame, left_chunks[1], &self.snapshot.verdict);

        // Right column: slider, metrics, moments
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // coffees
                Constraint::Length(6), // metrics
                Constraint::Min(0),    // moments
            ])
            .split(columns[1]);

        coffees::render(frame, right_chunks[0], &self.scenario);
        metrics::render(frame, right_chunks[1], &self.snapshot);
        moments::render(frame, right_chunks[2], &self.snapshot);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box, never past the bottom edge
        let top = area.height / 4;
        let popup_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + top,
            width: area.width / 2,
            height: (area.height / 2).max(10).min(area.height - top),
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [← →] h l   ", "One coffee less / more"),
            ("  [0-5]       ", "Jump to a coffee count"),
            ("  [p]         ", "Switch slider / two-shot day"),
            ("  [?]         ", "Toggle help"),
            ("  [q] / Esc   ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::crema().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, action) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(key, theme::crema()),
                Span::styled(action, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::crema()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::crema())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let mut app = App::new(config)?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new();

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                Event::Resize => {}
            }
        }
    })();

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourFormat;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    #[test]
    fn starts_at_configured_count() {
        let app = app();
        assert_eq!(app.scenario.coffees.get(), 2);
        assert_eq!(app.snapshot.stats.peak, 95);
    }

    #[test]
    fn arrows_move_the_slider_and_regenerate() {
        let mut app = app();
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.scenario.coffees.get(), 5);
        assert_eq!(app.snapshot.points[15].energy, 98);

        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.scenario.coffees.get(), 5);

        for _ in 0..7 {
            app.handle_key(press(KeyCode::Left));
        }
        assert_eq!(app.scenario.coffees.get(), 0);
        assert_eq!(app.snapshot.stats.peak, 35);
    }

    #[test]
    fn digits_jump_and_out_of_range_digits_are_ignored() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('4')));
        assert_eq!(app.scenario.coffees.get(), 4);
        app.handle_key(press(KeyCode::Char('9')));
        assert_eq!(app.scenario.coffees.get(), 4);
    }

    #[test]
    fn releases_are_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        app.handle_key(key);
        assert_eq!(app.scenario.coffees.get(), 2);
    }

    #[test]
    fn preset_toggle_freezes_the_slider() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('p')));
        assert_eq!(app.scenario.preset, Preset::TwoShot);
        assert_eq!(app.snapshot.points.len(), 33);

        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.scenario.coffees.get(), 2);

        app.handle_key(press(KeyCode::Char('p')));
        assert_eq!(app.scenario.preset, Preset::Slider);
        assert_eq!(app.snapshot.points.len(), 17);
    }

    #[test]
    fn help_and_quit() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('?')));
        assert_eq!(app.view, View::Help);
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.view, View::Dashboard);
        assert!(!app.should_quit);
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn renders_into_a_test_backend() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let screen = |terminal: &Terminal<TestBackend>| -> String {
            terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|c| c.symbol())
                .collect()
        };

        terminal.draw(|frame| app.draw(frame)).unwrap();
        let dashboard = screen(&terminal);
        assert!(dashboard.contains("Key Metrics"));
        assert!(dashboard.contains("Daily Energy Curve"));
        assert!(!dashboard.contains("Keybindings"));

        app.handle_key(press(KeyCode::Char('?')));
        terminal.draw(|frame| app.draw(frame)).unwrap();
        assert!(screen(&terminal).contains("Keybindings"));
    }

    #[test]
    fn help_fits_in_a_short_terminal() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('?')));
        for height in [12, 15, 19, 20] {
            let mut terminal = Terminal::new(TestBackend::new(80, height)).unwrap();
            terminal.draw(|frame| app.draw(frame)).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("Keybindings"));
    }

    #[test]
    fn hour_format_reaches_the_snapshot() {
        let mut config = AppConfig::default();
        config.display.hour_format = HourFormat::Compact;
        let mut app = App::new(config).unwrap();
        app.handle_key(press(KeyCode::Char('p')));
        assert_eq!(app.snapshot.format, HourFormat::Compact);
        assert!(app.snapshot.verdict.insights[0].starts_with("Morning coffee at 7h30"));
    }
}
