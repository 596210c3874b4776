//! Terminal control surface: waveform selector, dial panel,
//! keyboard drawing, outcome console, and status bar.

pub mod console;
pub mod dial_panel;
pub mod help;
pub mod keybindings;
pub mod keyboard_view;
pub mod status;

pub use console::{Console, EntryKind};
pub use dial_panel::{DialPanel, DialRow};
pub use help::HelpScreen;
pub use keybindings::{map_key, Action};
pub use keyboard_view::{render_rows, KeyboardRows};
pub use status::StatusInfo;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

use crate::keyboard::{self, KeyDescriptor};
use crate::params::{ParameterStore, Waveform};
use crate::playback::{
    playback_channel, spawn_play, PlayOutcome, PlaybackDispatcher, PlaybackReceiver,
    PlaybackSender,
};

/// Input poll interval for the event loop.
const POLL_INTERVAL_MS: u64 = 50;
/// Plays allowed in flight at once; further presses are dropped with a notice.
pub const MAX_IN_FLIGHT: usize = 4;
/// Console rows when the console is shown.
const CONSOLE_HEIGHT: u16 = 8;

/// The control surface state.
pub struct App {
    pub store: ParameterStore,
    pub dial_panel: DialPanel,
    pub keyboard: Vec<KeyDescriptor>,
    pub status: StatusInfo,
    pub console: Console,
    pub console_visible: bool,
    pub help_screen: HelpScreen,
    pub should_quit: bool,
    dispatcher: Arc<PlaybackDispatcher>,
    playback_tx: PlaybackSender,
    playback_rx: PlaybackReceiver,
    next_ticket: u64,
}

impl App {
    /// Create an app over an initial store, drawing `keyboard_keys` white keys.
    pub fn new(store: ParameterStore, dispatcher: PlaybackDispatcher, keyboard_keys: usize) -> Self {
        let (playback_tx, playback_rx) = playback_channel();
        Self {
            store,
            dial_panel: DialPanel::default(),
            keyboard: keyboard::generate(keyboard_keys),
            status: StatusInfo::new(dispatcher.endpoint()),
            console: Console::default(),
            console_visible: true,
            help_screen: HelpScreen::default(),
            should_quit: false,
            dispatcher: Arc::new(dispatcher),
            playback_tx,
            playback_rx,
            next_ticket: 1,
        }
    }

    /// Process an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Play => {
                self.play();
            }
            Action::SelectNextDial => self.dial_panel.select_next(self.store.len()),
            Action::SelectPrevDial => self.dial_panel.select_prev(self.store.len()),
            Action::NudgeDial(steps) => self.nudge_selected(steps),
            Action::NextWaveform => self.select_waveform(self.store.waveform().next()),
            Action::PrevWaveform => self.select_waveform(self.store.waveform().prev()),
            Action::ToggleHelp => self.help_screen.toggle(),
            Action::ToggleConsole => self.console_visible = !self.console_visible,
            Action::Escape => self.help_screen.hide(),
        }
    }

    /// Send the current parameters in the background. Returns the ticket the
    /// outcome will carry, or `None` when [`MAX_IN_FLIGHT`] plays are already
    /// waiting on the backend.
    pub fn play(&mut self) -> Option<u64> {
        if self.status.in_flight >= MAX_IN_FLIGHT {
            log::debug!("play dropped, {} requests in flight", self.status.in_flight);
            self.console.push(
                EntryKind::Busy,
                format!("{MAX_IN_FLIGHT} requests still in flight, press ignored"),
            );
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        spawn_play(
            Arc::clone(&self.dispatcher),
            self.store.clone(),
            ticket,
            self.playback_tx.clone(),
        );
        self.status.request_sent();
        self.console
            .push(EntryKind::Info, format!("#{ticket} sent ({})", self.store.waveform()));
        Some(ticket)
    }

    /// Apply finished plays to the status bar and console. Returns how many
    /// were processed.
    pub fn process_playback_events(&mut self) -> usize {
        let events = self.playback_rx.drain();
        let count = events.len();
        for event in events {
            let kind = match &event.outcome {
                PlayOutcome::Success(_) => EntryKind::Info,
                PlayOutcome::AlreadyPlaying => EntryKind::Busy,
                PlayOutcome::Failure(_) => EntryKind::Error,
            };
            self.console
                .push(kind, format!("#{} {}", event.ticket, event.outcome));
            self.status.request_finished(event.outcome);
        }
        count
    }

    fn nudge_selected(&mut self, steps: i32) {
        let Some(dial) = self.dial_panel.selected_dial(&self.store) else {
            return;
        };
        let id = dial.id.clone();
        let value = dial.nudged(steps);
        log::debug!("dial {id} -> {value}");
        self.store = self.store.update_value(&id, value);
    }

    fn select_waveform(&mut self, waveform: Waveform) {
        log::debug!("waveform -> {waveform}");
        self.store = self.store.with_waveform(waveform);
    }

    /// Draw the UI.
    pub fn draw(&self, frame: &mut Frame) {
        let size = frame.area();
        let dial_height = self.store.len() as u16 + 2;
        let console_height = if self.console_visible { CONSOLE_HEIGHT } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(dial_height.min(size.height.saturating_sub(9))),
                Constraint::Length(4),
                Constraint::Length(console_height),
                Constraint::Length(1),
            ])
            .split(size);

        self.draw_waveforms(frame, chunks[0]);
        self.draw_dials(frame, chunks[1]);
        self.draw_keyboard(frame, chunks[2]);
        if self.console_visible {
            self.draw_console(frame, chunks[3]);
        }
        self.draw_status(frame, chunks[4]);

        if self.help_screen.visible {
            self.draw_help(frame, size);
        }
    }

    fn draw_waveforms(&self, frame: &mut Frame, area: Rect) {
        let current = self.store.waveform();
        let mut spans = Vec::new();
        for &w in Waveform::all() {
            let style = if w == current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", w.label()), style));
            spans.push(Span::raw(" "));
        }
        let block = Block::default().title(" Waveform ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn draw_dials(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" Dials ").borders(Borders::ALL);
        if self.store.is_empty() {
            frame.render_widget(Paragraph::new("(no dials)").block(block), area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (i, row) in self.dial_panel.rows(&self.store).iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let marker = if row.selected { ">" } else { " " };
            let color = if row.selected { Color::Yellow } else { Color::Blue };
            let gauge = Gauge::default()
                .label(format!("{marker} {}: {}", row.label, row.value_text))
                .ratio(row.ratio)
                .gauge_style(Style::default().fg(color));
            frame.render_widget(gauge, Rect::new(inner.x, y, inner.width, 1));
        }
    }

    fn draw_keyboard(&self, frame: &mut Frame, area: Rect) {
        let rows = render_rows(&self.keyboard);
        let lines = vec![Line::from(rows.black), Line::from(rows.white)];
        let block = Block::default().title(" Keyboard ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_console(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" Console ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.console.is_empty() {
            let paragraph =
                Paragraph::new("(nothing played yet)").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(paragraph, inner);
            return;
        }

        let lines: Vec<Line> = self
            .console
            .recent(inner.height as usize)
            .into_iter()
            .map(|entry| {
                let elapsed = entry
                    .timestamp
                    .elapsed()
                    .map(|d| format!("{:.0}s ago", d.as_secs_f64()))
                    .unwrap_or_else(|_| "?".to_string());
                let color = match entry.kind {
                    EntryKind::Info => Color::Green,
                    EntryKind::Busy => Color::Yellow,
                    EntryKind::Error => Color::Red,
                };
                Line::from(vec![
                    Span::styled(format!("[{elapsed}] "), Style::default().fg(Color::DarkGray)),
                    Span::styled(entry.message.as_str(), Style::default().fg(color)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let outcome_color = match &self.status.last_outcome {
            Some(PlayOutcome::Success(_)) => Color::Green,
            Some(PlayOutcome::AlreadyPlaying) => Color::Yellow,
            Some(PlayOutcome::Failure(_)) => Color::Red,
            None => Color::DarkGray,
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.status.activity_display()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", self.status.outcome_display()),
                Style::default().fg(outcome_color),
            ),
            Span::raw(format!(" sent {} ", self.status.sent)),
            Span::raw(format!(" {} ", self.status.endpoint)),
            Span::styled(
                " Space:play  arrows:dials  w:waveform  ?:help  q:quit ",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Black));
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let width = (area.width / 10 * 7).max(40).min(area.width);
        let height = (self.help_screen.lines().len() as u16 + 2).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let overlay = Rect::new(x, y, width, height);

        let lines: Vec<Line> = self
            .help_screen
            .lines()
            .iter()
            .map(|l| {
                if l.is_header {
                    Line::from(Span::styled(
                        l.text.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(l.text.as_str())
                }
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help (? or Esc to close) ");
        frame.render_widget(Clear, overlay);
        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }

    /// Run the TUI event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = map_key(key, self.help_screen.visible) {
                            self.handle_action(action);
                        }
                    }
                }
            }

            self.process_playback_events();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ids;
    use crate::playback::{HttpResponse, Transport, TransportError};
    use std::sync::{mpsc, Mutex};
    use std::time::Instant;

    fn screen_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    struct Canned(u16);

    impl Transport for Canned {
        fn post_json(
            &self,
            _url: &str,
            _body: &serde_json::Value,
        ) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::new(self.0, ""))
        }
    }

    /// Blocks each request until a token arrives on the gate.
    struct Gated(Mutex<mpsc::Receiver<()>>);

    impl Transport for Gated {
        fn post_json(
            &self,
            _url: &str,
            _body: &serde_json::Value,
        ) -> Result<HttpResponse, TransportError> {
            let _ = self.0.lock().unwrap().recv();
            Ok(HttpResponse::new(200, ""))
        }
    }

    fn app(status: u16) -> App {
        App::new(
            ParameterStore::seeded(),
            PlaybackDispatcher::new("http://test/play_sound", Canned(status)),
            14,
        )
    }

    fn wait_for(app: &mut App, count: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = 0;
        while seen < count && Instant::now() < deadline {
            seen += app.process_playback_events();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(seen, count, "timed out waiting for outcomes");
    }

    #[test]
    fn app_creation() {
        let app = app(200);
        assert!(!app.should_quit);
        assert_eq!(app.keyboard.iter().filter(|k| !k.is_black()).count(), 14);
        assert_eq!(app.status.endpoint, "http://test/play_sound");
    }

    #[test]
    fn handle_quit() {
        let mut app = app(200);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn nudge_updates_selected_dial_only() {
        let mut app = app(200);
        app.handle_action(Action::SelectNextDial); // Frequency
        app.handle_action(Action::NudgeDial(10));
        assert_eq!(app.store.value(ids::FREQUENCY), Some(450.0));
        assert_eq!(app.store.value(ids::SAMPLE_RATE), Some(44100.0));
    }

    #[test]
    fn nudge_clamps_at_bounds() {
        let mut app = app(200);
        app.handle_action(Action::SelectPrevDial); // wraps to Release
        app.handle_action(Action::NudgeDial(-1000));
        assert_eq!(app.store.value(ids::RELEASE), Some(0.0));
    }

    #[test]
    fn waveform_cycles() {
        let mut app = app(200);
        app.handle_action(Action::NextWaveform);
        assert_eq!(app.store.waveform(), Waveform::Square);
        app.handle_action(Action::PrevWaveform);
        app.handle_action(Action::PrevWaveform);
        assert_eq!(app.store.waveform(), Waveform::Sawtooth);
    }

    #[test]
    fn play_reports_success() {
        let mut app = app(200);
        app.handle_action(Action::Play);
        assert_eq!(app.status.in_flight, 1);
        wait_for(&mut app, 1);
        assert_eq!(app.status.in_flight, 0);
        assert_eq!(app.status.outcome_display(), "OK");
    }

    #[test]
    fn play_reports_busy_as_console_notice() {
        let mut app = app(429);
        app.play();
        wait_for(&mut app, 1);
        assert_eq!(app.status.outcome_display(), "BUSY");
        let last = app.console.recent(1)[0];
        assert_eq!(last.kind, EntryKind::Busy);
        assert!(last.message.contains("already playing"));
    }

    #[test]
    fn second_play_while_in_flight_is_allowed() {
        let mut app = app(500);
        let first = app.play();
        let second = app.play();
        assert!(first.is_some() && second.is_some());
        assert_ne!(first, second);
        assert_eq!(app.status.in_flight, 2);
        wait_for(&mut app, 2);
        assert_eq!(app.status.in_flight, 0);
        assert_eq!(app.status.outcome_display(), "ERR");
    }

    #[test]
    fn plays_beyond_in_flight_cap_are_dropped() {
        let (gate, rx) = mpsc::channel();
        let mut app = App::new(
            ParameterStore::seeded(),
            PlaybackDispatcher::new("http://test/play_sound", Gated(Mutex::new(rx))),
            14,
        );

        for _ in 0..MAX_IN_FLIGHT {
            assert!(app.play().is_some());
        }
        assert_eq!(app.play(), None);
        assert_eq!(app.status.in_flight, MAX_IN_FLIGHT);
        assert_eq!(app.status.sent, MAX_IN_FLIGHT as u64);
        let last = app.console.recent(1)[0];
        assert_eq!(last.kind, EntryKind::Busy);
        assert!(last.message.contains("press ignored"));

        for _ in 0..MAX_IN_FLIGHT {
            gate.send(()).unwrap();
        }
        wait_for(&mut app, MAX_IN_FLIGHT);
        assert!(app.play().is_some());
        gate.send(()).unwrap();
        wait_for(&mut app, 1);
    }

    #[test]
    fn status_bar_shows_sent_count() {
        let mut app = app(200);
        app.play();
        app.play();
        wait_for(&mut app, 2);

        let backend = ratatui::backend::TestBackend::new(120, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        assert!(screen_text(&terminal).contains("sent 2"));
    }

    #[test]
    fn help_toggle_and_escape() {
        let mut app = app(200);
        app.handle_action(Action::ToggleHelp);
        assert!(app.help_screen.visible);
        app.handle_action(Action::Escape);
        assert!(!app.help_screen.visible);
    }

    #[test]
    fn console_toggle() {
        let mut app = app(200);
        assert!(app.console_visible);
        app.handle_action(Action::ToggleConsole);
        assert!(!app.console_visible);
    }

    #[test]
    fn draw_does_not_panic() {
        let mut app = app(200);
        let backend = ratatui::backend::TestBackend::new(80, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        app.handle_action(Action::ToggleHelp);
        app.handle_action(Action::ToggleConsole);
        terminal.draw(|f| app.draw(f)).unwrap();
    }

    #[test]
    fn draw_in_tiny_terminal() {
        let app = app(200);
        let backend = ratatui::backend::TestBackend::new(20, 5);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
    }
}
