//! Application core: event loop, routing and action dispatch.

use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use rolodex_core::{Directory, Route};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme::Theme;
use crate::tui::Tui;
use crate::widgets::centered;

/// Top-level application state and event loop.
pub struct App {
    directory: Directory,
    /// Current navigation path; decides the active screen.
    route: Route,
    screens: HashMap<ScreenId, Box<dyn Component>>,
    theme: Theme,
    running: bool,
    help_visible: bool,
    /// Action sender used by the data bridge and the event loop.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Drained by the main loop.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Cancellation token for the data bridge task.
    data_cancel: CancellationToken,
}

impl App {
    pub fn new(directory: Directory) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let theme = Theme::new(directory.theme().mode());

        Self {
            directory,
            route: Route::Directory,
            screens: create_screens().into_iter().collect(),
            theme,
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
            data_cancel: CancellationToken::new(),
        }
    }

    fn active_screen(&self) -> ScreenId {
        ScreenId::for_route(&self.route)
    }

    /// Run the main event loop until quit.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let directory = self.directory.clone();
        let cancel = self.data_cancel.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(crate::data_bridge::spawn_data_bridge(directory, tx, cancel));

        let mut events = EventReader::new(
            Duration::from_millis(100), // throbber frames
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!(route = %self.route, "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.data_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here unless
    /// the active screen is capturing text; everything else goes to the
    /// active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        let active = self.active_screen();
        let capturing = self
            .screens
            .get(&active)
            .is_some_and(|s| s.captures_input());

        if !capturing {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
                (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
                (KeyModifiers::NONE, KeyCode::Char('t')) => return Ok(Some(Action::ToggleTheme)),
                _ => {}
            }
        }

        match self.screens.get_mut(&active) {
            Some(screen) => screen.handle_key_event(key),
            None => Ok(None),
        }
    }

    /// Apply one action: update app state, forward list controls to the
    /// stores and propagate snapshots to the screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        let people = self.directory.people();

        match action {
            Action::Quit => self.running = false,

            Action::Navigate(route) => {
                debug!(from = %self.route, to = %route, "navigate");
                self.route = route.clone();
                self.directory.navigate(route);
            }

            Action::GoBack => {
                if self.route != Route::Directory {
                    self.action_tx.send(Action::Navigate(Route::Directory))?;
                }
            }

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::SearchChanged(term) => people.set_search_term(term.as_str()),
            Action::ToggleSort => {
                people.toggle_sort_direction();
            }
            Action::NextPage => people.next_page(),
            Action::PrevPage => people.prev_page(),
            Action::GoToPage(n) => people.set_current_page(*n),

            Action::ToggleTheme => {
                self.directory.theme().toggle();
            }
            Action::ThemeChanged(mode) => self.theme = Theme::new(*mode),

            Action::DirectoryUpdated(_) | Action::DetailUpdated(_) => {
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            Action::Tick => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen()) {
                    screen.update(action)?;
                }
            }

            Action::Render | Action::Resize(..) => {}
        }
        Ok(())
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.base()), area);

        let [header, content, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header);

        let [body] = Layout::horizontal([Constraint::Min(1)])
            .horizontal_margin(2)
            .vertical_margin(1)
            .areas(content);
        if let Some(screen) = self.screens.get(&self.active_screen()) {
            screen.render(frame, body, &self.theme);
        }

        self.render_status_bar(frame, status);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// App bar: product name on the left, theme indicator on the right.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(12)]).areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Directory", self.theme.heading()),
                Span::styled(format!("  {}", self.route), self.theme.muted()),
            ])),
            left,
        );

        let indicator = if self.theme.mode.is_dark() {
            "☀ light"
        } else {
            "☾ dark"
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("t ", self.theme.key_hint_key()),
                Span::styled(indicator, self.theme.key_hint()),
            ]))
            .right_aligned(),
            right,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = match self.active_screen() {
            ScreenId::Directory => &[
                ("/", "search"),
                ("s", "sort"),
                ("←/→", "page"),
                ("1-9", "go to"),
                ("↑/↓", "select"),
                ("Enter", "open"),
                ("?", "help"),
                ("q", "quit"),
            ],
            ScreenId::Person => &[("Esc", "back"), ("t", "theme"), ("?", "help"), ("q", "quit")],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(*key, self.theme.key_hint_key()));
            spans.push(Span::styled(format!(" {label}  "), self.theme.key_hint()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_area = centered(area, 46, 17);
        frame.render_widget(Clear, help_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(self.theme.title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focused())
            .style(self.theme.surface());

        let row = |key: &'static str, text: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), self.theme.key_hint_key()),
                Span::styled(text, self.theme.text()),
            ])
        };

        let lines = vec![
            Line::default(),
            row("/", "Search by name"),
            row("s", "Toggle sort A to Z / Z to A"),
            row("←/→ h/l", "Previous / next page"),
            row("[ ]", "Previous / next page"),
            row("1-9", "Jump to page"),
            row("↑/↓ j/k", "Move selection"),
            row("Enter", "Open person"),
            row("Esc b", "Back to directory"),
            row("t", "Toggle light / dark"),
            row("q", "Quit"),
            Line::default(),
            Line::from(Span::styled("  Esc or ? to close", self.theme.key_hint())),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), help_area);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    use rolodex_core::{DirectoryConfig, PersonId, SortDirection, ThemeMode};

    use super::*;
    use crate::widgets::testing::buffer_text;

    fn app() -> App {
        let url = "http://127.0.0.1:1".parse().unwrap();
        let config = DirectoryConfig::new(url).with_timeout(Duration::from_secs(1));
        App::new(Directory::new(config).unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn list_controls_reach_the_store() {
        let mut app = app();

        app.process_action(&Action::SearchChanged("clem".into()))
            .unwrap();
        app.process_action(&Action::ToggleSort).unwrap();

        let state = app.directory.people().snapshot();
        assert_eq!(state.search_term, "clem");
        assert_eq!(state.sort, SortDirection::Descending);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn go_to_page_sets_the_store_page() {
        let mut app = app();
        app.process_action(&Action::GoToPage(3)).unwrap();
        assert_eq!(app.directory.people().snapshot().page, 3);
    }

    #[test]
    fn theme_toggle_goes_through_the_store() {
        let mut app = app();
        let mut rx = app.directory.theme().subscribe();

        let action = app.handle_key_event(key(KeyCode::Char('t'))).unwrap();
        assert!(matches!(action, Some(Action::ToggleTheme)));
        app.process_action(&Action::ToggleTheme).unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Dark);

        app.process_action(&Action::ThemeChanged(ThemeMode::Dark))
            .unwrap();
        assert_eq!(app.theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn quit_and_help_keys() {
        let mut app = app();
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::Quit)
        ));

        app.process_action(&Action::ToggleHelp).unwrap();
        assert!(draw(&app).contains("Keyboard Shortcuts"));
        // While help is up, q closes it instead of quitting.
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::ToggleHelp)
        ));
    }

    #[test]
    fn typing_in_search_does_not_trigger_global_keys() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('/'))).unwrap();

        let action = app.handle_key_event(key(KeyCode::Char('q'))).unwrap();
        assert!(matches!(action, Some(Action::SearchChanged(ref s)) if s == "q"));
        let action = app.handle_key_event(key(KeyCode::Char('t'))).unwrap();
        assert!(matches!(action, Some(Action::SearchChanged(ref s)) if s == "qt"));
    }

    #[tokio::test]
    async fn navigate_switches_screen_and_requests_detail() {
        let mut app = app();
        let mut detail = app.directory.detail().subscribe();
        let route = Route::Person(PersonId::from(7));

        app.process_action(&Action::Navigate(route.clone())).unwrap();
        assert_eq!(app.active_screen(), ScreenId::Person);
        assert_eq!(app.route, route);

        tokio::time::timeout(Duration::from_secs(5), detail.changed())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            detail.borrow_and_update().requested,
            Some(PersonId::from(7))
        );
        assert!(draw(&app).contains("/user/7"));

        app.process_action(&Action::GoBack).unwrap();
        let queued = app.action_rx.try_recv().unwrap();
        assert!(matches!(queued, Action::Navigate(Route::Directory)));
    }

    #[test]
    fn header_shows_theme_hint() {
        let app = app();
        let text = draw(&app);
        assert!(text.contains("Directory"));
        assert!(text.contains("☾ dark"));
    }
}
