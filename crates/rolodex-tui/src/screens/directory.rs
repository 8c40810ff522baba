//! Directory screen: search box, sort toggle, a page of person cards and
//! the pager.
//!
//! The screen never filters or sorts on its own. Controls emit actions the
//! app forwards to the directory store; the store's next snapshot arrives
//! as [`Action::DirectoryUpdated`] and the visible page is re-derived from
//! it.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tui_input::{Input, InputRequest};

use rolodex_core::{DerivedPage, DirectoryState, PAGE_SIZE, Person, Route};

use crate::action::Action;
use crate::component::Component;
use crate::theme::Theme;
use crate::widgets::{centered, pager::render_pager};

const SEARCH_PLACEHOLDER: &str = "Search team members...";
const CARD_COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 5;

pub struct DirectoryScreen {
    state: DirectoryState,
    page: DerivedPage<Person>,
    /// Index into `page.items`.
    selected: usize,
    search: Input,
    search_focused: bool,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl DirectoryScreen {
    pub fn new() -> Self {
        let state = DirectoryState {
            page: 1,
            ..DirectoryState::default()
        };
        Self {
            page: state.derived_page(),
            state,
            selected: 0,
            search: Input::default(),
            search_focused: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    fn apply_state(&mut self, state: &DirectoryState) {
        let query_changed = state.search_term != self.state.search_term
            || state.sort != self.state.sort
            || state.page != self.state.page;

        self.state = state.clone();
        self.page = self.state.derived_page();

        if query_changed {
            self.selected = 0;
        }
        self.selected = self.selected.min(self.page.items.len().saturating_sub(1));

        // Keep the box in sync with the store unless the user is typing.
        if !self.search_focused && self.search.value() != self.state.search_term {
            self.search = Input::new(self.state.search_term.clone());
        }
    }

    fn selected_person(&self) -> Option<&Person> {
        self.page.items.get(self.selected)
    }

    /// Page number for a digit key, if that page exists.
    fn page_for_digit(&self, c: char) -> Option<usize> {
        let n = usize::try_from(c.to_digit(10)?).ok()?;
        (n <= self.page.total_pages && n != self.page.page).then_some(n)
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.page.items.len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        let request = match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Enter | KeyCode::Tab) => {
                self.search_focused = false;
                return None;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => InputRequest::DeleteLine,
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => InputRequest::DeletePrevWord,
            (_, KeyCode::Backspace) => InputRequest::DeletePrevChar,
            (_, KeyCode::Delete) => InputRequest::DeleteNextChar,
            (_, KeyCode::Left) => InputRequest::GoToPrevChar,
            (_, KeyCode::Right) => InputRequest::GoToNextChar,
            (_, KeyCode::Home) => InputRequest::GoToStart,
            (_, KeyCode::End) => InputRequest::GoToEnd,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                InputRequest::InsertChar(c)
            }
            _ => return None,
        };

        let changed = self.search.handle(request).is_some_and(|s| s.value);
        changed.then(|| Action::SearchChanged(self.search.value().to_owned()))
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(Span::styled("Team Directory", theme.title())),
            Line::from(Span::styled(
                "Browse and search through our team members. Press Enter on any card to view details.",
                theme.muted(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [search_area, sort_area] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(18)]).areas(area);

        let border = if self.search_focused {
            theme.border_focused()
        } else {
            theme.border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(" / search ", theme.key_hint()));
        let inner = block.inner(search_area);
        frame.render_widget(block, search_area);

        let width = usize::from(inner.width.saturating_sub(1));
        let scroll = self.search.visual_scroll(width);
        let text = if self.search.value().is_empty() && !self.search_focused {
            Paragraph::new(Span::styled(SEARCH_PLACEHOLDER, theme.muted()))
        } else {
            Paragraph::new(Span::styled(self.search.value(), theme.text()))
                .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
        };
        frame.render_widget(text, inner);

        if self.search_focused {
            let cursor = self.search.visual_cursor().saturating_sub(scroll);
            let x = inner.x + u16::try_from(cursor).unwrap_or(0);
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
        }

        let sort = Paragraph::new(Line::from(vec![
            Span::styled(" s ", theme.key_hint_key()),
            Span::styled(format!("Sort {}", self.state.sort.label()), theme.text()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border()),
        );
        frame.render_widget(sort, sort_area);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let rows = PAGE_SIZE.div_ceil(CARD_COLUMNS);
        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);

        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let cols = Layout::horizontal(vec![Constraint::Ratio(1, 3); CARD_COLUMNS])
                .spacing(1)
                .split(*row_area);
            for (col_idx, card_area) in cols.iter().enumerate() {
                let idx = row_idx * CARD_COLUMNS + col_idx;
                if let Some(person) = self.page.items.get(idx) {
                    Self::render_card(frame, *card_area, person, idx == self.selected, theme);
                }
            }
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, person: &Person, selected: bool, theme: &Theme) {
        let (border, name_style) = if selected {
            (theme.border_focused(), theme.selected())
        } else {
            (theme.border(), theme.heading())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(theme.surface());

        let lines = vec![
            Line::from(Span::styled(person.name.clone(), name_style)),
            Line::from(Span::styled(person.email.clone(), theme.muted())),
            Line::from(vec![
                Span::styled("⌂ ", theme.key_hint_key()),
                Span::styled(person.address.city.clone(), theme.muted()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [pager_area, count_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(24)]).areas(area);

        frame.render_widget(
            Paragraph::new(render_pager(self.page.page, self.page.total_pages, theme)),
            pager_area,
        );

        let count = match self.page.total_matches {
            1 => "1 person".to_owned(),
            n => format!("{n} people"),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(count, theme.muted())).right_aligned(),
            count_area,
        );
    }

    fn render_message(frame: &mut Frame, area: Rect, text: &str, style: ratatui::style::Style) {
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let target = centered(area, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(text.to_owned(), style)), target);
    }
}

impl Default for DirectoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DirectoryScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search_focused {
            return Ok(self.handle_search_key(key));
        }

        let action = match key.code {
            KeyCode::Char('/') => {
                self.search_focused = true;
                None
            }
            KeyCode::Char('s') => Some(Action::ToggleSort),
            KeyCode::Right | KeyCode::Char('l' | ']') => Some(Action::NextPage),
            KeyCode::Left | KeyCode::Char('h' | '[') => Some(Action::PrevPage),
            KeyCode::Char(c @ '1'..='9') => self.page_for_digit(c).map(Action::GoToPage),
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                None
            }
            KeyCode::Enter => self
                .selected_person()
                .map(|p| Action::Navigate(Route::Person(p.id.clone()))),
            KeyCode::Esc if !self.state.search_term.is_empty() => {
                self.search = Input::default();
                Some(Action::SearchChanged(String::new()))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::DirectoryUpdated(state) => self.apply_state(state),
            Action::Tick if self.state.status.is_pending() => self.throbber_state.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.state.status.is_pending() {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(" Loading directory...")
                .style(theme.muted())
                .throbber_style(theme.title());
            frame.render_stateful_widget(
                throbber,
                centered(area, 24, 1),
                &mut self.throbber_state.clone(),
            );
            return;
        }

        if let Some(err) = self.state.error {
            Self::render_message(frame, area, &err.to_string(), theme.error());
            return;
        }

        let [header, controls, cards, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .spacing(1)
        .areas(area);

        Self::render_header(frame, header, theme);
        self.render_controls(frame, controls, theme);

        if self.page.is_empty() {
            Self::render_message(frame, cards, "No people found", theme.muted());
        } else {
            self.render_cards(frame, cards, theme);
        }

        self.render_footer(frame, footer, theme);
    }

    fn captures_input(&self) -> bool {
        self.search_focused
    }
}
