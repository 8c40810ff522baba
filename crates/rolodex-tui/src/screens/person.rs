//! Person screen: the full record for one `/user/{id}` route.
//!
//! Renders whatever the detail store last published. The store already
//! drops superseded responses, so a snapshot here always belongs to the
//! latest request.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use rolodex_core::{DetailState, Person};

use crate::action::Action;
use crate::component::Component;
use crate::theme::Theme;
use crate::widgets::centered;

pub struct PersonScreen {
    detail: DetailState,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl PersonScreen {
    pub fn new() -> Self {
        Self {
            detail: DetailState::default(),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    fn card<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border())
            .title(Span::styled(format!(" {title} "), theme.heading()))
            .style(theme.surface())
    }

    fn field<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Vec<Line<'a>> {
        vec![
            Line::from(Span::styled(label, theme.muted())),
            Line::from(Span::styled(value, theme.text())),
        ]
    }

    fn render_person(frame: &mut Frame, area: Rect, p: &Person, theme: &Theme) {
        let [banner, middle, address] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(9),
            Constraint::Length(6),
        ])
        .areas(area);

        // ── Banner: avatar initial, name, @username ──
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border())
            .style(theme.surface());
        let inner = block.inner(banner);
        frame.render_widget(block, banner);

        let [avatar, names] =
            Layout::horizontal([Constraint::Length(7), Constraint::Min(1)]).areas(inner);
        let initial = p.name.chars().next().map(String::from).unwrap_or_default();
        frame.render_widget(
            Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(format!(" {initial} "), theme.avatar())),
            ])
            .alignment(Alignment::Center),
            avatar,
        );
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(p.name.as_str(), theme.title())),
                Line::from(Span::styled(format!("@{}", p.username), theme.muted())),
            ]),
            names,
        );

        // ── Contact + company ──
        let [contact, company] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .spacing(1)
                .areas(middle);

        let mut contact_lines = Self::field("Email", &p.email, theme);
        contact_lines.extend(Self::field("Phone", &p.phone, theme));
        contact_lines.extend(Self::field("Website", &p.website, theme));
        frame.render_widget(
            Paragraph::new(contact_lines).block(Self::card("Contact Information", theme)),
            contact,
        );

        let company_lines = vec![
            Line::from(Span::styled(p.company.name.as_str(), theme.heading())),
            Line::default(),
            Line::from(Span::styled(p.company.catchphrase.as_str(), theme.muted())),
            Line::from(Span::styled(p.company.tagline.as_str(), theme.muted())),
        ];
        frame.render_widget(
            Paragraph::new(company_lines)
                .wrap(Wrap { trim: true })
                .block(Self::card("Company Details", theme)),
            company,
        );

        // ── Address ──
        let a = &p.address;
        let mut address_lines = vec![
            Line::from(Span::styled(format!("{}, {}", a.street, a.suite), theme.text())),
            Line::from(Span::styled(format!("{}, {}", a.city, a.zip), theme.text())),
        ];
        if let Some(geo) = a.geo {
            address_lines.push(Line::from(Span::styled(
                format!("Lat: {}, Lng: {}", geo.latitude, geo.longitude),
                theme.muted(),
            )));
        }
        frame.render_widget(
            Paragraph::new(address_lines).block(Self::card("Address", theme)),
            address,
        );
    }

    fn render_message(frame: &mut Frame, area: Rect, text: &str, style: ratatui::style::Style) {
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        frame.render_widget(
            Paragraph::new(Span::styled(text.to_owned(), style)),
            centered(area, width, 1),
        );
    }
}

impl Default for PersonScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PersonScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::GoBack),
            _ => None,
        })
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::DetailUpdated(detail) => self.detail = (**detail).clone(),
            Action::Tick if self.detail.status.is_pending() => self.throbber_state.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [back, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("← ", theme.key_hint_key()),
                Span::styled("Back to Directory", theme.text()),
                Span::styled("  (Esc / b)", theme.key_hint()),
            ])),
            back,
        );

        if self.detail.status.is_pending() {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(" Loading...")
                .style(theme.muted())
                .throbber_style(theme.title());
            frame.render_stateful_widget(
                throbber,
                centered(body, 14, 1),
                &mut self.throbber_state.clone(),
            );
            return;
        }

        if let Some(err) = self.detail.error {
            Self::render_message(frame, body, &err.to_string(), theme.error());
            return;
        }

        match self.detail.current() {
            Some(person) => Self::render_person(frame, body, person, theme),
            None => Self::render_message(frame, body, "User not found", theme.heading()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use rolodex_core::{Address, Company, FetchError, FetchStatus, GeoPoint, PersonId};

    use super::*;
    use crate::widgets::testing::buffer_text;

    fn leanne() -> Person {
        Person {
            id: PersonId::from(1),
            name: "Leanne Graham".into(),
            username: "Bret".into(),
            email: "Sincere@april.biz".into(),
            phone: "1-770-736-8031 x56442".into(),
            website: "hildegard.org".into(),
            address: Address {
                street: "Kulas Light".into(),
                suite: "Apt. 556".into(),
                city: "Gwenborough".into(),
                zip: "92998-3874".into(),
                geo: Some(GeoPoint {
                    latitude: -37.3159,
                    longitude: 81.1496,
                }),
            },
            company: Company {
                name: "Romaguera-Crona".into(),
                catchphrase: "Multi-layered client-server neural-net".into(),
                tagline: "harness real-time e-markets".into(),
            },
        }
    }

    fn with(detail: DetailState) -> PersonScreen {
        let mut screen = PersonScreen::new();
        screen
            .update(&Action::DetailUpdated(Box::new(detail)))
            .unwrap();
        screen
    }

    fn draw(screen: &PersonScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| screen.render(f, f.area(), &Theme::default()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn renders_full_record() {
        let text = draw(&with(DetailState {
            requested: Some(PersonId::from(1)),
            person: Some(leanne()),
            status: FetchStatus::Ready,
            error: None,
        }));

        assert!(text.contains("Back to Directory"));
        assert!(text.contains(" L "));
        assert!(text.contains("Leanne Graham"));
        assert!(text.contains("@Bret"));
        assert!(text.contains("Contact Information"));
        assert!(text.contains("hildegard.org"));
        assert!(text.contains("Romaguera-Crona"));
        assert!(text.contains("Kulas Light, Apt. 556"));
        assert!(text.contains("Gwenborough, 92998-3874"));
        assert!(text.contains("Lat: -37.3159, Lng: 81.1496"));
    }

    #[test]
    fn stale_record_is_not_shown_while_loading_another() {
        let text = draw(&with(DetailState {
            requested: Some(PersonId::from(7)),
            person: Some(leanne()),
            status: FetchStatus::Loading,
            error: None,
        }));
        assert!(text.contains("Loading"));
        assert!(!text.contains("Leanne Graham"));
    }

    #[test]
    fn failure_shows_static_message() {
        let text = draw(&with(DetailState {
            requested: Some(PersonId::from(999)),
            person: None,
            status: FetchStatus::Failed,
            error: Some(FetchError::Detail),
        }));
        assert!(text.contains("Failed to fetch user details"));
    }

    #[test]
    fn ready_without_record_is_not_found() {
        let text = draw(&with(DetailState {
            requested: Some(PersonId::from(2)),
            person: None,
            status: FetchStatus::Ready,
            error: None,
        }));
        assert!(text.contains("User not found"));
    }

    #[test]
    fn record_shows_when_requested_id_is_spelled_differently() {
        // "/user/001" asks for Text("001"); the server answers with id 1.
        let text = draw(&with(DetailState {
            requested: Some(PersonId::from("001")),
            person: Some(leanne()),
            status: FetchStatus::Ready,
            error: None,
        }));
        assert!(text.contains("Leanne Graham"));
        assert!(!text.contains("User not found"));
    }

    #[test]
    fn back_keys() {
        let mut screen = PersonScreen::new();
        for code in [KeyCode::Esc, KeyCode::Char('b'), KeyCode::Backspace] {
            let action = screen.handle_key_event(KeyEvent::from(code)).unwrap();
            assert!(matches!(action, Some(Action::GoBack)));
        }
        assert!(!screen.captures_input());
    }
}
