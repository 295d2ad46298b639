//! Stub pages for sections that are not built yet

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::route::Route;

/// What a placeholder page can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderAction {
    FocusSidebar,
    Quit,
}

/// A page that just names itself, like the hosted app's unbuilt
/// sections.
pub struct PlaceholderScreen {
    title: &'static str,
}

impl PlaceholderScreen {
    pub fn for_route(route: &Route) -> Self {
        let title = match route {
            Route::Home => "Home",
            Route::Templates => "Templates",
            Route::Employees => "Employees",
            Route::Settings => "Settings",
            _ => "Home",
        };
        PlaceholderScreen { title }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PlaceholderAction> {
        match key.code {
            KeyCode::Tab => Some(PlaceholderAction::FocusSidebar),
            KeyCode::Char('q') => Some(PlaceholderAction::Quit),
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);
        let rows = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
        f.render_widget(
            Paragraph::new(self.title)
                .style(Style::default().bold())
                .alignment(Alignment::Center),
            rows[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn titles_follow_the_route() {
        assert_eq!(PlaceholderScreen::for_route(&Route::Home).title(), "Home");
        assert_eq!(
            PlaceholderScreen::for_route(&Route::Settings).title(),
            "Settings"
        );
    }

    #[test]
    fn tab_hands_focus_to_the_sidebar() {
        let mut screen = PlaceholderScreen::for_route(&Route::Templates);
        let action = screen.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(action, Some(PlaceholderAction::FocusSidebar));
    }
}
