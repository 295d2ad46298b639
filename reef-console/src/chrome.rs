//! Shell chrome shared across screens
//!
//! Sidebar navigation, transient notices, the tui-logger pane, and the
//! popup rect helper every overlay uses.

use std::time::{Duration, Instant};

use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::route::Route;

// ── Sidebar ─────────────────────────────────────────────────────────

/// Fixed sidebar width, matching the hosted app's narrow nav column.
pub const SIDEBAR_WIDTH: u16 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTab {
    Home,
    Templates,
    Customers,
    Employees,
    Settings,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 5] = [
        SidebarTab::Home,
        SidebarTab::Templates,
        SidebarTab::Customers,
        SidebarTab::Employees,
        SidebarTab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SidebarTab::Home => "Home",
            SidebarTab::Templates => "Templates",
            SidebarTab::Customers => "Customers",
            SidebarTab::Employees => "Employees",
            SidebarTab::Settings => "My Business Settings",
        }
    }

    pub fn route(self) -> Route {
        match self {
            SidebarTab::Home => Route::Home,
            SidebarTab::Templates => Route::Templates,
            SidebarTab::Customers => Route::Customers,
            SidebarTab::Employees => Route::Employees,
            SidebarTab::Settings => Route::Settings,
        }
    }

    /// Tab that should light up for a route. Form screens still belong
    /// to the customers tab.
    pub fn for_route(route: &Route) -> SidebarTab {
        match route {
            Route::Home => SidebarTab::Home,
            Route::Templates => SidebarTab::Templates,
            Route::Customers | Route::CustomerForm { .. } => SidebarTab::Customers,
            Route::Employees => SidebarTab::Employees,
            Route::Settings => SidebarTab::Settings,
        }
    }
}

/// Navigation state: highlighted entry plus the footer bits.
pub struct Sidebar {
    pub selected: usize,
    /// Notices raised this session, shown as the badge count.
    pub notifications: u32,
    pub operator: String,
}

impl Sidebar {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            // Customers is the landing tab.
            selected: 2,
            notifications: 0,
            operator: operator.into(),
        }
    }

    pub fn record_notification(&mut self) {
        self.notifications = self.notifications.saturating_add(1);
    }

    pub fn selected_tab(&self) -> SidebarTab {
        SidebarTab::ALL[self.selected]
    }

    pub fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = SidebarTab::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SidebarTab::ALL.len();
    }

    /// Jump straight to a tab by its 1-based position.
    pub fn select_digit(&mut self, digit: char) -> bool {
        match digit.to_digit(10) {
            Some(n) if (1..=SidebarTab::ALL.len() as u32).contains(&n) => {
                self.selected = (n - 1) as usize;
                true
            }
            _ => false,
        }
    }

    /// Keep the highlight in step with navigation that bypassed the
    /// sidebar (form cancel, startup route).
    pub fn sync_route(&mut self, route: &Route) {
        let tab = SidebarTab::for_route(route);
        if let Some(pos) = SidebarTab::ALL.iter().position(|t| *t == tab) {
            self.selected = pos;
        }
    }

    fn initials(&self) -> String {
        self.operator
            .split_whitespace()
            .take(2)
            .filter_map(|w| w.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

pub fn render_sidebar(f: &mut Frame, area: Rect, sidebar: &Sidebar, focused: bool, route: &Route) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Blue)
    };
    let block = Block::default()
        .title(" reef admin ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Nav entries
            Constraint::Length(4), // Notifications + operator
        ])
        .split(inner);

    let active_tab = SidebarTab::for_route(route);
    let items: Vec<ListItem> = SidebarTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let marker = if *tab == active_tab { "▸ " } else { "  " };
            let mut style = Style::default();
            if *tab == active_tab {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if focused && i == sidebar.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(tab.label(), style),
            ]))
        })
        .collect();
    f.render_widget(List::new(items), chunks[0]);

    let footer = vec![
        Line::from(vec![
            Span::raw("Notifications "),
            Span::styled(
                format!(" {} ", sidebar.notifications),
                Style::default().fg(Color::Black).bg(Color::Blue),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {} ", sidebar.initials()),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
            Span::raw(" "),
            Span::styled(&sidebar.operator, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled("    Admin", Style::default().fg(Color::DarkGray))),
    ];
    f.render_widget(Paragraph::new(footer), chunks[1]);
}

// ── Notices ─────────────────────────────────────────────────────────

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast in the top-right corner.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    created: Instant,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into(), created: Instant::now() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into(), created: Instant::now() }
    }

    pub fn expired(&self) -> bool {
        self.created.elapsed() >= NOTICE_TTL
    }
}

pub fn render_notices(f: &mut Frame, area: Rect, notices: &[Notice]) {
    let width = 44.min(area.width);
    let mut y = area.y;
    for notice in notices {
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width), y, width, 3);
        let (color, title) = match notice.kind {
            NoticeKind::Success => (Color::Green, " ok "),
            NoticeKind::Error => (Color::Red, " error "),
        };
        f.render_widget(Clear, rect);
        let body = Paragraph::new(notice.text.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(body, rect);
        y += 3;
    }
}

// ── Log pane ────────────────────────────────────────────────────────

pub fn render_log_pane(f: &mut Frame, area: Rect, state: &TuiWidgetState) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs (Ctrl+L to hide, PgUp/PgDn to scroll) ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(state);
    f.render_widget(logs, area);
}

// ── Popup helper ────────────────────────────────────────────────────

/// Centered sub-rect sized as percentages of the containing area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_within_bounds() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 30, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert!(popup.width <= area.width / 2 + 1);
    }

    #[test]
    fn sidebar_selection_wraps_both_ways() {
        let mut sidebar = Sidebar::new("David ben Yosef");
        assert_eq!(sidebar.selected_tab(), SidebarTab::Customers);
        sidebar.selected = 0;
        sidebar.select_prev();
        assert_eq!(sidebar.selected_tab(), SidebarTab::Settings);
        sidebar.select_next();
        assert_eq!(sidebar.selected_tab(), SidebarTab::Home);
    }

    #[test]
    fn digit_jump_is_one_based_and_bounded() {
        let mut sidebar = Sidebar::new("op");
        assert!(sidebar.select_digit('1'));
        assert_eq!(sidebar.selected_tab(), SidebarTab::Home);
        assert!(sidebar.select_digit('5'));
        assert_eq!(sidebar.selected_tab(), SidebarTab::Settings);
        assert!(!sidebar.select_digit('6'));
        assert!(!sidebar.select_digit('0'));
        assert_eq!(sidebar.selected_tab(), SidebarTab::Settings);
    }

    #[test]
    fn form_routes_light_the_customers_tab() {
        use crate::route::FormMode;
        let route = Route::CustomerForm { mode: FormMode::Edit, id: Some("a1".to_string()) };
        assert_eq!(SidebarTab::for_route(&route), SidebarTab::Customers);
    }

    #[test]
    fn initials_take_the_first_two_words() {
        let sidebar = Sidebar::new("David ben Yosef");
        assert_eq!(sidebar.initials(), "DB");
    }

    #[test]
    fn notification_badge_counts_up_from_zero() {
        let mut sidebar = Sidebar::new("op");
        assert_eq!(sidebar.notifications, 0);
        sidebar.record_notification();
        sidebar.record_notification();
        assert_eq!(sidebar.notifications, 2);
    }

    #[test]
    fn notices_expire_after_their_ttl() {
        let notice = Notice::success("Customer created successfully");
        assert!(!notice.expired());
    }
}
