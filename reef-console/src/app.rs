//! Application state and event loop plumbing
//!
//! The app owns one screen at a time, keyed by the current route, plus
//! the sidebar and the toast stack. Screens return action enums from
//! their key handlers; the app turns those into navigation or API
//! tasks. API tasks report back through an unbounded channel drained
//! once per loop iteration.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use reef_client::{ClientError, CustomerDirectory};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::bridge::{self, ApiEvent};
use crate::chrome::{
    render_log_pane, render_notices, render_sidebar, Notice, Sidebar, SIDEBAR_WIDTH,
};
use crate::config::ConsoleConfig;
use crate::route::Route;
use crate::screens::{
    CustomerFormScreen, CustomerListScreen, FormAction, ListAction, PlaceholderAction,
    PlaceholderScreen,
};

const VALIDATION_TOAST: &str = "Please fix the validation errors";
const SAVE_FAILED: &str = "Failed to save customer. Please try again.";

/// Which pane receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

enum Screen {
    Customers(CustomerListScreen),
    CustomerForm(CustomerFormScreen),
    Placeholder(PlaceholderScreen),
}

/// Top-level console state.
pub struct App {
    directory: Arc<dyn CustomerDirectory>,
    events_tx: UnboundedSender<ApiEvent>,
    events_rx: UnboundedReceiver<ApiEvent>,
    route: Route,
    screen: Screen,
    sidebar: Sidebar,
    focus: Focus,
    notices: Vec<Notice>,
    show_logs: bool,
    log_state: TuiWidgetState,
    should_quit: bool,
}

impl App {
    /// Build the app and enter the configured start route. Spawns the
    /// first fetch, so it must run inside a tokio runtime.
    pub fn new(config: &ConsoleConfig, directory: Arc<dyn CustomerDirectory>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut app = App {
            directory,
            events_tx,
            events_rx,
            route: Route::Customers,
            screen: Screen::Placeholder(PlaceholderScreen::for_route(&Route::Home)),
            sidebar: Sidebar::new(config.operator.clone()),
            focus: Focus::Content,
            notices: Vec::new(),
            show_logs: false,
            log_state: TuiWidgetState::new(),
            should_quit: false,
        };
        app.navigate(config.initial_route.clone());
        app
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Switch screens. Entering a route rebuilds its screen from
    /// scratch, the way the hosted app remounts a page component, and
    /// kicks off whatever fetch the screen needs.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(route = %route, "navigate");
        self.screen = match &route {
            Route::Customers => {
                bridge::load_customers(self.directory.clone(), self.events_tx.clone());
                Screen::Customers(CustomerListScreen::new())
            }
            Route::CustomerForm { mode, id } => {
                let form = CustomerFormScreen::new(*mode, id.clone());
                if form.needs_fetch() {
                    if let Some(id) = id {
                        bridge::load_customer(
                            self.directory.clone(),
                            self.events_tx.clone(),
                            id.clone(),
                        );
                    }
                }
                Screen::CustomerForm(form)
            }
            _ => Screen::Placeholder(PlaceholderScreen::for_route(&route)),
        };
        self.route = route;
        self.sidebar.sync_route(&self.route);
        self.focus = Focus::Content;
    }

    /// Route a key press to the sidebar or the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('l') => {
                    self.show_logs = !self.show_logs;
                    return;
                }
                _ => {}
            }
        }
        if self.show_logs {
            match key.code {
                KeyCode::PageUp => {
                    self.log_state.transition(TuiWidgetEvent::PrevPageKey);
                    return;
                }
                KeyCode::PageDown => {
                    self.log_state.transition(TuiWidgetEvent::NextPageKey);
                    return;
                }
                _ => {}
            }
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Content => self.handle_screen_key(key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.sidebar.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.sidebar.select_next(),
            KeyCode::Char(c @ '1'..='5') => {
                if self.sidebar.select_digit(c) {
                    self.navigate(self.sidebar.selected_tab().route());
                }
            }
            KeyCode::Enter => self.navigate(self.sidebar.selected_tab().route()),
            KeyCode::Tab | KeyCode::Esc => {
                // Put the highlight back where the route is.
                self.sidebar.sync_route(&self.route);
                self.focus = Focus::Content;
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_screen_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            Screen::Customers(list) => {
                if let Some(action) = list.handle_key(key) {
                    self.run_list_action(action);
                }
            }
            Screen::CustomerForm(form) => {
                if let Some(action) = form.handle_key(key) {
                    self.run_form_action(action);
                }
            }
            Screen::Placeholder(page) => {
                if let Some(action) = page.handle_key(key) {
                    match action {
                        PlaceholderAction::FocusSidebar => self.focus = Focus::Sidebar,
                        PlaceholderAction::Quit => self.should_quit = true,
                    }
                }
            }
        }
    }

    fn run_list_action(&mut self, action: ListAction) {
        match action {
            ListAction::Reload => {
                bridge::load_customers(self.directory.clone(), self.events_tx.clone());
            }
            ListAction::OpenForm { mode, id } => {
                self.navigate(Route::CustomerForm { mode, id });
            }
            ListAction::Delete { id } => {
                bridge::delete_customer(self.directory.clone(), self.events_tx.clone(), id);
            }
            ListAction::FocusSidebar => self.focus = Focus::Sidebar,
            ListAction::Quit => self.should_quit = true,
        }
    }

    fn run_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Submit { id, payload } => {
                bridge::save_customer(self.directory.clone(), self.events_tx.clone(), id, payload);
            }
            FormAction::Invalid => {
                self.push_notice(Notice::error(VALIDATION_TOAST));
            }
            FormAction::Cancel => self.navigate(Route::Customers),
            FormAction::Quit => self.should_quit = true,
        }
    }

    /// Apply one settled API call to the current screen. Results for a
    /// screen the user already left are logged and dropped.
    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::CustomersLoaded(result) => {
                let Screen::Customers(list) = &mut self.screen else {
                    tracing::debug!("customer list arrived after leaving the list");
                    return;
                };
                match result {
                    Ok(customers) => {
                        tracing::info!(count = customers.len(), "customer list loaded");
                        list.set_customers(customers);
                    }
                    Err(error) => {
                        tracing::error!(%error, "customer list fetch failed");
                        list.set_load_error();
                    }
                }
            }
            ApiEvent::CustomerLoaded { id, result } => {
                let Screen::CustomerForm(form) = &mut self.screen else {
                    return;
                };
                if form.id() != Some(id.as_str()) {
                    return;
                }
                match result {
                    Ok(Some(customer)) => form.set_loaded(&customer),
                    Ok(None) => {
                        tracing::warn!(%id, "customer not found");
                        form.set_not_found();
                    }
                    Err(error) => {
                        tracing::error!(%id, %error, "customer fetch failed");
                        form.set_fetch_failed();
                    }
                }
            }
            ApiEvent::CustomerSaved(result) => match result {
                Ok(response) => {
                    let text = if response.message.trim().is_empty() {
                        "Customer saved".to_string()
                    } else {
                        response.message
                    };
                    self.push_notice(Notice::success(text));
                    self.navigate(Route::Customers);
                }
                Err(error) => {
                    tracing::error!(%error, "customer save failed");
                    if let Screen::CustomerForm(form) = &mut self.screen {
                        form.submit_failed();
                    }
                    let text = match &error {
                        ClientError::Validation(message) => message.clone(),
                        _ => SAVE_FAILED.to_string(),
                    };
                    self.push_notice(Notice::error(text));
                }
            },
            ApiEvent::CustomerDeleted { id, result } => {
                let Screen::Customers(list) = &mut self.screen else {
                    return;
                };
                match result {
                    Ok(()) => {
                        tracing::info!(%id, "customer deleted");
                        // Refetch in place so search and sort survive.
                        list.begin_loading();
                        bridge::load_customers(self.directory.clone(), self.events_tx.clone());
                    }
                    Err(error) => {
                        tracing::error!(%id, %error, "customer delete failed");
                        list.show_delete_failed();
                    }
                }
            }
        }
    }

    fn push_notice(&mut self, notice: Notice) {
        self.sidebar.record_notification();
        self.notices.push(notice);
    }

    /// Apply every API result that has arrived since the last frame.
    pub fn drain_api_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_api_event(event);
        }
    }

    /// Per-frame housekeeping.
    pub fn tick(&mut self) {
        self.notices.retain(|notice| !notice.expired());
    }
}

/// Draw one frame.
pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).split(f.area());
    render_sidebar(
        f,
        chunks[0],
        &app.sidebar,
        app.focus == Focus::Sidebar,
        &app.route,
    );

    let content = if app.show_logs {
        let rows = Layout::vertical([Constraint::Min(10), Constraint::Length(10)]).split(chunks[1]);
        render_log_pane(f, rows[1], &app.log_state);
        rows[0]
    } else {
        chunks[1]
    };

    let focused = app.focus == Focus::Content;
    match &mut app.screen {
        Screen::Customers(list) => list.render(f, content, focused),
        Screen::CustomerForm(form) => form.render(f, content, focused),
        Screen::Placeholder(page) => page.render(f, content),
    }

    render_notices(f, content, &app.notices);
}
