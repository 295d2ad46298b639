//! Customer list screen
//!
//! Search, sort and browse the customer directory, with a per-row
//! action menu and a delete confirmation dialog. Filtering and sorting
//! run on the client against the last fetched snapshot.

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use shared::Customer;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::chrome::centered_rect;
use crate::route::FormMode;
use crate::screens::InputMode;

/// Rows of space the action menu needs below its trigger row before it
/// flips above it.
const MENU_CLEARANCE_ROWS: u16 = 12;
/// Band at the bottom of the table in which the menu always opens upward.
const TABLE_BOTTOM_BAND_ROWS: u16 = 9;

const MENU_WIDTH: u16 = 20;
const MENU_HEIGHT: u16 = 5;

const FETCH_FAILED: &str = "Failed to fetch customers. Please try again later.";
const DELETE_FAILED: &str = "Failed to delete customer. Please try again.";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this customer?";

/// Column a list sort can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    Mobile,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Email, SortKey::Mobile];

    /// Menu label, matching the column headers.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Email => "Email",
            SortKey::Mobile => "Phone",
        }
    }

    fn field<'a>(&self, customer: &'a Customer) -> &'a str {
        match self {
            SortKey::Name => &customer.name,
            SortKey::Email => &customer.email,
            SortKey::Mobile => &customer.mobile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active sort order. Defaults to name, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            key: SortKey::Name,
            direction: SortDirection::Ascending,
        }
    }
}

/// Where the row action menu opens relative to its trigger row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPlacement {
    Below,
    Above,
}

/// Pick a side for the action menu so it stays readable near the bottom
/// of the screen. `trigger_row`, `table_bottom` and `viewport_bottom`
/// are absolute terminal rows.
pub fn menu_placement(trigger_row: u16, table_bottom: u16, viewport_bottom: u16) -> MenuPlacement {
    let space_below = viewport_bottom.saturating_sub(trigger_row);
    if space_below < MENU_CLEARANCE_ROWS
        || trigger_row > table_bottom.saturating_sub(TABLE_BOTTOM_BAND_ROWS)
    {
        MenuPlacement::Above
    } else {
        MenuPlacement::Below
    }
}

/// Entries of the per-row action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

/// The single overlay the list can show at a time. Opening one replaces
/// whatever was open before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOverlay {
    /// Per-row menu, anchored to the selected row.
    Actions {
        placement: MenuPlacement,
        selected: usize,
    },
    /// Sort column picker.
    Sort { selected: usize },
    /// Delete confirmation for the given customer id.
    ConfirmDelete { id: String, focus_delete: bool },
    /// Modal alert shown when a delete request fails.
    DeleteFailed,
}

/// Side effect requested by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Re-fetch the customer list.
    Reload,
    /// Navigate to the form screen.
    OpenForm { mode: FormMode, id: Option<String> },
    /// Issue a delete for the given id.
    Delete { id: String },
    /// Hand focus to the sidebar.
    FocusSidebar,
    /// Leave the console.
    Quit,
}

/// State of the customer list page.
pub struct CustomerListScreen {
    /// Last fetched snapshot, in server order.
    customers: Vec<Customer>,
    /// Indices into `customers`, filtered and sorted for display.
    visible: Vec<usize>,
    search: Input,
    search_mode: InputMode,
    sort: SortConfig,
    /// Cursor position within `visible`.
    selected: usize,
    scroll_offset: usize,
    overlay: Option<ListOverlay>,
    loading: bool,
    error: Option<String>,
    /// Geometry captured on the last render, used to anchor the menu.
    table_area: Rect,
    viewport_bottom: u16,
    controls_area: Rect,
}

impl CustomerListScreen {
    /// A fresh screen starts in the loading state until the first
    /// snapshot arrives.
    pub fn new() -> Self {
        CustomerListScreen {
            customers: Vec::new(),
            visible: Vec::new(),
            search: Input::default(),
            search_mode: InputMode::Normal,
            sort: SortConfig::default(),
            selected: 0,
            scroll_offset: 0,
            overlay: None,
            loading: true,
            error: None,
            table_area: Rect::default(),
            viewport_bottom: 0,
            controls_area: Rect::default(),
        }
    }

    /// Replace the snapshot. Search and sort settings are kept so a
    /// refetch after a delete lands back on the same view.
    pub fn set_customers(&mut self, customers: Vec<Customer>) {
        self.customers = customers;
        self.loading = false;
        self.error = None;
        self.recompute_visible();
    }

    /// Record a failed fetch.
    pub fn set_load_error(&mut self) {
        self.loading = false;
        self.error = Some(FETCH_FAILED.to_string());
    }

    /// Mark a fetch as in flight.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Surface a failed delete as a modal alert.
    pub fn show_delete_failed(&mut self) {
        self.overlay = Some(ListOverlay::DeleteFailed);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn overlay(&self) -> Option<&ListOverlay> {
        self.overlay.as_ref()
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn search_term(&self) -> &str {
        self.search.value()
    }

    pub fn is_searching(&self) -> bool {
        self.search_mode == InputMode::Editing
    }

    /// Customers currently visible, in display order.
    pub fn visible_customers(&self) -> Vec<&Customer> {
        self.visible.iter().map(|&i| &self.customers[i]).collect()
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        self.visible
            .get(self.selected)
            .map(|&i| &self.customers[i])
    }

    /// Re-derive the visible rows from the snapshot, the search term and
    /// the sort order. The cursor is clamped into the new range.
    fn recompute_visible(&mut self) {
        let term = self.search.value().trim().to_lowercase();
        self.visible = (0..self.customers.len())
            .filter(|&i| {
                if term.is_empty() {
                    return true;
                }
                let c = &self.customers[i];
                c.name.to_lowercase().contains(&term)
                    || c.email.to_lowercase().contains(&term)
                    || c.mobile.to_lowercase().contains(&term)
            })
            .collect();

        let key = self.sort.key;
        let customers = &self.customers;
        // Stable sort, so rows that compare equal keep their server order.
        self.visible
            .sort_by(|&a, &b| key.field(&customers[a]).cmp(key.field(&customers[b])));
        if self.sort.direction == SortDirection::Descending {
            self.visible.reverse();
        }

        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    /// Apply a sort key. Picking the active key flips the direction,
    /// picking a new one resets to ascending.
    pub fn apply_sort(&mut self, key: SortKey) {
        if self.sort.key == key {
            self.sort.direction = match self.sort.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort = SortConfig {
                key,
                direction: SortDirection::Ascending,
            };
        }
        self.recompute_visible();
    }

    /// Feed a key press to the screen. Returns a side effect for the app
    /// to run, if the key asked for one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ListAction> {
        if self.overlay.is_some() {
            return self.handle_overlay_key(key);
        }
        match self.search_mode {
            InputMode::Editing => {
                self.handle_search_key(key);
                None
            }
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.search_mode = InputMode::Normal;
            }
            _ => {
                self.search.handle_event(&Event::Key(key));
                self.recompute_visible();
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<ListAction> {
        match key.code {
            KeyCode::Char('/') => {
                self.search_mode = InputMode::Editing;
                None
            }
            KeyCode::Esc => {
                if !self.search.value().is_empty() {
                    self.search.reset();
                    self.recompute_visible();
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.visible.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => {
                if self.selected_customer().is_some() {
                    let placement = self.placement_for_selected();
                    self.overlay = Some(ListOverlay::Actions {
                        placement,
                        selected: 0,
                    });
                }
                None
            }
            KeyCode::Char('s') => {
                let current = SortKey::ALL
                    .iter()
                    .position(|k| *k == self.sort.key)
                    .unwrap_or(0);
                self.overlay = Some(ListOverlay::Sort { selected: current });
                None
            }
            KeyCode::Char('a') => Some(ListAction::OpenForm {
                mode: FormMode::Create,
                id: None,
            }),
            KeyCode::Char('r') => {
                self.begin_loading();
                Some(ListAction::Reload)
            }
            KeyCode::Tab => Some(ListAction::FocusSidebar),
            KeyCode::Char('q') => Some(ListAction::Quit),
            _ => None,
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> Option<ListAction> {
        let overlay = self.overlay.take()?;
        match overlay {
            ListOverlay::Actions { placement, selected } => match key.code {
                KeyCode::Esc => None,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.overlay = Some(ListOverlay::Actions {
                        placement,
                        selected: selected.saturating_sub(1),
                    });
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.overlay = Some(ListOverlay::Actions {
                        placement,
                        selected: (selected + 1).min(RowAction::ALL.len() - 1),
                    });
                    None
                }
                KeyCode::Enter => {
                    let id = self.selected_customer().map(|c| c.id.clone())?;
                    match RowAction::ALL[selected] {
                        RowAction::View => Some(ListAction::OpenForm {
                            mode: FormMode::View,
                            id: Some(id),
                        }),
                        RowAction::Edit => Some(ListAction::OpenForm {
                            mode: FormMode::Edit,
                            id: Some(id),
                        }),
                        RowAction::Delete => {
                            self.overlay = Some(ListOverlay::ConfirmDelete {
                                id,
                                focus_delete: true,
                            });
                            None
                        }
                    }
                }
                _ => {
                    self.overlay = Some(ListOverlay::Actions { placement, selected });
                    None
                }
            },
            ListOverlay::Sort { selected } => match key.code {
                KeyCode::Esc => None,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.overlay = Some(ListOverlay::Sort {
                        selected: selected.saturating_sub(1),
                    });
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.overlay = Some(ListOverlay::Sort {
                        selected: (selected + 1).min(SortKey::ALL.len() - 1),
                    });
                    None
                }
                KeyCode::Enter => {
                    self.apply_sort(SortKey::ALL[selected]);
                    None
                }
                _ => {
                    self.overlay = Some(ListOverlay::Sort { selected });
                    None
                }
            },
            ListOverlay::ConfirmDelete { id, focus_delete } => match key.code {
                KeyCode::Esc => None,
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    self.overlay = Some(ListOverlay::ConfirmDelete {
                        id,
                        focus_delete: !focus_delete,
                    });
                    None
                }
                KeyCode::Enter => {
                    if focus_delete {
                        Some(ListAction::Delete { id })
                    } else {
                        None
                    }
                }
                _ => {
                    self.overlay = Some(ListOverlay::ConfirmDelete { id, focus_delete });
                    None
                }
            },
            ListOverlay::DeleteFailed => match key.code {
                KeyCode::Esc | KeyCode::Enter => None,
                _ => {
                    self.overlay = Some(ListOverlay::DeleteFailed);
                    None
                }
            },
        }
    }

    fn placement_for_selected(&self) -> MenuPlacement {
        let visible_row = self.selected.saturating_sub(self.scroll_offset) as u16;
        // Border plus header row sit above the first data row.
        let trigger_row = self.table_area.y + 2 + visible_row;
        menu_placement(trigger_row, self.table_area.bottom(), self.viewport_bottom)
    }

    /// Draw the screen into `area`. `focused` dims the chrome when the
    /// sidebar holds focus.
    pub fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        self.viewport_bottom = area.bottom();
        let banner_height = if self.error.is_some() { 3 } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
        self.controls_area = chunks[0];
        self.table_area = chunks[2];

        self.render_controls(f, chunks[0]);
        if let Some(message) = &self.error {
            let banner = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).border_style(
                    Style::default().fg(Color::Red),
                ));
            f.render_widget(banner, chunks[1]);
        }
        self.render_table(f, chunks[2], focused);
        self.render_footer(f, chunks[3]);

        if let Some(overlay) = self.overlay.clone() {
            self.render_overlay(f, area, &overlay);
        }
    }

    fn render_controls(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(18),
        ])
        .split(area);

        let search_style = match self.search_mode {
            InputMode::Editing => Style::default().fg(Color::Yellow),
            InputMode::Normal => Style::default(),
        };
        let width = chunks[0].width.saturating_sub(2) as usize;
        let scroll = self.search.visual_scroll(width);
        let shown = if self.search.value().is_empty() && self.search_mode == InputMode::Normal {
            Paragraph::new("Search...").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.search.value()).scroll((0, scroll as u16))
        };
        f.render_widget(
            shown.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(search_style),
            ),
            chunks[0],
        );
        if self.search_mode == InputMode::Editing {
            f.set_cursor_position((
                chunks[0].x
                    + (self.search.visual_cursor().max(scroll) - scroll) as u16
                    + 1,
                chunks[0].y + 1,
            ));
        }

        let sort_label = format!("Sort By {}", self.sort.direction.arrow());
        f.render_widget(
            Paragraph::new(sort_label)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new("+ Add Customer")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Blue).bold())
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        let block = Block::default().borders(Borders::ALL).title(" Customers ");

        if self.loading {
            f.render_widget(
                Paragraph::new("Loading customers...")
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
            return;
        }
        if self.visible.is_empty() {
            let message = if self.search.value().trim().is_empty() {
                Text::from("No customers available. Add your first customer!")
            } else {
                Text::from(vec![
                    Line::from("No customers found with current filters"),
                    Line::from(Span::styled(
                        "Clear search (Esc)",
                        Style::default().fg(Color::Blue),
                    )),
                ])
            };
            f.render_widget(
                Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
            return;
        }

        // Two rows of chrome top and bottom around the data rows.
        let body_rows = area.height.saturating_sub(3) as usize;
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if body_rows > 0 && self.selected >= self.scroll_offset + body_rows {
            self.scroll_offset = self.selected + 1 - body_rows;
        }

        let header = Row::new([
            "#",
            "Customer Name",
            "Mobile",
            "Email",
            "Awaiting",
            "Approved",
            "Expired",
            "Unapproved",
        ])
        .style(Style::default().bold())
        .bottom_margin(1);

        let rows: Vec<Row> = self
            .visible
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(body_rows.max(1))
            .map(|(pos, &i)| {
                let c = &self.customers[i];
                let row = Row::new(vec![
                    Cell::from((pos + 1).to_string()),
                    Cell::from(c.name.as_str()),
                    Cell::from(c.mobile.as_str()),
                    Cell::from(c.email.as_str()),
                    counter_cell(c.proposals_awaiting, Color::Yellow),
                    counter_cell(c.approve_proposal, Color::Green),
                    counter_cell(c.expired_proposal, Color::DarkGray),
                    counter_cell(c.unapproved_proposal, Color::Red),
                ]);
                if focused && pos == self.selected {
                    row.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(16),
                Constraint::Length(13),
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .column_spacing(1)
        .block(block);
        f.render_widget(table, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let chunks =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(58)]).split(area);
        if !self.search.value().trim().is_empty() && !self.visible.is_empty() {
            let summary = format!(
                "Showing {} of {} customers",
                self.visible.len(),
                self.customers.len()
            );
            f.render_widget(
                Paragraph::new(summary).style(Style::default().fg(Color::DarkGray)),
                chunks[0],
            );
        }
        let hints = "a add  s sort  / search  r refresh  Enter actions  q quit";
        f.render_widget(
            Paragraph::new(hints)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
    }

    fn render_overlay(&self, f: &mut Frame, area: Rect, overlay: &ListOverlay) {
        match overlay {
            ListOverlay::Actions { placement, selected } => {
                self.render_actions_menu(f, *placement, *selected);
            }
            ListOverlay::Sort { selected } => self.render_sort_menu(f, *selected),
            ListOverlay::ConfirmDelete { focus_delete, .. } => {
                self.render_confirm(f, area, *focus_delete);
            }
            ListOverlay::DeleteFailed => self.render_delete_failed(f, area),
        }
    }

    fn render_actions_menu(&self, f: &mut Frame, placement: MenuPlacement, selected: usize) {
        let visible_row = self.selected.saturating_sub(self.scroll_offset) as u16;
        let trigger_row = self.table_area.y + 2 + visible_row;
        let x = self
            .table_area
            .right()
            .saturating_sub(MENU_WIDTH + 1)
            .max(self.table_area.x);
        let y = match placement {
            MenuPlacement::Below => trigger_row + 1,
            MenuPlacement::Above => trigger_row.saturating_sub(MENU_HEIGHT),
        };
        let rect = Rect::new(x, y, MENU_WIDTH, MENU_HEIGHT);

        let items: Vec<ListItem> = RowAction::ALL
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let mut style = Style::default();
                if *action == RowAction::Delete {
                    style = style.fg(Color::Red);
                }
                if i == selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(format!(" {} ", action.label())).style(style)
            })
            .collect();

        f.render_widget(Clear, rect);
        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(" Actions ")),
            rect,
        );
    }

    fn render_sort_menu(&self, f: &mut Frame, selected: usize) {
        let x = self
            .controls_area
            .right()
            .saturating_sub(18 + 14)
            .max(self.controls_area.x);
        let rect = Rect::new(x, self.controls_area.bottom(), 14, 5);

        let items: Vec<ListItem> = SortKey::ALL
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let mark = if *key == self.sort.key { "✓" } else { " " };
                let mut style = Style::default();
                if i == selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(format!(" {mark} {} ", key.label())).style(style)
            })
            .collect();

        f.render_widget(Clear, rect);
        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(" Sort By ")),
            rect,
        );
    }

    fn render_confirm(&self, f: &mut Frame, area: Rect, focus_delete: bool) {
        let rect = centered_rect(50, 30, area);
        f.render_widget(Clear, rect);

        let cancel_style = if focus_delete {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };
        let delete_style = if focus_delete {
            Style::default().fg(Color::Red).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Red)
        };
        let body = Text::from(vec![
            Line::from(""),
            Line::from(CONFIRM_DELETE),
            Line::from("This action cannot be undone."),
            Line::from(""),
            Line::from(vec![
                Span::styled("[ Cancel ]", cancel_style),
                Span::raw("   "),
                Span::styled("[ Delete ]", delete_style),
            ]),
        ]);
        f.render_widget(
            Paragraph::new(body).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Confirm Delete "),
            ),
            rect,
        );
    }

    fn render_delete_failed(&self, f: &mut Frame, area: Rect) {
        let rect = centered_rect(50, 25, area);
        f.render_widget(Clear, rect);
        let body = Text::from(vec![
            Line::from(""),
            Line::from(DELETE_FAILED),
            Line::from(""),
            Line::from(Span::styled(
                "[ OK ]",
                Style::default().add_modifier(Modifier::REVERSED),
            )),
        ]);
        f.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title(" Error ")),
            rect,
        );
    }
}

impl Default for CustomerListScreen {
    fn default() -> Self {
        CustomerListScreen::new()
    }
}

fn counter_cell(value: u32, color: Color) -> Cell<'static> {
    Cell::from(Span::styled(
        format!("● {value}"),
        Style::default().fg(color),
    ))
}
