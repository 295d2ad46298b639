//! Customer form screen
//!
//! One screen serves create, edit and view. Edit and view fetch the
//! record on entry; create starts from a blank draft. Validation runs
//! on submit and pins the first problem to each field.

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use shared::validation::{validate_draft, CustomerField, FieldErrors};
use shared::{Customer, CustomerDraft, CustomerPayload};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::route::FormMode;
use crate::screens::InputMode;

const LOAD_FAILED: &str = "Failed to load customer data. Please try again.";
const NOT_FOUND: &str = "Customer not found";

/// Outcome of the record fetch backing an edit/view form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Ready,
    NotFound,
    Failed,
}

/// Side effect requested by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Draft validated; send it to the API.
    Submit {
        id: Option<String>,
        payload: CustomerPayload,
    },
    /// Validation failed; field messages are set.
    Invalid,
    /// Leave the form without saving.
    Cancel,
    /// Leave the console.
    Quit,
}

/// Focusable slot on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Field(CustomerField),
    Submit,
    Cancel,
}

/// State of the customer form page.
pub struct CustomerFormScreen {
    mode: FormMode,
    id: Option<String>,
    draft: CustomerDraft,
    errors: FieldErrors,
    fetch: FetchState,
    /// Index into the slot list.
    active: usize,
    editing: InputMode,
    input: Input,
    submitting: bool,
}

impl CustomerFormScreen {
    /// Build the screen for a route. Edit and view with an id start in
    /// the loading state and expect a fetch result; everything else is
    /// immediately editable.
    pub fn new(mode: FormMode, id: Option<String>) -> Self {
        let fetch = match (mode, &id) {
            (FormMode::Create, _) | (_, None) => FetchState::Ready,
            (_, Some(_)) => FetchState::Loading,
        };
        CustomerFormScreen {
            mode,
            id,
            draft: CustomerDraft::default(),
            errors: FieldErrors::new(),
            fetch,
            active: 0,
            editing: InputMode::Normal,
            input: Input::default(),
            submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetch
    }

    pub fn needs_fetch(&self) -> bool {
        self.fetch == FetchState::Loading
    }

    pub fn is_editing(&self) -> bool {
        self.editing == InputMode::Editing
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Install the fetched record into the draft.
    pub fn set_loaded(&mut self, customer: &Customer) {
        self.draft = customer.to_draft();
        self.fetch = FetchState::Ready;
    }

    pub fn set_not_found(&mut self) {
        self.fetch = FetchState::NotFound;
    }

    pub fn set_fetch_failed(&mut self) {
        self.fetch = FetchState::Failed;
    }

    /// Re-arm the submit button after a failed save.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    fn slots(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = CustomerField::ALL.iter().copied().map(Slot::Field).collect();
        match self.mode {
            // View has no save, just a way back.
            FormMode::View => slots.push(Slot::Cancel),
            _ => {
                slots.push(Slot::Submit);
                slots.push(Slot::Cancel);
            }
        }
        slots
    }

    fn active_slot(&self) -> Slot {
        self.slots()[self.active]
    }

    /// Email is server identity once a record exists, so it locks in
    /// edit. View locks everything.
    fn field_editable(&self, field: CustomerField) -> bool {
        match self.mode {
            FormMode::Create => true,
            FormMode::Edit => field != CustomerField::Email,
            FormMode::View => false,
        }
    }

    fn move_up(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.active + 1 < self.slots().len() {
            self.active += 1;
        }
    }

    fn start_editing(&mut self, field: CustomerField) {
        self.input = Input::from(self.draft.field(field));
        self.editing = InputMode::Editing;
    }

    fn stop_editing(&mut self) {
        self.editing = InputMode::Normal;
    }

    fn submit(&mut self) -> Option<FormAction> {
        if self.submitting {
            return None;
        }
        match validate_draft(&self.draft) {
            Ok(payload) => {
                self.errors = FieldErrors::new();
                self.submitting = true;
                Some(FormAction::Submit {
                    id: self.id.clone(),
                    payload,
                })
            }
            Err(errors) => {
                self.errors = errors;
                Some(FormAction::Invalid)
            }
        }
    }

    /// Feed a key press to the form.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormAction> {
        if self.fetch != FetchState::Ready {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(FormAction::Cancel),
                KeyCode::Char('q') => Some(FormAction::Quit),
                _ => None,
            };
        }
        match self.editing {
            InputMode::Editing => {
                self.handle_editing_key(key);
                None
            }
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.stop_editing(),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.stop_editing();
                self.move_down();
            }
            KeyCode::Up => {
                self.stop_editing();
                self.move_up();
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
                if let Slot::Field(field) = self.active_slot() {
                    // Draft tracks every keystroke; touching a field
                    // retires its last validation message.
                    self.draft.set_field(field, self.input.value().to_string());
                    self.errors.clear(field);
                }
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<FormAction> {
        match key.code {
            KeyCode::Esc => Some(FormAction::Cancel),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.move_down();
                None
            }
            KeyCode::Enter | KeyCode::Char('e') => match self.active_slot() {
                Slot::Field(field) => {
                    if self.field_editable(field) {
                        self.start_editing(field);
                    }
                    None
                }
                Slot::Submit => self.submit(),
                Slot::Cancel => Some(FormAction::Cancel),
            },
            KeyCode::Char('q') => Some(FormAction::Quit),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Customer",
            FormMode::Edit => "Edit Customer",
            FormMode::View => "View Customer",
        }
    }

    fn submit_label(&self) -> &'static str {
        match (self.mode, self.submitting) {
            (FormMode::Create, false) => "Add Customer",
            (FormMode::Create, true) => "Adding...",
            (_, false) => "Save Changes",
            (_, true) => "Saving...",
        }
    }

    fn cancel_label(&self) -> &'static str {
        match self.mode {
            FormMode::View => "Back",
            _ => "Cancel",
        }
    }

    /// Draw the form into `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        match self.fetch {
            FetchState::Loading => {
                self.render_message(f, inner, "Loading customer data...", Style::default());
                return;
            }
            FetchState::NotFound => {
                self.render_message(f, inner, NOT_FOUND, Style::default().fg(Color::Red));
                return;
            }
            FetchState::Failed => {
                self.render_message(f, inner, LOAD_FAILED, Style::default().fg(Color::Red));
                return;
            }
            FetchState::Ready => {}
        }

        let rows = Layout::vertical([
            Constraint::Length(1), // Customer Information
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // spacer
            Constraint::Length(1), // Proposal Information
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // spacer
            Constraint::Length(1), // buttons
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let section = Style::default().bold().fg(Color::Cyan);
        f.render_widget(Paragraph::new("Customer Information").style(section), rows[0]);
        f.render_widget(Paragraph::new("Proposal Information").style(section), rows[5]);

        let field_rows = [rows[1], rows[2], rows[3], rows[6], rows[7], rows[8], rows[9]];
        for (i, field) in CustomerField::ALL.iter().enumerate() {
            self.render_field(f, field_rows[i], *field, i);
        }

        self.render_buttons(f, rows[11]);

        let hints = match self.mode {
            FormMode::View => "↑/↓ move  Enter back  Esc back  q quit",
            _ => "↑/↓ move  Enter edit/activate  Esc back  q quit",
        };
        f.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            rows[13],
        );
    }

    fn render_message(&self, f: &mut Frame, area: Rect, text: &str, style: Style) {
        let rows = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
        f.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            rows[1],
        );
        if self.fetch != FetchState::Loading {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "[ Back ]",
                    Style::default().add_modifier(Modifier::REVERSED),
                ))
                .alignment(Alignment::Center),
                rows[2],
            );
        }
    }

    fn render_field(&self, f: &mut Frame, area: Rect, field: CustomerField, slot_index: usize) {
        let is_active = self.active == slot_index;
        let editable = self.field_editable(field);
        let editing_here = is_active && self.editing == InputMode::Editing;

        let label_style = if is_active {
            Style::default().bold()
        } else {
            Style::default()
        };
        let value_style = if editing_here {
            Style::default().fg(Color::Yellow)
        } else if !editable {
            Style::default().fg(Color::DarkGray)
        } else if is_active {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let marker = if is_active { ">" } else { " " };
        let value = if editing_here {
            self.input.value()
        } else {
            self.draft.field(field)
        };
        let shown = if value.is_empty() && !editing_here {
            Span::styled(" ", value_style)
        } else {
            Span::styled(value.to_string(), value_style)
        };

        let mut spans = vec![
            Span::raw(format!("{marker} ")),
            Span::styled(format!("{:<22}", field.label()), label_style),
            shown,
        ];
        if !editable && self.mode == FormMode::Edit {
            spans.push(Span::styled(
                "  (locked)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(message) = self.errors.get(field) {
            spans.push(Span::styled(
                format!("  ✗ {message}"),
                Style::default().fg(Color::Red),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);

        if editing_here {
            let value_x = area.x + 2 + 22;
            let width = area.width.saturating_sub(2 + 22) as usize;
            let scroll = self.input.visual_scroll(width.max(1));
            f.set_cursor_position((
                value_x + (self.input.visual_cursor().max(scroll) - scroll) as u16,
                area.y,
            ));
        }
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect) {
        let slots = self.slots();
        let mut spans: Vec<Span> = vec![Span::raw("  ")];
        for (i, slot) in slots.iter().enumerate() {
            let (label, base) = match slot {
                Slot::Field(_) => continue,
                Slot::Submit => (self.submit_label(), Style::default().fg(Color::Blue)),
                Slot::Cancel => (self.cancel_label(), Style::default()),
            };
            let style = if self.active == i {
                base.add_modifier(Modifier::REVERSED)
            } else {
                base
            };
            spans.push(Span::styled(format!("[ {label} ]"), style));
            spans.push(Span::raw("   "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use shared::validation::{
        MSG_COUNTER_POSITIVE, MSG_EMAIL_REQUIRED, MSG_MOBILE_REQUIRED, MSG_NAME_REQUIRED,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut CustomerFormScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn sample_customer() -> Customer {
        Customer {
            id: "65f1c0".to_string(),
            name: "Dana Levi".to_string(),
            mobile: "0521234567".to_string(),
            email: "dana@example.com".to_string(),
            proposals_awaiting: 3,
            approve_proposal: 5,
            expired_proposal: 1,
            unapproved_proposal: 0,
        }
    }

    #[test]
    fn create_form_starts_blank_and_ready() {
        let screen = CustomerFormScreen::new(FormMode::Create, None);
        assert_eq!(screen.fetch_state(), FetchState::Ready);
        assert_eq!(screen.title(), "Add New Customer");
        assert_eq!(screen.submit_label(), "Add Customer");
        assert_eq!(screen.draft().name, "");
        assert_eq!(screen.draft().proposals_awaiting, "0");
    }

    #[test]
    fn edit_with_id_waits_for_the_fetch() {
        let mut screen = CustomerFormScreen::new(FormMode::Edit, Some("65f1c0".to_string()));
        assert!(screen.needs_fetch());
        screen.set_loaded(&sample_customer());
        assert_eq!(screen.fetch_state(), FetchState::Ready);
        assert_eq!(screen.draft().name, "Dana Levi");
        assert_eq!(screen.draft().proposals_awaiting, "3");
        assert_eq!(screen.submit_label(), "Save Changes");
    }

    #[test]
    fn edit_without_id_skips_the_fetch() {
        let screen = CustomerFormScreen::new(FormMode::Edit, None);
        assert_eq!(screen.fetch_state(), FetchState::Ready);
        assert!(!screen.needs_fetch());
    }

    #[test]
    fn typing_updates_the_draft() {
        let mut screen = CustomerFormScreen::new(FormMode::Create, None);
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.is_editing());
        type_text(&mut screen, "Noa");
        screen.handle_key(key(KeyCode::Esc));
        assert!(!screen.is_editing());
        assert_eq!(screen.draft().name, "Noa");
    }

    #[test]
    fn empty_submit_reports_every_required_field() {
        let mut screen = CustomerFormScreen::new(FormMode::Create, None);
        screen.draft.proposals_awaiting.clear();
        for _ in 0..7 {
            screen.handle_key(key(KeyCode::Down));
        }
        let action = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Some(FormAction::Invalid));
        assert!(!screen.is_submitting());
        assert_eq!(
            screen.errors().get(CustomerField::Name),
            Some(MSG_NAME_REQUIRED)
        );
        assert_eq!(
            screen.errors().get(CustomerField::Mobile),
            Some(MSG_MOBILE_REQUIRED)
        );
        assert_eq!(
            screen.errors().get(CustomerField::Email),
            Some(MSG_EMAIL_REQUIRED)
        );
        // A blanked counter coerces to zero rather than erroring.
        assert_eq!(screen.errors().get(CustomerField::ProposalsAwaiting), None);
    }

    #[test]
    fn editing_a_field_clears_its_error_and_keeps_the_rest() {
        let mut screen = CustomerFormScreen::new(FormMode::Create, None);
        for _ in 0..7 {
            screen.handle_key(key(KeyCode::Down));
        }
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.errors().get(CustomerField::Name).is_some());

        for _ in 0..7 {
            screen.handle_key(key(KeyCode::Up));
        }
        screen.handle_key(key(KeyCode::Enter));
        type_text(&mut screen, "N");
        assert_eq!(screen.errors().get(CustomerField::Name), None);
        assert_eq!(
            screen.errors().get(CustomerField::Mobile),
            Some(MSG_MOBILE_REQUIRED)
        );
    }

    #[test]
    fn counter_text_must_parse_as_a_positive_number() {
        let mut screen = CustomerFormScreen::new(FormMode::Create, None);
        screen.draft.name = "Noa".to_string();
        screen.draft.mobile = "0521111111".to_string();
        screen.draft.email = "noa@example.com".to_string();
        screen.draft.expired_proposal = "-2".to_string();
        for _ in 0..7 {
            screen.handle_key(key(KeyCode::Down));
        }
        let action = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Some(FormAction::Invalid));
        assert_eq!(
            screen.errors().get(CustomerField::ExpiredProposal),
            Some(MSG_COUNTER_POSITIVE)
        );
    }

    #[test]
    fn valid_submit_emits_once_and_blocks_resubmission() {
        let mut screen = CustomerFormScreen::new(FormMode::Edit, Some("65f1c0".to_string()));
        screen.set_loaded(&sample_customer());
        for _ in 0..7 {
            screen.handle_key(key(KeyCode::Down));
        }
        let action = screen.handle_key(key(KeyCode::Enter));
        match action {
            Some(FormAction::Submit { id, payload }) => {
                assert_eq!(id.as_deref(), Some("65f1c0"));
                assert_eq!(payload.name, "Dana Levi");
                assert_eq!(payload.proposals_awaiting, 3);
            }
            other => panic!("expected a submit, got {other:?}"),
        }
        assert!(screen.is_submitting());
        assert_eq!(screen.submit_label(), "Saving...");

        // The button stays dead until the save settles.
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), None);
        screen.submit_failed();
        assert!(matches!(
            screen.handle_key(key(KeyCode::Enter)),
            Some(FormAction::Submit { .. })
        ));
    }

    #[test]
    fn email_locks_in_edit_mode() {
        let mut screen = CustomerFormScreen::new(FormMode::Edit, Some("65f1c0".to_string()));
        screen.set_loaded(&sample_customer());
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.active_slot(), Slot::Field(CustomerField::Email));
        screen.handle_key(key(KeyCode::Enter));
        assert!(!screen.is_editing());
        type_text(&mut screen, "x");
        assert_eq!(screen.draft().email, "dana@example.com");
    }

    #[test]
    fn view_mode_locks_every_field_and_offers_back() {
        let mut screen = CustomerFormScreen::new(FormMode::View, Some("65f1c0".to_string()));
        screen.set_loaded(&sample_customer());
        assert_eq!(screen.title(), "View Customer");
        assert_eq!(screen.cancel_label(), "Back");
        assert_eq!(screen.slots().len(), 8);

        screen.handle_key(key(KeyCode::Enter));
        assert!(!screen.is_editing());
        for _ in 0..7 {
            screen.handle_key(key(KeyCode::Down));
        }
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            Some(FormAction::Cancel)
        );
    }

    #[test]
    fn esc_leaves_the_form() {
        let mut screen = CustomerFormScreen::new(FormMode::Create, None);
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc)),
            Some(FormAction::Cancel)
        );
    }

    #[test]
    fn failed_fetch_only_offers_a_way_out() {
        let mut screen = CustomerFormScreen::new(FormMode::View, Some("gone".to_string()));
        screen.set_not_found();
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), None);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            Some(FormAction::Cancel)
        );

        let mut screen = CustomerFormScreen::new(FormMode::Edit, Some("65f1c0".to_string()));
        screen.set_fetch_failed();
        assert_eq!(screen.fetch_state(), FetchState::Failed);
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc)),
            Some(FormAction::Cancel)
        );
    }

    #[test]
    fn enter_while_editing_advances_to_the_next_field() {
        let mut screen = CustomerFormScreen::new(FormMode::Create, None);
        screen.handle_key(key(KeyCode::Enter));
        type_text(&mut screen, "Noa");
        screen.handle_key(key(KeyCode::Enter));
        assert!(!screen.is_editing());
        assert_eq!(screen.active_slot(), Slot::Field(CustomerField::Mobile));
    }
}
