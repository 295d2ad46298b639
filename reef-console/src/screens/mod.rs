//! Console screens
//!
//! One module per page of the admin surface. Screens own their state,
//! consume key events, and hand side effects back to the app as small
//! action enums instead of spawning work themselves.

pub mod customer_form;
pub mod customers;
pub mod placeholder;

pub use customer_form::{CustomerFormScreen, FetchState, FormAction};
pub use customers::{CustomerListScreen, ListAction, ListOverlay, MenuPlacement, SortKey};
pub use placeholder::{PlaceholderAction, PlaceholderScreen};

/// Whether a text input is capturing keystrokes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}
