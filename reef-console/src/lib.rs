//! Reef Console - terminal admin UI for the customers API
//!
//! # Module structure
//!
//! ```text
//! reef-console/src/
//! ├── app.rs         # Root state, key routing, API event dispatch
//! ├── bridge.rs      # Background API tasks and their result channel
//! ├── chrome.rs      # Sidebar, notices, log pane, popup helpers
//! ├── config.rs      # Console configuration
//! ├── demo.rs        # Seeded in-memory directory for --demo mode
//! ├── route.rs       # Route grammar of the admin surface
//! └── screens/       # Customers list, customer form, placeholders
//! ```
//!
//! The console talks to the API through `reef_client::CustomerDirectory`,
//! so demo mode and tests swap in an in-memory store without touching
//! screen code.

pub mod app;
pub mod bridge;
pub mod chrome;
pub mod config;
pub mod demo;
pub mod route;
pub mod screens;

// Re-export public types
pub use app::{App, Focus, ui};
pub use bridge::ApiEvent;
pub use config::ConsoleConfig;
pub use demo::DemoDirectory;
pub use route::{FormMode, Route, RouteError};
