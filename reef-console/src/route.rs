//! Route grammar of the admin surface
//!
//! Paths mirror the hosted admin app:
//!
//! ```text
//! /                      -> /customers (unconditional redirect)
//! /home                  -> placeholder
//! /templates             -> placeholder
//! /customers             -> customer list
//! /customers/new         -> create form
//! /customers/edit/{id}   -> edit form
//! /customers/view/{id}   -> read-only form
//! /employees             -> placeholder
//! /settings              -> placeholder
//! ```

use std::fmt;

use thiserror::Error;

/// How the customer form behaves for a given route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
    View,
}

impl FormMode {
    fn segment(self) -> &'static str {
        match self {
            FormMode::Create => "new",
            FormMode::Edit => "edit",
            FormMode::View => "view",
        }
    }
}

/// One screen of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Templates,
    Customers,
    /// The form keeps working without an id in edit/view; it simply
    /// starts blank and skips the fetch.
    CustomerForm {
        mode: FormMode,
        id: Option<String>,
    },
    Employees,
    Settings,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),
}

impl Route {
    /// Parse a path as the hosted app's router would.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_start_matches('/').trim_end_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());

        let route = match segments.next() {
            // Root redirects straight to the customer list.
            None => Route::Customers,
            Some("home") => Route::Home,
            Some("templates") => Route::Templates,
            Some("employees") => Route::Employees,
            Some("settings") => Route::Settings,
            Some("customers") => match segments.next() {
                None => Route::Customers,
                Some(action) => {
                    let id = segments.next().map(str::to_string);
                    match action {
                        // A trailing id after "new" is ignored: create
                        // never addresses an existing record.
                        "new" => Route::CustomerForm { mode: FormMode::Create, id: None },
                        "edit" => Route::CustomerForm { mode: FormMode::Edit, id },
                        "view" => Route::CustomerForm { mode: FormMode::View, id },
                        _ => return Err(RouteError::Unknown(path.to_string())),
                    }
                }
            },
            Some(_) => return Err(RouteError::Unknown(path.to_string())),
        };

        if segments.next().is_some() {
            return Err(RouteError::Unknown(path.to_string()));
        }
        Ok(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/home"),
            Route::Templates => write!(f, "/templates"),
            Route::Customers => write!(f, "/customers"),
            Route::CustomerForm { mode, id } => match id {
                Some(id) => write!(f, "/customers/{}/{}", mode.segment(), id),
                None => write!(f, "/customers/{}", mode.segment()),
            },
            Route::Employees => write!(f, "/employees"),
            Route::Settings => write!(f, "/settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_customers() {
        assert_eq!(Route::parse("/").unwrap(), Route::Customers);
        assert_eq!(Route::parse("").unwrap(), Route::Customers);
    }

    #[test]
    fn top_level_pages_parse() {
        assert_eq!(Route::parse("/home").unwrap(), Route::Home);
        assert_eq!(Route::parse("/templates").unwrap(), Route::Templates);
        assert_eq!(Route::parse("/customers").unwrap(), Route::Customers);
        assert_eq!(Route::parse("/employees").unwrap(), Route::Employees);
        assert_eq!(Route::parse("/settings").unwrap(), Route::Settings);
    }

    #[test]
    fn form_routes_carry_mode_and_id() {
        assert_eq!(
            Route::parse("/customers/new").unwrap(),
            Route::CustomerForm { mode: FormMode::Create, id: None }
        );
        assert_eq!(
            Route::parse("/customers/edit/65f1c0").unwrap(),
            Route::CustomerForm { mode: FormMode::Edit, id: Some("65f1c0".to_string()) }
        );
        assert_eq!(
            Route::parse("/customers/view/65f1c0").unwrap(),
            Route::CustomerForm { mode: FormMode::View, id: Some("65f1c0".to_string()) }
        );
    }

    #[test]
    fn edit_without_id_still_parses() {
        assert_eq!(
            Route::parse("/customers/edit").unwrap(),
            Route::CustomerForm { mode: FormMode::Edit, id: None }
        );
    }

    #[test]
    fn create_ignores_a_stray_id() {
        assert_eq!(
            Route::parse("/customers/new/abc").unwrap(),
            Route::CustomerForm { mode: FormMode::Create, id: None }
        );
    }

    #[test]
    fn unknown_routes_are_rejected() {
        assert!(Route::parse("/nope").is_err());
        assert!(Route::parse("/customers/delete/1").is_err());
        assert!(Route::parse("/customers/edit/1/extra").is_err());
    }

    #[test]
    fn display_round_trips() {
        for path in ["/home", "/customers", "/customers/new", "/customers/edit/a1"] {
            let route = Route::parse(path).unwrap();
            assert_eq!(route.to_string(), path);
            assert_eq!(Route::parse(&route.to_string()).unwrap(), route);
        }
    }
}
