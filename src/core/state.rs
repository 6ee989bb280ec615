//! # Application State
//!
//! Everything a host needs to drive one menu:
//!
//! ```text
//! App
//! ├── navigator: Navigator       // tree + open branch
//! ├── options: NavOptions        // wrap / reset-on-select policy
//! └── status_message: String     // last thing worth telling the user
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use super::navigator::Navigator;

/// Call-site policy for navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Advance past the last child goes to the first (and back), and edited
    /// values roll over instead of saturating.
    pub wrap: bool,
    /// After a leaf action completes, return to the root.
    pub reset_on_select: bool,
}

pub struct App {
    pub navigator: Navigator,
    pub options: NavOptions,
    pub status_message: String,
}

impl App {
    pub fn new(navigator: Navigator, options: NavOptions) -> Self {
        Self {
            navigator,
            options,
            status_message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(Navigator::new("Main"), NavOptions::default());
        assert!(app.status_message.is_empty());
        assert!(!app.options.wrap);
        assert!(!app.options.reset_on_select);
        assert!(app.navigator.is_at_root());
    }
}
