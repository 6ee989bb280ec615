//! # Actions
//!
//! Everything that can happen to a running menu becomes an `Action`.
//! User presses Down? That's `Action::Advance`.
//! A value edit finished? That's `Action::ValueCommitted { .. }`, sent by the
//! item's callback over a channel.
//!
//! ```text
//! App + Action  →  update()  →  Effect
//! ```
//!
//! The host adapters (console, tui) only translate input into actions and
//! act on the returned effect.

use log::{debug, info};

use super::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Advance,
    Retreat,
    Activate,
    Back,
    Reset,
    Quit,
    /// A plain item's callback ran.
    ItemSelected(String),
    /// An editable item left edit mode with this value.
    ValueCommitted { name: String, value: String },
}

/// What the host should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Render,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let wrap = app.options.wrap;
    match action {
        Action::Advance => changed(app.navigator.advance(wrap)),
        Action::Retreat => changed(app.navigator.retreat(wrap)),
        Action::Activate => {
            app.navigator.activate(app.options.reset_on_select);
            app.status_message = if app.navigator.editing() {
                "Editing".to_string()
            } else {
                String::new()
            };
            Effect::Render
        }
        Action::Back => changed(app.navigator.return_to_parent()),
        Action::Reset => {
            app.navigator.reset();
            app.status_message.clear();
            Effect::Render
        }
        Action::Quit => Effect::Quit,
        Action::ItemSelected(name) => {
            info!("Selected '{}'", name);
            app.status_message = format!("Selected: {name}");
            Effect::Render
        }
        Action::ValueCommitted { name, value } => {
            debug!("Committed '{}' = {}", name, value);
            app.status_message = format!("{name} set to {value}");
            Effect::Render
        }
    }
}

fn changed(moved: bool) -> Effect {
    if moved { Effect::Render } else { Effect::None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::NavOptions;
    use crate::test_support::scenario;

    fn test_app(options: NavOptions) -> App {
        App::new(scenario().0, options)
    }

    #[test]
    fn test_advance_renders_only_when_moved() {
        let mut app = test_app(NavOptions::default());

        assert_eq!(update(&mut app, Action::Advance), Effect::Render);
        assert_eq!(update(&mut app, Action::Advance), Effect::None);
    }

    #[test]
    fn test_wrap_option_is_applied() {
        let mut app = test_app(NavOptions {
            wrap: true,
            ..Default::default()
        });

        update(&mut app, Action::Advance);
        assert_eq!(update(&mut app, Action::Advance), Effect::Render);
        assert_eq!(app.navigator.current_branch().current_index(), 0);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut app = test_app(NavOptions::default());
        assert_eq!(update(&mut app, Action::Back), Effect::None);
    }

    #[test]
    fn test_activate_sets_editing_status() {
        let mut app = test_app(NavOptions::default());
        update(&mut app, Action::Advance);
        update(&mut app, Action::Activate);
        update(&mut app, Action::Advance);

        update(&mut app, Action::Activate);
        assert_eq!(app.status_message, "Editing");

        update(&mut app, Action::Activate);
        assert_eq!(app.status_message, "");
    }

    #[test]
    fn test_callback_actions_update_status() {
        let mut app = test_app(NavOptions::default());

        update(&mut app, Action::ItemSelected("Start".into()));
        assert_eq!(app.status_message, "Selected: Start");

        update(
            &mut app,
            Action::ValueCommitted {
                name: "Level".into(),
                value: "7".into(),
            },
        );
        assert_eq!(app.status_message, "Level set to 7");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app(NavOptions::default());
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
