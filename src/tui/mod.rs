//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the open branch,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws when an action reported `Effect::Render`, a callback event
//! arrived, or the terminal was resized.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::MenuList;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    pub menu: MenuList,
}

impl TuiState {
    pub fn new() -> Self {
        Self { menu: MenuList::new() }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(mut app: App, events: Receiver<Action>) -> io::Result<()> {
    let mut terminal = ratatui::init();
    info!("Terminal initialized");

    let result = event_loop(&mut terminal, &mut app, &events);

    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App, events: &Receiver<Action>) -> io::Result<()> {
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(IDLE_POLL);
        for event in first_event.into_iter().chain(std::iter::from_fn(poll_event_immediate)) {
            if matches!(event, TuiEvent::Resize) {
                needs_redraw = true;
                continue;
            }
            let Some(action) = tui.menu.handle_event(&event) else {
                continue;
            };
            match update(app, action) {
                Effect::Quit => return Ok(()),
                Effect::Render => needs_redraw = true,
                Effect::None => {}
            }
        }

        // Callback events raised by selected items
        while let Ok(action) = events.try_recv() {
            debug!("Event loop received: {:?}", action);
            if update(app, action) == Effect::Render {
                needs_redraw = true;
            }
        }
    }
}
