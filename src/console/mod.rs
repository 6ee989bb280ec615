//! # Console Adapter
//!
//! Line-oriented host for dumb terminals and serial links. Each input line is
//! one command; after every command that changed something the open branch is
//! printed again with the [`TextRenderer`].
//!
//! | Input          | Action   |
//! |----------------|----------|
//! | `n`, `+`       | Advance  |
//! | `p`, `-`       | Retreat  |
//! | `s`, empty     | Activate |
//! | `b`            | Back     |
//! | `r`            | Reset    |
//! | `q`            | Quit     |

use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::Receiver;

use crate::core::action::{Action, Effect, update};
use crate::core::render::TextRenderer;
use crate::core::state::App;

const GAUGE_WIDTH: usize = 10;

/// Maps one input line to an action. Unknown input yields `None`.
pub fn parse_command(line: &str) -> Option<Action> {
    match line.trim() {
        "n" | "+" => Some(Action::Advance),
        "p" | "-" => Some(Action::Retreat),
        "s" | "" => Some(Action::Activate),
        "b" => Some(Action::Back),
        "r" => Some(Action::Reset),
        "q" => Some(Action::Quit),
        _ => None,
    }
}

/// Runs until `q` or end of input.
pub fn run(app: &mut App, events: &Receiver<Action>, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut renderer = TextRenderer::with_gauge(GAUGE_WIDTH);
    draw(app, &mut renderer, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let Some(action) = parse_command(&line) else {
            writeln!(output, "? n/p/s/b/r/q")?;
            continue;
        };
        debug!("Console command {:?} -> {:?}", line.trim(), action);

        let mut effect = update(app, action);
        if effect == Effect::Quit {
            break;
        }
        while let Ok(event) = events.try_recv() {
            if update(app, event) == Effect::Render {
                effect = Effect::Render;
            }
        }

        if effect == Effect::Render {
            draw(app, &mut renderer, &mut output)?;
        }
    }

    info!("Console session ended");
    Ok(())
}

fn draw(app: &App, renderer: &mut TextRenderer, output: &mut impl Write) -> io::Result<()> {
    app.navigator.render(renderer);
    writeln!(output)?;
    if !app.status_message.is_empty() {
        writeln!(output, "[{}]", app.status_message)?;
    }
    output.write_all(renderer.take().as_bytes())?;
    output.flush()
}
