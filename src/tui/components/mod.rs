//! # TUI Components
//!
//! - `TitleBar`: stateless, props-based; path to the open branch and status
//! - `MenuList`: stateful; filled through the engine's `Renderer` visitor,
//!   drawn as a ratatui list, and maps navigation keys to core actions
//!
//! Each component file contains its state, rendering, event handling and
//! tests.

mod menu_list;
mod title_bar;

pub use menu_list::MenuList;
pub use title_bar::TitleBar;
