//! # Menu Engine
//!
//! The navigation core. It knows nothing about terminals, buttons or pixels.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │          CORE           │
//!                    │     (this module)       │
//!                    │                         │
//!                    │  • MenuTree (nodes)     │
//!                    │  • Navigator (cursor)   │
//!                    │  • Renderer (visitor)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No drawing.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  Console   │
//!          │  Adapter   │                │  Adapter   │
//!          │ (ratatui)  │                │  (lines)   │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`component`]: `Component`, `NodeId`, `Activation`
//! - [`item`], [`editable`], [`branch`]: the node kinds
//! - [`tree`]: the arena and list traversal
//! - [`navigator`]: the open-branch state machine
//! - [`render`]: the visitor trait and a plain-text renderer
//! - [`action`], [`state`]: host-facing reducer
//! - [`config`]: TOML menu definitions and option resolution

pub mod action;
pub mod branch;
pub mod component;
pub mod config;
pub mod editable;
pub mod item;
pub mod navigator;
pub mod render;
pub mod state;
pub mod tree;

pub use branch::Branch;
pub use component::{Activation, Component, NodeId};
pub use editable::{EditableItem, FormatFn};
pub use item::{BackItem, Item, SelectFn};
pub use navigator::Navigator;
pub use render::{Renderer, TextRenderer};
pub use tree::MenuTree;
