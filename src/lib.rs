//! Hierarchical menu navigation for small devices and terminals.
//!
//! [`core`] holds the engine; [`console`] and [`tui`] are host adapters.

pub mod console;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
