//! # Configuration
//!
//! Centralizes navigation settings and the menu layout with a clear override
//! hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.menunav/menu.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The menu tree itself comes from the `[menu]` table, or a built-in demo
//! menu when the file has none.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use super::action::Action;
use super::branch::Branch;
use super::component::NodeId;
use super::editable::EditableItem;
use super::item::{BackItem, Item};
use super::navigator::Navigator;
use super::state::NavOptions;
use super::tree::MenuTree;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    pub menu: Option<MenuDef>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub wrap: Option<bool>,
    pub reset_on_select: Option<bool>,
    pub max_children: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MenuDef {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDef {
    Item {
        name: String,
    },
    Back {
        #[serde(default = "default_back_name")]
        name: String,
    },
    Number {
        name: String,
        #[serde(default)]
        value: f32,
        #[serde(default)]
        min: f32,
        #[serde(default = "default_max")]
        max: f32,
        #[serde(default = "default_step")]
        step: f32,
        unit: Option<String>,
        precision: Option<usize>,
    },
    Branch {
        name: String,
        #[serde(default)]
        items: Vec<ItemDef>,
    },
}

// ============================================================================
// Defaults
// ============================================================================

fn default_back_name() -> String {
    "Back".to_string()
}

fn default_max() -> f32 {
    100.0
}

fn default_step() -> f32 {
    1.0
}

impl Default for MenuDef {
    fn default() -> Self {
        let number = |name: &str,
                      value: f32,
                      min: f32,
                      max: f32,
                      step: f32,
                      unit: Option<&str>,
                      precision: Option<usize>| ItemDef::Number {
            name: name.to_string(),
            value,
            min,
            max,
            step,
            unit: unit.map(str::to_string),
            precision,
        };
        let item = |name: &str| ItemDef::Item { name: name.to_string() };

        MenuDef {
            name: "Main".to_string(),
            items: vec![
                item("Start"),
                ItemDef::Branch {
                    name: "Settings".to_string(),
                    items: vec![
                        number("Brightness", 5.0, 0.0, 10.0, 1.0, None, None),
                        number("Volume", 50.0, 0.0, 100.0, 5.0, Some("%"), None),
                        number("Temperature", 21.0, 15.0, 30.0, 0.5, Some("°C"), Some(1)),
                        ItemDef::Back { name: default_back_name() },
                    ],
                },
                ItemDef::Branch {
                    name: "About".to_string(),
                    items: vec![
                        item(concat!("Version ", env!("CARGO_PKG_VERSION"))),
                        ItemDef::Back { name: default_back_name() },
                    ],
                },
                item("Shutdown"),
            ],
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub options: NavOptions,
    pub max_children: Option<usize>,
    pub menu: MenuDef,
}

/// Values given on the command line; `None` = not specified.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub wrap: Option<bool>,
    pub reset_on_select: Option<bool>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menunav/menu.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menunav").join("menu.toml"))
}

/// Load config from `path`, or from `~/.menunav/menu.toml` when `None`.
///
/// A missing default file is generated and `MenuConfig::default()` returned.
/// An explicitly given path must exist.
pub fn load_config(path: Option<&Path>) -> Result<MenuConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            Some(p) => {
                info!("No config file found, generating default at {}", p.display());
                generate_default_config(&p);
                return Ok(MenuConfig::default());
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(MenuConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<MenuConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Menu Navigator Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [navigation]
# wrap = false              # Or set MENUNAV_WRAP=1
# reset_on_select = false   # Or set MENUNAV_RESET_ON_SELECT=1
# max_children = 16         # Attaches beyond this are dropped

# [menu]
# name = "Main"
#
# [[menu.items]]
# kind = "item"
# name = "Start"
#
# [[menu.items]]
# kind = "branch"
# name = "Settings"
#
# [[menu.items.items]]
# kind = "number"
# name = "Volume"
# value = 50
# min = 0
# max = 100
# step = 5
# unit = "%"
#
# [[menu.items.items]]
# kind = "back"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MenuConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &MenuConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let flag = |cli: Option<bool>, key: &str, file: Option<bool>| {
        cli.or_else(|| env(key).and_then(|v| parse_flag(&v)))
            .or(file)
            .unwrap_or(false)
    };

    ResolvedConfig {
        options: NavOptions {
            wrap: flag(cli.wrap, "MENUNAV_WRAP", config.navigation.wrap),
            reset_on_select: flag(
                cli.reset_on_select,
                "MENUNAV_RESET_ON_SELECT",
                config.navigation.reset_on_select,
            ),
        },
        max_children: config.navigation.max_children,
        menu: config.menu.clone().unwrap_or_default(),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring unrecognized flag value '{}'", other);
            None
        }
    }
}

// ============================================================================
// Building
// ============================================================================

/// Builds a navigator for `menu`. Item callbacks report through `events`.
///
/// Branches hold at most `max_children` entries; the rest are dropped with a
/// warning.
pub fn build_navigator(menu: &MenuDef, max_children: Option<usize>, events: &Sender<Action>) -> Navigator {
    let root = new_branch(&menu.name, max_children);
    let mut tree = MenuTree::with_root(root);
    let root = tree.root();
    attach_all(&mut tree, root, &menu.items, max_children, events);
    Navigator::from_tree(tree)
}

fn new_branch(name: &str, max_children: Option<usize>) -> Branch {
    match max_children {
        Some(max) => Branch::with_capacity(name, max),
        None => Branch::new(name),
    }
}

fn attach_all(
    tree: &mut MenuTree,
    parent: NodeId,
    items: &[ItemDef],
    max_children: Option<usize>,
    events: &Sender<Action>,
) {
    for def in items {
        match def {
            ItemDef::Item { name } => {
                let tx = events.clone();
                tree.attach(
                    parent,
                    Item::new(name).on_select(move |item| {
                        notify(&tx, Action::ItemSelected(item.name().to_string()));
                    }),
                );
            }
            ItemDef::Back { name } => {
                tree.attach(parent, BackItem::new(name));
            }
            ItemDef::Number {
                name,
                value,
                min,
                max,
                step,
                unit,
                precision,
            } => {
                if ![*value, *min, *max, *step].iter().all(|n| n.is_finite()) {
                    warn!("Number item '{}' has non-finite settings; substituting defaults", name);
                }
                let tx = events.clone();
                let unit = unit.clone().unwrap_or_default();
                let precision = *precision;
                let item = EditableItem::new(name, *value, *min, *max, *step)
                    .with_format(move |v| match precision {
                        Some(p) => format!("{v:.p$}{unit}"),
                        None => format!("{v}{unit}"),
                    })
                    .on_select(move |item| {
                        notify(
                            &tx,
                            Action::ValueCommitted {
                                name: item.name().to_string(),
                                value: item.value_string(),
                            },
                        );
                    });
                tree.attach(parent, item);
            }
            ItemDef::Branch { name, items } => {
                if let Some(id) = tree.attach(parent, new_branch(name, max_children)) {
                    attach_all(tree, id, items, max_children, events);
                }
            }
        }
    }
}

fn notify(tx: &Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("Failed to send menu event: receiver dropped");
    }
}
