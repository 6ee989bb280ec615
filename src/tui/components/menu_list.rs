//! # MenuList Component
//!
//! Draws the open branch as a ratatui `List`. It is filled each frame by the
//! engine through the [`Renderer`] visitor, then drawn as a normal component:
//!
//! ```rust,ignore
//! app.navigator.render(&mut tui.menu);   // engine → visitor callbacks
//! tui.menu.render(frame, area);          // visitor → ratatui widgets
//! ```
//!
//! The `ListState` persists across frames so long menus keep their scroll
//! offset.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::action::Action;
use crate::core::branch::Branch;
use crate::core::editable::EditableItem;
use crate::core::item::{BackItem, Item};
use crate::core::render::Renderer;
use crate::core::tree::MenuTree;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Default)]
pub struct MenuList {
    title: String,
    lines: Vec<Line<'static>>,
    list_state: ListState,
}

impl MenuList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Renderer for MenuList {
    fn render(&mut self, tree: &MenuTree, branch: &Branch) {
        self.title = branch.name().to_string();
        self.lines.clear();

        let mut selected = None;
        for (index, child) in tree.children(branch).enumerate() {
            child.render(self);
            if child.is_current() {
                selected = Some(index);
            }
        }
        self.list_state.select(selected);
    }

    fn render_item(&mut self, item: &Item) {
        self.lines.push(Line::from(item.name().to_string()));
    }

    fn render_back_item(&mut self, item: &BackItem) {
        self.lines.push(Line::from(Span::styled(
            format!("‹ {}", item.name()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    fn render_editable_item(&mut self, item: &EditableItem) {
        let value = if item.has_focus() {
            Span::styled(
                format!("◂ {} ▸", item.value_string()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(item.value_string(), Style::default().fg(Color::Cyan))
        };
        self.lines.push(Line::from(vec![
            Span::raw(item.name().to_string()),
            Span::raw("  "),
            value,
        ]));
    }

    fn render_branch(&mut self, branch: &Branch) {
        self.lines.push(Line::from(vec![
            Span::raw(branch.name().to_string()),
            Span::styled(" ›", Style::default().fg(Color::Green)),
        ]));
    }
}

impl Component for MenuList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .padding(Padding::horizontal(1));

        if self.lines.is_empty() {
            let empty = List::new([ListItem::new(Span::styled(
                "(empty)",
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self.lines.iter().cloned().map(ListItem::new).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl EventHandler for MenuList {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => Some(Action::Retreat),
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => Some(Action::Advance),
            TuiEvent::Submit | TuiEvent::Right | TuiEvent::InputChar('l' | ' ') => Some(Action::Activate),
            TuiEvent::Escape | TuiEvent::Left | TuiEvent::Backspace | TuiEvent::InputChar('h') => {
                Some(Action::Back)
            }
            TuiEvent::InputChar('r') => Some(Action::Reset),
            TuiEvent::InputChar('q') | TuiEvent::ForceQuit => Some(Action::Quit),
            _ => None,
        }
    }
}
