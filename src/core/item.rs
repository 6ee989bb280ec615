//! Plain leaf items: `Item` runs a callback, `BackItem` runs a callback and
//! then asks the navigator to go up one level.

/// Callback fired when a node is selected. Receives the node itself.
pub type SelectFn<T> = Box<dyn FnMut(&T)>;

pub struct Item {
    name: String,
    pub(crate) current: bool,
    on_select: Option<SelectFn<Item>>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: false,
            on_select: None,
        }
    }

    pub fn on_select(mut self, f: impl FnMut(&Item) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn set_on_select(&mut self, f: impl FnMut(&Item) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    pub(crate) fn select(&mut self) {
        // Taken out for the call so the callback can borrow `self`.
        if let Some(mut f) = self.on_select.take() {
            f(self);
            self.on_select = Some(f);
        }
    }
}

pub struct BackItem {
    name: String,
    pub(crate) current: bool,
    on_select: Option<SelectFn<BackItem>>,
}

impl BackItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: false,
            on_select: None,
        }
    }

    pub fn on_select(mut self, f: impl FnMut(&BackItem) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn set_on_select(&mut self, f: impl FnMut(&BackItem) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    pub(crate) fn select(&mut self) {
        if let Some(mut f) = self.on_select.take() {
            f(self);
            self.on_select = Some(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_item_callback_receives_item() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut item = Item::new("Start").on_select(move |item| log.borrow_mut().push(item.name().to_string()));

        item.select();
        item.select();

        assert_eq!(*seen.borrow(), vec!["Start", "Start"]);
    }

    #[test]
    fn test_item_without_callback_is_noop() {
        let mut item = Item::new("Idle");
        item.select();
        assert_eq!(item.name(), "Idle");
    }

    #[test]
    fn test_callback_can_be_replaced() {
        let seen = Rc::new(RefCell::new(String::new()));
        let first = seen.clone();
        let second = seen.clone();
        let mut item = Item::new("x").on_select(move |_| first.borrow_mut().push('a'));
        item.set_on_select(move |_| second.borrow_mut().push('b'));

        item.select();

        assert_eq!(*seen.borrow(), "b");
    }
}
