//! # Editable Items
//!
//! A leaf holding a bounded number. Selecting it enters edit mode (focus);
//! while focused the navigator routes advance/retreat here instead of moving
//! between siblings. Selecting it again leaves edit mode and fires the
//! callback, so the callback runs once per finished edit:
//!
//! ```text
//! select()   focus on        (no callback)
//! advance()  value += step   (no callback)
//! retreat()  value -= step   (no callback)
//! select()   focus off       callback(item)
//! ```

use super::item::SelectFn;

/// Turns the current value into display text.
pub type FormatFn = Box<dyn Fn(f32) -> String>;

const DEFAULT_STEP: f32 = 1.0;

/// Overshoot past a bound, as a fraction of the step, that still counts as
/// landing on the bound. Absorbs f32 drift from decimal steps.
const SNAP_FRACTION: f32 = 1e-3;

pub struct EditableItem {
    name: String,
    pub(crate) current: bool,
    focus: bool,
    value: f32,
    min_value: f32,
    max_value: f32,
    step: f32,
    on_select: Option<SelectFn<EditableItem>>,
    format: Option<FormatFn>,
}

impl EditableItem {
    /// Bounds may be given in either order and `step` with either sign;
    /// both are normalized. The starting value is clamped into the bounds.
    ///
    /// Non-finite inputs never reach the item: a NaN or infinite bound
    /// becomes 0, a non-finite step becomes 1, and a NaN value starts at
    /// the lower bound.
    pub fn new(name: impl Into<String>, value: f32, min_value: f32, max_value: f32, step: f32) -> Self {
        let (min_value, max_value) = ordered(finite_or(min_value, 0.0), finite_or(max_value, 0.0));
        let mut item = Self {
            name: name.into(),
            current: false,
            focus: false,
            value: min_value,
            min_value,
            max_value,
            step: finite_or(step, DEFAULT_STEP).abs(),
            on_select: None,
            format: None,
        };
        item.set_value(value);
        item
    }

    pub fn on_select(mut self, f: impl FnMut(&EditableItem) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn set_on_select(&mut self, f: impl FnMut(&EditableItem) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    pub fn with_format(mut self, f: impl Fn(f32) -> String + 'static) -> Self {
        self.format = Some(Box::new(f));
        self
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

    pub fn has_focus(&self) -> bool {
        self.focus
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamped into the bounds; NaN is taken as the lower bound.
    pub fn set_value(&mut self, value: f32) {
        self.value = if value.is_nan() {
            self.min_value
        } else {
            value.clamp(self.min_value, self.max_value)
        };
    }

    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Ignored unless `step` is finite.
    pub fn set_step(&mut self, step: f32) {
        self.step = finite_or(step, self.step).abs();
    }

    /// Ignored unless `min_value` is finite.
    pub fn set_min_value(&mut self, min_value: f32) {
        (self.min_value, self.max_value) = ordered(finite_or(min_value, self.min_value), self.max_value);
        self.set_value(self.value);
    }

    /// Ignored unless `max_value` is finite.
    pub fn set_max_value(&mut self, max_value: f32) {
        (self.min_value, self.max_value) = ordered(self.min_value, finite_or(max_value, self.max_value));
        self.set_value(self.value);
    }

    /// The value as text, through the format callback when one is set.
    pub fn value_string(&self) -> String {
        match &self.format {
            Some(format) => format(self.value),
            None => self.value.to_string(),
        }
    }

    /// Steps the value up. Past `max_value` it either wraps to `min_value`
    /// or saturates. Always reports an effect.
    ///
    /// A step that overshoots `max_value` by float drift alone (e.g. ten
    /// steps of 0.1) lands on `max_value`, so the bound stays reachable
    /// before a wrap.
    pub fn advance(&mut self, wrap: bool) -> bool {
        let next = self.value + self.step;
        self.value = if next > self.max_value + self.snap() {
            if wrap { self.min_value } else { self.max_value }
        } else {
            next.min(self.max_value)
        };
        true
    }

    pub fn retreat(&mut self, wrap: bool) -> bool {
        let next = self.value - self.step;
        self.value = if next < self.min_value - self.snap() {
            if wrap { self.max_value } else { self.min_value }
        } else {
            next.max(self.min_value)
        };
        true
    }

    fn snap(&self) -> f32 {
        self.step * SNAP_FRACTION
    }

    /// Drops out of edit mode without firing the callback.
    pub fn reset(&mut self) {
        self.focus = false;
    }

    pub(crate) fn select(&mut self) {
        self.focus = !self.focus;
        if self.focus {
            return;
        }
        if let Some(mut f) = self.on_select.take() {
            f(self);
            self.on_select = Some(f);
        }
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a > b { (b, a) } else { (a, b) }
}

fn finite_or(x: f32, fallback: f32) -> f32 {
    if x.is_finite() { x } else { fallback }
}
