//! # Output Sinks
//!
//! The filter never touches a rendering surface directly. Everything it
//! changes goes through the small traits below, which a host implements for
//! whatever it draws with (DOM nodes, terminal widgets, test recorders).
//!
//! All sinks except the items themselves are optional: a filter built without
//! a counter or an expand control simply skips those updates.
//!
//! The concrete types at the bottom ([`ItemSlot`], [`Counter`],
//! [`ExpandButton`], [`ControlGroup`]) are ready-made, single-threaded
//! implementations. The shared ones are `Rc` handles: clone one, hand the
//! clone to the filter, and read the state back from the other.

use crate::model::{FilterSelection, Item};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One entry of the collection as the filter sees it.
pub trait ItemView {
    /// Whether the entry carries `tag` in its tag set.
    fn has_tag(&self, tag: &str) -> bool;

    /// Shows or hides the entry.
    fn set_visible(&mut self, visible: bool);

    /// Reveal flag, flipped on by the staggered reveal after the entry
    /// becomes visible and off again when it is hidden.
    fn set_active(&mut self, _active: bool) {}
}

/// A numeric readout ("showing", "total").
pub trait CounterSink {
    fn set(&mut self, value: usize);
}

/// The "show more" affordance.
pub trait ExpandControl {
    fn set_visible(&mut self, visible: bool, label: &str);
}

/// The set of filter selectors. Implementations keep at most one selector
/// active: the one whose selection equals the argument, or none when no
/// selector matches.
pub trait FilterControls {
    fn mark_active(&mut self, selection: &FilterSelection);
}

/// A catalog item together with its display flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSlot {
    pub item: Item,
    pub visible: bool,
    pub active: bool,
}

impl ItemSlot {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            visible: false,
            active: false,
        }
    }
}

impl From<Item> for ItemSlot {
    fn from(item: Item) -> Self {
        Self::new(item)
    }
}

impl ItemView for ItemSlot {
    fn has_tag(&self, tag: &str) -> bool {
        self.item.has_tag(tag)
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Shared counter cell.
#[derive(Debug, Clone, Default)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl CounterSink for Counter {
    fn set(&mut self, value: usize) {
        self.0.set(value);
    }
}

/// Last state pushed to an [`ExpandButton`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpandState {
    pub visible: bool,
    pub label: String,
}

/// Shared expand control.
#[derive(Debug, Clone, Default)]
pub struct ExpandButton(Rc<RefCell<ExpandState>>);

impl ExpandButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExpandState {
        self.0.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.0.borrow().visible
    }

    pub fn label(&self) -> String {
        self.0.borrow().label.clone()
    }
}

impl ExpandControl for ExpandButton {
    fn set_visible(&mut self, visible: bool, label: &str) {
        let mut state = self.0.borrow_mut();
        state.visible = visible;
        state.label = label.to_string();
    }
}

/// A single filter selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    pub label: String,
    pub selection: FilterSelection,
    pub active: bool,
}

/// Shared group of mutually exclusive filter selectors.
#[derive(Debug, Clone, Default)]
pub struct ControlGroup(Rc<RefCell<Vec<Control>>>);

impl ControlGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// An "All" selector followed by one selector per tag.
    pub fn for_tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let group = Self::new().with_control("All", FilterSelection::All);
        tags.into_iter().fold(group, |group, tag| {
            let tag = tag.as_ref();
            group.with_control(tag, FilterSelection::parse(tag))
        })
    }

    pub fn with_control(self, label: impl Into<String>, selection: FilterSelection) -> Self {
        self.0.borrow_mut().push(Control {
            label: label.into(),
            selection,
            active: false,
        });
        self
    }

    pub fn controls(&self) -> Vec<Control> {
        self.0.borrow().clone()
    }

    pub fn active(&self) -> Option<Control> {
        self.0.borrow().iter().find(|c| c.active).cloned()
    }
}

impl FilterControls for ControlGroup {
    fn mark_active(&mut self, selection: &FilterSelection) {
        let mut controls = self.0.borrow_mut();
        let mut marked = false;
        for control in controls.iter_mut() {
            control.active = !marked && &control.selection == selection;
            marked |= control.active;
        }
    }
}
