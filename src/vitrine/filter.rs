//! # Category Filter & Paginator
//!
//! [`CollectionFilter`] owns the two pieces of state that drive a filtered,
//! paginated collection:
//!
//! - the current [`FilterSelection`] (`All` matches everything), and
//! - whether the user asked to see everything (`showing_all`).
//!
//! Both start at `All` / `false` and change only through
//! [`CollectionFilter::set_filter`] and [`CollectionFilter::expand`]:
//!
//! ```text
//! (any) --set_filter(tag)--> (tag, showing_all = false)
//! (any) --expand()---------> (same selection, showing_all = true)
//! ```
//!
//! After every transition (and once when the filter is built) the derived
//! [`FilterView`] is recomputed and pushed to the sinks: each item is shown
//! or hidden, the "showing"/"total" counters are updated and the expand
//! control is shown with a "Show N More ..." label or hidden.
//!
//! Items are always evaluated and displayed in their original order. None of
//! the operations can fail; sinks that were not provided are skipped.

use crate::model::{FilterSelection, DEFAULT_NOUN};
use crate::reveal::{RevealSchedule, DEFAULT_REVEAL_STEP};
use crate::sinks::{CounterSink, ExpandControl, FilterControls, ItemView};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Whether the expand control should be offered, and for how many items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ExpandOffer {
    #[default]
    Hidden,
    Offered { remaining: usize },
}

/// The derived state of a filter: which items match and how many of them
/// are on display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterView {
    /// Indexes of the matching items, in original order.
    pub matching: Vec<usize>,
    pub display_count: usize,
    pub expand: ExpandOffer,
}

impl FilterView {
    pub fn compute<V: ItemView>(
        items: &[V],
        selection: &FilterSelection,
        showing_all: bool,
        page_size: usize,
    ) -> Self {
        let matching: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| selects(selection, *item))
            .map(|(index, _)| index)
            .collect();

        let total = matching.len();
        let display_count = if showing_all {
            total
        } else {
            page_size.min(total)
        };
        let expand = if total > page_size && !showing_all {
            ExpandOffer::Offered {
                remaining: total - page_size,
            }
        } else {
            ExpandOffer::Hidden
        };

        Self {
            matching,
            display_count,
            expand,
        }
    }

    /// Number of matching items, displayed or not.
    pub fn total(&self) -> usize {
        self.matching.len()
    }

    /// Indexes of the items on display.
    pub fn displayed(&self) -> &[usize] {
        &self.matching[..self.display_count]
    }

    pub fn is_displayed(&self, index: usize) -> bool {
        self.displayed().contains(&index)
    }
}

fn selects<V: ItemView>(selection: &FilterSelection, item: &V) -> bool {
    match selection {
        FilterSelection::All => true,
        FilterSelection::Tag(tag) => item.has_tag(tag),
    }
}

/// "Show 4 More Fragrances", "Show 1 More Fragrance".
pub fn expand_label(remaining: usize, noun: &str) -> String {
    let plural = if remaining != 1 { "s" } else { "" };
    format!("Show {} More {}{}", remaining, noun, plural)
}

/// Label left on the expand control once everything is on display.
pub fn expanded_label(noun: &str) -> String {
    format!("Showing All {}s", noun)
}

pub struct CollectionFilter<V: ItemView> {
    items: Vec<V>,
    page_size: usize,
    noun: String,
    selection: FilterSelection,
    showing_all: bool,
    view: FilterView,
    reveal: RevealSchedule,
    showing: Option<Box<dyn CounterSink>>,
    total: Option<Box<dyn CounterSink>>,
    expand_control: Option<Box<dyn ExpandControl>>,
    controls: Option<Box<dyn FilterControls>>,
}

impl<V: ItemView> fmt::Debug for CollectionFilter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionFilter")
            .field("item_count", &self.items.len())
            .field("page_size", &self.page_size)
            .field("selection", &self.selection)
            .field("showing_all", &self.showing_all)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<V: ItemView> CollectionFilter<V> {
    pub fn builder(items: Vec<V>) -> FilterBuilder<V> {
        FilterBuilder::new(items)
    }

    /// Narrows the collection to `tag` (or everything, for `"all"`) and
    /// collapses back to the first page.
    pub fn set_filter(&mut self, tag: impl Into<FilterSelection>) {
        self.selection = tag.into();
        self.showing_all = false;
        if let Some(controls) = self.controls.as_mut() {
            controls.mark_active(&self.selection);
        }
        self.render();
    }

    /// Displays every matching item. Calling it again changes nothing.
    pub fn expand(&mut self) {
        self.showing_all = true;
        self.render();
    }

    /// Advances the staggered reveal by `dt`, activating the items that came
    /// due. Returns how many were activated.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let due = self.reveal.advance(dt);
        self.activate(&due)
    }

    /// Activates every pending item right away.
    pub fn reveal_all(&mut self) -> usize {
        let due = self.reveal.drain();
        self.activate(&due)
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn showing_all(&self) -> bool {
        self.showing_all
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn noun(&self) -> &str {
        &self.noun
    }

    pub fn view(&self) -> &FilterView {
        &self.view
    }

    pub fn items(&self) -> &[V] {
        &self.items
    }

    /// Items on display, in order.
    pub fn displayed_items(&self) -> impl Iterator<Item = &V> + '_ {
        self.view.displayed().iter().map(move |&i| &self.items[i])
    }

    pub fn pending_reveals(&self) -> usize {
        self.reveal.pending()
    }

    pub fn into_items(self) -> Vec<V> {
        self.items
    }

    fn activate(&mut self, slots: &[usize]) -> usize {
        for &slot in slots {
            if let Some(item) = self.items.get_mut(slot) {
                item.set_active(true);
            }
        }
        slots.len()
    }

    fn render(&mut self) {
        let view = FilterView::compute(
            &self.items,
            &self.selection,
            self.showing_all,
            self.page_size,
        );

        let mut on_display = vec![false; self.items.len()];
        for &index in view.displayed() {
            on_display[index] = true;
        }
        for (item, &shown) in self.items.iter_mut().zip(&on_display) {
            item.set_visible(shown);
            if !shown {
                item.set_active(false);
            }
        }

        if let Some(counter) = self.showing.as_mut() {
            counter.set(view.display_count);
        }
        if let Some(counter) = self.total.as_mut() {
            counter.set(view.total());
        }
        if let Some(control) = self.expand_control.as_mut() {
            match view.expand {
                ExpandOffer::Offered { remaining } => {
                    control.set_visible(true, &expand_label(remaining, &self.noun))
                }
                ExpandOffer::Hidden if self.showing_all => {
                    control.set_visible(false, &expanded_label(&self.noun))
                }
                ExpandOffer::Hidden => control.set_visible(false, ""),
            }
        }

        debug!(
            filter = %self.selection,
            showing = view.display_count,
            total = view.total(),
            "collection rendered"
        );

        self.reveal.replace(view.displayed().iter().copied());
        self.view = view;
        self.advance(Duration::ZERO);
    }
}

pub struct FilterBuilder<V: ItemView> {
    items: Vec<V>,
    page_size: usize,
    noun: String,
    reveal_step: Duration,
    showing: Option<Box<dyn CounterSink>>,
    total: Option<Box<dyn CounterSink>>,
    expand_control: Option<Box<dyn ExpandControl>>,
    controls: Option<Box<dyn FilterControls>>,
}

impl<V: ItemView> FilterBuilder<V> {
    pub fn new(items: Vec<V>) -> Self {
        Self {
            items,
            page_size: DEFAULT_PAGE_SIZE,
            noun: DEFAULT_NOUN.to_string(),
            reveal_step: DEFAULT_REVEAL_STEP,
            showing: None,
            total: None,
            expand_control: None,
            controls: None,
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn noun(mut self, noun: impl Into<String>) -> Self {
        self.noun = noun.into();
        self
    }

    pub fn reveal_step(mut self, step: Duration) -> Self {
        self.reveal_step = step;
        self
    }

    pub fn showing_counter(mut self, sink: impl CounterSink + 'static) -> Self {
        self.showing = Some(Box::new(sink));
        self
    }

    pub fn total_counter(mut self, sink: impl CounterSink + 'static) -> Self {
        self.total = Some(Box::new(sink));
        self
    }

    pub fn expand_control(mut self, sink: impl ExpandControl + 'static) -> Self {
        self.expand_control = Some(Box::new(sink));
        self
    }

    pub fn controls(mut self, sink: impl FilterControls + 'static) -> Self {
        self.controls = Some(Box::new(sink));
        self
    }

    /// Builds the filter in its initial state and renders it once.
    pub fn build(self) -> CollectionFilter<V> {
        info!(
            items = self.items.len(),
            page_size = self.page_size,
            "collection filter initialized"
        );

        let mut filter = CollectionFilter {
            items: self.items,
            page_size: self.page_size,
            noun: self.noun,
            selection: FilterSelection::All,
            showing_all: false,
            view: FilterView::default(),
            reveal: RevealSchedule::new(self.reveal_step),
            showing: self.showing,
            total: self.total,
            expand_control: self.expand_control,
            controls: self.controls,
        };
        if let Some(controls) = filter.controls.as_mut() {
            controls.mark_active(&FilterSelection::All);
        }
        filter.render();
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use crate::sinks::{ControlGroup, Counter, ExpandButton, ItemSlot};

    struct Harness {
        filter: CollectionFilter<ItemSlot>,
        showing: Counter,
        total: Counter,
        expand: ExpandButton,
        controls: ControlGroup,
    }

    impl Harness {
        fn new(items: Vec<Item>) -> Self {
            let showing = Counter::new();
            let total = Counter::new();
            let expand = ExpandButton::new();
            let controls = ControlGroup::for_tags(["floral", "woody", "citrus"]);
            let filter = CollectionFilter::builder(items.into_iter().map(ItemSlot::new).collect())
                .showing_counter(showing.clone())
                .total_counter(total.clone())
                .expand_control(expand.clone())
                .controls(controls.clone())
                .build();
            Self {
                filter,
                showing,
                total,
                expand,
                controls,
            }
        }

        fn visible_ids(&self) -> Vec<String> {
            self.filter
                .items()
                .iter()
                .filter(|slot| slot.visible)
                .map(|slot| slot.item.id.clone())
                .collect()
        }
    }

    /// Ten items, four of them floral (ids 1, 4, 6, 9).
    fn ten_items() -> Vec<Item> {
        (0..10)
            .map(|i| {
                let tags: Vec<&str> = match i {
                    1 | 4 | 6 | 9 => vec!["floral"],
                    2 | 5 => vec!["woody", "citrus"],
                    _ => vec!["woody"],
                };
                Item::new(i.to_string(), format!("Item {}", i), tags)
            })
            .collect()
    }

    fn ids(raw: &[usize]) -> Vec<String> {
        raw.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn initial_state_is_first_page_of_everything() {
        let h = Harness::new(ten_items());
        assert_eq!(h.filter.selection(), &FilterSelection::All);
        assert!(!h.filter.showing_all());
        assert_eq!(h.visible_ids(), ids(&[0, 1, 2, 3, 4, 5]));
        assert_eq!(h.controls.active().unwrap().label, "All");
    }

    #[test]
    fn scenario_a_small_category_fits_one_page() {
        let mut h = Harness::new(ten_items());
        h.filter.set_filter("floral");

        assert_eq!(h.filter.view().total(), 4);
        assert_eq!(h.filter.view().display_count, 4);
        assert_eq!(h.visible_ids(), ids(&[1, 4, 6, 9]));
        assert!(!h.expand.is_visible());
        assert_eq!((h.showing.get(), h.total.get()), (4, 4));
    }

    #[test]
    fn scenario_b_all_offers_remaining_items() {
        let mut h = Harness::new(ten_items());
        h.filter.set_filter("all");

        assert_eq!(h.filter.view().display_count, 6);
        assert!(h.expand.is_visible());
        assert_eq!(h.expand.label(), "Show 4 More Items");
        assert_eq!((h.showing.get(), h.total.get()), (6, 10));
    }

    #[test]
    fn scenario_c_expand_shows_everything() {
        let mut h = Harness::new(ten_items());
        h.filter.set_filter("all");
        h.filter.expand();

        assert_eq!(h.filter.view().display_count, 10);
        assert_eq!(h.visible_ids().len(), 10);
        assert!(!h.expand.is_visible());
        assert_eq!(h.expand.label(), "Showing All Items");
        assert_eq!((h.showing.get(), h.total.get()), (10, 10));
    }

    #[test]
    fn scenario_d_unknown_tag_matches_nothing() {
        let mut h = Harness::new(ten_items());
        h.filter.set_filter("nonexistent-tag");

        assert!(h.filter.view().matching.is_empty());
        assert_eq!(h.filter.view().display_count, 0);
        assert!(h.visible_ids().is_empty());
        assert!(!h.expand.is_visible());
        assert_eq!((h.showing.get(), h.total.get()), (0, 0));
        assert!(h.controls.active().is_none());
    }

    #[test]
    fn set_filter_matches_exact_tag_membership_in_order() {
        let items = ten_items();
        for tag in ["floral", "woody", "citrus", "all"] {
            let mut h = Harness::new(items.clone());
            h.filter.expand();
            h.filter.set_filter(tag);
            let expected: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|(_, item)| tag == "all" || item.has_tag(tag))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(h.filter.view().matching, expected, "tag {}", tag);
            assert!(!h.filter.showing_all(), "tag {}", tag);
        }
    }

    #[test]
    fn display_count_follows_page_size_until_expanded() {
        for page_size in 0..12 {
            for count in 0..12 {
                let items: Vec<ItemSlot> = (0..count)
                    .map(|i| Item::new(i.to_string(), "x", ["tag"]))
                    .map(ItemSlot::new)
                    .collect();
                let mut filter = CollectionFilter::builder(items)
                    .page_size(page_size)
                    .build();
                assert_eq!(filter.view().display_count, page_size.min(count));
                assert_eq!(
                    filter.view().expand,
                    if count > page_size {
                        ExpandOffer::Offered {
                            remaining: count - page_size,
                        }
                    } else {
                        ExpandOffer::Hidden
                    }
                );

                filter.expand();
                assert_eq!(filter.view().display_count, count);
                assert_eq!(filter.view().expand, ExpandOffer::Hidden);
                assert!(filter.view().display_count <= filter.view().total());
                assert!(filter.view().total() <= filter.items().len());
            }
        }
    }

    #[test]
    fn only_the_displayed_prefix_is_visible() {
        let mut h = Harness::new(ten_items());
        h.filter.set_filter("woody");
        let displayed: Vec<usize> = h.filter.view().displayed().to_vec();
        assert_eq!(displayed, vec![0, 2, 3, 5, 7, 8]);
        for (index, slot) in h.filter.items().iter().enumerate() {
            assert_eq!(slot.visible, displayed.contains(&index), "index {}", index);
        }
    }

    #[test]
    fn set_filter_twice_is_idempotent() {
        let mut h = Harness::new(ten_items());
        h.filter.set_filter("woody");
        let once = (h.filter.view().clone(), h.visible_ids());
        h.filter.set_filter("woody");
        assert_eq!((h.filter.view().clone(), h.visible_ids()), once);
    }

    #[test]
    fn expand_is_idempotent() {
        let mut h = Harness::new(ten_items());
        h.filter.expand();
        let once = h.filter.view().clone();
        h.filter.expand();
        assert_eq!(h.filter.view(), &once);
        assert!(h.filter.showing_all());
    }

    #[test]
    fn set_filter_collapses_expanded_view() {
        let mut h = Harness::new(ten_items());
        h.filter.expand();
        assert_eq!(h.showing.get(), 10);

        h.filter.set_filter("all");
        assert!(!h.filter.showing_all());
        assert_eq!(h.showing.get(), 6);
        assert!(h.expand.is_visible());
    }

    #[test]
    fn counters_track_every_render() {
        let mut h = Harness::new(ten_items());
        for tag in ["woody", "citrus", "floral", "all", "missing"] {
            h.filter.set_filter(tag);
            assert_eq!(h.showing.get(), h.filter.view().display_count);
            assert_eq!(h.total.get(), h.filter.view().total());
            h.filter.expand();
            assert_eq!(h.showing.get(), h.filter.view().display_count);
            assert_eq!(h.total.get(), h.filter.view().total());
        }
    }

    #[test]
    fn controls_follow_selection() {
        let mut h = Harness::new(ten_items());
        h.filter.set_filter("citrus");
        let active: Vec<_> = h
            .controls
            .controls()
            .into_iter()
            .filter(|c| c.active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].selection, FilterSelection::Tag("citrus".into()));
    }

    #[test]
    fn singular_label_for_one_remaining() {
        let items: Vec<ItemSlot> = (0..7)
            .map(|i| ItemSlot::new(Item::new(i.to_string(), "x", ["floral"])))
            .collect();
        let expand = ExpandButton::new();
        let _filter = CollectionFilter::builder(items)
            .noun("Fragrance")
            .expand_control(expand.clone())
            .build();
        assert_eq!(expand.label(), "Show 1 More Fragrance");
    }

    #[test]
    fn works_without_optional_sinks() {
        let items: Vec<ItemSlot> = ten_items().into_iter().map(ItemSlot::new).collect();
        let mut filter = CollectionFilter::builder(items).build();
        filter.set_filter("floral");
        filter.expand();
        filter.set_filter("nothing");
        assert_eq!(filter.view().display_count, 0);
        assert_eq!(filter.items().iter().filter(|s| s.visible).count(), 0);
    }

    #[test]
    fn reveal_activates_displayed_items_in_steps() {
        let items: Vec<ItemSlot> = ten_items().into_iter().map(ItemSlot::new).collect();
        let mut filter = CollectionFilter::builder(items)
            .reveal_step(Duration::from_millis(50))
            .build();

        let active = |f: &CollectionFilter<ItemSlot>| f.items().iter().filter(|s| s.active).count();
        assert_eq!(active(&filter), 1);
        filter.advance(Duration::from_millis(100));
        assert_eq!(active(&filter), 3);
        filter.advance(Duration::from_secs(1));
        assert_eq!(active(&filter), 6);
        assert_eq!(filter.pending_reveals(), 0);
    }

    #[test]
    fn new_filter_cancels_pending_reveals() {
        let items: Vec<ItemSlot> = ten_items().into_iter().map(ItemSlot::new).collect();
        let mut filter = CollectionFilter::builder(items).build();
        assert_eq!(filter.pending_reveals(), 5);

        filter.set_filter("citrus");
        assert_eq!(filter.pending_reveals(), 1);
        filter.advance(Duration::from_secs(10));

        for (index, slot) in filter.items().iter().enumerate() {
            let displayed = index == 2 || index == 5;
            assert_eq!(slot.active, displayed, "index {}", index);
        }
    }

    #[test]
    fn reveal_all_flushes_pending() {
        let items: Vec<ItemSlot> = ten_items().into_iter().map(ItemSlot::new).collect();
        let mut filter = CollectionFilter::builder(items).build();
        filter.expand();
        assert_eq!(filter.reveal_all(), 9);
        assert!(filter.items().iter().all(|s| s.active));
    }

    #[test]
    fn displayed_items_iterates_in_order() {
        let mut h = Harness::new(ten_items());
        h.filter.set_filter("floral");
        let names: Vec<_> = h
            .filter
            .displayed_items()
            .map(|s| s.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Item 1", "Item 4", "Item 6", "Item 9"]);
    }
}
