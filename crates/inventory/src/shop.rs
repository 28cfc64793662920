//! Day driver: applies one day of aging to a whole inventory.

use gildedrose_core::{DomainError, DomainResult};
use tracing::{debug, trace};

use crate::category::Category;
use crate::item::Item;
use crate::rules::advance_one_day;

/// Advance every item by one day, in place.
///
/// Each item is classified from its current name and updated independently of
/// every other item; the slice is never resized or reordered.
pub fn advance_all(items: &mut [Item]) {
    debug!(items = items.len(), "advancing inventory by one day");
    for item in items.iter_mut() {
        advance_item(item);
    }
}

/// Same outcome as [`advance_all`], with items spread over the rayon pool.
#[cfg(feature = "parallel")]
pub fn advance_all_parallel(items: &mut [Item]) {
    use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

    debug!(items = items.len(), "advancing inventory by one day (parallel)");
    items.par_iter_mut().for_each(advance_item);
}

fn advance_item(item: &mut Item) {
    let category = Category::classify(&item.name);
    let before = item.state();
    let after = advance_one_day(category, before);
    trace!(
        name = %item.name,
        category = category.as_str(),
        sell_in = after.sell_in,
        quality = after.quality,
        quality_delta = after.quality.wrapping_sub(before.quality),
        "item aged"
    );
    item.set_state(after);
}

/// The shop's inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build an inventory from possibly-empty slots.
    ///
    /// Fails on the first empty slot; nothing is built in that case, so a
    /// half-populated inventory can never be advanced.
    pub fn try_from_slots(slots: Vec<Option<Item>>) -> DomainResult<Self> {
        let items = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or_else(|| DomainError::missing_item(index)))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance every item by one day.
    pub fn update_quality(&mut self) {
        advance_all(&mut self.items);
    }

    /// Advance every item by `days` days.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
