//! Day-advance rules, one per [`Category`].
//!
//! Quality moves one unit at a time and every unit is checked against the
//! bounds on its own, so an item sitting on a bound never gains then loses
//! (or loses then gains) within a single day.

use crate::category::Category;
use crate::item::ItemState;

/// Upper quality bound for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Lower quality bound for every non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// Backstage passes gain a second point at this many days left or fewer.
const BACKSTAGE_DOUBLE_THRESHOLD: i32 = 10;

/// Backstage passes gain a third point at this many days left or fewer.
const BACKSTAGE_TRIPLE_THRESHOLD: i32 = 5;

const CONJURED_DEGRADATION: u32 = 2;

/// Advance one item's state by one day under the given category's rules.
pub fn advance_one_day(category: Category, state: ItemState) -> ItemState {
    match category {
        Category::Normal => normal(state),
        Category::AgedBrie => aged_brie(state),
        Category::Legendary => legendary(state),
        Category::BackstagePass => backstage_pass(state),
        Category::Conjured => conjured(state),
    }
}

fn normal(state: ItemState) -> ItemState {
    let mut quality = lower(state.quality);
    let sell_in = next_day(state.sell_in);
    if expired(sell_in) {
        quality = lower(quality);
    }
    ItemState { sell_in, quality }
}

fn aged_brie(state: ItemState) -> ItemState {
    let mut quality = raise(state.quality);
    let sell_in = next_day(state.sell_in);
    if expired(sell_in) {
        quality = raise(quality);
    }
    ItemState { sell_in, quality }
}

fn legendary(state: ItemState) -> ItemState {
    state
}

fn backstage_pass(state: ItemState) -> ItemState {
    // Tiers look at the days left before today's decrement.
    let mut quality = raise(state.quality);
    if state.sell_in <= BACKSTAGE_DOUBLE_THRESHOLD {
        quality = raise(quality);
    }
    if state.sell_in <= BACKSTAGE_TRIPLE_THRESHOLD {
        quality = raise(quality);
    }

    let sell_in = next_day(state.sell_in);
    if expired(sell_in) {
        quality = 0;
    }
    ItemState { sell_in, quality }
}

fn conjured(state: ItemState) -> ItemState {
    let mut quality = lower_by(state.quality, CONJURED_DEGRADATION);
    let sell_in = next_day(state.sell_in);
    if expired(sell_in) {
        quality = lower_by(quality, CONJURED_DEGRADATION);
    }
    ItemState { sell_in, quality }
}

fn next_day(sell_in: i32) -> i32 {
    sell_in.saturating_sub(1)
}

fn expired(sell_in: i32) -> bool {
    sell_in < 0
}

/// +1, unless already at or above the ceiling.
fn raise(quality: i32) -> i32 {
    if quality < MAX_QUALITY { quality + 1 } else { quality }
}

/// -1, unless already at or below the floor.
fn lower(quality: i32) -> i32 {
    if quality > MIN_QUALITY { quality - 1 } else { quality }
}

fn lower_by(quality: i32, steps: u32) -> i32 {
    (0..steps).fold(quality, |q, _| lower(q))
}
