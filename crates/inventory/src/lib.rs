//! Inventory domain module.
//!
//! Items age by one simulated day per call. The rules are implemented purely as
//! deterministic domain logic (no IO, no storage): an item's name is classified
//! into a [`Category`], and the category's rule maps `(sell_in, quality)` to the
//! next day's pair.

pub mod category;
pub mod item;
pub mod rules;
pub mod shop;

pub use category::{Category, classify};
pub use item::{Item, ItemState};
pub use rules::{MAX_QUALITY, MIN_QUALITY, advance_one_day};
pub use shop::{GildedRose, advance_all};

#[cfg(feature = "parallel")]
pub use shop::advance_all_parallel;
