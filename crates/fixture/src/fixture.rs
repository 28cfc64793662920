//! Inventory sources: the built-in classic inventory or a JSON fixture file.

use std::fs;
use std::path::Path;

use anyhow::Context;

use gildedrose_inventory::{GildedRose, Item};

/// The classic shop inventory.
pub fn classic_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Read a fixture file: a JSON array of `{ "name", "sellIn", "quality" }`.
pub fn load(path: &Path) -> anyhow::Result<GildedRose> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    parse(&raw).with_context(|| format!("invalid fixture {}", path.display()))
}

/// Parse fixture JSON. A `null` entry rejects the whole fixture.
pub fn parse(json: &str) -> anyhow::Result<GildedRose> {
    let slots: Vec<Option<Item>> =
        serde_json::from_str(json).context("expected a JSON array of items")?;
    Ok(GildedRose::try_from_slots(slots)?)
}
