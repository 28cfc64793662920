//! Report rendering.

use std::io::{self, Write};

use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

use gildedrose_inventory::{GildedRose, Item};

const HEADER: &str = "name, sellIn, quality";

/// Inventory state at the end of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl DaySnapshot {
    pub fn capture(day: u32, shop: &GildedRose) -> Self {
        Self {
            day,
            items: shop.items().to_vec(),
        }
    }
}

pub fn write_text<W, I>(out: &mut W, snapshots: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = DaySnapshot>,
{
    for snapshot in snapshots {
        writeln!(out, "-------- day {} --------", snapshot.day)?;
        writeln!(out, "{HEADER}")?;
        for item in &snapshot.items {
            writeln!(out, "{item}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Stream snapshots as one pretty-printed JSON array, element by element.
pub fn write_json<W, I>(out: &mut W, snapshots: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = DaySnapshot>,
{
    let mut serializer = serde_json::Serializer::pretty(&mut *out);
    let mut seq = serializer.serialize_seq(None)?;
    for snapshot in snapshots {
        seq.serialize_element(&snapshot)?;
    }
    seq.end()?;
    writeln!(out)
}
