use serde::{Deserialize, Serialize};

/// A single stocked item.
///
/// Constructed externally with no validation; the engine only ever touches
/// `sell_in` and `quality`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn state(&self) -> ItemState {
        ItemState {
            sell_in: self.sell_in,
            quality: self.quality,
        }
    }

    pub fn set_state(&mut self, state: ItemState) {
        self.sell_in = state.sell_in;
        self.quality = state.quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// The mutable part of an item: what the rule engine reads and produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemState {
    pub sell_in: i32,
    pub quality: i32,
}

impl ItemState {
    pub fn new(sell_in: i32, quality: i32) -> Self {
        Self { sell_in, quality }
    }
}

impl From<(i32, i32)> for ItemState {
    fn from((sell_in, quality): (i32, i32)) -> Self {
        Self { sell_in, quality }
    }
}

impl From<ItemState> for (i32, i32) {
    fn from(state: ItemState) -> Self {
        (state.sell_in, state.quality)
    }
}
