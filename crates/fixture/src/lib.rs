//! Fixture runner: prints an inventory's state day by day.
//!
//! A thin collaborator over `gildedrose-inventory`; all aging happens there.

pub mod config;
pub mod fixture;
pub mod report;

use std::io::Write;

use anyhow::Context;
use tracing::info;

use gildedrose_inventory::GildedRose;

pub use config::{Config, OutputFormat};
pub use report::DaySnapshot;

/// Load the configured inventory, simulate `config.days` days and write the
/// report to `out`. Day 0 is the state before any aging.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    let mut shop = match &config.fixture {
        Some(path) => fixture::load(path)?,
        None => GildedRose::new(fixture::classic_inventory()),
    };

    let source = config
        .fixture
        .as_deref()
        .map_or_else(|| "builtin".to_string(), |p| p.display().to_string());
    info!(
        items = shop.items().len(),
        days = config.days,
        source = %source,
        "simulating inventory"
    );

    // Days are produced lazily; each snapshot is written before the next day runs.
    let snapshots = (0..=config.days).map(|day| {
        if day > 0 {
            advance(&mut shop);
        }
        DaySnapshot::capture(day, &shop)
    });

    match config.format {
        OutputFormat::Text => report::write_text(out, snapshots),
        OutputFormat::Json => report::write_json(out, snapshots),
    }
    .context("failed to write report")?;

    out.flush().context("failed to flush report")?;
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn advance(shop: &mut GildedRose) {
    shop.update_quality();
}

#[cfg(feature = "parallel")]
fn advance(shop: &mut GildedRose) {
    gildedrose_inventory::advance_all_parallel(shop.items_mut());
}
