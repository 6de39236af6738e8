//! Daily snapshot rendering.

use std::io::Write;

use serde::Serialize;

use gildedrose_inventory::{GildedRose, Item};

use crate::commands::OutputFormat;

pub const BANNER: &str = "OMGHAI!";

/// Opening inventory of the shop.
pub fn fixture() -> Vec<Item> {
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

#[derive(Debug, Serialize)]
struct DaySnapshot<'a> {
    day: u64,
    items: &'a [Item],
}

/// Write `snapshots` days to `out`, advancing the shop by one day after each.
///
/// Each day is written before the shop moves on, so output streams as it is produced.
pub fn render<W: Write>(
    out: &mut W,
    shop: &mut GildedRose,
    snapshots: u64,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "{BANNER}")?;
    }

    for day in 0..snapshots {
        match format {
            OutputFormat::Text => write_text_day(out, day, shop.items())?,
            OutputFormat::Json => write_json_day(out, day, shop.items())?,
        }
        shop.update_quality()?;
    }

    out.flush()?;
    tracing::debug!(snapshots, "rendered inventory snapshots");
    Ok(())
}

fn write_text_day<W: Write>(out: &mut W, day: u64, items: &[Item]) -> std::io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, sellIn, quality")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}

fn write_json_day<W: Write>(out: &mut W, day: u64, items: &[Item]) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, &DaySnapshot { day, items })?;
    writeln!(out)?;
    Ok(())
}
