mod commands;
mod snapshot;

use std::io::BufWriter;

use commands::CommandLine;
use gildedrose_inventory::GildedRose;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    gildedrose_observability::init(commands.log_format);

    let snapshots = commands.snapshots();
    tracing::info!(snapshots, format = ?commands.format, "starting inventory simulation");

    let mut shop = GildedRose::new(snapshot::fixture());
    let mut out = BufWriter::new(std::io::stdout().lock());
    snapshot::render(&mut out, &mut shop, snapshots, commands.format)
}
