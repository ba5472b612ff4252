//! Output formatting module

use std::io::Write;

use stowage_domain::Carrier;
use stowage_types::{CargoItem, OutputFormat, Result};

/// Write a carrier's totals, remaining capacity and sorted views
pub fn write_carrier_details<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    carrier: &Carrier,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(carrier)?;
        writeln!(out, "{}", content)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Carrier {}", carrier.id())?;
    writeln!(out, "===============")?;
    writeln!(out, "Fleet:            {}", carrier.fleet())?;
    writeln!(
        out,
        "Weight:           {} / {} kg",
        carrier.current_weight(),
        carrier.max_weight()
    )?;
    writeln!(
        out,
        "Volume:           {:.2} / {:.2} m³",
        carrier.current_volume(),
        carrier.max_volume()
    )?;
    writeln!(out, "Remaining weight: {} kg", carrier.remaining_weight())?;
    writeln!(out, "Remaining volume: {:.2} m³", carrier.remaining_volume())?;
    writeln!(out, "Items on board:   {}", carrier.item_count())?;

    if carrier.item_count() > 0 {
        writeln!(out)?;
        write_item_list(out, "By id", &carrier.items_by_id())?;
        write_item_list(out, "By weight (heaviest first)", &carrier.items_by_weight_desc())?;
        write_item_list(out, "By volume (largest first)", &carrier.items_by_volume_desc())?;
    }

    Ok(())
}

/// Write one titled item list
pub fn write_item_list<W: Write>(out: &mut W, title: &str, items: &[CargoItem]) -> Result<()> {
    writeln!(out, "--- {} ---", title)?;
    if items.is_empty() {
        writeln!(out, "(no items)")?;
    }
    for item in items {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}
