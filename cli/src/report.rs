//! Statistics printing for `-v` / `--json`.

use std::io::Write;

use lz78_core::telemetry::TelemetrySnapshot;

/// Human-readable statistics, three lines.
pub fn format_stats(snapshot: &TelemetrySnapshot) -> String {
    format!(
        "Compressed file size: {} bytes\n\
         Uncompressed file size: {} bytes\n\
         Compression ratio: {:.2}%\n",
        snapshot.compressed_bytes,
        snapshot.uncompressed_bytes,
        snapshot.space_saving(),
    )
}

/// Write statistics to `w` in the requested format.
pub fn write_stats<W: Write>(w: &mut W, snapshot: &TelemetrySnapshot, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *w, snapshot)?;
        writeln!(w)?;
    } else {
        w.write_all(format_stats(snapshot).as_bytes())?;
    }
    Ok(())
}
