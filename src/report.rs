//! Report output for a finished run.

use std::io::Write;

use crate::common::Result;
use crate::memory::SimulationStats;

/// Write the end-of-run report.
///
/// Always writes the three counter lines:
/// ```text
/// Page hits: 4
/// Page misses: 5
/// Page faults: 5
/// ```
/// With `detailed`, also writes the eviction count and hit rate.
pub fn write_report<W: Write>(stats: &SimulationStats, detailed: bool, out: &mut W) -> Result<()> {
    writeln!(out, "Page hits: {}", stats.hits)?;
    writeln!(out, "Page misses: {}", stats.misses)?;
    writeln!(out, "Page faults: {}", stats.faults)?;

    if detailed {
        writeln!(out, "Evictions: {}", stats.evictions)?;
        writeln!(out, "Hit rate: {:.2}%", stats.hit_rate() * 100.0)?;
    }

    Ok(())
}
