//! Table rendering for the `*` command and the usage banner.

use std::fmt::Write as _;

use arbiter_core::ResourceVector;
use arbiter_engine::StateSnapshot;

const HEAVY_RULE: &str = "=============================================================";
const LIGHT_RULE: &str = "-------------------------------------------------------------";

/// Render the usage banner shown for unrecognized input.
pub fn usage(resources: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEAVY_RULE}");
    let _ = writeln!(out, "arbiter <available resources of size {resources}>");
    let _ = writeln!(out, "Operations:");
    let _ = writeln!(out, "    Request resources: RQ <consumer> <resources>");
    let _ = writeln!(out, "    Release resources: RL <consumer> <resources>");
    let _ = writeln!(out, "    Display resources: *");
    let _ = writeln!(out, "{HEAVY_RULE}");
    out
}

/// Render available plus the maximum, allocation, and need tables in
/// consumer-index order.
pub fn state(snapshot: &StateSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEAVY_RULE}");
    let _ = writeln!(out, "Available resources:");
    let _ = writeln!(out, "{}", counts(&snapshot.available));
    let _ = writeln!(out, "{LIGHT_RULE}");
    matrix(&mut out, "Maximum resources for each consumer:", &snapshot.maximum);
    let _ = writeln!(out, "{LIGHT_RULE}");
    matrix(
        &mut out,
        "Allocated resources for each consumer:",
        &snapshot.allocation,
    );
    let _ = writeln!(out, "{LIGHT_RULE}");
    matrix(&mut out, "Needed resources for each consumer:", &snapshot.need);
    let _ = writeln!(out, "{HEAVY_RULE}");
    out
}

fn matrix(out: &mut String, header: &str, rows: &[ResourceVector]) {
    let _ = writeln!(out, "{header}");
    for (consumer, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "{consumer}: {}", counts(row));
    }
}

fn counts(row: &ResourceVector) -> String {
    let mut out = String::new();
    for (i, count) in row.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{count}");
    }
    out
}
