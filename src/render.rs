//! Format a [`Record`] as display lines.
//!
//! Output order and wording are fixed; the caller joins and prints the lines. Codes without a
//! label render as `unknown` and are logged, the rest of the record still renders.

use crate::labels::{medal_tier, Labels, UnknownCode};
use crate::record::Record;
use crate::schema::Craft;
use tracing::warn;

/// Fallback label for codes outside their table.
pub const UNKNOWN: &str = "unknown";

/// Placeholder when no certificate is earned.
pub const NO_CERTIFICATES: &str = "(none)";

/// Render every section of `record`, in file-dump order.
pub fn render(record: &Record, labels: &Labels) -> Vec<String> {
    let mut out = Vec::new();
    identity_lines(record, labels, &mut out);
    out.push(certificate_line(record, labels));
    medal_lines(record, labels, &mut out);
    campaign_lines(record, labels, &mut out);
    weapon_lines(record, &mut out);
    out.push(format!("Total kills: {}", record.total_kills));
    out.push(format!("Ships captured: {}", record.ships_captured));
    out.push(format!("Ships lost: {}", record.ships_lost));
    kill_lines(record, labels, &mut out);
    point_lines("Training", &record.training_points, &mut out);
    point_lines("Battle mission", &record.battle_points, &mut out);
    out
}

fn or_unknown(label: Result<&'static str, UnknownCode>) -> &'static str {
    label.unwrap_or_else(|e| {
        warn!(error = %e, "no label for code");
        UNKNOWN
    })
}

fn identity_lines(record: &Record, labels: &Labels, out: &mut Vec<String>) {
    out.push(format!("Rank: {}", or_unknown(labels.rank_name(record.rank))));
    out.push(format!("Secret order: {}", or_unknown(labels.secret_rank_name(record.secret_rank))));
    out.push(format!("Difficulty: {}", or_unknown(labels.difficulty_name(record.difficulty))));
    out.push(format!("Points: {}", record.points));
    out.push(format!("Level: {}", record.level));
}

fn certificate_line(record: &Record, labels: &Labels) -> String {
    let earned: Vec<&str> = Craft::ALL
        .iter()
        .filter(|&&c| record.has_certificate(c))
        .map(|&c| labels.craft_name(c))
        .collect();
    if earned.is_empty() {
        format!("Training certificates: {}", NO_CERTIFICATES)
    } else {
        format!("Training certificates: {}", earned.join(" "))
    }
}

fn medal_lines(record: &Record, labels: &Labels, out: &mut Vec<String>) {
    out.push("Ship medals:".to_string());
    for craft in Craft::ALL {
        out.push(format!(
            "\t{}: {}",
            labels.craft_medal_name(craft),
            medal_tier(record.sim_completions(craft))
        ));
    }
}

fn campaign_lines(record: &Record, labels: &Labels, out: &mut Vec<String>) {
    out.push(format!("Active battle: {}", u16::from(record.active_campaign) + 1));
    for (i, (&status, &mission)) in record.campaign_status.iter().zip(&record.last_mission).enumerate() {
        let label = labels.campaign_status_name(status).unwrap_or(UNKNOWN);
        out.push(format!("Battle {} status: {}. Last mission: {}", i + 1, label, mission));
    }
    // The later copy is shown as stored; it is not checked against campaign_status.
    if record.status_copy != 0 {
        out.push(format!(
            "Status copy: {}",
            or_unknown(labels.campaign_status_name(record.status_copy))
        ));
    }
}

/// `floor(100 * hits / fired)`, or `None` when nothing was fired.
pub fn accuracy_percent(hits: u32, fired: u32) -> Option<u64> {
    if fired == 0 {
        return None;
    }
    Some(100 * u64::from(hits) / u64::from(fired))
}

fn weapon_line(fired: u32, hits: u32, what: &str) -> String {
    let mut line = format!("{} {} fired, {} {} hit", fired, what, hits, what);
    if let Some(pct) = accuracy_percent(hits, fired) {
        line.push_str(&format!(" ({}%)", pct));
    }
    line
}

fn weapon_lines(record: &Record, out: &mut Vec<String>) {
    out.push(weapon_line(record.lasers_fired, record.laser_hits, "Lasers"));
    out.push(weapon_line(
        u32::from(record.warheads_fired),
        u32::from(record.warhead_hits),
        "Warheads",
    ));
}

fn kill_lines(record: &Record, labels: &Labels, out: &mut Vec<String>) {
    out.push("Kill details:".to_string());
    for (name, kills) in labels.unit_names.iter().zip(&record.kills) {
        out.push(format!("\t{}: {}", name, kills));
    }
}

/// Non-zero entries only, numbered by rendered position rather than slot.
fn point_lines(label: &str, points: &[u32], out: &mut Vec<String>) {
    let flown = points.iter().filter(|&&p| p != 0);
    for (n, p) in flown.enumerate() {
        out.push(format!("{} {}: {} points", label, n + 1, p));
    }
}
