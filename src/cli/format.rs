//! Output formatting for CLI display.

use jiff::civil::Date;

use crate::model::ActionEntry;

/// Widest bar in the stats chart, in cells.
const CHART_WIDTH: usize = 40;

/// The dashboard: today's points and the streak counter.
pub(super) fn format_dashboard(points_today: u64, streak: u64) -> String {
    format!("Points today: {points_today}\nStreak: {streak} days")
}

/// One entry as `name  qty → points pts`.
pub(super) fn format_entry(entry: &ActionEntry) -> String {
    format!("{}  {} → {} pts", entry.name, entry.quantity, entry.points)
}

/// Render daily totals as a horizontal bar chart, one row per date.
///
/// Bars are scaled so the largest total spans [`CHART_WIDTH`] cells; any
/// non-zero total gets at least one cell. Returns `None` when there is
/// nothing to draw.
pub(super) fn render_chart(totals: &[(Date, u64)]) -> Option<String> {
    let max = totals.iter().map(|(_, points)| *points).max()?;
    let label_width = totals
        .iter()
        .map(|(_, points)| points.to_string().len())
        .max()
        .unwrap_or(1);

    let rows: Vec<String> = totals
        .iter()
        .map(|(date, points)| {
            let cells = bar_cells(*points, max);
            let bar = "█".repeat(cells);
            let padding = " ".repeat(CHART_WIDTH - cells);
            format!("{date} │{bar}{padding} {points:>label_width$}")
        })
        .collect();

    Some(rows.join("\n"))
}

fn bar_cells(points: u64, max: u64) -> usize {
    if points == 0 || max == 0 {
        return 0;
    }
    let scaled = u128::from(points) * CHART_WIDTH as u128 / u128::from(max);
    usize::try_from(scaled.max(1)).unwrap_or(CHART_WIDTH)
}
