//! Text output: the stats table and listings, with optional colors.

use cpstat_core::{
    AllStats, CodeChefStats, CodeforcesStats, GfgStats, LeetCodeStats, Platform, PlatformResult,
    UserHandles,
};
use cpstat_platforms::PlatformDescriptor;

use crate::config::Effective;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

const SEPARATOR: char = '─';
const NOT_AVAILABLE: &str = "N/A";
const EMPTY_CELL: &str = "-";

/// Column headers of the stats table.
pub const HEADERS: [&str; 5] = ["Platform", "Username", "Rating/Score", "Solved", "Status"];

/// One table row before padding and coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell texts in [`HEADERS`] order.
    pub cells: [String; 5],
    /// Whether the platform fetch succeeded.
    pub ok: bool,
}

impl Row {
    fn success(
        platform: Platform,
        username: &str,
        score: String,
        solved: String,
        status: String,
    ) -> Self {
        Self {
            cells: [
                platform.display_name().to_string(),
                username.to_string(),
                score,
                solved,
                format!("✓ {status}"),
            ],
            ok: true,
        }
    }

    fn failure(platform: Platform, username: &str, error: &str) -> Self {
        Self {
            cells: [
                platform.display_name().to_string(),
                username.to_string(),
                EMPTY_CELL.to_string(),
                EMPTY_CELL.to_string(),
                format!("✗ {error}"),
            ],
            ok: false,
        }
    }
}

// ============================================================================
// Row Builders
// ============================================================================

fn codeforces_row(stats: &CodeforcesStats) -> Row {
    Row::success(
        Platform::Codeforces,
        &stats.username,
        format!("{} (max: {})", stats.rating, stats.max_rating),
        stats.solved.to_string(),
        stats.rank.clone(),
    )
}

fn leetcode_row(stats: &LeetCodeStats) -> Row {
    let rating = stats
        .contest_rating
        .filter(|r| *r > 0.0)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |r| format!("{r:.0}"));
    Row::success(
        Platform::LeetCode,
        &stats.username,
        rating,
        stats.solved.summary(),
        format!("Rank #{}", stats.ranking),
    )
}

fn codechef_row(stats: &CodeChefStats) -> Row {
    let global = stats
        .global_rank
        .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string());
    Row::success(
        Platform::CodeChef,
        &stats.username,
        format!("{} ({}★)", stats.rating, stats.stars),
        stats.solved.to_string(),
        format!("Global #{global}"),
    )
}

fn gfg_row(stats: &GfgStats) -> Row {
    Row::success(
        Platform::GeeksforGeeks,
        &stats.username,
        format!("Score: {}", stats.coding_score),
        stats.solved.summary(),
        format!("Streak: {}", stats.current_streak),
    )
}

fn row_for<T>(
    platform: Platform,
    result: Option<&PlatformResult<T>>,
    handles: &UserHandles,
    build: fn(&T) -> Row,
) -> Option<Row> {
    match result? {
        PlatformResult::Success(data) => Some(build(data)),
        PlatformResult::Failure(error) => Some(Row::failure(
            platform,
            handles.get(platform).unwrap_or_default(),
            error,
        )),
    }
}

/// Builds the table rows in rendering order. Unrequested platforms have no row.
pub fn rows(stats: &AllStats, handles: &UserHandles) -> Vec<Row> {
    [
        row_for(Platform::Codeforces, stats.codeforces.as_ref(), handles, codeforces_row),
        row_for(Platform::LeetCode, stats.leetcode.as_ref(), handles, leetcode_row),
        row_for(Platform::CodeChef, stats.codechef.as_ref(), handles, codechef_row),
        row_for(Platform::GeeksforGeeks, stats.gfg.as_ref(), handles, gfg_row),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// ============================================================================
// Formatter
// ============================================================================

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the aggregated stats as a table.
    pub fn format_stats(&self, stats: &AllStats, handles: &UserHandles) -> String {
        let rows = rows(stats, handles);

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(self.bold(&pad_line(&HEADERS.map(String::from), &widths)));
        lines.push(self.dim(&separator(&widths)));

        for row in &rows {
            let line = pad_line(&row.cells, &widths);
            lines.push(if row.ok {
                self.colorize_status(&line, &row.cells[4], GREEN)
            } else {
                self.colorize_status(&line, &row.cells[4], RED)
            });
        }

        lines.join("\n")
    }

    /// Formats the supported platform list.
    pub fn format_platforms(&self, descriptors: &[PlatformDescriptor]) -> String {
        let mut lines = Vec::new();
        lines.push(self.bold(&format!(
            "{:<15} {:<6} {:<10} {}",
            "Platform", "Flag", "Transport", "Profile"
        )));
        lines.push(self.dim(&SEPARATOR.to_string().repeat(70)));

        for desc in descriptors {
            lines.push(format!(
                "{:<15} {:<6} {:<10} {}",
                desc.display_name(),
                format!("--{}", desc.cli_name()),
                desc.transport.display_name(),
                desc.profile_url("<username>"),
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} platforms", descriptors.len()));
        lines.join("\n")
    }

    /// Formats the effective configuration.
    pub fn format_config(&self, effective: &Effective) -> String {
        let mut lines = Vec::new();
        lines.push(self.bold("cpstat Configuration"));
        lines.push(SEPARATOR.to_string().repeat(40));

        let path = effective
            .path
            .as_ref()
            .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
        lines.push(format!("Config file: {path}"));
        lines.push(format!("Timeout:     {}ms", effective.timeout_ms));
        lines.push(String::new());
        lines.push("Handles:".to_string());

        for platform in Platform::all() {
            let handle = effective
                .handles
                .get(*platform)
                .map_or_else(|| self.dim(EMPTY_CELL), str::to_string);
            lines.push(format!("  {:<15} {}", platform.display_name(), handle));
        }

        lines.join("\n")
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    /// Colors the trailing status cell of an already padded line.
    fn colorize_status(&self, line: &str, status: &str, color: &str) -> String {
        if !self.use_colors {
            return line.to_string();
        }
        match line.strip_suffix(status) {
            Some(head) => format!("{head}{color}{status}{RESET}"),
            None => line.to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Left-aligns cells to `widths`, two spaces apart. The last cell is not padded.
fn pad_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let last = cells.len() - 1;
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                cell.clone()
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn separator(widths: &[usize; 5]) -> String {
    let total = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    SEPARATOR.to_string().repeat(total)
}
