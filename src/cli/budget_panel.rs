//! Collapsible read-only monthly budget panel.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::{output, CliError};
use crate::domain::{BudgetRow, BudgetStatus};
use crate::services::BudgetService;
use crate::sheets::{SheetStore, SheetsClient};

const BAR_WIDTH: usize = 30;

/// Offers the collapsed panel and, when expanded, renders each budget
/// category with a clamped progress bar and an unclamped percentage
/// caption. Read failures of any kind show a generic refresh prompt.
pub fn render(store: &dyn SheetStore, spreadsheet_id: &str) -> Result<(), CliError> {
    let expanded = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Show monthly budget status?")
        .default(false)
        .interact()?;
    if !expanded {
        return Ok(());
    }

    let rows = BudgetService::read_budget(store);
    if rows.is_empty() {
        output::info("Budget stats unavailable, refresh to try again.");
        return Ok(());
    }

    for row in &rows {
        println!("\n{}", row.category.bold());
        println!("  Spent: {}    Limit: {}", row.spent, row.limit);
        match row.status {
            BudgetStatus::Exceeded => output::error("Budget Exceeded!"),
            BudgetStatus::Approaching => output::warning("Approaching Limit"),
            BudgetStatus::Normal => {}
        }
        println!("  {}", bar(row));
        println!("  {} of monthly limit used", row.percent_text());
        output::separator();
    }

    output::info(format!(
        "Spreadsheet: {}",
        SheetsClient::spreadsheet_url(spreadsheet_id)
    ));
    Ok(())
}

fn bar(row: &BudgetRow) -> String {
    let filled = filled_cells(row.bar_fraction());
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    match row.status {
        BudgetStatus::Exceeded => bar.bright_red().to_string(),
        BudgetStatus::Approaching => bar.bright_yellow().to_string(),
        BudgetStatus::Normal => bar.bright_green().to_string(),
    }
}

fn filled_cells(fraction: f64) -> usize {
    (fraction * BAR_WIDTH as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill_tracks_the_clamped_fraction() {
        assert_eq!(filled_cells(0.5), BAR_WIDTH / 2);
        assert_eq!(filled_cells(1.0), BAR_WIDTH);
        assert_eq!(filled_cells(0.0), 0);
    }
}
