//! Stats CLI command
//!
//! Renders the aggregated spending report for a reference date and view.

use clap::Args;

use crate::config::Settings;
use crate::display::format_stats_report;
use crate::error::{KakeiboError, KakeiboResult};
use crate::services::ExpenseService;
use crate::stats::StatsView;
use crate::storage::Storage;

use super::parse_date_or_today;

/// Arguments for `kakeibo stats`
#[derive(Args)]
pub struct StatsArgs {
    /// Reference date (YYYY-MM-DD), defaults to today
    pub date: Option<String>,
    /// Window size: daily, weekly, monthly, or yearly
    #[arg(short, long)]
    pub view: Option<String>,
    /// Emit the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Handle `kakeibo stats`
pub fn handle_stats(storage: &Storage, settings: &Settings, args: StatsArgs) -> KakeiboResult<()> {
    let view = match args.view.as_deref() {
        Some(v) => v.parse::<StatsView>()?,
        None => settings.default_view,
    };
    let date = parse_date_or_today(args.date.as_deref())?;

    let service = ExpenseService::new(&storage.expenses);
    let report = service.stats_for_date(date, view)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| KakeiboError::Json(e.to_string()))?;
        println!("{}", rendered);
    } else {
        print!("{}", format_stats_report(&report, &settings.currency_symbol));
    }
    Ok(())
}
