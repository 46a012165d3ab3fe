use crate::infra::{load_record_store, parse_date};
use chrono::{Local, NaiveDate};
use civroda::config::AppConfig;
use civroda::error::AppError;
use civroda::planning::insights::PortfolioStats;
use civroda::planning::{InMemoryRecordStore, PlanningService};
use clap::Args;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Application identifier, e.g. DA-PAR-001
    pub(crate) id: String,
    /// CSV export to load instead of the configured or bundled records
    #[arg(long)]
    pub(crate) records: Option<PathBuf>,
    /// Date printed on the report (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) generated_on: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StatsArgs {
    /// CSV export to load instead of the configured or bundled records
    #[arg(long)]
    pub(crate) records: Option<PathBuf>,
}

fn planning_service(
    records: Option<PathBuf>,
) -> Result<PlanningService<InMemoryRecordStore>, AppError> {
    let records = match records {
        Some(path) => Some(path),
        None => AppConfig::load()?.records.csv_path,
    };
    let store = load_record_store(records.as_deref())?;
    Ok(PlanningService::new(Arc::new(store)))
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        id,
        records,
        generated_on,
    } = args;

    let service = planning_service(records)?;
    let generated_on = generated_on.unwrap_or_else(|| Local::now().date_naive());
    let report = service.report(&id, generated_on)?;
    print!("{report}");

    Ok(())
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let service = planning_service(args.records)?;
    print!("{}", StatsTable(&service.stats()));
    Ok(())
}

struct StatsTable<'a>(&'a PortfolioStats);

impl fmt::Display for StatsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        writeln!(
            f,
            "{:<12} {:>6} {:>9} {:>8} {:>9} {:>17} {:>9}",
            "Council", "Total", "Approved", "Refused", "Deferred", "Under Assessment", "Approval"
        )?;
        for council in &stats.councils {
            writeln!(
                f,
                "{:<12} {:>6} {:>9} {:>8} {:>9} {:>17} {:>8.1}%",
                council.name,
                council.total_das,
                council.approved,
                council.refused,
                council.deferred,
                council.under_assessment,
                council.approval_rate
            )?;
        }
        writeln!(
            f,
            "\n{} applications on record, {:.1}% approved overall",
            stats.total_das, stats.overall_approval_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_table_lists_each_council() {
        let store = InMemoryRecordStore::sample().expect("sample parses");
        let service = PlanningService::new(Arc::new(store));

        let table = StatsTable(&service.stats()).to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Council"));
        assert!(lines[1].starts_with("Parramatta"));
        assert!(lines[1].ends_with("42.9%"));
        assert!(lines[3].starts_with("Hornsby"));
        assert!(table.contains("18 applications on record, 44.4% approved overall"));
    }

    #[test]
    fn explicit_records_path_must_exist() {
        let result = planning_service(Some(PathBuf::from("/nonexistent/civroda/das.csv")));
        assert!(matches!(result, Err(AppError::Records(_))));
    }
}
