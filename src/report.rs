//! Plain-text report rendering.
//!
//! Renders an [`OptimizationResult`] as the human-readable report consumed
//! by CLI wrappers: summary statistics, one section per break, and the flat
//! list of all paid-leave dates.

use chrono::Datelike;

use crate::config::PlannerConfig;
use crate::models::OptimizationResult;

/// Renders the optimization result as a plain-text report.
///
/// # Example
///
/// ```
/// use holiday_optimizer::config::PlannerConfig;
/// use holiday_optimizer::optimizer::plan;
/// use holiday_optimizer::report::format_report;
///
/// let config = PlannerConfig {
///     year: Some(2026),
///     ..PlannerConfig::new(0)
/// };
/// let report = format_report(&plan(&config), &config);
/// assert!(report.contains("Holiday Optimizer Report"));
/// assert!(report.contains("No breaks were scheduled."));
/// ```
pub fn format_report(result: &OptimizationResult, config: &PlannerConfig) -> String {
    let mut lines = Vec::new();
    let year = config
        .year
        .unwrap_or_else(|| chrono::Local::now().date_naive().year());

    lines.push("Holiday Optimizer Report".to_string());
    lines.push("========================".to_string());
    lines.push(format!("Year: {year}"));
    lines.push(format!(
        "Requested Paid Leave Days: {}",
        config.number_of_days
    ));
    lines.push(String::new());

    lines.push("Summary".to_string());
    lines.push("-------".to_string());
    lines.push(format!("Total Days Off: {}", result.stats.total_days_off));
    lines.push(format!(
        "Total Paid Leave Used: {}",
        result.stats.total_paid_leave
    ));
    lines.push(format!(
        "Public Holidays in Breaks: {}",
        result.stats.total_public_holidays
    ));
    lines.push(format!(
        "Weekends in Breaks: {}",
        result.stats.total_weekends
    ));
    if result.stats.total_company_days > 0 {
        lines.push(format!(
            "Company Days in Breaks: {}",
            result.stats.total_company_days
        ));
    }
    lines.push(String::new());

    lines.push("Breaks".to_string());
    lines.push("------".to_string());
    if result.breaks.is_empty() {
        lines.push("No breaks were scheduled.".to_string());
    } else {
        for (idx, br) in result.breaks.iter().enumerate() {
            let company_part = if br.company_days > 0 {
                format!(" | Company {}", br.company_days)
            } else {
                String::new()
            };
            lines.push(format!(
                "Break {}: {} -> {}",
                idx + 1,
                br.start_date,
                br.end_date
            ));
            lines.push(format!(
                "  * Total {} days | Paid Leave {} | Weekends {} | Public {}{}",
                br.total_days, br.pto_days, br.weekends, br.public_holidays, company_part
            ));

            let pto_dates = br.pto_dates(&result.days);
            if !pto_dates.is_empty() {
                lines.push(format!(
                    "  * Paid leave dates: {}",
                    join_dates(&pto_dates)
                ));
            }
            lines.push(String::new());
        }
    }

    let all_pto: Vec<chrono::NaiveDate> = result
        .days
        .iter()
        .filter(|d| d.is_pto)
        .map(|d| d.date)
        .collect();
    lines.push("Paid Leave Dates (all)".to_string());
    lines.push("----------------------".to_string());
    lines.push(if all_pto.is_empty() {
        "None".to_string()
    } else {
        join_dates(&all_pto)
    });

    lines.join("\n")
}

fn join_dates(dates: &[chrono::NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
