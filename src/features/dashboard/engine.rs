//! Pure derivations over a report collection. Nothing here keeps state: the
//! same input always yields the same output.

use chrono::NaiveDate;

use crate::features::categories::models::{Category, CategoryStyle};
use crate::features::dashboard::dtos::{
    CategoryReportSummary, ReportQuery, ReportStatsDto, SearchScope,
};
use crate::features::reports::models::{Report, ReportStatus};
use crate::shared::constants::DEFAULT_MAP_CENTER;

/// Stable sort, newest `created_at` first
pub fn sort_newest_first(reports: &mut [Report]) {
    reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Whether a single report satisfies every predicate of `query`
pub fn matches(report: &Report, query: &ReportQuery) -> bool {
    matches_search(report, &query.search, query.scope)
        && query
            .category_filter()
            .map_or(true, |category| report.category == category)
        && query.status.map_or(true, |status| report.status == status)
}

fn matches_search(report: &Report, search: &str, scope: SearchScope) -> bool {
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    if report.title.to_lowercase().contains(&needle)
        || report.description.to_lowercase().contains(&needle)
    {
        return true;
    }

    scope == SearchScope::TitleDescriptionId && report.id.to_string().contains(search)
}

/// Reports matching `query`, in input order
pub fn filter_reports(reports: &[Report], query: &ReportQuery) -> Vec<Report> {
    reports
        .iter()
        .filter(|r| matches(r, query))
        .cloned()
        .collect()
}

/// Status counters plus the number of reports created on `today` (UTC day)
pub fn summarize(reports: &[Report], today: NaiveDate) -> ReportStatsDto {
    reports
        .iter()
        .fold(ReportStatsDto::default(), |mut stats, report| {
            stats.total += 1;
            match report.status {
                ReportStatus::Pending => stats.pending += 1,
                ReportStatus::Transmitted => stats.transmitted += 1,
                ReportStatus::Resolved => stats.resolved += 1,
            }
            if report.created_at.date_naive() == today {
                stats.today_reports += 1;
            }
            stats
        })
}

/// Reports that can be placed on a map
pub fn with_coordinates(reports: &[Report]) -> Vec<Report> {
    reports
        .iter()
        .filter(|r| r.has_coordinates())
        .cloned()
        .collect()
}

/// Mean position of every locatable report, or the default city center
pub fn map_center(reports: &[Report]) -> (f64, f64) {
    let points: Vec<(f64, f64)> = reports.iter().filter_map(Report::coordinates).collect();
    if points.is_empty() {
        return DEFAULT_MAP_CENTER;
    }

    let count = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), (p_lat, p_lng)| (lat + p_lat, lng + p_lng));
    (lat_sum / count, lng_sum / count)
}

/// The first `limit` reports of an already sorted list
pub fn recent(reports: &[Report], limit: usize) -> Vec<Report> {
    reports.iter().take(limit).cloned().collect()
}

/// Report count per known category, plus one entry per dangling category
/// name referenced by a report
pub fn count_by_category(reports: &[Report], categories: &[Category]) -> Vec<CategoryReportSummary> {
    let mut summaries: Vec<CategoryReportSummary> = categories
        .iter()
        .map(|category| CategoryReportSummary {
            name: category.name.clone(),
            icon: category.icon.clone(),
            color: category.color.clone(),
            report_count: 0,
        })
        .collect();

    for report in reports {
        match summaries.iter_mut().find(|s| s.name == report.category) {
            Some(summary) => summary.report_count += 1,
            None => {
                let style = CategoryStyle::fallback();
                summaries.push(CategoryReportSummary {
                    name: report.category.clone(),
                    icon: style.icon,
                    color: style.color,
                    report_count: 1,
                });
            }
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{at, ReportBuilder};

    fn sample() -> Vec<Report> {
        vec![
            ReportBuilder::new(1)
                .title("Nid de poule avenue Kennedy")
                .category("Routes dégradées")
                .status(ReportStatus::Pending)
                .coordinates(3.86, 11.51)
                .created_at(at(2025, 1, 14))
                .build(),
            ReportBuilder::new(2)
                .title("CNI perdue")
                .description("Trouvée près de la ROUTE du marché")
                .category("Documents perdus")
                .status(ReportStatus::Transmitted)
                .created_at(at(2025, 1, 12))
                .build(),
            ReportBuilder::new(12)
                .title("Incendie")
                .category("Incendies")
                .status(ReportStatus::Resolved)
                .coordinates(4.07, 9.66)
                .created_at(at(2025, 1, 14))
                .build(),
        ]
    }

    fn ids(reports: &[Report]) -> Vec<u32> {
        reports.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let reports = sample();
        let query = ReportQuery::new().search("RoUtE");
        assert_eq!(ids(&filter_reports(&reports, &query)), vec![2]);

        let query = ReportQuery::new().search("kennedy");
        assert_eq!(ids(&filter_reports(&reports, &query)), vec![1]);
    }

    #[test]
    fn test_search_matches_id_only_in_admin_scope() {
        let reports = sample();
        let admin = ReportQuery::new().search("12");
        assert_eq!(ids(&filter_reports(&reports, &admin)), vec![12]);

        let citizen = admin.clone().scope(SearchScope::TitleDescription);
        assert!(filter_reports(&reports, &citizen).is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let reports = sample();
        assert_eq!(filter_reports(&reports, &ReportQuery::new()), reports);
    }

    #[test]
    fn test_filters_are_a_conjunction() {
        let reports = sample();
        let query = ReportQuery::new()
            .search("i")
            .category("Incendies")
            .status(ReportStatus::Resolved);
        let filtered = filter_reports(&reports, &query);
        assert_eq!(ids(&filtered), vec![12]);

        let text_only = filter_reports(&reports, &ReportQuery::new().search("i"));
        for report in &filtered {
            assert!(text_only.contains(report));
            assert_eq!(report.category, "Incendies");
            assert_eq!(report.status, ReportStatus::Resolved);
        }

        let mismatch = ReportQuery::new()
            .category("Incendies")
            .status(ReportStatus::Pending);
        assert!(filter_reports(&reports, &mismatch).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let reports = sample();
        let query = ReportQuery::new().search("e").status(ReportStatus::Pending);
        let once = filter_reports(&reports, &query);
        let twice = filter_reports(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_summarize_counts_statuses() {
        let reports = vec![
            ReportBuilder::new(1).status(ReportStatus::Pending).build(),
            ReportBuilder::new(2).status(ReportStatus::Resolved).build(),
        ];
        let stats = summarize(&reports, NaiveDate::from_ymd_opt(1999, 1, 1).unwrap());
        assert_eq!(
            stats,
            ReportStatsDto {
                total: 2,
                pending: 1,
                transmitted: 0,
                resolved: 1,
                today_reports: 0,
            }
        );
    }

    #[test]
    fn test_summarize_counts_today_by_day() {
        let reports = sample();
        let today = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
        let stats = summarize(&reports, today);
        assert_eq!(stats.today_reports, 2);
        assert_eq!(summarize(&reports, today), stats);
    }

    #[test]
    fn test_reports_without_coordinates_are_excluded_from_map() {
        let reports = vec![
            ReportBuilder::new(1)
                .category("Routes dégradées")
                .build(),
            ReportBuilder::new(2).coordinates(3.0, 11.0).build(),
        ];
        assert_eq!(ids(&with_coordinates(&reports)), vec![2]);
    }

    #[test]
    fn test_map_center() {
        let reports = sample();
        let (lat, lng) = map_center(&reports);
        assert!((lat - 3.965).abs() < 1e-9);
        assert!((lng - 10.585).abs() < 1e-9);

        assert_eq!(map_center(&[]), DEFAULT_MAP_CENTER);
    }

    #[test]
    fn test_recent_takes_prefix() {
        let reports = sample();
        assert_eq!(ids(&recent(&reports, 2)), vec![1, 2]);
        assert_eq!(recent(&reports, 10).len(), 3);
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        let mut reports = sample();
        sort_newest_first(&mut reports);
        assert_eq!(ids(&reports), vec![1, 12, 2]);
    }

    #[test]
    fn test_count_by_category_includes_dangling_names() {
        let categories = vec![Category {
            id: 1,
            name: "Incendies".into(),
            description: String::new(),
            icon: "Flame".into(),
            color: "#ef4444".into(),
        }];
        let summaries = count_by_category(&sample(), &categories);

        assert_eq!(summaries[0].name, "Incendies");
        assert_eq!(summaries[0].report_count, 1);
        let lost = summaries.iter().find(|s| s.name == "Documents perdus").unwrap();
        assert_eq!(lost.icon, "AlertTriangle");
        assert_eq!(lost.report_count, 1);
        assert_eq!(summaries.len(), 3);
    }
}
