//! Seed data bundled with the binary. Every store starts from these records,
//! so a restart discards all mutations made during the previous run.

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::reports::models::Report;

const REPORTS_JSON: &str = include_str!("../../fixtures/reports.json");
const CATEGORIES_JSON: &str = include_str!("../../fixtures/categories.json");

pub fn seed_reports() -> Result<Vec<Report>> {
    let reports: Vec<Report> = serde_json::from_str(REPORTS_JSON)?;
    tracing::debug!("Loaded {} seed reports", reports.len());
    Ok(reports)
}

pub fn seed_categories() -> Result<Vec<Category>> {
    let categories: Vec<Category> = serde_json::from_str(CATEGORIES_JSON)?;
    tracing::debug!("Loaded {} seed categories", categories.len());
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_reports_have_unique_ids() {
        let reports = seed_reports().unwrap();
        let ids: HashSet<u32> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), reports.len());
        assert!(reports.iter().all(|r| r.id > 0));
    }

    #[test]
    fn test_seed_reports_reference_known_categories() {
        let names: HashSet<String> = seed_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        for report in seed_reports().unwrap() {
            assert!(names.contains(&report.category), "{}", report.category);
        }
    }

    #[test]
    fn test_seed_categories() {
        let categories = seed_categories().unwrap();
        assert_eq!(categories.len(), 8);
        assert!(categories.iter().any(|c| c.name == "Routes dégradées"));
    }
}
