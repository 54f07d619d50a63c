//! Input validation for planning requests.
//!
//! Checks the structural integrity of a [`PlanRequest`] before planning:
//! duplicate ids within a catalog, entries scoped to the wrong site, and an
//! inverted date range. The planner itself assumes validated input (an
//! inverted range just yields an empty schedule there); callers run this at
//! the fetch boundary and surface the errors to the user.
//!
//! Malformed opening/closing time strings are deliberately NOT errors —
//! they degrade to default hours during normalization so one bad record
//! never rejects a whole catalog.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::scheduler::PlanRequest;

/// Validation outcome: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<CatalogError>>;

/// A problem detected in a planning request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two entries of the same catalog share an id.
    #[error("duplicate {catalog} activity id {id}")]
    DuplicateId {
        /// Catalog name ("must-see", "local", "campsite").
        catalog: &'static str,
        /// The doubled id.
        id: i64,
    },
    /// An entry belongs to a different site than the request.
    #[error("{catalog} activity {id} belongs to site '{found}', expected '{expected}'")]
    SiteMismatch {
        /// Catalog name.
        catalog: &'static str,
        /// Offending entry id.
        id: i64,
        /// Site of the request.
        expected: String,
        /// Site the entry carries.
        found: String,
    },
    /// `from` is after `to`.
    #[error("date range is inverted: {from} is after {to}")]
    InvalidDateRange {
        /// Requested start day.
        from: NaiveDate,
        /// Requested end day.
        to: NaiveDate,
    },
}

/// Validates a planning request.
///
/// Checks:
/// 1. `from <= to`
/// 2. No duplicate ids within each catalog
/// 3. Every entry's `site` matches the request's site
///
/// All issues are collected; nothing short-circuits.
pub fn validate_request(request: &PlanRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.from > request.to {
        errors.push(CatalogError::InvalidDateRange {
            from: request.from,
            to: request.to,
        });
    }

    check_catalog(
        "must-see",
        request.must_see.iter().map(|a| (a.id, a.site.as_str())),
        &request.site,
        &mut errors,
    );
    check_catalog(
        "local",
        request.local.iter().map(|a| (a.id, a.site.as_str())),
        &request.site,
        &mut errors,
    );
    check_catalog(
        "campsite",
        request.campsite.iter().map(|a| (a.id, a.site.as_str())),
        &request.site,
        &mut errors,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_catalog<'a>(
    catalog: &'static str,
    entries: impl Iterator<Item = (i64, &'a str)>,
    site: &str,
    errors: &mut Vec<CatalogError>,
) {
    let mut seen = HashSet::new();
    for (id, entry_site) in entries {
        if !seen.insert(id) {
            errors.push(CatalogError::DuplicateId { catalog, id });
        }
        if entry_site != site {
            errors.push(CatalogError::SiteMismatch {
                catalog,
                id,
                expected: site.to_string(),
                found: entry_site.to_string(),
            });
        }
    }
}
