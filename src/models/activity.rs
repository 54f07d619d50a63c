//! Catalog activity models.
//!
//! Three catalogs feed the planner:
//! - **Must-see**: regional attractions with opening hours and open days.
//! - **Local**: nearby activities (restaurants, hikes, ...) — same shape
//!   plus a category.
//! - **Campsite**: site-run animations bound to a specific calendar date.
//!
//! All entries are immutable content-seeded records; the planner only reads
//! them. Opening/closing times arrive as raw `"HH:MM[:SS]"` strings and are
//! normalized once into [`HoursWindow`] with defensive defaults, so the slot
//! overlap logic never sees malformed input.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Default opening hour assumed when the hour component is malformed.
pub const DEFAULT_OPEN_HOUR: u32 = 9;
/// Default closing hour assumed when the hour component is malformed.
pub const DEFAULT_CLOSE_HOUR: u32 = 17;

/// Shared accessors for catalog-sourced activities (must-see and local).
///
/// The overlap classifier and the weekday-availability filter operate on
/// this trait so they stay agnostic of the concrete catalog.
pub trait CatalogEntry {
    /// Catalog-unique identifier.
    fn id(&self) -> i64;

    /// Raw opening time string (`"HH:MM[:SS]"`), if any.
    fn opening_time(&self) -> Option<&str>;

    /// Raw closing time string (`"HH:MM[:SS]"`), if any.
    fn closing_time(&self) -> Option<&str>;

    /// Capitalized weekday names the entry is open on.
    /// Empty = open every day.
    fn open_days(&self) -> &[String];

    /// Normalized opening hours.
    ///
    /// `None` when either raw time is absent or blank — the entry is then
    /// unconstrained and fits every slot.
    fn hours(&self) -> Option<HoursWindow> {
        HoursWindow::parse(self.opening_time(), self.closing_time())
    }
}

/// Opening hours normalized to whole hours on a 24h clock.
///
/// Parsing is deliberately lenient: a malformed hour component falls back to
/// 9 (opening) / 17 (closing) so a single bad catalog record never aborts a
/// whole schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursWindow {
    /// Hour the activity opens (0-23).
    pub open_hour: u32,
    /// Hour the activity closes (0-23).
    pub close_hour: u32,
}

impl HoursWindow {
    /// Creates a window from whole hours.
    pub fn new(open_hour: u32, close_hour: u32) -> Self {
        Self {
            open_hour,
            close_hour,
        }
    }

    /// Parses raw time strings into a normalized window.
    ///
    /// Returns `None` if either string is absent or blank (unconstrained
    /// activity). A present string with an unparsable hour component maps
    /// to the defensive defaults instead of failing.
    pub fn parse(opening: Option<&str>, closing: Option<&str>) -> Option<Self> {
        let opening = opening.filter(|s| !s.trim().is_empty())?;
        let closing = closing.filter(|s| !s.trim().is_empty())?;
        Some(Self {
            open_hour: parse_hour(opening, DEFAULT_OPEN_HOUR),
            close_hour: parse_hour(closing, DEFAULT_CLOSE_HOUR),
        })
    }
}

/// Extracts the hour component of `"HH:MM[:SS]"`, falling back to `default`.
fn parse_hour(value: &str, default: u32) -> u32 {
    value
        .split(':')
        .next()
        .and_then(|h| h.trim().parse().ok())
        .unwrap_or(default)
}

/// A regional must-see attraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MustSeeActivity {
    /// Unique identifier within the must-see catalog.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Place name or address.
    pub location: String,
    /// Distance from the site (display string, e.g. "5km").
    pub distance: Option<String>,
    /// Typical visit duration (display string, e.g. "2h").
    pub duration: Option<String>,
    /// Link to an external page.
    pub external_url: Option<String>,
    /// Opening time as `"HH:MM[:SS]"`. `None` = unconstrained.
    pub opening_time: Option<String>,
    /// Closing time as `"HH:MM[:SS]"`. `None` = unconstrained.
    pub closing_time: Option<String>,
    /// Capitalized weekday names the attraction is open on.
    /// Empty = open every day.
    pub open_days: Vec<String>,
    /// Site this entry belongs to.
    pub site: String,
}

impl MustSeeActivity {
    /// Creates a new must-see entry.
    pub fn new(id: i64, title: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            location: String::new(),
            distance: None,
            duration: None,
            external_url: None,
            opening_time: None,
            closing_time: None,
            open_days: Vec::new(),
            site: site.into(),
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets opening and closing times.
    pub fn with_hours(mut self, opening: impl Into<String>, closing: impl Into<String>) -> Self {
        self.opening_time = Some(opening.into());
        self.closing_time = Some(closing.into());
        self
    }

    /// Sets the open weekdays.
    pub fn with_open_days(mut self, days: Vec<String>) -> Self {
        self.open_days = days;
        self
    }

    /// Sets the external link.
    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    /// Sets distance and duration display strings.
    pub fn with_distance_duration(
        mut self,
        distance: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        self.distance = Some(distance.into());
        self.duration = Some(duration.into());
        self
    }
}

impl CatalogEntry for MustSeeActivity {
    fn id(&self) -> i64 {
        self.id
    }

    fn opening_time(&self) -> Option<&str> {
        self.opening_time.as_deref()
    }

    fn closing_time(&self) -> Option<&str> {
        self.closing_time.as_deref()
    }

    fn open_days(&self) -> &[String] {
        &self.open_days
    }
}

/// A nearby local activity ("à faire dans le coin").
///
/// Same shape as [`MustSeeActivity`] plus a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalActivity {
    /// Unique identifier within the local catalog.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Place name or address.
    pub location: String,
    /// Activity category (e.g. "Restaurant", "Hiking").
    pub category: Option<String>,
    /// Distance from the site (display string).
    pub distance: Option<String>,
    /// Typical duration (display string).
    pub duration: Option<String>,
    /// Link to an external page.
    pub external_url: Option<String>,
    /// Opening time as `"HH:MM[:SS]"`. `None` = unconstrained.
    pub opening_time: Option<String>,
    /// Closing time as `"HH:MM[:SS]"`. `None` = unconstrained.
    pub closing_time: Option<String>,
    /// Capitalized weekday names the activity is open on.
    /// Empty = open every day.
    pub open_days: Vec<String>,
    /// Site this entry belongs to.
    pub site: String,
}

impl LocalActivity {
    /// Creates a new local entry.
    pub fn new(id: i64, title: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            location: String::new(),
            category: None,
            distance: None,
            duration: None,
            external_url: None,
            opening_time: None,
            closing_time: None,
            open_days: Vec::new(),
            site: site.into(),
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets opening and closing times.
    pub fn with_hours(mut self, opening: impl Into<String>, closing: impl Into<String>) -> Self {
        self.opening_time = Some(opening.into());
        self.closing_time = Some(closing.into());
        self
    }

    /// Sets the open weekdays.
    pub fn with_open_days(mut self, days: Vec<String>) -> Self {
        self.open_days = days;
        self
    }

    /// Sets the external link.
    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }
}

impl CatalogEntry for LocalActivity {
    fn id(&self) -> i64 {
        self.id
    }

    fn opening_time(&self) -> Option<&str> {
        self.opening_time.as_deref()
    }

    fn closing_time(&self) -> Option<&str> {
        self.closing_time.as_deref()
    }

    fn open_days(&self) -> &[String] {
        &self.open_days
    }
}

/// A site-run animation bound to a specific calendar date.
///
/// Unlike the two catalog types above, a campsite activity only exists on
/// the day of `activity_date` and is never capped by the single-use rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampsiteActivity {
    /// Unique identifier within the campsite catalog.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// The calendar day this animation takes place (day granularity;
    /// the time component is only a fallback for slot inference).
    pub activity_date: NaiveDateTime,
    /// Start time as `"HH:MM[:SS]"`, if announced.
    pub time: Option<String>,
    /// Duration display string (e.g. "1h"), if announced.
    pub duration: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Site this entry belongs to.
    pub site: String,
}

impl CampsiteActivity {
    /// Creates a new campsite entry.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        activity_date: NaiveDateTime,
        site: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            activity_date,
            time: None,
            duration: None,
            description: None,
            site: site.into(),
        }
    }

    /// Sets the announced start time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the duration display string.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The hour this animation starts: the announced time string when
    /// parsable, otherwise the hour of `activity_date`.
    pub fn start_hour(&self) -> u32 {
        self.time
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| s.split(':').next())
            .and_then(|h| h.trim().parse().ok())
            .unwrap_or_else(|| self.activity_date.hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_must_see_builder() {
        let act = MustSeeActivity::new(1, "Rocher de la Vierge", "bela-basque")
            .with_location("Biarritz")
            .with_description("Iconic lookout")
            .with_hours("09:00:00", "17:00:00")
            .with_open_days(vec!["Lundi".into(), "Mardi".into()])
            .with_distance_duration("5km", "2h")
            .with_external_url("https://example.com/rocher");

        assert_eq!(act.id, 1);
        assert_eq!(act.location, "Biarritz");
        assert_eq!(act.opening_time.as_deref(), Some("09:00:00"));
        assert_eq!(act.open_days.len(), 2);
        assert_eq!(act.distance.as_deref(), Some("5km"));
    }

    #[test]
    fn test_local_builder() {
        let act = LocalActivity::new(7, "Chez Maya", "bela-basque")
            .with_category("Restaurant")
            .with_hours("12:00", "22:00");

        assert_eq!(act.category.as_deref(), Some("Restaurant"));
        assert_eq!(act.hours(), Some(HoursWindow::new(12, 22)));
    }

    #[test]
    fn test_hours_parse_defaults_on_malformed() {
        let w = HoursWindow::parse(Some("abc"), Some("xx:30")).unwrap();
        assert_eq!(w.open_hour, DEFAULT_OPEN_HOUR);
        assert_eq!(w.close_hour, DEFAULT_CLOSE_HOUR);

        let w = HoursWindow::parse(Some("08:15"), Some("zz")).unwrap();
        assert_eq!(w.open_hour, 8);
        assert_eq!(w.close_hour, DEFAULT_CLOSE_HOUR);
    }

    #[test]
    fn test_hours_parse_absent_means_unconstrained() {
        assert_eq!(HoursWindow::parse(None, Some("17:00")), None);
        assert_eq!(HoursWindow::parse(Some("09:00"), None), None);
        assert_eq!(HoursWindow::parse(Some(""), Some("17:00")), None);
        assert_eq!(HoursWindow::parse(Some("  "), Some("17:00")), None);
    }

    #[test]
    fn test_hours_parse_normal() {
        let w = HoursWindow::parse(Some("09:00:00"), Some("17:30:00")).unwrap();
        assert_eq!(w, HoursWindow::new(9, 17));
    }

    #[test]
    fn test_campsite_start_hour_from_time_string() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let act = CampsiteActivity::new(1, "Tournoi de pétanque", date, "bela-basque")
            .with_time("15:30:00");
        assert_eq!(act.start_hour(), 15);
    }

    #[test]
    fn test_campsite_start_hour_falls_back_to_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let no_time = CampsiteActivity::new(1, "Soirée dansante", date, "bela-basque");
        assert_eq!(no_time.start_hour(), 20);

        let bad_time = no_time.clone().with_time("soir");
        assert_eq!(bad_time.start_hour(), 20);
    }
}
