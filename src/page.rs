//! Declarative page layout, embedded at compile time.
//!
//! The layout lists the sections in display order, the navigation controls
//! with the section each one opens, and the countdown target. It is parsed
//! once at startup.

use crate::navigation::{NavControl, SectionNavigator};
use crate::PageError;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use log::info;
use serde::Deserialize;

const PAGE_JSON: &str = include_str!("page.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SectionKind {
    Intro { body: String },
    Score,
    Contact,
    Countdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: SectionKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub sections: Vec<SectionConfig>,
    pub nav: Vec<NavControl>,
    /// Local wall-clock time the countdown runs to.
    pub countdown_target: NaiveDateTime,
}

impl PageConfig {
    /// Parse the layout bundled with the application.
    pub fn load() -> Result<Self, PageError> {
        Self::from_json(PAGE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let config: PageConfig =
            serde_json::from_str(json).map_err(|e| PageError::Config(e.to_string()))?;
        // Fail on a broken layout before anything is rendered.
        config.navigator()?;
        config.countdown_target_in(&Local)?;
        info!(
            "Loaded page '{}' with {} sections and {} nav controls",
            config.title,
            config.sections.len(),
            config.nav.len()
        );
        Ok(config)
    }

    /// A fresh navigator over this layout with the first section active.
    pub fn navigator(&self) -> Result<SectionNavigator, PageError> {
        SectionNavigator::new(
            self.sections.iter().map(|s| s.id.clone()).collect(),
            self.nav.clone(),
        )
    }

    pub fn section(&self, id: &str) -> Result<&SectionConfig, PageError> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| PageError::ElementNotFound(id.to_string()))
    }

    pub fn countdown_target(&self) -> Result<DateTime<Local>, PageError> {
        self.countdown_target_in(&Local)
    }

    /// Resolve the target in `tz`. Ambiguous times take the earlier instant;
    /// times skipped by a clock change are rejected.
    pub fn countdown_target_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, PageError> {
        tz.from_local_datetime(&self.countdown_target)
            .earliest()
            .ok_or_else(|| {
                PageError::Config(format!(
                    "countdown target {} does not exist in the local time zone",
                    self.countdown_target
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn bundled_layout_loads() {
        let page = PageConfig::load().unwrap();
        assert_eq!(page.sections.first().map(|s| s.id.as_str()), Some("home"));
        assert_eq!(
            page.countdown_target,
            NaiveDate::from_ymd_opt(2025, 12, 10)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert!(matches!(page.section("home").unwrap().kind, SectionKind::Intro { .. }));
        assert_eq!(page.section("score").unwrap().kind, SectionKind::Score);
    }

    #[test]
    fn target_resolves_in_given_zone() {
        let page = PageConfig::load().unwrap();
        let target = page.countdown_target_in(&Utc).unwrap();
        assert_eq!(target, Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn unknown_section_lookup() {
        let page = PageConfig::load().unwrap();
        assert_eq!(
            page.section("gallery"),
            Err(PageError::ElementNotFound("gallery".to_string()))
        );
    }

    #[test]
    fn dangling_nav_target_rejected() {
        let json = r#"{
            "title": "t",
            "sections": [{ "id": "home", "title": "Home", "kind": "score" }],
            "nav": [{ "control": "nav-x", "label": "X", "target": "x" }],
            "countdown_target": "2025-12-10T00:00:00"
        }"#;
        assert!(matches!(PageConfig::from_json(json), Err(PageError::Config(_))));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(PageConfig::from_json("{"), Err(PageError::Config(_))));
        let bad_date = r#"{
            "title": "t",
            "sections": [{ "id": "home", "title": "Home", "kind": "score" }],
            "nav": [],
            "countdown_target": "December 10, 2025"
        }"#;
        assert!(matches!(PageConfig::from_json(bad_date), Err(PageError::Config(_))));
    }
}
