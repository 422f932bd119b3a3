//! Single-page section navigation.
//!
//! Exactly one section is active at a time. Navigation controls declare the
//! section they target up front; a control is highlighted whenever its
//! target is the active section.

use crate::PageError;
use log::{debug, warn};
use serde::Deserialize;

/// A navigation control and the section it opens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavControl {
    pub control: String,
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    sections: Vec<String>,
    controls: Vec<NavControl>,
    active: usize,
}

impl SectionNavigator {
    /// Build a navigator with the first section active.
    ///
    /// Fails if there are no sections, if an id is repeated, or if a control
    /// targets a section that does not exist.
    pub fn new(sections: Vec<String>, controls: Vec<NavControl>) -> Result<Self, PageError> {
        if sections.is_empty() {
            return Err(PageError::Config("at least one section is required".to_string()));
        }
        for (i, id) in sections.iter().enumerate() {
            if sections[..i].contains(id) {
                return Err(PageError::Config(format!("duplicate section id '{}'", id)));
            }
        }
        if let Some(c) = controls.iter().find(|c| !sections.contains(&c.target)) {
            return Err(PageError::Config(format!(
                "control '{}' targets unknown section '{}'",
                c.control, c.target
            )));
        }
        Ok(Self {
            sections,
            controls,
            active: 0,
        })
    }

    /// Make `id` the only active section.
    ///
    /// An unknown id leaves the current state untouched.
    pub fn show_section(&mut self, id: &str) -> Result<(), PageError> {
        match self.sections.iter().position(|s| s == id) {
            Some(idx) => {
                self.active = idx;
                debug!(
                    "Showing section '{}' ({} control(s) highlighted)",
                    id,
                    self.active_controls().count()
                );
                Ok(())
            }
            None => {
                warn!("Cannot show section '{}': no such section", id);
                Err(PageError::ElementNotFound(id.to_string()))
            }
        }
    }

    pub fn active_section(&self) -> &str {
        &self.sections[self.active]
    }

    pub fn is_section_active(&self, id: &str) -> bool {
        self.active_section() == id
    }

    pub fn is_control_active(&self, control: &str) -> bool {
        self.controls
            .iter()
            .any(|c| c.control == control && c.target == self.active_section())
    }

    pub fn active_controls(&self) -> impl Iterator<Item = &NavControl> {
        let active = self.active_section();
        self.controls.iter().filter(move |c| c.target == active)
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }
}
