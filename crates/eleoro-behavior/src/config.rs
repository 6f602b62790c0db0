//! Page configuration.
//!
//! Every field has a default matching the site's stylesheet and markup, so an
//! empty JSON object (or no configuration at all) yields a working page.

use crate::edge_scroll::EdgeZones;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// CSS selectors used to find each behavior's elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub burger: String,
    pub nav_links: String,
    pub dropdown_toggle: String,
    pub reveal: String,
    pub roadmap: String,
    pub roadmap_step: String,
    pub progress_dot: String,
    pub hub: String,
    pub hub_node: String,
    pub ticker: String,
    pub year: String,
    pub faq_item: String,
    pub faq_question: String,
    pub faq_answer: String,
    pub faq_icon: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: "nav".into(),
            burger: ".burger".into(),
            nav_links: ".nav-links".into(),
            dropdown_toggle: ".dropdown-toggle".into(),
            reveal: ".reveal".into(),
            roadmap: ".roadmap".into(),
            roadmap_step: ".roadmap-step".into(),
            progress_dot: ".progress-dot".into(),
            hub: ".network-hub".into(),
            hub_node: ".hub-node".into(),
            ticker: ".ticker-track".into(),
            year: "#year".into(),
            faq_item: ".faq-item".into(),
            faq_question: ".faq-question".into(),
            faq_answer: ".faq-answer".into(),
            faq_icon: ".faq-icon".into(),
        }
    }
}

/// Navigation bar and menu thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Vertical scroll (px) past which the bar is marked `scrolled`.
    pub scroll_threshold: f64,
    /// Viewport width (px) at or below which the dropdown opens on tap.
    pub mobile_breakpoint: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            mobile_breakpoint: 768.0,
        }
    }
}

/// Roadmap auto-scroll and step synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapConfig {
    pub zones: EdgeZones,
    /// Viewport width (px) above which the roadmap is laid out horizontally.
    pub horizontal_breakpoint: f64,
    /// Fraction of viewport height a step's top must reach to become active.
    pub activation: f64,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            zones: EdgeZones::default(),
            horizontal_breakpoint: 900.0,
            activation: 0.4,
        }
    }
}

/// Radial hub layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Share of the container's half-width used as the orbit radius.
    pub radius_factor: f64,
    /// Attribute holding each node's angle in degrees.
    pub angle_attribute: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            radius_factor: crate::radial::DEFAULT_RADIUS_FACTOR,
            angle_attribute: "data-angle".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that triggers the reveal.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: crate::reveal::DEFAULT_THRESHOLD,
        }
    }
}

/// Scrolling phrase strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub phrases: Vec<String>,
    /// Independent shuffles laid end to end so the strip loops without a seam.
    pub repetitions: usize,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "Strategy",
                "Brand Identity",
                "Web Platforms",
                "Data Engineering",
                "Cloud Infrastructure",
                "Machine Learning",
                "Automation",
                "Cyber Security",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            repetitions: 2,
        }
    }
}

/// Configuration for every page behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub nav: NavConfig,
    pub roadmap: RoadmapConfig,
    pub hub: HubConfig,
    pub reveal: RevealConfig,
    pub ticker: TickerConfig,
    /// `tracing` filter directive for the browser console.
    pub log_filter: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            nav: NavConfig::default(),
            roadmap: RoadmapConfig::default(),
            hub: HubConfig::default(),
            reveal: RevealConfig::default(),
            ticker: TickerConfig::default(),
            log_filter: "info".into(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON document and validate it. Absent fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every ratio and threshold is usable.
    pub fn validate(&self) -> Result<()> {
        let zones = &self.roadmap.zones;
        if !(0.0 <= zones.start && zones.start < zones.end && zones.end <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "edge zones must satisfy 0 <= start < end <= 1, got [{}, {}]",
                zones.start, zones.end
            )));
        }
        unit_interval("roadmap.activation", self.roadmap.activation)?;
        unit_interval("reveal.threshold", self.reveal.threshold)?;

        let factor = self.hub.radius_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "hub.radius_factor must be in (0, 1], got {factor}"
            )));
        }
        if self.ticker.repetitions == 0 {
            return Err(Error::InvalidConfig("ticker.repetitions must be at least 1".into()));
        }
        non_negative("nav.scroll_threshold", self.nav.scroll_threshold)?;
        non_negative("nav.mobile_breakpoint", self.nav.mobile_breakpoint)?;
        non_negative("roadmap.horizontal_breakpoint", self.roadmap.horizontal_breakpoint)?;
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must not be negative, got {value}")))
    }
}

fn unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be in [0, 1], got {value}")))
    }
}
