//! Configuration handling for the TUI

use crate::intake::SimulatedIntake;
use crate::state::Site;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Overrides `site` when set
pub const SITE_ENV: &str = "INTAKE_SITE";
/// Overrides `start_route` when set
pub const START_ROUTE_ENV: &str = "INTAKE_START_ROUTE";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// Brand to run as
    pub site: Option<Site>,
    /// Route opened on startup, e.g. `/apply`
    pub start_route: Option<String>,
    /// Simulated submission round-trip
    pub submit_delay_ms: Option<u64>,
    /// Make every submission fail
    pub simulate_failure: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ai", "30under30", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let config: TuiConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config in {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Apply `INTAKE_SITE` and `INTAKE_START_ROUTE` from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(SITE_ENV) {
            match Site::parse(&value) {
                Some(site) => self.site = Some(site),
                None => tracing::warn!("Ignoring unknown {SITE_ENV} value {value:?}"),
            }
        }
        if let Some(route) = lookup(START_ROUTE_ENV).filter(|r| !r.trim().is_empty()) {
            self.start_route = Some(route);
        }
        self
    }

    pub fn site(&self) -> Site {
        self.site.unwrap_or_default()
    }

    pub fn start_route(&self) -> &str {
        self.start_route.as_deref().unwrap_or("/")
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::intake::DEFAULT_DELAY)
    }

    /// Intake service described by this configuration
    pub fn intake(&self) -> SimulatedIntake {
        let intake = SimulatedIntake::new(self.submit_delay());
        if self.simulate_failure.unwrap_or(false) {
            intake.failing("The application service is unavailable")
        } else {
            intake
        }
    }
}
