//! Command implementations for the hrdesk CLI

pub mod dashboard;
pub mod employee;
pub mod list;
pub mod login;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use hrdesk_core::login::Role;
use hrdesk_core::screens::ScreenOptions;
use hrdesk_core::{provider_for, FixtureProvider, HrConfig, ViewMode};
use serde::Serialize;
use tracing::debug;

pub use dashboard::run_dashboard;
pub use employee::run_employee;
pub use list::{run_attachments, run_attendance, run_employees};
pub use login::run_login;
pub use routes::run_routes;

/// Loaded config plus the fixture provider every screen reads from
pub struct Context {
    pub config: HrConfig,
    pub fixtures: Arc<dyn FixtureProvider>,
}

impl Context {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = HrConfig::load(config_path).context("Failed to load hrdesk config")?;
        let fixtures = provider_for(config.fixtures.path.as_deref())
            .context("Failed to load fixtures")?;
        debug!(
            employees = fixtures.employees().len(),
            custom = config.fixtures.path.is_some(),
            "context ready"
        );
        Ok(Self { config, fixtures })
    }

    pub fn screen_options(&self) -> ScreenOptions {
        ScreenOptions::from_config(&self.config)
    }

    /// Screen options with an optional `--view` override applied
    pub fn screen_options_with(&self, view: Option<ViewArg>) -> ScreenOptions {
        let mut opts = self.screen_options();
        if let Some(view) = view {
            opts.view_mode = view.into();
        }
        opts
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewArg {
    Grid,
    Table,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Grid => ViewMode::Grid,
            ViewArg::Table => ViewMode::Table,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArg {
    Admin,
    Manager,
    Employee,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::Admin,
            RoleArg::Manager => Role::Manager,
            RoleArg::Employee => Role::Employee,
        }
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
