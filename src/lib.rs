//! # CabinetKit
//!
//! Cut lists and material estimates for frameless kitchen cabinets.
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-settings** - Construction tables, materials, stock boards
//! 2. **cabinetkit-cutlist** - Panel generation, drawer boxes, yield estimate
//! 3. **cabinetkit** - Batch front end that reads a job file and prints JSON

pub mod types;

pub use cabinetkit_cutlist::{
    cut_list, summarize, Cabinet, CabinetSpec, CostSummary, CutlistError, Panel,
};
pub use cabinetkit_settings::{ConstructionSettings, MaterialSet, SettingsError};
pub use types::{CabinetIssue, Job, JobOutput};

use anyhow::{bail, Context};
use std::path::Path;
use tracing::{debug, info, warn};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so the JSON report on stdout stays clean. `RUST_LOG`
/// overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(())
}

/// Reads a job file.
pub fn load_job(path: &Path) -> anyhow::Result<Job> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file {}", path.display()))?;
    let job: Job = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse job file {}", path.display()))?;
    debug!(path = %path.display(), cabinets = job.cabinets.len(), "loaded job");
    Ok(job)
}

/// Settings for a job, relative `settingsFile` paths resolved against
/// `base_dir`.
pub fn resolve_settings(job: &Job, base_dir: &Path) -> anyhow::Result<ConstructionSettings> {
    match (&job.settings, &job.settings_file) {
        (Some(_), Some(_)) => bail!("A job may give settings or settingsFile, not both"),
        (Some(settings), None) => Ok(settings.clone()),
        (None, Some(file)) => {
            let path = base_dir.join(file);
            ConstructionSettings::load_from_file(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))
        }
        (None, None) => Ok(ConstructionSettings::default()),
    }
}

/// Builds the cut list and estimate for a job.
pub fn run_job(job: &Job, base_dir: &Path) -> anyhow::Result<JobOutput> {
    let settings = resolve_settings(job, base_dir)?;
    let materials = job.materials.clone().unwrap_or_default();
    cabinetkit_cutlist::check_inputs(&settings, &materials)
        .context("Invalid construction settings or materials")?;

    let cabinets = job
        .cabinets
        .iter()
        .cloned()
        .map(|spec| {
            let id = spec.id.clone();
            Cabinet::new(spec).with_context(|| format!("Cannot build cabinet '{id}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let issues: Vec<CabinetIssue> = cabinets
        .iter()
        .flat_map(|cabinet| {
            cabinet
                .validation_issues(&settings)
                .into_iter()
                .map(|issue| CabinetIssue {
                    cabinet: cabinet.id().to_string(),
                    issue,
                })
        })
        .collect();
    for issue in &issues {
        warn!(cabinet = %issue.cabinet, "{}", issue.issue);
    }

    let panels = cut_list(&cabinets, &settings, &materials);
    let summary = summarize(&cabinets, &settings, &materials);
    info!(
        cabinets = cabinets.len(),
        panels = panels.len(),
        total = summary.total,
        "estimate complete"
    );

    Ok(JobOutput {
        panels,
        summary,
        issues,
    })
}
