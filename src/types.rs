//! Job file and report types for the command-line front end

use cabinetkit_cutlist::{CabinetSpec, CostSummary, Panel, ValidationIssue};
use cabinetkit_settings::{ConstructionSettings, MaterialSet};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A layout to estimate
///
/// Missing sections fall back to the built-in tables. `settingsFile` points
/// at a JSON or TOML settings file, resolved relative to the job file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ConstructionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<MaterialSet>,
    pub cabinets: Vec<CabinetSpec>,
}

/// An advisory issue attributed to a cabinet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetIssue {
    pub cabinet: String,
    #[serde(flatten)]
    pub issue: ValidationIssue,
}

/// Everything the front end prints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOutput {
    pub panels: Vec<Panel>,
    pub summary: CostSummary,
    pub issues: Vec<CabinetIssue>,
}
