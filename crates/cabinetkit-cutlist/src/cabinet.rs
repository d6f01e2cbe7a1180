//! Cabinets
//!
//! A [`Cabinet`] is a [`CabinetSpec`] that passed the construction checks.
//! Panel generation is a two-stage pipeline: the corpus generator builds the
//! carcass, then the generator for the cabinet kind appends fronts, shelves
//! and drawer boxes. Generation never consults [`Cabinet::validate`]; an
//! invalid cabinet still produces a cut list and callers decide whether to
//! accept it.

mod corner;
mod door;
mod drawer;
mod oven;
pub mod types;

pub use types::{CabinetKind, CabinetOptions, CabinetSpec, DrawerSystem, Placement, Wall};

use crate::error::{CutlistError, CutlistResult};
use crate::panel::Panel;
use cabinetkit_settings::{ConstructionSettings, MaterialSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An advisory problem with a cabinet specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Wire name of the offending field
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A buildable cabinet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cabinet {
    spec: CabinetSpec,
}

impl Cabinet {
    /// Accepts a specification, refusing option combinations that cannot be
    /// built at all.
    pub fn new(spec: CabinetSpec) -> CutlistResult<Self> {
        let dimensions = [spec.width, spec.height, spec.depth];
        if dimensions.iter().any(|d| !d.is_finite()) {
            return Err(CutlistError::InvalidParameters(format!(
                "cabinet '{}' has non-finite dimensions {}x{}x{}",
                spec.id, spec.width, spec.height, spec.depth
            )));
        }
        if let CabinetKind::Oven { .. } = spec.kind {
            oven::check_construction(&spec)?;
        }
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &CabinetSpec {
        &self.spec
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    /// The cut list for this cabinet. Same inputs, same panels, same order.
    pub fn panels(&self, settings: &ConstructionSettings, materials: &MaterialSet) -> Vec<Panel> {
        let spec = &self.spec;
        let panels = match &spec.kind {
            CabinetKind::Door { doors, shelves } => {
                door::build(spec, *doors, *shelves, settings, materials)
            }
            CabinetKind::Drawer {
                drawers,
                heights,
                system,
                slider_length,
                rail_height,
            } => {
                let layout = drawer::DrawerLayout {
                    drawers: *drawers,
                    heights,
                    system: *system,
                    slider_length: *slider_length,
                    rail_height: *rail_height,
                };
                drawer::build(spec, &layout, settings, materials)
            }
            CabinetKind::Corner { fixed_side } => {
                corner::build(spec, *fixed_side, settings, materials)
            }
            CabinetKind::Oven {
                system,
                slider_length,
                rail_height,
            } => oven::build(
                spec,
                *system,
                *slider_length,
                *rail_height,
                settings,
                materials,
            ),
        };

        debug!(
            cabinet = %spec.id,
            kind = spec.kind.name(),
            panels = panels.len(),
            "generated cabinet panels"
        );
        panels
    }

    /// Everything wrong with the cabinet for its kind. Empty when valid.
    pub fn validation_issues(&self, settings: &ConstructionSettings) -> Vec<ValidationIssue> {
        let spec = &self.spec;
        match &spec.kind {
            CabinetKind::Door { doors, .. } => door::issues(*doors),
            CabinetKind::Drawer {
                drawers, heights, ..
            } => drawer::issues(*drawers, heights),
            CabinetKind::Corner { fixed_side } => corner::issues(spec, *fixed_side),
            CabinetKind::Oven { .. } => oven::issues(spec, settings),
        }
    }

    pub fn validate(&self, settings: &ConstructionSettings) -> bool {
        self.validation_issues(settings).is_empty()
    }

    /// Drawers that need a pair of slides. An oven housing has one.
    pub fn drawer_count(&self) -> u32 {
        match &self.spec.kind {
            CabinetKind::Drawer { drawers, .. } => *drawers,
            CabinetKind::Oven { .. } => 1,
            CabinetKind::Door { .. } | CabinetKind::Corner { .. } => 0,
        }
    }
}

impl TryFrom<CabinetSpec> for Cabinet {
    type Error = CutlistError;

    fn try_from(spec: CabinetSpec) -> CutlistResult<Self> {
        Self::new(spec)
    }
}

impl<'de> Deserialize<'de> for Cabinet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let spec = CabinetSpec::deserialize(deserializer)?;
        Cabinet::new(spec).map_err(serde::de::Error::custom)
    }
}

/// Panels for a whole layout, cabinet by cabinet.
pub fn cut_list(
    cabinets: &[Cabinet],
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> Vec<Panel> {
    cabinets
        .iter()
        .flat_map(|cabinet| cabinet.panels(settings, materials))
        .collect()
}
