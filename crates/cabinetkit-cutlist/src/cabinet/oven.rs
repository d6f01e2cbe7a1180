//! Oven housings
//!
//! A fixed-size cavity for a built-in oven above a single drawer. The
//! cavity takes the full depth, so a fitted back is impossible and is
//! refused when the cabinet is built.

use super::{CabinetSpec, DrawerSystem, ValidationIssue};
use crate::corpus;
use crate::drawer_box::{build_drawer_box, DrawerBoxRequest};
use crate::error::{CutlistError, CutlistResult};
use crate::panel::{EdgeBanding, Panel};
use cabinetkit_settings::{ConstructionSettings, MaterialSet};

const WIDTH_TOLERANCE: f64 = 1e-9;

pub(crate) fn check_construction(spec: &CabinetSpec) -> CutlistResult<()> {
    if spec.options.has_fitted_back() {
        return Err(CutlistError::ConstructionConflict {
            id: spec.id.clone(),
            reason: "oven cabinet cannot be inset or rabbet back".to_string(),
        });
    }
    Ok(())
}

/// Height left for the drawer under the oven cavity.
pub(crate) fn drawer_height(spec: &CabinetSpec, settings: &ConstructionSettings) -> f64 {
    let gola = if spec.options.hidden_handles {
        settings.reveals.gola_profile_height
    } else {
        0.0
    };
    spec.height - gola - settings.oven.cavity_height
}

pub(crate) fn build(
    spec: &CabinetSpec,
    system: DrawerSystem,
    slider_length: Option<f64>,
    rail_height: Option<f64>,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> Vec<Panel> {
    let mut panels = corpus::base_panels(spec, settings, materials);
    let internal_width = corpus::internal_width(spec, materials);

    let request = DrawerBoxRequest {
        cabinet_id: &spec.id,
        index: 1,
        face_height: drawer_height(spec, settings) - settings.oven.face_height_clearance,
        face_width: spec.width - 2.0 * settings.reveals.side_gap,
        internal_width,
        internal_depth: spec.depth,
        system,
        slider_length,
        rail_height,
    };
    panels.extend(build_drawer_box(&request, settings, materials));

    // The oven stands on this shelf; it runs the full depth
    panels.push(
        Panel::new(&spec.id, "Oven Shelf", internal_width, spec.depth, &materials.corpus)
            .with_banding(EdgeBanding::FRONT),
    );

    panels
}

pub(crate) fn issues(spec: &CabinetSpec, settings: &ConstructionSettings) -> Vec<ValidationIssue> {
    let oven = &settings.oven;
    let mut issues = Vec::new();

    if (spec.width - oven.required_width).abs() > WIDTH_TOLERANCE {
        issues.push(ValidationIssue::new(
            "width",
            format!("oven cabinet must be {} wide, got {}", oven.required_width, spec.width),
        ));
    }
    if spec.depth < oven.min_depth {
        issues.push(ValidationIssue::new(
            "depth",
            format!("oven cabinet must be at least {} deep, got {}", oven.min_depth, spec.depth),
        ));
    }
    let drawer = drawer_height(spec, settings);
    if drawer < oven.min_drawer_height {
        issues.push(ValidationIssue::new(
            "height",
            format!(
                "drawer under the oven must be at least {} high, got {}",
                oven.min_drawer_height, drawer
            ),
        ));
    }

    issues
}
