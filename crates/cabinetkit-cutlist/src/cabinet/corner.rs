//! Blind corner cabinets
//!
//! The front is split into a fixed leg that covers the blind part of the
//! corner and a single door over the rest.

use super::{CabinetSpec, ValidationIssue};
use crate::corpus;
use crate::panel::{EdgeBanding, HingeLocation, Panel};
use cabinetkit_settings::{ConstructionSettings, MaterialSet};
use tracing::warn;

pub(crate) fn build(
    spec: &CabinetSpec,
    fixed_side: f64,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> Vec<Panel> {
    let mut panels = corpus::base_panels(spec, settings, materials);
    let reveals = &settings.reveals;

    let door_width = spec.width - fixed_side - 2.0 * reveals.side_gap;
    let door_height = if spec.options.hidden_handles {
        if spec.upper {
            spec.height - 2.0 * reveals.vertical_gap
                + materials.corpus.thickness
                + reveals.upper_handleless_overhang_extra
        } else {
            spec.height - reveals.hidden_handle_reveal
        }
    } else {
        spec.height - 2.0 * reveals.vertical_gap
    };

    if door_width > 0.0 {
        panels.push(
            Panel::new(&spec.id, "Door", door_height, door_width, &materials.front)
                .with_banding(EdgeBanding::ALL)
                .with_hinges(HingeLocation::for_door(door_height, door_width)),
        );
    } else {
        warn!(
            cabinet = %spec.id,
            door_width,
            "fixed side leaves no room for a door, door omitted"
        );
    }

    panels.push(
        Panel::new(&spec.id, "Fixed side", door_height, fixed_side, &materials.front)
            .with_banding(EdgeBanding::ALL),
    );

    panels
}

pub(crate) fn issues(spec: &CabinetSpec, fixed_side: f64) -> Vec<ValidationIssue> {
    if fixed_side > 0.0 && fixed_side < spec.width {
        Vec::new()
    } else {
        vec![ValidationIssue::new(
            "fixedSide",
            format!(
                "fixed side must be between 0 and the cabinet width {}, got {}",
                spec.width, fixed_side
            ),
        )]
    }
}
