//! Door cabinets, base and wall units

use super::{CabinetSpec, ValidationIssue};
use crate::corpus;
use crate::panel::{EdgeBanding, HingeLocation, Panel};
use cabinetkit_settings::{ConstructionSettings, MaterialSet};

pub(crate) fn build(
    spec: &CabinetSpec,
    doors: u32,
    shelves: u32,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> Vec<Panel> {
    let mut panels = corpus::base_panels(spec, settings, materials);

    if doors > 0 {
        let (height, width) = door_size(spec, doors, settings, materials);
        let hinges = HingeLocation::for_door(height, width);
        for _ in 0..doors {
            panels.push(
                Panel::new(&spec.id, "Door", height, width, &materials.front)
                    .with_banding(EdgeBanding::ALL)
                    .with_hinges(hinges),
            );
        }
    }

    if shelves > 0 {
        panels.push(
            Panel::new(
                &spec.id,
                "Shelf",
                corpus::internal_width(spec, materials),
                spec.depth - settings.shelves.depth_setback,
                &materials.corpus,
            )
            .with_quantity(shelves)
            .with_banding(EdgeBanding::FRONT),
        );
    }

    panels
}

/// Height and width of each door leaf.
fn door_size(
    spec: &CabinetSpec,
    doors: u32,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> (f64, f64) {
    let reveals = &settings.reveals;
    let mut total_reveal = 2.0 * reveals.side_gap;
    if doors > 1 {
        total_reveal += reveals.center_gap();
    }
    let width = (spec.width - total_reveal) / f64::from(doors);

    let baseline_gap = 2.0 * reveals.vertical_gap;
    let mut height = spec.height - baseline_gap;
    if spec.options.hidden_handles {
        if spec.upper {
            // Handleless wall doors hang below the carcass to form the grip
            height += materials.corpus.thickness + reveals.upper_handleless_overhang_extra;
        } else {
            height -= reveals.hidden_handle_reveal - baseline_gap;
        }
    }

    (height, width)
}

pub(crate) fn issues(doors: u32) -> Vec<ValidationIssue> {
    if doors == 0 {
        vec![ValidationIssue::new("doors", "a door cabinet needs at least one door")]
    } else {
        Vec::new()
    }
}
