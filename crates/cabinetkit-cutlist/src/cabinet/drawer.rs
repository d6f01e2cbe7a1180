//! Drawer cabinets

use super::{CabinetSpec, DrawerSystem, ValidationIssue};
use crate::corpus;
use crate::drawer_box::{build_drawer_box, DrawerBoxRequest};
use crate::panel::Panel;
use cabinetkit_settings::{ConstructionSettings, MaterialSet};

const PERCENT_TOLERANCE: f64 = 1e-9;

/// Per-cabinet drawer configuration
pub(crate) struct DrawerLayout<'a> {
    pub drawers: u32,
    pub heights: &'a [f64],
    pub system: DrawerSystem,
    pub slider_length: Option<f64>,
    pub rail_height: Option<f64>,
}

pub(crate) fn build(
    spec: &CabinetSpec,
    layout: &DrawerLayout<'_>,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> Vec<Panel> {
    let mut panels = corpus::base_panels(spec, settings, materials);
    let reveals = &settings.reveals;
    let hidden = spec.options.hidden_handles;

    let usable_height = if hidden {
        spec.height
    } else {
        spec.height - (f64::from(layout.drawers) + 1.0) * reveals.vertical_gap
    };
    let face_width = spec.width - 2.0 * reveals.side_gap;
    let internal_width = corpus::internal_width(spec, materials);
    let internal_depth = corpus::internal_depth(spec, settings, materials);

    // Fewer heights than drawers fails validation; only drawers with a height are sized
    for (i, percent) in layout.heights.iter().take(layout.drawers as usize).enumerate() {
        let mut face_height = (percent / 100.0 * usable_height).round();
        if hidden {
            face_height -= reveals.hidden_handle_reveal;
        }

        let request = DrawerBoxRequest {
            cabinet_id: &spec.id,
            index: i as u32 + 1,
            face_height,
            face_width,
            internal_width,
            internal_depth,
            system: layout.system,
            slider_length: layout.slider_length,
            rail_height: layout.rail_height,
        };
        panels.extend(build_drawer_box(&request, settings, materials));
    }

    panels
}

pub(crate) fn issues(drawers: u32, heights: &[f64]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if heights.len() != drawers as usize {
        issues.push(ValidationIssue::new(
            "heights",
            format!("{} drawer heights given for {} drawers", heights.len(), drawers),
        ));
    }

    let total: f64 = heights.iter().sum();
    if (total - 100.0).abs() > PERCENT_TOLERANCE {
        issues.push(ValidationIssue::new(
            "heights",
            format!("drawer heights must add up to 100%, got {total}%"),
        ));
    }

    issues
}
