//! Material yield and cost estimate
//!
//! Panels are grouped by material name, expanded by quantity and packed onto
//! stock boards. The summary prices the boards, the banded edges and the
//! saw path, and counts the hardware a layout needs.

use crate::cabinet::{cut_list, Cabinet};
use crate::packing::{pack_boards, Rect};
use crate::panel::Panel;
use cabinetkit_settings::{ConstructionSettings, MaterialSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

const MM_PER_M: f64 = 1000.0;

/// Connections per cabinet
const CONNECTIONS_PER_CABINET: u32 = 4;
/// Extra connections for a split top
const SPLIT_TOP_CONNECTIONS: u32 = 2;

/// Board usage for one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDetail {
    pub material: String,
    pub boards: usize,
    pub cost: f64,
}

/// Hardware bill of materials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bom {
    pub screws: u32,
    pub dowels: u32,
    pub hinges: u32,
    /// Slide count, two per drawer
    pub slides: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub materials: Vec<MaterialDetail>,
    /// Banded edge length in metres
    pub edge_band_length: f64,
    /// Saw path in metres
    pub cut_length: f64,
    pub edge_band_cost: f64,
    pub cut_cost: f64,
    pub materials_cost: f64,
    pub total: f64,
    pub bom: Bom,
}

/// Unit rectangles per material, groups in order of first appearance.
fn group_by_material(panels: &[Panel]) -> Vec<(&str, Vec<Rect>)> {
    let mut groups: Vec<(&str, Vec<Rect>)> = Vec::new();
    for panel in panels {
        let index = match groups.iter().position(|(name, _)| *name == panel.material) {
            Some(index) => index,
            None => {
                groups.push((panel.material.as_str(), Vec::new()));
                groups.len() - 1
            }
        };
        let piece = Rect::new(panel.width, panel.length);
        groups[index]
            .1
            .extend(std::iter::repeat_n(piece, panel.quantity as usize));
    }
    groups
}

/// Estimate for a bare panel list. Only hinges can be counted from panels,
/// the rest of the BOM is left at zero.
pub fn summarize_panels(panels: &[Panel], materials: &MaterialSet) -> CostSummary {
    let stock = Rect::new(materials.board.length, materials.board.width);
    let board_area = materials.board.area_m2();

    let details: Vec<MaterialDetail> = group_by_material(panels)
        .into_iter()
        .map(|(name, pieces)| {
            let boards = pack_boards(&pieces, stock);
            debug!(
                material = name,
                pieces = pieces.len(),
                boards,
                "packed material group"
            );
            MaterialDetail {
                material: name.to_string(),
                boards,
                cost: boards as f64 * board_area * materials.cost_per_m2(name),
            }
        })
        .collect();

    let edge_band_length = panels.iter().map(Panel::edge_band_length).sum::<f64>() / MM_PER_M;
    let cut_length = panels.iter().map(Panel::cut_length).sum::<f64>() / MM_PER_M;
    let edge_band_cost = edge_band_length * materials.edge_banding_cost_per_meter;
    let cut_cost = cut_length * materials.cut_cost_per_meter;
    let materials_cost = details.iter().map(|detail| detail.cost).sum::<f64>();

    // One hinge code per door entry
    let hinges = panels.iter().map(Panel::hinges_per_piece).sum();

    CostSummary {
        materials: details,
        edge_band_length,
        cut_length,
        edge_band_cost,
        cut_cost,
        materials_cost,
        total: materials_cost + edge_band_cost + cut_cost,
        bom: Bom {
            hinges,
            ..Bom::default()
        },
    }
}

/// Fastener and slide counts for a set of cabinets.
pub fn cabinet_hardware(cabinets: &[Cabinet]) -> Bom {
    let connections: u32 = cabinets
        .iter()
        .map(|cabinet| {
            if cabinet.spec().options.full {
                CONNECTIONS_PER_CABINET
            } else {
                CONNECTIONS_PER_CABINET + SPLIT_TOP_CONNECTIONS
            }
        })
        .sum();
    let drawers: u32 = cabinets.iter().map(Cabinet::drawer_count).sum();

    Bom {
        screws: connections * 2,
        dowels: connections * 2,
        hinges: 0,
        slides: drawers * 2,
    }
}

/// Full estimate for a layout.
pub fn summarize(
    cabinets: &[Cabinet],
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> CostSummary {
    let panels = cut_list(cabinets, settings, materials);
    let mut summary = summarize_panels(&panels, materials);
    let hardware = cabinet_hardware(cabinets);
    summary.bom = Bom {
        hinges: summary.bom.hinges,
        ..hardware
    };

    debug!(
        cabinets = cabinets.len(),
        panels = panels.len(),
        total = summary.total,
        "summarized layout"
    );
    summary
}
