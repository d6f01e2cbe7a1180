//! Corpus generator
//!
//! Builds the carcass every cabinet kind shares: two sides, either full
//! top and bottom panels or a bottom plus two top rails, and the back. The
//! back-fitting strategy decides both the joinery on the carcass panels and
//! the size of the back itself.

use crate::cabinet::CabinetSpec;
use crate::panel::{Dado, EdgeBanding, Panel, Rabbet, RabbetEdge};
use cabinetkit_settings::{ConstructionSettings, MaterialSet};

/// How the back panel is fixed to the carcass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackFitting {
    /// Back slides into a dado set in from the rear edge
    Inset,
    /// Back sits in a rabbet along the rear edge
    Rabbet,
    /// Back is cut to the inside dimensions and fixed flush
    Flush,
}

impl BackFitting {
    /// Resolves the strategy for a cabinet. An inset back wins when both
    /// fitted backs are requested.
    pub fn for_spec(spec: &CabinetSpec) -> Self {
        if spec.options.inset_back {
            Self::Inset
        } else if spec.options.rabbet_back {
            Self::Rabbet
        } else {
            Self::Flush
        }
    }

    /// How much of the outside depth the back takes up, measured from the
    /// rear edge of the sides.
    pub fn depth_reduction(&self, settings: &ConstructionSettings, materials: &MaterialSet) -> f64 {
        match self {
            Self::Inset => settings.backs.inset_offset + materials.back.thickness,
            Self::Rabbet => settings.backs.rabbet_depth,
            Self::Flush => materials.back.thickness,
        }
    }
}

/// Joinery cut into carcass panels for one back-fitting strategy
struct Joinery {
    fitting: BackFitting,
    dado: Dado,
    rabbet: Rabbet,
}

impl Joinery {
    fn new(fitting: BackFitting, settings: &ConstructionSettings, materials: &MaterialSet) -> Self {
        let backs = &settings.backs;
        Self {
            fitting,
            dado: Dado {
                offset: backs.inset_offset,
                depth: backs.inset_dado_depth,
                width: materials.back.thickness + backs.inset_dado_clearance,
            },
            rabbet: Rabbet {
                edge: RabbetEdge::Back,
                depth: backs.rabbet_depth,
                width: backs.rabbet_width,
            },
        }
    }

    /// Sides, bottom and full tops take a dado or a rabbet.
    fn apply(&self, panel: &mut Panel) {
        match self.fitting {
            BackFitting::Inset => panel.dados.push(self.dado),
            BackFitting::Rabbet => panel.rabbets.push(self.rabbet),
            BackFitting::Flush => {}
        }
    }

    /// The rear top rail only meets a rabbeted back; an inset back stops
    /// below it.
    fn apply_rear_rail(&self, panel: &mut Panel) {
        if self.fitting == BackFitting::Rabbet {
            panel.rabbets.push(self.rabbet);
        }
    }
}

/// Width of the carcass between the sides.
pub fn internal_width(spec: &CabinetSpec, materials: &MaterialSet) -> f64 {
    spec.width - 2.0 * materials.corpus.thickness
}

/// Usable depth in front of the back panel.
pub fn internal_depth(
    spec: &CabinetSpec,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> f64 {
    spec.depth - BackFitting::for_spec(spec).depth_reduction(settings, materials)
}

/// Carcass panels for any cabinet, in cut-list order: sides, top/bottom
/// (or bottom and the two top rails), back.
pub fn base_panels(
    spec: &CabinetSpec,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> Vec<Panel> {
    let corpus = &materials.corpus;
    let t = corpus.thickness;
    let id = spec.id.as_str();
    let inner_width = internal_width(spec, materials);
    let fitting = BackFitting::for_spec(spec);
    let joinery = Joinery::new(fitting, settings, materials);
    let mut panels = Vec::with_capacity(5);

    let mut side = Panel::new(id, "Side panel", spec.height, spec.depth, corpus)
        .with_quantity(2)
        .with_banding(EdgeBanding::new(1, 0, 1, 1));
    joinery.apply(&mut side);
    panels.push(side);

    if spec.options.full {
        let mut top_bottom = Panel::new(id, "Top/Bottom panel", inner_width, spec.depth, corpus)
            .with_quantity(2)
            .with_banding(EdgeBanding::FRONT);
        joinery.apply(&mut top_bottom);
        panels.push(top_bottom);
    } else {
        let mut bottom = Panel::new(id, "Bottom panel", inner_width, spec.depth, corpus)
            .with_banding(EdgeBanding::FRONT);
        joinery.apply(&mut bottom);
        panels.push(bottom);

        let rail_depth = settings.construction.split_top_rail_depth;
        let mut rear = Panel::new(id, "Top panel plank rear", inner_width, rail_depth, corpus)
            .with_banding(EdgeBanding::FRONT);
        joinery.apply_rear_rail(&mut rear);
        panels.push(rear);

        // Faces the room on both long edges
        panels.push(
            Panel::new(id, "Top panel plank front", inner_width, rail_depth, corpus)
                .with_banding(EdgeBanding::new(1, 1, 0, 0)),
        );
    }

    let (back_length, back_width) = back_size(spec, fitting, settings, t);
    panels.push(Panel::new(id, "Back panel", back_length, back_width, &materials.back));

    panels
}

/// Back panel (length along the width of the cabinet, width along its
/// height).
fn back_size(
    spec: &CabinetSpec,
    fitting: BackFitting,
    settings: &ConstructionSettings,
    t: f64,
) -> (f64, f64) {
    let backs = &settings.backs;
    let flush_length = spec.width - 2.0 * t;
    let flush_width = spec.height - 2.0 * t;

    match fitting {
        BackFitting::Inset => {
            // The width oversize is the full-corpus one whatever the top style
            let length = flush_length + backs.inset_oversize_full;
            let width = if spec.options.full {
                flush_width + backs.inset_oversize_full
            } else {
                spec.height - t + backs.inset_oversize_partial
            };
            (length, width)
        }
        BackFitting::Rabbet => {
            let engage = backs.rabbet_width - backs.rabbet_clearance;
            (flush_length + 2.0 * engage, flush_width + 2.0 * engage)
        }
        BackFitting::Flush => (flush_length, flush_width),
    }
}
