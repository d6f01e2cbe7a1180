//! # CabinetKit Cut List
//!
//! Turns cabinet specifications into a cut list and a board yield estimate.
//!
//! ## Pipeline
//!
//! - **Corpus**: sides, top or bottom, back panel and back joinery
//! - **Cabinet kinds**: door, drawer, blind corner and oven housing fronts,
//!   shelves and drawers on top of the corpus
//! - **Drawer boxes**: standard, metabox and vertex drawer geometry
//! - **Estimate**: guillotine packing per material, banding and cutting
//!   lengths, hardware counts
//!
//! Settings and materials come from `cabinetkit-settings` and are passed by
//! reference to every step.

pub mod cabinet;
pub mod corpus;
pub mod drawer_box;
pub mod error;
pub mod estimate;
pub mod packing;
pub mod panel;

pub use cabinet::{
    cut_list, Cabinet, CabinetKind, CabinetOptions, CabinetSpec, DrawerSystem, Placement,
    ValidationIssue, Wall,
};
pub use corpus::BackFitting;
pub use drawer_box::{build_drawer_box, DrawerBoxParams, DrawerBoxRequest};
pub use error::{CutlistError, CutlistResult};
pub use estimate::{summarize, summarize_panels, Bom, CostSummary, MaterialDetail};
pub use packing::{pack_boards, Rect};
pub use panel::{Dado, EdgeBanding, HingeLocation, Panel, Rabbet, RabbetEdge};

use cabinetkit_settings::{ConstructionSettings, MaterialSet};

/// Checks the tables a cut list is computed from.
pub fn check_inputs(settings: &ConstructionSettings, materials: &MaterialSet) -> CutlistResult<()> {
    settings.validate()?;
    materials.validate()?;
    Ok(())
}
