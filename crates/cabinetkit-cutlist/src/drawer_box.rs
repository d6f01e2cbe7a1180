//! Drawer system resolver
//!
//! Turns a drawer envelope (face size plus the free space inside the
//! carcass) into the panels to cut for one drawer. What gets cut depends on
//! the drawer system: a standard drawer is a full panel box, while metabox
//! and vertex drawers have steel sides and only need a bottom and a back.

use crate::cabinet::DrawerSystem;
use crate::panel::{EdgeBanding, Panel};
use cabinetkit_settings::{ConstructionSettings, MaterialSet};

/// Drawer envelope as the cabinet knows it, before defaults are applied
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerBoxRequest<'a> {
    pub cabinet_id: &'a str,
    /// 1-based position of the drawer in its cabinet
    pub index: u32,
    pub face_height: f64,
    pub face_width: f64,
    pub internal_width: f64,
    pub internal_depth: f64,
    pub system: DrawerSystem,
    pub slider_length: Option<f64>,
    pub rail_height: Option<f64>,
}

impl<'a> DrawerBoxRequest<'a> {
    /// Fills in slider length and rail height from the settings.
    pub fn resolve(&self, settings: &ConstructionSettings) -> DrawerBoxParams<'a> {
        let drawers = &settings.drawers;
        DrawerBoxParams {
            cabinet_id: self.cabinet_id,
            index: self.index,
            face_height: self.face_height,
            face_width: self.face_width,
            internal_width: self.internal_width,
            internal_depth: self.internal_depth,
            system: self.system,
            slider_length: self
                .slider_length
                .unwrap_or(self.internal_depth - drawers.metabox.default_front_setback),
            rail_height: self.rail_height.unwrap_or(drawers.defaults.rail_height),
        }
    }
}

/// Fully resolved drawer parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerBoxParams<'a> {
    pub cabinet_id: &'a str,
    pub index: u32,
    pub face_height: f64,
    pub face_width: f64,
    pub internal_width: f64,
    pub internal_depth: f64,
    pub system: DrawerSystem,
    pub slider_length: f64,
    pub rail_height: f64,
}

/// Panels for one drawer: the face first, then the box parts.
pub fn build_drawer_box(
    request: &DrawerBoxRequest<'_>,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> Vec<Panel> {
    drawer_panels(&request.resolve(settings), settings, materials)
}

/// Panels for one drawer from already-resolved parameters.
pub fn drawer_panels(
    p: &DrawerBoxParams<'_>,
    settings: &ConstructionSettings,
    materials: &MaterialSet,
) -> Vec<Panel> {
    let id = p.cabinet_id;
    let role = |part: &str| format!("Drawer {} {}", p.index, part);
    let drawer = &materials.drawer;
    let mut panels = Vec::with_capacity(4);

    panels.push(
        Panel::new(id, &role("Face"), p.face_height, p.face_width, &materials.front)
            .with_banding(EdgeBanding::ALL),
    );

    match p.system {
        DrawerSystem::Standard => {
            let standard = &settings.drawers.standard;
            let box_width = p.internal_width - standard.side_clearance_total;
            let box_depth = p.internal_depth - standard.bottom_depth_clearance;
            let side_height = p.face_height - standard.side_height_reduction;

            panels.push(Panel::new(id, &role("Bottom"), box_width, box_depth, drawer));
            panels.push(
                Panel::new(id, &role("Side"), side_height, box_depth, drawer)
                    .with_quantity(2)
                    .with_banding(EdgeBanding::new(1, 0, 0, 1)),
            );
            panels.push(
                Panel::new(
                    id,
                    &role("Back"),
                    box_width - 2.0 * drawer.thickness,
                    side_height,
                    drawer,
                )
                .with_banding(EdgeBanding::new(0, 0, 0, 1)),
            );
        }
        DrawerSystem::Metabox => {
            let metabox = &settings.drawers.metabox;
            let width = p.internal_width - metabox.width_clearance;

            panels.push(Panel::new(
                id,
                &role("Bottom"),
                width,
                p.slider_length - metabox.depth_clearance,
                drawer,
            ));
            panels.push(
                Panel::new(id, &role("Back"), width, back_height(p, settings), drawer)
                    .with_banding(EdgeBanding::new(0, 0, 0, 1)),
            );
        }
        DrawerSystem::Vertex => {
            let vertex = &settings.drawers.vertex;

            panels.push(Panel::new(
                id,
                &role("Bottom"),
                p.internal_width - vertex.width_clearance,
                p.slider_length - vertex.depth_shorten,
                drawer,
            ));
            panels.push(
                Panel::new(
                    id,
                    &role("Back"),
                    p.internal_width - vertex.back_width_clearance,
                    back_height(p, settings),
                    drawer,
                )
                .with_banding(EdgeBanding::new(0, 0, 0, 1)),
            );
        }
    }

    panels
}

fn back_height(p: &DrawerBoxParams<'_>, settings: &ConstructionSettings) -> f64 {
    settings.drawers.back_height_for_rail(p.rail_height)
}
