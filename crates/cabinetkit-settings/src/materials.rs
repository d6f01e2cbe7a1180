//! Board materials and pricing
//!
//! A cabinet is cut from four board materials (corpus, front, back and
//! drawer stock). Each has a thickness that feeds panel geometry and a
//! price per square metre that feeds the yield estimate. Edge banding and
//! cutting are priced per running metre, and all boards share one stock
//! sheet size.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};

/// A sheet material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Name used to group panels for packing and pricing
    pub name: String,
    /// Thickness in mm
    pub thickness: f64,
    /// Cost per square metre of raw board
    #[serde(default)]
    pub cost: f64,
}

impl Material {
    pub fn new(name: impl Into<String>, thickness: f64, cost: f64) -> Self {
        Self {
            name: name.into(),
            thickness,
            cost,
        }
    }
}

/// Raw stock sheet dimensions in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockBoard {
    pub length: f64,
    pub width: f64,
}

impl StockBoard {
    pub fn area_m2(&self) -> f64 {
        self.length * self.width / 1_000_000.0
    }
}

impl Default for StockBoard {
    fn default() -> Self {
        Self {
            length: 2800.0,
            width: 2070.0,
        }
    }
}

/// The materials a layout is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialSet {
    pub corpus: Material,
    pub front: Material,
    pub back: Material,
    pub drawer: Material,
    /// Cost per metre of edge banding
    pub edge_banding_cost_per_meter: f64,
    /// Cost per metre of cutting
    pub cut_cost_per_meter: f64,
    pub board: StockBoard,
}

impl MaterialSet {
    /// Price per square metre for a material name, 0 when the name is not
    /// one of this set's materials.
    pub fn cost_per_m2(&self, name: &str) -> f64 {
        [&self.corpus, &self.front, &self.back, &self.drawer]
            .into_iter()
            .find(|material| material.name == name)
            .map(|material| material.cost)
            .unwrap_or(0.0)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        for (key, material) in [
            ("corpus", &self.corpus),
            ("front", &self.front),
            ("back", &self.back),
            ("drawer", &self.drawer),
        ] {
            if material.name.trim().is_empty() {
                return Err(SettingsError::invalid(key, "material name must not be empty"));
            }
            if material.thickness.is_nan() || material.thickness <= 0.0 {
                return Err(SettingsError::invalid(key, "thickness must be > 0"));
            }
            if material.cost.is_nan() || material.cost < 0.0 {
                return Err(SettingsError::invalid(key, "cost must not be negative"));
            }
        }

        if self.edge_banding_cost_per_meter < 0.0 || self.cut_cost_per_meter < 0.0 {
            return Err(SettingsError::invalid(
                "rates",
                "per-metre rates must not be negative",
            ));
        }

        if self.board.length <= 0.0 || self.board.width <= 0.0 {
            return Err(SettingsError::invalid("board", "stock dimensions must be > 0"));
        }

        Ok(())
    }
}

impl Default for MaterialSet {
    fn default() -> Self {
        Self {
            corpus: Material::new("Corpus", 18.0, 0.0),
            front: Material::new("Front", 19.0, 0.0),
            back: Material::new("Back", 3.0, 0.0),
            drawer: Material::new("Drawer", 16.0, 0.0),
            edge_banding_cost_per_meter: 0.0,
            cut_cost_per_meter: 0.0,
            board: StockBoard::default(),
        }
    }
}
