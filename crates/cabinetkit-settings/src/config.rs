//! Construction settings for cabinet panel generation
//!
//! Every clearance, reveal and offset the generators use lives here. The
//! tables are organised into sections:
//! - Reveals (gaps around doors and drawer faces, handleless profiles)
//! - Backs (inset dado and rabbet fitting dimensions)
//! - Construction (split top rails)
//! - Shelves
//! - Drawers (slider catalogue, rail heights, per-system clearances)
//! - Oven housing constraints
//!
//! Settings are read-only once loaded. Generators receive them by reference.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const RAIL_MATCH_TOLERANCE: f64 = 1e-9;

/// Gaps around fronts and handleless profile dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealSettings {
    /// Gap on each side of doors and drawer faces
    pub side_gap: f64,
    /// Gap above and below faces (also between stacked drawers)
    pub vertical_gap: f64,
    /// Gap between doors that meet in the centre; defaults to 2x vertical gap
    pub center_gap: Option<f64>,
    /// Handleless pull reveal for base cabinets
    pub hidden_handle_reveal: f64,
    /// Extra overhang above corpus thickness for handleless uppers
    pub upper_handleless_overhang_extra: f64,
    /// Profile height used when a gola rail sits above a drawer
    pub gola_profile_height: f64,
}

impl RevealSettings {
    /// Effective gap between doors that meet in the centre.
    pub fn center_gap(&self) -> f64 {
        self.center_gap.unwrap_or(self.vertical_gap * 2.0)
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            side_gap: 2.0,
            vertical_gap: 2.0,
            center_gap: Some(4.0),
            hidden_handle_reveal: 30.0,
            upper_handleless_overhang_extra: 2.0,
            gola_profile_height: 48.2,
        }
    }
}

/// Back panel fitting dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackSettings {
    /// Distance of the inset dado from the rear edge
    pub inset_offset: f64,
    pub inset_dado_depth: f64,
    /// Added to the back material thickness to get the dado width
    pub inset_dado_clearance: f64,
    /// Back oversize when top and bottom are full panels
    pub inset_oversize_full: f64,
    /// Back height oversize for split-top corpora
    pub inset_oversize_partial: f64,
    pub rabbet_width: f64,
    pub rabbet_depth: f64,
    /// Play left between the back edge and the rabbet shoulder
    pub rabbet_clearance: f64,
}

impl Default for BackSettings {
    fn default() -> Self {
        Self {
            inset_offset: 15.0,
            inset_dado_depth: 7.0,
            inset_dado_clearance: 1.0,
            inset_oversize_full: 12.0,
            inset_oversize_partial: 5.0,
            rabbet_width: 9.0,
            rabbet_depth: 4.0,
            rabbet_clearance: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorpusConstructionSettings {
    /// Depth of each of the two rails that replace a full top
    pub split_top_rail_depth: f64,
}

impl Default for CorpusConstructionSettings {
    fn default() -> Self {
        Self {
            split_top_rail_depth: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShelfSettings {
    /// Shelves sit this far behind the front edge of the corpus
    pub depth_setback: f64,
}

impl Default for ShelfSettings {
    fn default() -> Self {
        Self {
            depth_setback: 20.0,
        }
    }
}

/// Maps a slider rail height to the drawer back height it needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailHeightSetting {
    pub rail: f64,
    pub back_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawerDefaults {
    pub rail_height: f64,
}

impl Default for DrawerDefaults {
    fn default() -> Self {
        Self { rail_height: 131.0 }
    }
}

/// Clearances for drawers built from plain panels on side-mounted slides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandardDrawerSettings {
    /// Combined slide clearance of both sides
    pub side_clearance_total: f64,
    pub bottom_depth_clearance: f64,
    /// Drawer sides are this much lower than the face
    pub side_height_reduction: f64,
}

impl Default for StandardDrawerSettings {
    fn default() -> Self {
        Self {
            side_clearance_total: 24.0,
            bottom_depth_clearance: 20.0,
            side_height_reduction: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaboxSettings {
    pub width_clearance: f64,
    pub depth_clearance: f64,
    /// Used to derive a slider length when none is given
    pub default_front_setback: f64,
}

impl Default for MetaboxSettings {
    fn default() -> Self {
        Self {
            width_clearance: 31.0,
            depth_clearance: 42.0,
            default_front_setback: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VertexSettings {
    pub width_clearance: f64,
    pub back_width_clearance: f64,
    pub depth_shorten: f64,
}

impl Default for VertexSettings {
    fn default() -> Self {
        Self {
            width_clearance: 19.0,
            back_width_clearance: 42.0,
            depth_shorten: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawerSettings {
    /// Nominal slider lengths available from the supplier, ascending
    pub slider_lengths: Vec<f64>,
    pub rail_heights: Vec<RailHeightSetting>,
    pub defaults: DrawerDefaults,
    pub standard: StandardDrawerSettings,
    pub metabox: MetaboxSettings,
    pub vertex: VertexSettings,
}

impl DrawerSettings {
    /// Back height for a rail height.
    ///
    /// Exact match against the rail table, then the table entry for the
    /// default rail height, then the rail height itself.
    pub fn back_height_for_rail(&self, rail: f64) -> f64 {
        self.lookup_rail(rail)
            .or_else(|| self.lookup_rail(self.defaults.rail_height))
            .unwrap_or(rail)
    }

    fn lookup_rail(&self, rail: f64) -> Option<f64> {
        self.rail_heights
            .iter()
            .find(|entry| (entry.rail - rail).abs() < RAIL_MATCH_TOLERANCE)
            .map(|entry| entry.back_height)
    }
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            slider_lengths: vec![270.0, 320.0, 350.0, 400.0, 450.0, 500.0, 550.0],
            rail_heights: vec![
                RailHeightSetting {
                    rail: 93.0,
                    back_height: 63.0,
                },
                RailHeightSetting {
                    rail: 131.0,
                    back_height: 101.0,
                },
                RailHeightSetting {
                    rail: 178.0,
                    back_height: 148.0,
                },
            ],
            defaults: DrawerDefaults::default(),
            standard: StandardDrawerSettings::default(),
            metabox: MetaboxSettings::default(),
            vertex: VertexSettings::default(),
        }
    }
}

/// Built-in oven housing constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OvenSettings {
    pub cavity_height: f64,
    pub required_width: f64,
    pub min_depth: f64,
    pub min_drawer_height: f64,
    /// Subtracted from the drawer height to get the face height
    pub face_height_clearance: f64,
}

impl Default for OvenSettings {
    fn default() -> Self {
        Self {
            cavity_height: 600.0,
            required_width: 600.0,
            min_depth: 560.0,
            min_drawer_height: 140.0,
            face_height_clearance: 2.0,
        }
    }
}

/// Complete construction configuration
///
/// Aggregates all tables and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ConstructionSettings {
    pub reveals: RevealSettings,
    pub backs: BackSettings,
    pub construction: CorpusConstructionSettings,
    pub shelves: ShelfSettings,
    pub drawers: DrawerSettings,
    pub oven: OvenSettings,
}

impl ConstructionSettings {
    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => return Err(unsupported(other)),
        };

        settings.validate()?;
        debug!(path = %path.display(), "loaded construction settings");
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => return Err(unsupported(other)),
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        let non_negative = [
            ("reveals.sideGap", self.reveals.side_gap),
            ("reveals.verticalGap", self.reveals.vertical_gap),
            ("reveals.centerGap", self.reveals.center_gap()),
            ("reveals.hiddenHandleReveal", self.reveals.hidden_handle_reveal),
            (
                "reveals.upperHandlelessOverhangExtra",
                self.reveals.upper_handleless_overhang_extra,
            ),
            ("reveals.golaProfileHeight", self.reveals.gola_profile_height),
            ("backs.insetOffset", self.backs.inset_offset),
            ("backs.insetDadoDepth", self.backs.inset_dado_depth),
            ("backs.insetDadoClearance", self.backs.inset_dado_clearance),
            ("backs.insetOversizeFull", self.backs.inset_oversize_full),
            ("backs.insetOversizePartial", self.backs.inset_oversize_partial),
            ("backs.rabbetWidth", self.backs.rabbet_width),
            ("backs.rabbetDepth", self.backs.rabbet_depth),
            ("backs.rabbetClearance", self.backs.rabbet_clearance),
            ("shelves.depthSetback", self.shelves.depth_setback),
            (
                "drawers.standard.sideClearanceTotal",
                self.drawers.standard.side_clearance_total,
            ),
            (
                "drawers.standard.bottomDepthClearance",
                self.drawers.standard.bottom_depth_clearance,
            ),
            (
                "drawers.standard.sideHeightReduction",
                self.drawers.standard.side_height_reduction,
            ),
            ("drawers.metabox.widthClearance", self.drawers.metabox.width_clearance),
            ("drawers.metabox.depthClearance", self.drawers.metabox.depth_clearance),
            (
                "drawers.metabox.defaultFrontSetback",
                self.drawers.metabox.default_front_setback,
            ),
            ("drawers.vertex.widthClearance", self.drawers.vertex.width_clearance),
            (
                "drawers.vertex.backWidthClearance",
                self.drawers.vertex.back_width_clearance,
            ),
            ("drawers.vertex.depthShorten", self.drawers.vertex.depth_shorten),
            ("oven.faceHeightClearance", self.oven.face_height_clearance),
        ];
        for (key, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(SettingsError::invalid(key, "must not be negative"));
            }
        }

        let positive = [
            (
                "construction.splitTopRailDepth",
                self.construction.split_top_rail_depth,
            ),
            ("drawers.defaults.railHeight", self.drawers.defaults.rail_height),
            ("oven.cavityHeight", self.oven.cavity_height),
            ("oven.requiredWidth", self.oven.required_width),
            ("oven.minDepth", self.oven.min_depth),
            ("oven.minDrawerHeight", self.oven.min_drawer_height),
        ];
        for (key, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::invalid(key, "must be > 0"));
            }
        }

        if self.backs.rabbet_clearance > self.backs.rabbet_width {
            return Err(SettingsError::invalid(
                "backs.rabbetClearance",
                "must not exceed the rabbet width",
            ));
        }

        let sliders = &self.drawers.slider_lengths;
        if sliders.is_empty() {
            return Err(SettingsError::invalid(
                "drawers.sliderLengths",
                "at least one slider length is required",
            ));
        }
        if sliders.iter().any(|&len| len.is_nan() || len <= 0.0) {
            return Err(SettingsError::invalid(
                "drawers.sliderLengths",
                "slider lengths must be > 0",
            ));
        }
        if sliders.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SettingsError::invalid(
                "drawers.sliderLengths",
                "slider lengths must be strictly ascending",
            ));
        }

        let rails = &self.drawers.rail_heights;
        for (i, entry) in rails.iter().enumerate() {
            let positive = |v: f64| !v.is_nan() && v > 0.0;
            if !positive(entry.rail) || !positive(entry.back_height) {
                return Err(SettingsError::invalid(
                    "drawers.railHeights",
                    format!("entry for rail {} must have positive values", entry.rail),
                ));
            }
            if rails[..i]
                .iter()
                .any(|prev| (prev.rail - entry.rail).abs() < RAIL_MATCH_TOLERANCE)
            {
                return Err(SettingsError::invalid(
                    "drawers.railHeights",
                    format!("duplicate entry for rail {}", entry.rail),
                ));
            }
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn unsupported(ext: Option<&str>) -> SettingsError {
    SettingsError::UnsupportedFormat(format!(
        "settings file must be .json or .toml, got {}",
        ext.map(|e| format!(".{e}")).unwrap_or_else(|| "no extension".to_string())
    ))
}
