//! Type definitions for cabinet specifications

use serde::{Deserialize, Serialize};

/// Construction options shared by every cabinet kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CabinetOptions {
    /// Full top and bottom panels instead of a bottom plus two top rails
    pub full: bool,
    /// Back seated in a dado cut into the corpus panels
    pub inset_back: bool,
    /// Back fitted into a rabbet along the rear edges
    pub rabbet_back: bool,
    /// Handleless fronts
    pub hidden_handles: bool,
}

impl CabinetOptions {
    pub fn full() -> Self {
        Self {
            full: true,
            ..Self::default()
        }
    }

    pub fn inset_back() -> Self {
        Self {
            inset_back: true,
            ..Self::default()
        }
    }

    pub fn rabbet_back() -> Self {
        Self {
            rabbet_back: true,
            ..Self::default()
        }
    }

    pub fn hidden_handles() -> Self {
        Self {
            hidden_handles: true,
            ..Self::default()
        }
    }

    /// True if either fitted-back strategy is requested.
    pub fn has_fitted_back(&self) -> bool {
        self.inset_back || self.rabbet_back
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerSystem {
    /// Plain panel drawer box on side-mounted slides
    #[default]
    Standard,
    /// Steel-sided drawer, only bottom and back are cut
    Metabox,
    /// Double-wall steel drawer, only bottom and back are cut
    Vertex,
}

impl std::fmt::Display for DrawerSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Metabox => write!(f, "metabox"),
            Self::Vertex => write!(f, "vertex"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    North,
    South,
    East,
    West,
}

/// Where the cabinet sits in a room. Never read by panel generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rotation: f64,
    pub wall: Option<Wall>,
}

/// Variant-specific fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum CabinetKind {
    Door {
        doors: u32,
        #[serde(default)]
        shelves: u32,
    },
    Drawer {
        drawers: u32,
        /// Face height of each drawer as a percentage of the usable height
        heights: Vec<f64>,
        #[serde(default)]
        system: DrawerSystem,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slider_length: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rail_height: Option<f64>,
    },
    Corner {
        /// Width of the fixed leg covering the blind part of the corner
        fixed_side: f64,
    },
    Oven {
        #[serde(default)]
        system: DrawerSystem,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slider_length: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rail_height: Option<f64>,
    },
}

impl CabinetKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Door { .. } => "door",
            Self::Drawer { .. } => "drawer",
            Self::Corner { .. } => "corner",
            Self::Oven { .. } => "oven",
        }
    }
}

/// Everything needed to generate one cabinet's panels
///
/// Dimensions are outside corpus sizes in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetSpec {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default)]
    pub options: CabinetOptions,
    /// Wall-hung unit; changes handleless front overhangs
    #[serde(default)]
    pub upper: bool,
    #[serde(flatten)]
    pub kind: CabinetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

impl CabinetSpec {
    fn with_kind(id: impl Into<String>, width: f64, height: f64, depth: f64, kind: CabinetKind) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            depth,
            options: CabinetOptions::default(),
            upper: false,
            kind,
            placement: None,
        }
    }

    pub fn door(
        id: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        doors: u32,
        shelves: u32,
    ) -> Self {
        Self::with_kind(id, width, height, depth, CabinetKind::Door { doors, shelves })
    }

    /// Wall unit with doors and no shelves.
    pub fn upper(id: impl Into<String>, width: f64, height: f64, depth: f64, doors: u32) -> Self {
        Self::door(id, width, height, depth, doors, 0).as_upper()
    }

    pub fn drawer(
        id: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        drawers: u32,
        heights: Vec<f64>,
        system: DrawerSystem,
    ) -> Self {
        Self::with_kind(
            id,
            width,
            height,
            depth,
            CabinetKind::Drawer {
                drawers,
                heights,
                system,
                slider_length: None,
                rail_height: None,
            },
        )
    }

    pub fn corner(
        id: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        fixed_side: f64,
    ) -> Self {
        Self::with_kind(id, width, height, depth, CabinetKind::Corner { fixed_side })
    }

    pub fn oven(
        id: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        system: DrawerSystem,
    ) -> Self {
        Self::with_kind(
            id,
            width,
            height,
            depth,
            CabinetKind::Oven {
                system,
                slider_length: None,
                rail_height: None,
            },
        )
    }

    pub fn with_options(mut self, options: CabinetOptions) -> Self {
        self.options = options;
        self
    }

    pub fn as_upper(mut self) -> Self {
        self.upper = true;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Sets the slider length of drawer and oven cabinets; ignored otherwise.
    pub fn with_slider_length(mut self, length: f64) -> Self {
        if let CabinetKind::Drawer { slider_length, .. } | CabinetKind::Oven { slider_length, .. } =
            &mut self.kind
        {
            *slider_length = Some(length);
        }
        self
    }

    /// Sets the rail height of drawer and oven cabinets; ignored otherwise.
    pub fn with_rail_height(mut self, height: f64) -> Self {
        if let CabinetKind::Drawer { rail_height, .. } | CabinetKind::Oven { rail_height, .. } =
            &mut self.kind
        {
            *rail_height = Some(height);
        }
        self
    }
}
