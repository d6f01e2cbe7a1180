//! Panel model
//!
//! A [`Panel`] is one line of the cut list: a rectangle of sheet material,
//! how many to cut, which edges get banding and any joinery to machine.
//! Field names on the wire follow the export format downstream tools read.

use cabinetkit_settings::Material;
use serde::{Deserialize, Serialize};

/// A groove cut into a panel face to seat another panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dado {
    /// Distance from the rear edge
    pub offset: f64,
    pub depth: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RabbetEdge {
    Back,
}

/// An edge relief along a panel's rear edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rabbet {
    pub edge: RabbetEdge,
    pub depth: f64,
    pub width: f64,
}

/// Edge banding flags, 0 or 1 per edge
///
/// `right`/`left` run along the panel length, `top`/`bottom` along its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeBanding {
    #[serde(rename = "edgeBandingLengthRight")]
    pub right: u8,
    #[serde(rename = "edgeBandingLengthLeft")]
    pub left: u8,
    #[serde(rename = "edgeBandingWidthBottom")]
    pub bottom: u8,
    #[serde(rename = "edgeBandingWidthTop")]
    pub top: u8,
}

impl EdgeBanding {
    pub const NONE: Self = Self::new(0, 0, 0, 0);
    pub const ALL: Self = Self::new(1, 1, 1, 1);
    /// Front edge only
    pub const FRONT: Self = Self::new(1, 0, 0, 0);

    pub const fn new(right: u8, left: u8, bottom: u8, top: u8) -> Self {
        Self {
            right,
            left,
            bottom,
            top,
        }
    }

    /// Banded length in mm for one panel of the given size.
    pub fn length_for(&self, length: f64, width: f64) -> f64 {
        f64::from(self.right + self.left) * length + f64::from(self.top + self.bottom) * width
    }
}

/// Which pair of door edges carries the hinges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HingeLocation {
    /// Door is taller than wide; hinges go on the long edge
    LongSide,
    /// Door is wider than tall, or square
    ShortSide,
}

impl HingeLocation {
    pub fn for_door(height: f64, width: f64) -> Self {
        if height > width {
            Self::LongSide
        } else {
            Self::ShortSide
        }
    }

    /// Code written to the cut list. The leading number is the hinge count.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LongSide => "2xDUZ",
            Self::ShortSide => "2xSIR",
        }
    }
}

/// One cut-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub length: f64,
    pub width: f64,
    pub quantity: u32,
    #[serde(flatten)]
    pub banding: EdgeBanding,
    pub label: String,
    /// Empty unless the panel is a swinging door
    #[serde(default)]
    pub hinge_location: String,
    pub material: String,
    pub material_thickness: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dados: Vec<Dado>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rabbets: Vec<Rabbet>,
}

impl Panel {
    /// A single unbanded panel labelled `"{cabinet_id}-> {role}"`.
    pub fn new(
        cabinet_id: &str,
        role: &str,
        length: f64,
        width: f64,
        material: &Material,
    ) -> Self {
        Self {
            length,
            width,
            quantity: 1,
            banding: EdgeBanding::NONE,
            label: format!("{cabinet_id}-> {role}"),
            hinge_location: String::new(),
            material: material.name.clone(),
            material_thickness: material.thickness,
            dados: Vec::new(),
            rabbets: Vec::new(),
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_banding(mut self, banding: EdgeBanding) -> Self {
        self.banding = banding;
        self
    }

    pub fn with_hinges(mut self, hinges: HingeLocation) -> Self {
        self.hinge_location = hinges.code().to_string();
        self
    }

    /// Total banded edge length in mm across all pieces.
    pub fn edge_band_length(&self) -> f64 {
        f64::from(self.quantity) * self.banding.length_for(self.length, self.width)
    }

    /// Total saw path in mm across all pieces (full perimeter of each).
    pub fn cut_length(&self) -> f64 {
        f64::from(self.quantity) * 2.0 * (self.length + self.width)
    }

    /// Hinges per piece, read from the leading `<n>x` of the hinge code.
    pub fn hinges_per_piece(&self) -> u32 {
        let Some((count, _)) = self.hinge_location.split_once('x') else {
            return 0;
        };
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return 0;
        }
        count.parse().unwrap_or(0)
    }
}
