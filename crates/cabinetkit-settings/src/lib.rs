//! CabinetKit Settings Crate
//!
//! Construction tables, board materials and stock sheet sizes. Everything in
//! this crate is plain data; the cut-list crate receives it by reference.

pub mod config;
pub mod error;
pub mod materials;

pub use config::{
    BackSettings, ConstructionSettings, CorpusConstructionSettings, DrawerDefaults,
    DrawerSettings, MetaboxSettings, OvenSettings, RailHeightSetting, RevealSettings,
    ShelfSettings, StandardDrawerSettings, VertexSettings,
};
pub use error::{SettingsError, SettingsResult};
pub use materials::{Material, MaterialSet, StockBoard};
