use cabinetkit_cutlist::{Cabinet, CabinetSpec, Panel};
use cabinetkit_settings::{ConstructionSettings, Material, MaterialSet};

/// Shop materials used throughout the processing tests: 18 mm carcass and
/// fronts, 3 mm back, 16 mm drawer stock, every price set to 1.
pub fn materials() -> MaterialSet {
    MaterialSet {
        corpus: Material::new("Corpus", 18.0, 1.0),
        front: Material::new("Front", 18.0, 1.0),
        back: Material::new("Back", 3.0, 1.0),
        drawer: Material::new("Drawer", 16.0, 1.0),
        edge_banding_cost_per_meter: 1.0,
        cut_cost_per_meter: 1.0,
        ..MaterialSet::default()
    }
}

pub fn settings() -> ConstructionSettings {
    ConstructionSettings::default()
}

pub fn panels_for(spec: CabinetSpec) -> Vec<Panel> {
    let cabinet = Cabinet::new(spec).unwrap();
    cabinet.panels(&settings(), &materials())
}

/// The only panel with this label.
pub fn find<'a>(panels: &'a [Panel], label: &str) -> &'a Panel {
    let mut matches = panels.iter().filter(|p| p.label == label);
    let panel = matches
        .next()
        .unwrap_or_else(|| panic!("no panel labelled {label:?}"));
    assert!(matches.next().is_none(), "more than one panel labelled {label:?}");
    panel
}

pub fn all<'a>(panels: &'a [Panel], label: &str) -> Vec<&'a Panel> {
    panels.iter().filter(|p| p.label == label).collect()
}

pub fn assert_size(panel: &Panel, length: f64, width: f64) {
    assert!(
        (panel.length - length).abs() < 1e-9 && (panel.width - width).abs() < 1e-9,
        "{}: expected {length}x{width}, got {}x{}",
        panel.label,
        panel.length,
        panel.width
    );
}
