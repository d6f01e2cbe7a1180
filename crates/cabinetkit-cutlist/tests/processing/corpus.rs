use crate::support::{all, assert_size, find, materials, panels_for, settings};
use cabinetkit_cutlist::corpus::base_panels;
use cabinetkit_cutlist::{CabinetOptions, CabinetSpec, Dado, EdgeBanding, Rabbet, RabbetEdge};

fn corpus(options: CabinetOptions) -> Vec<cabinetkit_cutlist::Panel> {
    let spec = CabinetSpec::door("C1", 800.0, 720.0, 560.0, 0, 0).with_options(options);
    base_panels(&spec, &settings(), &materials())
}

#[test]
fn test_flush_back_corpus() {
    let panels = corpus(CabinetOptions::default());
    let labels: Vec<&str> = panels.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "C1-> Side panel",
            "C1-> Bottom panel",
            "C1-> Top panel plank rear",
            "C1-> Top panel plank front",
            "C1-> Back panel",
        ]
    );

    let side = find(&panels, "C1-> Side panel");
    assert_size(side, 720.0, 560.0);
    assert_eq!(side.quantity, 2);
    assert_eq!(side.banding, EdgeBanding::new(1, 0, 1, 1));

    assert_size(find(&panels, "C1-> Bottom panel"), 764.0, 560.0);
    assert_size(find(&panels, "C1-> Top panel plank rear"), 764.0, 100.0);
    assert_size(find(&panels, "C1-> Top panel plank front"), 764.0, 100.0);

    let back = find(&panels, "C1-> Back panel");
    assert_size(back, 764.0, 684.0);
    assert_eq!(back.material, "Back");
    assert_eq!(back.material_thickness, 3.0);

    assert!(panels.iter().all(|p| p.dados.is_empty() && p.rabbets.is_empty()));
}

#[test]
fn test_inset_back_corpus() {
    let panels = corpus(CabinetOptions::inset_back());
    let dado = Dado {
        offset: 15.0,
        depth: 7.0,
        width: 4.0,
    };

    assert_eq!(find(&panels, "C1-> Side panel").dados, [dado]);
    assert_eq!(find(&panels, "C1-> Bottom panel").dados, [dado]);
    assert!(find(&panels, "C1-> Top panel plank rear").dados.is_empty());
    assert!(find(&panels, "C1-> Top panel plank front").dados.is_empty());
    assert_size(find(&panels, "C1-> Back panel"), 776.0, 707.0);
    assert!(panels.iter().all(|p| p.rabbets.is_empty()));
}

#[test]
fn test_rabbet_back_corpus() {
    let panels = corpus(CabinetOptions::rabbet_back());
    let rabbet = Rabbet {
        edge: RabbetEdge::Back,
        depth: 4.0,
        width: 9.0,
    };

    assert_eq!(find(&panels, "C1-> Side panel").rabbets, [rabbet]);
    assert_eq!(find(&panels, "C1-> Bottom panel").rabbets, [rabbet]);
    assert_eq!(find(&panels, "C1-> Top panel plank rear").rabbets, [rabbet]);
    assert!(find(&panels, "C1-> Top panel plank front").rabbets.is_empty());
    assert_size(find(&panels, "C1-> Back panel"), 780.0, 700.0);
    assert!(panels.iter().all(|p| p.dados.is_empty()));
}

#[test]
fn test_inset_takes_precedence_over_rabbet() {
    let both = CabinetOptions {
        inset_back: true,
        rabbet_back: true,
        ..CabinetOptions::default()
    };
    let panels = corpus(both);

    assert!(panels.iter().all(|p| p.rabbets.is_empty()));
    assert!(!find(&panels, "C1-> Side panel").dados.is_empty());
    assert_size(find(&panels, "C1-> Back panel"), 776.0, 707.0);
}

#[test]
fn test_full_corpus_with_inset_back() {
    let options = CabinetOptions {
        full: true,
        inset_back: true,
        ..CabinetOptions::default()
    };
    let spec = CabinetSpec::door("F1", 900.0, 700.0, 560.0, 0, 0).with_options(options);
    let panels = base_panels(&spec, &settings(), &materials());

    let top_bottom = find(&panels, "F1-> Top/Bottom panel");
    assert_size(top_bottom, 864.0, 560.0);
    assert_eq!(top_bottom.quantity, 2);
    assert_eq!(top_bottom.dados.len(), 1);
    assert!(all(&panels, "F1-> Bottom panel").is_empty());
    assert!(all(&panels, "F1-> Top panel plank rear").is_empty());
    assert_size(find(&panels, "F1-> Back panel"), 876.0, 676.0);
}

#[test]
fn test_door_cabinet_without_doors_is_only_corpus() {
    let panels = panels_for(CabinetSpec::door("Z", 800.0, 720.0, 560.0, 0, 0));
    assert_eq!(panels.len(), 5);
    assert!(all(&panels, "Z-> Door").is_empty());
}
