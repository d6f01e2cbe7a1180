use crate::support::{all, assert_size, find, panels_for, settings};
use cabinetkit_cutlist::{Cabinet, CabinetOptions, CabinetSpec, DrawerSystem, EdgeBanding};

fn d1() -> CabinetSpec {
    CabinetSpec::drawer(
        "D1",
        600.0,
        720.0,
        560.0,
        2,
        vec![60.0, 40.0],
        DrawerSystem::Standard,
    )
    .with_options(CabinetOptions::inset_back())
}

#[test]
fn test_standard_drawers_with_inset_back() {
    let panels = panels_for(d1());

    assert_size(find(&panels, "D1-> Back panel"), 576.0, 707.0);

    let face = find(&panels, "D1-> Drawer 1 Face");
    assert_size(face, 428.0, 596.0);
    assert_eq!(face.banding, EdgeBanding::ALL);
    assert_eq!(face.material, "Front");

    assert_size(find(&panels, "D1-> Drawer 1 Bottom"), 540.0, 522.0);
    let side = find(&panels, "D1-> Drawer 1 Side");
    assert_size(side, 398.0, 522.0);
    assert_eq!(side.quantity, 2);
    assert_eq!(side.material, "Drawer");
    assert_size(find(&panels, "D1-> Drawer 1 Back"), 508.0, 398.0);

    assert_size(find(&panels, "D1-> Drawer 2 Face"), 286.0, 596.0);
    assert_size(find(&panels, "D1-> Drawer 2 Back"), 508.0, 256.0);
}

#[test]
fn test_drawers_follow_corpus_in_order() {
    let panels = panels_for(d1());
    let labels: Vec<&str> = panels.iter().map(|p| p.label.as_str()).collect();
    let back = labels.iter().position(|l| *l == "D1-> Back panel").unwrap();
    let first_face = labels.iter().position(|l| *l == "D1-> Drawer 1 Face").unwrap();
    let second_face = labels.iter().position(|l| *l == "D1-> Drawer 2 Face").unwrap();

    assert!(back < first_face);
    assert_eq!(second_face, first_face + 4);
    assert_eq!(labels.len(), 5 + 2 * 4);
}

#[test]
fn test_single_drawer_with_rabbet_back() {
    let spec = CabinetSpec::drawer(
        "D2",
        600.0,
        720.0,
        560.0,
        1,
        vec![100.0],
        DrawerSystem::Standard,
    )
    .with_options(CabinetOptions::rabbet_back());
    let panels = panels_for(spec);

    assert_size(find(&panels, "D2-> Back panel"), 580.0, 700.0);
    assert_size(find(&panels, "D2-> Drawer 1 Face"), 716.0, 596.0);
    assert_size(find(&panels, "D2-> Drawer 1 Bottom"), 540.0, 536.0);
}

#[test]
fn test_hidden_handles_skip_gaps_and_subtract_reveal() {
    let spec = CabinetSpec::drawer(
        "H",
        600.0,
        720.0,
        560.0,
        2,
        vec![50.0, 50.0],
        DrawerSystem::Standard,
    )
    .with_options(CabinetOptions::hidden_handles());
    let panels = panels_for(spec);

    // 360 - 30
    assert_size(find(&panels, "H-> Drawer 1 Face"), 330.0, 596.0);
    assert_size(find(&panels, "H-> Drawer 2 Face"), 330.0, 596.0);
}

#[test]
fn test_metabox_drawers_have_no_sides() {
    let spec = CabinetSpec::drawer(
        "M",
        600.0,
        720.0,
        560.0,
        3,
        vec![30.0, 30.0, 40.0],
        DrawerSystem::Metabox,
    );
    let panels = panels_for(spec);

    assert!(panels.iter().all(|p| !p.label.ends_with("Side")));
    assert_eq!(all(&panels, "M-> Drawer 3 Back").len(), 1);
}

#[test]
fn test_height_validation() {
    let short = Cabinet::new(CabinetSpec::drawer(
        "V",
        600.0,
        720.0,
        560.0,
        3,
        vec![50.0, 50.0],
        DrawerSystem::Standard,
    ))
    .unwrap();
    assert!(!short.validate(&settings()));
    assert_eq!(short.validation_issues(&settings()).len(), 1);

    // Only the drawers that have a height are generated
    let panels = short.panels(&settings(), &crate::support::materials());
    assert!(all(&panels, "V-> Drawer 3 Face").is_empty());
    assert_eq!(all(&panels, "V-> Drawer 2 Face").len(), 1);

    let overfull = Cabinet::new(CabinetSpec::drawer(
        "W",
        600.0,
        720.0,
        560.0,
        2,
        vec![60.0, 60.0],
        DrawerSystem::Standard,
    ))
    .unwrap();
    let issues = overfull.validation_issues(&settings());
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("100%"));

    assert!(Cabinet::new(d1()).unwrap().validate(&settings()));
}

#[test]
fn test_huge_drawer_count_still_generates() {
    let cabinet = Cabinet::new(CabinetSpec::drawer(
        "X",
        600.0,
        720.0,
        560.0,
        u32::MAX,
        vec![100.0],
        DrawerSystem::Standard,
    ))
    .unwrap();
    assert!(!cabinet.validate(&settings()));

    let panels = cabinet.panels(&settings(), &crate::support::materials());
    assert_eq!(all(&panels, "X-> Drawer 1 Face").len(), 1);
    assert!(all(&panels, "X-> Drawer 2 Face").is_empty());
}

#[test]
fn test_thirds_add_up_to_full_height() {
    let third = 100.0 / 3.0;
    let cabinet = Cabinet::new(CabinetSpec::drawer(
        "T",
        600.0,
        720.0,
        560.0,
        3,
        vec![third; 3],
        DrawerSystem::Standard,
    ))
    .unwrap();
    assert!(cabinet.validate(&settings()));
}
