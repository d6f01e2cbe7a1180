use crate::support::{all, assert_size, find, panels_for, settings};
use cabinetkit_cutlist::{Cabinet, CabinetOptions, CabinetSpec, EdgeBanding};

#[test]
fn test_two_door_cabinet_with_shelf() {
    let panels = panels_for(CabinetSpec::door("DC1", 900.0, 800.0, 560.0, 2, 1));

    let doors = all(&panels, "DC1-> Door");
    assert_eq!(doors.len(), 2);
    for door in doors {
        assert_size(door, 796.0, 446.0);
        assert_eq!(door.hinge_location, "2xDUZ");
        assert_eq!(door.banding, EdgeBanding::ALL);
        assert_eq!(door.material, "Front");
    }

    let shelf = find(&panels, "DC1-> Shelf");
    assert_size(shelf, 864.0, 540.0);
    assert_eq!(shelf.quantity, 1);
    assert_eq!(shelf.banding, EdgeBanding::FRONT);
    assert_eq!(shelf.material, "Corpus");
}

#[test]
fn test_shelf_quantity_is_shelf_count() {
    let panels = panels_for(CabinetSpec::door("S", 600.0, 720.0, 560.0, 1, 3));
    assert_eq!(find(&panels, "S-> Shelf").quantity, 3);
}

#[test]
fn test_hidden_handle_base_door() {
    let spec = CabinetSpec::door("DC2", 600.0, 720.0, 560.0, 1, 0)
        .with_options(CabinetOptions::hidden_handles());
    let panels = panels_for(spec);

    let door = find(&panels, "DC2-> Door");
    assert_size(door, 690.0, 596.0);
    assert!(all(&panels, "DC2-> Shelf").is_empty());
}

#[test]
fn test_upper_cabinet_doors() {
    let panels = panels_for(CabinetSpec::upper("U1", 700.0, 360.0, 320.0, 2));

    let doors = all(&panels, "U1-> Door");
    assert_eq!(doors.len(), 2);
    for door in doors {
        assert_size(door, 356.0, 346.0);
        assert_eq!(door.hinge_location, "2xDUZ");
    }
}

#[test]
fn test_handleless_upper_door_overhangs() {
    let spec = CabinetSpec::upper("U2", 600.0, 360.0, 320.0, 1)
        .with_options(CabinetOptions::hidden_handles());
    let panels = panels_for(spec);

    // 360 - 4 + 18 + 2
    let door = find(&panels, "U2-> Door");
    assert_size(door, 376.0, 596.0);
    assert_eq!(door.hinge_location, "2xSIR");
}

#[test]
fn test_zero_doors_is_invalid_but_builds() {
    let cabinet = Cabinet::new(CabinetSpec::door("Z", 600.0, 720.0, 560.0, 0, 0)).unwrap();
    let issues = cabinet.validation_issues(&settings());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "doors");
    assert!(!cabinet.validate(&settings()));
    assert!(!cabinet
        .panels(&settings(), &crate::support::materials())
        .is_empty());
}
