use crate::support::{materials, settings};
use cabinetkit_cutlist::{
    pack_boards, Cabinet, CabinetOptions, CabinetSpec, DrawerSystem, Placement, Rect, Wall,
};
use proptest::prelude::*;

fn options() -> impl Strategy<Value = CabinetOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(full, inset_back, rabbet_back, hidden_handles)| CabinetOptions {
            full,
            inset_back,
            rabbet_back,
            hidden_handles,
        },
    )
}

fn system() -> impl Strategy<Value = DrawerSystem> {
    prop_oneof![
        Just(DrawerSystem::Standard),
        Just(DrawerSystem::Metabox),
        Just(DrawerSystem::Vertex),
    ]
}

fn door_spec() -> impl Strategy<Value = CabinetSpec> {
    (
        300.0f64..1200.0,
        300.0f64..1000.0,
        300.0f64..700.0,
        1u32..=4,
        0u32..=4,
        options(),
        any::<bool>(),
    )
        .prop_map(|(w, h, d, doors, shelves, options, upper)| {
            let spec = CabinetSpec::door("P", w, h, d, doors, shelves).with_options(options);
            if upper {
                spec.as_upper()
            } else {
                spec
            }
        })
}

fn drawer_spec() -> impl Strategy<Value = CabinetSpec> {
    (
        300.0f64..1200.0,
        400.0f64..1000.0,
        400.0f64..700.0,
        1u32..=4,
        system(),
        options(),
    )
        .prop_map(|(w, h, d, drawers, system, options)| {
            let heights = vec![100.0 / f64::from(drawers); drawers as usize];
            CabinetSpec::drawer("P", w, h, d, drawers, heights, system).with_options(options)
        })
}

fn corner_spec() -> impl Strategy<Value = CabinetSpec> {
    (
        600.0f64..1200.0,
        300.0f64..1000.0,
        300.0f64..700.0,
        100.0f64..400.0,
        options(),
    )
        .prop_map(|(w, h, d, fixed, options)| {
            CabinetSpec::corner("P", w, h, d, fixed).with_options(options)
        })
}

fn oven_spec() -> impl Strategy<Value = CabinetSpec> {
    (
        800.0f64..900.0,
        560.0f64..700.0,
        system(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(h, d, system, full, hidden_handles)| {
            CabinetSpec::oven("P", 600.0, h, d, system).with_options(CabinetOptions {
                full,
                hidden_handles,
                ..CabinetOptions::default()
            })
        })
}

fn any_spec() -> impl Strategy<Value = CabinetSpec> {
    prop_oneof![door_spec(), drawer_spec(), corner_spec(), oven_spec()]
}

fn placement() -> impl Strategy<Value = Placement> {
    (
        -5000.0f64..5000.0,
        -5000.0f64..5000.0,
        0.0f64..2500.0,
        0.0f64..360.0,
        prop_oneof![
            Just(None),
            Just(Some(Wall::North)),
            Just(Some(Wall::South)),
            Just(Some(Wall::East)),
            Just(Some(Wall::West)),
        ],
    )
        .prop_map(|(x, y, z, rotation, wall)| Placement {
            x,
            y,
            z,
            rotation,
            wall,
        })
}

proptest! {
    #[test]
    fn prop_valid_specs_give_positive_panels(spec in any_spec()) {
        let cabinet = Cabinet::new(spec).unwrap();
        prop_assert!(cabinet.validate(&settings()), "{:?}", cabinet.validation_issues(&settings()));

        let panels = cabinet.panels(&settings(), &materials());
        prop_assert!(!panels.is_empty());
        for panel in &panels {
            prop_assert!(panel.length > 0.0, "{} length {}", panel.label, panel.length);
            prop_assert!(panel.width > 0.0, "{} width {}", panel.label, panel.width);
            prop_assert!(panel.quantity >= 1);
            prop_assert!(panel.dados.is_empty() || panel.rabbets.is_empty());
        }
    }

    #[test]
    fn prop_generation_is_deterministic(spec in any_spec()) {
        let cabinet = Cabinet::new(spec).unwrap();
        let first = cabinet.panels(&settings(), &materials());
        let second = cabinet.panels(&settings(), &materials());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_placement_does_not_change_panels(spec in any_spec(), placement in placement()) {
        let placed = Cabinet::new(spec.clone().with_placement(placement)).unwrap();
        let unplaced = Cabinet::new(spec).unwrap();
        prop_assert_eq!(
            placed.panels(&settings(), &materials()),
            unplaced.panels(&settings(), &materials())
        );
        prop_assert_eq!(
            placed.validation_issues(&settings()),
            unplaced.validation_issues(&settings())
        );
    }

    #[test]
    fn prop_grid_pieces_never_waste_boards(
        a in 1u32..=4,
        b in 1u32..=4,
        n in 1usize..40,
        rotated in any::<bool>(),
    ) {
        let stock = Rect::new(2800.0, 2070.0);
        let piece = Rect::new(2800.0 / f64::from(a), 2070.0 / f64::from(b));
        let piece = if rotated { piece.rotated() } else { piece };
        let per_board = (a * b) as usize;

        let boards = pack_boards(&vec![piece; n], stock);
        prop_assert!(boards <= n.div_ceil(per_board), "{} boards for {} pieces of 1/{}", boards, n, per_board);
    }
}
