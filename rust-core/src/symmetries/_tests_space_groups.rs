#[cfg(test)]
mod _tests_space_groups {
    use super::super::space_groups::{find_spacegroup_by_name, find_spacegroup_by_number, SpaceGroup};
    use crate::error::TwinError;
    use crate::lattice::Centering;

    #[test]
    fn test_trivial_is_p1() {
        let p1 = SpaceGroup::trivial();
        assert_eq!(p1.number, 1);
        assert_eq!(p1.hm, "P 1");
        assert_eq!(p1.operations().unwrap().order(), 1);
    }

    #[test]
    fn test_lookup_by_number() {
        assert_eq!(find_spacegroup_by_number(19).unwrap().hm, "P 21 21 21");
        assert_eq!(find_spacegroup_by_number(211).unwrap().hm, "I 4 3 2");
        assert!(find_spacegroup_by_number(0).is_none());
        assert!(find_spacegroup_by_number(231).is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let cases = [
            ("P 1", 1),
            ("P212121", 19),
            ("p 21 21 21", 19),
            ("P21", 4),
            ("P 1 21 1", 4),
            ("C2", 5),
            ("C 1 2/m 1", 12),
            ("P 41 21 2", 92),
            ("R3", 146),
            ("H 3", 146),
            ("P 21 3", 198),
        ];
        for (name, number) in cases {
            let sg = find_spacegroup_by_name(name).unwrap_or_else(|| panic!("{} not found", name));
            assert_eq!(sg.number, number, "{}", name);
        }
        assert!(find_spacegroup_by_name("").is_none());
        assert!(find_spacegroup_by_name("P 63 2 2").is_none());
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(SpaceGroup::from_symbol("4").unwrap().hm, "P 1 21 1");
        assert_eq!(SpaceGroup::from_symbol(" F 2 3 ").unwrap().number, 196);
        assert_eq!(
            SpaceGroup::from_symbol("Q 9"),
            Err(TwinError::UnknownSpaceGroup("Q 9".to_string()))
        );
    }

    #[test]
    fn test_centring_of_operations() {
        let cases = [
            ("P 1", Centering::Primitive, 1),
            ("C 1 2 1", Centering::BaseCenteredC, 2),
            ("I 2 2 2", Centering::BodyCentered, 2),
            ("R 3", Centering::Rhombohedral, 3),
            ("F 4 3 2", Centering::FaceCentered, 4),
        ];
        for (name, centering, count) in cases {
            let sg = find_spacegroup_by_name(name).unwrap();
            assert_eq!(sg.centring_type(), centering);
            assert_eq!(sg.operations().unwrap().cen_ops.len(), count);
        }
    }

    #[test]
    fn test_all_groups_are_closed() {
        for number in 1..=230 {
            let Some(sg) = find_spacegroup_by_number(number) else {
                continue;
            };
            let go = sg.operations().unwrap();
            assert!(go.sym_ops[0].is_identity(), "{}", sg);
            assert_eq!(go.sym_ops.len(), sg.ops.len());
            for (i, a) in go.sym_ops.iter().enumerate() {
                for b in &go.sym_ops[i + 1..] {
                    assert_ne!(a.rot, b.rot, "{}: repeated rotation", sg);
                }
                for b in &go.sym_ops {
                    let product = a.combine(b);
                    assert!(
                        go.find_by_rotation(&product.rot).is_some(),
                        "{}: {} * {} not in group",
                        sg,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_centrosymmetric_groups() {
        assert!(SpaceGroup::from_symbol("P -1").unwrap().operations().unwrap().is_centrosymmetric());
        assert!(SpaceGroup::from_symbol("C2/m").unwrap().operations().unwrap().is_centrosymmetric());
        assert!(!SpaceGroup::from_symbol("P 4 3 2").unwrap().operations().unwrap().is_centrosymmetric());
    }
}
