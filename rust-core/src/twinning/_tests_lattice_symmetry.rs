#[cfg(test)]
mod _tests_lattice_symmetry {
    use super::super::lattice_symmetry::{
        find_lattice_symmetry, find_lattice_symmetry_r, find_lattice_symmetry_r_with,
    };
    use crate::error::{Result, TwinError};
    use crate::interfaces::GroupClosure;
    use crate::lattice::{niggli_reduce, Centering, UnitCell};
    use crate::symmetries::{find_spacegroup_by_name, DiminoClosure, GroupOps, Op};

    fn cell(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> UnitCell {
        UnitCell::new(a, b, c, alpha, beta, gamma).unwrap()
    }

    fn reduced(original: &UnitCell) -> UnitCell {
        niggli_reduce(original, Centering::Primitive).unwrap().cell
    }

    // Every rotation of the named space group is a lattice symmetry
    fn assert_contains_rotations(lattice: &GroupOps, space_group: &str) {
        let go = find_spacegroup_by_name(space_group).unwrap().operations().unwrap();
        for op in &go.sym_ops {
            assert!(
                lattice.find_by_rotation(&op.rot).is_some(),
                "{} from {} missing",
                op,
                space_group
            );
        }
    }

    // Closure that keeps the group as it was given
    struct NoClosure;

    impl GroupClosure for NoClosure {
        fn close(&self, _group: &mut GroupOps, _generators: &[Op], _max_order: usize) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reduced_lattice_orders() {
        let cases = [
            (cell(10.0, 10.0, 10.0, 90.0, 90.0, 90.0), 24),
            (cell(10.0, 10.0, 15.0, 90.0, 90.0, 120.0), 12),
            (cell(10.0, 10.0, 15.0, 90.0, 90.0, 90.0), 8),
            (cell(5.0, 7.0, 9.0, 90.0, 90.0, 90.0), 4),
            (cell(10.0, 12.0, 8.0, 90.0, 100.0, 90.0), 2),
            (cell(7.0, 8.0, 9.0, 70.0, 80.0, 85.0), 1),
        ];
        for (original, order) in cases {
            let go = find_lattice_symmetry_r(&reduced(&original), 3.0).unwrap();
            assert_eq!(go.sym_ops.len(), order, "{:?}", original.parameters());
            assert_eq!(go.cen_ops.len(), 1);
            assert!(go.sym_ops[0].is_identity());
            assert!(!go.is_centrosymmetric());
        }
    }

    #[test]
    fn test_reduced_lattice_group_is_closed() {
        let go = find_lattice_symmetry_r(&reduced(&cell(10.0, 10.0, 10.0, 90.0, 90.0, 90.0)), 3.0).unwrap();
        for a in &go.sym_ops {
            for b in &go.sym_ops {
                assert!(go.find_by_rotation(&a.combine(b).rot).is_some());
            }
        }
    }

    #[test]
    fn test_zero_tolerance_gives_identity() {
        let go = find_lattice_symmetry_r(&reduced(&cell(10.0, 10.0, 10.0, 90.0, 90.0, 90.0)), 0.0).unwrap();
        assert_eq!(go, GroupOps::trivial());
    }

    #[test]
    fn test_closure_generates_beyond_generators() {
        // Only 5 of the 7 hexagonal two-folds pass at 1 degree, closure adds the rest
        let distorted = reduced(&cell(10.0, 10.1, 15.0, 90.0, 90.7, 119.0));
        assert_eq!(find_lattice_symmetry_r(&distorted, 0.5).unwrap().sym_ops.len(), 1);
        assert_eq!(find_lattice_symmetry_r(&distorted, 1.0).unwrap().sym_ops.len(), 12);
    }

    #[test]
    fn test_custom_closure() {
        let cubic = reduced(&cell(10.0, 10.0, 10.0, 90.0, 90.0, 90.0));
        let go = find_lattice_symmetry_r_with(&NoClosure, &cubic, 3.0).unwrap();
        assert_eq!(go.sym_ops.len(), 2);

        let lenient = find_lattice_symmetry_r_with(&DiminoClosure::lenient(), &cubic, 3.0).unwrap();
        assert_eq!(lenient.sym_ops.len(), 24);

        let boxed: Box<dyn GroupClosure> = Box::new(DiminoClosure::strict());
        let dynamic = find_lattice_symmetry_r_with(boxed.as_ref(), &cubic, 3.0).unwrap();
        assert_eq!(dynamic.sym_ops.len(), 24);
    }

    #[test]
    fn test_overflowing_generators_are_skipped() {
        let triclinic = reduced(&cell(7.0, 8.0, 9.0, 70.0, 80.0, 85.0));
        let go = find_lattice_symmetry_r(&triclinic, 90.0).unwrap();
        assert!(go.sym_ops.len() <= 24);
        assert_eq!(24 % go.sym_ops.len(), 0);
        for a in &go.sym_ops {
            for b in &go.sym_ops {
                assert!(go.find_by_rotation(&a.combine(b).rot).is_some());
            }
        }

        // Nearly every two-fold passes at 90 degrees and they cannot form one group
        let strict = find_lattice_symmetry_r_with(&DiminoClosure::strict(), &triclinic, 90.0);
        assert_eq!(strict, Err(TwinError::ClosureOverflow { max_order: 24 }));
    }

    #[test]
    fn test_cubic_lattices_in_original_basis() {
        let cubic = cell(10.0, 10.0, 10.0, 90.0, 90.0, 90.0);
        for (centering, count) in [
            (Centering::Primitive, 1),
            (Centering::BodyCentered, 2),
            (Centering::FaceCentered, 4),
        ] {
            let go = find_lattice_symmetry(&cubic, centering, 3.0).unwrap();
            assert_eq!(go.sym_ops.len(), 24, "{}", centering);
            assert_eq!(go.cen_ops.len(), count, "{}", centering);
            assert!(go.has_same_centring(&GroupOps::centring_only(centering)));
            assert_contains_rotations(&go, "P 4 3 2");
        }
    }

    #[test]
    fn test_tetragonal_and_hexagonal_in_original_basis() {
        let tetragonal = cell(10.0, 10.0, 15.0, 90.0, 90.0, 90.0);
        for centering in [Centering::Primitive, Centering::BodyCentered] {
            let go = find_lattice_symmetry(&tetragonal, centering, 3.0).unwrap();
            assert_eq!(go.sym_ops.len(), 8);
            assert_contains_rotations(&go, "P 4 2 2");
        }

        let hexagonal = cell(10.0, 10.0, 15.0, 90.0, 90.0, 120.0);
        let go = find_lattice_symmetry(&hexagonal, Centering::Primitive, 3.0).unwrap();
        assert_eq!(go.sym_ops.len(), 12);
        assert_contains_rotations(&go, "P 6 2 2");

        let rhombohedral = find_lattice_symmetry(&hexagonal, Centering::Rhombohedral, 3.0).unwrap();
        assert_eq!(rhombohedral.sym_ops.len(), 6);
        assert_eq!(rhombohedral.cen_ops.len(), 3);
        assert_contains_rotations(&rhombohedral, "R 3 2");
    }

    #[test]
    fn test_monoclinic_c_centred() {
        let monoclinic = cell(10.0, 12.0, 8.0, 90.0, 100.0, 90.0);
        let go = find_lattice_symmetry(&monoclinic, Centering::BaseCenteredC, 3.0).unwrap();
        assert_eq!(go.sym_ops.len(), 2);
        assert_contains_rotations(&go, "C 1 2 1");
        assert!(go.sym_ops.iter().all(|op| op.tran == nalgebra::Vector3::zeros()));
    }
}
