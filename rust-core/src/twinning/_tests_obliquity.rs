#[cfg(test)]
mod _tests_obliquity {
    use super::super::obliquity::{calculate_cos_obliquity, find_lattice_2fold_ops, OpObliquity};
    use super::super::two_fold_table::TWO_FOLD_TABLE;
    use crate::lattice::{niggli_reduce, Centering, UnitCell};
    use nalgebra::Vector3;

    fn reduced(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> UnitCell {
        let cell = UnitCell::new(a, b, c, alpha, beta, gamma).unwrap();
        niggli_reduce(&cell, Centering::Primitive).unwrap().cell
    }

    fn table_index(op_obl: &OpObliquity) -> usize {
        TWO_FOLD_TABLE
            .iter()
            .position(|row| row.op() == op_obl.op)
            .unwrap()
    }

    fn triplets(ops: &[OpObliquity]) -> Vec<String> {
        ops.iter().map(|o| o.op.triplet()).collect()
    }

    #[test]
    fn test_cos_obliquity_exact_axis() {
        let cell = UnitCell::new(5.0, 7.0, 9.0, 90.0, 90.0, 90.0).unwrap();
        let c = Vector3::new(0.0, 0.0, 1.0);
        assert!((calculate_cos_obliquity(&cell, &c, &c) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_cos_obliquity_sign_is_ignored() {
        let cell = UnitCell::new(5.0, 7.0, 9.0, 90.0, 90.0, 90.0).unwrap();
        let d = Vector3::new(0.0, 0.0, 1.0);
        let r = Vector3::new(0.0, 0.0, -1.0);
        assert!((calculate_cos_obliquity(&cell, &d, &r) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_cos_obliquity_monoclinic_angle() {
        // In a monoclinic cell the direct a axis and the reciprocal a* axis
        // are separated by beta - 90 degrees
        let cell = UnitCell::new(10.0, 12.0, 8.0, 90.0, 100.0, 90.0).unwrap();
        let a = Vector3::new(1.0, 0.0, 0.0);
        let cos = calculate_cos_obliquity(&cell, &a, &a);
        assert!((cos.acos().to_degrees() - 10.0).abs() < 1e-9);
        assert!(cos <= 1.0);
    }

    #[test]
    fn test_two_fold_counts() {
        let cases = [
            ((10.0, 10.0, 10.0, 90.0, 90.0, 90.0), 9),
            ((5.0, 7.0, 9.0, 90.0, 90.0, 90.0), 3),
            ((10.0, 10.0, 15.0, 90.0, 90.0, 90.0), 5),
            ((10.0, 10.0, 15.0, 90.0, 90.0, 120.0), 7),
            ((10.0, 12.0, 8.0, 90.0, 100.0, 90.0), 1),
            ((7.0, 8.0, 9.0, 70.0, 80.0, 85.0), 0),
        ];
        for ((a, b, c, alpha, beta, gamma), count) in cases {
            let cell = reduced(a, b, c, alpha, beta, gamma);
            let ops = find_lattice_2fold_ops(&cell, 3.0);
            assert_eq!(ops.len(), count, "{:?}: {:?}", cell.parameters(), triplets(&ops));
            for op_obl in &ops {
                assert!(op_obl.obliquity < 1e-5, "{}: {}", op_obl.op, op_obl.obliquity);
                assert!(op_obl.op.combine(&op_obl.op).is_identity());
            }
        }
    }

    #[test]
    fn test_zero_tolerance_accepts_nothing() {
        let cell = reduced(10.0, 10.0, 10.0, 90.0, 90.0, 90.0);
        assert!(find_lattice_2fold_ops(&cell, 0.0).is_empty());
    }

    #[test]
    fn test_pseudo_orthorhombic_obliquities() {
        let cell = reduced(10.0, 12.0, 8.0, 90.0, 90.5, 90.0);

        let strict = find_lattice_2fold_ops(&cell, 0.3);
        assert_eq!(strict.len(), 1);
        assert!(strict[0].obliquity < 1e-5);

        let loose = find_lattice_2fold_ops(&cell, 1.0);
        assert_eq!(loose.len(), 3);
        assert_eq!(loose[0].op, strict[0].op);
        for op_obl in &loose[1..] {
            assert!((op_obl.obliquity - 0.5).abs() < 1e-6, "{}", op_obl.obliquity);
        }
    }

    #[test]
    fn test_sorted_by_obliquity() {
        let cell = reduced(10.0, 10.1, 15.0, 90.0, 90.7, 119.0);
        let ops = find_lattice_2fold_ops(&cell, 5.0);
        assert!(!ops.is_empty());
        for pair in ops.windows(2) {
            assert!(pair[0].obliquity <= pair[1].obliquity);
        }
        for op_obl in &ops {
            assert!(op_obl.obliquity >= 0.0 && op_obl.obliquity < 5.0);
            assert_eq!(op_obl.op.tran, Vector3::zeros());
        }
    }

    #[test]
    fn test_larger_tolerance_keeps_smaller_result() {
        let cell = reduced(10.0, 10.1, 15.0, 90.0, 90.7, 119.0);
        let mut previous: Vec<OpObliquity> = Vec::new();
        for tol in [0.1, 0.5, 1.0, 2.0, 3.0, 5.0, 10.0] {
            let ops = find_lattice_2fold_ops(&cell, tol);
            assert!(ops.len() >= previous.len());
            for old in &previous {
                assert!(ops.iter().any(|o| o.op == old.op), "{} lost at {}", old.op, tol);
            }
            previous = ops;
        }
    }

    #[test]
    fn test_equal_obliquities_keep_table_order() {
        // Along the cell axes the direct and reciprocal vectors are exactly parallel
        let cubic = UnitCell::new(10.0, 10.0, 10.0, 90.0, 90.0, 90.0).unwrap();
        let ops = find_lattice_2fold_ops(&cubic, 3.0);
        assert!(ops.iter().filter(|o| o.obliquity == 0.0).count() >= 3);

        let tetragonal = UnitCell::new(10.0, 10.0, 15.0, 90.0, 90.0, 90.0).unwrap();
        for ops in [ops, find_lattice_2fold_ops(&tetragonal, 3.0)] {
            for pair in ops.windows(2) {
                if pair[0].obliquity == pair[1].obliquity {
                    assert!(
                        table_index(&pair[0]) < table_index(&pair[1]),
                        "{} before {}",
                        pair[0].op,
                        pair[1].op
                    );
                }
            }
        }
    }
}
