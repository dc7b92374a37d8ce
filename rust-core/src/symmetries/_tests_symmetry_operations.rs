#[cfg(test)]
mod _tests_symmetry_operations {
    use super::super::symmetry_operations::{Op, Rot, Tran, DEN};
    use crate::error::TwinError;
    use crate::lattice::Centering;

    fn op(triplet: &str) -> Op {
        Op::parse_triplet(triplet).unwrap()
    }

    #[test]
    fn test_identity() {
        let id = Op::identity();
        assert!(id.is_identity());
        assert_eq!(id.triplet(), "x,y,z");
        assert_eq!(id.det_rot(), DEN * DEN * DEN);
        assert_eq!(id.negated_rot(), Rot::from_diagonal_element(-DEN));
    }

    #[test]
    fn test_parse_simple_triplets() {
        let screw = op("-x,y+1/2,-z");
        assert_eq!(screw.rot, Rot::from_row_slice(&[-24, 0, 0, 0, 24, 0, 0, 0, -24]));
        assert_eq!(screw.tran, Tran::new(0, 12, 0));
        assert_eq!(screw.triplet(), "-x,y+1/2,-z");
    }

    #[test]
    fn test_parse_hexagonal_triplet() {
        let six = op("x-y,x,z+1/6");
        assert_eq!(six.rot, Rot::from_row_slice(&[24, -24, 0, 24, 0, 0, 0, 0, 24]));
        assert_eq!(six.tran, Tran::new(0, 0, 4));
        assert_eq!(six.triplet(), "x-y,x,z+1/6");
    }

    #[test]
    fn test_parse_leading_translation_and_factors() {
        // Leading fraction and whitespace are accepted, output is normalized
        assert_eq!(op("x, y, 1/4+z").triplet(), "x,y,z+1/4");
        assert_eq!(op("X,Y,Z").triplet(), "x,y,z");
        assert_eq!(op("2x,y,z").rot[(0, 0)], 2 * DEN);
        assert_eq!(op("2*x,y,z").rot[(0, 0)], 2 * DEN);
    }

    #[test]
    fn test_parse_invalid_triplets() {
        for bad in ["x,y", "x,y,q", "2*,y,z", "x,,z", "x,y,z,x", "x,y,1/0"] {
            match Op::parse_triplet(bad) {
                Err(TwinError::InvalidTriplet(_)) => {}
                other => panic!("{} parsed as {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_combine_rotations() {
        let four = op("-y,x,z");
        assert_eq!(four.combine(&four).triplet(), "-x,-y,z");
        assert_eq!((four * four * four * four).triplet(), "x,y,z");
    }

    #[test]
    fn test_combine_screw_axis_wraps_to_identity() {
        let screw = op("-x,y+1/2,-z");
        let square = &screw * &screw;
        assert_eq!(square.tran, Tran::new(0, DEN, 0));
        assert!(square.wrap().is_identity());
    }

    #[test]
    fn test_inverse() {
        let four = op("-y,x,z+1/4");
        let inv = four.inverse().unwrap();
        assert_eq!(inv.triplet(), "y,-x,z-1/4");
        assert!(four.combine(&inv).is_identity());
        assert!(inv.combine(&four).is_identity());
    }

    #[test]
    fn test_inverse_of_centring_transform() {
        let to_primitive = Centering::BodyCentered.to_primitive_op();
        let inv = to_primitive.inverse().unwrap();
        assert_eq!(inv.rot, Rot::from_row_slice(&[0, 24, 24, 24, 0, 24, 24, 24, 0]));
        assert!(to_primitive.combine(&inv).is_identity());
    }

    #[test]
    fn test_inverse_of_singular_operation() {
        let singular = Op::new(Rot::zeros(), Tran::zeros());
        assert!(matches!(
            singular.inverse(),
            Err(TwinError::SingularOperation(_))
        ));
    }

    #[test]
    fn test_wrap_negative_translation() {
        let shifted = Op::new(Rot::from_diagonal_element(DEN), Tran::new(-6, 30, 0));
        assert_eq!(shifted.wrap().tran, Tran::new(18, 6, 0));
    }

    #[test]
    fn test_as_hkl() {
        assert_eq!(op("-y,x,z").as_hkl(), "k,-h,l");
        assert_eq!(op("-x,-y,z").as_hkl(), "-h,-k,l");
        assert_eq!(op("x-y,x,z").as_hkl(), "h+k,-h,l");
    }

    #[test]
    fn test_from_integer_rotation() {
        let two_fold = Op::from_integer_rotation(&[0, 1, 0, 1, 0, 0, 0, 0, -1]);
        assert_eq!(two_fold.triplet(), "y,x,-z");
        assert!(two_fold.combine(&two_fold).is_identity());
        assert_eq!(two_fold.float_rotation()[(0, 1)], 1.0);
    }

    #[test]
    fn test_display_matches_triplet() {
        let screw = op("-x+1/2,-y,z+1/2");
        assert_eq!(format!("{}", screw), screw.triplet());
    }
}
