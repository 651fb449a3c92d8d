//! Tests for the dot product and its property check.

#[cfg(test)]
mod tests {
    use crate::math::dot_product::code::*;
    use crate::math::dot_product::DotProductProperties;
    use crate::math::vector2::Vector2;
    use crate::registry::PropertyCheck;
    use crate::utils::random_vectors;

    #[test]
    fn test_original_known_value() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, 2.0);
        // 3*1 + 4*2 = 3 + 8 = 11
        assert_eq!(dot_product_original(&a, &b), 11.0);
    }

    #[test]
    fn test_orthogonal_axes() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert_eq!(dot_product(&x, &y), 0.0);
    }

    #[test]
    fn test_commutative_on_random_vectors() {
        let vectors = random_vectors(11, 128, 1.0e6);
        for pair in vectors.chunks_exact(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert_eq!(dot_product(a, b), dot_product(b, a), "a={:?} b={:?}", a, b);
        }
    }

    #[test]
    fn test_zero_vector_annihilates() {
        let zero = Vector2::default();
        for a in random_vectors(3, 64, 100.0) {
            assert_eq!(dot_product(&a, &zero), 0.0, "a={:?}", a);
        }
    }

    #[test]
    fn test_self_dot_is_squared_length() {
        let v = Vector2::new(-3.0, 4.0);
        assert_eq!(dot_product(&v, &v), 25.0);

        for a in random_vectors(5, 64, 50.0) {
            let d = dot_product(&a, &a);
            assert_eq!(d, a.x * a.x + a.y * a.y);
            assert!(d >= 0.0);
        }
    }

    #[test]
    fn test_deterministic_bits() {
        for pair in random_vectors(17, 64, 1.0e3).chunks_exact(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let first = dot_product(a, b);
            let second = dot_product(a, b);
            assert_eq!(first.to_bits(), second.to_bits(), "a={:?} b={:?}", a, b);
        }
    }

    #[test]
    fn test_nan_propagates() {
        let a = Vector2::new(f64::NAN, 1.0);
        let b = Vector2::new(1.0, 1.0);
        assert!(dot_product(&a, &b).is_nan());
    }

    #[test]
    fn test_overflow_goes_to_infinity() {
        let a = Vector2::new(f64::MAX, f64::MAX);
        assert_eq!(dot_product(&a, &a), f64::INFINITY);
    }

    #[test]
    fn test_properties_pass_for_original() {
        DotProductProperties::default()
            .verify()
            .expect("reference implementation should satisfy every property");
    }

    #[test]
    fn test_every_advertised_property_is_reachable() {
        fn shifted(a: &Vector2, b: &Vector2) -> f64 {
            a.x * b.x + a.y * b.y + a.x
        }

        fn antisymmetric(a: &Vector2, b: &Vector2) -> f64 {
            a.x * b.y - a.y * b.x + 9.0
        }

        // Nonzero whenever both component products vanish
        fn nonzero_on_zero(a: &Vector2, b: &Vector2) -> f64 {
            let bump = if a.x * b.x == 0.0 && a.y * b.y == 0.0 { 1.0 } else { 0.0 };
            a.x * b.x + a.y * b.y + bump
        }

        // Spares the zero vector but not the unit axes
        fn nonzero_on_axes(a: &Vector2, b: &Vector2) -> f64 {
            let crossed = (a.x + a.y) * (b.x + b.y);
            let bump = if a.x * b.x == 0.0 && a.y * b.y == 0.0 && crossed != 0.0 {
                1.0
            } else {
                0.0
            };
            a.x * b.x + a.y * b.y + bump
        }

        fn short_on_self(a: &Vector2, b: &Vector2) -> f64 {
            let bump = if a == b { 1.0 } else { 0.0 };
            a.x * b.x + a.y * b.y - bump
        }

        let cases: [(DotProductFn, &str); 5] = [
            (shifted, "known_value"),
            (antisymmetric, "commutativity"),
            (nonzero_on_zero, "zero_vector"),
            (nonzero_on_axes, "orthogonality"),
            (short_on_self, "self_dot"),
        ];

        let advertised = DotProductProperties::default().properties();
        let mut reached = Vec::new();

        for (function, property) in cases {
            let check = DotProductProperties {
                function,
                ..DotProductProperties::default()
            };
            let err = check.verify().unwrap_err();
            assert_eq!(err.property(), Some(property), "{}", err);
            assert!(
                advertised.contains(&property),
                "'{}' is reported but not listed in properties()",
                property
            );
            reached.push(property);
        }

        reached.sort_unstable();
        let mut advertised = advertised;
        advertised.sort_unstable();
        assert_eq!(reached, advertised);
    }
}
