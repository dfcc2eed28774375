use proptest::prelude::*;
use sat2d::{check, Body, Polygon, Vec2};
use std::f64::consts::TAU;

fn position() -> impl Strategy<Value = Vec2> {
    (-10.0..10.0f64, -10.0..10.0f64).prop_map(|(x, y)| Vec2::new(x, y))
}

fn body() -> impl Strategy<Value = Body> {
    prop_oneof![
        (position(), 0.1..5.0f64).prop_map(|(p, r)| Body::circle(p, r).unwrap()),
        (position(), 0.1..5.0f64, 0.1..5.0f64, 0.0..TAU)
            .prop_map(|(p, w, h, a)| Body::rectangle(p, w, h, a).unwrap()),
        (position(), 3usize..9, 0.1..5.0f64, 0.0..TAU)
            .prop_map(|(p, n, r, a)| Body::polygon(Polygon::regular(n, r).unwrap(), p, a).unwrap()),
    ]
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in body(), b in body()) {
        let ab = check(&a, &b);
        let ba = check(&b, &a);
        prop_assert_eq!(ab.is_some(), ba.is_some());
        if let (Some(ab), Some(ba)) = (ab, ba) {
            // axes may differ in sign, depths may not
            prop_assert!((ab.overlap - ba.overlap).abs() < 1e-9);
        }
    }

    #[test]
    fn broad_phase_is_sound(a in body(), b in body()) {
        if a.position().distance(b.position()) > a.bounding_radius() + b.bounding_radius() {
            prop_assert!(check(&a, &b).is_none());
        }
    }

    #[test]
    fn hits_have_unit_axis_and_non_negative_overlap(a in body(), b in body()) {
        if let Some(hit) = check(&a, &b) {
            prop_assert!(hit.overlap >= 0.0);
            let len = hit.axis.magnitude();
            // zero only for concentric circles
            prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn check_is_pure(a in body(), b in body()) {
        let (a0, b0) = (a.clone(), b.clone());
        let first = check(&a, &b).map(|h| (h.overlap.to_bits(), h.axis.x.to_bits(), h.axis.y.to_bits()));
        let second = check(&a, &b).map(|h| (h.overlap.to_bits(), h.axis.x.to_bits(), h.axis.y.to_bits()));
        prop_assert_eq!(first, second);
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    #[test]
    fn normalize_never_nan(x in -1e6..1e6f64, y in -1e6..1e6f64) {
        let n = Vec2::new(x, y).normalize();
        prop_assert!(!n.x.is_nan() && !n.y.is_nan());
        let len = n.magnitude();
        prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-12);
    }

    #[test]
    fn translated_pairs_agree(a in body(), b in body(), offset in position()) {
        // moving both bodies by the same amount does not change whether they touch
        let hit = check(&a, &b);
        let a2 = a.moved_to(a.position() + offset).unwrap();
        let b2 = b.moved_to(b.position() + offset).unwrap();
        let moved = check(&a2, &b2);
        if let (Some(h1), Some(h2)) = (&hit, &moved) {
            prop_assert!((h1.overlap - h2.overlap).abs() < 1e-6);
        }
    }
}
