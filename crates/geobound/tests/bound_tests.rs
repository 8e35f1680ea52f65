use approx::{assert_abs_diff_eq, assert_relative_eq};
use geobound::{dvec2, Bound, Point, Shape, Validate};

fn sample_bounds() -> Vec<Bound> {
    vec![
        Bound::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0)),
        Bound::new(dvec2(-10.5, 40.0), dvec2(-9.0, 42.25)),
        Bound::new(dvec2(3.0, 3.0), dvec2(3.0, 3.0)),
        Bound::new(dvec2(5.0, 5.0), dvec2(1.0, 1.0)),
        Bound::new(dvec2(4.0, 0.0), dvec2(2.0, 6.0)),
        Bound::default(),
    ]
}

fn sample_points() -> Vec<Point> {
    vec![
        dvec2(0.0, 0.0),
        dvec2(0.5, 0.5),
        dvec2(-20.0, 3.0),
        dvec2(100.0, -45.0),
        dvec2(1.0, 1.0),
    ]
}

fn corners(b: &Bound) -> [Point; 4] {
    [b.min, b.max, b.left_top(), b.right_bottom()]
}

#[test]
fn test_from_points_contains_both_corners_in_any_orientation() {
    let pairs = [
        (dvec2(0.0, 0.0), dvec2(2.0, 3.0)),
        (dvec2(0.0, 3.0), dvec2(2.0, 0.0)),
        (dvec2(2.0, 0.0), dvec2(0.0, 3.0)),
        (dvec2(2.0, 3.0), dvec2(0.0, 0.0)),
    ];

    for (a, b) in pairs {
        let bound = Bound::from_points(a, b);
        assert!(bound.contains(a));
        assert!(bound.contains(b));
        assert_eq!(bound, Bound::from_points(b, a));
        assert_eq!(bound, Bound::new(dvec2(0.0, 0.0), dvec2(2.0, 3.0)));
    }
}

#[test]
fn test_extend_is_idempotent_and_monotonic() {
    for b in sample_bounds().into_iter().filter(|b| !b.is_empty()) {
        for p in sample_points() {
            let once = b.extend(p);
            assert_eq!(once.extend(p), once);
            assert!(once.contains(p));
            for c in corners(&b) {
                assert!(once.contains(c), "{once} lost corner {c} of {b}");
            }
        }
    }
}

#[test]
fn test_union_contains_all_corners_and_is_idempotent() {
    let bounds = sample_bounds();
    for a in &bounds {
        for b in &bounds {
            let u = a.union(b);
            for c in corners(b) {
                assert!(u.contains(c), "{u} misses corner {c} of {b}");
            }
            if !a.is_empty() {
                for c in corners(a) {
                    assert!(u.contains(c), "{u} misses corner {c} of {a}");
                }
                assert_eq!(u.union(a), u);
            }
        }
    }
}

#[test]
fn test_intersects_is_symmetric() {
    let bounds = sample_bounds();
    for a in &bounds {
        for b in &bounds {
            assert_eq!(a.intersects(b), b.intersects(a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_touching_corner_intersects() {
    let a = Bound::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
    let b = Bound::new(dvec2(1.0, 1.0), dvec2(2.0, 2.0));
    let c = Bound::new(dvec2(1.0 + 1e-9, 0.0), dvec2(2.0, 2.0));
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
}

#[test]
fn test_is_empty_and_is_zero_are_distinct() {
    let inverted = Bound::new(dvec2(5.0, 5.0), dvec2(1.0, 1.0));
    let point = Bound::new(dvec2(1.0, 1.0), dvec2(1.0, 1.0));
    assert!(inverted.is_empty());
    assert!(!inverted.is_zero());
    assert!(!point.is_empty());
    assert!(!point.is_zero());

    let zero = Bound::default();
    assert!(zero.is_zero());
    assert!(!zero.is_empty());
    assert!(!Bound::new(dvec2(0.0, 0.0), dvec2(0.0, 0.0001)).is_zero());
}

#[test]
fn test_to_ring_exact_order() {
    let ring = Bound::new(dvec2(0.0, 0.0), dvec2(2.0, 3.0)).to_ring();
    assert_eq!(
        ring.points(),
        &[
            dvec2(0.0, 0.0),
            dvec2(2.0, 0.0),
            dvec2(2.0, 3.0),
            dvec2(0.0, 3.0),
            dvec2(0.0, 0.0),
        ]
    );
}

#[test]
fn test_center() {
    let b = Bound::new(dvec2(0.0, 0.0), dvec2(4.0, 2.0));
    assert_eq!(b.center(), dvec2(2.0, 1.0));

    let geo = Bound::new(dvec2(17.1, 47.7), dvec2(22.6, 49.6));
    let c = geo.center();
    assert_abs_diff_eq!(c.x, 19.85, epsilon = 1e-12);
    assert_abs_diff_eq!(c.y, 48.65, epsilon = 1e-12);
}

#[test]
fn test_polygon_round_trip() {
    for b in sample_bounds().into_iter().filter(|b| !b.is_empty()) {
        let poly = b.to_polygon();
        poly.validate().unwrap();
        assert_eq!(poly.rings().len(), 1);

        let ring = &poly.rings()[0];
        let rebuilt = Bound::from_points(ring.points()[0], ring.points()[2]);
        assert_eq!(rebuilt, b);
        assert_eq!(poly.bound(), b);
    }
}

#[test]
fn test_pad_round_trip() {
    let b = Bound::new(dvec2(17.1, 47.7), dvec2(22.6, 49.6));
    assert_abs_diff_eq!(b.pad(0.3).pad(-0.3), b, epsilon = 1e-12);
    assert!(b.pad(-1.0).is_empty());
    assert!(b.pad(-1.0).validate().is_err());
}

#[test]
fn test_relative_eq_scales_with_magnitude() {
    let b = Bound::new(dvec2(1.0e6, -2.0e6), dvec2(3.0e6, 4.0e6));
    let nudged = Bound::new(dvec2(1.0e6 + 1e-4, -2.0e6), dvec2(3.0e6, 4.0e6));
    assert_relative_eq!(b, b);
    assert_relative_eq!(b, nudged, max_relative = 1e-9);
    assert!(!approx::relative_eq!(b, nudged, max_relative = 1e-12));
}

#[test]
fn test_equal_matches_partial_eq() {
    let bounds = sample_bounds();
    for a in &bounds {
        for b in &bounds {
            assert_eq!(a.equal(b), a == b);
        }
    }
}
