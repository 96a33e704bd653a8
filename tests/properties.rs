//! Property tests over randomly generated triangles: the laws the
//! specification calls out (symmetry, reflexivity, and agreement between
//! the brute-force pairwise kernel and the BVH-accelerated query) have to
//! hold for every input, not just the handful of scenarios in
//! `scenarios.rs`.

use proptest::prelude::*;
use std::collections::HashSet;
use triangles::{Bvh, Point, Triangle};

fn coord() -> impl Strategy<Value = f64> {
    -5.0..5.0f64
}

fn triangle(id: usize) -> impl Strategy<Value = Triangle> {
    (
        (coord(), coord(), coord()),
        (coord(), coord(), coord()),
        (coord(), coord(), coord()),
    )
        .prop_map(move |(p0, p1, p2)| {
            Triangle::new(
                id,
                Point::new(p0.0, p0.1, p0.2),
                Point::new(p1.0, p1.1, p1.2),
                Point::new(p2.0, p2.1, p2.2),
            )
        })
}

fn brute_force(triangles: &[Triangle]) -> HashSet<usize> {
    let mut hits = HashSet::new();
    for i in 0..triangles.len() {
        for j in (i + 1)..triangles.len() {
            if triangles[i].intersect(&triangles[j]).unwrap() {
                hits.insert(triangles[i].id);
                hits.insert(triangles[j].id);
            }
        }
    }
    hits
}

proptest! {
    #[test]
    fn intersect_is_symmetric(t0 in triangle(0), t1 in triangle(1)) {
        prop_assert_eq!(t0.intersect(&t1).unwrap(), t1.intersect(&t0).unwrap());
    }

    #[test]
    fn every_triangle_intersects_itself(t in triangle(0)) {
        prop_assert!(t.intersect(&t).unwrap());
    }

    #[test]
    fn triangle_is_contained_in_its_own_bounding_box(t in triangle(0)) {
        let b = t.aabb();
        for p in [t.p0, t.p1, t.p2] {
            prop_assert!(p.x >= b.min.x - 1e-9 && p.x <= b.max.x + 1e-9);
            prop_assert!(p.y >= b.min.y - 1e-9 && p.y <= b.max.y + 1e-9);
            prop_assert!(p.z >= b.min.z - 1e-9 && p.z <= b.max.z + 1e-9);
        }
    }

    #[test]
    fn bvh_agrees_with_brute_force_pairwise_kernel(
        triangles in prop::collection::vec((coord(), coord(), coord(), coord(), coord(), coord(), coord(), coord(), coord()), 0..12)
    ) {
        let triangles: Vec<Triangle> = triangles
            .into_iter()
            .enumerate()
            .map(|(id, (x0, y0, z0, x1, y1, z1, x2, y2, z2))| {
                Triangle::new(
                    id,
                    Point::new(x0, y0, z0),
                    Point::new(x1, y1, z1),
                    Point::new(x2, y2, z2),
                )
            })
            .collect();

        let expected = brute_force(&triangles);
        let bvh = Bvh::build(triangles);
        let actual = bvh.find_intersecting().unwrap();
        prop_assert_eq!(actual, expected);
    }
}
