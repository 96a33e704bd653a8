//! A median-split bounding volume hierarchy over triangles, used to prune
//! the all-pairs triangle/triangle test down to AABB-overlapping subtrees.
//!
//! The tree is built once over a fixed triangle buffer and queried with a
//! single dual-tree descent that finds every intersecting pair without
//! ever re-testing or double-counting one.

use crate::error::GeometryError;
use crate::linear::point_axis;
use crate::shape::{Aabb, Triangle};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::Range;

/// Leaves hold at most this many triangles before splitting again.
const LEAF_SIZE: usize = 3;

/// A node in the hierarchy. A sum type, not a tagged struct: a leaf's
/// `range` and an internal node's `left`/`right` can never be read off
/// the wrong variant.
#[derive(Debug)]
enum BvhNode {
    Leaf {
        aabb: Aabb,
        range: Range<usize>,
    },
    Internal {
        aabb: Aabb,
        left: Box<BvhNode>,
        right: Box<BvhNode>,
    },
}

impl BvhNode {
    fn aabb(&self) -> Aabb {
        match self {
            BvhNode::Leaf { aabb, .. } => *aabb,
            BvhNode::Internal { aabb, .. } => *aabb,
        }
    }
}

/// The bounding volume hierarchy. Owns the (possibly reordered) triangle
/// buffer; a triangle's `id` field is what callers see, never its storage
/// position, so the reordering a median-split build requires is invisible
/// from outside this module.
#[derive(Debug)]
pub struct Bvh {
    triangles: Vec<Triangle>,
    root: Option<BvhNode>,
}

fn aabb_of(triangles: &[Triangle]) -> Aabb {
    let mut b = Aabb::empty();
    for t in triangles {
        b.expand(&t.aabb());
    }
    b
}

fn build_recursive(slice: &mut [Triangle], base_offset: usize) -> BvhNode {
    let bbox = aabb_of(slice);

    if slice.len() <= LEAF_SIZE {
        return BvhNode::Leaf {
            aabb: bbox,
            range: base_offset..base_offset + slice.len(),
        };
    }

    let axis = bbox.longest_axis();
    slice.sort_by(|a, b| {
        let ca = point_axis(a.aabb().center(), axis);
        let cb = point_axis(b.aabb().center(), axis);
        ca.partial_cmp(&cb).unwrap_or(Ordering::Equal)
    });

    let mid = slice.len() / 2;
    let (left_slice, right_slice) = slice.split_at_mut(mid);
    let left = build_recursive(left_slice, base_offset);
    let right = build_recursive(right_slice, base_offset + mid);

    BvhNode::Internal {
        aabb: bbox,
        left: Box::new(left),
        right: Box::new(right),
    }
}

impl Bvh {
    /// Build a hierarchy over `triangles`, consuming and reordering the
    /// buffer in place. Each triangle's `id` travels with it, so build
    /// order never leaks into [`Bvh::find_intersecting`]'s output. An
    /// empty input yields an empty tree (`root` is `None`), not a leaf
    /// with an empty view — a leaf's view is invariantly non-empty.
    pub fn build(mut triangles: Vec<Triangle>) -> Bvh {
        if triangles.is_empty() {
            return Bvh {
                triangles,
                root: None,
            };
        }
        let len = triangles.len();
        let root = build_recursive(&mut triangles, 0);
        debug_assert_eq!(len, triangles.len());
        Bvh {
            triangles,
            root: Some(root),
        }
    }

    /// The ids of every triangle that intersects at least one other
    /// triangle in the set, found via a single dual-tree descent that
    /// prunes on disjoint bounding boxes.
    pub fn find_intersecting(&self) -> Result<HashSet<usize>, GeometryError> {
        let mut hits = HashSet::new();
        if let Some(root) = &self.root {
            self_intersect(root, &self.triangles, &mut hits)?;
        }
        Ok(hits)
    }

    /// The number of triangles in the hierarchy.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// A leaf's view onto the triangle buffer must never be empty (see
/// SPEC_FULL.md §3's BVH Node invariants). `build_recursive` never
/// constructs one, but the descent checks it anyway at the point where
/// an empty view would otherwise pass by silently: a `Leaf` that claims
/// no triangles is a broken build invariant, not a valid empty subtree.
fn check_leaf_nonempty(range: &Range<usize>) -> Result<(), GeometryError> {
    if range.is_empty() {
        Err(GeometryError::invariant(format!(
            "leaf view {range:?} is empty; every leaf must own at least one triangle"
        )))
    } else {
        Ok(())
    }
}

/// Find every intersecting pair with both triangles drawn from the same
/// subtree: recurse into each child, then cross-test the two children
/// against each other. Every unordered pair under `node` is visited
/// exactly once.
fn self_intersect(
    node: &BvhNode,
    triangles: &[Triangle],
    hits: &mut HashSet<usize>,
) -> Result<(), GeometryError> {
    match node {
        BvhNode::Leaf { range, .. } => {
            check_leaf_nonempty(range)?;
            for i in range.clone() {
                for j in (i + 1)..range.end {
                    if triangles[i].intersect(&triangles[j])? {
                        hits.insert(triangles[i].id);
                        hits.insert(triangles[j].id);
                    }
                }
            }
            Ok(())
        }
        BvhNode::Internal { left, right, .. } => {
            self_intersect(left, triangles, hits)?;
            self_intersect(right, triangles, hits)?;
            cross_intersect(left, right, triangles, hits)
        }
    }
}

/// Find every intersecting pair with one triangle drawn from `a` and the
/// other from `b`, pruning the moment the two subtrees' bounding boxes no
/// longer overlap.
fn cross_intersect(
    a: &BvhNode,
    b: &BvhNode,
    triangles: &[Triangle],
    hits: &mut HashSet<usize>,
) -> Result<(), GeometryError> {
    if !a.aabb().overlaps(&b.aabb()) {
        return Ok(());
    }

    match (a, b) {
        (BvhNode::Leaf { range: ra, .. }, BvhNode::Leaf { range: rb, .. }) => {
            check_leaf_nonempty(ra)?;
            check_leaf_nonempty(rb)?;
            for i in ra.clone() {
                for j in rb.clone() {
                    if triangles[i].intersect(&triangles[j])? {
                        hits.insert(triangles[i].id);
                        hits.insert(triangles[j].id);
                    }
                }
            }
            Ok(())
        }
        (BvhNode::Leaf { .. }, BvhNode::Internal { left, right, .. }) => {
            cross_intersect(a, left, triangles, hits)?;
            cross_intersect(a, right, triangles, hits)
        }
        (BvhNode::Internal { left, right, .. }, BvhNode::Leaf { .. }) => {
            cross_intersect(left, b, triangles, hits)?;
            cross_intersect(right, b, triangles, hits)
        }
        (
            BvhNode::Internal {
                left: l1,
                right: r1,
                ..
            },
            BvhNode::Internal {
                left: l2,
                right: r2,
                ..
            },
        ) => {
            cross_intersect(l1, l2, triangles, hits)?;
            cross_intersect(l1, r2, triangles, hits)?;
            cross_intersect(r1, l2, triangles, hits)?;
            cross_intersect(r1, r2, triangles, hits)
        }
    }
}

/// A plain-text dump of the hierarchy's shape, for debugging only. Not
/// part of the stable library surface; gated behind the `dump` feature so
/// release builds never carry it.
#[cfg(feature = "dump")]
pub mod dump {
    use super::{Bvh, BvhNode};
    use std::io::{self, Write};

    pub fn dump(bvh: &Bvh, w: &mut impl Write) -> io::Result<()> {
        match &bvh.root {
            Some(root) => write_node(root, 0, w),
            None => writeln!(w, "(empty)"),
        }
    }

    fn write_node(node: &BvhNode, depth: usize, w: &mut impl Write) -> io::Result<()> {
        let pad = "  ".repeat(depth);
        match node {
            BvhNode::Leaf { aabb, range } => writeln!(
                w,
                "{pad}leaf [{}, {}) aabb=({:.4},{:.4},{:.4})-({:.4},{:.4},{:.4})",
                range.start,
                range.end,
                aabb.min.x,
                aabb.min.y,
                aabb.min.z,
                aabb.max.x,
                aabb.max.y,
                aabb.max.z
            ),
            BvhNode::Internal { aabb, left, right } => {
                writeln!(
                    w,
                    "{pad}node aabb=({:.4},{:.4},{:.4})-({:.4},{:.4},{:.4})",
                    aabb.min.x, aabb.min.y, aabb.min.z, aabb.max.x, aabb.max.y, aabb.max.z
                )?;
                write_node(left, depth + 1, w)?;
                write_node(right, depth + 1, w)
            }
        }
    }
}
