mod support;

use nalgebra::Point2;
use quadgrid::float_types::{EPSILON, Real, TAU};
use quadgrid::polygon::Polygon;
use quadgrid::quadtree::{CellStatus, DOMAIN, Node, QuadTree};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::support::{approx_eq, half_square, make_polygon};

/// Walk the whole hierarchy, pairing each node with its level below the root.
fn collect_levels(root: &Node) -> Vec<(&Node, usize)> {
    let mut nodes = Vec::new();
    let mut stack = vec![(root, 0usize)];
    while let Some((node, level)) = stack.pop() {
        nodes.push((node, level));
        if let Some(children) = &node.children {
            for child in children.iter() {
                stack.push((child, level + 1));
            }
        }
    }
    nodes
}

fn assert_well_formed(tree: &QuadTree) {
    let nodes = collect_levels(tree.root());
    assert_eq!(nodes.len(), tree.node_count());
    for (node, level) in nodes {
        assert!(level <= tree.max_depth() + 1);
        // Resolution leaves no cell undecided.
        assert_ne!(node.status, CellStatus::Unknown);
        if node.status == CellStatus::Mixed && node.children.is_none() {
            // Mixed survives only where the depth budget ran out.
            assert_eq!(level, tree.max_depth() + 1);
        }
        if let Some(children) = &node.children {
            assert_eq!(node.status, CellStatus::Mixed);
            let center = node.bounds.center();
            assert_eq!(children[0].bounds.mins, node.bounds.mins);
            assert!(approx_eq(children[0].bounds.maxs.x, center.x, EPSILON));
            assert!(approx_eq(children[0].bounds.maxs.y, center.y, EPSILON));
            assert_eq!(children[1].bounds.mins.y, node.bounds.mins.y);
            assert_eq!(children[1].bounds.maxs.x, node.bounds.maxs.x);
            assert_eq!(children[2].bounds.mins.x, node.bounds.mins.x);
            assert_eq!(children[2].bounds.maxs.y, node.bounds.maxs.y);
            assert!(approx_eq(children[3].bounds.mins.x, center.x, EPSILON));
            assert!(approx_eq(children[3].bounds.mins.y, center.y, EPSILON));
            assert_eq!(children[3].bounds.maxs, node.bounds.maxs);
        }
    }
}

#[test]
fn square_queries_match_hand_answers() {
    let tree = QuadTree::new(half_square(), 3).unwrap();
    assert!(tree.contains(0.0, 0.0));
    assert!(!tree.contains(0.9, 0.9));
    // The square's corner sits on a shared cell corner; the answer must
    // stay put no matter how often we ask.
    for _ in 0..3 {
        assert!(!tree.contains(0.5, 0.5));
    }
    // One Mixed root, four Mixed quadrants, sixteen resolved grandchildren.
    assert_eq!(tree.node_count(), 21);

    let rebuilt = QuadTree::new(half_square(), 3).unwrap();
    assert_eq!(rebuilt.contains(0.5, 0.5), tree.contains(0.5, 0.5));
    assert_eq!(rebuilt.node_count(), tree.node_count());
}

#[test]
fn seam_queries_fall_back_to_the_polygon() {
    let tree = QuadTree::new(half_square(), 3).unwrap();
    // Child bounds are open, so these all miss every child somewhere on the
    // way down and get answered by a direct winding evaluation.
    assert!(tree.contains(0.0, 0.0));
    assert!(tree.contains(0.0, 0.25));
    assert!(tree.contains(-0.5, 0.25));
    // On the right outline the winding counters cancel.
    assert!(!tree.contains(0.5, 0.25));
}

#[test]
fn corner_and_out_of_domain_queries_answer_outside() {
    let tree = QuadTree::new(half_square(), 2).unwrap();
    assert!(!tree.contains(1.0, 1.0));
    assert!(!tree.contains(-1.0, -1.0));
    assert!(!tree.contains(1.5, 0.0));
    assert!(!tree.contains(0.0, -2.0));
    assert!(!tree.contains(-1.2, 0.3));
    // Non-finite coordinates match no child and no bracketing edge.
    assert!(!tree.contains(Real::NAN, 0.0));
    assert!(!tree.contains(Real::INFINITY, Real::NEG_INFINITY));
}

#[test]
fn classification_matches_winding_away_from_the_outline() {
    let tree = QuadTree::new(Polygon::regular_ngon(6, 0.7), 4).unwrap();
    // Probe rings more than a finest-cell diagonal clear of the outline:
    // inside the apothem (~0.606) and outside the circumradius.
    for i in 0..16 {
        let theta = TAU * (i as Real) / 16.0;
        let inside = Point2::new(0.4 * theta.cos(), 0.4 * theta.sin());
        let outside = Point2::new(0.9 * theta.cos(), 0.9 * theta.sin());
        assert!(tree.contains_point(&inside));
        assert!(tree.polygon().winding_contains(&inside));
        assert!(!tree.contains_point(&outside));
        assert!(!tree.polygon().winding_contains(&outside));
    }
}

#[test]
fn star_probes_agree_with_direct_winding() {
    let tree = QuadTree::new(Polygon::star(5, 0.85, 0.35), 4).unwrap();
    // Center, a point up the first spike, and a point in the notch between
    // the first two spikes, all well away from the outline.
    let notch_angle = TAU / 10.0;
    let probes = [
        (0.0, 0.0, true),
        (0.55, 0.0, true),
        (0.7 * notch_angle.cos(), 0.7 * notch_angle.sin(), false),
    ];
    for (x, y, expected) in probes {
        assert_eq!(tree.contains(x, y), expected);
        assert_eq!(tree.polygon().winding_contains(&Point2::new(x, y)), expected);
    }
}

#[test]
fn construction_is_deterministic() {
    let tree_a = QuadTree::new(Polygon::star(5, 0.85, 0.35), 4).unwrap();
    let tree_b = QuadTree::new(Polygon::star(5, 0.85, 0.35), 4).unwrap();
    assert_eq!(tree_a.node_count(), tree_b.node_count());

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let x = rng.gen_range(-1.2..1.2);
        let y = rng.gen_range(-1.2..1.2);
        let first = tree_a.contains(x, y);
        assert_eq!(first, tree_b.contains(x, y));
        assert_eq!(first, tree_a.contains(x, y));
    }
}

#[test]
fn tree_structure_is_well_formed() {
    let square_tree = QuadTree::new(half_square(), 3).unwrap();
    assert_eq!(square_tree.root().bounds, DOMAIN);
    assert_well_formed(&square_tree);

    let star_tree = QuadTree::new(Polygon::star(5, 0.85, 0.35), 4).unwrap();
    assert_well_formed(&star_tree);
}

#[test]
fn depth_limited_mixed_leaves_answer_by_winding() {
    // A vertex at (0.3, 0.3) sits strictly inside the deepest cell [0, 0.5]^2
    // once the depth budget stops subdivision at level two.
    let triangle = make_polygon(&[[-0.5, -0.5], [0.5, -0.5], [0.3, 0.3]]);
    let tree = QuadTree::new(triangle, 1).unwrap();
    assert_well_formed(&tree);
    assert_eq!(tree.node_count(), 17);

    let mixed_leaves: Vec<_> = collect_levels(tree.root())
        .into_iter()
        .filter(|(node, _)| node.status == CellStatus::Mixed && node.children.is_none())
        .collect();
    assert_eq!(mixed_leaves.len(), 1);
    let (leaf, level) = mixed_leaves[0];
    assert_eq!(level, 2);
    assert_eq!(leaf.bounds.mins, Point2::new(0.0, 0.0));
    assert_eq!(leaf.bounds.maxs, Point2::new(0.5, 0.5));

    // Queries landing in the mixed leaf resolve by winding evaluation.
    assert!(tree.contains(0.3, 0.2));
    assert!(!tree.contains(0.45, 0.4));
}
