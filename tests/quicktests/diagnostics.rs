use ordered_tree::OrderedTree;

#[quickcheck]
fn height_matches_deepest_level(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut deepest = None;
    tree.for_each_level_order(|_, level| deepest = deepest.max(Some(level)));

    match deepest {
        Some(level) => tree.height() == level + 1,
        None => tree.height() == 0,
    }
}

#[quickcheck]
fn diameter_is_bounded_by_height(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let height = tree.height();
    let diameter = tree.diameter();

    if tree.is_empty() {
        return height == 0 && diameter == 0;
    }

    // The root to its deepest leaf is a path, and no path can climb more than `height - 1`
    // edges on either side of the node it bends at.
    diameter >= height - 1 && diameter <= 2 * (height - 1)
}

#[quickcheck]
fn balanced_trees_are_shallow(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    // A height-balanced tree with `n` nodes is at most about `1.44 * lg(n + 2)` tall.
    !tree.is_balanced() || (tree.height() as f64) <= 1.45 * ((tree.len() + 2) as f64).log2()
}

#[quickcheck]
fn stats_match_the_individual_diagnostics(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let stats = tree.stats();

    stats.size == tree.len()
        && stats.height == tree.height()
        && stats.diameter == tree.diameter()
        && stats.balanced == tree.is_balanced()
        && stats.leaves + stats.inner_nodes() == tree.len()
        && (tree.is_empty() || stats.leaves >= 1)
}
