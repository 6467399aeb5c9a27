use ordered_tree::{Order, OrderedTree};

use std::collections::HashSet;

#[quickcheck]
fn is_bst_after_every_insert(xs: Vec<i16>) -> bool {
    let mut tree = OrderedTree::new();

    xs.into_iter().all(|x| {
        tree.insert(x);
        tree.is_bst()
    })
}

#[quickcheck]
fn size_counts_duplicates(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let counted = tree.len() == xs.len() && tree.is_empty() == xs.is_empty();

    tree.clear();
    counted && tree.len() == 0 && tree.is_empty()
}

#[quickcheck]
fn sort_order_round_trip(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut walked = Vec::new();
    tree.for_each(Order::SortOrder, |x| walked.push(*x));

    let mut expected = xs;
    expected.sort_unstable();

    walked.windows(2).all(|pair| pair[0] <= pair[1]) && walked == expected
}

#[quickcheck]
fn every_order_visits_every_key_once(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();

    [Order::PreOrder, Order::SortOrder, Order::PostOrder]
        .into_iter()
        .all(|order| {
            let mut walked: Vec<_> = tree.traverse(order).copied().collect();
            walked.sort_unstable();
            walked == expected
        })
}

#[quickcheck]
fn pre_and_level_order_start_at_the_root(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    let pre = tree.traverse(Order::PreOrder).next();
    let post = tree.traverse(Order::PostOrder).last();
    let level = tree.level_order().next().map(|(key, _)| key);

    pre == xs.first() && post == xs.first() && level == xs.first()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x) && tree.count(x) == 0)
}

#[quickcheck]
fn clone_is_identical(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let cloned = tree.clone();

    cloned.len() == tree.len()
        && [Order::PreOrder, Order::SortOrder, Order::PostOrder]
            .into_iter()
            .all(|order| tree.traverse(order).eq(cloned.traverse(order)))
        && tree.level_order().eq(cloned.level_order())
}
