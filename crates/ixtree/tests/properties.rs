use ixtree::{
    ops::{Add, Min},
    DisjointSetUnion, Error, FenwickTree, LazySegmentTree, Precondition,
};
use proptest::prelude::*;

fn values_and_ranges() -> impl Strategy<Value = (Vec<i64>, Vec<(usize, usize, i64)>)> {
    prop::collection::vec(-1_000i64..1_000, 1..64).prop_flat_map(|values| {
        let len = values.len();
        let ranges = prop::collection::vec((0..=len, 0..=len, -100i64..100), 0..32);
        (Just(values), ranges)
    })
}

proptest! {
    #[test]
    fn point_query_is_original_plus_covering_deltas((values, ranges) in values_and_ranges()) {
        let mut tree = LazySegmentTree::with_identity(values.clone(), Min);
        for &(l, r, v) in &ranges {
            tree.range_add(l, r, v).unwrap();
        }
        for (p, original) in values.iter().enumerate() {
            let covering: i64 = ranges
                .iter()
                .filter(|&&(l, r, _)| l <= p && p < r)
                .map(|&(_, _, v)| v)
                .sum();
            prop_assert_eq!(tree.point_query(p), Ok(original + covering));
        }
    }

    #[test]
    fn zero_and_empty_adds_change_nothing(values in prop::collection::vec(-1_000i64..1_000, 1..64), l in 0usize..64, v in -100i64..100) {
        let mut tree = LazySegmentTree::with_identity(values.clone(), Min);
        let len = values.len();
        let l = l % len;
        tree.range_add(l, len, 0).unwrap();
        tree.range_add(l, l, v).unwrap();
        prop_assert_eq!(tree.propagate(), &values[..]);
        prop_assert_eq!(tree.root(), values.iter().min().unwrap());
    }

    #[test]
    fn kth_matches_prefix_sums(updates in prop::collection::vec((0usize..32, 0u64..8), 1..64)) {
        let n = 32;
        let mut tree = FenwickTree::new(n);
        for &(i, delta) in &updates {
            tree.update(i, delta).unwrap();
        }
        let prefix: Vec<u64> = (0..n).map(|i| tree.prefix_sum(i).unwrap()).collect();
        prop_assert!(prefix.windows(2).all(|w| w[0] <= w[1]));

        let total = tree.total();
        for k in 1..=total {
            let idx = tree.kth(k).unwrap();
            let before = if idx == 0 { 0 } else { prefix[idx - 1] };
            prop_assert!(before < k && k <= prefix[idx]);
        }
        prop_assert_eq!(tree.kth(total + 1), Err(Error::Precondition(Precondition::RankOutOfRange)));
    }

    #[test]
    fn prefix_sum_matches_naive(updates in prop::collection::vec((0usize..16, -50i64..50), 0..64)) {
        let mut tree = FenwickTree::with_op(16, Add);
        let mut naive = [0i64; 16];
        for &(i, delta) in &updates {
            tree.update(i, delta).unwrap();
            naive[i] += delta;
        }
        let mut sum = 0;
        for (i, value) in naive.iter().enumerate() {
            sum += value;
            prop_assert_eq!(tree.prefix_sum(i), Ok(sum));
        }
    }

    #[test]
    fn union_is_order_independent(pairs in prop::collection::vec((0usize..24, 0usize..24), 0..48)) {
        let mut forward = DisjointSetUnion::new(24);
        let mut backward = DisjointSetUnion::new(24);
        for &(a, b) in &pairs {
            let before = forward.count();
            let merged = forward.union(a, b).unwrap();
            prop_assert_eq!(forward.count(), if merged { before - 1 } else { before });
            prop_assert_eq!(forward.find(a), forward.find(b));
            backward.union(b, a).unwrap();
        }
        prop_assert_eq!(forward.count(), backward.count());
        for x in 0..24 {
            let root = forward.find(x).unwrap();
            prop_assert_eq!(forward.find(root), Ok(root));
            for y in 0..24 {
                prop_assert_eq!(forward.same(x, y), backward.same(x, y));
            }
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let mut tree = FenwickTree::new(8);
    tree.update(3, 5u32).unwrap();
    tree.update(6, 2).unwrap();
    let bytes = postcard::to_allocvec(&tree).unwrap();
    let decoded: FenwickTree<u32> = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.kth(6), Ok(6));
    assert_eq!(decoded.total(), 7);

    let mut dsu = DisjointSetUnion::new(4);
    dsu.union(0, 2).unwrap();
    let bytes = postcard::to_allocvec(&dsu).unwrap();
    let mut decoded: DisjointSetUnion = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.count(), 3);
    assert_eq!(decoded.same(0, 2), Ok(true));
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_fenwick_without_slots() {
    // empty buffer, negative = false
    assert!(postcard::from_bytes::<FenwickTree<u32>>(&[0, 0]).is_err());
    // a zero-length tree still carries slot 0
    let tree: FenwickTree<u32> = postcard::from_bytes(&[1, 0, 0]).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.total(), 0);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_inconsistent_dsu() {
    // postcard: varint length, zigzag isize links, varint count
    let self_loop = [1, 0, 1];
    let out_of_range = [1, 10, 1];
    let cycle = [2, 2, 0, 0];
    // links [-1, 0]: root 0 claims one member but holds two
    let wrong_size = [2, 1, 0, 1];
    let wrong_count = [2, 1, 1, 1];
    for bytes in [&self_loop[..], &out_of_range, &cycle, &wrong_size, &wrong_count] {
        assert!(postcard::from_bytes::<DisjointSetUnion>(bytes).is_err());
    }

    // links [-2, 0], one set
    let mut dsu: DisjointSetUnion = postcard::from_bytes(&[2, 3, 0, 1]).unwrap();
    assert_eq!(dsu.count(), 1);
    assert_eq!(dsu.find(1), Ok(0));
    assert_eq!(dsu.size(1), Ok(2));
}
