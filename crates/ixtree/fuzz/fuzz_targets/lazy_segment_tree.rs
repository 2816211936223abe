#![no_main]

use arbitrary::Arbitrary;
use ixtree::{ops::Min, LazySegmentTree};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    RangeAdd(u8, u8, i16),
    PointQuery(u8),
    RangeQuery(u8, u8),
}

fuzz_target!(|input: (Vec<i16>, Vec<Op>)| {
    let (values, ops) = input;
    let mut naive: Vec<i64> = values.iter().map(|&v| v as i64).collect();
    let mut tree = LazySegmentTree::with_identity(naive.clone(), Min);

    for op in ops {
        match op {
            Op::RangeAdd(l, r, v) => {
                let (l, r, v) = (l as usize, r as usize, v as i64);
                let res = tree.range_add(l, r, v);
                if l >= r {
                    assert_eq!(res, Ok(()));
                } else if r <= naive.len() {
                    assert_eq!(res, Ok(()));
                    for x in &mut naive[l..r] {
                        *x += v;
                    }
                } else {
                    assert!(res.unwrap_err().is_invalid_index());
                }
            }
            Op::PointQuery(p) => {
                let p = p as usize;
                if let Some(expected) = naive.get(p) {
                    assert_eq!(tree.point_query(p), Ok(*expected));
                }
            }
            Op::RangeQuery(l, r) => {
                let (l, r) = (l as usize, r as usize);
                if r <= naive.len() {
                    let expected = naive.get(l..r).and_then(|s| s.iter().min().copied());
                    assert_eq!(tree.range_query(l, r), Ok(expected));
                }
            }
        }
    }
});
