use core::mem;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    error::Error,
    ops::{Delta, Identity, Operation},
};

/// This data structure allows range addition and single element queries.
///
/// This tree allocates `4 * sz * sizeof(N)` bytes of memory where `sz` is the smallest
/// power of two not below the number of values.
///
/// This tree is implemented using an implicit binary tree, where node `i` has the
/// children `2i` and `2i + 1`. Each node holds the combination of its children under the
/// operation together with a pending tag that has not yet been pushed to them. Positions
/// past the initial values are padded with a caller supplied default, which should not
/// change the result of the operation (for example `+inf` for `min`).
///
/// # Examples
///
/// Quickly add something to every value in some interval.
///
/// ```rust
/// use ixtree::LazySegmentTree;
/// use ixtree::ops::Min;
///
/// let mut tree = LazySegmentTree::with_identity(vec![1i64, 2, 3, 4], Min);
///
/// // add five to every value in [0, 2)
/// tree.range_add(0, 2, 5).unwrap();
/// assert_eq!(tree.point_query(0).unwrap(), 6);
/// assert_eq!(tree.point_query(1).unwrap(), 7);
/// assert_eq!(tree.point_query(2).unwrap(), 3);
/// assert_eq!(tree.point_query(3).unwrap(), 4);
///
/// // minimum over [0, 3)
/// assert_eq!(tree.range_query(0, 3).unwrap(), Some(3));
/// assert_eq!(tree.root(), &3);
/// ```
pub struct LazySegmentTree<N, O>
where
    O: Operation<N>,
{
    buf: Vec<N>,
    tags: Vec<N>,
    n: usize,
    sz: usize,
    op: O,
}

impl<N: Delta, O: Operation<N>> LazySegmentTree<N, O> {
    /// Builds a tree from the given values, padding the remaining leaves with `default`.
    /// Uses `O(len)` time.
    pub fn build(values: Vec<N>, default: N, op: O) -> LazySegmentTree<N, O> {
        let n = values.len();
        let sz = n.next_power_of_two();

        let mut buf = Vec::with_capacity(2 * sz);
        buf.resize(sz, default.clone());
        buf.extend(values);
        buf.resize(2 * sz, default);
        for i in (1..sz).rev() {
            buf[i] = op.combine(&buf[i << 1], &buf[i << 1 | 1]);
        }

        let mut tags = Vec::with_capacity(2 * sz);
        tags.resize(2 * sz, N::zero());

        log::trace!("built lazy segment tree with {n} values over {sz} leaves");
        LazySegmentTree {
            buf,
            tags,
            n,
            sz,
            op,
        }
    }
    /// Allocate a new buffer and build the tree using the values in the slice.
    /// Uses `O(len)` time.
    pub fn build_slice(values: &[N], default: N, op: O) -> LazySegmentTree<N, O> {
        LazySegmentTree::build(values.to_vec(), default, op)
    }
    /// Build the tree using the values in the iterator.
    /// Uses `O(len)` time.
    pub fn build_iter<I: IntoIterator<Item = N>>(
        iter: I,
        default: N,
        op: O,
    ) -> LazySegmentTree<N, O> {
        LazySegmentTree::build(iter.into_iter().collect(), default, op)
    }
    /// Builds a tree padded with the identity of the operation.
    /// Uses `O(len)` time.
    pub fn with_identity(values: Vec<N>, op: O) -> LazySegmentTree<N, O>
    where
        O: Identity<N>,
    {
        let default = op.identity();
        LazySegmentTree::build(values, default, op)
    }

    /// Add `delta` to every value in the interval `[l, r)`.
    ///
    /// An empty interval (`r <= l`) or a zero delta leaves the tree untouched. A non-empty
    /// interval reaching past [`len`](Self::len) is rejected, so the padding leaves keep
    /// their default.
    /// Uses `O(log(len))` time.
    pub fn range_add(&mut self, l: usize, r: usize, delta: N) -> Result<(), Error> {
        if r <= l {
            return Ok(());
        }
        Error::check_index(r - 1, self.n)?;
        if delta.is_zero() {
            return Ok(());
        }
        self.add(l, r, &delta, 1, 0, self.sz);
        Ok(())
    }

    fn add(&mut self, l: usize, r: usize, delta: &N, i: usize, il: usize, ir: usize) {
        if r <= il || ir <= l {
            return;
        }
        if l <= il && ir <= r {
            self.buf[i].apply(delta);
            self.tags[i].apply(delta);
            return;
        }
        self.push(i);
        let m = (il + ir) / 2;
        self.add(l, r, delta, i << 1, il, m);
        self.add(l, r, delta, i << 1 | 1, m, ir);
        self.buf[i] = self.op.combine(&self.buf[i << 1], &self.buf[i << 1 | 1]);
    }

    /// Computes the value at `p`, which may be any position below
    /// [`capacity`](Self::capacity).
    /// Uses `O(log(len))` time.
    pub fn point_query(&mut self, p: usize) -> Result<N, Error> {
        Error::check_index(p, self.sz)?;
        let (mut i, mut il, mut ir) = (1, 0, self.sz);
        while ir - il > 1 {
            self.push(i);
            let m = (il + ir) / 2;
            if p < m {
                i <<= 1;
                ir = m;
            } else {
                i = i << 1 | 1;
                il = m;
            }
        }
        Ok(self.buf[i].clone())
    }

    /// Combines every value in `[l, r)`, returning `None` for an empty interval.
    ///
    /// Pending tags are added to whole nodes, so the result is only meaningful for
    /// operations where `combine(a + v, b + v) = combine(a, b) + v`, such as [`Min`] and
    /// [`Max`].
    /// Uses `O(log(len))` time.
    ///
    /// [`Min`]: crate::ops::Min
    /// [`Max`]: crate::ops::Max
    pub fn range_query(&mut self, l: usize, r: usize) -> Result<Option<N>, Error> {
        if r <= l {
            return Ok(None);
        }
        Error::check_index(r - 1, self.sz)?;
        Ok(self.query(l, r, 1, 0, self.sz))
    }

    fn query(&mut self, l: usize, r: usize, i: usize, il: usize, ir: usize) -> Option<N> {
        if r <= il || ir <= l {
            return None;
        }
        if l <= il && ir <= r {
            return Some(self.buf[i].clone());
        }
        self.push(i);
        let m = (il + ir) / 2;
        match (
            self.query(l, r, i << 1, il, m),
            self.query(l, r, i << 1 | 1, m, ir),
        ) {
            (Some(a), Some(b)) => Some(self.op.combine_left(a, &b)),
            (a, b) => a.or(b),
        }
    }

    /// Moves the pending tag of node `i` into its children.
    #[inline]
    fn push(&mut self, i: usize) {
        if self.tags[i].is_zero() {
            return;
        }
        let tag = mem::replace(&mut self.tags[i], N::zero());
        for child in [i << 1, i << 1 | 1] {
            self.buf[child].apply(&tag);
            self.tags[child].apply(&tag);
        }
    }

    /// Propagate all pending tags to the leaves and return a slice containing the first
    /// [`len`](Self::len) leaves.
    ///
    /// Uses `O(len)` time.
    pub fn propagate(&mut self) -> &[N] {
        for i in 1..self.sz {
            self.push(i);
        }
        &self.buf[self.sz..self.sz + self.n]
    }
}

impl<N, O: Operation<N>> LazySegmentTree<N, O> {
    /// The combination of every leaf, padding included. Uses `O(1)` time.
    #[inline]
    pub fn root(&self) -> &N {
        &self.buf[1]
    }
    /// Returns the number of values the tree was built from.
    /// Uses `O(1)` time.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.n
    }
    /// Returns `true` if the tree was built from no values.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    /// Returns the number of leaves, the smallest power of two not below [`len`](Self::len).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.sz
    }
}

impl<N: Clone, O: Operation<N> + Clone> Clone for LazySegmentTree<N, O> {
    #[inline]
    fn clone(&self) -> LazySegmentTree<N, O> {
        LazySegmentTree {
            buf: self.buf.clone(),
            tags: self.tags.clone(),
            n: self.n,
            sz: self.sz,
            op: self.op.clone(),
        }
    }
}
