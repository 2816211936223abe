#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    error::{Error, Precondition},
    ops::{Add, Commutative, Identity, Invertible},
};

/// This data structure allows prefix queries and single element modification.
///
/// This tree allocates `(n + 1) * sizeof(N)` bytes of memory.
///
/// This data structure is implemented using a [Fenwick tree][1], which is also known as a
/// binary indexed tree. Slot `0` of the buffer is unused so that the tree can be walked
/// with the usual 1-indexed bit tricks.
///
/// When every applied delta is non-negative the tree describes a multiset of counts and
/// [`kth`](Self::kth) finds the index holding the `k`-th smallest element.
///
/// # Examples
///
/// ```rust
/// use ixtree::FenwickTree;
///
/// let mut counts = FenwickTree::new(5);
/// for i in 0..5 {
///     counts.update(i, 1u32).unwrap();
/// }
/// counts.update(1, 2).unwrap();
///
/// assert_eq!(counts.prefix_sum(4).unwrap(), 7);
/// assert_eq!(counts.range_sum(1, 3).unwrap(), 4);
/// assert_eq!(counts.kth(3).unwrap(), 1);
/// assert_eq!(counts.kth(5).unwrap(), 2);
/// ```
///
/// [1]: https://en.wikipedia.org/wiki/Fenwick_tree
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFenwickTree<N, O>"))]
#[derive(Clone, Debug)]
pub struct FenwickTree<N, O = Add>
where
    O: Commutative<N> + Identity<N>,
{
    buf: Vec<N>,
    negative: bool,
    op: O,
}

/// Unchecked serialized form of a [`FenwickTree`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFenwickTree<N, O> {
    buf: Vec<N>,
    negative: bool,
    op: O,
}

#[cfg(feature = "serde")]
impl<N, O> TryFrom<RawFenwickTree<N, O>> for FenwickTree<N, O>
where
    O: Commutative<N> + Identity<N>,
{
    type Error = &'static str;

    fn try_from(raw: RawFenwickTree<N, O>) -> Result<Self, Self::Error> {
        // slot 0 is always present
        if raw.buf.is_empty() {
            return Err("fenwick tree buffer is missing its unused slot");
        }
        Ok(FenwickTree {
            buf: raw.buf,
            negative: raw.negative,
            op: raw.op,
        })
    }
}

/// Returns the least significant bit that is one.
#[inline(always)]
fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl<N> FenwickTree<N, Add>
where
    N: Clone + PartialOrd,
    Add: Commutative<N> + Identity<N>,
{
    /// Creates a tree of `n` zeroes.
    /// Uses `O(n)` time.
    pub fn new(n: usize) -> Self {
        FenwickTree::with_op(n, Add)
    }
}

impl<N, O> FenwickTree<N, O>
where
    N: Clone + PartialOrd,
    O: Commutative<N> + Identity<N>,
{
    /// Creates a tree of `n` identities of `op`.
    /// Uses `O(n)` time.
    pub fn with_op(n: usize, op: O) -> Self {
        let mut buf = Vec::with_capacity(n + 1);
        buf.resize(n + 1, op.identity());
        log::trace!("built fenwick tree with {n} slots");
        FenwickTree {
            buf,
            negative: false,
            op,
        }
    }
    /// Returns the number of values in this tree.
    /// Uses `O(1)` time.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }
    /// Returns `true` if the tree has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns `true` if a delta below the identity has ever been applied, in which case
    /// [`kth`](Self::kth) refuses to answer.
    #[inline]
    pub fn has_negative(&self) -> bool {
        self.negative
    }

    /// Combine the value at `i` with `delta`.
    /// Uses `O(log(len))` time.
    pub fn update(&mut self, i: usize, delta: N) -> Result<(), Error> {
        let n = self.len();
        Error::check_index(i, n)?;
        if delta < self.op.identity() {
            self.negative = true;
        }
        let mut idx = i + 1;
        while idx <= n {
            self.op.combine_mut(&mut self.buf[idx], &delta);
            idx += lsb(idx);
        }
        Ok(())
    }

    /// Computes `a[0] + a[1] + ... + a[i]`.  Note that `i` is inclusive.
    /// Uses `O(log(i))` time.
    pub fn prefix_sum(&self, i: usize) -> Result<N, Error> {
        Error::check_index(i, self.len())?;
        Ok(self.prefix(i + 1))
    }

    /// Sum of the first `idx` values.
    fn prefix(&self, mut idx: usize) -> N {
        let mut sum = self.op.identity();
        while idx > 0 {
            sum = self.op.combine_left(sum, &self.buf[idx]);
            idx -= lsb(idx);
        }
        sum
    }

    /// Sum of every value in the tree.
    /// Uses `O(log(len))` time.
    pub fn total(&self) -> N {
        self.prefix(self.len())
    }
}

impl<N, O> FenwickTree<N, O>
where
    N: Clone + PartialOrd,
    O: Commutative<N> + Identity<N> + Invertible<N>,
{
    /// Computes `a[l] + ... + a[r - 1]`, which is the identity if `r <= l`.
    /// Uses `O(log(len))` time.
    pub fn range_sum(&self, l: usize, r: usize) -> Result<N, Error> {
        if r <= l {
            return Ok(self.op.identity());
        }
        Error::check_index(r - 1, self.len())?;
        let mut sum = self.prefix(r);
        self.op.uncombine(&mut sum, &self.prefix(l));
        Ok(sum)
    }

    /// Returns the value at `i`.
    /// Uses `O(log(len))` time.
    pub fn get(&self, i: usize) -> Result<N, Error> {
        Error::check_index(i, self.len())?;
        self.range_sum(i, i + 1)
    }

    /// Returns the smallest index `idx` such that `a[0] + ... + a[idx] >= k`.
    ///
    /// The tree is read as a multiset of counts, so this is the index holding the `k`-th
    /// smallest element. The answer is only defined when no negative delta has been
    /// applied and `k` lies in `(0, total]`; otherwise a [`Precondition`] error is
    /// returned.
    /// Uses `O(log(len))` time.
    pub fn kth(&self, k: N) -> Result<usize, Error> {
        if self.negative {
            log::debug!("kth query on a fenwick tree holding negative counts");
            return Err(Precondition::NegativeCount.into());
        }
        let n = self.len();
        if k <= self.op.identity() || k > self.total() {
            log::debug!("kth query with a rank outside [1, total]");
            return Err(Precondition::RankOutOfRange.into());
        }

        // n > 0 here, otherwise the total is the identity and k was rejected.
        let mut bit = 1usize << (usize::BITS - 1 - n.leading_zeros());
        let mut pos = 0;
        let mut rem = k;
        while bit > 0 {
            let next = pos + bit;
            if next <= n && self.buf[next] < rem {
                pos = next;
                self.op.uncombine(&mut rem, &self.buf[next]);
            }
            bit >>= 1;
        }
        Ok(pos)
    }
}
