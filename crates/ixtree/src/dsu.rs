#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::mem;

use crate::error::Error;

/// A partition of `[0, n)` into disjoint sets that can only be merged.
///
/// Every slot either stores the parent of the element (non-negative) or, for the
/// representative of a set, the negated size of that set. [`find`](Self::find) halves the
/// path it walks and [`union`](Self::union) attaches the smaller set below the larger one,
/// which together keep both operations near constant time amortized.
///
/// # Examples
///
/// ```rust
/// use ixtree::DisjointSetUnion;
///
/// let mut dsu = DisjointSetUnion::new(4);
/// assert!(dsu.union(0, 1).unwrap());
/// assert!(!dsu.union(1, 0).unwrap());
/// assert_eq!(dsu.count(), 3);
/// assert_eq!(dsu.size(1).unwrap(), 2);
/// assert!(dsu.same(0, 1).unwrap());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDisjointSetUnion"))]
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    // parent if >= 0, negated set size if < 0
    link: Vec<isize>,
    count: usize,
}

/// Unchecked serialized form of a [`DisjointSetUnion`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDisjointSetUnion {
    link: Vec<isize>,
    count: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDisjointSetUnion> for DisjointSetUnion {
    type Error = &'static str;

    fn try_from(raw: RawDisjointSetUnion) -> Result<Self, Self::Error> {
        let RawDisjointSetUnion { link, count } = raw;
        let n = link.len();
        if link.iter().any(|&p| p >= 0 && p as usize >= n) {
            return Err("parent link out of range");
        }

        let mut members = Vec::with_capacity(n);
        members.resize(n, 0usize);
        for x in 0..n {
            let mut root = x;
            let mut steps = 0;
            while link[root] >= 0 {
                root = link[root] as usize;
                steps += 1;
                if steps > n {
                    return Err("cycle in parent links");
                }
            }
            members[root] += 1;
        }

        let mut roots = 0;
        for (x, &p) in link.iter().enumerate() {
            if p < 0 {
                roots += 1;
                if p.unsigned_abs() != members[x] {
                    return Err("set size does not match its members");
                }
            }
        }
        if roots != count {
            return Err("set count does not match the number of roots");
        }
        Ok(DisjointSetUnion { link, count })
    }
}

impl DisjointSetUnion {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        let mut link = Vec::with_capacity(n);
        link.resize(n, -1);
        log::trace!("built disjoint-set union over {n} elements");
        Self { link, count: n }
    }

    /// Number of elements in the universe.
    #[inline]
    pub fn len(&self) -> usize {
        self.link.len()
    }
    /// Returns `true` if the universe is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.link.is_empty()
    }
    /// Current number of disjoint sets.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> Result<usize, Error> {
        Error::check_index(x, self.len())?;
        Ok(self.root(x))
    }

    fn root(&mut self, mut x: usize) -> usize {
        while self.link[x] >= 0 {
            let parent = self.link[x] as usize;
            if self.link[parent] >= 0 {
                self.link[x] = self.link[parent];
            }
            x = self.link[x] as usize;
        }
        x
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if they already were the same set. On equal sizes the set of `b`
    /// is attached below the representative of `a`.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        Error::check_index(a, self.len())?;
        Error::check_index(b, self.len())?;
        let mut ra = self.root(a);
        let mut rb = self.root(b);
        if ra == rb {
            return Ok(false);
        }
        if self.link[ra] > self.link[rb] {
            mem::swap(&mut ra, &mut rb);
        }
        self.link[ra] += self.link[rb];
        self.link[rb] = ra as isize;
        self.count -= 1;
        Ok(true)
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    pub fn same(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Size of the set containing `x`.
    pub fn size(&mut self, x: usize) -> Result<usize, Error> {
        let root = self.find(x)?;
        Ok(self.link[root].unsigned_abs())
    }
}
