//! Ordered sequences of generating objects.

use core::fmt;
use core::ops::{BitOr, Index};

use crate::category::Objects;

/// An object of a free monoidal category: an ordered sequence of generating
/// object labels. Tensor is concatenation; slicing strips wires from either
/// end. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ty<O>(Vec<O>);

impl<O> Ty<O> {
    pub fn new(objects: Vec<O>) -> Self {
        Ty(objects)
    }

    /// The monoidal unit: the empty sequence.
    pub fn empty() -> Self {
        Ty(Vec::new())
    }

    /// The singleton sequence on one generating object.
    pub fn object(x: O) -> Self {
        Ty(vec![x])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, O> {
        self.0.iter()
    }

    pub fn front(&self) -> Option<&O> {
        self.0.first()
    }

    pub fn back(&self) -> Option<&O> {
        self.0.last()
    }
}

impl<O: Clone> Ty<O> {
    /// Concatenation: `self ⊗ other`.
    pub fn tensor(&self, other: &Self) -> Self {
        let mut objects = self.0.clone();
        objects.extend(other.0.iter().cloned());
        Ty(objects)
    }

    /// All but the first `n` objects.
    pub fn strip_front(&self, n: usize) -> Self {
        Ty(self.0.get(n..).unwrap_or(&[]).to_vec())
    }

    /// All but the last `n` objects.
    pub fn strip_back(&self, n: usize) -> Self {
        let keep = self.0.len().saturating_sub(n);
        Ty(self.0[..keep].to_vec())
    }

    /// The first `n` objects.
    pub fn take_front(&self, n: usize) -> Self {
        Ty(self.0.get(..n.min(self.0.len())).unwrap_or(&[]).to_vec())
    }

    /// The last `n` objects.
    pub fn take_back(&self, n: usize) -> Self {
        let skip = self.0.len().saturating_sub(n);
        Ty(self.0[skip..].to_vec())
    }
}

impl<O> Index<usize> for Ty<O> {
    type Output = O;

    fn index(&self, index: usize) -> &O {
        &self.0[index]
    }
}

impl<O> From<Vec<O>> for Ty<O> {
    fn from(objects: Vec<O>) -> Self {
        Ty(objects)
    }
}

impl<O> FromIterator<O> for Ty<O> {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Ty(iter.into_iter().collect())
    }
}

impl<O> IntoIterator for Ty<O> {
    type Item = O;
    type IntoIter = std::vec::IntoIter<O>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<O: Clone + PartialEq> Objects for Ty<O> {
    fn empty() -> Self {
        Ty::empty()
    }

    fn tensor(&self, other: &Self) -> Self {
        Ty::tensor(self, other)
    }

    fn len(&self) -> usize {
        Ty::len(self)
    }
}

// Syntactic sugar for the tensor product of types.
impl<O: Clone> BitOr<&Ty<O>> for &Ty<O> {
    type Output = Ty<O>;

    fn bitor(self, rhs: &Ty<O>) -> Ty<O> {
        self.tensor(rhs)
    }
}

impl<O: fmt::Display> fmt::Display for Ty<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "Ty()");
        }
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " @ ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}
