//! Traits for the categorical structure of diagrams.

use core::marker::PhantomData;

use crate::diagram::Diagram;
use crate::ty::Ty;

/// Objects of a monoidal category: finite sequences of generating objects,
/// i.e. a free monoid with a wire count.
pub trait Objects: Sized + Clone + PartialEq {
    /// the empty sequence (monoidal unit)
    fn empty() -> Self;

    /// concatenation of object sequences
    fn tensor(&self, other: &Self) -> Self;

    /// number of wires in the sequence
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Wire counting alone is also a valid notion of object.
impl Objects for usize {
    fn empty() -> Self {
        0
    }

    fn tensor(&self, other: &Self) -> Self {
        self + other
    }

    fn len(&self) -> usize {
        *self
    }
}

pub trait Arrow: Sized {
    type Object: Objects;

    fn source(&self) -> Self::Object;
    fn target(&self) -> Self::Object;

    /// the identity morphism on `a`
    fn identity(a: &Self::Object) -> Self;

    /// Compose morphisms in diagrammatic order: `self ; other`
    ///
    /// # Errors
    ///
    /// Returns None if `self.target() != other.source()`.
    fn compose(&self, other: &Self) -> Option<Self>;
}

pub trait Monoidal: Arrow {
    /// the monoidal unit
    fn unit() -> Self::Object {
        Objects::empty()
    }

    /// `f ⊗ g` of two morphisms
    fn tensor(&self, other: &Self) -> Self;
}

pub trait SymmetricMonoidal: Monoidal {
    /// Construct the symmetry `σ_{a,b}` from `a` and `b`.
    fn twist(a: &Self::Object, b: &Self::Object) -> Self;
}

pub trait Dagger: Arrow {
    /// Reverse a morphism in time.
    fn dagger(&self) -> Self;
}

/// A traced monoidal category: outputs can feed back into inputs.
pub trait Traced: Monoidal {
    /// Feed the outermost `n` output wires on the chosen side back into the
    /// corresponding input wires.
    ///
    /// # Errors
    ///
    /// Returns None if `self` cannot be traced `n` wires on that side.
    fn trace(&self, n: usize, left: bool) -> Option<Self>;
}

/// A category names an object type together with an arrow type over it.
/// Used to name the codomain of a [`Functor`](crate::functor::Functor).
pub trait Category {
    type Object: Objects;
    type Arrow: Arrow<Object = Self::Object>;
}

/// The free traced category on generating objects `O` and boxes `B`: objects
/// are [`Ty<O>`] and arrows are [`Diagram<O, B>`].
pub struct Free<O, B>(PhantomData<(O, B)>);

impl<O, B> Category for Free<O, B>
where
    O: Clone + PartialEq + core::fmt::Display,
    B: Clone + PartialEq + core::fmt::Display,
{
    type Object = Ty<O>;
    type Arrow = Diagram<O, B>;
}
