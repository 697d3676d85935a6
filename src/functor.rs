//! Functors out of free traced categories.
//!
//! A [`Functor`] maps generating objects and boxes into some codomain
//! [`Category`] whose arrows are traced and symmetric; the application
//! algorithm [`Functor::map_arrow`] handles boxes, composition and tensor
//! generically, and pushes trace operators through the mapping by asking the
//! codomain's arrow type for the corresponding trace.

use core::fmt;

use thiserror::Error;

use crate::category::{Arrow, Category, Free, Monoidal, Objects, SymmetricMonoidal, Traced};
use crate::diagram::{Diagram, Generator, Term};
use crate::ty::Ty;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FunctorError {
    /// A generating box has no image under the functor.
    #[error("no image for box {0}")]
    UnmappedBox(String),

    /// Images of consecutive layers do not compose: the object map is
    /// inconsistent with the box map.
    #[error("image of {0} does not compose: object and box maps disagree on a boundary")]
    Composition(String),

    /// The mapped argument cannot be traced the requested number of wires.
    #[error("image of {name} cannot trace {wires} wires")]
    Untraceable { name: String, wires: usize },

    /// Wire-count bookkeeping after mapping is inconsistent: the traced
    /// boundary maps to more wires than the whole argument boundary.
    #[error("mapped trace boundary has {boundary} wires but the mapped argument has {arg}")]
    TraceWireCount { arg: usize, boundary: usize },

    /// cap and cup occur only in drawing output, on which functors are not
    /// defined.
    #[error("cannot apply a functor to drawing primitive {0}")]
    DrawingPrimitive(&'static str),
}

/// A structure-preserving map from diagrams over `(O, B)` into the arrows of
/// a codomain category `C`.
pub trait Functor<O, B, C: Category>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
    C::Arrow: Traced + SymmetricMonoidal,
{
    /// Image of a generating object. One object may map to any number of
    /// wires in the codomain.
    fn map_object(&self, object: &O) -> C::Object;

    /// Image of a generating box, or None if the box has no image.
    fn map_box(&self, generator: &Generator<O, B>) -> Option<C::Arrow>;

    /// Image of an object sequence: the pointwise tensor of object images.
    fn map_ty(&self, ty: &Ty<O>) -> C::Object {
        ty.iter().fold(C::Object::empty(), |acc, x| {
            acc.tensor(&self.map_object(x))
        })
    }

    /// Image of a single term.
    ///
    /// The trace case computes how many wires are being traced *after*
    /// mapping, since `map_object` may change wire multiplicities, then
    /// delegates to the codomain's [`Traced::trace`].
    fn map_term(&self, term: &Term<O, B>) -> Result<C::Arrow, FunctorError> {
        match term {
            Term::Box(g) => self
                .map_box(g)
                .ok_or_else(|| FunctorError::UnmappedBox(g.to_string())),
            Term::Swap(a, b) => Ok(C::Arrow::twist(&self.map_object(a), &self.map_object(b))),
            Term::Trace(tr) => {
                let arg = self.map_arrow(tr.arg())?;
                let total = arg.source().len();
                let boundary = self.map_ty(tr.dom()).len();
                let wires = total
                    .checked_sub(boundary)
                    .ok_or(FunctorError::TraceWireCount {
                        arg: total,
                        boundary,
                    })?;
                arg.trace(wires, tr.left())
                    .ok_or_else(|| FunctorError::Untraceable {
                        name: tr.to_string(),
                        wires,
                    })
            }
            Term::Cap(_) => Err(FunctorError::DrawingPrimitive("cap")),
            Term::Cup(_) => Err(FunctorError::DrawingPrimitive("cup")),
        }
    }

    /// Image of a diagram: each layer maps to
    /// `id(left) ⊗ image(term) ⊗ id(right)` and the results compose in
    /// order.
    ///
    /// # Errors
    ///
    /// Fails when a term has no image, or when the images fail to compose,
    /// which signals an inconsistent functor rather than an invalid diagram.
    fn map_arrow(&self, diagram: &Diagram<O, B>) -> Result<C::Arrow, FunctorError> {
        let mut result = C::Arrow::identity(&self.map_ty(diagram.dom()));
        for layer in diagram.layers() {
            let image = self.map_term(&layer.term)?;
            let block = C::Arrow::identity(&self.map_ty(&layer.left))
                .tensor(&image)
                .tensor(&C::Arrow::identity(&self.map_ty(&layer.right)));
            result = result
                .compose(&block)
                .ok_or_else(|| FunctorError::Composition(diagram.to_string()))?;
        }
        Ok(result)
    }
}

/// The identity functor, mapping every diagram to itself.
pub struct Identity;

impl<O, B> Functor<O, B, Free<O, B>> for Identity
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn map_object(&self, object: &O) -> Ty<O> {
        Ty::object(object.clone())
    }

    fn map_box(&self, generator: &Generator<O, B>) -> Option<Diagram<O, B>> {
        Some(Diagram::from(generator.clone()))
    }
}
