//! # Traced Diagrams
//!
//! String diagrams for traced monoidal categories: morphisms where outputs
//! can feed back into inputs.
//!
//! ```text
//!        ┌──────────────────┐
//!        │   ┌───┐          │
//!        └───│   │──────────┘
//!            │ f │
//!        ────│   │──────────
//!            └───┘
//! ```
//!
//! A [Diagram](crate::diagram::Diagram) is a list of layers over generating
//! objects `O` and boxes `B`: each layer places a box, a symmetry, or a
//! trace bubble at a horizontal offset. `trace` bends the outermost output
//! wire on a chosen side back into the corresponding input wire:
//!
//! ```rust
//! use traced_diagrams::prelude::*;
//!
//! let x = Ty::object("x");
//! let f = Generator::new("f", x.tensor(&x), x.tensor(&x));
//! let traced = Diagram::from(f).trace(1, false).unwrap();
//! assert_eq!(traced.dom(), &x);
//! assert_eq!(traced.cod(), &x);
//! assert_eq!(traced.to_string(), "Trace(f)");
//! ```
//!
//! # Equality
//!
//! `Diagram` equality is structural: two diagrams are equal when built by
//! the same sequence of operations. For *symmetric* traced diagrams the
//! traced axioms (vanishing, superposing, yanking, naturality,
//! dinaturality) can be decided by translation to a wire-connectivity
//! [Hypergraph](crate::hypergraph::Hypergraph); see
//! [Diagram::hypergraph_equality](crate::diagram::Diagram::hypergraph_equality).
//! Equality of general planar traced diagrams is not implemented.
//!
//! # Functors
//!
//! A [Functor](crate::functor::Functor) interprets diagrams in any codomain
//! [Category](crate::category::Category) whose arrows implement
//! [Traced](crate::category::Traced): trace operators are pushed through
//! the mapping by counting traced wires *after* applying the object map,
//! then asking the codomain's arrow type for the corresponding trace.

pub mod category;
pub mod diagram;
pub mod functor;
pub mod hypergraph;
pub mod ty;

mod drawing;
mod union_find;

pub mod prelude {
    //! Re-exports of the main types and traits.
    pub use crate::category::{
        Arrow, Category, Dagger, Free, Monoidal, Objects, SymmetricMonoidal, Traced,
    };
    pub use crate::diagram::{Boundary, Diagram, DiagramError, Generator, Layer, Term, Trace};
    pub use crate::functor::{Functor, FunctorError, Identity};
    pub use crate::hypergraph::{EqualityError, Hyperedge, Hypergraph, NodeId};
    pub use crate::ty::Ty;
}
