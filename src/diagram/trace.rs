//! The trace box: a diagram with an output wire fed back into an input.

use core::fmt;

use super::{Diagram, DiagramError};
use crate::ty::Ty;

/// A diagram `arg` with its outermost output wire on the chosen side bent
/// back into the corresponding input wire.
///
/// A trace plays two roles at once: it is a box of the traced category, with
/// a boundary and a display name, and it is a bubble wrapping the
/// sub-diagram reachable through [`Trace::arg`].
///
/// Constructed only through [`Trace::new`] (usually via
/// [`Diagram::trace`]), which checks that `arg` is traceable for one wire.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace<O, B> {
    arg: Diagram<O, B>,
    left: bool,
    dom: Ty<O>,
    cod: Ty<O>,
}

impl<O, B> Trace<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    /// Bend the outermost output wire of `arg` on the chosen side back into
    /// its input.
    ///
    /// # Errors
    ///
    /// Fails with [`DiagramError::NothingToTrace`] when `arg` has no wire on
    /// that side of its domain or codomain, and with
    /// [`DiagramError::TracedWireMismatch`] when the two wires carry
    /// different objects.
    pub fn new(arg: Diagram<O, B>, left: bool) -> Result<Self, DiagramError> {
        let (input, output) = if left {
            (arg.dom().front(), arg.cod().front())
        } else {
            (arg.dom().back(), arg.cod().back())
        };
        match (input, output) {
            (Some(i), Some(o)) if i == o => {}
            (Some(i), Some(o)) => {
                return Err(DiagramError::TracedWireMismatch {
                    name: arg.to_string(),
                    dom: i.to_string(),
                    cod: o.to_string(),
                })
            }
            _ => {
                return Err(DiagramError::NothingToTrace {
                    side: if left { "left" } else { "right" },
                    name: arg.to_string(),
                })
            }
        }
        let (dom, cod) = if left {
            (arg.dom().strip_front(1), arg.cod().strip_front(1))
        } else {
            (arg.dom().strip_back(1), arg.cod().strip_back(1))
        };
        Ok(Trace {
            arg,
            left,
            dom,
            cod,
        })
    }

    /// The wrapped sub-diagram.
    pub fn arg(&self) -> &Diagram<O, B> {
        &self.arg
    }

    /// Whether the first (`true`) or last (`false`) wire is traced.
    pub fn left(&self) -> bool {
        self.left
    }

    pub fn dom(&self) -> &Ty<O> {
        &self.dom
    }

    pub fn cod(&self) -> &Ty<O> {
        &self.cod
    }

    /// The object carried by the fed-back wire.
    pub fn traced_object(&self) -> &O {
        let wire = if self.left {
            self.arg.dom().front()
        } else {
            self.arg.dom().back()
        };
        wire.expect("a trace always has a traced wire")
    }

    /// Tracing commutes with the adjoint: `Trace(arg, left)† = Trace(arg†, left)`.
    pub fn dagger(&self) -> Self {
        // The dagger of `arg` swaps its boundary, so traceability holds.
        Trace {
            arg: self.arg.dagger(),
            left: self.left,
            dom: self.cod.clone(),
            cod: self.dom.clone(),
        }
    }
}

impl<O, B> super::Boundary<O> for Trace<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn dom(&self) -> Ty<O> {
        self.dom.clone()
    }

    fn cod(&self) -> Ty<O> {
        self.cod.clone()
    }
}

impl<O, B> fmt::Display for Trace<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.left {
            write!(f, "Trace({}, left=True)", self.arg)
        } else {
            write!(f, "Trace({})", self.arg)
        }
    }
}

impl<O, B> Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    /// Feed `n` outputs back into inputs.
    ///
    /// Tracing zero wires is the identity (vanishing); for `n > 0` a single
    /// [`Trace`] wraps the diagram and the remaining `n - 1` wires are
    /// traced on the result, so `f.trace(2, l) == f.trace(1, l).trace(1, l)`.
    ///
    /// # Errors
    ///
    /// Fails like [`Trace::new`] when some step is not traceable.
    pub fn trace(&self, n: usize, left: bool) -> Result<Self, DiagramError> {
        if n == 0 {
            return Ok(self.clone());
        }
        let traced = Diagram::from(Trace::new(self.clone(), left)?);
        traced.trace(n - 1, left)
    }
}
