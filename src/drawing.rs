//! Expansion of traces into cap/cup wire-bending, for rendering only.

use core::fmt;

use crate::diagram::{Diagram, Term, Trace};
use crate::ty::Ty;

impl<O, B> Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    /// Rewrite every trace into an equivalent composite of its argument with
    /// cap and cup wire-bending boxes, recursively.
    ///
    /// A right trace becomes `dom ⊗ cap >> arg ⊗ wire >> cod ⊗ cup`; a left
    /// trace becomes `cap ⊗ dom >> wire ⊗ arg >> cup ⊗ cod`. This is a
    /// structural rewrite for drawing backends; it plays no part in
    /// equality.
    pub fn to_drawing(&self) -> Self {
        let mut result = Diagram::id(self.dom().clone());
        for layer in self.layers() {
            let block = match &layer.term {
                Term::Trace(tr) => expand(tr),
                term => Diagram::from_term(term.clone()),
            };
            let block = Diagram::id(layer.left.clone())
                .tensor(&block)
                .tensor(&Diagram::id(layer.right.clone()));
            result = result
                .compose(&block)
                .expect("drawing expansion preserves layer boundaries");
        }
        result
    }
}

fn expand<O, B>(trace: &Trace<O, B>) -> Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    let t = trace.traced_object().clone();
    let arg = trace.arg().to_drawing();
    let wire = Diagram::id(Ty::object(t.clone()));
    let cap = Diagram::cap(t.clone());
    let cup = Diagram::cup(t);
    let dom = Diagram::id(trace.dom().clone());
    let cod = Diagram::id(trace.cod().clone());
    let [first, second, third] = if trace.left() {
        [
            cap.tensor(&dom),
            wire.tensor(&arg),
            cup.tensor(&cod),
        ]
    } else {
        [
            dom.tensor(&cap),
            arg.tensor(&wire),
            cod.tensor(&cup),
        ]
    };
    first
        .compose(&second)
        .and_then(|d| d.compose(&third))
        .expect("trace expansion boundaries agree")
}
