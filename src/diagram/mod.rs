//! Monoidal diagrams as ordered sequences of layers.
//!
//! A [`Diagram`] is a morphism of a free traced monoidal category: a domain
//! and codomain [`Ty`] together with a list of [`Layer`]s, each placing one
//! [`Term`] at a horizontal offset given by identity wires on either side.

use core::fmt;
use core::ops::{BitOr, Shr};

use thiserror::Error;

use crate::category::{Arrow, Dagger, Monoidal, SymmetricMonoidal, Traced};
use crate::ty::Ty;

mod trace;
pub use trace::Trace;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// `cod(f) != dom(g)` at a sequential composition.
    #[error("cannot compose: codomain {cod} does not match domain {dom}")]
    Composition { cod: String, dom: String },

    /// A layer boundary does not chain with the previous one.
    #[error("invalid layer {index}: expected domain {expected}, found {found}")]
    InvalidLayer {
        index: usize,
        expected: String,
        found: String,
    },

    /// No wire to bend on the requested side.
    #[error("{name} is not traceable: no wire on the {side}")]
    NothingToTrace { side: &'static str, name: String },

    /// The traced input and output wires carry different objects.
    #[error("{name} is not traceable: input wire {dom} does not match output wire {cod}")]
    TracedWireMismatch {
        name: String,
        dom: String,
        cod: String,
    },
}

/// Anything with a well-defined input and output boundary.
pub trait Boundary<O> {
    fn dom(&self) -> Ty<O>;
    fn cod(&self) -> Ty<O>;
}

/// An atomic box: a label with a domain and codomain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generator<O, B> {
    pub label: B,
    pub dom: Ty<O>,
    pub cod: Ty<O>,
    pub daggered: bool,
}

impl<O, B> Generator<O, B> {
    pub fn new(label: B, dom: Ty<O>, cod: Ty<O>) -> Self {
        Generator {
            label,
            dom,
            cod,
            daggered: false,
        }
    }
}

impl<O: Clone, B: Clone> Generator<O, B> {
    /// The adjoint box: domain and codomain swap, and the dagger marker
    /// toggles so that `dagger` is involutive.
    pub fn dagger(&self) -> Self {
        Generator {
            label: self.label.clone(),
            dom: self.cod.clone(),
            cod: self.dom.clone(),
            daggered: !self.daggered,
        }
    }
}

impl<O: Clone, B> Boundary<O> for Generator<O, B> {
    fn dom(&self) -> Ty<O> {
        self.dom.clone()
    }

    fn cod(&self) -> Ty<O> {
        self.cod.clone()
    }
}

impl<O, B: fmt::Display> fmt::Display for Generator<O, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if self.daggered {
            write!(f, "†")?;
        }
        Ok(())
    }
}

/// The contents of a single layer. Dispatch over diagram shapes is an
/// exhaustive match on this union.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term<O, B> {
    /// An atomic generating box.
    Box(Generator<O, B>),
    /// The symmetry on a pair of generating objects.
    Swap(O, O),
    /// Wire-bending: create a matched pair of wires from nothing.
    /// Produced only by the drawing expansion of a trace.
    Cap(O),
    /// Wire-bending: annihilate a matched pair of wires.
    /// Produced only by the drawing expansion of a trace.
    Cup(O),
    /// A sub-diagram with an output wire fed back into an input.
    Trace(Box<Trace<O, B>>),
}

impl<O, B> Term<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    pub fn dagger(&self) -> Self {
        match self {
            Term::Box(g) => Term::Box(g.dagger()),
            Term::Swap(a, b) => Term::Swap(b.clone(), a.clone()),
            Term::Cap(t) => Term::Cup(t.clone()),
            Term::Cup(t) => Term::Cap(t.clone()),
            Term::Trace(tr) => Term::Trace(Box::new(tr.dagger())),
        }
    }
}

impl<O, B> Boundary<O> for Term<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn dom(&self) -> Ty<O> {
        match self {
            Term::Box(g) => g.dom.clone(),
            Term::Swap(a, b) => Ty::new(vec![a.clone(), b.clone()]),
            Term::Cap(_) => Ty::empty(),
            Term::Cup(t) => Ty::new(vec![t.clone(), t.clone()]),
            Term::Trace(tr) => tr.dom().clone(),
        }
    }

    fn cod(&self) -> Ty<O> {
        match self {
            Term::Box(g) => g.cod.clone(),
            Term::Swap(a, b) => Ty::new(vec![b.clone(), a.clone()]),
            Term::Cap(t) => Ty::new(vec![t.clone(), t.clone()]),
            Term::Cup(_) => Ty::empty(),
            Term::Trace(tr) => tr.cod().clone(),
        }
    }
}

impl<O, B> fmt::Display for Term<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Box(g) => write!(f, "{g}"),
            Term::Swap(a, b) => write!(f, "Swap({a}, {b})"),
            Term::Cap(_) => write!(f, "cap"),
            Term::Cup(_) => write!(f, "cup"),
            Term::Trace(tr) => write!(f, "{tr}"),
        }
    }
}

/// One term placed at a horizontal offset: identity wires `left` and `right`
/// whisker the term on either side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer<O, B> {
    pub left: Ty<O>,
    pub term: Term<O, B>,
    pub right: Ty<O>,
}

impl<O, B> Layer<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    pub fn new(left: Ty<O>, term: Term<O, B>, right: Ty<O>) -> Self {
        Layer { left, term, right }
    }

    pub fn dagger(&self) -> Self {
        Layer {
            left: self.left.clone(),
            term: self.term.dagger(),
            right: self.right.clone(),
        }
    }
}

impl<O, B> Boundary<O> for Layer<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn dom(&self) -> Ty<O> {
        self.left.tensor(&self.term.dom()).tensor(&self.right)
    }

    fn cod(&self) -> Ty<O> {
        self.left.tensor(&self.term.cod()).tensor(&self.right)
    }
}

impl<O, B> fmt::Display for Layer<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.left.is_empty() {
            write!(f, "{} @ ", self.left)?;
        }
        write!(f, "{}", self.term)?;
        if !self.right.is_empty() {
            write!(f, " @ {}", self.right)?;
        }
        Ok(())
    }
}

/// A morphism of the free traced monoidal category on generating objects `O`
/// and boxes `B`.
///
/// Layer boundaries chain: the domain of each layer equals the codomain of
/// the previous one. [`Diagram::new`] checks this; all other constructors
/// preserve it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagram<O, B> {
    dom: Ty<O>,
    cod: Ty<O>,
    layers: Vec<Layer<O, B>>,
}

impl<O, B> Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    /// The identity diagram on `dom`: no layers.
    pub fn id(dom: Ty<O>) -> Self {
        Diagram {
            cod: dom.clone(),
            dom,
            layers: Vec::new(),
        }
    }

    /// Build a diagram from explicit layers, checking that boundaries chain.
    pub fn new(dom: Ty<O>, cod: Ty<O>, layers: Vec<Layer<O, B>>) -> Result<Self, DiagramError> {
        let mut boundary = dom.clone();
        for (index, layer) in layers.iter().enumerate() {
            let found = layer.dom();
            if found != boundary {
                return Err(DiagramError::InvalidLayer {
                    index,
                    expected: boundary.to_string(),
                    found: found.to_string(),
                });
            }
            boundary = layer.cod();
        }
        if boundary != cod {
            return Err(DiagramError::InvalidLayer {
                index: layers.len(),
                expected: cod.to_string(),
                found: boundary.to_string(),
            });
        }
        Ok(Diagram { dom, cod, layers })
    }

    pub(crate) fn from_term(term: Term<O, B>) -> Self {
        let dom = term.dom();
        let cod = term.cod();
        Diagram {
            dom,
            cod,
            layers: vec![Layer::new(Ty::empty(), term, Ty::empty())],
        }
    }

    /// The elementary symmetry on a pair of generating objects.
    pub fn swap(a: O, b: O) -> Self {
        Self::from_term(Term::Swap(a, b))
    }

    /// The wire-bending box `cap : Ty() → t ⊗ t`. Drawing only.
    pub fn cap(t: O) -> Self {
        Self::from_term(Term::Cap(t))
    }

    /// The wire-bending box `cup : t ⊗ t → Ty()`. Drawing only.
    pub fn cup(t: O) -> Self {
        Self::from_term(Term::Cup(t))
    }

    pub fn dom(&self) -> &Ty<O> {
        &self.dom
    }

    pub fn cod(&self) -> &Ty<O> {
        &self.cod
    }

    pub fn layers(&self) -> &[Layer<O, B>] {
        &self.layers
    }

    /// Sequential composition in diagrammatic order: `self >> other`.
    ///
    /// # Errors
    ///
    /// Fails with [`DiagramError::Composition`] when `self.cod() != other.dom()`.
    pub fn compose(&self, other: &Self) -> Result<Self, DiagramError> {
        if self.cod != other.dom {
            return Err(DiagramError::Composition {
                cod: self.cod.to_string(),
                dom: other.dom.to_string(),
            });
        }
        let layers = self.layers.iter().chain(&other.layers).cloned().collect();
        Ok(Diagram {
            dom: self.dom.clone(),
            cod: other.cod.clone(),
            layers,
        })
    }

    /// Parallel composition: `self` above `other`. Layers of `self` are
    /// whiskered on the right by `other.dom()`, then layers of `other` on
    /// the left by `self.cod()`.
    pub fn tensor(&self, other: &Self) -> Self {
        let mut layers = Vec::with_capacity(self.layers.len() + other.layers.len());
        for layer in &self.layers {
            layers.push(Layer::new(
                layer.left.clone(),
                layer.term.clone(),
                layer.right.tensor(&other.dom),
            ));
        }
        for layer in &other.layers {
            layers.push(Layer::new(
                self.cod.tensor(&layer.left),
                layer.term.clone(),
                layer.right.clone(),
            ));
        }
        Diagram {
            dom: self.dom.tensor(&other.dom),
            cod: self.cod.tensor(&other.cod),
            layers,
        }
    }

    /// Time-reversal: layers in reverse order, each term daggered.
    pub fn dagger(&self) -> Self {
        Diagram {
            dom: self.cod.clone(),
            cod: self.dom.clone(),
            layers: self.layers.iter().rev().map(Layer::dagger).collect(),
        }
    }
}

// Cross a single wire over the type `b` with successive elementary swaps.
fn cross<O, B>(x: &O, b: &Ty<O>) -> Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    let mut layers = Vec::with_capacity(b.len());
    for i in 0..b.len() {
        layers.push(Layer::new(
            b.take_front(i),
            Term::Swap(x.clone(), b[i].clone()),
            b.strip_front(i + 1),
        ));
    }
    Diagram {
        dom: Ty::object(x.clone()).tensor(b),
        cod: b.tensor(&Ty::object(x.clone())),
        layers,
    }
}

impl<O, B> From<Generator<O, B>> for Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn from(generator: Generator<O, B>) -> Self {
        Diagram::from_term(Term::Box(generator))
    }
}

impl<O, B> From<Trace<O, B>> for Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn from(trace: Trace<O, B>) -> Self {
        Diagram::from_term(Term::Trace(Box::new(trace)))
    }
}

impl<O, B> Boundary<O> for Diagram<O, B>
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

impl<O, B> Arrow for Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    type Object = Ty<O>;

    fn source(&self) -> Ty<O> {
        self.dom.clone()
    }

    fn target(&self) -> Ty<O> {
        self.cod.clone()
    }

    fn identity(a: &Ty<O>) -> Self {
        Diagram::id(a.clone())
    }

    fn compose(&self, other: &Self) -> Option<Self> {
        Diagram::compose(self, other).ok()
    }
}

impl<O, B> Monoidal for Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn tensor(&self, other: &Self) -> Self {
        Diagram::tensor(self, other)
    }
}

impl<O, B> SymmetricMonoidal for Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn twist(a: &Ty<O>, b: &Ty<O>) -> Self {
        // Move each wire of `a` across `b`, innermost first.
        let mut result = Self::id(a.tensor(b));
        for i in (0..a.len()).rev() {
            let step = Self::id(a.take_front(i))
                .tensor(&cross(&a[i], b))
                .tensor(&Self::id(a.strip_front(i + 1)));
            result = result
                .compose(&step)
                .expect("twist stages chain by construction");
        }
        result
    }
}

impl<O, B> Dagger for Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn dagger(&self) -> Self {
        Diagram::dagger(self)
    }
}

impl<O, B> Traced for Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn trace(&self, n: usize, left: bool) -> Option<Self> {
        Diagram::trace(self, n, left).ok()
    }
}

// Syntactic sugar for sequential composition.
impl<O, B> Shr<&Diagram<O, B>> for &Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    type Output = Result<Diagram<O, B>, DiagramError>;

    fn shr(self, rhs: &Diagram<O, B>) -> Self::Output {
        self.compose(rhs)
    }
}

// Parallel composition.
impl<O, B> BitOr<&Diagram<O, B>> for &Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    type Output = Diagram<O, B>;

    fn bitor(self, rhs: &Diagram<O, B>) -> Diagram<O, B> {
        self.tensor(rhs)
    }
}

impl<O, B> fmt::Display for Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers.is_empty() {
            return write!(f, "Id({})", self.dom);
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, " >> ")?;
            }
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}
