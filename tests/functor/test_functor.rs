use traced_diagrams::prelude::*;

use crate::theory::functions::{Function, Numeric};

fn x() -> Ty<&'static str> {
    Ty::object("x")
}

// Interprets "f" as x ↦ (x, 1 + 1/x) and "g" as the golden ratio constant.
struct GoldenFunctor;

impl Functor<&'static str, &'static str, Numeric> for GoldenFunctor {
    fn map_object(&self, _object: &&'static str) -> usize {
        1
    }

    fn map_box(&self, generator: &Generator<&'static str, &'static str>) -> Option<Function> {
        match generator.label {
            "f" => Some(Function::new(1, 2, |args| {
                vec![args[0], 1.0 + 1.0 / args[0]]
            })),
            "g" => Some(Function::new(0, 1, |_| vec![(1.0 + 5.0_f64.sqrt()) / 2.0])),
            _ => None,
        }
    }
}

#[test]
fn test_golden_ratio_fixed_point() {
    // Tracing the first output of "f" back into its input solves
    // φ = 1 + 1/φ.
    let f = Diagram::from(Generator::new("f", x(), x().tensor(&x())));
    let g = Diagram::from(Generator::new("g", Ty::empty(), x()));

    let fixed = GoldenFunctor.map_arrow(&f.trace(1, false).unwrap()).unwrap();
    let golden = GoldenFunctor.map_arrow(&g).unwrap();

    let (lhs, rhs) = (fixed.call(&[]), golden.call(&[]));
    assert!((lhs[0] - rhs[0]).abs() < 1e-9);
    assert!((lhs[0] - 1.618_033_988_7).abs() < 1e-9);
}

#[test]
fn test_identity_functor_preserves_diagrams() {
    let f = Diagram::from(Generator::new("f", x().tensor(&x()), x().tensor(&x())));
    let g = Diagram::from(Generator::new("g", x(), x()));
    let d = (&f >> &(&g | &g)).unwrap();
    assert_eq!(Identity.map_arrow(&d).unwrap(), d);

    let traced = f.trace(1, true).unwrap();
    assert_eq!(Identity.map_arrow(&traced).unwrap(), traced);
}

#[test]
fn test_unmapped_box_is_an_error() {
    let h = Diagram::from(Generator::new("h", x(), x()));
    assert!(matches!(
        GoldenFunctor.map_arrow(&h),
        Err(FunctorError::UnmappedBox(_))
    ));
}

#[test]
fn test_functors_reject_drawing_primitives() {
    let f = Diagram::from(Generator::new("f", x(), x().tensor(&x())));
    let drawn = f.trace(1, false).unwrap().to_drawing();
    assert!(matches!(
        GoldenFunctor.map_arrow(&drawn),
        Err(FunctorError::DrawingPrimitive(_))
    ));
}

// A deliberately broken functor whose object-sequence map disagrees with its
// object map on the empty sequence.
struct Inconsistent;

impl Functor<&'static str, &'static str, Numeric> for Inconsistent {
    fn map_object(&self, _object: &&'static str) -> usize {
        1
    }

    fn map_box(&self, _generator: &Generator<&'static str, &'static str>) -> Option<Function> {
        None
    }

    fn map_ty(&self, ty: &Ty<&'static str>) -> usize {
        if ty.is_empty() {
            3
        } else {
            ty.len()
        }
    }
}

#[test]
fn test_inconsistent_wire_counts_are_an_error() {
    let traced = Diagram::<&'static str, &'static str>::id(x())
        .trace(1, false)
        .unwrap();
    assert!(matches!(
        Inconsistent.map_arrow(&traced),
        Err(FunctorError::TraceWireCount { .. })
    ));
}
