use proptest::prelude::*;

use traced_diagrams::prelude::*;

use crate::diagram::strategy::arb_diagram;

proptest! {
    // Tracing zero wires is the identity; tracing two is tracing one twice.
    #[test]
    fn test_vanishing(f in arb_diagram(), left in any::<bool>()) {
        prop_assert_eq!(f.trace(0, left).unwrap(), f.clone());
        prop_assert_eq!(
            f.trace(2, left),
            f.trace(1, left).and_then(|d| d.trace(1, left)),
        );
    }

    #[test]
    fn test_trace_boundaries(f in arb_diagram()) {
        let right = f.trace(1, false).unwrap();
        prop_assert_eq!(right.dom(), &f.dom().strip_back(1));
        prop_assert_eq!(right.cod(), &f.cod().strip_back(1));

        let left = f.trace(1, true).unwrap();
        prop_assert_eq!(left.dom(), &f.dom().strip_front(1));
        prop_assert_eq!(left.cod(), &f.cod().strip_front(1));
    }

    #[test]
    fn test_dagger_commutes_with_trace(f in arb_diagram(), left in any::<bool>()) {
        prop_assert_eq!(
            f.trace(1, left).unwrap().dagger(),
            f.dagger().trace(1, left).unwrap(),
        );
    }
}

#[test]
fn test_trace_needs_a_wire() {
    let x = Ty::object("x");
    let state = Diagram::from(Generator::new("s", Ty::empty(), x));
    assert!(matches!(
        state.trace(1, false),
        Err(DiagramError::NothingToTrace { .. })
    ));
    assert!(matches!(
        state.trace(1, true),
        Err(DiagramError::NothingToTrace { .. })
    ));
}

#[test]
fn test_traced_wires_must_match() {
    let (x, y) = (Ty::object("x"), Ty::object("y"));
    let f = Diagram::from(Generator::new("f", x.tensor(&y), x.tensor(&x)));
    // back wires are y and x
    assert!(matches!(
        f.trace(1, false),
        Err(DiagramError::TracedWireMismatch { .. })
    ));
    // front wires are both x
    assert!(f.trace(1, true).is_ok());
}

#[test]
fn test_trace_display() {
    let x = Ty::object("x");
    let f = Diagram::from(Generator::new("f", x.tensor(&x), x.tensor(&x)));
    assert_eq!(f.trace(1, false).unwrap().to_string(), "Trace(f)");
    assert_eq!(f.trace(1, true).unwrap().to_string(), "Trace(f, left=True)");
}

#[test]
fn test_trace_accessors() {
    let x = Ty::object("x");
    let f = Diagram::from(Generator::new("f", x.tensor(&x), x.tensor(&x)));
    let traced = Trace::new(f.clone(), false).unwrap();
    assert_eq!(traced.arg(), &f);
    assert!(!traced.left());
    assert_eq!(traced.traced_object(), &"x");
    assert_eq!(traced.dom(), &x);
    assert_eq!(traced.cod(), &x);
}
