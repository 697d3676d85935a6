use traced_diagrams::prelude::*;

fn x() -> Ty<&'static str> {
    Ty::object("x")
}

fn atom(label: &'static str, dom: Ty<&'static str>, cod: Ty<&'static str>) -> Diagram<&'static str, &'static str> {
    Diagram::from(Generator::new(label, dom, cod))
}

#[test]
fn test_compose_checks_boundaries() {
    let f = atom("f", x(), x().tensor(&x()));
    let g = atom("g", x(), x());
    assert!(matches!(&f >> &g, Err(DiagramError::Composition { .. })));

    let h = (&g >> &f).unwrap();
    assert_eq!(h.dom(), &x());
    assert_eq!(h.cod(), &x().tensor(&x()));
    assert_eq!(h.to_string(), "g >> f");
}

#[test]
fn test_tensor_whiskers() {
    let f = atom("f", x(), x());
    let g = atom("g", x(), x());
    let fg = &f | &g;
    assert_eq!(fg.dom(), &x().tensor(&x()));
    assert_eq!(fg.cod(), &x().tensor(&x()));
    assert_eq!(fg.layers().len(), 2);
    assert_eq!(fg.to_string(), "f @ x >> x @ g");
}

#[test]
fn test_identity_is_a_unit() {
    let f = atom("f", x(), x().tensor(&x()));
    assert_eq!((&Diagram::id(x()) >> &f).unwrap(), f);
    assert_eq!((&f >> &Diagram::id(x().tensor(&x()))).unwrap(), f);
    assert_eq!(Diagram::<&str, &str>::id(x()).to_string(), "Id(x)");
}

#[test]
fn test_dagger_involutive() {
    let f = atom("f", x(), x().tensor(&x()));
    assert_eq!(f.dagger().dom(), &x().tensor(&x()));
    assert_eq!(f.dagger().cod(), &x());
    assert_eq!(f.dagger().dagger(), f);
    assert_eq!(f.dagger().to_string(), "f†");

    let traced = f.dagger().trace(1, false).unwrap();
    assert_eq!(traced.dagger().dagger(), traced);
}

#[test]
fn test_new_validates_layers() {
    let layer = Layer::new(Ty::empty(), Term::Box(Generator::new("f", x(), x())), Ty::empty());
    assert!(Diagram::new(x(), x(), vec![layer.clone()]).is_ok());
    assert!(matches!(
        Diagram::new(x().tensor(&x()), x(), vec![layer.clone()]),
        Err(DiagramError::InvalidLayer { index: 0, .. })
    ));
    assert!(matches!(
        Diagram::new(x(), x().tensor(&x()), vec![layer]),
        Err(DiagramError::InvalidLayer { index: 1, .. })
    ));
}

#[test]
fn test_layer_terms_dagger_in_place() {
    // Term and Layer expose dagger and boundaries for every shape,
    // including trace terms.
    let f = atom("f", x().tensor(&x()), x().tensor(&x()));
    let traced = f.trace(1, false).unwrap();
    let layer = traced.layers()[0].clone();
    assert!(matches!(layer.term, Term::Trace(_)));
    assert_eq!(Boundary::dom(&layer), x());
    assert_eq!(Boundary::cod(&layer), x());
    assert_eq!(layer.dagger().dagger(), layer);
    assert_eq!(layer.term.dagger().to_string(), "Trace(f†)");
}

#[test]
fn test_twist_is_a_permutation() {
    let a = Ty::new(vec!["a", "b"]);
    let b = Ty::object("c");
    let s: Diagram<&'static str, &'static str> = SymmetricMonoidal::twist(&a, &b);
    assert_eq!(s.dom(), &a.tensor(&b));
    assert_eq!(s.cod(), &b.tensor(&a));
    assert!(s
        .layers()
        .iter()
        .all(|layer| matches!(layer.term, Term::Swap(_, _))));
}

#[test]
fn test_swap_display() {
    let s = Diagram::<&'static str, &'static str>::swap("a", "b");
    assert_eq!(s.dom(), &Ty::new(vec!["a", "b"]));
    assert_eq!(s.cod(), &Ty::new(vec!["b", "a"]));
    assert_eq!(s.to_string(), "Swap(a, b)");
    assert_eq!(s.dagger().to_string(), "Swap(b, a)");
}
