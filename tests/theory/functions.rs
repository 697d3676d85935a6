// A concrete traced category: functions between tuples of reals, with the
// trace computed as a seeded fixed point.

use std::rc::Rc;

use traced_diagrams::prelude::*;

#[derive(Clone)]
pub struct Function {
    arity: usize,
    coarity: usize,
    run: Rc<dyn Fn(&[f64]) -> Vec<f64>>,
}

impl Function {
    pub fn new(arity: usize, coarity: usize, run: impl Fn(&[f64]) -> Vec<f64> + 'static) -> Self {
        Function {
            arity,
            coarity,
            run: Rc::new(run),
        }
    }

    pub fn call(&self, args: &[f64]) -> Vec<f64> {
        assert_eq!(args.len(), self.arity, "wrong number of arguments");
        let result = (self.run)(args);
        assert_eq!(result.len(), self.coarity, "wrong number of results");
        result
    }
}

impl Arrow for Function {
    type Object = usize;

    fn source(&self) -> usize {
        self.arity
    }

    fn target(&self) -> usize {
        self.coarity
    }

    fn identity(a: &usize) -> Self {
        let n = *a;
        Function::new(n, n, |args| args.to_vec())
    }

    fn compose(&self, other: &Self) -> Option<Self> {
        if self.coarity != other.arity {
            return None;
        }
        let (f, g) = (self.clone(), other.clone());
        Some(Function::new(self.arity, other.coarity, move |args| {
            g.call(&f.call(args))
        }))
    }
}

impl Monoidal for Function {
    fn tensor(&self, other: &Self) -> Self {
        let (f, g) = (self.clone(), other.clone());
        let split = self.arity;
        Function::new(
            self.arity + other.arity,
            self.coarity + other.coarity,
            move |args| {
                let mut result = f.call(&args[..split]);
                result.extend(g.call(&args[split..]));
                result
            },
        )
    }
}

impl SymmetricMonoidal for Function {
    fn twist(a: &usize, b: &usize) -> Self {
        let (a, b) = (*a, *b);
        Function::new(a + b, a + b, move |args| {
            let mut result = args[a..].to_vec();
            result.extend_from_slice(&args[..a]);
            result
        })
    }
}

impl Traced for Function {
    /// Feedback as a fixed point: fed-back values start at `1.0` and iterate
    /// until they stop changing.
    fn trace(&self, n: usize, left: bool) -> Option<Self> {
        if n > self.arity || n > self.coarity {
            return None;
        }
        let f = self.clone();
        let coarity = self.coarity - n;
        Some(Function::new(self.arity - n, coarity, move |args| {
            let mut fed = vec![1.0; n];
            for _ in 0..1_000 {
                let inputs: Vec<f64> = if left {
                    fed.iter().chain(args).copied().collect()
                } else {
                    args.iter().chain(&fed).copied().collect()
                };
                let result = f.call(&inputs);
                let (body, new_fed) = if left {
                    (result[n..].to_vec(), result[..n].to_vec())
                } else {
                    (result[..coarity].to_vec(), result[coarity..].to_vec())
                };
                let delta: f64 = fed.iter().zip(&new_fed).map(|(a, b)| (a - b).abs()).sum();
                fed = new_fed;
                if delta < 1e-12 {
                    return body;
                }
            }
            panic!("fixed point did not converge");
        }))
    }
}

/// The category of natural numbers and functions between real tuples.
pub struct Numeric;

impl Category for Numeric {
    type Object = usize;
    type Arrow = Function;
}

#[test]
fn test_function_trace_solves_fixed_points() {
    // x ↦ (x, x / 2 + 1) traced on the right converges to x = 2.
    let f = Function::new(1, 2, |args| vec![args[0], args[0] / 2.0 + 1.0]);
    let traced = f.trace(1, false).unwrap();
    let result = traced.call(&[]);
    assert!((result[0] - 2.0).abs() < 1e-9);
}
