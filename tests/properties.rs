//! Algebraic laws and end-to-end scenarios for the expression engine.

use sym_rs::{add, derivate, full_eval, make_constant, make_variable, multiply, partial_eval, render};
use sym_rs::{Context, EvalError, Expr};

use test_log::test;

const SAMPLES: [f64; 7] = [-7.25, -1.0, 0.0, 0.5, 1.0, 3.0, 1024.0];

/// A handful of expressions over `x` and `y`.
fn corpus() -> Vec<Expr> {
    let x = make_variable("x");
    let y = make_variable("y");
    let c = make_constant(3.5);
    vec![
        c.clone(),
        x.clone(),
        add(x.clone(), c.clone()),
        multiply(x.clone(), y.clone()),
        multiply(add(x.clone(), y.clone()), add(x.clone(), c.clone())),
        multiply(multiply(x.clone(), x.clone()), y.clone()),
    ]
}

fn ctx_xy(x: f64, y: f64) -> Context {
    Context::new().with("x", x).with("y", y)
}

// ─── Evaluation ────────────────────────────────────────────────────────────────

#[test]
fn constant_evaluates_to_itself() {
    let ctx = ctx_xy(1.0, 2.0);
    for v in SAMPLES {
        assert_eq!(full_eval(&make_constant(v), &ctx), Ok(v));
        assert_eq!(full_eval(&make_constant(v), &Context::new()), Ok(v));
    }
}

#[test]
fn sum_and_product_are_homomorphic() {
    let exprs = corpus();
    for &vx in &SAMPLES {
        for &vy in &SAMPLES {
            let ctx = ctx_xy(vx, vy);
            for a in &exprs {
                for b in &exprs {
                    let va = full_eval(a, &ctx).unwrap();
                    let vb = full_eval(b, &ctx).unwrap();
                    assert_eq!(full_eval(&add(a.clone(), b.clone()), &ctx), Ok(va + vb));
                    assert_eq!(full_eval(&multiply(a.clone(), b.clone()), &ctx), Ok(va * vb));
                }
            }
        }
    }
}

#[test]
fn variable_fails_iff_unbound() {
    let ctx = Context::new().with("x", make_variable("y") * make_constant(2.0)).with("y", 4.0);

    assert_eq!(full_eval(&make_variable("x"), &ctx), full_eval(ctx.get("x").unwrap(), &ctx));
    assert_eq!(full_eval(&make_variable("x"), &ctx), Ok(8.0));
    assert_eq!(full_eval(&make_variable("y"), &ctx), Ok(4.0));
    assert_eq!(
        full_eval(&make_variable("z"), &ctx),
        Err(EvalError::UnboundVariable { name: "z".to_string() })
    );
}

#[test]
fn nested_eval() {
    let f = multiply(multiply(make_variable("x"), make_variable("y")), make_constant(2.0));
    let ctx = Context::from([("x", make_constant(2.0)), ("y", make_constant(2.0))]);
    assert_eq!(full_eval(&f, &ctx), Ok(8.0));
}

#[test]
fn shared_subexpression_evaluates_per_reference() {
    // s is referenced twice, f = s * s
    let s = add(make_variable("x"), make_constant(1.0));
    let f = multiply(s.clone(), s);
    assert_eq!(f.size(), 7);
    assert_eq!(f.unique_size(), 4);
    assert_eq!(full_eval(&f, &Context::new().with("x", 2.0)), Ok(9.0));
}

// ─── Differentiation ───────────────────────────────────────────────────────────

#[test]
fn leaf_derivatives() {
    let ctx = ctx_xy(5.0, 6.0);
    for v in SAMPLES {
        assert_eq!(full_eval(&derivate(&make_constant(v), "x"), &ctx), Ok(0.0));
    }
    assert_eq!(full_eval(&derivate(&make_variable("x"), "x"), &ctx), Ok(1.0));
    assert_eq!(full_eval(&derivate(&make_variable("y"), "x"), &ctx), Ok(0.0));
    // Derivatives of leaves are constants, so they evaluate without any binding.
    assert_eq!(full_eval(&derivate(&make_variable("x"), "x"), &Context::new()), Ok(1.0));
}

#[test]
fn product_rule() {
    let f = multiply(make_variable("x"), make_constant(32.0));
    let ctx = Context::from([("x", make_constant(2.0))]);
    assert_eq!(full_eval(&derivate(&f, "x"), &ctx), Ok(32.0));
}

#[test]
fn sum_rule() {
    let f = add(make_variable("x"), make_constant(32.0));
    assert_eq!(full_eval(&derivate(&f, "x"), &Context::new()), Ok(1.0));
}

#[test]
fn polynomial_derivative_matches_closed_form() {
    // f = (x + y) * (x + 3.5), df/dx = (x + 3.5) + (x + y) = 2x + y + 3.5
    let exprs = corpus();
    let df = exprs[4].derivate("x");
    for &vx in &SAMPLES {
        for &vy in &SAMPLES {
            let ctx = ctx_xy(vx, vy);
            assert_eq!(full_eval(&df, &ctx), Ok((vx + 3.5) + (vx + vy)));
        }
    }
}

#[test]
fn repeated_differentiation_grows_without_simplification() {
    let x = make_variable("x");
    let mut f = multiply(multiply(x.clone(), x.clone()), x);
    let mut sizes = vec![f.size()];
    for _ in 0..4 {
        f = f.derivate("x");
        sizes.push(f.size());
    }
    assert!(sizes.windows(2).all(|w| w[1] > w[0]), "sizes = {:?}", sizes);
    // Fourth derivative of x^3 is zero, but the tree is still there.
    assert_eq!(full_eval(&f, &Context::new().with("x", 7.0)), Ok(0.0));
    assert!(f.unique_size() < f.size() as usize);
}

// ─── Partial evaluation & rendering ────────────────────────────────────────────

#[test]
fn partial_eval_then_render() {
    let f = multiply(multiply(make_variable("x"), make_variable("y")), make_constant(2.0));
    let g = partial_eval(&f, &Context::from([("x", make_constant(2.0))]));
    assert_eq!(render(&g), "((2 * y) * 2)");
    assert_eq!(full_eval(&g, &Context::new().with("y", 3.0)), Ok(12.0));
}

#[test]
fn render_sum_of_constants() {
    assert_eq!(render(&add(make_constant(21.0), make_constant(32.0))), "(21 + 32)");
}

#[test]
fn partial_eval_is_idempotent_under_full_binding() {
    let ctx = ctx_xy(2.0, -3.0);
    for e in corpus() {
        let once = partial_eval(&e, &ctx);
        let twice = partial_eval(&once, &ctx);
        assert_eq!(full_eval(&twice, &ctx), full_eval(&once, &ctx));
        assert_eq!(full_eval(&once, &Context::new()), full_eval(&e, &ctx));
    }
}

#[test]
fn partial_eval_keeps_unbound_symbolic() {
    let exprs = corpus();
    let g = partial_eval(&exprs[3], &Context::new().with("x", 4.0)); // x * y
    assert_eq!(g.free_variables().into_iter().collect::<Vec<_>>(), vec!["y"]);
    assert_eq!(
        full_eval(&g, &Context::new()),
        Err(EvalError::UnboundVariable { name: "y".to_string() })
    );
}

// ─── Concurrency ───────────────────────────────────────────────────────────────

#[test]
fn concurrent_evaluation_of_shared_tree() {
    let x = make_variable("x");
    let f = multiply(add(x.clone(), make_constant(1.0)), x).derivate_n("x", 2);

    std::thread::scope(|s| {
        let handles: Vec<_> = SAMPLES
            .iter()
            .map(|&v| {
                let f = &f;
                s.spawn(move || full_eval(f, &Context::new().with("x", v)))
            })
            .collect();
        for h in handles {
            // d²/dx² (x² + x) = 2
            assert_eq!(h.join().unwrap(), Ok(2.0));
        }
    });
}
