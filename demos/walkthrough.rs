//! Walkthrough of the expression engine.
//!
//! Builds `f = (x * y) * 2`, then evaluates, specializes and differentiates it.
//!
//! Run with: `cargo run --example walkthrough`
//! With options: `cargo run --example walkthrough -- -x 3 -y 5 --wrt y --dot f.dot`

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use sym_rs::{make_constant, make_variable, multiply, Context, EvalConfig, DEFAULT_MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(name = "walkthrough")]
#[command(author, version, about = "Evaluate, specialize and differentiate f = (x * y) * 2")]
struct Args {
    /// Value bound to `x`
    #[arg(short, default_value_t = 2.0)]
    x: f64,

    /// Value bound to `y` during full evaluation
    #[arg(short, default_value_t = 2.0)]
    y: f64,

    /// Variable to differentiate with respect to
    #[arg(long, default_value = "x")]
    wrt: String,

    /// Number of times to differentiate
    #[arg(long, default_value_t = 1)]
    order: usize,

    /// Evaluation nesting limit
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Write the derivative as a Graphviz DOT file
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::info!("sym-rs {}", env!("CARGO_PKG_VERSION"));

    let config = EvalConfig::default().with_max_depth(args.max_depth);

    // ── Build ──

    let x = make_variable("x");
    let y = make_variable("y");
    let f = multiply(multiply(x, y), make_constant(2.0));
    println!("Function: {}", f);

    // ── Full evaluation ──

    let ctx = Context::from([("x", make_constant(args.x)), ("y", make_constant(args.y))]);
    let res = f.full_eval_with(&ctx, &config)?;
    println!("full_eval Result: {} Expected: {}", res, args.x * args.y * 2.0);

    // ── Partial evaluation ──

    let ctx_x = Context::new().with("x", args.x);
    let partial_f = f.partial_eval(&ctx_x);
    println!("Partial Function: {}", partial_f);

    match partial_f.full_eval_with(&ctx_x, &config) {
        Ok(v) => println!("Partial Value: {}", v),
        Err(e) => println!("Partial Value: {}", e),
    }

    // ── Differentiation ──

    let df = f.derivate_n(&args.wrt, args.order);
    println!("d^{}f/d{}^{}: {}", args.order, args.wrt, args.order, df);
    println!(
        "  size = {}, unique nodes = {}, depth = {}",
        df.size(),
        df.unique_size(),
        df.depth()
    );
    println!("  value = {}", df.full_eval_with(&ctx, &config)?);

    if let Some(path) = args.dot {
        std::fs::write(&path, df.to_dot()?)?;
        log::info!("Wrote DOT to {}", path.display());
    }

    Ok(())
}
