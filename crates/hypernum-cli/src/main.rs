use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hypernum_core::dispatch::registered;
use hypernum_core::{facade, Binary, Nullary, Number, OpKind, Unary};

mod tower;

use tower::{basis, dispatch, parse_value, render_basis, TowerVisitor, Variant, MAX_DEPTH};

const BANNER: &str = r#"
 _   _
| | | |_   _ _ __   ___ _ __ _ __  _   _ _ __ ___
| |_| | | | | '_ \ / _ \ '__| '_ \| | | | '_ ` _ \
|  _  | |_| | |_) |  __/ |  | | | | |_| | | | | | |
|_| |_|\__, | .__/ \___|_|  |_| |_|\__,_|_| |_| |_|
       |___/|_|"#;

#[derive(Parser)]
#[command(
    name = "hypernum",
    about = "Hypercomplex number towers",
    long_about = "Explore doubling constructions (complex, dual, split-complex, diagonal)\nnested to any depth, with an optional projective point at infinity.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the standard towers and their unit laws
    Info,
    /// Print the multiplication table of the basis elements
    Table {
        #[arg(long, value_enum, default_value = "complex")]
        variant: Variant,
        /// Nesting depth (dimension 2^depth)
        #[arg(long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=MAX_DEPTH as i64))]
        depth: u8,
    },
    /// Evaluate one operation on comma-separated components
    Eval {
        #[arg(long, value_enum, default_value = "complex")]
        variant: Variant,
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=MAX_DEPTH as i64))]
        depth: u8,
        /// Operation name, e.g. multiply, inverse, square_root, real_one
        #[arg(long, value_parser = parse_op)]
        op: OpKind,
        /// Left operand, e.g. "1,2"
        #[arg(long)]
        lhs: Option<String>,
        /// Right operand for binary operations
        #[arg(long)]
        rhs: Option<String>,
        /// Use projective leaves (division by zero yields infinity)
        #[arg(long)]
        projective: bool,
    },
    /// Time multiplication, inversion and exp per depth
    Bench {
        #[arg(long, value_enum, default_value = "complex")]
        variant: Variant,
        /// Deepest tower to time
        #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(1..=MAX_DEPTH as i64))]
        depth: u8,
        #[arg(long, default_value = "10000")]
        iters: usize,
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn parse_op(name: &str) -> std::result::Result<OpKind, String> {
    OpKind::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = OpKind::all().map(|op| op.name()).collect();
        format!("unknown operation '{name}' (known: {})", known.join(", "))
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info => cmd_info(),
        Commands::Table { variant, depth } => cmd_table(variant, depth),
        Commands::Eval { variant, depth, op, lhs, rhs, projective } => {
            let line = dispatch(variant, depth, projective, Eval { op, lhs, rhs })??;
            println!("{line}");
            Ok(())
        }
        Commands::Bench { variant, depth, iters, seed } => cmd_bench(variant, depth, iters, seed),
    }
}

// ============================================================================
// info
// ============================================================================

struct Summary;

impl TowerVisitor for Summary {
    type Output = (usize, String);

    fn visit<N: Number<Scalar = f64>>(self) -> Self::Output {
        let special: N = facade::nullary(Nullary::SpecialOne);
        let square = facade::unary(Unary::Square, &special);
        (N::dimension(), render_basis(&square))
    }
}

fn cmd_info() -> Result<()> {
    println!("{}", BANNER);
    println!("  v{}  -  Hypercomplex number towers\n", env!("CARGO_PKG_VERSION"));

    println!("Laws (outermost generator squared)");
    for variant in Variant::value_variants() {
        let (_, square) = dispatch(*variant, 1, false, Summary)?;
        println!("  {:<14} e1^2 = {}", format!("{variant:?}"), square);
    }

    println!("\nStandard towers");
    let towers = [
        ("complex", Variant::Complex, 1),
        ("quaternion", Variant::Complex, 2),
        ("octonion", Variant::Complex, 3),
        ("sedenion", Variant::Complex, 4),
        ("dual", Variant::Dual, 1),
        ("hyperdual", Variant::Dual, 2),
        ("split-complex", Variant::SplitComplex, 1),
        ("diagonal", Variant::Diagonal, 1),
    ];
    for (name, variant, depth) in towers {
        let (dimension, _) = dispatch(variant, depth, false, Summary)?;
        println!("  {:<14} dim {:>2}", name, dimension);
    }

    println!("\nCrates");
    let crates = [
        ("core", "Operation vocabulary, Number contract, dispatcher registry"),
        ("doubling", "Complex, dual, split-complex and diagonal pairs"),
        ("projective", "Point at infinity, total division"),
        ("cli", "This CLI"),
    ];
    for (name, desc) in crates {
        println!("  hypernum-{:<11} {}", name, desc);
    }

    println!("\nDispatchers published: {}", registered());
    Ok(())
}

// ============================================================================
// table
// ============================================================================

struct Table;

impl TowerVisitor for Table {
    type Output = Vec<Vec<String>>;

    fn visit<N: Number<Scalar = f64>>(self) -> Self::Output {
        let units: Vec<N> = (0..N::dimension()).filter_map(basis::<N>).collect();
        units
            .iter()
            .map(|a| {
                units
                    .iter()
                    .map(|b| render_basis(&facade::binary(Binary::Multiply, a, b)))
                    .collect()
            })
            .collect()
    }
}

fn cmd_table(variant: Variant, depth: u8) -> Result<()> {
    let rows = dispatch(variant, depth, false, Table)?;
    let header: Vec<String> = (0..rows.len())
        .map(|k| if k == 0 { "1".to_string() } else { format!("e{k}") })
        .collect();
    let width = rows
        .iter()
        .flatten()
        .chain(&header)
        .map(String::len)
        .max()
        .unwrap_or(1)
        + 1;

    println!("=== {:?} depth {} ===\n", variant, depth);
    print!("{:>width$} |", "");
    for h in &header {
        print!("{:>width$}", h);
    }
    println!();
    println!("{}", "-".repeat((header.len() + 1) * width + 2));
    for (h, row) in header.iter().zip(&rows) {
        print!("{:>width$} |", h);
        for cell in row {
            print!("{:>width$}", cell);
        }
        println!();
    }
    Ok(())
}

// ============================================================================
// eval
// ============================================================================

struct Eval {
    op: OpKind,
    lhs: Option<String>,
    rhs: Option<String>,
}

fn operand<N: Number<Scalar = f64>>(text: &Option<String>, name: &str, op: OpKind) -> Result<N> {
    match text {
        Some(text) => parse_value(text).with_context(|| format!("parsing --{name}")),
        None => bail!("operation {op} needs --{name}"),
    }
}

fn describe<N: Number<Scalar = f64>>(value: &N) -> String {
    format!(
        "{value}\n  leaves: {:?}\n  finite: {}  invertible: {}",
        value.leaves(),
        value.is_finite(),
        value.is_invertible()
    )
}

impl TowerVisitor for Eval {
    type Output = Result<String>;

    fn visit<N: Number<Scalar = f64>>(self) -> Self::Output {
        let op = self.op;
        tracing::debug!(%op, number = std::any::type_name::<N>(), "evaluating");
        Ok(match op {
            OpKind::Nullary(kind) => describe(&facade::try_nullary::<N>(kind)?),
            OpKind::Unary(kind) => {
                let x: N = operand(&self.lhs, "lhs", op)?;
                describe(&facade::try_unary(kind, &x)?)
            }
            OpKind::Binary(kind) => {
                let x: N = operand(&self.lhs, "lhs", op)?;
                let y: N = operand(&self.rhs, "rhs", op)?;
                describe(&facade::try_binary(kind, &x, &y)?)
            }
            OpKind::Primitive(kind) => {
                let x: N = operand(&self.lhs, "lhs", op)?;
                facade::try_primitive(kind, &x)?.to_string()
            }
        })
    }
}

// ============================================================================
// bench
// ============================================================================

struct Bench {
    iters: usize,
    seed: u64,
}

fn time_it(iters: usize, mut f: impl FnMut()) -> f64 {
    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    start.elapsed().as_secs_f64() / iters as f64
}

fn random<N: Number<Scalar = f64>>(rng: &mut StdRng) -> Option<N> {
    let leaves: Vec<f64> = (0..N::dimension()).map(|_| rng.gen_range(-1.0..1.0)).collect();
    N::from_leaves(&leaves)
}

impl TowerVisitor for Bench {
    type Output = Result<(usize, f64, f64, f64)>;

    fn visit<N: Number<Scalar = f64>>(self) -> Self::Output {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let (a, b) = match (random::<N>(&mut rng), random::<N>(&mut rng)) {
            (Some(a), Some(b)) => (a, b),
            _ => bail!("could not build random operands"),
        };
        let iters = self.iters.max(1);

        // Warmup: publishes the dispatchers outside the timed loops.
        let _ = facade::try_binary(Binary::Multiply, &a, &b)?;

        let mul_s = time_it(iters, || {
            std::hint::black_box(facade::binary(Binary::Multiply, &a, &b));
        });
        let inv_s = time_it(iters, || {
            std::hint::black_box(facade::unary(Unary::Inverse, &a));
        });
        let exp_s = time_it(iters, || {
            std::hint::black_box(facade::unary(Unary::Exponentiate, &a));
        });
        Ok((N::dimension(), mul_s, inv_s, exp_s))
    }
}

fn cmd_bench(variant: Variant, depth: u8, iters: usize, seed: u64) -> Result<()> {
    println!("=== Hypernum {:?} Benchmark ===\n", variant);
    println!("{:<8} {:>5} {:>12} {:>12} {:>12}", "Depth", "Dim", "Mul (ns)", "Inv (ns)", "Exp (ns)");
    println!("{}", "-".repeat(53));

    for d in 1..=depth {
        let (dim, mul_s, inv_s, exp_s) = dispatch(variant, d, false, Bench { iters, seed })??;
        println!(
            "{:<8} {:>5} {:>12.1} {:>12.1} {:>12.1}",
            d,
            dim,
            mul_s * 1e9,
            inv_s * 1e9,
            exp_s * 1e9,
        );
    }
    Ok(())
}
