use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use intpoly::{printer::format_term, BinaryOp, Polynomial, PolynomialError, Representation};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Evaluate an operation on polynomials written in canonical notation,
/// e.g. `intpoly "4x^2 + 8x + 2" mul "12x^2 + 3x"`.
#[derive(Parser, Debug)]
#[command(name = "intpoly", version)]
struct Cli {
    /// Left operand
    #[arg(allow_hyphen_values = true)]
    lhs: String,

    /// Operation to perform
    #[arg(value_enum)]
    op: Op,

    /// Right operand, or the exponent for `coeff`
    #[arg(allow_hyphen_values = true)]
    rhs: Option<String>,

    /// Store the left operand in sparse form
    #[arg(long)]
    sparse: bool,

    /// Store the right operand in sparse form
    #[arg(long)]
    rhs_sparse: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Neg,
    Eq,
    Degree,
    Zero,
    Coeff,
    Terms,
}

fn representation(sparse: bool) -> Representation {
    if sparse {
        Representation::Sparse
    } else {
        Representation::Dense
    }
}

fn run(cli: &Cli) -> Result<String> {
    let lhs = Polynomial::parse(&cli.lhs, representation(cli.sparse))
        .with_context(|| format!("Could not parse left operand {:?}", cli.lhs))?;

    let rhs = || -> Result<Polynomial> {
        let input = cli.rhs.as_deref().ok_or(PolynomialError::MissingOperand)?;
        Polynomial::parse(input, representation(cli.rhs_sparse))
            .with_context(|| format!("Could not parse right operand {:?}", input))
    };

    let binary = |op: BinaryOp| -> Result<String> {
        Ok(lhs.combine(op, Some(&rhs()?))?.to_string())
    };

    Ok(match cli.op {
        Op::Add => binary(BinaryOp::Add)?,
        Op::Sub => binary(BinaryOp::Subtract)?,
        Op::Mul => binary(BinaryOp::Multiply)?,
        Op::Neg => lhs.negate().to_string(),
        Op::Eq => lhs.try_eq(&rhs()?)?.to_string(),
        Op::Degree => lhs.degree().to_string(),
        Op::Zero => lhs.is_zero().to_string(),
        Op::Coeff => {
            let input = cli.rhs.as_deref().ok_or(PolynomialError::MissingOperand)?;
            let exponent = input
                .trim()
                .parse()
                .with_context(|| format!("Invalid exponent {:?}", input))?;
            lhs.coefficient(exponent)?.to_string()
        }
        Op::Terms => {
            let sparse = lhs.to_sparse();
            let terms = sparse
                .terms()
                .rev()
                .map(|(e, c)| format_term(c, e).map(String::from))
                .collect::<Result<Vec<_>, _>>()?;
            terms.join("\n")
        }
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("INTPOLY_LOG"))
        .init();

    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}
