use intpoly::{DensePolynomial, PolynomialOps, SparsePolynomial};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

fn dense_arithmetic() {
    let a: DensePolynomial = "4x^2 + 8x + 2".parse().unwrap();
    let b: DensePolynomial = "12x^2 + 3x".parse().unwrap();

    println!("> Dense multiplication: ({}) * ({}) =", a, b);
    println!("\t{}", &a * &b);

    println!("> Dense subtraction: ({}) - ({}) =", a, b);
    println!("\t{}", &a - &b);
}

fn sparse_arithmetic() {
    let a: SparsePolynomial = "4x^2 + 8x + 2".parse().unwrap();
    let b: SparsePolynomial = "12x^2 + 3x^-2".parse().unwrap();

    println!("> Sparse multiplication: ({}) * ({}) =", a, b);
    println!("\t{}", &a * &b);

    println!("> Negation of {} =", b);
    println!("\t{}", -&b);
}

fn mixed_arithmetic() {
    let d: DensePolynomial = "12x^4 + 8x^3 + 5x^2 + 2x + 7".parse().unwrap();
    let s: SparsePolynomial = "7x^4 + 2x + 5x^-2".parse().unwrap();

    println!("> Sparse receiver: ({}) + ({}) =", s, d);
    println!("\t{}", s.add(&d).unwrap());

    println!("> Dense receiver: ({}) + ({}) =", d, s);
    match d.add(&s) {
        Ok(r) => println!("\t{}", r),
        Err(e) => println!("\terror: {}", e),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("INTPOLY_LOG"))
        .init();

    dense_arithmetic();
    sparse_arithmetic();
    mixed_arithmetic();
}
