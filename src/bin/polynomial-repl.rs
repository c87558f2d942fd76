use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use itertools::Itertools;
use log::{info, warn};
use mimalloc::MiMalloc;
use num_traits::Zero;
use univariate_polynomial::{Polynomial, X};

type Poly = Polynomial<X, f64, u32>;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Reads polynomials in x, one per line, and prints their powers. An empty
/// line ends the session.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read the polynomials from this file instead of the standard input
    #[arg(short, long)]
    file: Option<String>,

    /// Print the powers of each polynomial up to this one
    #[arg(short = 'p', long, default_value_t = 3)]
    max_power: u32,

    /// Evaluate each polynomial at this point (may be repeated)
    #[arg(short, long, value_name = "X", allow_negative_numbers = true)]
    eval: Vec<f64>,

    /// Also print the derivative and the integral
    #[arg(short, long)]
    calculus: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let interactive = args.file.is_none();
    let mut input: Box<dyn BufRead> = match &args.file {
        Some(filename) => {
            let file = File::open(filename)
                .with_context(|| format!("Could not open file \"{}\"", filename))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut stdout = io::stdout();
    let mut count = 0usize;
    let mut line = String::new();
    loop {
        if interactive {
            print!("p = ");
            stdout.flush()?;
        }

        line.clear();
        if input.read_line(&mut line).context("Could not read input")? == 0 {
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            break;
        }

        match text.parse::<Poly>() {
            Ok(p) => {
                report(&p, &args);
                count += 1;
            }
            Err(err) => {
                warn!("rejected {:?}: {}", text, err);
                println!("Invalid polynomial: {}", err);
            }
        }
    }

    info!("{} polynomials processed", count);
    Ok(())
}

fn show(p: &Poly) -> String {
    if p.is_zero() {
        "0".to_string()
    } else {
        p.to_string()
    }
}

fn report(p: &Poly, args: &Args) {
    println!("p = {}", show(p));
    let mut power = p.clone();
    for n in 2..=args.max_power {
        let exponent: String = n
            .to_string()
            .chars()
            .filter_map(univariate_polynomial::polynomial::display::superscript)
            .collect();
        match power.checked_mul(p) {
            Ok(next) => {
                println!("p{} = {}", exponent, show(&next));
                power = next;
            }
            Err(err) => {
                warn!("stopped at p{}: {}", exponent, err);
                println!("p{} is out of range: {}", exponent, err);
                break;
            }
        }
    }

    if args.calculus {
        println!("dp/dx = {}", show(&p.derivative()));
        match p.checked_integral() {
            Ok(integral) => println!("∫p dx = {}", show(&integral)),
            Err(err) => println!("∫p dx is out of range: {}", err),
        }
    }

    if !args.eval.is_empty() {
        println!(
            "{}",
            args.eval
                .iter()
                .format_with(", ", |x, f| f(&format_args!("p({}) = {}", x, p.eval(*x))))
        );
    }
}
