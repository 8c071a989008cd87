//! Command-line front end: prints the list of magma equations.
//!
//! Run with: `cargo run --release -- --max-ops 4`
//!
//! Equations go to stdout, one per line, as `<lhs> = <rhs>`. The summary line and all
//! diagnostics go to stderr.

use std::io::{self, BufWriter, Write};

use clap::Parser;
use log::info;
use magma_eqs::{
    config::{Alphabet, Config, DEFAULT_ALPHABET, DEFAULT_MAX_OPS},
    enumerate::EquationEnumerator,
};

#[derive(Parser)]
#[command(name = "magma-eqs")]
#[command(about = "Enumerate magma equations up to variable renaming and side swap")]
struct Args {
    /// Maximum total number of operations on both sides
    #[arg(short, long, default_value_t = DEFAULT_MAX_OPS as i64, allow_negative_numbers = true)]
    max_ops: i64,

    /// Variable names, one character each
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    vars: String,

    /// Operator glyph
    #[arg(short, long)]
    glyph: Option<String>,

    /// Print only the number of equations
    #[arg(short, long)]
    count: bool,

    /// Prefix each equation with its 1-based number
    #[arg(short, long)]
    numbered: bool,

    /// More logging (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> simplelog::LevelFilter {
        if self.quiet {
            return simplelog::LevelFilter::Error;
        }
        match self.verbose {
            0 => simplelog::LevelFilter::Info,
            1 => simplelog::LevelFilter::Debug,
            _ => simplelog::LevelFilter::Trace,
        }
    }

    fn config(&self) -> Result<Config, magma_eqs::config::ConfigError> {
        let max_ops = Config::bound_from_signed(self.max_ops)?;
        let config = Config::new(max_ops, Alphabet::from_chars(&self.vars)?)?;
        match &self.glyph {
            Some(glyph) => config.with_glyph(glyph.as_str()),
            None => Ok(config),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = args.config()?;
    info!("max ops: {}, variables: {}", config.max_ops(), config.alphabet());

    let enumerator = EquationEnumerator::new(&config);
    info!("search space: {} candidates", enumerator.search_space());

    if args.count {
        println!("{}", enumerator.count());
        return Ok(());
    }

    let start = std::time::Instant::now();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut equations = enumerator.equations();
    for (i, eq) in equations.by_ref().enumerate() {
        if args.numbered {
            write!(out, "Equation{}: ", i + 1)?;
        }
        writeln!(out, "{}", config.display(&eq))?;
    }
    out.flush()?;

    info!("Generated {} equations", equations.stats().accepted);
    info!("Time: {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
