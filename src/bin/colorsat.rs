use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use colorsat::cnf::dimacs::write_dimacs;
use colorsat::driver::{RunOptions, build_instance};
use colorsat::graph::reader::ReadMode;

#[derive(Debug, Parser)]
#[command(name = "colorsat")]
#[command(about = "Encode graph k-colorability as a DIMACS CNF instance")]
struct Cli {
    /// Read k and the edge list from this file instead of stdin.
    #[arg(long)]
    input: Option<String>,
    /// Write the CNF to this file instead of stdout.
    #[arg(long)]
    emit: Option<String>,
    /// Number of colors; the input then holds only edge lines.
    #[arg(long, allow_negative_numbers = true)]
    colors: Option<i64>,
    /// Reject malformed edge lines instead of skipping them.
    #[arg(long, default_value_t = false)]
    strict: bool,
    #[arg(long, default_value_t = false)]
    quiet: bool,
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = RunOptions {
        mode: if cli.strict {
            ReadMode::Strict
        } else {
            ReadMode::Lenient
        },
        colors: cli.colors,
    };

    let interactive = cli.input.is_none() && io::stdin().is_terminal() && !cli.quiet;
    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let instance = if interactive {
        build_instance(input, &mut io::stderr(), &opts)?
    } else {
        build_instance(input, &mut io::sink(), &opts)?
    };
    let cnf = &instance.encoded.cnf;

    match &cli.emit {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("failed to create {}", path))?;
            write_dimacs(&mut BufWriter::new(file), cnf)
                .with_context(|| format!("failed to write {}", path))?;
            println!(
                "vertices={} edges={} colors={} vars={} clauses={}",
                instance.graph.num_vertices(),
                instance.graph.num_edges(),
                instance.colors,
                cnf.num_vars,
                cnf.num_clauses()
            );
        }
        None => {
            let stdout = io::stdout();
            write_dimacs(&mut stdout.lock(), cnf).context("failed to write dimacs output")?;
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
