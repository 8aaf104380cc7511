use std::io::{self, BufRead, Write};

use log::info;
use thiserror::Error;

use crate::cnf::dimacs::write_dimacs;
use crate::coloring::encode::{ColoringCnf, EncodeError, encode_graph};
use crate::graph::Graph;
use crate::graph::reader::{ReadError, ReadMode, read_graph};

pub const COLORS_PROMPT: &str = "Enter number of colors (k): ";
pub const GRAPH_PROMPT: &str =
    "Paste the graph lines (e.g., 'e 1 2'), then enter an empty line to finish:";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input. Please enter an integer for the number of colors.")]
    InvalidColors(String),
    #[error("Invalid input. Please enter an integer for the number of colors.")]
    MissingColors,
    #[error("failed to read number of colors")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("failed to write prompt")]
    Prompt(#[source] io::Error),
    #[error("failed to write dimacs output")]
    Write(#[source] io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: ReadMode,
    /// Number of colors; when `None` it is read from the first input line.
    pub colors: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringInstance {
    pub colors: i64,
    pub graph: Graph,
    pub encoded: ColoringCnf,
}

/// Parses the leading number-of-colors line.
///
/// Integers beyond the `i64` range saturate; they are still integers and the
/// encoder decides whether such a k is usable.
pub fn parse_colors(line: &str) -> Result<i64, InputError> {
    let token = line.trim();
    token
        .parse::<i64>()
        .ok()
        .or_else(|| saturate_integer(token))
        .ok_or_else(|| InputError::InvalidColors(token.to_owned()))
}

fn saturate_integer(token: &str) -> Option<i64> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

pub fn read_colors<R: BufRead>(input: &mut R) -> Result<i64, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::MissingColors);
    }
    parse_colors(&line)
}

/// Reads k and the edge list from `input` and encodes them.
///
/// Prompts go to `prompt` (pass `io::sink()` for none), never to the CNF
/// output. Nothing is produced unless every stage succeeds.
pub fn build_instance<R: BufRead, P: Write>(
    mut input: R,
    prompt: &mut P,
    opts: &RunOptions,
) -> Result<ColoringInstance, RunError> {
    let colors = match opts.colors {
        Some(k) => k,
        None => {
            show_prompt(prompt, COLORS_PROMPT, false).map_err(RunError::Prompt)?;
            read_colors(&mut input)?
        }
    };
    show_prompt(prompt, GRAPH_PROMPT, true).map_err(RunError::Prompt)?;
    let graph = read_graph(&mut input, opts.mode)?;
    let encoded = encode_graph(&graph, colors)?;
    Ok(ColoringInstance {
        colors,
        graph,
        encoded,
    })
}

pub fn run<R: BufRead, W: Write, P: Write>(
    input: R,
    out: &mut W,
    prompt: &mut P,
    opts: &RunOptions,
) -> Result<ColoringInstance, RunError> {
    let instance = build_instance(input, prompt, opts)?;
    write_dimacs(out, &instance.encoded.cnf).map_err(RunError::Write)?;
    info!(
        "wrote dimacs: vars={} clauses={}",
        instance.encoded.cnf.num_vars,
        instance.encoded.cnf.num_clauses()
    );
    Ok(instance)
}

fn show_prompt<P: Write>(sink: &mut P, text: &str, newline: bool) -> io::Result<()> {
    if newline {
        writeln!(sink, "{}", text)?;
    } else {
        write!(sink, "{}", text)?;
    }
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::{InputError, parse_colors};

    #[test]
    fn colors_line_parsing() {
        assert_eq!(parse_colors("3\n").expect("k"), 3);
        assert_eq!(parse_colors("  -1 ").expect("k"), -1);
        assert!(matches!(
            parse_colors("abc"),
            Err(InputError::InvalidColors(t)) if t == "abc"
        ));
        assert!(matches!(parse_colors(""), Err(InputError::InvalidColors(_))));
        assert!(matches!(parse_colors("3 4"), Err(InputError::InvalidColors(_))));
        assert!(matches!(parse_colors("-"), Err(InputError::InvalidColors(_))));
        assert!(matches!(parse_colors("1e30"), Err(InputError::InvalidColors(_))));
    }

    #[test]
    fn oversized_integers_saturate() {
        assert_eq!(parse_colors("100000000000000000000").expect("k"), i64::MAX);
        assert_eq!(parse_colors("+100000000000000000000").expect("k"), i64::MAX);
        assert_eq!(parse_colors("-100000000000000000000").expect("k"), i64::MIN);
    }
}
