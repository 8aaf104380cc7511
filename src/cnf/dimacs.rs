use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::cnf::{Cnf, Lit};

#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("failed to read dimacs input")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid header, expected: p cnf <vars> <clauses>")]
    BadHeader { line: usize },
    #[error("line {line}: duplicate problem header")]
    DuplicateHeader { line: usize },
    #[error("missing problem header")]
    MissingHeader,
    #[error("line {line}: invalid literal '{token}'")]
    BadLiteral { line: usize, token: String },
    #[error("line {line}: literal {lit} exceeds declared variable count {num_vars}")]
    VarOutOfRange { line: usize, lit: i64, num_vars: u32 },
    #[error("last clause is not terminated by 0")]
    UnterminatedClause,
    #[error("header declares {declared} clauses, found {found}")]
    ClauseCountMismatch { declared: usize, found: usize },
}

pub fn to_dimacs(cnf: &Cnf) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "p cnf {} {}", cnf.num_vars, cnf.clauses.len());
    for clause in &cnf.clauses {
        push_clause_line(&mut out, clause);
    }
    out
}

/// Streams the same text as [`to_dimacs`] without building it in memory.
pub fn write_dimacs<W: Write>(w: &mut W, cnf: &Cnf) -> io::Result<()> {
    writeln!(w, "p cnf {} {}", cnf.num_vars, cnf.clauses.len())?;
    let mut line = String::new();
    for clause in &cnf.clauses {
        line.clear();
        push_clause_line(&mut line, clause);
        w.write_all(line.as_bytes())?;
    }
    w.flush()
}

fn push_clause_line(out: &mut String, clause: &[Lit]) {
    for &lit in clause {
        let _ = write!(out, "{} ", lit.to_dimacs());
    }
    out.push_str("0\n");
}

pub fn parse_dimacs_str(s: &str) -> Result<Cnf, DimacsError> {
    parse_dimacs_reader(io::Cursor::new(s.as_bytes()))
}

pub fn parse_dimacs_reader<R: BufRead>(r: R) -> Result<Cnf, DimacsError> {
    let mut header: Option<(u32, usize)> = None;
    let mut clauses = Vec::<Vec<Lit>>::new();
    let mut current = Vec::<Lit>::new();

    for (idx, line) in r.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let clean = line.trim();
        if clean.is_empty() || clean.starts_with('c') {
            continue;
        }
        // SATLIB files end with a '%' marker
        if clean.starts_with('%') {
            break;
        }

        if clean.starts_with('p') {
            if header.is_some() {
                return Err(DimacsError::DuplicateHeader { line: line_no });
            }
            header = Some(parse_header(clean, line_no)?);
            continue;
        }

        let Some((num_vars, _)) = header else {
            return Err(DimacsError::MissingHeader);
        };

        for token in clean.split_whitespace() {
            let n = token.parse::<i64>().map_err(|_| DimacsError::BadLiteral {
                line: line_no,
                token: token.to_owned(),
            })?;
            if n == 0 {
                clauses.push(std::mem::take(&mut current));
                continue;
            }
            match Lit::from_dimacs(n) {
                Some(lit) if lit.var <= num_vars => current.push(lit),
                _ => {
                    return Err(DimacsError::VarOutOfRange {
                        line: line_no,
                        lit: n,
                        num_vars,
                    });
                }
            }
        }
    }

    let (num_vars, declared) = header.ok_or(DimacsError::MissingHeader)?;
    if !current.is_empty() {
        return Err(DimacsError::UnterminatedClause);
    }
    if clauses.len() != declared {
        return Err(DimacsError::ClauseCountMismatch {
            declared,
            found: clauses.len(),
        });
    }
    Ok(Cnf { num_vars, clauses })
}

fn parse_header(line: &str, line_no: usize) -> Result<(u32, usize), DimacsError> {
    let parts = line.split_whitespace().collect::<Vec<_>>();
    if parts.len() != 4 || parts[0] != "p" || parts[1] != "cnf" {
        return Err(DimacsError::BadHeader { line: line_no });
    }
    let num_vars = parts[2]
        .parse::<u32>()
        .map_err(|_| DimacsError::BadHeader { line: line_no })?;
    let num_clauses = parts[3]
        .parse::<usize>()
        .map_err(|_| DimacsError::BadHeader { line: line_no })?;
    Ok((num_vars, num_clauses))
}
