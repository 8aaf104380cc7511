#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn pos(var: u32) -> Self {
        Self::new(var, true)
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    pub fn to_dimacs(self) -> i64 {
        let v = i64::from(self.var);
        if self.sign { v } else { -v }
    }

    /// `None` for 0 and for magnitudes that do not fit a variable id.
    pub fn from_dimacs(n: i64) -> Option<Self> {
        let var = u32::try_from(n.unsigned_abs()).ok()?;
        if var == 0 {
            return None;
        }
        Some(Self::new(var, n > 0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    pub num_vars: u32,
    pub clauses: Vec<Vec<Lit>>,
}

impl Cnf {
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn add_clause(&mut self, clause: Vec<Lit>) {
        self.clauses.push(clause);
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Evaluates under a full assignment indexed by variable (slot 0 unused).
    /// Variables past the end of `model` read as false.
    pub fn eval(&self, model: &[bool]) -> bool {
        self.clauses.iter().all(|clause| {
            clause.iter().any(|&lit| {
                let value = model.get(lit.var as usize).copied().unwrap_or(false);
                value == lit.sign
            })
        })
    }
}
