use indexmap::IndexMap;

use crate::cnf::cnf::Lit;
use crate::graph::Vertex;

use super::encode::EncodeError;

/// Largest variable id accepted by common DIMACS consumers.
pub const MAX_DIMACS_VAR: u32 = i32::MAX as u32;

/// Bijection between (vertex, color) pairs and SAT variables.
///
/// Vertex `i` (in the order given to [`VarMap::new`]) owns the block
/// `i * k + 1 ..= i * k + k`, color `c` being `i * k + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarMap {
    colors: u32,
    base: IndexMap<Vertex, u32>,
}

impl VarMap {
    pub fn new(vertices: &[Vertex], colors: u32) -> Result<Self, EncodeError> {
        if colors == 0 {
            return Err(EncodeError::NoColors(0));
        }
        let mut base = IndexMap::<Vertex, u32>::with_capacity(vertices.len());
        for &v in vertices {
            let slot = base.len() as u64 * u64::from(colors);
            if slot + u64::from(colors) > u64::from(MAX_DIMACS_VAR) {
                return Err(EncodeError::TooManyVariables {
                    vertices: vertices.len(),
                    colors: i64::from(colors),
                });
            }
            base.entry(v).or_insert(slot as u32);
        }
        Ok(Self { colors, base })
    }

    pub fn num_vertices(&self) -> usize {
        self.base.len()
    }

    pub fn num_vars(&self) -> u32 {
        // bounded by MAX_DIMACS_VAR in new()
        self.base.len() as u32 * self.colors
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.base.keys().copied()
    }

    /// `None` when `vertex` is unknown or `color` is outside `1..=k`.
    pub fn var(&self, vertex: Vertex, color: u32) -> Option<u32> {
        if color == 0 || color > self.colors {
            return None;
        }
        self.base.get(&vertex).map(|&b| b + color)
    }

    pub(crate) fn lit(&self, vertex: Vertex, color: u32) -> Result<Lit, EncodeError> {
        self.var(vertex, color)
            .map(Lit::pos)
            .ok_or(EncodeError::UnknownVertex(vertex))
    }

    /// Inverse of [`VarMap::var`].
    pub fn decode(&self, var: u32) -> Option<(Vertex, u32)> {
        if var == 0 || var > self.num_vars() {
            return None;
        }
        let idx = ((var - 1) / self.colors) as usize;
        let color = (var - 1) % self.colors + 1;
        self.base.get_index(idx).map(|(&v, _)| (v, color))
    }
}
