//! Type-inheritance graph extracted from the `:types` section.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Directed graph of type inheritance, edges child → parent.
///
/// Vertices keep their declared spelling and insertion order; all lookups
/// are case-insensitive. The graph answers both directions: "which types
/// does `t` inherit from" (edges out) and "which types descend from `t`"
/// (edges in, used by the grounder's eligible-object sets).
#[derive(Debug, Clone, Default)]
pub struct TypeInheritanceGraph {
    /// Declared spellings in insertion order.
    vertices: Vec<SmolStr>,
    /// Lowercased name → index into `vertices`.
    index: FxHashMap<SmolStr, usize>,
    /// (child, parent) vertex indices, in insertion order.
    edges: Vec<(usize, usize)>,
}

impl TypeInheritanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex, returning its index. Idempotent per
    /// case-insensitive name.
    pub fn add_vertex(&mut self, name: &str) -> usize {
        let key = SmolStr::from(name.to_ascii_lowercase());
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.vertices.len();
        self.vertices.push(name.into());
        self.index.insert(key, i);
        i
    }

    /// Record `child - parent`. Vertices are created as needed; duplicate
    /// edges are ignored.
    pub fn add_edge(&mut self, child: &str, parent: &str) {
        let child = self.add_vertex(child);
        let parent = self.add_vertex(parent);
        if !self.edges.contains(&(child, parent)) {
            self.edges.push((child, parent));
        }
    }

    /// Declared type names in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(SmolStr::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name.to_ascii_lowercase().as_str())
    }

    fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Direct parents of `name`, in edge insertion order.
    pub fn edges_from(&self, name: &str) -> Vec<&str> {
        let Some(child) = self.lookup(name) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|(c, _)| *c == child)
            .map(|&(_, p)| self.vertices[p].as_str())
            .collect()
    }

    /// Whether `child` transitively inherits from `ancestor`.
    pub fn inherits_from(&self, child: &str, ancestor: &str) -> bool {
        let (Some(start), Some(target)) = (self.lookup(child), self.lookup(ancestor)) else {
            return false;
        };
        if start == target {
            return false;
        }
        let mut queue = vec![start];
        let mut visited = vec![false; self.vertices.len()];
        visited[start] = true;
        while let Some(v) = queue.pop() {
            for &(c, p) in &self.edges {
                if c == v && !visited[p] {
                    if p == target {
                        return true;
                    }
                    visited[p] = true;
                    queue.push(p);
                }
            }
        }
        false
    }

    /// `name` itself plus every type that transitively has it as an
    /// ancestor, in breadth-first discovery order (edge insertion order per
    /// level). Unknown types yield just the name itself, so direct-object
    /// lookups still work.
    pub fn subtree_pointing_to(&self, name: &str) -> Vec<SmolStr> {
        let Some(start) = self.lookup(name) else {
            return vec![name.into()];
        };
        let mut order = vec![start];
        let mut visited = vec![false; self.vertices.len()];
        visited[start] = true;
        let mut next = 0;
        while next < order.len() {
            let v = order[next];
            next += 1;
            for &(c, p) in &self.edges {
                if p == v && !visited[c] {
                    visited[c] = true;
                    order.push(c);
                }
            }
        }
        order.into_iter().map(|i| self.vertices[i].clone()).collect()
    }
}
