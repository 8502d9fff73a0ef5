//! Disjoint-set forest with union by rank.

/// Partition of vertices `0..n` into disjoint sets.
///
/// Without path compression `find` climbs parent links on every call. Path
/// compression can be switched on; it never changes which root a set ends up
/// with, only how quickly it is reached.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    path_compression: bool,
}

impl UnionFind {
    /// Create `n` singleton sets, each vertex its own parent with rank 0.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            path_compression: false,
        }
    }

    /// Enable or disable path compression in [`find`](Self::find).
    pub fn with_path_compression(mut self, enable: bool) -> Self {
        self.path_compression = enable;
        self
    }

    /// Number of vertices tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether no vertices are tracked.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        if self.path_compression {
            let mut node = x;
            while self.parent[node] != root {
                let next = self.parent[node];
                self.parent[node] = root;
                node = next;
            }
        }

        root
    }

    /// Merge the sets with roots `x_root` and `y_root`.
    ///
    /// The lower-rank root is attached under the higher-rank one. On equal
    /// rank `x_root` becomes the parent and its rank grows by one.
    pub fn union_roots(&mut self, x_root: usize, y_root: usize) {
        if x_root == y_root {
            return;
        }

        match self.rank[x_root].cmp(&self.rank[y_root]) {
            std::cmp::Ordering::Less => {
                self.parent[x_root] = y_root;
            },
            std::cmp::Ordering::Greater => {
                self.parent[y_root] = x_root;
            },
            std::cmp::Ordering::Equal => {
                self.parent[y_root] = x_root;
                self.rank[x_root] += 1;
            },
        }
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        self.union_roots(x_root, y_root);
        true
    }

    #[cfg(test)]
    fn set_count(&mut self) -> usize {
        (0..self.len()).filter(|&i| self.find(i) == i).count()
    }
}
