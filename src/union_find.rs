// Union-find over a growable index set, used to quotient wire nodes.

#[derive(Debug, Clone, Default)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fresh singleton class; returns its index.
    pub fn push(&mut self) -> usize {
        let index = self.parent.len();
        self.parent.push(index);
        self.size.push(1);
        index
    }

    pub fn find(&self, x: usize) -> usize {
        let mut node = x;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }
        let (root, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[root] = parent;
        self.size[parent] += self.size[root];
    }
}
