//! Wire-connectivity representation of diagrams.
//!
//! Two symmetric traced diagrams built by different operation sequences can
//! denote the same morphism; structural equality on [`Diagram`] cannot see
//! this. Translating both to a [`Hypergraph`] — nodes are wires, hyperedges
//! are boxes, feedback unifies nodes — and comparing canonical forms decides
//! equality up to the symmetric traced axioms for monogamous diagrams.

use std::collections::VecDeque;

use core::fmt;

use thiserror::Error;

use crate::diagram::{Boundary, Diagram, Term};
use crate::union_find::UnionFind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// A box occurrence: an ordered list of source nodes and target nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperedge<B> {
    pub label: B,
    pub sources: Vec<NodeId>,
    pub targets: Vec<NodeId>,
}

/// A hypergraph with source and target interfaces. Node order is the
/// creation order of the translation that produced it; use
/// [`Hypergraph::canonical`] before comparing graphs from different
/// translations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hypergraph<O, B> {
    pub nodes: Vec<O>,
    pub edges: Vec<Hyperedge<B>>,
    pub sources: Vec<NodeId>,
    pub targets: Vec<NodeId>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EqualityError {
    /// A wire is consumed or produced by more than one box, so the
    /// canonical traversal is not well-defined.
    #[error("diagram is not monogamous: wire {0} has multiple producers or consumers")]
    NotMonogamous(usize),
}

// Accumulates nodes, edges and unifications while walking a diagram's layers
// with a frontier of live wire nodes.
struct Builder<O, B> {
    nodes: Vec<O>,
    edges: Vec<Hyperedge<B>>,
    uf: UnionFind,
}

impl<O, B> Builder<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    fn new_node(&mut self, label: O) -> usize {
        self.nodes.push(label);
        self.uf.push()
    }

    fn push_diagram(&mut self, diagram: &Diagram<O, B>, mut frontier: Vec<usize>) -> Vec<usize> {
        for layer in diagram.layers() {
            let left = layer.left.len();
            let middle = layer.term.dom().len();
            let input = frontier[left..left + middle].to_vec();
            let output = self.push_term(&layer.term, input);
            frontier.splice(left..left + middle, output);
        }
        frontier
    }

    fn push_term(&mut self, term: &Term<O, B>, input: Vec<usize>) -> Vec<usize> {
        match term {
            Term::Box(g) => {
                let fresh: Vec<usize> = g
                    .cod
                    .iter()
                    .map(|label| self.new_node(label.clone()))
                    .collect();
                // A daggered box is the underlying box with its ports
                // reversed, not a new generator.
                let (sources, targets) = if g.daggered {
                    (fresh.clone(), input)
                } else {
                    (input, fresh.clone())
                };
                self.edges.push(Hyperedge {
                    label: g.label.clone(),
                    sources: sources.into_iter().map(NodeId).collect(),
                    targets: targets.into_iter().map(NodeId).collect(),
                });
                fresh
            }
            Term::Swap(_, _) => vec![input[1], input[0]],
            Term::Cap(t) => {
                let node = self.new_node(t.clone());
                vec![node, node]
            }
            Term::Cup(_) => {
                self.uf.union(input[0], input[1]);
                Vec::new()
            }
            Term::Trace(tr) => {
                let fed = self.new_node(tr.traced_object().clone());
                let arg_frontier: Vec<usize> = if tr.left() {
                    core::iter::once(fed).chain(input).collect()
                } else {
                    let mut v = input;
                    v.push(fed);
                    v
                };
                let mut output = self.push_diagram(tr.arg(), arg_frontier);
                let back = if tr.left() {
                    output.remove(0)
                } else {
                    output.pop().expect("traced argument has an output wire")
                };
                self.uf.union(back, fed);
                output
            }
        }
    }

    // Collapse unified nodes, numbering classes by first occurrence.
    fn quotient(self, sources: Vec<usize>, targets: Vec<usize>) -> Hypergraph<O, B> {
        let mut index = vec![usize::MAX; self.nodes.len()];
        let mut nodes = Vec::new();
        for v in 0..self.nodes.len() {
            let root = self.uf.find(v);
            if index[root] == usize::MAX {
                index[root] = nodes.len();
                nodes.push(self.nodes[v].clone());
            }
        }
        let renumber = |v: usize| NodeId(index[self.uf.find(v)]);
        let edges = self
            .edges
            .iter()
            .map(|e| Hyperedge {
                label: e.label.clone(),
                sources: e.sources.iter().map(|n| renumber(n.0)).collect(),
                targets: e.targets.iter().map(|n| renumber(n.0)).collect(),
            })
            .collect();
        Hypergraph {
            nodes,
            edges,
            sources: sources.into_iter().map(|v| renumber(v)).collect(),
            targets: targets.into_iter().map(|v| renumber(v)).collect(),
        }
    }
}

impl<O, B> Diagram<O, B>
where
    O: Clone + PartialEq + fmt::Display,
    B: Clone + PartialEq + fmt::Display,
{
    /// Translate the diagram into its wire-connectivity hypergraph.
    ///
    /// Boxes become hyperedges, swaps permute the frontier, caps and cups
    /// create and annihilate node pairs, and each trace unifies the fed-back
    /// output node with the corresponding input node.
    pub fn to_hypergraph(&self) -> Hypergraph<O, B> {
        let mut builder = Builder {
            nodes: Vec::new(),
            edges: Vec::new(),
            uf: UnionFind::new(),
        };
        let sources: Vec<usize> = self
            .dom()
            .iter()
            .map(|label| builder.new_node(label.clone()))
            .collect();
        let targets = builder.push_diagram(self, sources.clone());
        builder.quotient(sources, targets)
    }

    /// Decide equality of symmetric traced diagrams by translation to
    /// canonical hypergraphs.
    ///
    /// # Errors
    ///
    /// Fails when either translation is not monogamous.
    pub fn hypergraph_equality(&self, other: &Self) -> Result<bool, EqualityError> {
        self.to_hypergraph().isomorphic(&other.to_hypergraph())
    }
}

struct Canon {
    node_order: Vec<Option<usize>>,
    edge_order: Vec<Option<usize>>,
    next_node: usize,
    next_edge: usize,
    queue: VecDeque<usize>,
}

impl Canon {
    fn visit_node(&mut self, v: usize) {
        if self.node_order[v].is_none() {
            self.node_order[v] = Some(self.next_node);
            self.next_node += 1;
            self.queue.push_back(v);
        }
    }

    fn visit_edge(&mut self, e: usize, sources: &[NodeId], targets: &[NodeId]) {
        if self.edge_order[e].is_some() {
            return;
        }
        self.edge_order[e] = Some(self.next_edge);
        self.next_edge += 1;
        for v in sources.iter().chain(targets) {
            self.visit_node(v.0);
        }
    }
}

impl<O: Clone + PartialEq, B: Clone + PartialEq> Hypergraph<O, B> {
    /// Whether every wire is consumed and produced by at most one box.
    pub fn is_monogamous(&self) -> bool {
        self.check_monogamy().is_ok()
    }

    fn check_monogamy(&self) -> Result<(), EqualityError> {
        let mut consumed = vec![0usize; self.nodes.len()];
        let mut produced = vec![0usize; self.nodes.len()];
        for e in &self.edges {
            for s in &e.sources {
                consumed[s.0] += 1;
            }
            for t in &e.targets {
                produced[t.0] += 1;
            }
        }
        for v in 0..self.nodes.len() {
            if consumed[v] > 1 || produced[v] > 1 {
                return Err(EqualityError::NotMonogamous(v));
            }
        }
        Ok(())
    }

    /// Renumber nodes and edges by a traversal anchored at the boundary
    /// interfaces, so that graphs of equal diagrams built by different
    /// operation sequences coincide.
    ///
    /// Closed components have no anchor and keep their insertion order.
    ///
    /// # Errors
    ///
    /// Fails when the graph is not monogamous: a wire with two consumers
    /// leaves the traversal order ill-defined.
    pub fn canonical(&self) -> Result<Self, EqualityError> {
        self.check_monogamy()?;
        let n = self.nodes.len();
        let m = self.edges.len();

        let mut consumer: Vec<Option<usize>> = vec![None; n];
        let mut producer: Vec<Option<usize>> = vec![None; n];
        for (i, e) in self.edges.iter().enumerate() {
            for s in &e.sources {
                consumer[s.0] = Some(i);
            }
            for t in &e.targets {
                producer[t.0] = Some(i);
            }
        }

        let mut canon = Canon {
            node_order: vec![None; n],
            edge_order: vec![None; m],
            next_node: 0,
            next_edge: 0,
            queue: VecDeque::new(),
        };
        for v in self.sources.iter().chain(&self.targets) {
            canon.visit_node(v.0);
        }
        let mut next_seed = 0;
        loop {
            while let Some(v) = canon.queue.pop_front() {
                for e in [consumer[v], producer[v]].into_iter().flatten() {
                    canon.visit_edge(e, &self.edges[e].sources, &self.edges[e].targets);
                }
            }
            while next_seed < m && canon.edge_order[next_seed].is_some() {
                next_seed += 1;
            }
            if next_seed == m {
                break;
            }
            canon.visit_edge(
                next_seed,
                &self.edges[next_seed].sources,
                &self.edges[next_seed].targets,
            );
        }
        for v in 0..n {
            if canon.node_order[v].is_none() {
                canon.node_order[v] = Some(canon.next_node);
                canon.next_node += 1;
            }
        }

        let node_order: Vec<usize> = canon
            .node_order
            .into_iter()
            .map(|o| o.expect("canonical node numbering is total"))
            .collect();
        let edge_order: Vec<usize> = canon
            .edge_order
            .into_iter()
            .map(|o| o.expect("canonical edge numbering is total"))
            .collect();

        let mut nodes: Vec<Option<O>> = vec![None; n];
        for (v, &nv) in node_order.iter().enumerate() {
            nodes[nv] = Some(self.nodes[v].clone());
        }
        let mut edges: Vec<Option<Hyperedge<B>>> = vec![None; m];
        for (e, &ne) in edge_order.iter().enumerate() {
            edges[ne] = Some(Hyperedge {
                label: self.edges[e].label.clone(),
                sources: self.edges[e]
                    .sources
                    .iter()
                    .map(|v| NodeId(node_order[v.0]))
                    .collect(),
                targets: self.edges[e]
                    .targets
                    .iter()
                    .map(|v| NodeId(node_order[v.0]))
                    .collect(),
            });
        }
        Ok(Hypergraph {
            nodes: nodes
                .into_iter()
                .map(|o| o.expect("canonical node permutation is total"))
                .collect(),
            edges: edges
                .into_iter()
                .map(|e| e.expect("canonical edge permutation is total"))
                .collect(),
            sources: self.sources.iter().map(|v| NodeId(node_order[v.0])).collect(),
            targets: self.targets.iter().map(|v| NodeId(node_order[v.0])).collect(),
        })
    }

    /// Whether two graphs coincide after canonical renumbering.
    ///
    /// # Errors
    ///
    /// Fails when either graph is not monogamous.
    pub fn isomorphic(&self, other: &Self) -> Result<bool, EqualityError> {
        Ok(self.canonical()? == other.canonical()?)
    }
}
