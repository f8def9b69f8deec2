//! A resolved dependency graph and the driver that walks it.
//!
//! The graph is a plain `petgraph` [`Graph`] whose nodes are [`GraphNode`]s
//! and whose edges carry no data: an edge `a -> b` means `a` depends on `b`
//! and receives the artifact set `b` publishes.
//!
//! [`walk`] delivers the visitor protocol over the part of the graph
//! reachable from a root:
//!
//! * nodes are visited breadth-first, outgoing edges in insertion order;
//! * the artifact set of an edge is identified by its target node, so every
//!   edge pointing at the same node reports the same id;
//! * each file dependency of a node has an id of its own;
//! * ids are handed out in first-encounter order, which keeps them gap-free.

use std::collections::{HashMap, HashSet, VecDeque};

use anyhow::Context;
use petgraph::Graph;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::Level;

use crate::artifact::ArtifactSetId;
use crate::node::GraphNode;
use crate::visitor::DependencyArtifactsVisitor;

#[derive(Debug, Default)]
pub struct ResolutionGraph {
    pub(crate) graph: Graph<GraphNode, ()>,
}

impl ResolutionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        self.graph.add_node(node)
    }

    /// Declares that `from` depends on `to`.
    pub fn add_dependency(&mut self, from: NodeIndex, to: NodeIndex) -> EdgeIndex {
        self.graph.add_edge(from, to, ())
    }

    pub fn node(&self, index: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(index)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ArtifactKey {
    Node(NodeIndex),
    File(NodeIndex, usize),
}

/// Assigns ids to artifact sets in first-encounter order.
#[derive(Default)]
struct IdAllocator {
    ids: HashMap<ArtifactKey, ArtifactSetId>,
}

impl IdAllocator {
    fn id(&mut self, key: ArtifactKey) -> ArtifactSetId {
        let next = ArtifactSetId(self.ids.len());
        *self.ids.entry(key).or_insert(next)
    }
}

/// Drives `visitor` over everything reachable from `root`.
pub fn walk<V>(graph: &ResolutionGraph, root: NodeIndex, visitor: &mut V) -> anyhow::Result<()>
where
    V: DependencyArtifactsVisitor + ?Sized,
{
    let graph = &graph.graph;
    let root_node = graph
        .node_weight(root)
        .with_context(|| format!("Root node {} is not part of the graph", root.index()))?;

    let span = tracing::span!(Level::INFO, "walk_artifacts", root = %root_node.owner);
    let _enter = span.enter();

    visitor.start_artifacts(root_node)?;

    let mut ids = IdAllocator::default();
    let mut queue = VecDeque::from([root]);
    let mut seen = HashSet::from([root]);

    while let Some(index) = queue.pop_front() {
        let from = &graph[index];

        visitor
            .visit_node(from)
            .with_context(|| format!("Visiting {}", from.owner))?;

        for (position, files) in from.files.iter().enumerate() {
            let id = ids.id(ArtifactKey::File(index, position));
            visitor
                .visit_file_artifacts(from, id, files.clone())
                .with_context(|| format!("File dependency #{position} of {}", from.owner))?;
        }

        // petgraph lists the newest edge first
        let mut edges: Vec<_> = graph.edges(index).collect();
        edges.sort_by_key(|edge| edge.id());

        for edge in edges {
            let target = edge.target();
            let to = &graph[target];
            let id = ids.id(ArtifactKey::Node(target));

            visitor
                .visit_edge_artifacts(from, to, id, to.artifacts.clone())
                .with_context(|| format!("Edge {} -> {}", from.owner, to.owner))?;

            if seen.insert(target) {
                queue.push_back(target);
            }
        }
    }

    visitor.finish_artifacts()?;

    tracing::info!("visited {} node(s), {} artifact set(s)", seen.len(), ids.ids.len());

    Ok(())
}
