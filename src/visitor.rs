use crate::artifact::{ArtifactSetId, ArtifactSetRef};
use crate::error::CollectError;
use crate::node::GraphNode;

/// Callbacks a traversal driver delivers while walking a resolved graph.
///
/// Per traversal the order is fixed: [`start_artifacts`] once, then any
/// interleaving of [`visit_node`], [`visit_file_artifacts`] and
/// [`visit_edge_artifacts`], then [`finish_artifacts`] once. Calls are
/// serialized, every callback takes `&mut self`.
///
/// Artifact set ids are handed out by the driver in first-encounter order: a
/// new set gets the next unused id, a set seen before keeps its id.
///
/// [`start_artifacts`]: Self::start_artifacts
/// [`visit_node`]: Self::visit_node
/// [`visit_file_artifacts`]: Self::visit_file_artifacts
/// [`visit_edge_artifacts`]: Self::visit_edge_artifacts
/// [`finish_artifacts`]: Self::finish_artifacts
pub trait DependencyArtifactsVisitor {
    fn start_artifacts(&mut self, _root: &GraphNode) -> Result<(), CollectError> {
        Ok(())
    }

    fn visit_node(&mut self, _node: &GraphNode) -> Result<(), CollectError> {
        Ok(())
    }

    /// Artifacts of a file dependency declared directly by `from`.
    fn visit_file_artifacts(
        &mut self,
        from: &GraphNode,
        id: ArtifactSetId,
        artifacts: ArtifactSetRef,
    ) -> Result<(), CollectError>;

    /// Artifacts reached through the edge `from -> to`.
    fn visit_edge_artifacts(
        &mut self,
        from: &GraphNode,
        to: &GraphNode,
        id: ArtifactSetId,
        artifacts: ArtifactSetRef,
    ) -> Result<(), CollectError>;

    fn finish_artifacts(&mut self) -> Result<(), CollectError> {
        Ok(())
    }
}
