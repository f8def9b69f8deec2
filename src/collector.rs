use std::mem;

use crate::artifact::{ArtifactSetId, ArtifactSetRef, NoBuildDependencies};
use crate::config::{CollectorConfig, SortOrder};
use crate::error::CollectError;
use crate::node::GraphNode;
use crate::policy::suppression;
use crate::result::VisitedArtifactsResult;
use crate::visitor::DependencyArtifactsVisitor;

/// Collects the artifact sets of a traversal and their build dependencies.
///
/// Sets are stored in an arena indexed by [`ArtifactSetId`]. The first set
/// delivered for an id is kept, later deliveries under the same id are
/// ignored. Edges from another build into a project of the current build
/// have their sets wrapped in [`NoBuildDependencies`].
#[derive(Debug)]
pub struct ArtifactCollector {
    build_project_dependencies: bool,
    sort_order: SortOrder,
    sets_by_id: Vec<ArtifactSetRef>,
    completed: bool,
}

impl ArtifactCollector {
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            build_project_dependencies: config.build_project_dependencies,
            sort_order: config.sort_order,
            sets_by_id: Vec::new(),
            completed: false,
        }
    }

    pub fn with(build_project_dependencies: bool, sort_order: SortOrder) -> Self {
        Self::new(CollectorConfig {
            build_project_dependencies,
            sort_order,
        })
    }

    /// Number of slots recorded so far.
    pub fn len(&self) -> usize {
        self.sets_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets_by_id.is_empty()
    }

    /// Hands out the collected sets. The collector accepts no callbacks
    /// afterwards.
    pub fn complete(&mut self) -> Result<VisitedArtifactsResult, CollectError> {
        self.ensure_open("complete")?;
        self.completed = true;

        tracing::debug!(sets = self.sets_by_id.len(), "artifact collection complete");

        Ok(VisitedArtifactsResult::new(
            self.sort_order,
            mem::take(&mut self.sets_by_id),
        ))
    }

    fn ensure_open(&self, callback: &'static str) -> Result<(), CollectError> {
        if self.completed {
            return Err(CollectError::AfterComplete { callback });
        }
        Ok(())
    }

    fn collect(&mut self, id: ArtifactSetId, artifacts: ArtifactSetRef) -> Result<(), CollectError> {
        let ArtifactSetId(id) = id;
        let slots = self.sets_by_id.len();

        if id > slots {
            return Err(CollectError::IdOutOfOrder { id, slots });
        }

        if id == slots {
            tracing::debug!(id, "recording artifact set");
            self.sets_by_id.push(artifacts);
        } else {
            tracing::trace!(id, "artifact set already recorded");
        }

        Ok(())
    }
}

impl Default for ArtifactCollector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}

impl DependencyArtifactsVisitor for ArtifactCollector {
    fn start_artifacts(&mut self, _root: &GraphNode) -> Result<(), CollectError> {
        self.ensure_open("start_artifacts")
    }

    fn visit_node(&mut self, _node: &GraphNode) -> Result<(), CollectError> {
        self.ensure_open("visit_node")
    }

    fn visit_file_artifacts(
        &mut self,
        _from: &GraphNode,
        id: ArtifactSetId,
        artifacts: ArtifactSetRef,
    ) -> Result<(), CollectError> {
        self.ensure_open("visit_file_artifacts")?;
        self.collect(id, artifacts)
    }

    fn visit_edge_artifacts(
        &mut self,
        from: &GraphNode,
        to: &GraphNode,
        id: ArtifactSetId,
        artifacts: ArtifactSetRef,
    ) -> Result<(), CollectError> {
        self.ensure_open("visit_edge_artifacts")?;

        let reason = suppression(
            self.build_project_dependencies,
            to.metadata.is_local(),
            &from.owner,
            &to.owner,
        );

        let artifacts = match reason {
            Some(reason) => {
                tracing::debug!(from = %from.owner, to = %to.owner, ?reason, "suppressing build dependencies");
                NoBuildDependencies::wrap(artifacts)
            }
            None => artifacts,
        };

        self.collect(id, artifacts)
    }

    fn finish_artifacts(&mut self) -> Result<(), CollectError> {
        self.ensure_open("finish_artifacts")
    }
}
