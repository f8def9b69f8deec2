use std::collections::HashSet;

use crate::artifact::{ArtifactSetRef, BuildTask, ResolvedArtifact};
use crate::config::SortOrder;

/// Artifact sets visited during one traversal, in the order their ids were
/// first seen.
///
/// The result does not sort anything. It carries the [`SortOrder`] so that the
/// consumer flattening it into a file listing can apply it.
#[derive(Debug, Clone)]
pub struct VisitedArtifactsResult {
    sort_order: SortOrder,
    sets: Vec<ArtifactSetRef>,
}

impl VisitedArtifactsResult {
    pub(crate) fn new(sort_order: SortOrder, sets: Vec<ArtifactSetRef>) -> Self {
        Self { sort_order, sets }
    }

    pub fn artifact_sets(&self) -> &[ArtifactSetRef] {
        &self.sets
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Artifacts of every recorded set, in slot order.
    pub fn artifacts(&self) -> Vec<ResolvedArtifact> {
        self.sets.iter().flat_map(|set| set.artifacts()).collect()
    }

    /// Tasks that have to run before the artifacts are available, first
    /// occurrence wins.
    pub fn build_dependencies(&self) -> Vec<BuildTask> {
        let mut seen = HashSet::new();

        self.sets
            .iter()
            .flat_map(|set| set.build_dependencies())
            .filter(|task| seen.insert(task.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::NoBuildDependencies;
    use crate::artifact::tests::project_set;

    #[test]
    fn test_build_dependencies_dedup() {
        let core = project_set(":core");
        let api = project_set(":api");
        let result = VisitedArtifactsResult::new(
            SortOrder::ConsumerFirst,
            vec![core.clone(), api, core],
        );

        assert_eq!(result.sort_order(), SortOrder::ConsumerFirst);
        assert_eq!(result.len(), 3);
        assert_eq!(
            result.build_dependencies(),
            vec![BuildTask::new(":core:jar"), BuildTask::new(":api:jar")]
        );
    }

    #[test]
    fn test_suppressed_sets_contribute_artifacts_only() {
        let core = project_set(":core");
        let api = NoBuildDependencies::wrap(project_set(":api"));
        let result = VisitedArtifactsResult::new(SortOrder::Default, vec![core, api]);

        assert_eq!(result.build_dependencies(), vec![BuildTask::new(":core:jar")]);

        let names: Vec<_> = result
            .artifacts()
            .into_iter()
            .map(|artifact| artifact.name.to_string())
            .collect();
        assert_eq!(names, vec![":core.jar", ":api.jar"]);
    }

    #[test]
    fn test_empty() {
        let result = VisitedArtifactsResult::new(SortOrder::Default, Vec::new());
        assert!(result.is_empty());
        assert!(result.artifacts().is_empty());
    }
}
