//! Artifact sets and the decorator that makes them unbuildable.
//!
//! An [`ArtifactSet`] is opaque to the collector. It answers two questions:
//! which artifacts it stands for, and which tasks must run before those
//! artifacts exist. The second answer is what lets resolving a configuration
//! schedule the work producing its files. [`NoBuildDependencies`] keeps the
//! first answer and drops the second.

use std::fmt::Debug;
use std::sync::Arc;

use camino::Utf8PathBuf;

use crate::component::{ArcStr, ComponentId};

/// Shared handle to an artifact set. Identity is pointer identity.
pub type ArtifactSetRef = Arc<dyn ArtifactSet>;

/// Traversal-assigned identity of an artifact set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactSetId(pub usize);

impl From<usize> for ArtifactSetId {
    fn from(value: usize) -> Self {
        ArtifactSetId(value)
    }
}

/// A single file produced by some component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub owner: ComponentId,
    pub name: ArcStr,
    pub file: Utf8PathBuf,
}

/// A task that has to run before an artifact is available, e.g. `:core:jar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildTask(pub ArcStr);

impl BuildTask {
    pub fn new(path: impl Into<ArcStr>) -> Self {
        BuildTask(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

pub trait ArtifactSet: Debug + Send + Sync {
    /// The artifacts this set stands for.
    fn artifacts(&self) -> Vec<ResolvedArtifact>;

    /// Tasks producing the artifacts of this set.
    fn build_dependencies(&self) -> Vec<BuildTask>;

    fn is_buildable(&self) -> bool {
        !self.build_dependencies().is_empty()
    }

    /// The set this one decorates, if any.
    fn decorated(&self) -> Option<&ArtifactSetRef> {
        None
    }
}

/// Plain artifact set with a fixed list of artifacts and producing tasks.
#[derive(Debug, Clone, Default)]
pub struct DefaultArtifactSet {
    artifacts: Vec<ResolvedArtifact>,
    tasks: Vec<BuildTask>,
}

impl DefaultArtifactSet {
    pub fn new(artifacts: Vec<ResolvedArtifact>, tasks: Vec<BuildTask>) -> Self {
        Self { artifacts, tasks }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Artifacts that already exist on disk, nothing has to be built.
    pub fn files(artifacts: Vec<ResolvedArtifact>) -> Self {
        Self::new(artifacts, Vec::new())
    }
}

impl ArtifactSet for DefaultArtifactSet {
    fn artifacts(&self) -> Vec<ResolvedArtifact> {
        self.artifacts.clone()
    }

    fn build_dependencies(&self) -> Vec<BuildTask> {
        self.tasks.clone()
    }
}

/// Wraps an artifact set so that resolving it never schedules a build.
#[derive(Debug, Clone)]
pub struct NoBuildDependencies {
    inner: ArtifactSetRef,
}

impl NoBuildDependencies {
    pub fn new(inner: ArtifactSetRef) -> Self {
        Self { inner }
    }

    pub fn wrap(inner: ArtifactSetRef) -> ArtifactSetRef {
        Arc::new(Self::new(inner))
    }

    pub fn inner(&self) -> &ArtifactSetRef {
        &self.inner
    }
}

impl ArtifactSet for NoBuildDependencies {
    fn artifacts(&self) -> Vec<ResolvedArtifact> {
        self.inner.artifacts()
    }

    fn build_dependencies(&self) -> Vec<BuildTask> {
        Vec::new()
    }

    fn decorated(&self) -> Option<&ArtifactSetRef> {
        Some(&self.inner)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::component::BuildIdentifier;

    /// Buildable set owned by a project of the current build.
    pub(crate) fn project_set(path: &str) -> ArtifactSetRef {
        let owner = ComponentId::project(BuildIdentifier::current("app"), path);
        let artifact = ResolvedArtifact {
            owner,
            name: format!("{path}.jar").into(),
            file: Utf8PathBuf::from(format!("build/libs{}.jar", path.replace(':', "/"))),
        };

        Arc::new(DefaultArtifactSet::new(
            vec![artifact],
            vec![BuildTask::new(format!("{path}:jar"))],
        ))
    }

    #[test]
    fn test_default_set() {
        let set = project_set(":core");

        assert!(set.is_buildable());
        assert_eq!(set.build_dependencies(), vec![BuildTask::new(":core:jar")]);
        assert_eq!(set.artifacts()[0].file, Utf8PathBuf::from("build/libs/core.jar"));
        assert!(set.decorated().is_none());
    }

    #[test]
    fn test_decorator_keeps_content() {
        let set = project_set(":core");
        let wrapped = NoBuildDependencies::wrap(set.clone());
        assert!(Arc::ptr_eq(NoBuildDependencies::new(set.clone()).inner(), &set));

        assert!(!wrapped.is_buildable());
        assert!(wrapped.build_dependencies().is_empty());
        assert_eq!(wrapped.artifacts(), set.artifacts());
        assert!(Arc::ptr_eq(wrapped.decorated().unwrap(), &set));
    }

    #[test]
    fn test_file_set_not_buildable() {
        let set = DefaultArtifactSet::files(vec![ResolvedArtifact {
            owner: ComponentId::other("libs/a.jar"),
            name: "a.jar".into(),
            file: Utf8PathBuf::from("libs/a.jar"),
        }]);

        assert!(!set.is_buildable());
        assert_eq!(set.artifacts().len(), 1);
    }
}
