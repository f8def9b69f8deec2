use std::sync::Arc;

use crate::artifact::ArtifactSetRef;
use crate::component::{ArcStr, ComponentId};

/// Where the metadata of a configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataSource {
    /// Resolved from source inside one of the participating builds.
    Local,
    /// Resolved from a published component.
    External,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationMetadata {
    pub name: ArcStr,
    pub source: MetadataSource,
}

impl ConfigurationMetadata {
    pub fn local(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            source: MetadataSource::Local,
        }
    }

    pub fn external(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            source: MetadataSource::External,
        }
    }

    pub fn is_local(&self) -> bool {
        self.source == MetadataSource::Local
    }
}

/// One resolved component configuration in the dependency graph.
///
/// Besides its identity a node carries the artifact set it exposes to every
/// edge pointing at it, and the artifact sets of file dependencies it declares
/// directly (those have no graph edge of their own).
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub owner: ComponentId,
    pub metadata: ConfigurationMetadata,
    pub artifacts: ArtifactSetRef,
    pub files: Vec<ArtifactSetRef>,
}

impl GraphNode {
    pub fn new(owner: ComponentId, metadata: ConfigurationMetadata, artifacts: ArtifactSetRef) -> Self {
        Self {
            owner,
            metadata,
            artifacts,
            files: Vec::new(),
        }
    }

    pub fn with_file_dependency(mut self, files: ArtifactSetRef) -> Self {
        self.files.push(files);
        self
    }

    /// A node that publishes nothing, e.g. the root of a resolution.
    pub fn root(owner: ComponentId, metadata: ConfigurationMetadata) -> Self {
        Self::new(owner, metadata, Arc::new(crate::artifact::DefaultArtifactSet::empty()))
    }
}
