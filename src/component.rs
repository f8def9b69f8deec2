//! Component identity as seen by the collector.
//!
//! Identifiers are produced elsewhere during resolution; here they are only
//! read. The one question the collector asks of an identifier is whether the
//! build owning it is the build currently executing, and that question only
//! makes sense for [`ProjectComponentId`]s. Callers narrow a [`ComponentId`]
//! with a `match` before asking.

use std::fmt;
use std::sync::Arc;

use crate::error::CollectError;

/// Atomic reference-counted string type used for identifiers.
pub(crate) type ArcStr = Arc<str>;

/// Identity of one build taking part in a (possibly composite) build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildIdentifier {
    name: ArcStr,
    current: bool,
}

impl BuildIdentifier {
    /// The build that is currently executing.
    pub fn current(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            current: true,
        }
    }

    /// Some other build participating in the composite.
    pub fn included(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            current: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_current_build(&self) -> bool {
        self.current
    }
}

/// A project built from source by one of the participating builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectComponentId {
    build: BuildIdentifier,
    path: ArcStr,
}

impl ProjectComponentId {
    pub fn new(build: BuildIdentifier, path: impl Into<ArcStr>) -> Self {
        Self {
            build,
            path: path.into(),
        }
    }

    pub fn build(&self) -> &BuildIdentifier {
        &self.build
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_current_build(&self) -> bool {
        self.build.is_current_build()
    }
}

/// A published module, e.g. `org.example:lib:1.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleComponentId {
    pub group: ArcStr,
    pub module: ArcStr,
    pub version: ArcStr,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentId {
    Project(ProjectComponentId),
    Module(ModuleComponentId),
    Other(ArcStr),
}

impl ComponentId {
    pub fn project(build: BuildIdentifier, path: impl Into<ArcStr>) -> Self {
        ComponentId::Project(ProjectComponentId::new(build, path))
    }

    pub fn module(
        group: impl Into<ArcStr>,
        module: impl Into<ArcStr>,
        version: impl Into<ArcStr>,
    ) -> Self {
        ComponentId::Module(ModuleComponentId {
            group: group.into(),
            module: module.into(),
            version: version.into(),
        })
    }

    pub fn other(display_name: impl Into<ArcStr>) -> Self {
        ComponentId::Other(display_name.into())
    }

    pub fn as_project(&self) -> Option<&ProjectComponentId> {
        match self {
            ComponentId::Project(id) => Some(id),
            _ => None,
        }
    }

    /// Dynamic form of [`ProjectComponentId::is_current_build`] for callers
    /// holding an un-narrowed identifier.
    pub fn is_current_build(&self) -> Result<bool, CollectError> {
        match self {
            ComponentId::Project(id) => Ok(id.is_current_build()),
            _ => Err(CollectError::IdentifierKindMismatch { id: self.clone() }),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Project(id) => write!(f, "project {}{}", id.build.name(), id.path),
            ComponentId::Module(id) => write!(f, "{}:{}:{}", id.group, id.module, id.version),
            ComponentId::Other(name) => write!(f, "{name}"),
        }
    }
}
