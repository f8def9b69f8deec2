#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod artifact;
mod collector;
mod component;
mod config;
mod error;
mod graph;
mod node;
mod policy;
mod result;
mod utils;
mod visitor;

pub use crate::artifact::{
    ArtifactSet, ArtifactSetId, ArtifactSetRef, BuildTask, DefaultArtifactSet,
    NoBuildDependencies, ResolvedArtifact,
};
pub use crate::collector::ArtifactCollector;
pub use crate::component::{BuildIdentifier, ComponentId, ModuleComponentId, ProjectComponentId};
pub use crate::config::{CollectorConfig, SortOrder};
pub use crate::error::*;
pub use crate::graph::{ResolutionGraph, walk};
pub use crate::node::{ConfigurationMetadata, GraphNode, MetadataSource};
pub use crate::policy::{Suppression, should_suppress_build_dependencies, suppression};
pub use crate::result::VisitedArtifactsResult;
pub use crate::utils::init_logging;
pub use crate::visitor::DependencyArtifactsVisitor;
