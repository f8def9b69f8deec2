use crate::component::ComponentId;

/// Why an edge's artifacts were made unbuildable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    /// Building project dependencies is turned off for this resolution.
    Disabled,
    /// The edge points from another build into the current one.
    IntoCurrentBuild,
}

/// Decides whether the artifacts reached through an edge may schedule the
/// tasks that build them.
///
/// A dependency declared by another build on a project of the current build
/// is never buildable from here: the direct task dependency would bypass the
/// ordering between the two builds and surface as a task cycle.
pub fn suppression(
    build_project_dependencies: bool,
    target_is_local: bool,
    from: &ComponentId,
    to: &ComponentId,
) -> Option<Suppression> {
    if !build_project_dependencies {
        return Some(Suppression::Disabled);
    }

    if !target_is_local {
        return None;
    }

    match (from, to) {
        (ComponentId::Project(from), ComponentId::Project(to))
            if !from.is_current_build() && to.is_current_build() =>
        {
            Some(Suppression::IntoCurrentBuild)
        }
        _ => None,
    }
}

pub fn should_suppress_build_dependencies(
    build_project_dependencies: bool,
    target_is_local: bool,
    from: &ComponentId,
    to: &ComponentId,
) -> bool {
    suppression(build_project_dependencies, target_is_local, from, to).is_some()
}
