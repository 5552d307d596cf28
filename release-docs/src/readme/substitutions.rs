//! Placeholder values for template expansion.

use super::error::CoordinateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Placeholder that always carries the project version.
pub const VERSION_PLACEHOLDER: &str = "version";

/// A `group:name` pair identifying a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct DependencyCoordinate {
    pub group: String,
    pub name: String,
}

impl FromStr for DependencyCoordinate {
    type Err = CoordinateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match split_parts::<2>(value) {
            Some([group, name]) => Ok(Self {
                group: group.to_string(),
                name: name.to_string(),
            }),
            None => Err(CoordinateError {
                value: value.to_string(),
                expected: "group:name",
            }),
        }
    }
}

impl TryFrom<String> for DependencyCoordinate {
    type Error = CoordinateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// A resolved runtime dependency supplied by the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ResolvedDependency {
    /// Returns true if this dependency is the one identified by `coordinate`.
    #[must_use]
    pub fn matches(&self, coordinate: &DependencyCoordinate) -> bool {
        self.group == coordinate.group && self.name == coordinate.name
    }
}

impl FromStr for ResolvedDependency {
    type Err = CoordinateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match split_parts::<3>(value) {
            Some([group, name, version]) => Ok(Self {
                group: group.to_string(),
                name: name.to_string(),
                version: version.to_string(),
            }),
            None => Err(CoordinateError {
                value: value.to_string(),
                expected: "group:name:version",
            }),
        }
    }
}

/// Splits `value` on `:` into exactly `N` non-empty, trimmed parts.
fn split_parts<const N: usize>(value: &str) -> Option<[&str; N]> {
    let parts: Vec<&str> = value.split(':').map(str::trim).collect();
    if parts.iter().any(|part| part.is_empty()) {
        return None;
    }
    parts.try_into().ok()
}

/// Finds the version of the dependency identified by `coordinate`.
///
/// Returns `None` when the dependency is not part of `dependencies`; callers
/// decide whether that is fatal.
#[must_use]
pub fn find_dependency_version<'a>(
    dependencies: &'a [ResolvedDependency],
    coordinate: &DependencyCoordinate,
) -> Option<&'a str> {
    dependencies
        .iter()
        .find(|dependency| dependency.matches(coordinate))
        .map(|dependency| dependency.version.as_str())
}

/// Placeholder name to replacement value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubstitutionMap(BTreeMap<String, String>);

impl SubstitutionMap {
    /// Creates a map holding the project version.
    pub fn new(version: impl Into<String>) -> Self {
        let mut map = Self::default();
        map.insert(VERSION_PLACEHOLDER, version);
        map
    }

    /// Sets `placeholder` to `value`, replacing any previous value.
    pub fn insert(&mut self, placeholder: impl Into<String>, value: impl Into<String>) {
        self.0.insert(placeholder.into(), value.into());
    }

    /// Returns the value for `placeholder`, if any.
    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.0.get(placeholder).map(String::as_str)
    }

    /// Returns true if `placeholder` has a value.
    pub fn contains(&self, placeholder: &str) -> bool {
        self.0.contains_key(placeholder)
    }

    /// Adds one entry per resolved dependency placeholder.
    ///
    /// Placeholders whose dependency is not in `dependencies` are left out and
    /// returned, so expanding a template that uses them fails.
    pub fn resolve_dependencies(
        &mut self,
        placeholders: &BTreeMap<String, DependencyCoordinate>,
        dependencies: &[ResolvedDependency],
    ) -> Vec<String> {
        let mut unresolved = Vec::new();
        for (placeholder, coordinate) in placeholders {
            match find_dependency_version(dependencies, coordinate) {
                Some(version) => self.insert(placeholder.as_str(), version),
                None => unresolved.push(placeholder.clone()),
            }
        }
        unresolved
    }
}
