use std::collections::BTreeMap;

use crate::body::descriptor::BodyDescriptor;
use crate::constants::BodyName;

/// Mapping from body name to descriptor, as consumed by the simulation engine.
///
/// A registry is an immutable snapshot: [`BodyRegistry::merged`] builds a new registry instead
/// of updating this one, the owner decides when to publish it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyRegistry {
    bodies: BTreeMap<BodyName, BodyDescriptor>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the given bodies; later duplicates replace earlier ones
    pub fn from_bodies(bodies: impl IntoIterator<Item = BodyDescriptor>) -> Self {
        BodyRegistry {
            bodies: bodies
                .into_iter()
                .map(|body| (body.name.clone(), body))
                .collect(),
        }
    }

    /// Snapshot of this registry with `bodies` added.
    ///
    /// Bodies are keyed by name; an incoming body replaces an existing entry of the same name.
    ///
    /// Arguments
    /// ---------
    /// * `bodies`: the bodies to merge
    ///
    /// Return
    /// ------
    /// * a new registry, `self` is left untouched
    pub fn merged(&self, bodies: impl IntoIterator<Item = BodyDescriptor>) -> Self {
        let mut merged = self.bodies.clone();
        merged.extend(bodies.into_iter().map(|body| (body.name.clone(), body)));
        BodyRegistry { bodies: merged }
    }

    pub fn get(&self, name: &str) -> Option<&BodyDescriptor> {
        self.bodies.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyDescriptor> {
        self.bodies.values()
    }
}

#[cfg(test)]
mod registry_test {
    use super::*;

    fn body(name: &str, mass: f64) -> BodyDescriptor {
        BodyDescriptor::reference(name, name, mass, 1.0, "#000000", None)
    }

    #[test]
    fn test_merge_is_pure() {
        let base = BodyRegistry::from_bodies([body("sun", 1.0), body("earth", 2.0)]);
        let merged = base.merged([body("apophis", 3.0)]);

        assert_eq!(base.len(), 2);
        assert!(!base.contains("apophis"));
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.names().collect::<Vec<_>>(), vec!["apophis", "earth", "sun"]);
    }

    #[test]
    fn test_merge_overwrites_same_name() {
        let base = BodyRegistry::from_bodies([body("earth", 2.0)]);
        let merged = base.merged([body("earth", 5.0)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("earth").unwrap().mass, 5.0);
        assert_eq!(base.get("earth").unwrap().mass, 2.0);
    }

    #[test]
    fn test_empty() {
        let registry = BodyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.merged(Vec::new()), registry);
        assert_eq!(registry.iter().count(), 0);
    }
}
