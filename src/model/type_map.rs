//! Bidirectional object ⇄ type mapping for constants and objects.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Objects grouped by their owning type.
///
/// Types are matched case-insensitively throughout (PDDL identifiers are
/// case-insensitive); the declared spelling is kept for display. Object
/// lists preserve declaration order and are unique per type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeObjectMap {
    /// Keyed by lowercased type name, in insertion order.
    entries: IndexMap<SmolStr, TypeObjects>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TypeObjects {
    /// Declared spelling of the type name.
    type_name: SmolStr,
    objects: Vec<SmolStr>,
}

impl TypeObjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of types in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one object under a type. Duplicate objects (case-insensitive)
    /// under the same type are ignored.
    pub fn add(&mut self, type_name: &str, object: &str) {
        let key = SmolStr::from(type_name.to_ascii_lowercase());
        let entry = self.entries.entry(key).or_insert_with(|| TypeObjects {
            type_name: type_name.into(),
            objects: Vec::new(),
        });
        if !entry.objects.iter().any(|o| o.eq_ignore_ascii_case(object)) {
            entry.objects.push(object.into());
        }
    }

    /// Add several objects under a type, preserving their order.
    pub fn add_all<'a>(&mut self, type_name: &str, objects: impl IntoIterator<Item = &'a str>) {
        for object in objects {
            self.add(type_name, object);
        }
    }

    /// Declared type names in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.type_name.as_str())
    }

    /// Objects declared under `type_name` (case-insensitive), in
    /// declaration order. Empty when the type is unknown.
    pub fn objects(&self, type_name: &str) -> &[SmolStr] {
        self.entries
            .get(type_name.to_ascii_lowercase().as_str())
            .map(|e| e.objects.as_slice())
            .unwrap_or(&[])
    }

    /// The owning type of `object` (case-insensitive), when declared.
    pub fn type_of(&self, object: &str) -> Option<&str> {
        self.entries.values().find_map(|e| {
            e.objects
                .iter()
                .any(|o| o.eq_ignore_ascii_case(object))
                .then_some(e.type_name.as_str())
        })
    }

    /// Union this map with another into a new map.
    ///
    /// Per shared type (case-insensitive) the result holds this map's
    /// objects followed by `other`'s; types unique to either side carry
    /// over unchanged.
    pub fn merge(&self, other: &TypeObjectMap) -> TypeObjectMap {
        let mut merged = self.clone();
        for entry in other.entries.values() {
            merged.add_all(&entry.type_name, entry.objects.iter().map(|o| o.as_str()));
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut map = TypeObjectMap::new();
        map.add_all("truck", ["t1", "t2"]);
        map.add("city", "paris");

        assert_eq!(map.len(), 2);
        assert_eq!(map.objects("truck"), &["t1", "t2"]);
        assert_eq!(map.objects("TRUCK"), &["t1", "t2"]);
        assert_eq!(map.type_of("PARIS"), Some("city"));
        assert_eq!(map.type_of("nowhere"), None);
    }

    #[test]
    fn test_duplicate_objects_are_unique_per_type() {
        let mut map = TypeObjectMap::new();
        map.add("truck", "t1");
        map.add("truck", "T1");
        assert_eq!(map.objects("truck").len(), 1);
    }

    #[test]
    fn test_merge_concatenates_shared_type() {
        let mut constants = TypeObjectMap::new();
        constants.add_all("truck", ["t1", "t2"]);
        constants.add("depot", "d1");

        let mut objects = TypeObjectMap::new();
        objects.add_all("Truck", ["t3"]);

        let merged = constants.merge(&objects);
        // only one type is shared, so total length is unchanged
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.objects("truck"), &["t1", "t2", "t3"]);
        assert_eq!(merged.objects("depot"), &["d1"]);
    }

    #[test]
    fn test_merge_keeps_both_sides_unchanged() {
        let mut a = TypeObjectMap::new();
        a.add("t", "x");
        let mut b = TypeObjectMap::new();
        b.add("u", "y");

        let merged = a.merge(&b);
        assert_eq!(merged.len(), 2);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }
}
