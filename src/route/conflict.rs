//! Duplicate route detection for sidebar entries.

use rustc_hash::FxHashMap;

use super::RoutePath;
use crate::config::FieldPath;

/// A route declared more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConflict {
    /// Route as declared by the later entry.
    pub route: String,
    /// Field of the later (offending) entry.
    pub field: FieldPath,
    /// Field of the entry that first declared the route.
    pub first: FieldPath,
}

/// Find every route that is claimed by more than one entry.
///
/// Input is `(field, declared route)` in document order; the first
/// declaration wins and each later one produces a conflict.
pub fn detect_duplicates<'a, I>(routes: I) -> Vec<RouteConflict>
where
    I: IntoIterator<Item = (FieldPath, &'a str)>,
{
    let mut seen: FxHashMap<String, FieldPath> = FxHashMap::default();
    let mut conflicts = Vec::new();

    for (field, declared) in routes {
        let key = RoutePath::parse(declared).page_key();
        match seen.get(&key) {
            Some(first) => conflicts.push(RouteConflict {
                route: declared.to_string(),
                field,
                first: first.clone(),
            }),
            None => {
                seen.insert(key, field);
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(s: &str) -> FieldPath {
        FieldPath::from(s)
    }

    #[test]
    fn test_no_conflicts() {
        let routes = vec![
            (field("sidebar[0].path"), "/quick/"),
            (field("sidebar[1].path"), "/deploy/"),
            (field("sidebar[1].children[0].path"), "/deploy/docker"),
        ];
        assert!(detect_duplicates(routes).is_empty());
    }

    #[test]
    fn test_sibling_conflict_reports_later_entry() {
        let routes = vec![
            (field("sidebar[0].path"), "/quick/"),
            (field("sidebar[1].path"), "/quick/"),
        ];
        let conflicts = detect_duplicates(routes);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].field.as_str(), "sidebar[1].path");
        assert_eq!(conflicts[0].first.as_str(), "sidebar[0].path");
        assert_eq!(conflicts[0].route, "/quick/");
    }

    #[test]
    fn test_equivalent_spellings_conflict() {
        let routes = vec![
            (field("sidebar[0].path"), "/develop/rule"),
            (field("sidebar[1].children[2].path"), "/develop/rule.md"),
            (field("sidebar[2].path"), "/develop/rule.html"),
        ];
        let conflicts = detect_duplicates(routes);
        assert_eq!(conflicts.len(), 2);
        assert!(
            conflicts
                .iter()
                .all(|c| c.first.as_str() == "sidebar[0].path")
        );
    }
}
