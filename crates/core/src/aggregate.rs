//! Rebuild parent/children hierarchies from flat join rows.
//!
//! A one-to-many or many-to-many query returns one row per (parent, child)
//! pair, with the child columns all NULL when the outer join found no match.
//! [`aggregate`] folds such a row stream back into one [`Grouped`] value per
//! distinct parent key.
//!
//! Guarantees:
//! - parents come out in first-occurrence order of their key (never re-sorted),
//!   so any `ORDER BY` applied by the query survives;
//! - every row bearing a parent key appends its child (if any) to the same group;
//! - a row without a child still emits its parent, with no child appended;
//! - children are NOT deduplicated: a child row repeated by the join shows up
//!   repeatedly in the output.

use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;

/// A flat row that carries a parent and, optionally, one child.
///
/// The same algorithm serves both directions (performer -> works and
/// work -> performers); the implementing row type decides which side is the
/// parent.
pub trait JoinRow {
    type Key: Eq + Hash;
    type Parent;
    type Child;

    /// Identity of the parent this row belongs to.
    fn parent_key(&self) -> Self::Key;

    /// Split the row into its parent and its child, if the join matched one.
    fn into_parts(self) -> (Self::Parent, Option<Self::Child>);
}

/// One parent and the children accumulated for it, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouped<P, C> {
    pub parent: P,
    pub children: Vec<C>,
}

/// Fold a row stream into parents with their children.
///
/// The parent value kept for a key is the one from its first row; later rows
/// for the same key only contribute their child.
pub fn aggregate<R, I>(rows: I) -> Vec<Grouped<R::Parent, R::Child>>
where
    R: JoinRow,
    I: IntoIterator<Item = R>,
{
    let mut groups: IndexMap<R::Key, Grouped<R::Parent, R::Child>> = IndexMap::new();

    for row in rows {
        let key = row.parent_key();
        let (parent, child) = row.into_parts();

        let group = match groups.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(Grouped {
                parent,
                children: Vec::new(),
            }),
        };

        if let Some(child) = child {
            group.children.push(child);
        }
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal row: parent key/name plus an optional child label.
    struct Row(u32, &'static str, Option<&'static str>);

    impl JoinRow for Row {
        type Key = u32;
        type Parent = (u32, &'static str);
        type Child = &'static str;

        fn parent_key(&self) -> u32 {
            self.0
        }

        fn into_parts(self) -> (Self::Parent, Option<Self::Child>) {
            ((self.0, self.1), self.2)
        }
    }

    fn shape(groups: &[Grouped<(u32, &'static str), &'static str>]) -> Vec<(u32, Vec<&'static str>)> {
        groups
            .iter()
            .map(|g| (g.parent.0, g.children.clone()))
            .collect()
    }

    #[test]
    fn groups_children_under_parent() {
        let rows = vec![
            Row(1, "P1", Some("C1")),
            Row(1, "P1", Some("C2")),
            Row(2, "P2", None),
        ];

        let out = aggregate(rows);

        assert_eq!(shape(&out), vec![(1, vec!["C1", "C2"]), (2, vec![])]);
    }

    #[test]
    fn parents_keep_first_occurrence_order() {
        let rows = vec![
            Row(3, "c", Some("x")),
            Row(1, "a", Some("y")),
            Row(3, "c", Some("z")),
            Row(2, "b", None),
            Row(1, "a", None),
        ];

        let out = aggregate(rows);

        let keys: Vec<u32> = out.iter().map(|g| g.parent.0).collect();
        assert_eq!(keys, vec![3, 1, 2]);
        assert_eq!(out[0].children, vec!["x", "z"]);
        assert_eq!(out[1].children, vec!["y"]);
    }

    #[test]
    fn duplicate_children_are_preserved() {
        let rows = vec![
            Row(1, "P1", Some("C1")),
            Row(1, "P1", Some("C1")),
            Row(1, "P1", Some("C2")),
        ];

        let out = aggregate(rows);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].children, vec!["C1", "C1", "C2"]);
    }

    #[test]
    fn parent_present_once_with_only_non_null_children_counted() {
        // 4 rows for parent 7, of which 2 carry a child.
        let rows = vec![
            Row(7, "p", None),
            Row(7, "p", Some("a")),
            Row(7, "p", None),
            Row(7, "p", Some("b")),
        ];

        let out = aggregate(rows);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].children.len(), 2);
    }

    #[test]
    fn first_row_supplies_parent_value() {
        let rows = vec![Row(1, "first", None), Row(1, "second", Some("c"))];

        let out = aggregate(rows);

        assert_eq!(out[0].parent.1, "first");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = aggregate(Vec::<Row>::new());
        assert!(out.is_empty());
    }
}
