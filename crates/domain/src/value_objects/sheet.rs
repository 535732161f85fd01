//! Sheet tree - the typed data graph behind an actor's sheet
//!
//! The tree makes the modifiable-field schema explicit: a field is a
//! [`SheetNode::Field`] leaf by construction, so path resolution never has to
//! sniff object shapes. Resolution is deliberately forgiving: a path that
//! matches nothing mutates nothing and raises nothing.
//!
//! Serialization is untagged, so sheet JSON reads like plain data:
//!
//! ```json
//! {
//!   "abilities": {
//!     "str": {
//!       "label": "Strength",
//!       "value": { "base": 0, "modifiers": [] },
//!       "save": { "base": 0, "modifiers": [] }
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_objects::{ModifiableValue, Modifier, PathSegment, TargetPath};

/// A node in an actor's sheet tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetNode {
    /// A modifiable numeric leaf
    Field(ModifiableValue),
    /// A non-modifiable text leaf (labels and the like)
    Text(String),
    /// An ordered sequence of nodes
    List(Vec<SheetNode>),
    /// A named collection of nodes
    Group(BTreeMap<String, SheetNode>),
}

impl SheetNode {
    /// A modifiable field with the given base value and no modifiers.
    pub fn field(base: i32) -> Self {
        Self::Field(ModifiableValue::new(base))
    }

    /// A text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// An ordered sequence of nodes.
    pub fn list(items: impl IntoIterator<Item = SheetNode>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// A named collection of nodes.
    pub fn group<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SheetNode)>,
    {
        Self::Group(
            entries
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        )
    }
}

/// An actor's sheet: a data tree plus the path operations that address it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sheet {
    root: SheetNode,
}

impl Default for SheetNode {
    fn default() -> Self {
        Self::Group(BTreeMap::new())
    }
}

impl Sheet {
    /// Create a sheet from its root node.
    pub fn new(root: SheetNode) -> Self {
        Self { root }
    }

    /// The root node of the tree.
    pub fn root(&self) -> &SheetNode {
        &self.root
    }

    /// Append a clone of the modifier to every field the path matches.
    ///
    /// Returns the number of fields modified; 0 means the path matched
    /// nothing (which is not an error).
    pub fn apply(&mut self, path: &TargetPath, modifier: &Modifier) -> usize {
        for_each_field(&mut self.root, path.segments(), &mut |field| {
            field.add_modifier(modifier.clone());
            true
        })
    }

    /// Remove the first structurally-equal modifier from every field the
    /// path matches.
    ///
    /// Returns the number of fields a modifier was actually removed from.
    pub fn retract(&mut self, path: &TargetPath, modifier: &Modifier) -> usize {
        for_each_field(&mut self.root, path.segments(), &mut |field| {
            field.remove_modifier(modifier)
        })
    }

    /// Look up the field at a concrete path.
    ///
    /// Returns `None` for wildcard paths and for paths that do not resolve
    /// to a field.
    pub fn field(&self, path: &TargetPath) -> Option<&ModifiableValue> {
        let mut node = &self.root;
        for segment in path.segments() {
            let PathSegment::Key(key) = segment else {
                return None;
            };
            let SheetNode::Group(entries) = node else {
                return None;
            };
            node = entries.get(key)?;
        }
        match node {
            SheetNode::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Computed value of the field at a concrete path.
    pub fn effective(&self, path: &TargetPath) -> Option<i32> {
        self.field(path).map(ModifiableValue::effective)
    }

    /// Replace the base value of the field at a concrete path, leaving its
    /// modifiers untouched.
    ///
    /// Returns `false` when the path does not resolve to a field.
    pub fn set_base(&mut self, path: &TargetPath, base: i32) -> bool {
        let mut node = &mut self.root;
        for segment in path.segments() {
            let PathSegment::Key(key) = segment else {
                return false;
            };
            let SheetNode::Group(entries) = node else {
                return false;
            };
            let Some(child) = entries.get_mut(key) else {
                return false;
            };
            node = child;
        }
        match node {
            SheetNode::Field(field) => {
                field.set_base(base);
                true
            }
            _ => false,
        }
    }

    /// Computed values of every field the (possibly wildcard) path matches,
    /// paired with their concrete dotted paths, in tree order.
    pub fn collect_effective(&self, path: &TargetPath) -> Vec<(String, i32)> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        collect_fields(&self.root, path.segments(), &mut prefix, &mut out);
        out.into_iter()
            .map(|(path, field)| (path, field.effective()))
            .collect()
    }

    /// Computed values of every field in the tree, paired with their
    /// concrete dotted paths, in tree order.
    pub fn all_effective(&self) -> Vec<(String, i32)> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        flatten_fields(&self.root, &mut prefix, &mut out);
        out.into_iter()
            .map(|(path, field)| (path, field.effective()))
            .collect()
    }
}

/// Walk `node` along `segments`, invoking `f` on every matched field.
/// Returns how many invocations reported a mutation.
fn for_each_field<F>(node: &mut SheetNode, segments: &[PathSegment], f: &mut F) -> usize
where
    F: FnMut(&mut ModifiableValue) -> bool,
{
    match segments.split_first() {
        // Path fully consumed: mutate if we landed on a field
        None => match node {
            SheetNode::Field(field) => usize::from(f(field)),
            _ => 0,
        },
        Some((PathSegment::Key(key), rest)) => match node {
            SheetNode::Group(entries) => entries
                .get_mut(key)
                .map(|child| for_each_field(child, rest, f))
                .unwrap_or(0),
            _ => 0,
        },
        Some((PathSegment::Wildcard, rest)) => match node {
            SheetNode::List(items) => items
                .iter_mut()
                .map(|child| for_each_field(child, rest, f))
                .sum(),
            SheetNode::Group(entries) => entries
                .values_mut()
                .map(|child| for_each_field(child, rest, f))
                .sum(),
            _ => 0,
        },
    }
}

fn collect_fields<'a>(
    node: &'a SheetNode,
    segments: &[PathSegment],
    prefix: &mut Vec<String>,
    out: &mut Vec<(String, &'a ModifiableValue)>,
) {
    match segments.split_first() {
        None => {
            if let SheetNode::Field(field) = node {
                out.push((prefix.join("."), field));
            }
        }
        Some((PathSegment::Key(key), rest)) => {
            if let SheetNode::Group(entries) = node {
                if let Some(child) = entries.get(key) {
                    prefix.push(key.clone());
                    collect_fields(child, rest, prefix, out);
                    prefix.pop();
                }
            }
        }
        Some((PathSegment::Wildcard, rest)) => match node {
            SheetNode::List(items) => {
                for (index, child) in items.iter().enumerate() {
                    prefix.push(index.to_string());
                    collect_fields(child, rest, prefix, out);
                    prefix.pop();
                }
            }
            SheetNode::Group(entries) => {
                for (key, child) in entries {
                    prefix.push(key.clone());
                    collect_fields(child, rest, prefix, out);
                    prefix.pop();
                }
            }
            _ => {}
        },
    }
}

fn flatten_fields<'a>(
    node: &'a SheetNode,
    prefix: &mut Vec<String>,
    out: &mut Vec<(String, &'a ModifiableValue)>,
) {
    match node {
        SheetNode::Field(field) => out.push((prefix.join("."), field)),
        SheetNode::Text(_) => {}
        SheetNode::List(items) => {
            for (index, child) in items.iter().enumerate() {
                prefix.push(index.to_string());
                flatten_fields(child, prefix, out);
                prefix.pop();
            }
        }
        SheetNode::Group(entries) => {
            for (key, child) in entries {
                prefix.push(key.clone());
                flatten_fields(child, prefix, out);
                prefix.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ModifierKind;

    fn ability(label: &str) -> SheetNode {
        SheetNode::group([
            ("label", SheetNode::text(label)),
            ("value", SheetNode::field(0)),
            ("save", SheetNode::field(0)),
        ])
    }

    fn sample_sheet() -> Sheet {
        Sheet::new(SheetNode::group([
            (
                "abilities",
                SheetNode::group([
                    ("str", ability("Strength")),
                    ("dex", ability("Dexterity")),
                    ("con", ability("Constitution")),
                ]),
            ),
            (
                "attributes",
                SheetNode::group([(
                    "ac",
                    SheetNode::group([
                        ("label", SheetNode::text("Armor Class")),
                        ("value", SheetNode::field(0)),
                    ]),
                )]),
            ),
        ]))
    }

    fn cloak_bonus() -> Modifier {
        Modifier::new(ModifierKind::Bonus, 1, "Equipment", "Cloak of Protection")
    }

    fn path(raw: &str) -> TargetPath {
        TargetPath::new(raw).expect("valid path")
    }

    #[test]
    fn wildcard_path_applies_to_every_ability_save() {
        let mut sheet = sample_sheet();
        let applied = sheet.apply(&path("abilities.*.save"), &cloak_bonus());
        assert_eq!(applied, 3);
        for ability in ["str", "dex", "con"] {
            let save = path(&format!("abilities.{}.save", ability));
            assert_eq!(sheet.effective(&save), Some(1));
            // Sibling value fields stay untouched
            let value = path(&format!("abilities.{}.value", ability));
            assert_eq!(sheet.effective(&value), Some(0));
        }
    }

    #[test]
    fn apply_then_retract_restores_prior_state() {
        let mut sheet = sample_sheet();
        let before = sheet.clone();

        sheet.apply(&path("abilities.*.save"), &cloak_bonus());
        assert_ne!(sheet, before);

        let removed = sheet.retract(&path("abilities.*.save"), &cloak_bonus());
        assert_eq!(removed, 3);
        assert_eq!(sheet, before);
    }

    #[test]
    fn unmatched_path_is_a_silent_noop() {
        let mut sheet = sample_sheet();
        let before = sheet.clone();
        assert_eq!(sheet.apply(&path("abilities.cha.save"), &cloak_bonus()), 0);
        assert_eq!(sheet.apply(&path("no.such.thing"), &cloak_bonus()), 0);
        assert_eq!(sheet.retract(&path("no.such.thing"), &cloak_bonus()), 0);
        assert_eq!(sheet, before);
    }

    #[test]
    fn retract_without_matching_modifier_reports_zero() {
        let mut sheet = sample_sheet();
        sheet.apply(&path("attributes.ac.value"), &cloak_bonus());
        let other = Modifier::new(ModifierKind::Bonus, 2, "Equipment", "Ring of Protection");
        assert_eq!(sheet.retract(&path("attributes.ac.value"), &other), 0);
        assert_eq!(sheet.effective(&path("attributes.ac.value")), Some(1));
    }

    #[test]
    fn trailing_wildcard_over_groups_is_a_noop() {
        // The matched nodes are ability groups, not fields
        let mut sheet = sample_sheet();
        let before = sheet.clone();
        assert_eq!(sheet.apply(&path("abilities.*"), &cloak_bonus()), 0);
        assert_eq!(sheet, before);
    }

    #[test]
    fn wildcard_fans_out_over_list_elements() {
        let mut sheet = Sheet::new(SheetNode::group([(
            "party",
            SheetNode::list([
                SheetNode::group([("hp", SheetNode::field(10))]),
                SheetNode::group([("hp", SheetNode::field(20))]),
            ]),
        )]));
        let applied = sheet.apply(&path("party.*.hp"), &cloak_bonus());
        assert_eq!(applied, 2);
        assert_eq!(
            sheet.collect_effective(&path("party.*.hp")),
            vec![("party.0.hp".to_string(), 11), ("party.1.hp".to_string(), 21)]
        );
    }

    #[test]
    fn wildcard_into_leaves_is_a_noop() {
        let mut sheet = Sheet::new(SheetNode::group([(
            "ac",
            SheetNode::group([
                ("label", SheetNode::text("Armor Class")),
                ("value", SheetNode::field(0)),
            ]),
        )]));
        let before = sheet.clone();
        // Remainder segments cannot descend into Text or Field leaves
        assert_eq!(sheet.apply(&path("ac.label.deeper"), &cloak_bonus()), 0);
        assert_eq!(sheet.apply(&path("ac.value.deeper"), &cloak_bonus()), 0);
        assert_eq!(sheet, before);
    }

    #[test]
    fn field_lookup_requires_concrete_path() {
        let sheet = sample_sheet();
        assert!(sheet.field(&path("abilities.str.save")).is_some());
        assert!(sheet.field(&path("abilities.*.save")).is_none());
        assert!(sheet.field(&path("abilities.str")).is_none()); // group, not field
        assert!(sheet.field(&path("abilities.str.label")).is_none()); // text leaf
    }

    #[test]
    fn set_base_writes_through_and_keeps_modifiers() {
        let mut sheet = sample_sheet();
        sheet.apply(&path("attributes.ac.value"), &cloak_bonus());
        assert!(sheet.set_base(&path("attributes.ac.value"), 14));
        assert_eq!(sheet.effective(&path("attributes.ac.value")), Some(15));
        assert!(!sheet.set_base(&path("attributes.ac.label"), 14));
        assert!(!sheet.set_base(&path("no.such.field"), 14));
    }

    #[test]
    fn collect_effective_reports_concrete_paths_in_tree_order() {
        let mut sheet = sample_sheet();
        sheet.apply(&path("abilities.*.save"), &cloak_bonus());
        assert_eq!(
            sheet.collect_effective(&path("abilities.*.save")),
            vec![
                ("abilities.con.save".to_string(), 1),
                ("abilities.dex.save".to_string(), 1),
                ("abilities.str.save".to_string(), 1),
            ]
        );
    }

    #[test]
    fn all_effective_walks_the_whole_tree() {
        let sheet = sample_sheet();
        let all = sheet.all_effective();
        assert_eq!(all.len(), 7); // 3 abilities x (value + save) + ac.value
        assert!(all
            .iter()
            .any(|(path, _)| path == "attributes.ac.value"));
    }

    #[test]
    fn sheet_deserializes_from_plain_json() {
        let raw = r#"
        {
            "abilities": {
                "str": {
                    "label": "Strength",
                    "value": { "base": 0, "modifiers": [] },
                    "save": { "base": 2, "modifiers": [] }
                }
            },
            "attributes": {
                "ac": {
                    "label": "Armor Class",
                    "value": { "base": 10, "modifiers": [] }
                }
            }
        }
        "#;
        let sheet: Sheet = serde_json::from_str(raw).expect("deserializes");
        assert_eq!(sheet.effective(&path("abilities.str.save")), Some(2));
        assert_eq!(sheet.effective(&path("attributes.ac.value")), Some(10));
        assert!(sheet.field(&path("abilities.str.label")).is_none());
    }

    #[test]
    fn sheet_serde_round_trips() {
        let mut sheet = sample_sheet();
        sheet.apply(&path("abilities.*.save"), &cloak_bonus());
        let json = serde_json::to_string(&sheet).expect("serializes");
        let parsed: Sheet = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(parsed, sheet);
    }
}
