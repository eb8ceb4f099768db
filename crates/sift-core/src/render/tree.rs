//! Render tree construction and traversal.
//!
//! Nodes live in a flat arena and refer to their children by [`NodeId`].
//! Building and walking use explicit work stacks, so arbitrarily deep input
//! never grows the call stack.

use super::label::humanize_key;
use super::shape::{PrimitiveView, Shape, classify};
use serde::Serialize;
use serde_json::Value;

/// Index of a node in a [`RenderTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

/// One entry of an expandable list. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub index: usize,
    pub node: NodeId,
}

/// One field of an object, in the object's own order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub key: String,
    pub label: String,
    pub node: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    Primitive { value: PrimitiveView },
    EmptyObject,
    EmptyList,
    /// Compact badges for a list of scalars, in original order.
    Badges { items: Vec<PrimitiveView> },
    /// Expandable indexed list; starts expanded.
    List {
        depth: usize,
        expanded: bool,
        entries: Vec<ListEntry>,
    },
    Object {
        depth: usize,
        fields: Vec<FieldEntry>,
    },
}

/// The display tree of one JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    nodes: Vec<RenderNode>,
    root: NodeId,
}

impl RenderTree {
    /// Builds the display tree of `value`.
    ///
    /// The root container has depth 0 and every nested array or object is
    /// one deeper than its parent.
    pub fn build(value: &Value) -> Self {
        let mut nodes = vec![RenderNode::EmptyObject];
        let root = NodeId(0);
        let mut pending: Vec<(&Value, NodeId, usize)> = vec![(value, root, 0)];

        while let Some((value, id, depth)) = pending.pop() {
            let node = match classify(value) {
                Shape::Primitive(view) => RenderNode::Primitive { value: view },
                Shape::EmptyObject => RenderNode::EmptyObject,
                Shape::EmptyArray => RenderNode::EmptyList,
                Shape::ScalarArray(items) => RenderNode::Badges {
                    items: items.iter().filter_map(PrimitiveView::of).collect(),
                },
                Shape::MixedArray(items) => {
                    let entries = items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let child = allocate(&mut nodes);
                            pending.push((item, child, depth + 1));
                            ListEntry {
                                index: i + 1,
                                node: child,
                            }
                        })
                        .collect();
                    RenderNode::List {
                        depth,
                        expanded: true,
                        entries,
                    }
                }
                Shape::Object(map) => {
                    let fields = map
                        .iter()
                        .map(|(key, item)| {
                            let child = allocate(&mut nodes);
                            pending.push((item, child, depth + 1));
                            FieldEntry {
                                key: key.clone(),
                                label: humanize_key(key),
                                node: child,
                            }
                        })
                        .collect();
                    RenderNode::Object { depth, fields }
                }
            };
            nodes[id.0] = node;
        }

        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &RenderNode {
        self.node(self.root)
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &RenderNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest container depth, or `None` when the tree has no containers.
    pub fn max_depth(&self) -> Option<usize> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                RenderNode::List { depth, .. } | RenderNode::Object { depth, .. } => Some(*depth),
                _ => None,
            })
            .max()
    }

    /// Walks the tree in display order (fields and entries in their own order).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(0, Slot::Root, self.root)],
        }
    }
}

fn allocate(nodes: &mut Vec<RenderNode>) -> NodeId {
    nodes.push(RenderNode::EmptyObject);
    NodeId(nodes.len() - 1)
}

/// Where a node sits relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    Root,
    Field { key: &'a str, label: &'a str },
    Entry { index: usize },
}

/// A node visited by [`Walk`], with its indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkItem<'a> {
    pub indent: usize,
    pub slot: Slot<'a>,
    pub id: NodeId,
    pub node: &'a RenderNode,
}

/// Pre-order iterator over a [`RenderTree`].
pub struct Walk<'a> {
    tree: &'a RenderTree,
    stack: Vec<(usize, Slot<'a>, NodeId)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (indent, slot, id) = self.stack.pop()?;
        let node = self.tree.node(id);

        // Children are pushed in reverse so they pop in display order.
        match node {
            RenderNode::List { entries, .. } => {
                for entry in entries.iter().rev() {
                    self.stack
                        .push((indent + 1, Slot::Entry { index: entry.index }, entry.node));
                }
            }
            RenderNode::Object { fields, .. } => {
                for field in fields.iter().rev() {
                    self.stack.push((
                        indent + 1,
                        Slot::Field {
                            key: &field.key,
                            label: &field.label,
                        },
                        field.node,
                    ));
                }
            }
            _ => {}
        }

        Some(WalkItem {
            indent,
            slot,
            id,
            node,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_root() {
        let tree = RenderTree::build(&json!(42));
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.root_node(),
            &RenderNode::Primitive {
                value: PrimitiveView::Number("42".into())
            }
        );
        assert_eq!(tree.max_depth(), None);
    }

    #[test]
    fn test_null_root_is_empty_marker() {
        let tree = RenderTree::build(&json!(null));
        assert_eq!(
            tree.root_node(),
            &RenderNode::Primitive {
                value: PrimitiveView::Empty
            }
        );
    }

    #[test]
    fn test_scalar_array_renders_as_badges() {
        let tree = RenderTree::build(&json!([1, 2, 3]));
        assert_eq!(
            tree.root_node(),
            &RenderNode::Badges {
                items: vec![
                    PrimitiveView::Number("1".into()),
                    PrimitiveView::Number("2".into()),
                    PrimitiveView::Number("3".into()),
                ]
            }
        );
    }

    #[test]
    fn test_object_array_renders_as_expanded_indexed_list() {
        let tree = RenderTree::build(&json!([{"a": 1}, {"a": 2}]));
        let RenderNode::List {
            depth,
            expanded,
            entries,
        } = tree.root_node()
        else {
            panic!("expected list, got {:?}", tree.root_node());
        };

        assert_eq!(*depth, 0);
        assert!(*expanded);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].index, 1);
        assert_eq!(entries[1].index, 2);

        let RenderNode::Object { depth, fields } = tree.node(entries[1].node) else {
            panic!("expected object entry");
        };
        assert_eq!(*depth, 1);
        assert_eq!(fields[0].label, "A");
        assert_eq!(
            tree.node(fields[0].node),
            &RenderNode::Primitive {
                value: PrimitiveView::Number("2".into())
            }
        );
    }

    #[test]
    fn test_mixed_array_keeps_scalar_entries_as_primitives() {
        let tree = RenderTree::build(&json!(["note", {"b": true}, null]));
        let RenderNode::List { entries, .. } = tree.root_node() else {
            panic!("expected list");
        };
        assert_eq!(
            tree.node(entries[0].node),
            &RenderNode::Primitive {
                value: PrimitiveView::Text("note".into())
            }
        );
        assert_eq!(
            tree.node(entries[2].node),
            &RenderNode::Primitive {
                value: PrimitiveView::Empty
            }
        );
    }

    #[test]
    fn test_object_fields_keep_insertion_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid_point": 3}"#).unwrap();
        let tree = RenderTree::build(&value);
        let RenderNode::Object { fields, .. } = tree.root_node() else {
            panic!("expected object");
        };
        let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid_point"]);
        assert_eq!(fields[2].label, "Mid point");
    }

    #[test]
    fn test_empty_containers_have_explicit_markers() {
        let tree = RenderTree::build(&json!({"tags": [], "meta": {}}));
        let RenderNode::Object { fields, .. } = tree.root_node() else {
            panic!("expected object");
        };
        assert_eq!(tree.node(fields[0].node), &RenderNode::EmptyList);
        assert_eq!(tree.node(fields[1].node), &RenderNode::EmptyObject);
    }

    #[test]
    fn test_depth_increases_per_nested_container() {
        let tree = RenderTree::build(&json!({"a": {"b": [{"c": 1}, [1]]}}));
        assert_eq!(tree.max_depth(), Some(3));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let value = json!({
            "topic": "Caching",
            "findings": [{"title": "hit rate", "score": 0.8}, "loose note"],
            "tags": ["perf", "io"],
            "source": "https://example.com/report",
        });
        assert_eq!(RenderTree::build(&value), RenderTree::build(&value));
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut value = json!(1);
        for _ in 0..20_000 {
            value = json!([value]);
        }

        // 19_999 nested lists around a badge row holding the scalar.
        let tree = RenderTree::build(&value);
        assert_eq!(tree.max_depth(), Some(19_998));
        assert_eq!(tree.len(), 20_000);
        assert_eq!(tree.walk().count(), 20_000);

        // serde_json drops nested values recursively; unwind by hand.
        let mut current = value;
        while let Value::Array(mut items) = current {
            current = items.pop().unwrap_or(Value::Null);
        }
    }

    #[test]
    fn test_walk_visits_in_display_order() {
        let tree = RenderTree::build(&json!({"first": [{"x": 1}], "second": "s"}));
        let visited: Vec<(usize, String)> = tree
            .walk()
            .map(|item| {
                let slot = match item.slot {
                    Slot::Root => "root".to_string(),
                    Slot::Field { key, .. } => key.to_string(),
                    Slot::Entry { index } => format!("#{index}"),
                };
                (item.indent, slot)
            })
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, "root".to_string()),
                (1, "first".to_string()),
                (2, "#1".to_string()),
                (3, "x".to_string()),
                (1, "second".to_string()),
            ]
        );
    }
}
