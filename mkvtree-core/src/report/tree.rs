// ============================================================================
// mkvtree-core/src/report/tree.rs
// ============================================================================
//
// REPORT TREE: Node and Tree Types Produced by the Builder
//
// A Node is an escaped field name, an optional value and an ordered list of
// children. A Tree owns a synthetic "root" node whose children are the
// depth-0 entries of the report. Both are read-only once built.
//
// AI-ASSISTANT-INFO: Tree data model for parsed mkvinfo reports

// ---- External crate imports ----
use serde::Serialize;

/// Name of the synthetic node wrapping the top-level entries.
pub const ROOT_NAME: &str = "root";

// ============================================================================
// NODE
// ============================================================================

/// One entry of the report.
///
/// Children keep the order in which their lines appeared in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn new(name: String, value: Option<String>) -> Self {
        Self {
            name,
            value,
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Escaped field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field value, if the line carried one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// First child with the given escaped name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given escaped name, in report order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Value of the first child with the given name.
    pub fn child_value(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Node::value)
    }

    /// Every node below this one in depth-first, report order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_size).sum::<usize>()
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

// ============================================================================
// TREE
// ============================================================================

/// A parsed report: a synthetic root node over the top-level entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tree {
    root: Node,
}

impl Tree {
    pub(crate) fn from_roots(roots: Vec<Node>) -> Self {
        let mut root = Node::new(ROOT_NAME.to_string(), None);
        root.children = roots;
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Depth-0 entries of the report.
    pub fn top_level(&self) -> &[Node] {
        self.root.children()
    }

    /// Serializes the tree as JSON for inspection by external tooling.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, value: Option<&str>) -> Node {
        Node::new(name.to_string(), value.map(str::to_string))
    }

    fn sample_tree() -> Tree {
        let mut track = leaf("A+track", None);
        track.push_child(leaf("Track+number", Some("1")));
        track.push_child(leaf("Track+type", Some("video")));
        track.push_child(leaf("Track+type", Some("audio")));
        Tree::from_roots(vec![track, leaf("EBML+head", None)])
    }

    #[test]
    fn test_child_lookup_returns_first_match() {
        let tree = sample_tree();
        let track = &tree.top_level()[0];
        assert_eq!(track.child_value("Track+type"), Some("video"));
        assert!(track.child("Codec+ID").is_none());
        assert_eq!(track.children_named("Track+type").count(), 2);
    }

    #[test]
    fn test_tree_shape() {
        let tree = sample_tree();
        assert_eq!(tree.root().name(), ROOT_NAME);
        assert_eq!(tree.root().value(), None);
        assert_eq!(tree.top_level().len(), 2);
        assert_eq!(tree.root().subtree_size(), 6);
    }

    #[test]
    fn test_descendants_in_report_order() {
        let mut a = leaf("a", None);
        let mut b = leaf("b", None);
        b.push_child(leaf("c", None));
        a.push_child(b);
        a.push_child(leaf("d", None));
        let order: Vec<&str> = a.descendants().map(Node::name).collect();
        assert_eq!(order, ["b", "c", "d"]);
    }

    #[test]
    fn test_to_json_omits_empty_fields() {
        let tree = Tree::from_roots(vec![leaf("Lacing+flag", None)]);
        let json = tree.to_json(false).unwrap();
        assert_eq!(json, r#"{"name":"root","children":[{"name":"Lacing+flag"}]}"#);
    }
}
