use serde::{Deserialize, Serialize};

/// Parent id some sites use to mark a top level category
pub const ROOT_PARENT_MARKER: &str = "0";

/// Flat category record with a parent pointer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl CategoryNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
        }
    }

    /// Parent id, or `None` when the node declares itself top level
    /// (no parent, an empty parent or the `"0"` marker)
    pub fn declared_parent(&self) -> Option<&str> {
        match self.parent_id.as_deref() {
            None | Some("") | Some(ROOT_PARENT_MARKER) => None,
            Some(parent) => Some(parent),
        }
    }
}

/// Category with its children attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub children: Vec<CategoryTreeNode>,
}

impl CategoryTreeNode {
    pub fn leaf(node: &CategoryNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            parent_id: node.parent_id.clone(),
            children: Vec::new(),
        }
    }

    fn find(&self, id: &str) -> Option<&CategoryTreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(CategoryTreeNode::count).sum::<usize>()
    }
}

/// Rooted forest of categories, roots in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTree {
    pub roots: Vec<CategoryTreeNode>,
}

impl CategoryTree {
    pub fn new(roots: Vec<CategoryTreeNode>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the forest
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(CategoryTreeNode::count).sum()
    }

    /// Depth-first lookup of a node by id
    pub fn find(&self, id: &str) -> Option<&CategoryTreeNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    /// Resolve a category id to its display name
    pub fn find_name(&self, id: &str) -> Option<&str> {
        self.find(id).map(|node| node.name.as_str())
    }
}
