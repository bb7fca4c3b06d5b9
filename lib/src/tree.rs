use crate::models::bookmark::{Bookmark, ROOT_FOLDERS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How records are matched to the folder that contains them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeKeying {
    /// By the parent's source-native id, falling back to its name
    #[default]
    #[serde(rename = "id")]
    ById,
    /// By the parent's name only; same-named folders share one bucket
    #[serde(rename = "name")]
    ByName,
}

impl TreeKeying {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "id" => Some(TreeKeying::ById),
            "name" => Some(TreeKeying::ByName),
            _ => None,
        }
    }
}

/// Index of a bucket in a [`BookmarkTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum BucketKey<'a> {
    Id(&'a str),
    Name(&'a str),
}

/// A direct child of a bucket
#[derive(Debug, Clone, Copy)]
pub struct TreeEntry<'a> {
    pub bookmark: &'a Bookmark,
    /// The bucket holding this folder's own children; `None` for leaves
    pub node: Option<NodeId>,
}

#[derive(Debug)]
struct TreeNode<'a> {
    key: BucketKey<'a>,
    label: &'a str,
    children: Vec<TreeEntry<'a>>,
    /// Some folder record opens this bucket
    owned: bool,
}

/// Parent-keyed hierarchy built from a flat bookmark collection
///
/// Buckets live in an arena and folders point at their bucket by index. The
/// tree borrows the records; it never modifies them.
#[derive(Debug)]
pub struct BookmarkTree<'a> {
    nodes: Vec<TreeNode<'a>>,
    roots: Vec<NodeId>,
}

impl<'a> BookmarkTree<'a> {
    pub fn build(bookmarks: &'a [Bookmark], keying: TreeKeying) -> Self {
        let mut builder = Builder::default();

        for bookmark in bookmarks {
            let bucket = builder.intern(parent_key(bookmark, keying), &bookmark.parent);
            let node = bookmark.is_folder().then(|| {
                let own = builder.intern(folder_key(bookmark, keying), &bookmark.name);
                builder.nodes[own.0].owned = true;
                own
            });
            builder.nodes[bucket.0]
                .children
                .push(TreeEntry { bookmark, node });
        }

        let mut nodes = builder.nodes;
        for node in &mut nodes {
            // Stable: equal names keep their input order
            node.children
                .sort_by(|a, b| a.bookmark.name.cmp(&b.bookmark.name));
        }

        let mut roots: Vec<NodeId> = nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.owned || is_root_key(node.key, keying))
            .map(|(index, _)| NodeId(index))
            .collect();
        roots.sort_by_key(|id| {
            let node = &nodes[id.0];
            let rank = ROOT_FOLDERS
                .iter()
                .position(|root| *root == node.label)
                .unwrap_or(ROOT_FOLDERS.len());
            (rank, node.label, node.key)
        });

        Self { nodes, roots }
    }

    /// Top-level buckets in display order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Direct children of a bucket, sorted by name
    pub fn children(&self, node: NodeId) -> &[TreeEntry<'a>] {
        &self.nodes[node.0].children
    }

    /// Display name of a bucket
    pub fn label(&self, node: NodeId) -> &'a str {
        self.nodes[node.0].label
    }

    /// Buckets displayed under `label`
    pub fn find(&self, label: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.label == label)
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Default)]
struct Builder<'a> {
    nodes: Vec<TreeNode<'a>>,
    index: HashMap<BucketKey<'a>, NodeId>,
}

impl<'a> Builder<'a> {
    fn intern(&mut self, key: BucketKey<'a>, label: &'a str) -> NodeId {
        if let Some(id) = self.index.get(&key) {
            return *id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            key,
            label,
            children: Vec::new(),
            owned: false,
        });
        self.index.insert(key, id);
        id
    }
}

fn parent_key(bookmark: &Bookmark, keying: TreeKeying) -> BucketKey<'_> {
    match (keying, bookmark.parent_id.as_deref()) {
        (TreeKeying::ById, Some(id)) => BucketKey::Id(id),
        _ => BucketKey::Name(&bookmark.parent),
    }
}

/// Bucket the parser opens for a top-level Chromium root
fn is_root_key(key: BucketKey<'_>, keying: TreeKeying) -> bool {
    match (keying, key) {
        (TreeKeying::ById, BucketKey::Id(k)) | (TreeKeying::ByName, BucketKey::Name(k)) => {
            ROOT_FOLDERS.contains(&k)
        }
        _ => false,
    }
}

fn folder_key(folder: &Bookmark, keying: TreeKeying) -> BucketKey<'_> {
    match keying {
        TreeKeying::ById if !folder.id.is_empty() => BucketKey::Id(&folder.id),
        _ => BucketKey::Name(&folder.name),
    }
}
