use crate::error::{MeteorError, Result};
use crate::format::traits::BookmarkFormat;
use crate::import::DEFAULT_MAX_DEPTH;
use crate::models::bookmark::Bookmark;
use crate::tree::{BookmarkTree, NodeId, TreeEntry, TreeKeying};
use std::io::Write;

/// Depth-first text rendering of a [`BookmarkTree`]
///
/// At every level each folder is printed and fully expanded before any leaf
/// of that level is printed. Indentation is two spaces per level.
#[derive(Debug, Clone, Copy)]
pub struct TreeRenderer {
    pub max_depth: usize,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

struct Frame<'t, 'a> {
    children: &'t [TreeEntry<'a>],
    next: usize,
    depth: usize,
}

impl TreeRenderer {
    /// Header line for a root bucket, then its subtree
    pub fn render_root(&self, tree: &BookmarkTree<'_>, root: NodeId, out: &mut dyn Write) -> Result<()> {
        let children = tree.children(root);
        writeln!(out, "📁 {:?} has {} children", tree.label(root), children.len())?;
        self.render_subtree(tree, root, out)
    }

    /// Everything below `node`, starting at depth 1
    pub fn render_subtree(&self, tree: &BookmarkTree<'_>, node: NodeId, out: &mut dyn Write) -> Result<()> {
        let mut stack = vec![Frame {
            children: tree.children(node),
            next: 0,
            depth: 1,
        }];

        while let Some(frame) = stack.last_mut() {
            let children = frame.children;
            let depth = frame.depth;
            let indent = "  ".repeat(depth);

            let next_folder = children[frame.next..]
                .iter()
                .position(|entry| entry.node.is_some())
                .map(|offset| frame.next + offset);

            match next_folder {
                Some(index) => {
                    frame.next = index + 1;
                    let entry = &children[index];
                    writeln!(out, "{}|-📁 {}", indent, entry.bookmark.name)?;

                    let Some(folder) = entry.node else { continue };
                    let nested = tree.children(folder);
                    if nested.is_empty() {
                        continue;
                    }
                    if depth >= self.max_depth {
                        return Err(MeteorError::DepthLimitExceeded {
                            limit: self.max_depth,
                        });
                    }
                    stack.push(Frame {
                        children: nested,
                        next: 0,
                        depth: depth + 1,
                    });
                }
                None => {
                    for entry in children.iter().filter(|entry| entry.node.is_none()) {
                        let b = entry.bookmark;
                        writeln!(out, "{}|-🌠 {} → {}", indent, b.name, b.url)?;
                    }
                    stack.pop();
                }
            }
        }

        Ok(())
    }
}

/// Tree presentation: build the hierarchy, then render every root
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeFormat {
    pub keying: TreeKeying,
    pub renderer: TreeRenderer,
}

impl BookmarkFormat for TreeFormat {
    fn write_to(&self, bookmarks: &[Bookmark], out: &mut dyn Write) -> Result<()> {
        let tree = BookmarkTree::build(bookmarks, self.keying);

        writeln!(out, "|- bookmarks")?;
        for root in tree.roots() {
            self.renderer.render_root(&tree, *root, out)?;
        }
        Ok(())
    }
}
