use super::{BookmarkExtractor, ExtractOptions};
use crate::error::{MeteorError, Result};
use crate::models::bookmark::{Bookmark, ROOT_FOLDERS};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Chrome bookmark node (JSON)
#[derive(Debug, Deserialize)]
struct ChromeNode {
    #[serde(default)]
    id: String,
    #[serde(alias = "title")]
    name: String,
    url: Option<String>,
    children: Option<Vec<ChromeNode>>,
}

#[derive(Debug, Deserialize)]
struct ChromeRoot {
    #[serde(default)]
    children: Vec<ChromeNode>,
}

#[derive(Debug, Deserialize)]
struct ChromeBookmarkFile {
    roots: ChromeRoots,
}

#[derive(Debug, Deserialize)]
struct ChromeRoots {
    bookmark_bar: Option<ChromeRoot>,
    other: Option<ChromeRoot>,
    synced: Option<ChromeRoot>,
}

impl ChromeRoots {
    fn get(&self, name: &str) -> Option<&ChromeRoot> {
        match name {
            "bookmark_bar" => self.bookmark_bar.as_ref(),
            "other" => self.other.as_ref(),
            "synced" => self.synced.as_ref(),
            _ => None,
        }
    }
}

/// Chromium JSON bookmark extractor
pub struct ChromiumExtractor;

impl BookmarkExtractor for ChromiumExtractor {
    fn extract(&self, path: &Path, options: &ExtractOptions) -> Result<Vec<Bookmark>> {
        extract_bookmarks(path, options)
    }
}

/// Read and parse a Chromium `Bookmarks` file
pub fn extract_bookmarks(path: &Path, options: &ExtractOptions) -> Result<Vec<Bookmark>> {
    let content = fs::read(path).map_err(|e| MeteorError::unavailable(path, e))?;
    let bookmarks = parse_bookmarks(&content, options)?;
    debug!("Parsed {} records from {}", bookmarks.len(), path.display());
    Ok(bookmarks)
}

/// Parse the contents of a Chromium `Bookmarks` file
///
/// Records come out in pre-order: `bookmark_bar`, then `other`, then `synced`,
/// each walked depth-first in file order. Any malformed node fails the whole
/// parse.
pub fn parse_bookmarks(content: &[u8], options: &ExtractOptions) -> Result<Vec<Bookmark>> {
    let file: ChromeBookmarkFile = serde_json::from_slice(content)
        .map_err(|e| MeteorError::MalformedInput(e.to_string()))?;

    let mut bookmarks = Vec::new();
    for root_name in ROOT_FOLDERS {
        if let Some(root) = file.roots.get(root_name) {
            walk_root(root_name, &root.children, options, &mut bookmarks)?;
        }
    }

    Ok(bookmarks)
}

struct Frame<'a> {
    nodes: std::slice::Iter<'a, ChromeNode>,
    parent: &'a str,
    parent_id: Option<&'a str>,
    depth: usize,
}

fn walk_root<'a>(
    root_name: &'a str,
    children: &'a [ChromeNode],
    options: &ExtractOptions,
    out: &mut Vec<Bookmark>,
) -> Result<()> {
    let mut stack = vec![Frame {
        nodes: children.iter(),
        parent: root_name,
        parent_id: Some(root_name),
        depth: 1,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(node) = frame.nodes.next() else {
            stack.pop();
            continue;
        };
        let (parent, parent_id, depth) = (frame.parent, frame.parent_id, frame.depth);

        match node.url.as_deref() {
            Some(url) if !url.is_empty() => out.push(to_record(node, url, parent, parent_id)),
            _ => {
                if options.include_folders {
                    out.push(to_record(node, "", parent, parent_id));
                }

                let children = node.children.as_deref().unwrap_or_default();
                if children.is_empty() {
                    continue;
                }
                if depth >= options.max_depth {
                    return Err(MeteorError::DepthLimitExceeded {
                        limit: options.max_depth,
                    });
                }

                // Folders without an id are keyed by name further down
                stack.push(Frame {
                    nodes: children.iter(),
                    parent: &node.name,
                    parent_id: (!node.id.is_empty()).then_some(node.id.as_str()),
                    depth: depth + 1,
                });
            }
        }
    }

    Ok(())
}

fn to_record(node: &ChromeNode, url: &str, parent: &str, parent_id: Option<&str>) -> Bookmark {
    Bookmark {
        id: node.id.clone(),
        name: node.name.clone(),
        url: url.to_string(),
        parent: parent.to_string(),
        parent_id: parent_id.map(str::to_string),
    }
}
