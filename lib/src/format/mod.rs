use crate::error::Result;
use crate::import::ExtractOptions;
use crate::models::bookmark::Bookmark;
use crate::tree::TreeKeying;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod flat;
pub mod json;
pub mod traits;
pub mod tree;

pub use flat::FlatFormat;
pub use json::JsonFormat;
pub use traits::BookmarkFormat;
pub use tree::{TreeFormat, TreeRenderer};

/// How one profile's bookmark collection is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Flat,
    Json,
    #[default]
    Tree,
}

impl OutputMode {
    pub fn from_string(mode: &str) -> Option<Self> {
        match mode.to_lowercase().as_str() {
            "flat" => Some(OutputMode::Flat),
            "json" => Some(OutputMode::Json),
            "tree" => Some(OutputMode::Tree),
            _ => None,
        }
    }

    /// Parser options for this mode
    ///
    /// Only the tree needs folder records; flat and JSON output list leaves.
    pub fn extract_options(self, max_depth: usize) -> ExtractOptions {
        ExtractOptions {
            include_folders: self == OutputMode::Tree,
            max_depth,
        }
    }

    pub fn formatter(self, keying: TreeKeying, max_depth: usize) -> Formatter {
        match self {
            OutputMode::Flat => Formatter::Flat(FlatFormat),
            OutputMode::Json => Formatter::Json(JsonFormat),
            OutputMode::Tree => Formatter::Tree(TreeFormat {
                keying,
                renderer: TreeRenderer { max_depth },
            }),
        }
    }
}

/// Enum dispatch over the available formats
pub enum Formatter {
    Flat(FlatFormat),
    Json(JsonFormat),
    Tree(TreeFormat),
}

impl BookmarkFormat for Formatter {
    fn write_to(&self, bookmarks: &[Bookmark], out: &mut dyn Write) -> Result<()> {
        match self {
            Formatter::Flat(f) => f.write_to(bookmarks, out),
            Formatter::Json(f) => f.write_to(bookmarks, out),
            Formatter::Tree(f) => f.write_to(bookmarks, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::chromium::parse_bookmarks;
    use rstest::rstest;

    const SAMPLE: &str = r#"{"roots": {"bookmark_bar": {"children": [
        {"id": "1", "type": "url", "name": "A", "url": "http://a"},
        {"id": "2", "type": "folder", "name": "F", "children": [
            {"id": "3", "type": "url", "name": "B", "url": "http://b"}
        ]}
    ]}}}"#;

    fn run(mode: OutputMode) -> String {
        let options = mode.extract_options(16);
        let bookmarks = parse_bookmarks(SAMPLE.as_bytes(), &options).unwrap();
        mode.formatter(TreeKeying::ById, 16)
            .render(&bookmarks)
            .unwrap()
    }

    #[rstest]
    #[case("flat", Some(OutputMode::Flat))]
    #[case("JSON", Some(OutputMode::Json))]
    #[case("Tree", Some(OutputMode::Tree))]
    #[case("yaml", None)]
    fn test_from_string(#[case] input: &str, #[case] expected: Option<OutputMode>) {
        assert_eq!(OutputMode::from_string(input), expected);
    }

    #[rstest]
    #[case(OutputMode::Flat, false)]
    #[case(OutputMode::Json, false)]
    #[case(OutputMode::Tree, true)]
    fn test_folders_only_for_tree(#[case] mode: OutputMode, #[case] include_folders: bool) {
        let options = mode.extract_options(7);
        assert_eq!(options.include_folders, include_folders);
        assert_eq!(options.max_depth, 7);
    }

    #[test]
    fn test_default_is_tree() {
        assert_eq!(OutputMode::default(), OutputMode::Tree);
    }

    #[test]
    fn test_flat_lists_leaves_only() {
        assert_eq!(run(OutputMode::Flat), "🌠 - 1 A: http://a\n🌠 - 3 B: http://b\n");
    }

    #[test]
    fn test_json_lists_leaves_only() {
        let value: serde_json::Value = serde_json::from_str(&run(OutputMode::Json)).unwrap();
        let names: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["Name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_tree_nests_folder() {
        let output = run(OutputMode::Tree);
        assert!(output.starts_with("|- bookmarks\n"));
        assert!(output.contains("  |-📁 F\n    |-🌠 B → http://b\n  |-🌠 A → http://a\n"));
    }

    #[test]
    fn test_mode_from_yaml() {
        let mode: OutputMode = serde_yaml::from_str("json").unwrap();
        assert_eq!(mode, OutputMode::Json);
    }
}
