use crate::error::Result;
use crate::format::traits::BookmarkFormat;
use crate::models::bookmark::Bookmark;
use std::io::Write;

/// One line per record, in extraction order
pub struct FlatFormat;

impl BookmarkFormat for FlatFormat {
    fn write_to(&self, bookmarks: &[Bookmark], out: &mut dyn Write) -> Result<()> {
        for b in bookmarks {
            if b.is_folder() {
                writeln!(out, "📁 - {} {}", b.id, b.name)?;
            } else {
                writeln!(out, "🌠 - {} {}: {}", b.id, b.name, b.url)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_record_in_order() {
        let bookmarks = vec![
            Bookmark::new(
                "9".to_string(),
                "Zed".to_string(),
                "https://zed.dev/".to_string(),
                "other".to_string(),
            ),
            Bookmark::new(
                "3".to_string(),
                "Alpha".to_string(),
                "https://alpha.example/".to_string(),
                "bookmark_bar".to_string(),
            ),
        ];

        let output = FlatFormat.render(&bookmarks).unwrap();
        assert_eq!(
            output,
            "🌠 - 9 Zed: https://zed.dev/\n🌠 - 3 Alpha: https://alpha.example/\n"
        );
    }

    #[test]
    fn test_empty_collection_prints_nothing() {
        assert_eq!(FlatFormat.render(&[]).unwrap(), "");
    }
}
