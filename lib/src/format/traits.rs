use crate::error::Result;
use crate::models::bookmark::Bookmark;
use std::io::Write;

/// A presentation of one profile's bookmark collection
pub trait BookmarkFormat {
    fn write_to(&self, bookmarks: &[Bookmark], out: &mut dyn Write) -> Result<()>;

    fn render(&self, bookmarks: &[Bookmark]) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(bookmarks, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
