use crate::error::{MeteorError, Result};
use crate::format::traits::BookmarkFormat;
use crate::models::bookmark::Bookmark;
use std::io::Write;

/// Pretty-printed JSON array of `{ID, Name, URL, Parent}`
pub struct JsonFormat;

impl BookmarkFormat for JsonFormat {
    fn write_to(&self, bookmarks: &[Bookmark], out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, bookmarks)
            .map_err(MeteorError::SerializationError)?;
        writeln!(out)?;
        Ok(())
    }
}
