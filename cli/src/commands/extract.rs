use super::{AppContext, MeteorCommand};
use crate::output::colorize::profile_header;
use log::warn;
use meteor::error::{MeteorError, Result};
use meteor::format::{BookmarkFormat, Formatter};
use meteor::import::{extract_profile, ExtractOptions};
use meteor::profile::{BrowserFamily, BrowserProfile};
use std::io::{self, Write};
use std::path::PathBuf;

/// Extract and print every selected profile, one after another
pub struct ExtractCommand {
    /// Explicit Chromium files; discovery is skipped when any path is given
    pub bookmarks: Vec<PathBuf>,
    /// Explicit Firefox databases
    pub places: Vec<PathBuf>,
    pub families: Vec<BrowserFamily>,
}

impl ExtractCommand {
    fn profiles(&self, ctx: &AppContext) -> Vec<BrowserProfile> {
        if self.bookmarks.is_empty() && self.places.is_empty() {
            return ctx.discover(&self.families);
        }

        self.bookmarks
            .iter()
            .cloned()
            .map(BrowserProfile::from_bookmarks_file)
            .chain(
                self.places
                    .iter()
                    .cloned()
                    .map(BrowserProfile::from_places_file),
            )
            .collect()
    }

    pub fn run(&self, ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
        let profiles = self.profiles(ctx);
        if profiles.is_empty() {
            eprintln!("No browser profiles detected.");
            return Ok(());
        }

        let config = ctx.config;
        let options = config.mode.extract_options(config.max_depth);
        let formatter = config.mode.formatter(config.keying, config.max_depth);

        let mut failed = 0;
        for profile in &profiles {
            writeln!(out, "{}", profile_header(profile, config.color))?;

            match render_profile(profile, &options, &formatter) {
                Ok(rendered) => out.write_all(&rendered)?,
                Err(e) if config.keep_going => {
                    warn!("Skipping {}: {}", profile.display_string(), e);
                    eprintln!("Error: {}", e);
                    failed += 1;
                }
                Err(e) => return Err(e),
            }
        }
        out.flush()?;

        if failed > 0 {
            return Err(MeteorError::ProfilesFailed {
                failed,
                total: profiles.len(),
            });
        }
        Ok(())
    }
}

/// A profile is rendered in full before any of it is written
fn render_profile(
    profile: &BrowserProfile,
    options: &ExtractOptions,
    formatter: &Formatter,
) -> Result<Vec<u8>> {
    let bookmarks = extract_profile(profile, options)?;
    let mut buf = Vec::new();
    formatter.write_to(&bookmarks, &mut buf)?;
    Ok(buf)
}

impl MeteorCommand for ExtractCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run(ctx, &mut out)
    }
}
