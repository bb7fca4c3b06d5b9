use super::{AppContext, MeteorCommand};
use crate::output::colorize::family_icon;
use meteor::error::Result;
use meteor::profile::{BrowserFamily, BrowserProfile};
use std::io::{self, Write};

pub struct ListCommand {
    pub families: Vec<BrowserFamily>,
}

impl ListCommand {
    fn write_profiles(profiles: &[BrowserProfile], out: &mut dyn Write) -> Result<()> {
        for profile in profiles {
            writeln!(
                out,
                "{} {}: {}",
                family_icon(profile.family),
                profile.display_string(),
                profile.path.display()
            )?;
        }
        Ok(())
    }
}

impl MeteorCommand for ListCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let profiles = ctx.discover(&self.families);
        if profiles.is_empty() {
            eprintln!("No browser profiles detected.");
            return Ok(());
        }

        eprintln!("Detected browser profiles:");
        Self::write_profiles(&profiles, &mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_one_line_per_profile() {
        let profiles = vec![
            BrowserProfile::from_bookmarks_file(PathBuf::from(
                "/h/.config/chromium/Default/Bookmarks",
            )),
            BrowserProfile::from_places_file(PathBuf::from(
                "/h/.mozilla/firefox/x.default/places.sqlite",
            )),
        ];

        let mut out = Vec::new();
        ListCommand::write_profiles(&profiles, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "🌐 Chromium (Default): /h/.config/chromium/Default/Bookmarks",
                "🦊🔥 Firefox (x.default): /h/.mozilla/firefox/x.default/places.sqlite",
            ]
        );
    }
}
