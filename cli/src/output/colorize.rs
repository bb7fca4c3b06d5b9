use meteor::profile::{BrowserFamily, BrowserProfile};
use owo_colors::OwoColorize;

pub fn family_icon(family: BrowserFamily) -> &'static str {
    match family {
        BrowserFamily::Chromium => "🌐",
        BrowserFamily::Firefox => "🦊🔥",
    }
}

/// Line announcing which file the following output came from
pub fn profile_header(profile: &BrowserProfile, color: bool) -> String {
    let label = format!("Extracted {} Bookmarks:", profile.family.display_name());
    let path = profile.path.display().to_string();

    if color {
        format!(
            "{} {} {}",
            family_icon(profile.family),
            label.bold().green(),
            path.yellow()
        )
    } else {
        format!("{} {} {}", family_icon(profile.family), label, path)
    }
}
