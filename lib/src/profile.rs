use crate::utils;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Bookmark storage family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BrowserFamily {
    /// Chrome, Chromium, Brave, Edge, Opera, Vivaldi: JSON `Bookmarks` file
    Chromium,
    /// Firefox: `places.sqlite`
    Firefox,
}

impl BrowserFamily {
    /// Get a user-friendly display name for the family
    pub fn display_name(&self) -> &str {
        match self {
            BrowserFamily::Chromium => "Chromium",
            BrowserFamily::Firefox => "Firefox",
        }
    }

    /// Parse family from string (case-insensitive)
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "chromium" | "chrome" => Some(BrowserFamily::Chromium),
            "firefox" => Some(BrowserFamily::Firefox),
            _ => None,
        }
    }
}

/// Browser profile location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserProfile {
    pub family: BrowserFamily,
    /// Browser directory name, e.g. `google-chrome` or `BraveSoftware/Brave-Browser`
    pub browser: String,
    pub profile_name: String,
    /// `Bookmarks` file or `places.sqlite`
    pub path: PathBuf,
}

impl BrowserProfile {
    /// Profile for an explicitly named Chromium `Bookmarks` file
    pub fn from_bookmarks_file(path: PathBuf) -> Self {
        Self::explicit(BrowserFamily::Chromium, path)
    }

    /// Profile for an explicitly named Firefox `places.sqlite`
    pub fn from_places_file(path: PathBuf) -> Self {
        Self::explicit(BrowserFamily::Firefox, path)
    }

    fn explicit(family: BrowserFamily, path: PathBuf) -> Self {
        let profile_name = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        Self {
            family,
            browser: family.display_name().to_string(),
            profile_name,
            path,
        }
    }

    pub fn display_string(&self) -> String {
        format!("{} ({})", self.browser, self.profile_name)
    }
}

/// Scans home directories for browser profiles
#[derive(Debug, Clone)]
pub struct ProfileLocator {
    homes: Vec<PathBuf>,
}

impl ProfileLocator {
    pub fn new(homes: Vec<PathBuf>) -> Self {
        let mut homes = homes;
        homes.sort();
        homes.dedup();
        Self { homes }
    }

    /// Every home under the OS users directory, plus the current user's
    pub fn from_system() -> Self {
        let mut homes = Vec::new();

        if let Some(root) = utils::users_root() {
            homes.extend(subdirectories(&root));
        }
        if let Some(home) = utils::home_dir() {
            homes.push(home);
        }

        Self::new(homes)
    }

    pub fn homes(&self) -> &[PathBuf] {
        &self.homes
    }

    /// Profiles of the requested families; Chromium first, each sorted by path
    pub fn locate(&self, families: &[BrowserFamily]) -> Vec<BrowserProfile> {
        let mut profiles = Vec::new();

        if families.contains(&BrowserFamily::Chromium) {
            profiles.extend(self.chromium_profiles());
        }
        if families.contains(&BrowserFamily::Firefox) {
            profiles.extend(self.firefox_profiles());
        }

        profiles
    }

    /// Detect all Chromium-family profiles
    pub fn chromium_profiles(&self) -> Vec<BrowserProfile> {
        let mut profiles = Vec::new();

        for home in &self.homes {
            for base in chromium_bases(home) {
                for user_data in chromium_user_data_dirs(&base) {
                    profiles.extend(chromium_profiles_in(&base, &user_data));
                }
            }
        }

        finish(profiles)
    }

    /// Detect all Firefox profiles
    pub fn firefox_profiles(&self) -> Vec<BrowserProfile> {
        let mut profiles = Vec::new();

        for home in &self.homes {
            let base = firefox_base(home);
            for dir in subdirectories(&base) {
                let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !name.contains(".default") {
                    continue;
                }

                let places = dir.join("places.sqlite");
                if places.is_file() {
                    profiles.push(BrowserProfile {
                        family: BrowserFamily::Firefox,
                        browser: "Firefox".to_string(),
                        profile_name: name.to_string(),
                        path: places,
                    });
                }
            }
        }

        finish(profiles)
    }
}

fn finish(mut profiles: Vec<BrowserProfile>) -> Vec<BrowserProfile> {
    profiles.sort_by(|a, b| a.path.cmp(&b.path));
    profiles.dedup_by(|a, b| a.path == b.path);
    debug!("Found {} profiles", profiles.len());
    profiles
}

/// Directories below which Chromium-family browsers keep their user data
fn chromium_bases(home: &Path) -> Vec<PathBuf> {
    if cfg!(target_os = "macos") {
        vec![home.join("Library/Application Support")]
    } else if cfg!(target_os = "windows") {
        vec![home.join(r"AppData\Local"), home.join(r"AppData\Roaming")]
    } else {
        vec![home.join(".config")]
    }
}

/// Candidate user-data directories under a base
fn chromium_user_data_dirs(base: &Path) -> Vec<PathBuf> {
    if cfg!(target_os = "macos") {
        [
            "Google/Chrome",
            "Chromium",
            "BraveSoftware/Brave-Browser",
            "Microsoft Edge",
            "Vivaldi",
            "com.operasoftware.Opera",
        ]
        .iter()
        .map(|dir| base.join(dir))
        .collect()
    } else if cfg!(target_os = "windows") {
        [
            r"Chromium\User Data",
            r"Google\Chrome\User Data",
            r"BraveSoftware\Brave-Browser\User Data",
            r"Microsoft\Edge\User Data",
            r"Vivaldi\User Data",
            r"Opera Software\Opera Stable",
        ]
        .iter()
        .map(|dir| base.join(dir))
        .collect()
    } else {
        // Any ~/.config/<browser> or ~/.config/<vendor>/<browser>
        let mut dirs = Vec::new();
        for dir in subdirectories(base) {
            dirs.extend(subdirectories(&dir));
            dirs.push(dir);
        }
        dirs
    }
}

fn is_profile_dir_name(name: &str) -> bool {
    name == "Default" || name.starts_with("Profile ")
}

fn chromium_profiles_in(base: &Path, user_data: &Path) -> Vec<BrowserProfile> {
    let mut profiles = Vec::new();

    if user_data
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(is_profile_dir_name)
    {
        return profiles;
    }

    let browser = browser_label(base, user_data);
    for dir in subdirectories(user_data) {
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let bookmarks = dir.join("Bookmarks");
        if is_profile_dir_name(name) && bookmarks.is_file() {
            profiles.push(BrowserProfile {
                family: BrowserFamily::Chromium,
                browser: browser.clone(),
                profile_name: name.to_string(),
                path: bookmarks,
            });
        }
    }

    // Opera keeps a single profile directly in its user-data directory
    let bookmarks = user_data.join("Bookmarks");
    if profiles.is_empty() && browser.to_lowercase().contains("opera") && bookmarks.is_file() {
        profiles.push(BrowserProfile {
            family: BrowserFamily::Chromium,
            browser,
            profile_name: "Default".to_string(),
            path: bookmarks,
        });
    }

    profiles
}

fn browser_label(base: &Path, user_data: &Path) -> String {
    let relative = user_data.strip_prefix(base).unwrap_or(user_data);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .filter(|c| c != "User Data")
        .collect::<Vec<_>>()
        .join("/")
}

fn firefox_base(home: &Path) -> PathBuf {
    if cfg!(target_os = "macos") {
        home.join("Library/Application Support/Firefox/Profiles")
    } else if cfg!(target_os = "windows") {
        home.join(r"AppData\Roaming\Mozilla\Firefox\Profiles")
    } else {
        home.join(".mozilla/firefox")
    }
}

fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect(),
        Err(_) => Vec::new(),
    };
    dirs.sort();
    dirs
}
