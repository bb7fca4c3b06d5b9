use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("meteor");
    }

    if let Some(home) = home_dir() {
        return home.join(".config/meteor");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("meteor");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Home directory of the invoking user
pub fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    if let Ok(profile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(profile));
    }

    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Directory holding every user's home on this OS
pub fn users_root() -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        Some(PathBuf::from("/home"))
    } else if cfg!(target_os = "macos") {
        Some(PathBuf::from("/Users"))
    } else if cfg!(target_os = "windows") {
        Some(PathBuf::from(r"C:\Users"))
    } else {
        None
    }
}
