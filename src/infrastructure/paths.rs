//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// File name of the plugin log inside the data directory.
const LOG_FILE_NAME: &str = "charpick.log";

/// Returns the plugin data directory, `/host/.local/share/zellij/charpick`.
///
/// `/host` is the cwd of the last focused terminal (or where Zellij was
/// started), which is usually the home directory.
///
/// ```
/// use charpick::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/charpick"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("charpick")
}

/// Location of the rotating plugin log.
#[must_use]
pub fn log_file_path() -> PathBuf {
    get_data_dir().join(LOG_FILE_NAME)
}

/// Maps `~`-prefixed paths onto the sandbox's `/host` mount.
///
/// ```
/// use charpick::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
