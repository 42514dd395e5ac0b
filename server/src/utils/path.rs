//! Path helpers for config file lookup

use std::path::PathBuf;

/// Resolve a user-supplied config path.
///
/// `~` and `~/...` expand to the home directory; relative paths are joined to
/// the current directory so log lines always show where a file was read from.
pub fn resolve_config_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    let cwd = || std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if raw.is_empty() {
        return cwd();
    }

    let path = match raw.strip_prefix('~') {
        Some("") => dirs::home_dir().unwrap_or_else(|| PathBuf::from(raw)),
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => dirs::home_dir()
            .map(|home| home.join(&rest[1..]))
            .unwrap_or_else(|| PathBuf::from(raw)),
        _ => PathBuf::from(raw),
    };

    if path.is_relative() {
        cwd().join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_unchanged() {
        assert_eq!(
            resolve_config_path("/etc/traderboard.json"),
            PathBuf::from("/etc/traderboard.json")
        );
    }

    #[test]
    fn test_relative_path_joins_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            resolve_config_path("conf/traderboard.json"),
            cwd.join("conf/traderboard.json")
        );
    }

    #[test]
    fn test_tilde_expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_config_path("~"), home);
            assert_eq!(resolve_config_path("~/tb.json"), home.join("tb.json"));
        }
    }

    #[test]
    fn test_tilde_user_form_is_relative() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_config_path("~bob/x"), cwd.join("~bob/x"));
    }

    #[test]
    fn test_blank_is_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_config_path("  "), cwd);
    }
}
