use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` and `~/...` are expanded; any other path is returned unchanged.
/// Returns `None` when the path needs expansion but `HOME` is unset.
///
/// # Examples
///
/// ```
/// use agentctl::utils::path::expand_tilde;
///
/// let path = expand_tilde("/etc/agentctl.toml").unwrap();
/// assert_eq!(path.to_str(), Some("/etc/agentctl.toml"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_str()?;

    let Some(after_tilde) = path_str.strip_prefix('~') else {
        return Some(path.to_path_buf());
    };

    if after_tilde.is_empty() || after_tilde.starts_with('/') {
        let home = std::env::var("HOME").ok()?;
        return Some(PathBuf::from(home).join(after_tilde.trim_start_matches('/')));
    }

    // ~user forms are left for the shell to handle
    Some(path.to_path_buf())
}

/// Expand `~` and resolve a relative path against `root`.
pub fn resolve_against<P: AsRef<Path>>(root: &Path, path: P) -> PathBuf {
    let path = path.as_ref();
    let path = expand_tilde(path).unwrap_or_else(|| path.to_path_buf());
    if path.is_relative() {
        root.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    #[serial_test::serial]
    fn test_expand_tilde_current_user() {
        let home = env::var("HOME").unwrap();

        let expanded = expand_tilde("~").unwrap();
        assert_eq!(expanded, PathBuf::from(&home));

        let expanded = expand_tilde("~/agents/builder.yaml").unwrap();
        assert_eq!(
            expanded,
            PathBuf::from(format!("{}/agents/builder.yaml", home))
        );
    }

    #[test]
    fn test_expand_tilde_no_tilde() {
        let expanded = expand_tilde("/absolute/path").unwrap();
        assert_eq!(expanded, PathBuf::from("/absolute/path"));

        let expanded = expand_tilde("relative/path").unwrap();
        assert_eq!(expanded, PathBuf::from("relative/path"));
    }

    #[test]
    fn test_resolve_against() {
        let root = Path::new("/work");
        assert_eq!(
            resolve_against(root, "agents/a.yaml"),
            PathBuf::from("/work/agents/a.yaml")
        );
        assert_eq!(resolve_against(root, "/abs/a.yaml"), PathBuf::from("/abs/a.yaml"));
    }

    #[test]
    fn test_expand_tilde_other_user_untouched() {
        let expanded = expand_tilde("~root/.bashrc").unwrap();
        assert_eq!(expanded, PathBuf::from("~root/.bashrc"));
    }

    #[test]
    #[serial_test::serial]
    fn test_expand_tilde_no_home_env() {
        let original_home = env::var("HOME").ok();
        env::remove_var("HOME");

        assert!(expand_tilde("~/file").is_none());

        if let Some(home) = original_home {
            env::set_var("HOME", home);
        }
    }
}
