// Compile-time constants from Cargo.toml and build.rs
pub const VERSION: &str = env!("AGENTCTL_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(PKG_NAME, "agentctl");
    }

    #[test]
    fn test_version_starts_with_package_version() {
        assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
    }
}
