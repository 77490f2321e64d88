#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::{CliError, ConfigError};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn load_with(contents: &str) -> crate::error::Result<ShelfConfig> {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), contents).unwrap();
        ShelfConfig::load(temp.path())
    }

    #[test]
    fn test_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp.path()).unwrap();

        assert_eq!(config, ShelfConfig::default());
        assert_eq!(config.components_dir, PathBuf::from("src/shared/ui"));
        assert_eq!(config.output_dir, PathBuf::from("registry"));
        assert_eq!(config.peer_dependencies, vec!["react"]);
        assert!(!config.fail_on_batch_error);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = load_with(
            r#"
output_dir = "public/r"
peer_dependencies = ["react", "react-dom"]
fail_on_batch_error = true
"#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("public/r"));
        assert_eq!(config.peer_dependencies, vec!["react", "react-dom"]);
        assert!(config.fail_on_batch_error);
        assert_eq!(config.components_dir, PathBuf::from("src/shared/ui"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = load_with("outdir = \"dist\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = load_with("fail_on_batch_error = \"yes\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_validation() {
        assert!(ShelfConfig::default().validate().is_ok());

        // Registry prefix outside the shared prefix
        assert!(ShelfConfig {
            registry_prefix: "@/ui/".to_string(),
            ..ShelfConfig::default()
        }
        .validate()
        .is_err());

        // Shared prefix outside the alias prefix
        assert!(ShelfConfig {
            shared_prefix: "~/shared/".to_string(),
            ..ShelfConfig::default()
        }
        .validate()
        .is_err());

        assert!(ShelfConfig {
            peer_dependencies: vec![String::new()],
            ..ShelfConfig::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_invalid_prefix_in_file_is_config_error() {
        let err = load_with("registry_prefix = \"@/shared/\"\n").unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "registry_prefix"
        ));
    }

    #[test]
    fn test_analyzer_config_conversion() {
        let config = ShelfConfig {
            output_dir: PathBuf::from("out"),
            peer_dependencies: vec!["preact".to_string()],
            ..ShelfConfig::default()
        };
        let analyzer = config.analyzer_config(Path::new("/project"));

        assert_eq!(analyzer.root, PathBuf::from("/project"));
        assert_eq!(
            analyzer.manifest_path("Button"),
            PathBuf::from("/project/out/Button.json")
        );
        assert_eq!(analyzer.peer_dependencies, vec!["preact"]);
        assert_eq!(analyzer.registry_prefix, "@/shared/ui/");
    }
}
