//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [api]
            key = "sk_test"
            base_url = "http://localhost:8080/v1"
            timeout = 10

            [retry]
            max_retries = 5
            backoff_factor = 0.25
            max_delay = 30
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.api.key.as_deref(), Some("sk_test"));
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
        assert_eq!(config.api.timeout, Some(10));
        assert_eq!(config.retry.max_retries, Some(5));
        assert_eq!(config.retry.backoff_factor, Some(0.25));
        assert_eq!(config.retry.max_delay, Some(30));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.api.key.is_none());
        assert!(config.api.base_url.is_none());
        assert!(config.retry.max_retries.is_none());
    }

    #[test]
    fn parse_partial_section() {
        let config = TomlConfig::parse("[retry]\nmax_retries = 0\n").unwrap();

        assert_eq!(config.retry.max_retries, Some(0));
        assert!(config.retry.backoff_factor.is_none());
        assert!(config.api.timeout.is_none());
    }

    #[test]
    fn integer_backoff_factor_is_accepted() {
        let config = TomlConfig::parse("[retry]\nbackoff_factor = 1\n").unwrap();

        assert_eq!(config.retry.backoff_factor, Some(1.0));
    }
}

mod errors {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[api]\ntoken = \"x\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(TomlConfig::parse("[webhook]\nurl = \"x\"\n").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(TomlConfig::parse("[api]\ntimeout = \"30\"\n").is_err());
    }

    #[test]
    fn negative_timeout_is_rejected() {
        assert!(TomlConfig::parse("[api]\ntimeout = -1\n").is_err());
    }

    #[test]
    fn missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TomlConfig::load(&dir.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}

mod debug_output {
    use super::*;

    #[test]
    fn api_key_is_redacted() {
        let config = TomlConfig::parse("[api]\nkey = \"sk_live_secret\"\n").unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("sk_live_secret"));
        assert!(rendered.contains("[redacted]"));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.api.key.is_none());
    }

    #[test]
    fn template_documents_every_option() {
        let template = default_config_template();

        for option in [
            "[api]",
            "key",
            "base_url",
            "timeout",
            "[retry]",
            "max_retries",
            "backoff_factor",
            "max_delay",
        ] {
            assert!(template.contains(option), "template lacks {option}");
        }
    }
}
