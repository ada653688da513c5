//! Tests for CLI argument parsing.

use super::cli::{
    CategoriesCommand, Cli, Command, OrdersCommand, ProductsCommand, WEBHOOK_SECRET_ENV,
    WebhooksCommand,
};
use crate::models::OrderStatus;
use chrono::{TimeZone, Utc};
use clap::{CommandFactory, Parser};

mod parsing {
    use super::*;

    #[test]
    fn parse_global_options() {
        let cli = Cli::parse_from_iter([
            "shop",
            "--api-key",
            "sk_test",
            "--base-url",
            "http://localhost:8080/v1",
            "--timeout",
            "10",
            "--max-retries",
            "5",
            "-v",
            "categories",
            "list",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("sk_test"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(cli.timeout, Some(10));
        assert_eq!(cli.max_retries, Some(5));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Categories {
                action: CategoriesCommand::List
            }
        ));
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from_iter([
            "shop",
            "products",
            "get",
            "p_1",
            "--config",
            "/etc/shop.toml",
            "--timeout",
            "5",
        ]);

        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("/etc/shop.toml"))
        );
        assert_eq!(cli.timeout, Some(5));
        assert!(matches!(
            cli.command,
            Command::Products {
                action: ProductsCommand::Get { ref id }
            } if id == "p_1"
        ));
    }

    #[test]
    fn parse_init_with_output() {
        let cli = Cli::parse_from_iter(["shop", "init", "--output", "shop.toml"]);

        assert!(matches!(
            cli.command,
            Command::Init { output: Some(ref p) } if p.as_os_str() == "shop.toml"
        ));
    }

    #[test]
    fn parse_init_without_output() {
        let cli = Cli::parse_from_iter(["shop", "init"]);

        assert!(matches!(cli.command, Command::Init { output: None }));
    }

    #[test]
    fn parse_verify_signature() {
        let cli = Cli::parse_from_iter([
            "shop",
            "verify-signature",
            "--secret",
            "whsec_1",
            "--signature",
            "abc123",
            "--payload-file",
            "body.json",
        ]);

        match cli.command {
            Command::VerifySignature {
                secret,
                signature,
                payload_file,
            } => {
                assert_eq!(secret, "whsec_1");
                assert_eq!(signature, "abc123");
                assert_eq!(payload_file.unwrap().as_os_str(), "body.json");
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::parse_from_iter([
            "shop",
            "verify-signature",
            "--secret",
            "s",
            "--signature",
            "x",
        ]);
        assert!(matches!(
            cli.command,
            Command::VerifySignature {
                payload_file: None,
                ..
            }
        ));
    }

    #[test]
    fn webhooks_list() {
        let cli = Cli::parse_from_iter(["shop", "webhooks", "list"]);

        assert!(matches!(
            cli.command,
            Command::Webhooks {
                action: WebhooksCommand::List
            }
        ));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["shop"]).is_err());
    }

    #[test]
    fn webhook_secret_can_come_from_hidden_env() {
        let command = Cli::command();
        let secret = command
            .find_subcommand("verify-signature")
            .and_then(|sub| sub.get_arguments().find(|arg| arg.get_id() == "secret"))
            .unwrap();

        assert_eq!(
            secret.get_env(),
            Some(std::ffi::OsStr::new(WEBHOOK_SECRET_ENV))
        );
        assert!(secret.is_hide_env_values_set());
    }

    #[test]
    fn verify_signature_requires_secret_and_signature() {
        assert!(Cli::try_parse_from(["shop", "verify-signature", "--secret", "s"]).is_err());
        assert!(Cli::try_parse_from(["shop", "verify-signature", "--signature", "x"]).is_err());
    }
}

mod products_list {
    use super::*;

    fn params(args: &[&str]) -> crate::models::ProductListParams {
        let mut full = vec!["shop", "products", "list"];
        full.extend(args);
        match Cli::parse_from_iter(full).command {
            Command::Products { action } => action.list_params().unwrap(),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn defaults_to_first_page_of_twenty() {
        let params = params(&[]);

        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
        assert!(params.category_id.is_none());
    }

    #[test]
    fn filters_are_carried() {
        let params = params(&[
            "--page",
            "2",
            "--limit",
            "50",
            "--category-id",
            "shoes",
            "--status",
            "active",
            "--search",
            "runner",
        ]);

        assert_eq!(
            params.to_query(),
            vec![
                ("page", "2".to_string()),
                ("limit", "50".to_string()),
                ("category_id", "shoes".to_string()),
                ("status", "active".to_string()),
                ("search", "runner".to_string()),
            ]
        );
    }

    #[test]
    fn get_has_no_list_params() {
        let action = ProductsCommand::Get {
            id: "p_1".to_string(),
        };

        assert!(action.list_params().is_none());
    }
}

mod orders_list {
    use super::*;

    #[test]
    fn status_and_since_are_parsed() {
        let cli = Cli::parse_from_iter([
            "shop",
            "orders",
            "list",
            "--status",
            "shipped",
            "--since",
            "2024-01-01T00:00:00Z",
        ]);

        let Command::Orders { action } = cli.command else {
            panic!("expected orders command");
        };
        let params = action.list_params().unwrap();

        assert_eq!(params.status, Some(OrderStatus::Shipped));
        assert_eq!(
            params.since,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = Cli::try_parse_from(["shop", "orders", "list", "--status", "archived"]);

        assert!(result.is_err());
    }

    #[test]
    fn malformed_since_is_rejected() {
        let result = Cli::try_parse_from(["shop", "orders", "list", "--since", "yesterday"]);

        assert!(result.is_err());
    }

    #[test]
    fn get_has_no_list_params() {
        let action = OrdersCommand::Get {
            id: "o_1".to_string(),
        };

        assert!(action.list_params().is_none());
    }
}
