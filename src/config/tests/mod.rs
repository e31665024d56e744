#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use crate::config::parser::{load_config, parse_config, resolve_config, ConfigError};

    // Helper function to create a temporary file with content
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_valid_configuration() {
        let config_yaml = r#"
        network:
          name: arb-dev
          rpc_url: http://localhost:8547
          transaction_type: legacy
          gas_config:
            gas_price_gwei: 0.1
            gas_multiplier: 1.5
        transfer:
          recipient: "0x1234567890123456789012345678901234567890"
          value_ether: "0.25"
          hardcoded_gas_limit: 500000
          receipt_timeout_seconds: 30
        key_storage:
          storage_type: env
        "#;

        let temp_file = create_temp_file(config_yaml);
        let config = load_config(temp_file.path()).expect("Failed to load valid config");

        assert_eq!(config.network.name, "arb-dev");
        assert_eq!(config.network.rpc_url, "http://localhost:8547");
        assert_eq!(config.network.transaction_type, "legacy");
        assert_eq!(config.network.gas_config.gas_price_gwei, Some(0.1));
        assert_eq!(config.network.gas_config.gas_multiplier, 1.5);
        assert_eq!(config.transfer.recipient, "0x1234567890123456789012345678901234567890");
        assert_eq!(config.transfer.value_ether, "0.25");
        assert_eq!(config.transfer.hardcoded_gas_limit, 500_000);
        assert_eq!(config.transfer.receipt_timeout_seconds, 30);
        assert_eq!(config.key_storage.storage_type, "env");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_file = create_temp_file("");
        let config = load_config(temp_file.path()).expect("Empty config should be valid");

        assert_eq!(config.network.rpc_url, "http://127.0.0.1:7545");
        assert_eq!(config.network.transaction_type, "eip1559");
        assert_eq!(config.network.gas_config.gas_multiplier, 1.0);
        assert_eq!(config.transfer.recipient, "0x27Cc3B0a2FA10218B116799380410AD7B93D9314");
        assert_eq!(config.transfer.value_ether, "1");
        assert_eq!(config.transfer.hardcoded_gas_limit, 300_000);
        assert_eq!(config.key_storage.storage_type, "dev");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = parse_config(
            r#"
            transfer:
              value_ether: "2"
            "#,
        )
        .expect("Partial config should be valid");

        assert_eq!(config.transfer.value_ether, "2");
        assert_eq!(config.transfer.hardcoded_gas_limit, 300_000);
        assert_eq!(config.network.name, "nitro-local");
    }

    #[test]
    fn test_value_conversion() {
        let config = parse_config("transfer:\n  value_ether: \"1.5\"\n").unwrap();
        let wei = config.transfer.value_wei().unwrap();
        assert_eq!(wei.to::<u128>(), 1_500_000_000_000_000_000);

        let recipient = config.transfer.recipient_address().unwrap();
        assert_eq!(
            format!("{recipient:?}").to_lowercase(),
            "0x27cc3b0a2fa10218b116799380410ad7b93d9314"
        );
    }

    #[test]
    fn test_invalid_recipient() {
        let result = parse_config(
            r#"
            transfer:
              recipient: "0x1234"
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_ether_amount() {
        let result = parse_config(
            r#"
            transfer:
              value_ether: "one"
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_transaction_type() {
        let result = parse_config(
            r#"
            network:
              transaction_type: eip4844
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_rpc_url() {
        let result = parse_config(
            r#"
            network:
              rpc_url: not a url
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_gas_multiplier_out_of_range() {
        let result = parse_config(
            r#"
            network:
              gas_config:
                gas_multiplier: 0.5
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_hardcoded_limit_below_intrinsic_gas() {
        let result = parse_config(
            r#"
            transfer:
              hardcoded_gas_limit: 20999
            "#,
        );

        match result {
            Err(ConfigError::ValidationError(errors)) => {
                assert!(errors.errors().contains_key("hardcoded_gas_limit"))
            }
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let config = parse_config("transfer:\n  hardcoded_gas_limit: 21000\n").unwrap();
        assert_eq!(config.transfer.hardcoded_gas_limit, 21_000);
    }

    #[test]
    fn test_nan_gas_multiplier_is_rejected() {
        let result = parse_config(
            r#"
            network:
              gas_config:
                gas_multiplier: .nan
            "#,
        );

        match result {
            Err(ConfigError::ValidationError(errors)) => {
                assert!(errors.errors().contains_key("gas_multiplier"))
            }
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_gas_price_is_rejected() {
        let result = parse_config(
            r#"
            network:
              transaction_type: legacy
              gas_config:
                gas_price_gwei: -1.0
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_non_finite_fees_are_rejected() {
        let result = parse_config(
            r#"
            network:
              gas_config:
                max_fee_per_gas_gwei: .inf
                max_priority_fee_per_gas_gwei: 1.0
            "#,
        );

        match result {
            Err(ConfigError::ValidationError(errors)) => {
                assert!(errors.errors().contains_key("max_fee_per_gas_gwei"))
            }
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_storage() {
        let result = parse_config(
            r#"
            key_storage:
              storage_type: keyring
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_priority_fee_above_max_fee() {
        let result = parse_config(
            r#"
            network:
              gas_config:
                max_fee_per_gas_gwei: 1.0
                max_priority_fee_per_gas_gwei: 2.0
            "#,
        );

        match result {
            Err(ConfigError::Other(msg)) => assert!(msg.contains("exceeds")),
            other => panic!("Expected ConfigError::Other, got {other:?}"),
        }
    }

    #[test]
    fn test_eip1559_fees_must_be_paired() {
        let result = parse_config(
            r#"
            network:
              gas_config:
                max_fee_per_gas_gwei: 1.0
            "#,
        );

        match result {
            Err(ConfigError::Other(msg)) => assert!(msg.contains("set together")),
            other => panic!("Expected ConfigError::Other, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_yaml() {
        let result = parse_config("network: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/gas-probe/config.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_resolve_explicit_path_must_exist() {
        let missing = std::path::Path::new("/nonexistent/gas-probe/config.yaml");
        assert!(resolve_config(Some(missing)).is_err());

        let temp_file = create_temp_file("network:\n  name: explicit\n");
        let config = resolve_config(Some(temp_file.path())).unwrap();
        assert_eq!(config.network.name, "explicit");
    }
}
