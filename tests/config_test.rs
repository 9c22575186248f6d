/// 設定ファイル管理機能のテスト
///
/// このテストは、設定ファイルの読み込み、デフォルト値、検証、環境別設定の管理が
/// 正しく動作することを確認します。

#[cfg(test)]
mod config_tests {
    use seedbed::core::config::{Config, Dialect};
    use seedbed::services::config_loader::ConfigLoader;
    use std::path::Path;
    use tempfile::TempDir;

    const FULL_YAML: &str = r#"
version: "1.0"
dialect: postgresql
seeds_dir: fixtures

environments:
  development:
    host: localhost
    port: 5432
    database: seedbed_dev
    user: postgres
    password: password

  staging:
    host: staging.example.com
    database: seedbed_staging
    user: app_user
    password: secure_password
    ssl_mode: require
    timeout: 10

logging:
  level: debug
  file: logs/seedbed.log
"#;

    /// Config構造体が正しくデシリアライズできることを確認
    #[test]
    fn test_config_deserialization() {
        let config: Config = serde_saphyr::from_str(FULL_YAML).unwrap();

        assert_eq!(config.version, "1.0");
        assert_eq!(config.dialect, Dialect::PostgreSQL);
        assert_eq!(config.seeds_dir, Path::new("fixtures"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("logs/seedbed.log"))
        );
    }

    /// 環境別のデータベース設定を取得できることを確認
    #[test]
    fn test_get_database_config_for_environment() {
        let config: Config = FULL_YAML.parse().unwrap();

        let dev_config = config.get_database_config("development").unwrap();
        assert_eq!(dev_config.host, "localhost");
        assert_eq!(dev_config.port_for(config.dialect), 5432);
        assert_eq!(dev_config.ssl_mode, "disable");

        let staging_config = config.get_database_config("staging").unwrap();
        assert_eq!(staging_config.host, "staging.example.com");
        assert_eq!(staging_config.ssl_mode, "require");
        assert_eq!(staging_config.timeout, Some(10));
    }

    /// 存在しない環境名でエラーが返されることを確認
    #[test]
    fn test_get_nonexistent_environment() {
        let config: Config = FULL_YAML.parse().unwrap();
        assert!(config.get_database_config("production").is_err());
    }

    /// Dialectがデシリアライズできることを確認
    #[test]
    fn test_dialect_deserialization() {
        let pg: Dialect = serde_saphyr::from_str("postgresql").unwrap();
        assert_eq!(pg, Dialect::PostgreSQL);

        let pg_alias: Dialect = serde_saphyr::from_str("postgres").unwrap();
        assert_eq!(pg_alias, Dialect::PostgreSQL);

        let my: Dialect = serde_saphyr::from_str("mysql").unwrap();
        assert_eq!(my, Dialect::MySQL);

        let sq: Dialect = serde_saphyr::from_str("sqlite").unwrap();
        assert_eq!(sq, Dialect::SQLite);

        let invalid: Result<Dialect, _> = serde_saphyr::from_str("oracle");
        assert!(invalid.is_err());
    }

    /// デフォルト値が正しく設定されることを確認
    #[test]
    fn test_config_defaults() {
        let minimal_yaml = r#"
version: "1.0"
dialect: mysql

environments:
  development:
    database: seedbed_dev
"#;

        let config: Config = serde_saphyr::from_str(minimal_yaml).unwrap();

        assert_eq!(config.seeds_dir, Path::new("seeds"));
        assert_eq!(config.logging.level, "info");

        let db = config.get_database_config("development").unwrap();
        assert_eq!(db.host, "localhost");
        assert_eq!(db.port_for(config.dialect), 3306);
        assert!(db.user.is_none());
    }

    /// 必須フィールドがない場合はパースに失敗することを確認
    #[test]
    fn test_missing_database_name() {
        let invalid_yaml = r#"
version: "1.0"
environments:
  development:
    host: localhost
"#;

        let result: Result<Config, _> = serde_saphyr::from_str(invalid_yaml);
        assert!(result.is_err());
    }

    /// 空のデータベース名はバリデーションで拒否されることを確認
    #[test]
    fn test_config_validation_empty_database() {
        let yaml = r#"
version: "1.0"
environments:
  development:
    database: ""
"#;

        let config: Config = yaml.parse().unwrap();
        assert!(config.validate().is_err());
    }

    /// JSON形式の設定ファイルを読み込めることを確認
    #[test]
    fn test_load_json_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seedbed.json");
        std::fs::write(
            &path,
            r#"{
  "version": "1.0",
  "dialect": "sqlite",
  "environments": { "development": { "database": "dev.db" } },
  "logging": { "level": "warn" }
}"#,
        )
        .unwrap();

        let config = ConfigLoader::from_file(&path).unwrap();
        assert_eq!(config.dialect, Dialect::SQLite);
        assert_eq!(config.logging.level, "warn");
    }

    /// 壊れた設定ファイルのエラーにパスが含まれることを確認
    #[test]
    fn test_load_malformed_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seedbed.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ConfigLoader::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }
}
