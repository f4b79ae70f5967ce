//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use silver_config::SilverConfig;

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "silver.toml",
            r#"
[storage]
data_dir = "/srv/silver"
records_file = "records.csv"
log_file = "log.csv"
"#,
        )?;

        let config: SilverConfig = Figment::from(Serialized::defaults(SilverConfig::default()))
            .merge(Toml::file("silver.toml"))
            .extract()?;

        assert_eq!(config.storage.data_dir, "/srv/silver");
        assert_eq!(config.storage.records_file, "records.csv");
        assert_eq!(config.storage.log_file, "log.csv");
        assert_eq!(
            config.storage.records_path(),
            std::path::PathBuf::from("/srv/silver/records.csv")
        );
        Ok(())
    });
}

#[test]
fn loads_credential_map_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "silver.toml",
            r#"
[credentials.users]
admin = "hunter2"
officer = "pass123"
"#,
        )?;

        let config: SilverConfig = Figment::from(Serialized::defaults(SilverConfig::default()))
            .merge(Toml::file("silver.toml"))
            .extract()?;

        assert!(config.credentials.is_configured());
        assert_eq!(config.credentials.password_for("admin"), Some("hunter2"));
        assert_eq!(config.credentials.password_for("officer"), Some("pass123"));
        assert_eq!(config.credentials.password_for("stranger"), None);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "silver.toml",
            r#"
[storage]
data_dir = "/srv/silver"
"#,
        )?;

        let config: SilverConfig = Figment::from(Serialized::defaults(SilverConfig::default()))
            .merge(Toml::file("silver.toml"))
            .extract()?;

        assert_eq!(config.storage.data_dir, "/srv/silver");
        assert_eq!(config.storage.records_file, "silver_data.csv");
        assert_eq!(config.storage.log_file, "action_log.csv");
        assert!(!config.credentials.is_configured());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "silver.toml",
            r#"
[storage]
data_dir = "/from/toml"
"#,
        )?;
        jail.set_env("SILVER_STORAGE__DATA_DIR", "/from/env");

        let config: SilverConfig = Figment::from(Serialized::defaults(SilverConfig::default()))
            .merge(Toml::file("silver.toml"))
            .merge(Env::prefixed("SILVER_").split("__"))
            .extract()?;

        assert_eq!(config.storage.data_dir, "/from/env");
        Ok(())
    });
}
