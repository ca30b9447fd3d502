//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env var changes.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use fsa_config::{CatalogLocation, ConfigError, FsaConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
dir = "/var/lib/fsa"
namespace = "academy"

[progress]
cache_ttl_ms = 1500

[labs]
catalog = "https://example.org/data/popups.json"
fetch_timeout_secs = 3

[prompts]
out_dir = "out/prompts"
"#,
        )?;

        let config: FsaConfig = Figment::from(Serialized::defaults(FsaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.dir, PathBuf::from("/var/lib/fsa"));
        assert_eq!(config.storage.namespace, "academy");
        assert_eq!(config.progress.cache_ttl_ms, 1500);
        assert_eq!(config.labs.fetch_timeout_secs, 3);
        assert_eq!(
            config.labs.location(),
            CatalogLocation::Url("https://example.org/data/popups.json".into())
        );
        assert_eq!(config.prompts.out_dir, PathBuf::from("out/prompts"));
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[labs]
catalog = "content/labs.json"
"#,
        )?;

        let config: FsaConfig = Figment::from(Serialized::defaults(FsaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.labs.catalog, "content/labs.json");
        assert_eq!(config.labs.fetch_timeout_secs, 10);
        assert_eq!(config.storage.namespace, "fsa");
        assert_eq!(config.progress.cache_ttl_ms, 5_000);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".fsa")?;
        jail.create_file(
            ".fsa/config.toml",
            r#"
[storage]
namespace = "project"
"#,
        )?;

        let config = FsaConfig::load().expect("config loads");
        assert_eq!(config.storage.namespace, "project");
        Ok(())
    });
}

#[test]
fn load_rejects_zero_cache_ttl() {
    Jail::expect_with(|jail| {
        jail.create_dir(".fsa")?;
        jail.create_file(
            ".fsa/config.toml",
            r#"
[progress]
cache_ttl_ms = 0
"#,
        )?;

        let error = FsaConfig::load().expect_err("zero ttl is invalid");
        assert!(matches!(
            error,
            ConfigError::InvalidValue { ref field, .. } if field == "progress.cache_ttl_ms"
        ));
        Ok(())
    });
}
