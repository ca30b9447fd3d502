use std::path::PathBuf;

use figment::Jail;
use fsa_config::FsaConfig;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("FSA_STORAGE__DIR", "/tmp/fsa-store");
        jail.set_env("FSA_PROGRESS__CACHE_TTL_MS", "250");

        let config = FsaConfig::load().expect("config loads");
        assert_eq!(config.storage.dir, PathBuf::from("/tmp/fsa-store"));
        assert_eq!(config.progress.cache_ttl_ms, 250);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".fsa")?;
        jail.create_file(
            ".fsa/config.toml",
            r#"
[labs]
catalog = "from-toml.json"
"#,
        )?;
        jail.set_env("FSA_LABS__CATALOG", "from-env.json");

        let config = FsaConfig::load().expect("config loads");
        assert_eq!(config.labs.catalog, "from-env.json");
        Ok(())
    });
}

#[test]
fn env_namespace_outside_key_charset_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("FSA_STORAGE__NAMESPACE", "my academy");

        let error = FsaConfig::load().expect_err("namespace with a space is rejected");
        assert!(error.to_string().contains("storage.namespace"));
        Ok(())
    });
}
