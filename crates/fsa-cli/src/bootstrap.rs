use std::path::PathBuf;

use anyhow::Context;
use fsa_config::FsaConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `FSA_*` env) and apply the
/// command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FsaConfig> {
    let config = FsaConfig::load_with_dotenv().context("failed to load fsa configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: FsaConfig, flags: &GlobalFlags) -> anyhow::Result<FsaConfig> {
    if let Some(dir) = &flags.data_dir {
        config.storage.dir = PathBuf::from(dir);
    }
    if let Some(catalog) = &flags.catalog {
        config.labs.catalog.clone_from(catalog);
    }
    config
        .validate()
        .context("invalid configuration after command-line overrides")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use fsa_config::CatalogLocation;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(data_dir: Option<&str>, catalog: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            data_dir: data_dir.map(str::to_string),
            catalog: catalog.map(str::to_string),
        }
    }

    #[test]
    fn overrides_replace_storage_dir_and_catalog() {
        let config = apply_overrides(
            FsaConfig::default(),
            &flags(Some("/tmp/learner"), Some("https://example.org/popups.json")),
        )
        .expect("overrides should apply");

        assert_eq!(config.storage.dir, PathBuf::from("/tmp/learner"));
        assert_eq!(
            config.labs.location(),
            CatalogLocation::Url("https://example.org/popups.json".into())
        );
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        let config =
            apply_overrides(FsaConfig::default(), &flags(None, None)).expect("defaults are valid");
        assert_eq!(config.labs.catalog, "data/popups.json");
    }

    #[test]
    fn blank_catalog_override_is_rejected() {
        let result = apply_overrides(FsaConfig::default(), &flags(None, Some("  ")));
        assert!(result.is_err());
    }
}
