use anyhow::{Context, bail};
use fsa_labs::{AnyCatalogSource, Catalog, PopupLabs};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LabCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fsa lab`.
pub async fn handle(
    action: &LabCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut labs = ctx.labs()?;
    match action {
        LabCommands::List => {
            let catalog = loaded(&labs).await?;
            let rows = catalog
                .iter()
                .map(|(id, entry)| {
                    json!({ "id": id, "type": entry.kind.type_name(), "title": entry.title })
                })
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        LabCommands::Validate => {
            let catalog = loaded(&labs).await?;
            output(
                &json!({ "labs": catalog.len(), "skipped": catalog.diagnostics() }),
                flags.format,
            )?;
            if !catalog.diagnostics().is_empty() {
                bail!(
                    "{} catalog entries failed validation",
                    catalog.diagnostics().len()
                );
            }
            Ok(())
        }
        LabCommands::Show { id } => {
            open(&mut labs, id).await?;
            let kind = labs
                .catalog()
                .and_then(|catalog| catalog.get(id))
                .map(|entry| entry.kind.type_name());
            output(
                &json!({ "id": id, "type": kind, "html": labs.modal().content() }),
                flags.format,
            )
        }
        LabCommands::Calc { id, input } => {
            open(&mut labs, id).await?;
            for (input_id, value) in input {
                if !labs.set_input(input_id, value) {
                    bail!("lab '{id}' has no input '{input_id}'");
                }
            }
            let result = labs
                .calculate(id)
                .with_context(|| format!("lab '{id}' produced no result"))?;
            output(&json!({ "id": id, "result": result }), flags.format)
        }
        LabCommands::Choose { id, index } => {
            open(&mut labs, id).await?;
            if !labs.select_choice(id, *index) {
                bail!("lab '{id}' has no choice {index}");
            }
            output(
                &json!({ "id": id, "choice": index, "outcome": labs.modal().outcome() }),
                flags.format,
            )
        }
    }
}

async fn loaded(labs: &PopupLabs<AnyCatalogSource>) -> anyhow::Result<&Catalog> {
    let catalog = labs.init().await;
    if let Some(error) = catalog.load_error() {
        bail!("catalog could not be loaded: {error}");
    }
    Ok(catalog)
}

async fn open(labs: &mut PopupLabs<AnyCatalogSource>, id: &str) -> anyhow::Result<()> {
    loaded(labs).await?;
    if !labs.open(id).await {
        bail!("lab '{id}' not found in catalog");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fsa_config::FsaConfig;
    use fsa_labs::LabResult;

    use super::*;
    use crate::cli::OutputFormat;

    fn context(catalog: &str) -> AppContext {
        let mut config = FsaConfig::default();
        config.labs.catalog = catalog.to_string();
        AppContext::new(config)
    }

    fn shipped_catalog() -> String {
        format!("{}/../../data/popups.json", env!("CARGO_MANIFEST_DIR"))
    }

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            data_dir: None,
            catalog: None,
        }
    }

    #[tokio::test]
    async fn calc_applies_inputs_before_calculating() {
        let ctx = context(&shipped_catalog());
        let mut labs = ctx.labs().expect("file source");
        open(&mut labs, "emergency-fund-lab")
            .await
            .expect("lab should open");
        assert!(labs.set_input("monthlyExpenses", "2000"));

        let result = labs.calculate("emergency-fund-lab").expect("result");
        assert!(matches!(result, LabResult::Report { .. }));
    }

    #[tokio::test]
    async fn unknown_input_fails_the_command() {
        let ctx = context(&shipped_catalog());
        let action = LabCommands::Calc {
            id: "emergency-fund-lab".into(),
            input: vec![("nope".into(), "1".into())],
        };
        assert!(handle(&action, &ctx, &flags()).await.is_err());
    }

    #[tokio::test]
    async fn missing_catalog_is_a_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = context(&dir.path().join("absent.json").display().to_string());
        assert!(handle(&LabCommands::List, &ctx, &flags()).await.is_err());
    }

    #[tokio::test]
    async fn choose_rejects_out_of_range_index() {
        let ctx = context(&shipped_catalog());
        let action = LabCommands::Choose {
            id: "windfall-scenario".into(),
            index: 99,
        };
        assert!(handle(&action, &ctx, &flags()).await.is_err());
    }
}
