use anyhow::Context;
use clap::Parser;
use colorcraft::config::cli::{Command, SavedAction};
use colorcraft::core::ConfigProvider;
use colorcraft::utils::error::{ColorError, ErrorSeverity};
use colorcraft::utils::{logger, validation::Validate};
use colorcraft::{
    export_palette, BaseColor, CliConfig, ColorPalette, EngineOutput, ExtractionPipeline,
    HarmonyPipeline, LocalStorage, PaletteEngine, PaletteStore, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting colorcraft");

    if let Some(path) = config.config.clone() {
        let toml = TomlConfig::from_file(&path)
            .with_context(|| format!("failed to load config file '{}'", path))?;
        toml.validate()
            .with_context(|| format!("invalid config file '{}'", path))?;
        config.apply_toml(&toml);
        tracing::debug!("Applied config file {}", path);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ colorcraft failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(config: CliConfig) -> colorcraft::Result<()> {
    let exports = LocalStorage::new(config.output_path());
    let store = PaletteStore::with_capacity(
        LocalStorage::new(config.data_dir()),
        config.settings().max_saved_palettes,
    );

    match config.command.clone() {
        Command::Extract { image } => {
            let pipeline = ExtractionPipeline::new(store, exports, config, image);
            let output = PaletteEngine::new(pipeline).run().await?;
            print_output(&output);
        }
        Command::Harmony {
            base,
            image,
            scheme,
            name,
        } => {
            let base = match (base, image) {
                (Some(hex), _) => BaseColor::Hex(hex),
                (None, Some(path)) => BaseColor::Image(path),
                (None, None) => {
                    return Err(ColorError::MissingConfigError {
                        field: "--base or --image".to_string(),
                    })
                }
            };

            let mut pipeline = HarmonyPipeline::new(store, exports, config, base, &scheme);
            if let Some(name) = name {
                pipeline = pipeline.with_name(name);
            }
            let output = PaletteEngine::new(pipeline).run().await?;
            print_output(&output);
        }
        Command::Saved { action } => run_saved(&store, &config, action).await?,
    }

    Ok(())
}

async fn run_saved(
    store: &PaletteStore<LocalStorage>,
    config: &CliConfig,
    action: SavedAction,
) -> colorcraft::Result<()> {
    match action {
        SavedAction::List => {
            let palettes = store.list().await;
            if palettes.is_empty() {
                println!("No saved palettes yet");
            }
            for palette in &palettes {
                print_palette(palette);
            }
        }
        SavedAction::Delete { id } => {
            if store.delete(&id).await? {
                println!("🗑️  Deleted palette {}", id);
            } else {
                println!("No saved palette with id {}", id);
            }
        }
        SavedAction::Export { id } => {
            let palette = store.get(&id).await.ok_or_else(|| ColorError::ValidationError {
                message: format!("No saved palette with id {}", id),
            })?;
            println!("{}", export_palette(&palette, config.export_format())?);
        }
    }
    Ok(())
}

fn print_palette(palette: &ColorPalette) {
    let hexes: Vec<&str> = palette.colors.iter().map(|c| c.hex.as_str()).collect();
    println!(
        "{}  {} [{}] {}",
        palette.id,
        palette.name,
        palette.harmony,
        palette.created_at.format("%Y-%m-%d")
    );
    println!("    {}", hexes.join(" "));
}

fn print_output(output: &EngineOutput) {
    if output.palettes.is_empty() {
        println!("No colors found (the image may be fully transparent)");
        return;
    }
    for palette in &output.palettes {
        print_palette(palette);
    }
    println!("📁 Exports written to: {}", output.output_path);
}
