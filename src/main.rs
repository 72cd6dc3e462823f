use anyhow::Context;
use morpho_engine::config::{EngineConfig, USAGE};
use morpho_engine::engine::engine::MorphologyEngine;
use morpho_engine::engine::router::router;
use morpho_engine::lexicon::import::ImportReport;
use morpho_engine::synthesis::clash::ClashTable;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("{}", USAGE);
        eprintln!("Example: {} --bind 127.0.0.1:8080 --roots roots.txt --patterns patterns.txt", args[0]);
        std::process::exit(0);
    }

    let mut config = EngineConfig::from_env()?;
    config.apply_args(&args[1..])?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Starting morphology engine ({:?} alphabet)", config.alphabet);

    // 1. Clash table:
    let clashes = match &config.clash_table_file {
        Some(path) => ClashTable::parse(&read_seed(path)?)
            .with_context(|| format!("invalid clash table {}", path.display()))?,
        None => ClashTable::default(),
    };

    // 2. Engine:
    let engine = Arc::new(MorphologyEngine::with_clash_table(&config, clashes)?);

    // 3. Seed data:
    if let Some(path) = &config.patterns_file {
        log_import("patterns", path, &engine.import_patterns(&read_seed(path)?));
    }
    if let Some(path) = &config.roots_file {
        log_import("roots", path, &engine.import_roots(&read_seed(path)?));
    }
    if let Some(path) = &config.frequencies_file {
        log_import("frequencies", path, &engine.import_frequencies(&read_seed(path)?));
    }

    // 4. HTTP Router:
    let app = router(engine);

    // 5. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn read_seed(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn log_import(kind: &str, path: &Path, report: &ImportReport) {
    tracing::info!(
        "Seeded {} from {}: {} loaded, {} rejected",
        kind,
        path.display(),
        report.succeeded,
        report.failed.len()
    );
    for failure in &report.failed {
        tracing::warn!("  - line {}: {} ({})", failure.line, failure.content, failure.reason);
    }
}
