//! CLI `doctor` command — check model files and catalog health.

use anyhow::Result;

use banter::config::BanterConfig;

/// Inspect the embedding model cache and the configured catalog, print a
/// health report.
pub fn doctor(config: &BanterConfig) -> Result<()> {
    let cache_dir = banter::config::expand_tilde(&config.embedding.cache_dir);
    let model_path = cache_dir.join("model.onnx");
    let tokenizer_path = cache_dir.join("tokenizer.json");

    println!("Banter Health Report");
    println!("====================");
    println!();
    println!("Embedding model:   {}", config.embedding.model);
    println!("Cache dir:         {}", cache_dir.display());

    let model_ok = model_path.exists();
    let tokenizer_ok = tokenizer_path.exists();
    if model_ok {
        let size = std::fs::metadata(&model_path).map(|m| m.len()).unwrap_or(0);
        println!("  model.onnx:      OK ({})", format_bytes(size));
    } else {
        println!("  model.onnx:      MISSING");
    }
    if tokenizer_ok {
        println!("  tokenizer.json:  OK");
    } else {
        println!("  tokenizer.json:  MISSING");
    }
    if !model_ok || !tokenizer_ok {
        println!();
        println!("Run `banter model download` to fetch the missing files.");
    }

    println!();
    match super::load_catalog(config) {
        Ok(catalog) => {
            let source = config
                .resolved_catalog_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(builtin)".to_string());
            println!("Catalog:           {source}");
            println!("  Intents:         {}", catalog.len());
            println!("  Patterns:        {}", catalog.pattern_count());
            println!("  Status:          OK");
        }
        Err(err) => {
            println!("Catalog:           INVALID");
            println!("  {err:#}");
        }
    }

    println!();
    println!("Transcript:        {}", config.resolved_transcript_path().display());
    println!(
        "  Enabled:         {}",
        if config.transcript.enabled { "yes" } else { "no" }
    );

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
