//! Purchase-intent engine entrypoint: load both artifacts once (fatal if
//! either is unavailable), then serve the form renderer over stdin/stdout —
//! one JSON session record per line in, one JSON prediction per line out.

use shopper_intent::{
    config::AppConfig, logging::StructuredLogger, model::ModelContext, session::Session,
};
use std::io::{BufRead, Write};
use tracing::{error, info, warn};

fn serve(ctx: &ModelContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let session: Session = match serde_json::from_str(&line) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "malformed session record; skipped");
                continue;
            }
        };
        match ctx.predict(&session) {
            Ok(prediction) => {
                info!(
                    request_id = %prediction.request_id,
                    verdict = ?prediction.verdict,
                    "prediction served"
                );
                writeln!(out, "{}", serde_json::to_string(&prediction)?)?;
                out.flush()?;
            }
            Err(e) => {
                warn!(error = %e, "prediction failed");
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("SHOPPER_INTENT_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = AppConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(
        scaler = %config.artifacts.scaler_path.display(),
        classifier = %config.artifacts.classifier_path.display(),
        "shopper-intent engine starting"
    );

    // Both artifacts must load before any trigger is read.
    let ctx = match ModelContext::load(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "artifact load failed; refusing to serve predictions");
            return Err(e.into());
        }
    };
    info!(feature_dim = ctx.feature_dim(), "artifacts loaded");

    serve(&ctx)?;
    info!("shopper-intent engine stopping");
    Ok(())
}
