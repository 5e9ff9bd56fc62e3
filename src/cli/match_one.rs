//! CLI `match` command — classify a single utterance and print the intent.

use anyhow::Result;

use banter::config::BanterConfig;

/// Match one utterance against the catalog and print the result.
pub fn match_one(config: &BanterConfig, utterance: &str, json: bool) -> Result<()> {
    let matcher = super::build_matcher(config)?;
    let result = matcher.match_intent(utterance)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Intent: {} (score: {:.4})", result.intent, result.score);
    }

    Ok(())
}
