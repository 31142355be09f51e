//! Weights command: show or export the effective weight table

use std::path::Path;

use crate::{core::write_string, scoring::weights::WeightTable, Result};

use super::common::CommandContext;

pub fn weights_json(weights: &WeightTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(weights)?)
}

/// Handle the weights command
pub async fn handle_weights(ctx: CommandContext, write: Option<&Path>) -> Result<()> {
    let json = weights_json(&ctx.weights)?;

    match write {
        Some(path) => {
            write_string(path, &json)?;
            println!("✓ Wrote weight table {} to {}", ctx.weights.version, path.display());
        }
        None => println!("{json}"), // tarpaulin::skip
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_json_reloads() {
        let json = weights_json(&WeightTable::default()).unwrap();
        assert!(json.contains("\"version\": \"2024.1\""));
        assert_eq!(WeightTable::from_json(&json).unwrap(), WeightTable::default());
    }

    #[tokio::test]
    async fn test_write_weights_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("weights.json");
        let ctx = CommandContext::in_memory().unwrap();

        handle_weights(ctx, Some(&path)).await.unwrap();

        let loaded = WeightTable::load(&path).unwrap();
        assert_eq!(loaded.version, "2024.1");
    }
}
