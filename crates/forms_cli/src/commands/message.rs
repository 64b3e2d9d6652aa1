use anyhow::{Result, anyhow};
use forms_validator::{MessageCatalog, MessageParam};
use tracing::debug;

use crate::output;

pub fn execute(category: Option<&str>, kind: Option<&str>, params: &[String]) -> Result<()> {
    let catalog = MessageCatalog::new();

    let Some(category) = category else {
        output::print_info("Message categories:");
        for category in catalog.categories() {
            println!("  {}", category);
        }
        return Ok(());
    };

    let Some(kind) = kind else {
        let kinds = catalog.kinds(category);
        if kinds.is_empty() {
            return Err(anyhow!("Unknown message category '{}'", category));
        }
        output::print_info(&format!("Kinds for '{}':", category));
        for kind in kinds {
            println!("  {}", kind);
        }
        return Ok(());
    };

    let params: Vec<MessageParam> = params.iter().map(|p| parse_param(p)).collect();
    debug!(category, kind, params = params.len(), "rendering catalog message");

    println!("{}", catalog.get_message(category, kind, &params));
    Ok(())
}

/// Numeric text becomes a number parameter; anything else stays text.
fn parse_param(raw: &str) -> MessageParam {
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map_or_else(|| MessageParam::from(raw), MessageParam::Number)
}
