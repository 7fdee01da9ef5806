//! Rendering of generated responses for the terminal

use pmg_ai_core::{GeneratedResponse, ProviderKind, Result};
use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `--json` output
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<'a> {
    pub success: bool,
    pub result: &'a GeneratedResponse,
    pub timestamp: String,
    pub version: &'static str,
}

impl<'a> JsonEnvelope<'a> {
    pub fn new(result: &'a GeneratedResponse) -> Self {
        Self {
            success: true,
            result,
            timestamp: timestamp(),
            version: VERSION,
        }
    }
}

/// Current time as RFC 3339
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Text, then the provider tag on its own line
pub fn render_human(response: &GeneratedResponse) -> String {
    format!("\n{}\n\n[Provedor: {}]", response.text, response.provider)
}

pub fn render_json(response: &GeneratedResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonEnvelope::new(response))?)
}

pub fn render_status(availability: &[(ProviderKind, bool)]) -> String {
    let mut out = String::from("PMG AI - Provedores\n");
    for (kind, available) in availability {
        let mark = if *available { "disponível" } else { "indisponível" };
        out.push_str(&format!("  {:<14} {}\n", kind.as_str(), mark));
    }
    out
}
