use anyhow::bail;
use giftdraw_core::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub language: Language,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: Language::Zh,
            verbose: false,
        }
    }
}

pub fn parse_language(value: &str) -> anyhow::Result<Language> {
    match value.to_ascii_lowercase().as_str() {
        "zh" | "zh-tw" => Ok(Language::Zh),
        "en" => Ok(Language::En),
        other => bail!("unknown language '{}' (expected zh or en)", other),
    }
}
