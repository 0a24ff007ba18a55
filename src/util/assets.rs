use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("embedded asset {0} not found")]
    Missing(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    InvalidUtf8(String),
}

/// Returns the contents of `assets/main.css`, or an empty stylesheet if it
/// cannot be loaded.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            load_text("/assets/main.css").unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stylesheet unavailable");
                String::new()
            })
        })
        .as_str()
}

pub fn load_text(path: &str) -> Result<String, AssetError> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).map_err(|_| AssetError::InvalidUtf8(path.to_string()))
}

fn load_asset(path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .ok_or_else(|| AssetError::Missing(path.to_string()))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
