// Template files: `{"template": "<text>"}`

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct TemplateFile {
    template: String,
}

pub fn save(path: &Path, text: &str) -> Result<(), String> {
    let doc = TemplateFile { template: text.to_string() };
    let json = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| e.to_string())?;
    log::info!("saved template to {}", path.display());
    Ok(())
}

/// Read a template file.
///
/// `Ok(None)` when the file is valid JSON without a string `"template"` entry.
pub fn load(path: &Path) -> Result<Option<String>, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let doc: serde_json::Value = serde_json::from_str(&content).map_err(|e| e.to_string())?;

    let text = doc
        .get("template")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    if text.is_none() {
        log::warn!("{} has no template entry", path.display());
    }
    Ok(text)
}
