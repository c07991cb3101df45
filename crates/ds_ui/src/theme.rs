//! Theme construction from assets bundled into the application binary.

use ds_style::{StyleMap, Theme, ThemeConfig};
use leptos::logging;

/// Builds the application theme from an embedded TOML config and style-map JSON artifacts.
///
/// Intended for `include_str!` assets at startup. A malformed config falls back to the default
/// passthrough theme; a malformed artifact is skipped. Both cases are logged. Embedded configs
/// cannot reference files, so `style_maps` entries are ignored with a warning; pass the
/// artifacts directly instead.
pub fn load_embedded_theme(config_toml: &str, artifacts: &[&str]) -> Theme {
    let mut config = match ThemeConfig::from_toml_str(config_toml) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("theme config rejected, using passthrough theme: {err}");
            return Theme::default();
        }
    };
    let ignored = take_file_references(&mut config);
    if !ignored.is_empty() {
        logging::warn!(
            "embedded theme config ignores style_maps [{}]; pass the artifacts directly",
            ignored.join(", ")
        );
    }
    let maps = artifacts
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| match StyleMap::from_json_str(raw) {
            Ok(map) => Some(map),
            Err(err) => {
                logging::warn!("style map artifact #{index} skipped: {err}");
                None
            }
        })
        .collect::<Vec<_>>();
    config.into_theme(maps).unwrap_or_else(|err| {
        logging::warn!("theme build failed, using passthrough theme: {err}");
        Theme::default()
    })
}

fn take_file_references(config: &mut ThemeConfig) -> Vec<String> {
    std::mem::take(&mut config.style_maps)
}
