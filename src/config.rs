//! TOML configuration naming the theme, font and icon sheet to load.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::SkinError;
use crate::label::LABEL_FONT_SIZE;

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    skin: SkinConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkinConfig {
    /// Theme TOML. The built-in theme is used when absent.
    pub theme: Option<PathBuf>,
    /// TTF/OTF font for labels.
    pub font: Option<PathBuf>,
    /// Icon sheet, PNG or SVG.
    pub icon_sheet: Option<PathBuf>,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl Default for SkinConfig {
    fn default() -> Self {
        SkinConfig { theme: None, font: None, icon_sheet: None, font_size: default_font_size() }
    }
}

fn default_font_size() -> f32 {
    LABEL_FONT_SIZE
}

impl SkinConfig {
    /// Parse a config file. Relative paths inside it are resolved against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self, SkinError> {
        let content = std::fs::read_to_string(path).map_err(|source| SkinError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| SkinError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(file.skin.resolved_against(base))
    }

    /// Load config with fallback chain:
    /// 1. $BEVELKIT_CONFIG env var
    /// 2. ./bevelkit.toml
    /// 3. Built-in defaults
    pub fn find_and_load() -> Self {
        let candidates: Vec<PathBuf> = vec![
            std::env::var("BEVELKIT_CONFIG").ok().map(PathBuf::from),
            Some(PathBuf::from("bevelkit.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();
        Self::first_loadable(&candidates)
    }

    fn first_loadable(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        info!("Loaded skin config from {}", path.display());
                        return config;
                    }
                    Err(e) => warn!("Failed to load {}: {e}", path.display()),
                }
            }
        }

        info!("Using built-in default skin config");
        Self::default()
    }

    fn resolved_against(self, base: &Path) -> Self {
        let resolve = |p: Option<PathBuf>| p.map(|p| if p.is_relative() { base.join(p) } else { p });
        SkinConfig {
            theme: resolve(self.theme),
            font: resolve(self.font),
            icon_sheet: resolve(self.icon_sheet),
            font_size: self.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bevelkit-config-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn parse_skin_toml() {
        let toml_str = r#"
[skin]
theme = "themes/dark.toml"
font = "/usr/share/fonts/DejaVuSans.ttf"
font_size = 12.0
"#;
        let file: ConfigFile = toml::from_str(toml_str).unwrap();
        let config = file.skin.resolved_against(Path::new("/etc/bevelkit"));
        assert_eq!(config.theme, Some(PathBuf::from("/etc/bevelkit/themes/dark.toml")));
        assert_eq!(config.font, Some(PathBuf::from("/usr/share/fonts/DejaVuSans.ttf")));
        assert_eq!(config.icon_sheet, None);
        assert_eq!(config.font_size, 12.0);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file.skin, SkinConfig::default());
        assert_eq!(file.skin.font_size, 13.0);
    }

    #[test]
    fn broken_candidate_falls_through() {
        let dir = scratch_dir("fallback");
        let broken = dir.join("broken.toml");
        let good = dir.join("good.toml");
        std::fs::write(&broken, "[skin\nfont = ").unwrap();
        std::fs::write(&good, "[skin]\nicon_sheet = \"icons.png\"\n").unwrap();

        let config = SkinConfig::first_loadable(&[dir.join("missing.toml"), broken.clone(), good]);
        assert_eq!(config.icon_sheet, Some(dir.join("icons.png")));

        assert!(matches!(SkinConfig::load(&broken), Err(SkinError::ConfigParse { .. })));
        assert_eq!(SkinConfig::first_loadable(&[broken]), SkinConfig::default());
        std::fs::remove_dir_all(&dir).ok();
    }
}
