use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Default gradesout data directory: ~/.gradesout
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".gradesout"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.gradesout/config.toml (highest)
    if let Ok(dir) = data_dir() {
        let user_config = dir.join("config.toml");
        if user_config.exists() {
            return load_from(&user_config);
        }
    }

    // Priority 2: ./gradesout.toml (current directory)
    let local_config = Path::new("gradesout.toml");
    if local_config.exists() {
        return load_from(local_config);
    }

    Ok(AppConfig::default())
}

pub fn load_from(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<AppConfig>(&s)?)
}
