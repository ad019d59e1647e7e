use std::env;
use std::path::PathBuf;

use spdlog::info;

use bilingual_blog::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];

    if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(|d| d.to_path_buf())) {
        candidates.push(exe_dir.join(CFG_FILE_NAME));
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir.join(CFG_FILE_NAME));
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join("bilingual-blog").join(CFG_FILE_NAME));
    }

    candidates.into_iter().find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => return Err(format!("Could not find {}", CFG_FILE_NAME)),
        Some(x) => x,
    };

    info!("Reading config from {}", config_path.display());
    let config = read_config(&config_path).map_err(|e| e.to_string())?;

    match config.log {
        Some(ref log) => match log.location {
            Some(ref location) => info!("Log enabled. Files will be written in {}", location.display()),
            None => info!("Log enabled. Using the console"),
        },
        None => info!("Log disabled. Using stdout"),
    }

    Ok(config)
}
