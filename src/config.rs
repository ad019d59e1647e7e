use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::content::schema::{SchemaOptions, DEFAULT_AUTHOR};
use crate::i18n::I18nSettings;

#[derive(Deserialize)]
pub struct Paths {
    pub content_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct Defaults {
    pub author: Option<String>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Option<Defaults>,
    pub i18n: Option<I18nSettings>,
    pub log: Option<Log>,
}

impl Config {
    pub fn default_author(&self) -> &str {
        self.defaults.as_ref()
            .and_then(|d| d.author.as_deref())
            .unwrap_or(DEFAULT_AUTHOR)
    }

    pub fn schema_options(&self) -> SchemaOptions {
        SchemaOptions {
            default_author: self.default_author().to_string(),
        }
    }

    pub fn i18n_settings(&self) -> I18nSettings {
        self.i18n.clone().unwrap_or_default()
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent()
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Could not find the executable directory"))?;
    let relative = path.strip_prefix("${exe_dir}")
        .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    Ok(exe_dir.join(relative))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        content_dir: parse_path(cfg.paths.content_dir)?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use crate::i18n::controller::STORAGE_KEY;

    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = parse_config(r##"
[paths]
content_dir = "src/content/blog"

[defaults]
author = "Someone Else"

[i18n]
storage_key = "lang"

[log]
level = "Debug"
log_to_console = true
location = "/tmp/blog/blog-tool.log"
"##).unwrap();

        assert_eq!(cfg.paths.content_dir, PathBuf::from("src/content/blog"));
        assert_eq!(cfg.default_author(), "Someone Else");
        assert_eq!(cfg.schema_options().default_author, "Someone Else");
        assert_eq!(cfg.i18n_settings().storage_key, "lang");
        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.log_to_console);
    }

    #[test]
    fn test_minimal_config() {
        let cfg = parse_config(r##"
[paths]
content_dir = "blog"
"##).unwrap();

        assert_eq!(cfg.default_author(), "Vinh Nguyen");
        assert_eq!(cfg.i18n_settings().storage_key, STORAGE_KEY);
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_empty_i18n_table() {
        let cfg = parse_config("[paths]\ncontent_dir = \"blog\"\n[i18n]\n").unwrap();
        assert_eq!(cfg.i18n_settings().storage_key, STORAGE_KEY);
    }

    #[test]
    fn test_exe_dir_prefix() {
        let cfg = parse_config("[paths]\ncontent_dir = \"${exe_dir}/blog\"\n").unwrap();
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(cfg.paths.content_dir, exe_dir.join("blog"));
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[paths]\n").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        let err = read_config(Path::new("/does/not/exist/blog.toml")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
