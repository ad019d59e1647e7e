pub mod config;
pub mod content;
pub mod i18n;
pub mod logger;
pub mod text_utils;
mod test_data;
