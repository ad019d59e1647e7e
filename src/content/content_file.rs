use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::content::ContentId;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ContentFormat {
    Markdown,
    Mdx,
}

pub struct ContentFile {
    pub id: ContentId,
    pub file_path: PathBuf,
    pub format: ContentFormat,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(id: ContentId, file_path: PathBuf) -> io::Result<ContentFile> {
        let format = match Self::guess_type(&file_path) {
            None => return Err(io::Error::new(ErrorKind::Unsupported, format!("Could not guess the type of the file {}", file_path.display()))),
            Some(format) => format,
        };

        let raw_content = fs::read_to_string(&file_path)?;

        Ok(ContentFile {
            id,
            file_path,
            format,
            raw_content,
        })
    }

    pub fn guess_type(file_name: &Path) -> Option<ContentFormat> {
        match file_name.extension().and_then(|ext| ext.to_str()) {
            Some("md") => Some(ContentFormat::Markdown),
            Some("mdx") => Some(ContentFormat::Mdx),
            _ => None,
        }
    }
}
