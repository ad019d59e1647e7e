use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::content::content_file::ContentFile;
use crate::content::frontmatter::extract_frontmatter;
use crate::content::schema::{validate, SchemaOptions, SchemaValidationError};
use crate::i18n::Language;

pub mod collection;
pub mod content_file;
pub mod frontmatter;
pub mod schema;

/// Identifier of a content item: its path inside the collection, without extension.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct ContentId(pub String);

impl ContentId {
    /// `root/2024/trip/index.mdx` becomes `2024/trip/index`.
    pub fn from_path(root: &Path, file_path: &Path) -> ContentId {
        let relative = file_path.strip_prefix(root).unwrap_or(file_path);
        let without_ext = relative.with_extension("");
        let parts: Vec<String> = without_ext.components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        ContentId(parts.join("/"))
    }
}

impl Display for ContentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated frontmatter of a blog post. English fields are always present,
/// Vietnamese ones are an optional overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct PostMetadata {
    pub title: String,
    pub description: String,
    pub pub_date: NaiveDate,
    pub author: String,
    pub tags: Vec<String>,
    pub title_vi: Option<String>,
    pub description_vi: Option<String>,
}

impl PostMetadata {
    pub fn is_bilingual(&self) -> bool {
        self.title_vi.is_some() || self.description_vi.is_some()
    }

    pub fn title_for(&self, language: Language) -> &str {
        match (language, &self.title_vi) {
            (Language::Vietnamese, Some(title)) => title,
            _ => &self.title,
        }
    }

    pub fn description_for(&self, language: Language) -> &str {
        match (language, &self.description_vi) {
            (Language::Vietnamese, Some(description)) => description,
            _ => &self.description,
        }
    }
}

pub struct Post {
    pub id: ContentId,
    pub metadata: PostMetadata,
    pub body: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, author={}, tags=[{}]\ntitle={}",
               self.id,
               self.metadata.pub_date,
               self.metadata.author,
               self.metadata.tags.join(", "),
               self.metadata.title,
        )?;
        if let Some(ref title_vi) = self.metadata.title_vi {
            write!(f, "\ntitle_vi={}", title_vi)?;
        }
        Ok(())
    }
}

impl Post {
    pub fn parse(content_file: &ContentFile, options: &SchemaOptions) -> Result<Post, ContentError> {
        let (raw, body) = extract_frontmatter(&content_file.raw_content, &content_file.id)?;
        let metadata = validate(&content_file.id, raw, options)?;

        Ok(Post {
            id: content_file.id.clone(),
            metadata,
            body,
        })
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Error reading content item {id}: {source}")]
    Io {
        id: ContentId,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed frontmatter in content item {id}: {reason}")]
    Frontmatter {
        id: ContentId,
        reason: String,
    },
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
}

impl ContentError {
    pub fn content_id(&self) -> &ContentId {
        match self {
            ContentError::Io { id, .. } => id,
            ContentError::Frontmatter { id, .. } => id,
            ContentError::Schema(e) => &e.content_id,
        }
    }
}
