use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use spdlog::{debug, error, info};
use thiserror::Error;
use walkdir::WalkDir;

use crate::content::content_file::ContentFile;
use crate::content::schema::SchemaOptions;
use crate::content::{ContentError, ContentId, Post};

/// Outcome of loading every content item of a directory.
/// Items that failed are kept apart, never dropped.
pub struct CollectionReport {
    pub root: PathBuf,
    pub posts: Vec<Post>,
    pub failures: Vec<ContentError>,
}

#[derive(Debug, Error)]
#[error("{} content item(s) in {} failed validation:\n{}", .failures.len(), .root.display(), format_failures(.failures))]
pub struct CollectionError {
    pub root: PathBuf,
    pub failures: Vec<ContentError>,
}

fn format_failures(failures: &[ContentError]) -> String {
    failures.iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

impl CollectionReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// A single failing item fails the whole collection.
    pub fn into_result(self) -> Result<Collection, CollectionError> {
        if !self.failures.is_empty() {
            return Err(CollectionError {
                root: self.root,
                failures: self.failures,
            });
        }
        Ok(Collection::new(self.posts))
    }
}

/// Validated posts, newest first.
pub struct Collection {
    posts: Vec<Post>,
}

impl Collection {
    pub fn load(root: &Path, options: &SchemaOptions) -> CollectionReport {
        info!("Loading content collection from {}", root.display());

        let mut posts = vec![];
        let mut failures = vec![];

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let id = ContentId(e.path().unwrap_or(root).display().to_string());
                    error!("Error walking content directory: {}", e);
                    failures.push(ContentError::Io { id, source: e.into() });
                    continue;
                }
            };

            if !entry.file_type().is_file() || ContentFile::guess_type(entry.path()).is_none() {
                continue;
            }

            let id = ContentId::from_path(root, entry.path());
            match Self::load_item(id, entry.path(), options) {
                Ok(post) => {
                    debug!("Loaded {}", post.id);
                    posts.push(post);
                }
                Err(e) => {
                    error!("{}", e);
                    failures.push(e);
                }
            }
        }

        info!("Loaded {} post(s), {} failure(s)", posts.len(), failures.len());

        CollectionReport {
            root: root.to_path_buf(),
            posts,
            failures,
        }
    }

    fn load_item(id: ContentId, path: &Path, options: &SchemaOptions) -> Result<Post, ContentError> {
        let content_file = ContentFile::from_file(id.clone(), path.to_path_buf())
            .map_err(|source| ContentError::Io { id, source })?;
        Post::parse(&content_file, options)
    }

    pub fn new(mut posts: Vec<Post>) -> Collection {
        posts.sort_by(|a, b| {
            b.metadata.pub_date.cmp(&a.metadata.pub_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Collection { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id.0 == id)
    }

    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item=&'a Post> + 'a {
        self.posts.iter().filter(move |post| post.metadata.tags.iter().any(|t| t == tag))
    }

    pub fn tags(&self) -> Vec<&str> {
        let tags: BTreeSet<&str> = self.posts.iter()
            .flat_map(|post| post.metadata.tags.iter().map(|t| t.as_str()))
            .collect();
        tags.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::test_data::{BILINGUAL_POST, ENGLISH_ONLY_POST, MISSING_TITLE_POST};

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_valid_collection() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "hoc-rust.mdx", BILINGUAL_POST);
        write(dir.path(), "2024/notes/index.md", ENGLISH_ONLY_POST);
        write(dir.path(), "2024/notes/cover.png", "not content");

        let report = Collection::load(dir.path(), &SchemaOptions::default());
        assert!(report.is_valid());
        let collection = report.into_result().unwrap();

        assert_eq!(collection.len(), 2);
        let ids: Vec<&str> = collection.posts().iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, ["hoc-rust", "2024/notes/index"]);

        let notes = collection.get("2024/notes/index").unwrap();
        assert_eq!(notes.metadata.author, "Guest Writer");
        assert_eq!(notes.metadata.pub_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        assert_eq!(collection.tags(), ["learning", "rust"]);
        assert_eq!(collection.with_tag("rust").count(), 1);
        assert_eq!(collection.with_tag("draft").count(), 0);
    }

    #[test]
    fn test_invalid_item_fails_collection() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "hoc-rust.mdx", BILINGUAL_POST);
        write(dir.path(), "broken.md", MISSING_TITLE_POST);
        write(dir.path(), "bad-yaml.md", "---\ntitle: [unclosed\n---\nBody\n");

        let report = Collection::load(dir.path(), &SchemaOptions::default());
        assert!(!report.is_valid());
        assert_eq!(report.posts.len(), 1);
        assert_eq!(report.failures.len(), 2);

        let failed: Vec<&str> = report.failures.iter().map(|e| e.content_id().0.as_str()).collect();
        assert_eq!(failed, ["bad-yaml", "broken"]);
        let ContentError::Schema(ref e) = report.failures[1] else {
            panic!("Expected a schema validation error");
        };
        assert_eq!(e.field(), "title");

        let err = match report.into_result() {
            Ok(_) => panic!("Collection with invalid items must fail"),
            Err(err) => err,
        };
        let message = err.to_string();
        assert!(message.starts_with("2 content item(s)"));
        assert!(message.contains("broken: title: required field is missing"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let report = Collection::load(&dir.path().join("nope"), &SchemaOptions::default());
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], ContentError::Io { .. }));
    }

    #[test]
    fn test_sort_newest_first() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.md", "---\ntitle: A\ndescription: a\npubDate: 2023-01-01\ntags: []\n---\n");
        write(dir.path(), "b.md", "---\ntitle: B\ndescription: b\npubDate: 2024-01-01\ntags: []\n---\n");
        write(dir.path(), "c.md", "---\ntitle: C\ndescription: c\npubDate: 2023-01-01\ntags: []\n---\n");

        let collection = Collection::load(dir.path(), &SchemaOptions::default()).into_result().unwrap();
        let ids: Vec<&str> = collection.posts().iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
