use gray_matter::engine::YAML;
use gray_matter::Matter;
use serde::Deserialize;
use serde_json::Value;

use crate::content::{ContentError, ContentId};

/// Frontmatter fields as written by the author, before any type check.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct RawFrontMatter {
    pub title: Option<Value>,
    pub description: Option<Value>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<Value>,
    pub author: Option<Value>,
    pub tags: Option<Value>,
    #[serde(rename = "titleVi")]
    pub title_vi: Option<Value>,
    #[serde(rename = "descriptionVi")]
    pub description_vi: Option<Value>,
}

/// Splits the leading `---` YAML block from the body of a post.
/// A file without frontmatter gives an empty record and the whole file as body.
pub fn extract_frontmatter(raw_content: &str, id: &ContentId) -> Result<(RawFrontMatter, String), ContentError> {
    let matter = Matter::<YAML>::new();

    let parsed = matter
        .parse::<RawFrontMatter>(raw_content)
        .map_err(|e| ContentError::Frontmatter {
            id: id.clone(),
            reason: e.to_string(),
        })?;

    Ok((parsed.data.unwrap_or_default(), parsed.content))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::test_data::BILINGUAL_POST;

    use super::*;

    fn id() -> ContentId {
        ContentId("post".to_string())
    }

    #[test]
    fn test_extract_fields() {
        let (raw, body) = extract_frontmatter(BILINGUAL_POST, &id()).unwrap();
        assert_eq!(raw.title, Some(json!("Learning Rust")));
        assert_eq!(raw.pub_date, Some(json!("2024-03-15")));
        assert_eq!(raw.tags, Some(json!(["rust", "learning", "rust"])));
        assert_eq!(raw.title_vi, Some(json!("Học Rust")));
        assert_eq!(raw.author, None);
        assert!(body.trim_start().starts_with(r#"<div data-lang="en">"#));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = "---\ntitle: Hello\ndraft: true\nheroImage: /cover.png\n---\nBody\n";
        let (raw, _body) = extract_frontmatter(content, &id()).unwrap();
        assert_eq!(raw.title, Some(json!("Hello")));
        assert_eq!(raw.description, None);
    }

    #[test]
    fn test_null_value() {
        let content = "---\ntitle: Hello\ntitleVi: ~\n---\nBody\n";
        let (raw, _body) = extract_frontmatter(content, &id()).unwrap();
        assert!(raw.title_vi.map_or(true, |v| v.is_null()));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just a heading\n\nAnd some text.\n";
        let (raw, body) = extract_frontmatter(content, &id()).unwrap();
        assert_eq!(raw, RawFrontMatter::default());
        assert!(body.contains("Just a heading"));
    }
}
