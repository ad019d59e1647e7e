use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::content::frontmatter::RawFrontMatter;
use crate::content::{ContentId, PostMetadata};
use crate::text_utils::parse_publication_date;

pub const DEFAULT_AUTHOR: &str = "Vinh Nguyen";

#[derive(Debug, Clone)]
pub struct SchemaOptions {
    pub default_author: String,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        SchemaOptions {
            default_author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    Missing,
    Empty,
    WrongType { expected: &'static str },
    InvalidDate(String),
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing => write!(f, "required field is missing"),
            Problem::Empty => write!(f, "must not be empty"),
            Problem::WrongType { expected } => write!(f, "expected {}", expected),
            Problem::InvalidDate(reason) => write!(f, "{}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub problem: Problem,
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// A content item whose frontmatter does not match the post schema.
/// Always carries at least one issue.
#[derive(Debug, Clone, Error)]
#[error("Invalid frontmatter in content item {content_id}: {}", format_issues(.issues))]
pub struct SchemaValidationError {
    pub content_id: ContentId,
    pub issues: Vec<FieldIssue>,
}

impl SchemaValidationError {
    /// First offending field, in declaration order.
    pub fn field(&self) -> &'static str {
        self.issues.first().map(|issue| issue.field).unwrap_or_default()
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues.iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// `null` counts as absent.
fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !v.is_null())
}

/// Collects the issues of every field so one run reports all of them.
struct Checker {
    issues: Vec<FieldIssue>,
}

impl Checker {
    fn fail<T>(&mut self, field: &'static str, problem: Problem) -> Option<T> {
        self.issues.push(FieldIssue { field, problem });
        None
    }

    fn string(&mut self, field: &'static str, value: Option<Value>) -> Option<String> {
        match value {
            None => self.fail(field, Problem::Missing),
            Some(Value::String(s)) if s.trim().is_empty() => self.fail(field, Problem::Empty),
            Some(Value::String(s)) => Some(s),
            Some(_) => self.fail(field, Problem::WrongType { expected: "a string" }),
        }
    }

    fn optional_string(&mut self, field: &'static str, value: Option<Value>) -> Option<Option<String>> {
        match value {
            None => Some(None),
            Some(Value::String(s)) => Some(Some(s)),
            Some(_) => self.fail(field, Problem::WrongType { expected: "a string" }),
        }
    }

    fn date(&mut self, field: &'static str, value: Option<Value>) -> Option<NaiveDate> {
        match value {
            None => self.fail(field, Problem::Missing),
            Some(Value::String(s)) => match parse_publication_date(&s) {
                Ok(date) => Some(date),
                Err(reason) => self.fail(field, Problem::InvalidDate(reason)),
            },
            Some(_) => self.fail(field, Problem::WrongType { expected: "a date" }),
        }
    }

    fn string_list(&mut self, field: &'static str, value: Option<Value>) -> Option<Vec<String>> {
        let items = match value {
            None => return self.fail(field, Problem::Missing),
            Some(Value::Array(items)) => items,
            Some(_) => return self.fail(field, Problem::WrongType { expected: "a list of strings" }),
        };

        let mut tags = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(s) => tags.push(s),
                _ => return self.fail(field, Problem::WrongType { expected: "a list of strings" }),
            }
        }
        Some(tags)
    }
}

/// Checks the raw frontmatter of a content item and returns the normalized metadata.
pub fn validate(id: &ContentId, raw: RawFrontMatter, options: &SchemaOptions) -> Result<PostMetadata, SchemaValidationError> {
    let mut checker = Checker { issues: vec![] };

    let title = checker.string("title", present(raw.title));
    let description = checker.string("description", present(raw.description));
    let pub_date = checker.date("pubDate", present(raw.pub_date));
    let author = checker.optional_string("author", present(raw.author));
    let tags = checker.string_list("tags", present(raw.tags));
    let title_vi = checker.optional_string("titleVi", present(raw.title_vi));
    let description_vi = checker.optional_string("descriptionVi", present(raw.description_vi));

    match (title, description, pub_date, author, tags, title_vi, description_vi) {
        (Some(title), Some(description), Some(pub_date), Some(author), Some(tags), Some(title_vi), Some(description_vi)) => {
            Ok(PostMetadata {
                title,
                description,
                pub_date,
                author: author.unwrap_or_else(|| options.default_author.clone()),
                tags,
                title_vi,
                description_vi,
            })
        }
        _ => Err(SchemaValidationError {
            content_id: id.clone(),
            issues: checker.issues,
        }),
    }
}
