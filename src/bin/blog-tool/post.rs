use std::fmt::Write;
use std::fs::{create_dir, File};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};

use bilingual_blog::config::Config;
use bilingual_blog::content::schema::DEFAULT_AUTHOR;
use bilingual_blog::text_utils::slug_from_title;

use crate::{PostArgs, PostOutput};

fn get_author(args: &PostArgs, config: Option<&Config>) -> String {
    if let Some(ref name) = args.name {
        return name.clone();
    }

    match config {
        Some(config) => config.default_author().to_string(),
        None => DEFAULT_AUTHOR.to_string(),
    }
}

/// YAML accepts JSON strings, which saves escaping titles by hand.
fn quoted(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

struct NewPost<'a> {
    title: &'a str,
    title_vi: Option<&'a str>,
    author: &'a str,
    date: NaiveDate,
    tags: &'a [String],
}

fn render_frontmatter(post: &NewPost) -> String {
    let mut buf = String::new();
    let tags: Vec<String> = post.tags.iter().map(|t| quoted(t)).collect();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "title: {}", quoted(post.title));
    let _ = writeln!(&mut buf, "description: \"Replace with description\"");
    let _ = writeln!(&mut buf, "pubDate: {}", post.date.format("%Y-%m-%d"));
    let _ = writeln!(&mut buf, "author: {}", quoted(post.author));
    let _ = writeln!(&mut buf, "tags: [{}]", tags.join(", "));
    if let Some(title_vi) = post.title_vi {
        let _ = writeln!(&mut buf, "titleVi: {}", quoted(title_vi));
        let _ = writeln!(&mut buf, "descriptionVi: \"Thay bằng mô tả\"");
    }
    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf);
    buf
}

fn render_body(bilingual: bool) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "<div data-lang=\"en\">");
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "</div>");

    if bilingual {
        let _ = writeln!(&mut buf);
        let _ = writeln!(&mut buf, "<div data-lang=\"vi\">");
        let _ = writeln!(&mut buf);
        let _ = writeln!(&mut buf, "Đây là nội dung mẫu");
        let _ = writeln!(&mut buf, "Hãy xoá và thay bằng nội dung của bạn");
        let _ = writeln!(&mut buf);
        let _ = writeln!(&mut buf, "</div>");
    }

    buf
}

fn write_post(path: &PathBuf, content: &str) -> Result<()> {
    use std::io::Write;
    let mut file = File::create(path).with_context(|| format!("Error creating {}", path.display()))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn post_cmd(args: PostArgs, config: Option<&Config>) -> Result<()> {
    let author = get_author(&args, config);
    let date = Utc::now().date_naive();

    if !matches!(args.output, PostOutput::Stdout) && args.title.is_none() {
        return Err(anyhow!("For file and dir outputs, title is required"));
    }

    let title = args.title.as_deref().unwrap_or("Replace with title");
    let new_post = NewPost {
        title,
        title_vi: args.title_vi.as_deref(),
        author: &author,
        date,
        tags: &args.tags,
    };
    let content = render_frontmatter(&new_post) + &render_body(new_post.title_vi.is_some());

    match args.output {
        PostOutput::Stdout => {
            print!("{}", content);
        }
        PostOutput::File => {
            let file_name = PathBuf::from(format!("{}.mdx", slug_from_title(title, &date)));
            println!("Creating file {}", file_name.display());
            write_post(&file_name, &content)?;
        }
        PostOutput::Dir => {
            let dir_name = PathBuf::from(slug_from_title(title, &date));
            let full_path = dir_name.join("index.mdx");
            println!("Creating dir post {}", full_path.display());
            create_dir(&dir_name).with_context(|| format!("Error creating directory {}", dir_name.display()))?;
            write_post(&full_path, &content)?;
        }
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_data::NEW_POST;

    use super::*;

    #[test]
    fn test_happy_case() {
        let tags = vec!["rust".to_string(), "notes".to_string()];
        let new_post = NewPost {
            title: "This is a title",
            title_vi: Some("Đây là tiêu đề"),
            author: "Vinh Nguyen",
            date: NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
            tags: &tags,
        };
        let content = render_frontmatter(&new_post) + &render_body(true);
        assert_eq!(content, NEW_POST);
    }

    #[test]
    fn test_english_only_scaffold() {
        let new_post = NewPost {
            title: "Title: with a colon",
            title_vi: None,
            author: "Vinh Nguyen",
            date: NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
            tags: &[],
        };
        let content = render_frontmatter(&new_post) + &render_body(false);
        assert!(content.contains("title: \"Title: with a colon\"\n"));
        assert!(content.contains("tags: []\n"));
        assert!(!content.contains("titleVi"));
        assert!(!content.contains("data-lang=\"vi\""));
    }

    #[test]
    fn test_author() {
        let args = PostArgs {
            name: Some("Guest".to_string()),
            title: None,
            title_vi: None,
            tags: vec![],
            output: PostOutput::Stdout,
        };
        assert_eq!(get_author(&args, None), "Guest");

        let args = PostArgs { name: None, ..args };
        assert_eq!(get_author(&args, None), "Vinh Nguyen");
    }
}
