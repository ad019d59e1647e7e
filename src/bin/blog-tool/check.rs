use anyhow::{anyhow, Result};

use bilingual_blog::config::Config;
use bilingual_blog::content::collection::Collection;
use bilingual_blog::content::schema::SchemaOptions;
use bilingual_blog::content::Post;
use bilingual_blog::i18n::Language;

use crate::CheckArgs;

fn languages_of(post: &Post) -> Vec<Language> {
    if post.metadata.is_bilingual() {
        vec![Language::English, Language::Vietnamese]
    } else {
        vec![Language::English]
    }
}

fn format_post_line(post: &Post) -> String {
    let languages: Vec<&str> = languages_of(post).iter().map(|l| l.native_name()).collect();
    format!("{}  {:<40}  [{}]  {}",
            post.metadata.pub_date.format("%Y-%m-%d"),
            post.id.0,
            languages.join(", "),
            post.metadata.title,
    )
}

pub fn check_cmd(args: CheckArgs, config: Option<&Config>) -> Result<()> {
    let content_dir = match (args.content_dir, config) {
        (Some(dir), _) => dir,
        (None, Some(config)) => config.paths.content_dir.clone(),
        (None, None) => return Err(anyhow!("No content directory given")),
    };
    let options = config.map(|c| c.schema_options()).unwrap_or_else(SchemaOptions::default);

    let report = Collection::load(&content_dir, &options);
    for post in report.posts.iter() {
        println!("{}", format_post_line(post));
    }

    let collection = report.into_result()?;
    println!("{} post(s) OK", collection.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bilingual_blog::content::content_file::{ContentFile, ContentFormat};
    use bilingual_blog::content::ContentId;

    use crate::test_data::NEW_POST;

    use super::*;

    #[test]
    fn test_format_post_line() {
        let content_file = ContentFile {
            id: ContentId("20240227_this_is_a_title".to_string()),
            file_path: PathBuf::from("20240227_this_is_a_title.mdx"),
            format: ContentFormat::Mdx,
            raw_content: NEW_POST.to_string(),
        };
        let post = Post::parse(&content_file, &SchemaOptions::default()).unwrap();
        let line = format_post_line(&post);
        assert!(line.starts_with("2024-02-27  20240227_this_is_a_title"));
        assert!(line.ends_with("[English, Tiếng Việt]  This is a title"));
    }
}
