use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use spdlog::warn;

use bilingual_blog::logger::configure_logger;

use crate::check::check_cmd;
use crate::config::open_config;
use crate::post::post_cmd;

mod check;
mod config;
mod post;
mod test_data;

const CFG_FILE_NAME: &str = "blog.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the frontmatter of every post in the content collection
    Check(CheckArgs),
    /// Create a new bilingual post
    Post(PostArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Content directory. Overrides the one in the configuration
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PostArgs {
    /// Name of the author. If empty, the configured default author is used
    #[arg(short, long)]
    name: Option<String>,

    /// English title of the post
    #[arg(short, long)]
    title: Option<String>,

    /// Vietnamese title of the post
    #[arg(long)]
    title_vi: Option<String>,

    /// Comma separated tags
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,
}

#[derive(Clone, Debug, ValueEnum)]
enum PostOutput {
    /// Writes the new post content to the stdout
    Stdout,
    /// Writes the new post content to a file (posts without images)
    File,
    /// Writes the new post content to a directory (posts with images)
    Dir,
}

impl Display for PostOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PostOutput::Stdout => "stdout",
            PostOutput::File => "file",
            PostOutput::Dir => "dir",
        };
        write!(f, "{}", name)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => Some(config),
        Err(err) => match &args.command {
            Command::Check(CheckArgs { content_dir: None }) => {
                bail!("{}. Please run blog-tool --help", err)
            }
            // Without configuration, built-in defaults are used
            _ => None,
        },
    };

    if let Some(log) = config.as_ref().and_then(|c| c.log.as_ref()) {
        if let Err(err) = configure_logger(log) {
            warn!("Error creating logger sinks. Using console instead. Desc={}", err);
        }
    }

    match args.command {
        Command::Check(args) => check_cmd(args, config.as_ref()),
        Command::Post(args) => post_cmd(args, config.as_ref()),
    }
}
