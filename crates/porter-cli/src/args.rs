//! Command-line argument parsing.

use std::path::PathBuf;

use porter_core::InputPolicy;

/// How each stemmed word is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The stem alone.
    #[default]
    Stem,
    /// `word<TAB>stem`.
    Pairs,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub policy: Option<InputPolicy>,
    pub format: OutputFormat,
    /// Input files; stdin when empty.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Stem(Options),
    Help,
}

pub const USAGE: &str = "\
porter: Porter stemmer for English words

Usage: porter [options] [file...]

Reads whitespace-separated words from the files (or stdin) and prints one
stem per line.

Options:
  --config <path>   JSON stemmer config
  --policy <name>   Input policy: verbatim, fold or strict
  --pairs           Print word<TAB>stem
  --json            Print one JSON object per word
  help, -h, --help  Show this help message";

/// Parse arguments (without the program name).
pub fn parse<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(Command::Help),
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--policy" => {
                let name = args.next().ok_or("--policy needs a name")?;
                let policy = name.parse::<InputPolicy>().map_err(|e| format!("{}", e))?;
                options.policy = Some(policy);
            }
            "--pairs" => options.format = OutputFormat::Pairs,
            "--json" => options.format = OutputFormat::Json,
            "-" => options.files.push(PathBuf::from("-")),
            flag if flag.starts_with('-') => {
                return Err(format!("Unknown option: {}", flag));
            }
            file => options.files.push(PathBuf::from(file)),
        }
    }

    Ok(Command::Stem(options))
}
