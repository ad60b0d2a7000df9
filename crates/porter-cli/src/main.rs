//! porter — stem words read from files or stdin, one stem per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use porter_core::{StemmerConfig, INPUT_POLICY_ENV};
use porter_stem::PorterStemmer;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod args;

use args::{Command, Options, OutputFormat};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only stems.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let options = match args::parse(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", args::USAGE);
            return Ok(());
        }
        Ok(Command::Stem(options)) => options,
        Err(e) => {
            eprintln!("{}. Use 'porter help' for usage.", e);
            std::process::exit(1);
        }
    };

    let config = resolve_config(&options, std::env::var(INPUT_POLICY_ENV).ok().as_deref())?;
    info!("Input policy: {}", config.input_policy);
    let stemmer = PorterStemmer::with_config(config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if options.files.is_empty() {
        stem_reader(&stemmer, io::stdin().lock(), options.format, &mut out)
            .context("Failed to stem stdin")?;
    } else {
        for path in &options.files {
            if path == Path::new("-") {
                stem_reader(&stemmer, io::stdin().lock(), options.format, &mut out)
                    .context("Failed to stem stdin")?;
                continue;
            }
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let count = stem_reader(&stemmer, BufReader::new(file), options.format, &mut out)
                .with_context(|| format!("Failed to stem {}", path.display()))?;
            debug!("Stemmed {} words from {}", count, path.display());
        }
    }

    out.flush()?;
    Ok(())
}

/// Config file (if given), then the environment override, then `--policy`.
fn resolve_config(options: &Options, env_policy: Option<&str>) -> anyhow::Result<StemmerConfig> {
    let mut config = match &options.config {
        Some(path) => {
            if !path.exists() {
                warn!("Config file {} not found, using defaults", path.display());
            }
            StemmerConfig::load_file(path)
        }
        None => StemmerConfig::default(),
    };
    config
        .apply_policy_override(env_policy)
        .with_context(|| format!("Invalid {}", INPUT_POLICY_ENV))?;
    if let Some(policy) = options.policy {
        config.input_policy = policy;
    }
    Ok(config)
}

/// Stem every whitespace-separated word of `reader`. Returns the word count.
fn stem_reader<R: BufRead, W: Write>(
    stemmer: &PorterStemmer,
    reader: R,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            match format {
                OutputFormat::Stem => writeln!(out, "{}", stemmer.try_stem(word)?)?,
                OutputFormat::Pairs => writeln!(out, "{}\t{}", word, stemmer.try_stem(word)?)?,
                OutputFormat::Json => {
                    let split = stemmer.try_split(word)?;
                    writeln!(out, "{}", serde_json::to_string(&split)?)?;
                }
            }
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, format: OutputFormat) -> String {
        let mut out = Vec::new();
        stem_reader(&PorterStemmer::new(), input.as_bytes(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_one_word_per_line_and_tokenized() {
        assert_eq!(run("caresses\nponies\n", OutputFormat::Stem), "caress\nponi\n");
        assert_eq!(run("cats  meetings\n\n  feed", OutputFormat::Stem), "cat\nmeet\nfeed\n");
    }

    #[test]
    fn test_pairs() {
        assert_eq!(run("Mating", OutputFormat::Pairs), "Mating\tmate\n");
    }

    #[test]
    fn test_json_lines() {
        let out = run("cats", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["stem"], "cat");
        assert_eq!(value["suffix"], "s");
    }

    #[test]
    fn test_policy_flag_wins() {
        let options = Options {
            policy: Some(porter_core::InputPolicy::Strict),
            ..Options::default()
        };
        let config = resolve_config(&options, Some("verbatim")).unwrap();
        assert_eq!(config.input_policy, porter_core::InputPolicy::Strict);
    }

    #[test]
    fn test_env_policy_applies_without_flag() {
        let config = resolve_config(&Options::default(), Some("strict")).unwrap();
        assert_eq!(config.input_policy, porter_core::InputPolicy::Strict);

        let config = resolve_config(&Options::default(), None).unwrap();
        assert_eq!(config.input_policy, porter_core::InputPolicy::Fold);
    }

    #[test]
    fn test_bad_env_policy_is_an_error() {
        assert!(resolve_config(&Options::default(), Some("shouting")).is_err());
    }
}
