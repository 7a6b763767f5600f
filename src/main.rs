use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jobphrase::{
    config::{Config, OutputFormat},
    logging, pipeline, report,
};

#[derive(Parser)]
#[command(
    name = "jobphrase",
    version,
    about = "Report the most frequent noun phrases across scraped job summaries"
)]
struct Cli {
    /// Results file to analyse [env: JOBPHRASE_INPUT] [default: ./results.json]
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of phrases to report [env: JOBPHRASE_TOP] [default: 50]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    top: Option<u64>,
    /// Report format [env: JOBPHRASE_FORMAT] [default: repr]
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Keep phrase casing instead of lower-casing [env: JOBPHRASE_PRESERVE_CASE]
    #[arg(long, overrides_with = "no_preserve_case")]
    preserve_case: bool,
    /// Lower-case phrases even when JOBPHRASE_PRESERVE_CASE is set
    #[arg(long, overrides_with = "preserve_case")]
    no_preserve_case: bool,
    /// Log more detail to stderr (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        }
    }

    fn apply(self, mut config: Config) -> Result<Config> {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(top) = self.top {
            config.top = usize::try_from(top).context("--top does not fit in usize")?;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.preserve_case {
            config.preserve_case = true;
        } else if self.no_preserve_case {
            config.preserve_case = false;
        }
        Ok(config)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level());
    let config = Config::from_env().context("failed to load configuration from environment")?;
    let config = cli.apply(config)?;
    tracing::debug!(?config, "Resolved configuration");

    let outcome = pipeline::run(&config)
        .with_context(|| format!("failed to analyse {}", config.input.display()))?;
    let rendered = report::render(&outcome.ranked, &outcome.stats, config.format)
        .context("failed to render report")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write report to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str], env: Config) -> Config {
        let cli = Cli::try_parse_from(std::iter::once("jobphrase").chain(args.iter().copied()))
            .unwrap();
        cli.apply(env).unwrap()
    }

    #[test]
    fn flags_override_environment() {
        let env = Config {
            top: 10,
            preserve_case: true,
            ..Config::default()
        };
        let config = resolve(&["--top", "3", "--no-preserve-case"], env.clone());
        assert_eq!(config.top, 3);
        assert!(!config.preserve_case);

        assert_eq!(resolve(&[], env.clone()), env);
        assert!(resolve(&["--preserve-case"], Config::default()).preserve_case);
    }

    #[test]
    fn last_case_flag_wins() {
        let config = resolve(&["--no-preserve-case", "--preserve-case"], Config::default());
        assert!(config.preserve_case);
        let config = resolve(&["--preserve-case", "--no-preserve-case"], Config::default());
        assert!(!config.preserve_case);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let level = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("jobphrase").chain(args.iter().copied()))
                .unwrap()
                .log_level()
        };
        assert_eq!(level(&[]), "warn");
        assert_eq!(level(&["-vv"]), "debug");
        assert_eq!(level(&["-q"]), "error");
    }
}
