//! Wordle Sieve - CLI
//!
//! Filters a dictionary by excluded letters, included letters and known
//! positions, then prints (and optionally saves) the remaining candidates.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use wordle_sieve::{
    commands::{SearchConfig, SearchPlan},
    output::{RESULTS_FILE, print_diagnostics, save_results, write_solutions},
    wordlists::DEFAULT_DICTIONARY,
};

/// Long flags that may also be written with a single dash, e.g. `-length 6`
const SINGLE_DASH_FLAGS: &[&str] = &[
    "verbose", "dict", "length", "exclude", "include", "known", "save", "help", "version",
];

#[derive(Parser, Debug)]
#[command(
    name = "wordle_sieve",
    about = "Find Wordle candidates from known, included and excluded letters",
    version,
    author
)]
struct Cli {
    /// Show how the letter arguments were interpreted
    #[arg(long)]
    verbose: bool,

    /// Path to text file containing a list of words
    #[arg(long, default_value = DEFAULT_DICTIONARY)]
    dict: PathBuf,

    /// The length of the word to be found
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    length: i64,

    /// Letters known to not be in the word: -exclude m,s,e
    #[arg(long, default_value = "")]
    exclude: String,

    /// Letters in the word whose positions are unknown: -include m,s,e
    #[arg(long, default_value = "")]
    include: String,

    /// Known positions and letters, 1-based: -known 1m,2o,3u
    #[arg(long, default_value = "")]
    known: String,

    /// Save the potential solutions in results.txt
    #[arg(long)]
    save: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            dictionary: self.dict.clone(),
            word_length: self.length,
            exclude: self.exclude.clone(),
            include: self.include.clone(),
            known: self.known.clone(),
        }
    }
}

/// Rewrite `-flag` and `-flag=value` as `--flag` forms clap understands
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }

            let name = rest.split('=').next().unwrap_or(rest);
            if SINGLE_DASH_FLAGS.iter().any(|flag| *flag == name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(&cli, &mut out);
    let code = exit_code(result, &mut out);
    let _ = out.flush();
    code
}

/// Report a failed run on `out` and map it to the process exit code
fn exit_code<W: Write>(result: Result<()>, out: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(out, "{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = cli.search_config();
    let plan = SearchPlan::new(&config)?;

    if cli.verbose {
        print_diagnostics(plan.constraints(), plan.pattern());
    }

    let words = plan.execute(&config.dictionary)?;
    write_solutions(out, &words)?;

    if cli.save {
        save_results(RESULTS_FILE, &words)?;
    }

    Ok(())
}
