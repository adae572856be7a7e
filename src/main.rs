//! CLI entry point for matwiz

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use matwiz::{
    ConsolePrompt, LogPresenter, MAX_BLOCKS, MatrixTree, OutputConfig, ScriptedAnswers,
    TreeFormatter, Wizard, WizardConfig, print_json, run, run_with,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "matwiz")]
#[command(about = "Describe a block-structured matrix hierarchy one matrix at a time")]
#[command(version)]
struct Args {
    /// Read answers from a JSON array instead of prompting
    #[arg(long = "answers", value_name = "FILE")]
    answers: Option<PathBuf>,

    /// Output the finished hierarchy as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Most field-split blocks per matrix
    #[arg(long = "max-blocks", value_name = "N", default_value_t = MAX_BLOCKS, value_parser = parse_max_blocks)]
    max_blocks: usize,

    /// Split matrices only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Log every walker step to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parse a block limit between 1 and `MAX_BLOCKS`.
fn parse_max_blocks(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if (1..=MAX_BLOCKS).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {}", MAX_BLOCKS))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "matwiz=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = WizardConfig {
        max_blocks: args.max_blocks,
        max_depth: args.level,
    };
    let mut wizard = Wizard::new(config);

    let session = match &args.answers {
        Some(path) => match ScriptedAnswers::from_path(path) {
            Ok(mut script) => {
                let result = run(&mut wizard, &mut LogPresenter, &mut script);
                if result.is_ok() && script.remaining() > 0 {
                    tracing::warn!(unused = script.remaining(), "answers left over");
                }
                result
            }
            Err(e) => {
                eprintln!("matwiz: cannot read answers '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            // Prompts go to stderr so stdout carries only the finished tree
            let mut prompt = ConsolePrompt::new(stdin.lock(), io::stderr(), args.max_blocks);
            run_with(&mut wizard, &mut prompt)
        }
    };

    if let Err(e) = session {
        eprintln!("matwiz: {}", e);
        process::exit(1);
    }

    let tree = MatrixTree::from_store(wizard.store());
    let result = if args.json {
        print_json(&tree)
    } else {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
        });
        formatter.print(&tree)
    };

    if let Err(e) = result {
        eprintln!("matwiz: error writing output: {}", e);
        process::exit(1);
    }
}
