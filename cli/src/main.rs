//! Command-line interface for the slidec compiler.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::debug;

use slidec::{JsonFormat, Slidec};

#[derive(Parser)]
#[command(name = "slidec", version, about = "Compile styled HTML into slide decks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the logical slides as JSON, before pagination
    Slides(CompileArgs),
    /// Print the fully paginated deck as JSON
    Deck(CompileArgs),
    /// Print a summary of the compiled document
    Info(CompileArgs),
}

#[derive(Args)]
struct CompileArgs {
    /// Input HTML file
    input: PathBuf,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact single-line JSON
    #[arg(long)]
    compact: bool,

    /// Theme color for title, section, and end page backgrounds
    #[arg(long, env = "SLIDEC_THEME", default_value = "#1f4e79")]
    theme: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Slides(args) => run(args, Output::Slides),
        Command::Deck(args) => run(args, Output::Deck),
        Command::Info(args) => run(args, Output::Info),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

enum Output {
    Slides,
    Deck,
    Info,
}

fn run(args: &CompileArgs, output: Output) -> slidec::Result<()> {
    debug!("reading {}", args.input.display());
    let html = fs::read_to_string(&args.input)?;

    let result = Slidec::new().theme_color(&args.theme).compile(&html)?;

    let format = if args.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let text = match output {
        Output::Slides => slidec::to_json(&result.slides().to_vec(), format)?,
        Output::Deck => result.to_json(format)?,
        Output::Info => summarize(&result),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &text)?;
            eprintln!("{} {}", "wrote".green(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn summarize(result: &slidec::SlidecResult) -> String {
    let blocks: usize = result.slides().iter().map(|s| s.block_count()).sum();
    let mut out = String::new();
    out.push_str(&format!("logical slides: {}\n", result.slides().len()));
    out.push_str(&format!("content blocks: {}\n", blocks));
    out.push_str(&format!("deck pages:     {}", result.deck().slide_count()));
    out
}
