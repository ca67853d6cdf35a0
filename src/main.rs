use std::io;
use std::process;

use clap::Parser;

use lemma_wordlist::shared::init_logging;
use lemma_wordlist::{build_wordlist, Result};

/// Build a word game wordlist from a lemma file, keeping irregular forms and
/// dropping regular inflections (plurals, past tenses, comparatives, ...)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lemma file with headwords and indented inflection lines (may be .gz)
    #[arg(short, long, default_value = "/tmp/2+2+3lem.txt")]
    input: String,

    /// Where to write the sorted wordlist
    #[arg(short, long, default_value = "public/words/valid_words.txt")]
    output: String,

    /// Also write a JSON summary of the counts to this file
    #[arg(long)]
    stats: Option<String>,

    /// More logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let summary = build_wordlist(&args.input, &args.output, &mut io::stdout().lock())?;
    log::info!("removed {} regular inflections", summary.removed);
    if let Some(stats) = &args.stats {
        summary.write_json(stats)?;
        log::info!("wrote statistics to {}", stats);
    }
    Ok(())
}
