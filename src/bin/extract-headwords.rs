use clap::Parser;
use std::io;
use std::process;

use lemma_wordlist::build_headword_list;
use lemma_wordlist::shared::init_logging;

/// Extract the headwords (base forms) of a lemma file into a sorted list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lemma file with headwords and indented inflection lines (may be .gz)
    #[arg(default_value = "/tmp/2+2+3lem.txt")]
    input: String,

    /// Where to write the sorted headwords
    #[arg(default_value = "public/words/base_words.txt")]
    output: String,

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

    log::info!("reading headwords from {}", args.input);
    if let Err(e) = build_headword_list(&args.input, &args.output, &mut io::stdout().lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
