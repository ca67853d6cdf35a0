use itertools::Itertools;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, WordlistError};
use crate::inflection::filter_regular_inflections;
use crate::lemma::{headwords, LemmaParser};
use crate::shared::{read_text, write_lines};

/// Counts from one wordlist build
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub parsed: usize,
    pub kept: usize,
    pub removed: usize,
}

impl Summary {
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_lines(path, [json])
    }
}

/// Parse `input`, drop regular inflections and write the survivors to
/// `output`, sorted, one per line. Progress goes to `report`.
pub fn build_wordlist<W: Write>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    report: &mut W,
) -> Result<Summary> {
    let (input, output) = (input.as_ref(), output.as_ref());
    log::info!("reading lemmas from {}", input.display());

    let all_words = LemmaParser::new().parse_file(input)?;
    progress(report, format_args!("Total words parsed: {}", all_words.len()))?;

    let valid_words = filter_regular_inflections(&all_words);
    progress(
        report,
        format_args!("After filtering regular inflections: {}", valid_words.len()),
    )?;

    write_lines(output, valid_words.iter().sorted())?;
    progress(report, format_args!("Saved to {}", output.display()))?;

    Ok(Summary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        parsed: all_words.len(),
        kept: valid_words.len(),
        removed: all_words.len() - valid_words.len(),
    })
}

/// Write the unique headwords of `input` to `output`, sorted. Returns how many
/// were written.
pub fn build_headword_list<W: Write>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    report: &mut W,
) -> Result<usize> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let words = headwords(&read_text(input)?);
    write_lines(output, &words)?;
    progress(
        report,
        format_args!("Extracted {} headwords to {}", words.len(), output.display()),
    )?;
    Ok(words.len())
}

fn progress<W: Write>(report: &mut W, line: std::fmt::Arguments) -> Result<()> {
    writeln!(report, "{}", line).map_err(|e| WordlistError::write("<report>", e))
}
