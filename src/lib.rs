//! Build a word game wordlist from a lemma file, keeping irregular forms and
//! dropping regular inflections of words already in the list.

pub mod error;
pub mod inflection;
pub mod lemma;
pub mod shared;
pub mod wordlist;

pub use error::{Result, WordlistError};
pub use inflection::{filter_regular_inflections, is_regular_inflection, SuffixRule, RULES};
pub use lemma::LemmaParser;
pub use wordlist::{build_headword_list, build_wordlist, Summary};
