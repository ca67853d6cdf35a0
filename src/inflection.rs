use std::hash::BuildHasher;

use crate::shared::{new_hash_set, HashSet};

/// A regular inflection pattern: a word ending in `ending` is derived from the
/// base made by dropping its last `strip` characters and appending
/// `replacement`. A `doubled` rule also undoes a doubled final consonant
/// (running -> run). Only `-ing` does this: "butter" is not "but" + "er".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub ending: &'static str,
    pub strip: usize,
    pub replacement: &'static str,
    pub doubled: bool,
    /// Shorter bases match too many unrelated words ("ring" is not "re" + "ing").
    pub min_base_len: usize,
}

const fn rule(
    ending: &'static str,
    strip: usize,
    replacement: &'static str,
    min_base_len: usize,
) -> SuffixRule {
    SuffixRule {
        ending,
        strip,
        replacement,
        doubled: false,
        min_base_len,
    }
}

const fn doubled(ending: &'static str) -> SuffixRule {
    SuffixRule {
        ending,
        strip: ending.len(),
        replacement: "",
        doubled: true,
        min_base_len: 3,
    }
}

pub const RULES: &[SuffixRule] = &[
    rule("s", 1, "", 2),     // cats -> cat
    rule("es", 2, "", 2),    // boxes -> box
    rule("ies", 3, "y", 3),  // carries -> carry
    rule("ed", 2, "", 3),    // walked -> walk
    rule("ed", 1, "", 4),    // timed -> time
    rule("ied", 3, "y", 3),  // carried -> carry
    rule("ing", 3, "", 3),   // walking -> walk
    rule("ing", 3, "e", 4),  // biting -> bite
    rule("er", 2, "", 3),    // faster -> fast
    rule("est", 3, "", 3),   // fastest -> fast
    doubled("ing"),          // running -> run
];

impl SuffixRule {
    /// The base this rule would derive `word` from, if the word has the
    /// ending and the base is long enough. Membership is not checked here.
    pub fn base(&self, word: &str) -> Option<String> {
        let stem = word.strip_suffix(self.ending)?;
        let kept = if self.doubled {
            undouble(stem)?
        } else {
            // endings are ASCII and never shorter than `strip`
            &word[..word.len() - self.strip]
        };
        let mut base = kept.to_string();
        base.push_str(self.replacement);
        (base.chars().count() >= self.min_base_len).then_some(base)
    }
}

fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let (last, previous) = (chars.next()?, chars.next()?);
    if last != previous || "aeiou".contains(last) {
        return None;
    }
    Some(&stem[..stem.len() - last.len_utf8()])
}

/// The first rule, with its base, under which `word` is a regular inflection
/// of another member of `words`.
pub fn matching_rule<S: BuildHasher>(
    word: &str,
    words: &std::collections::HashSet<String, S>,
) -> Option<(&'static SuffixRule, String)> {
    RULES.iter().find_map(|rule| {
        rule.base(word)
            .filter(|base| words.contains(base))
            .map(|base| (rule, base))
    })
}

pub fn is_regular_inflection<S: BuildHasher>(
    word: &str,
    words: &std::collections::HashSet<String, S>,
) -> bool {
    matching_rule(word, words).is_some()
}

/// Every word of `words` that is not a regular inflection of another member.
/// Each decision is made against the complete input set, never against the
/// partially filtered result.
pub fn filter_regular_inflections<S: BuildHasher>(
    words: &std::collections::HashSet<String, S>,
) -> HashSet<String> {
    let mut kept = new_hash_set();
    for word in words {
        match matching_rule(word, words) {
            Some((rule, base)) => log::debug!("dropping {word}: -{} of {base}", rule.ending),
            None => {
                kept.insert(word.clone());
            }
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn kept(words: &[&str]) -> Vec<String> {
        filter_regular_inflections(&set(words))
            .into_iter()
            .sorted()
            .collect()
    }

    #[test]
    fn every_rule_has_a_true_positive() {
        let pairs = [
            ("cats", "cat"),
            ("boxes", "box"),
            ("carries", "carry"),
            ("walked", "walk"),
            ("timed", "time"),
            ("carried", "carry"),
            ("walking", "walk"),
            ("biting", "bite"),
            ("faster", "fast"),
            ("fastest", "fast"),
        ];
        for (word, base) in pairs {
            let words = set(&[word, base]);
            let (_, found) = matching_rule(word, &words).unwrap();
            assert_eq!(found, base, "{word}");
        }
    }

    #[test]
    fn short_bases_are_guarded() {
        assert!(!is_regular_inflection("ring", &set(&["re", "ring"])));
        assert!(!is_regular_inflection("wing", &set(&["we", "wing"])));
        assert!(!is_regular_inflection("sing", &set(&["se", "sing"])));
        assert!(!is_regular_inflection("need", &set(&["nee", "need"])));
        assert!(!is_regular_inflection("feed", &set(&["fee", "feed"])));
        assert!(!is_regular_inflection("wed", &set(&["w", "wed"])));
        assert!(!is_regular_inflection("as", &set(&["a", "as"])));
    }

    #[test]
    fn guard_boundaries_are_inclusive() {
        assert!(!is_regular_inflection("owed", &set(&["ow", "owed", "owe"])));
        assert!(is_regular_inflection("hired", &set(&["hire"])));
        assert!(is_regular_inflection("aimed", &set(&["aim"])));
        assert!(!is_regular_inflection("ox", &set(&["o"])));
        assert!(is_regular_inflection("ads", &set(&["ad"])));
    }

    #[test]
    fn doubled_consonant_before_ing() {
        assert!(is_regular_inflection("running", &set(&["run"])));
        assert!(is_regular_inflection("stopping", &set(&["stop"])));
        assert!(!is_regular_inflection("seeing", &set(&["se"])));
        assert!(!is_regular_inflection("running", &set(&["ru"])));
    }

    #[test]
    fn doubled_consonant_only_undone_before_ing() {
        for (word, lookalike) in [
            ("butter", "but"),
            ("letter", "let"),
            ("summer", "sum"),
            ("dinner", "din"),
            ("ladder", "lad"),
            ("stopped", "stop"),
            ("hottest", "hot"),
        ] {
            let words = set(&[word, lookalike]);
            assert!(!is_regular_inflection(word, &words), "{word}");
            assert_eq!(kept(&[word, lookalike]).len(), 2, "{word}");
        }
    }

    #[test]
    fn words_shorter_than_the_suffix_never_match() {
        let words = set(&["", "s", "y", "e"]);
        for word in ["", "s", "es", "ed", "ing", "ies", "d"] {
            assert!(!is_regular_inflection(word, &words), "{word:?}");
        }
    }

    #[test]
    fn no_cascading_removal() {
        assert_eq!(kept(&["carry", "carries", "carried"]), ["carry"]);
        // "walkers" goes via "walker", which is itself dropped via "walk"
        assert_eq!(kept(&["walk", "walker", "walkers"]), ["walk"]);
    }

    #[test]
    fn irregular_forms_survive() {
        assert_eq!(
            kept(&["fast", "faster", "fastest", "run", "running", "ran"]),
            ["fast", "ran", "run"]
        );
        assert_eq!(kept(&["walk", "walked", "walking"]), ["walk"]);
        assert_eq!(kept(&["cat", "cats"]), ["cat"]);
    }

    #[test]
    fn missing_base_keeps_the_word() {
        assert_eq!(kept(&["walked", "boxes"]), ["boxes", "walked"]);
    }
}
