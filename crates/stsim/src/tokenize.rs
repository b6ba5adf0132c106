// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Word tokenization and lowercase normalization.
//!
//! The tokenizer follows Penn Treebank conventions, which is what the
//! STS literature reports BLEU/NIST/WER numbers against:
//!
//! - punctuation is split from words (`sat.` -> `sat .`), except inside
//!   numbers (`1,000`, `3.5`) and abbreviations with internal periods
//! - double quotes become the Treebank quote tokens `` and ''
//! - curly quotes and guillemets are split off as their own tokens
//! - English clitics are split off (`don't` -> `do n't`, `it's` -> `it 's`)
//!
//! Text is first split into sentences, so every sentence gets its own final
//! period token. Within a sentence the rules are applied as ordered regex
//! rewrites followed by a whitespace split.

use std::sync::LazyLock;

use regex::Regex;

/// An ordered regex rewrite.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("tokenizer rule must be a valid regex"),
            replacement,
        }
    }
}

/// Rewrites applied to the raw text.
static LEADING_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Opening quotes
        Rule::new(r"([«“‘„]|[`]+)", " ${1} "),
        Rule::new(r#"^""#, "``"),
        Rule::new(r"(``)", " ${1} "),
        Rule::new(r#"([ (\[{<])("|'{2})"#, "${1} `` "),
        // Sentence-final period, possibly followed by closing brackets/quotes
        Rule::new(r#"([^.])(\.)([\]\)}>"'»”’ ]*)\s*$"#, "${1} ${2} ${3} "),
        // Commas and colons, except inside numbers
        Rule::new(r"([:,])([^\d])", " ${1} ${2}"),
        Rule::new(r"([:,])$", " ${1} "),
        Rule::new(r"\.{2,}", " ${0} "),
        Rule::new(r"[;@#$%&]", " ${0} "),
        Rule::new(r"[?!]", " ${0} "),
        Rule::new(r"([^'])' ", "${1} ' "),
        Rule::new(r"[*]", " ${0} "),
        // Brackets
        Rule::new(r"[\]\[(){}<>]", " ${0} "),
        Rule::new(r"--", " -- "),
    ]
});

/// Rewrites applied after padding the text with one space on each side.
static TRAILING_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Closing quotes
        Rule::new(r"([»”’])", " ${1} "),
        Rule::new(r"''", " '' "),
        Rule::new(r#"""#, " '' "),
        // Clitics
        Rule::new(r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        Rule::new(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
        // Fused words
        Rule::new(r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
    ]
});

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("word pattern must be a valid regex"));

/// Characters that may trail a sentence terminator (`"done."`, `(yes!)`).
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '»', '”', '’'];

/// `u.s`, `e.g` or a lone initial like `j`.
fn is_abbreviation(stem: &str) -> bool {
    let mut chars = stem.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
    initial || stem.contains('.')
}

fn ends_sentence(word: &str) -> bool {
    let core = word.trim_end_matches(CLOSERS);
    if core.ends_with(|c: char| c == '!' || c == '?') {
        return true;
    }
    match core.strip_suffix('.') {
        Some(stem) => !is_abbreviation(stem),
        None => false,
    }
}

/// Split text into sentences.
///
/// A sentence ends after a word terminated by `!`, `?` or `.` (optionally
/// followed by closing quotes or brackets) when whitespace follows. A period
/// ending an abbreviation (`u.s.`) or a single-letter initial does not end
/// the sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for word in WORD.find_iter(text) {
        if ends_sentence(word.as_str()) {
            sentences.push(text[start..word.end()].trim());
            start = word.end();
        }
    }
    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }
    sentences
}

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |acc, rule| {
        rule.pattern
            .replace_all(&acc, rule.replacement)
            .into_owned()
    })
}

fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let text = apply(&LEADING_RULES, sentence.to_string());
    let padded = format!(" {} ", text);
    apply(&TRAILING_RULES, padded)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split text into Treebank-style word tokens, sentence by sentence.
///
/// Case is preserved; callers that need case-insensitive tokens should
/// lowercase first (see [`Normalized`]).
pub fn word_tokenize(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .flat_map(tokenize_sentence)
        .collect()
}

/// A sentence prepared for scoring: lowercased text plus its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Lowercased raw text (character-level metrics)
    pub lower: String,
    /// Lowercased word tokens (token-level metrics and WER divisors)
    pub tokens: Vec<String>,
}

impl Normalized {
    /// Lowercase and tokenize a sentence.
    pub fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let tokens = word_tokenize(&lower);
        Self { lower, tokens }
    }

    /// Number of word tokens.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<String> {
        word_tokenize(text)
    }

    #[test]
    fn test_splits_final_period() {
        assert_eq!(toks("The cat sat."), vec!["The", "cat", "sat", "."]);
    }

    #[test]
    fn test_commas_and_numbers() {
        assert_eq!(
            toks("It cost 1,000 dollars, or 3.5 percent"),
            vec!["It", "cost", "1,000", "dollars", ",", "or", "3.5", "percent"]
        );
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            toks(r#"He said, "hi""#),
            vec!["He", "said", ",", "``", "hi", "''"]
        );
    }

    #[test]
    fn test_clitics() {
        assert_eq!(toks("don't stop"), vec!["do", "n't", "stop"]);
        assert_eq!(toks("it's here"), vec!["it", "'s", "here"]);
        assert_eq!(toks("we'll see"), vec!["we", "'ll", "see"]);
        assert_eq!(toks("i cannot"), vec!["i", "can", "not"]);
    }

    #[test]
    fn test_symbols_and_brackets() {
        assert_eq!(
            toks("costs $5 (approx)?"),
            vec!["costs", "$", "5", "(", "approx", ")", "?"]
        );
    }

    #[test]
    fn test_internal_periods_kept() {
        assert_eq!(toks("the u.s. army"), vec!["the", "u.s.", "army"]);
    }

    #[test]
    fn test_each_sentence_gets_final_period() {
        assert_eq!(
            toks("a man sat. he smiled."),
            vec!["a", "man", "sat", ".", "he", "smiled", "."]
        );
        assert_eq!(
            toks("stop! who goes there? me."),
            vec!["stop", "!", "who", "goes", "there", "?", "me", "."]
        );
    }

    #[test]
    fn test_sentence_split() {
        assert_eq!(
            split_sentences("a man sat. he smiled."),
            vec!["a man sat.", "he smiled."]
        );
        assert_eq!(
            split_sentences("the u.s. army left."),
            vec!["the u.s. army left."]
        );
        assert_eq!(
            split_sentences("j. smith won. (yes!) ok"),
            vec!["j. smith won.", "(yes!)", "ok"]
        );
        assert_eq!(
            split_sentences(r#"he said "go." then left"#),
            vec![r#"he said "go.""#, "then left"]
        );
        assert!(split_sentences("  ").is_empty());
    }

    #[test]
    fn test_curly_quotes_and_stars() {
        assert_eq!(
            toks("“hello” said the *star*"),
            vec!["“", "hello", "”", "said", "the", "*", "star", "*"]
        );
        assert_eq!(toks("«oui»"), vec!["«", "oui", "»"]);
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(toks("wait.. what"), vec!["wait", "..", "what"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(toks("").is_empty());
        assert!(toks("   \t ").is_empty());
    }

    #[test]
    fn test_normalized_lowercases() {
        let n = Normalized::new("A Man IS Playing.");
        assert_eq!(n.lower, "a man is playing.");
        assert_eq!(n.tokens, vec!["a", "man", "is", "playing", "."]);
        assert_eq!(n.token_count(), 5);
    }
}
