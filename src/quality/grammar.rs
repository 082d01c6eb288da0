//! Rule-based grammar checks used when no grammar service is available.
//!
//! Text is split on periods. Each non-blank segment is checked for runs of
//! two or more spaces, a lowercase first letter (every segment but the
//! first), and words from a fixed misspelling dictionary.

use crate::quality::ServiceError;
use crate::text::normalize::is_word_char;
use crate::text::{segments, SentenceSegment};
use crate::types::quality::GrammarIssue;

pub const RULE_DOUBLE_SPACE: &str = "DOUBLE_SPACE";
pub const RULE_CAPITALIZATION: &str = "CAPITALIZATION";
pub const RULE_MISSPELLING: &str = "MISSPELLING";

/// (misspelling, correction)
pub const COMMON_MISSPELLINGS: [(&str, &str); 10] = [
    ("teh", "the"),
    ("adn", "and"),
    ("recieve", "receive"),
    ("seperate", "separate"),
    ("occured", "occurred"),
    ("definately", "definitely"),
    ("accomodate", "accommodate"),
    ("begining", "beginning"),
    ("neccessary", "necessary"),
    ("occassion", "occasion"),
];

/// An external grammar checker.
pub trait GrammarService {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, ServiceError>;
}

pub fn heuristic_grammar_check(text: &str) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();

    for segment in segments(text) {
        if segment.is_blank() {
            continue;
        }
        check_double_spaces(&segment, &mut issues);
        check_capitalization(&segment, &mut issues);
        check_misspellings(&segment, &mut issues);
    }

    issues
}

fn check_double_spaces(segment: &SentenceSegment<'_>, issues: &mut Vec<GrammarIssue>) {
    // (start, len) of every run of spaces
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut in_run = false;

    for (i, c) in segment.raw.chars().enumerate() {
        match (c == ' ', in_run) {
            (true, true) => {
                if let Some(run) = runs.last_mut() {
                    run.1 += 1;
                }
            }
            (true, false) => runs.push((i, 1)),
            (false, _) => {}
        }
        in_run = c == ' ';
    }

    for (start, len) in runs.into_iter().filter(|(_, len)| *len >= 2) {
        issues.push(GrammarIssue {
            message: "Double space detected".to_string(),
            context_snippet: segment.trimmed().to_string(),
            offset: segment.char_offset + start,
            length: len,
            rule_id: RULE_DOUBLE_SPACE.to_string(),
            suggested_replacements: vec![" ".to_string()],
        });
    }
}

fn check_capitalization(segment: &SentenceSegment<'_>, issues: &mut Vec<GrammarIssue>) {
    if segment.index == 0 {
        return;
    }

    let Some(first) = segment.trimmed().chars().next() else {
        return;
    };
    if !first.is_lowercase() {
        return;
    }

    issues.push(GrammarIssue {
        message: "Sentence should start with capital letter".to_string(),
        context_snippet: segment.trimmed().to_string(),
        offset: segment.trimmed_offset(),
        length: 1,
        rule_id: RULE_CAPITALIZATION.to_string(),
        suggested_replacements: vec![first.to_uppercase().collect()],
    });
}

fn check_misspellings(segment: &SentenceSegment<'_>, issues: &mut Vec<GrammarIssue>) {
    let sentence = segment.trimmed();
    let base = segment.trimmed_offset();

    for (start, word) in word_tokens(sentence) {
        let lower = word.to_lowercase();
        let Some((mistake, correction)) = COMMON_MISSPELLINGS
            .iter()
            .find(|(mistake, _)| *mistake == lower)
        else {
            continue;
        };

        issues.push(GrammarIssue {
            message: format!("Possible misspelling: \"{mistake}\""),
            context_snippet: sentence.to_string(),
            offset: base + start,
            length: word.chars().count(),
            rule_id: RULE_MISSPELLING.to_string(),
            suggested_replacements: vec![match_case(word, correction)],
        });
    }
}

/// Maximal runs of word characters with their char offsets.
fn word_tokens(sentence: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None; // (char offset, byte offset)
    let mut char_index = 0;

    for (byte_index, c) in sentence.char_indices() {
        match (is_word_char(c), start) {
            (true, None) => start = Some((char_index, byte_index)),
            (false, Some((chars, bytes))) => {
                tokens.push((chars, &sentence[bytes..byte_index]));
                start = None;
            }
            _ => {}
        }
        char_index += 1;
    }
    if let Some((chars, bytes)) = start {
        tokens.push((chars, &sentence[bytes..]));
    }

    tokens
}

/// Carry a leading capital over to the correction.
fn match_case(original: &str, correction: &str) -> String {
    let capitalized = original.chars().next().is_some_and(char::is_uppercase);
    if !capitalized {
        return correction.to_string();
    }

    let mut chars = correction.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
