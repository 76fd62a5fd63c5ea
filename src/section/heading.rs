//! Heading recognition.
//!
//! A heading is matched per physical line with a heuristic pattern: an
//! optional numbering token, one of an enumerated list of exact heading
//! spellings, and a captured trailing remainder. The spellings are
//! data-driven so newly observed OCR garbles can be added without touching
//! the matching logic. A structural match only counts as a heading when
//! the remainder is short and free of sentence punctuation; prose that
//! happens to mention a heading term runs long and carries periods or
//! commas.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Methods-start heading spellings observed across English scientific
/// papers, including spaced-out typography and known OCR garbles.
const METHODS_START_TERMS: &[&str] = &[
    "Method",
    "METHOD",
    "Materials and Methods",
    "MATERIALS AND METHODS",
    "Materials methods",
    "Material and methods",
    "Materials and methods",
    "Study site and methods",
    "Study Area and Methods",
    "M E T H O D S",
    "Material and Methods",
    "STUDY SITE AND METHODS",
    "Study area and methods",
    "STUDY AREA AND METHODS",
    "Study sites and methods",
    "MATERIAL AND METHODS",
    "MATERIALS AN D METHODS",
    "Sample sites and methods",
];

/// Headings that terminate the Methods section. "Resuﬂs" is a recurring
/// OCR garble of "Results".
const SECTION_END_TERMS: &[&str] = &[
    "Discussion",
    "DISCUSSION",
    "Conclusion",
    "Results",
    "RESULTS",
    "Resuﬂs",
    "Acknowledgements",
    "Appendix",
    "Appendices",
];

/// Reference-list headings. Compiled for callers that scan for the
/// literature section; not part of the default start/end search.
const LITERATURE_TERMS: &[&str] = &[
    "References",
    "Bibliography",
    "Literature",
    "LITERATURE",
    "REFERENCES",
    "R E F E R E N C E S",
];

/// Longest remainder, in whitespace-separated tokens, that a real heading
/// line may carry after the matched term.
const MAX_REMAINDER_TOKENS: usize = 5;

/// The class of heading a pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingClass {
    /// A heading that opens the Methods section
    MethodsStart,

    /// A heading that opens the section following Methods
    /// (Discussion, Results, ...)
    SectionEnd,

    /// A heading that opens the reference list
    LiteratureHeading,
}

impl HeadingClass {
    /// The built-in term list for this class.
    pub fn terms(self) -> &'static [&'static str] {
        match self {
            HeadingClass::MethodsStart => METHODS_START_TERMS,
            HeadingClass::SectionEnd => SECTION_END_TERMS,
            HeadingClass::LiteratureHeading => LITERATURE_TERMS,
        }
    }
}

impl fmt::Display for HeadingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeadingClass::MethodsStart => "methods-start",
            HeadingClass::SectionEnd => "section-end",
            HeadingClass::LiteratureHeading => "literature-heading",
        };
        write!(f, "{}", name)
    }
}

/// A structural pattern match on one line, before the prose filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Leading numbering token, if the heading is numbered (e.g. "3. ")
    pub numbering: Option<String>,

    /// The heading term that matched
    pub term: String,

    /// Everything on the line after the term
    pub remainder: String,
}

/// A compiled heading pattern for one heading class.
#[derive(Debug, Clone)]
pub struct HeadingPattern {
    class: HeadingClass,
    regex: Regex,
}

impl HeadingPattern {
    /// Compile the built-in pattern for `class`.
    pub fn new(class: HeadingClass) -> Result<Self> {
        Self::from_terms(class, class.terms())
    }

    /// Compile a pattern from a custom term list.
    ///
    /// Terms are matched as exact strings (case-sensitive, no fuzzy
    /// matching), optionally preceded by a numbering token of digits plus
    /// at most one punctuation character and whitespace.
    pub fn from_terms(class: HeadingClass, terms: &[&str]) -> Result<Self> {
        let alternatives = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"^([0-9]+.?\s*)?({})(.*)$", alternatives);
        let regex =
            Regex::new(&pattern).map_err(|e| Error::Pattern(e.to_string()))?;
        Ok(Self { class, regex })
    }

    /// The heading class this pattern recognizes.
    pub fn class(&self) -> HeadingClass {
        self.class
    }

    /// Match the pattern structure against a line, without applying the
    /// prose filter.
    pub fn structural_match(&self, line: &str) -> Option<HeadingMatch> {
        let caps = self.regex.captures(line)?;
        Some(HeadingMatch {
            numbering: caps.get(1).map(|m| m.as_str().to_string()),
            term: caps[2].to_string(),
            remainder: caps[3].to_string(),
        })
    }

    /// Whether `line` begins a heading of this class.
    ///
    /// True only for a structural match whose remainder passes the prose
    /// filter.
    pub fn matches(&self, line: &str) -> bool {
        match self.structural_match(line) {
            Some(m) => !is_prose_remainder(&m.remainder),
            None => false,
        }
    }
}

/// A remainder betrays prose when it runs past the token limit or carries
/// sentence punctuation.
fn is_prose_remainder(remainder: &str) -> bool {
    remainder.split_whitespace().count() > MAX_REMAINDER_TOKENS
        || remainder.contains('.')
        || remainder.contains(',')
}
