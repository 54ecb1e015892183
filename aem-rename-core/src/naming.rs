//! AEM Assets "proper name" normalization.
//!
//! A file name is split into a stem and an extension. The extension is kept
//! verbatim; the stem is folded to ASCII, broken into words on separators and
//! camelCase boundaries, lowercased, and joined with hyphens.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Stem used when nothing survives normalization.
pub const EMPTY_STEM: &str = "unnamed";

/// Separator placed between words of a normalized stem.
pub const WORD_SEPARATOR: &str = "-";

/// One word of a stem, in its original case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A file name broken into its stem and optional extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameParts<'a> {
    pub stem: &'a str,
    pub extension: Option<&'a str>,
}

/// Split a file name at its last dot.
///
/// A leading dot (`.bashrc`) or a trailing dot (`notes.`) does not start an
/// extension, so those names are all stem.
pub fn split_extension(name: &str) -> NameParts<'_> {
    match name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < name.len() => NameParts {
            stem: &name[..pos],
            extension: Some(&name[pos + 1..]),
        },
        _ => NameParts {
            stem: name,
            extension: None,
        },
    }
}

/// Decompose to NFKD and drop combining marks, so `é` becomes `e` and
/// ligatures such as `ﬁ` become `fi`. Other non-ASCII characters pass through
/// and are treated as separators by [`split_words`].
pub fn fold_to_ascii(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Break a stem into words.
///
/// Any character that is not an ASCII letter or digit separates words. Inside
/// a run of letters and digits a word also ends at a lowercase to uppercase
/// transition (`myPhoto`) and before the last capital of an uppercase run that
/// continues in lowercase (`HTMLPage`).
pub fn split_words(s: &str) -> Vec<Word> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(Word::new(std::mem::take(&mut current)));
            }
            continue;
        }

        if c.is_ascii_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            let camel_hump = prev.is_ascii_lowercase();
            let acronym_end = prev.is_ascii_uppercase() && next_is_lower;
            if camel_hump || acronym_end {
                words.push(Word::new(std::mem::take(&mut current)));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(Word::new(current));
    }

    words
}

/// Normalize a stem: fold, split, lowercase and hyphen-join.
pub fn normalize_stem(stem: &str) -> String {
    let folded = fold_to_ascii(stem);
    let words = split_words(&folded);
    if words.is_empty() {
        return EMPTY_STEM.to_string();
    }

    words
        .iter()
        .map(|w| w.text.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}

/// Produce the AEM Assets proper name for a file name.
///
/// The result never contains a dot except the one before the extension, and
/// the stem never starts with one, so normalizing the output again yields the
/// same string.
pub fn normalize(raw_name: &str) -> String {
    let parts = split_extension(raw_name);
    let stem = normalize_stem(parts.stem);
    match parts.extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

/// Alias kept for callers that think of this as the "proper name" transform.
pub fn proper_name(raw_name: &str) -> String {
    normalize(raw_name)
}
