//! Line and item matchers.
//!
//! Matching works on whitespace-separated words. Keywords compare
//! case-insensitively; captured text is returned as a slice of the input.

use std::fmt;

/// Shape of a single word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenClass {
    /// One or more ASCII digits.
    Number,
    /// An ASCII letter followed by letters, digits or underscores.
    Name,
    /// Digits and commas, e.g. `3,4,12`.
    NumberList,
    /// Any of the listed literals, ignoring case.
    OneOf(&'static [&'static str]),
}

impl TokenClass {
    #[must_use]
    pub fn matches(self, word: &str) -> bool {
        match self {
            TokenClass::Number => !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()),
            TokenClass::Name => {
                let mut bytes = word.bytes();
                bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
                    && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
            }
            TokenClass::NumberList => {
                word.bytes().any(|b| b.is_ascii_digit())
                    && word.bytes().all(|b| b.is_ascii_digit() || b == b',')
            }
            TokenClass::OneOf(literals) => literals.iter().any(|l| l.eq_ignore_ascii_case(word)),
        }
    }
}

/// What a [`Pattern`] captures after its keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capture {
    /// Everything after the keywords, trimmed. May be empty.
    Rest,
    /// The next word, which must have the given shape.
    Word(TokenClass),
}

/// Primary matcher: a keyword prefix followed by one capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    keywords: &'static [&'static str],
    capture: Capture,
}

/// Split off the first word of `text`, returning it and what follows.
fn next_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    Some(text.split_at(end))
}

impl Pattern {
    #[must_use]
    pub const fn new(keywords: &'static [&'static str], capture: Capture) -> Self {
        Pattern { keywords, capture }
    }

    #[must_use]
    pub fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    /// Match `line` and return the captured text.
    #[must_use]
    pub fn capture<'a>(&self, line: &'a str) -> Option<&'a str> {
        let mut rest = line;
        for keyword in self.keywords {
            let (word, remainder) = next_word(rest)?;
            if !word.eq_ignore_ascii_case(keyword) {
                return None;
            }
            rest = remainder;
        }
        match self.capture {
            Capture::Rest => Some(rest.trim()),
            Capture::Word(class) => {
                let (word, _) = next_word(rest)?;
                class.matches(word).then_some(word)
            }
        }
    }
}

/// One repeated record pulled out of a captured body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Item<'a> {
    #[must_use]
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// The fields as a fixed-size array, if there are exactly `N` of them.
    #[must_use]
    pub fn split<const N: usize>(&self) -> Option<[&'a str; N]> {
        <[&'a str; N]>::try_from(self.fields.as_slice()).ok()
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

/// Secondary matcher splitting a body into records of a fixed shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPattern {
    shape: &'static [TokenClass],
}

impl ItemPattern {
    #[must_use]
    pub const fn new(shape: &'static [TokenClass]) -> Self {
        ItemPattern { shape }
    }

    /// Scan `body` left to right, collecting every non-overlapping run of
    /// words that fits the shape. Words that cannot start a record are
    /// skipped.
    #[must_use]
    pub fn extract<'a>(&self, body: &'a str) -> Vec<Item<'a>> {
        let words: Vec<&str> = body.split_whitespace().collect();
        let width = self.shape.len();
        let mut items = Vec::new();
        if width == 0 {
            return items;
        }

        let mut i = 0;
        while i + width <= words.len() {
            let window = &words[i..i + width];
            if self
                .shape
                .iter()
                .zip(window)
                .all(|(class, word)| class.matches(word))
            {
                items.push(Item {
                    fields: window.to_vec(),
                });
                i += width;
            } else {
                i += 1;
            }
        }
        items
    }
}
