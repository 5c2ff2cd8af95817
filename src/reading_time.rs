use lazy_static::lazy_static;
use regex::Regex;

use crate::content::Section;

pub const WORDS_PER_MINUTE: u32 = 200;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

fn count_words(buf: &str) -> u32 {
    // A run of whitespace is a single separator, so "Hello   World" is 2 words
    WHITESPACE.split(buf).filter(|token| !token.is_empty()).count() as u32
}

/// Estimated reading time in whole minutes, rounded up. A document with no
/// words yields 0; there is no minimum of 1 minute.
pub fn estimate(sections: &[Section]) -> u32 {
    let mut words = 0;
    for section in sections {
        words += count_words(&section.heading);
        for block in section.body.iter() {
            words += count_words(&block.0);
        }
    }

    words.div_ceil(WORDS_PER_MINUTE)
}
