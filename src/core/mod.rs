//! Leaf building blocks: tokens, word lists, transliteration, similarity

pub mod lexicon;
pub mod similarity;
pub mod token;
pub mod transliteration;
