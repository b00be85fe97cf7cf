//! Core content library for ShobdoHub.
//!
//! Provides:
//! - Parsers for the word list, reading passages and grammar chapters
//! - Word lookup index and passage highlighting
//! - Word library grouping and search
//! - Answer matching for spelling quizzes (Levenshtein distance)
//! - Flashcard/memorized collections over a pluggable store
//! - Shared types (Word, Passage, Chapter, Section, etc.)

pub mod collection;
pub mod error;
pub mod highlight;
pub mod library;
pub mod lookup;
pub mod matching;
pub mod parser;
pub mod text;
pub mod types;
pub mod validate;

pub use collection::{CollectionKind, CollectionStore, MemoryStore, WordCollections};
pub use error::{ContentError, Result};
pub use highlight::{segment, Language, Segment};
pub use library::WordLibrary;
pub use lookup::WordLookupIndex;
pub use matching::{
    compare_answers, grade_spelling, levenshtein_distance, normalized_similarity, MatchResult,
    MatchingMode,
};
pub use types::{
    Chapter, ChapterContent, Difficulty, PartOfSpeech, Passage, Section, SectionKind, Word,
};
pub use validate::IdIssue;
