//! Titles and descriptions of the known grammar chapters.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterInfo {
    pub id: u32,
    pub title: &'static str,
    pub title_bengali: &'static str,
    pub description: &'static str,
}

const CATALOG: &[ChapterInfo] = &[
    ChapterInfo {
        id: 1,
        title: "Parts of Speech",
        title_bengali: "পদ প্রকরণ",
        description: "The eight kinds of words and how to tell them apart in a sentence.",
    },
    ChapterInfo {
        id: 2,
        title: "Tense",
        title_bengali: "কাল",
        description: "Present, past and future forms and when each one is used.",
    },
    ChapterInfo {
        id: 3,
        title: "Relative Pronouns",
        title_bengali: "সম্বন্ধবাচক সর্বনাম",
        description: "Joining clauses with who, whom, whose, which and that.",
    },
    ChapterInfo {
        id: 4,
        title: "Subject-Verb Agreement",
        title_bengali: "কর্তা ও ক্রিয়ার সামঞ্জস্য",
        description: "Matching the verb to the number and person of its subject.",
    },
    ChapterInfo {
        id: 5,
        title: "Articles",
        title_bengali: "আর্টিকেল",
        description: "Choosing between a, an and the, and when to leave them out.",
    },
    ChapterInfo {
        id: 6,
        title: "Prepositions",
        title_bengali: "পদান্বয়ী অব্যয়",
        description: "Prepositions of time, place and direction, and fixed pairings.",
    },
    ChapterInfo {
        id: 7,
        title: "Voice",
        title_bengali: "বাচ্য",
        description: "Changing sentences between active and passive voice.",
    },
    ChapterInfo {
        id: 8,
        title: "Narration",
        title_bengali: "উক্তি",
        description: "Turning direct speech into indirect speech and back.",
    },
    ChapterInfo {
        id: 9,
        title: "Conditionals",
        title_bengali: "শর্তবাচক বাক্য",
        description: "Zero, first, second and third conditional sentences.",
    },
    ChapterInfo {
        id: 10,
        title: "Modal Verbs",
        title_bengali: "মোডাল ক্রিয়া",
        description: "Can, could, may, might, must, should and their uses.",
    },
    ChapterInfo {
        id: 11,
        title: "Transformation of Sentences",
        title_bengali: "বাক্য রূপান্তর",
        description: "Rewriting sentences between simple, complex and compound forms.",
    },
    ChapterInfo {
        id: 12,
        title: "Right Form of Verbs",
        title_bengali: "ক্রিয়ার সঠিক রূপ",
        description: "Picking the correct verb form from context clues.",
    },
];

/// Catalog entry for a chapter number, if known.
pub fn lookup(id: u32) -> Option<&'static ChapterInfo> {
    CATALOG.iter().find(|info| info.id == id)
}

/// Title, Bengali title and description for a chapter, with generated
/// placeholders for unknown numbers.
pub fn describe(id: u32) -> (String, String, String) {
    match lookup(id) {
        Some(info) => (
            info.title.to_string(),
            info.title_bengali.to_string(),
            info.description.to_string(),
        ),
        None => (
            format!("Chapter {}", id),
            format!("অধ্যায় {}", id),
            format!("Grammar lessons for chapter {}.", id),
        ),
    }
}
