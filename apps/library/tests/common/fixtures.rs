//! Sample content files.

pub const WORDS: &str = "\
ABATE | কমে যাওয়া
RESILIENT | প্রতিকূলতা সামলে ওঠার ক্ষমতা
WELL-BEING | সুস্থতা
this line has no separator
ZEAL | উদ্দীপনা
";

pub const WORD_DATASET: &str = r#"[
  {
    "word": "ABATE",
    "pronunciation": "uh-BAYT",
    "partOfSpeech": "verb",
    "smartMeaning": "তীব্রতা কমে যাওয়া",
    "synonyms": ["subside", "ease"],
    "difficulty": "hard"
  },
  {
    "word": "CANDID",
    "banglaMeaning": "অকপট"
  }
]"#;

pub const PASSAGES: &str = "\
Passage 1: The Storm
(Words: ABATE, RESILIENT)
Bengali Contextual Version
ঝড় abate হলে গ্রামের resilient মানুষেরা আবার কাজে নামল।
English Translation
When the storm began to abate, the resilient villagers (গ্রামবাসী) returned to work.

Passage 2: The Volunteer
(Words: ZEAL, UNKNOWN)
Bengali Contextual Version
সে zeal নিয়ে কাজ করল।
English Translation
She worked with zeal.

Passage 4: Skipped Number
(Words: WELL-BEING)
Bengali Contextual Version
সবার well-being জরুরি।
English Translation
Everyone's well-being matters.
";

pub const GRAMMAR: &str = "\
Chapter-1
Rule-1: A sentence needs a subject and a verb.
EXAMPLES: She runs. সে দৌড়ায়।
Rule-2: The verb agrees with the subject.

Chapter-3
Rule- 1 Use \"who\" for people.
Shortcut Tip- 1 Remember who for people, which for things.
";
