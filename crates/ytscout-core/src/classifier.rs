//! Keyword-based content classification
//!
//! Tags a video from its title and description by unanchored substring
//! matching against fixed bilingual (English/Indonesian) vocabularies.
//! Several labels may apply at once. The generic AI vocabulary is only
//! consulted when no category matched, and a video matching nothing is
//! `Irrelevant`.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Serialize, Serializer};

use crate::types::{ClassifiedVideo, VideoRecord};

/// Delimiter between labels in a tag string
pub const TAG_DELIMITER: &str = "|";

/// Label assigned when nothing matched
pub const IRRELEVANT: &str = "Irrelevant";

pub const CREATIVE_TERMS: &[&str] = &[
    "short film",
    "music video",
    "animation",
    "story",
    "art",
    "movie",
    "song",
    "fiction",
    "cerita",
    "film pendek",
    "video musik",
];

pub const EDUCATION_TERMS: &[&str] = &[
    "tutorial",
    "how to",
    "guide",
    "masterclass",
    "lesson",
    "course",
    "explained",
    "walkthrough",
    "create",
    "cara membuat",
    "cara pakai",
    "panduan",
    "belajar",
    "tips",
];

pub const REVIEW_TERMS: &[&str] = &[
    "review",
    "news",
    "update",
    "demo",
    "vs",
    "versus",
    "hands-on",
    "first look",
    "analysis",
    "report",
    "reaction",
    "ulasan",
    "berita",
];

pub const EXPERIMENT_TERMS: &[&str] = &[
    "experiment",
    "test",
    "challenge",
    "prompt",
    "showcase",
    "uji coba",
];

/// Generic AI vocabulary, the fallback when no category matched
pub const GENERIC_AI_TERMS: &[&str] = &[
    "ai generated",
    "ai video",
    "text-to-video",
    "sora",
    "runway gen-3",
    "runwayml",
    "pika labs",
    "gen-3",
    "midjourney",
    "luma ai",
    "google veo",
    "veo3",
    "synthesia",
    "heygen",
    "kaiber",
    "stable video diffusion",
    "d-id",
    "hailuo",
    "kling",
    "nano-banana",
    "gpt",
    "chatgpt",
    "elevenlabs",
];

/// Content category label
///
/// Variants are declared in lexical order of their labels, so the derived
/// `Ord` sorts exactly like the label strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentTag {
    CreativeWork,
    EducationTutorial,
    Experiment,
    GeneralAiContent,
    ReviewNews,
}

impl ContentTag {
    /// Category labels with their vocabularies, in evaluation order
    pub const CATEGORIES: [(ContentTag, &'static [&'static str]); 4] = [
        (ContentTag::CreativeWork, CREATIVE_TERMS),
        (ContentTag::EducationTutorial, EDUCATION_TERMS),
        (ContentTag::ReviewNews, REVIEW_TERMS),
        (ContentTag::Experiment, EXPERIMENT_TERMS),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreativeWork => "creative_work",
            Self::EducationTutorial => "education_tutorial",
            Self::Experiment => "experiment",
            Self::GeneralAiContent => "general_ai_content",
            Self::ReviewNews => "review_news",
        }
    }
}

impl fmt::Display for ContentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome
///
/// `Irrelevant` cannot coexist with any label; `Tagged` always holds at
/// least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTagSet {
    Irrelevant,
    Tagged(BTreeSet<ContentTag>),
}

impl ContentTagSet {
    pub fn is_irrelevant(&self) -> bool {
        matches!(self, Self::Irrelevant)
    }

    pub fn contains(&self, tag: ContentTag) -> bool {
        match self {
            Self::Irrelevant => false,
            Self::Tagged(tags) => tags.contains(&tag),
        }
    }

    /// Individual label strings, sorted
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            Self::Irrelevant => vec![IRRELEVANT],
            Self::Tagged(tags) => tags.iter().map(ContentTag::as_str).collect(),
        }
    }
}

impl fmt::Display for ContentTagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(TAG_DELIMITER))
    }
}

impl Serialize for ContentTagSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

fn mentions_any(corpus: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| corpus.contains(term))
}

/// Classify free text given as title and description
pub fn classify_text(title: &str, description: &str) -> ContentTagSet {
    let corpus = format!("{} {}", title, description).to_lowercase();

    let mut tags: BTreeSet<ContentTag> = ContentTag::CATEGORIES
        .iter()
        .filter(|(_, terms)| mentions_any(&corpus, terms))
        .map(|(tag, _)| *tag)
        .collect();

    if tags.is_empty() && mentions_any(&corpus, GENERIC_AI_TERMS) {
        tags.insert(ContentTag::GeneralAiContent);
    }

    if tags.is_empty() {
        ContentTagSet::Irrelevant
    } else {
        ContentTagSet::Tagged(tags)
    }
}

/// Classify a video record from its title and description
pub fn classify(record: &VideoRecord) -> ContentTagSet {
    classify_text(&record.title, &record.description)
}

/// Classify every record, keeping input order
pub fn classify_all(records: Vec<VideoRecord>) -> Vec<ClassifiedVideo> {
    records
        .into_iter()
        .map(|record| {
            let content_tags = classify(&record);
            ClassifiedVideo {
                record,
                content_tags,
            }
        })
        .collect()
}

/// Count individual labels across classified videos
///
/// Sorted by count descending, ties by label name, truncated to `limit`.
pub fn tag_distribution(videos: &[ClassifiedVideo], limit: usize) -> Vec<(&'static str, usize)> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for video in videos {
        for label in video.content_tags.labels() {
            *counts.entry(label).or_default() += 1;
        }
    }

    let mut distribution: Vec<(&'static str, usize)> = counts.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    distribution.truncate(limit);
    distribution
}
