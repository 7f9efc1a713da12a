//! Heuristic mention scanning over free-form chat text.
//!
//! A linear substring sweep over every known entity key — O(entities)
//! per message, a heuristic rather than a parser. It can false-positive
//! when a needle appears inside an unrelated word; that is accepted.

use crate::kb::{GuideKey, KnowledgeBase, PlaceEntry};
use std::collections::BTreeMap;

/// At most one hit per category. Borrowed keys reference the knowledge
/// base the scan ran against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MentionHits<'a> {
    pub guide: Option<&'a GuideKey>,
    pub dungeon: Option<&'a str>,
    pub boss: Option<&'a str>,
}

impl MentionHits<'_> {
    pub fn is_empty(&self) -> bool {
        self.guide.is_none() && self.dungeon.is_none() && self.boss.is_none()
    }
}

impl KnowledgeBase {
    /// Scan a text blob for known class/spec pairs, dungeons, and
    /// bosses. The input is lower-cased once; guide pairs match as
    /// either `"{spec} {class}"` or `"{class} {spec}"`, places as slug
    /// or display name. When several entries of one category are
    /// contained in the text, the longest matched needle wins, ties
    /// breaking toward the first key in sorted order.
    pub fn scan_mentions(&self, text: &str) -> MentionHits<'_> {
        let text = text.to_lowercase();
        MentionHits {
            guide: self.scan_guides(&text),
            dungeon: scan_places(&self.dungeons, &text),
            boss: scan_places(&self.bosses, &text),
        }
    }

    fn scan_guides(&self, text: &str) -> Option<&GuideKey> {
        let mut best: Option<(&GuideKey, usize)> = None;
        for key in self.guides.keys() {
            let spec_first = format!("{} {}", key.spec(), key.class());
            let class_first = format!("{} {}", key.class(), key.spec());
            if !text.contains(&spec_first) && !text.contains(&class_first) {
                continue;
            }
            // Both orderings have the same length.
            let len = spec_first.len();
            if best.is_none_or(|(_, longest)| len > longest) {
                best = Some((key, len));
            }
        }
        best.map(|(key, _)| key)
    }
}

fn scan_places<'a>(index: &'a BTreeMap<String, PlaceEntry>, text: &str) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for (slug, entry) in index {
        let name = entry.name.to_lowercase();
        let hit = [slug.as_str(), name.as_str()]
            .into_iter()
            .filter(|needle| !needle.is_empty() && text.contains(*needle))
            .map(str::len)
            .max();
        if let Some(len) = hit
            && best.is_none_or(|(_, longest)| len > longest)
        {
            best = Some((slug, len));
        }
    }
    best.map(|(slug, _)| slug)
}
