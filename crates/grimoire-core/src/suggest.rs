//! Capped, order-preserving suggestion lists for input narrowing.
//!
//! Every filter is a case-insensitive substring containment test; the
//! empty partial matches everything. Results come back in the index's
//! sorted iteration order, truncated to [`MAX_SUGGESTIONS`].

use crate::kb::{KnowledgeBase, PlaceEntry, Suggestion, title_case};
use std::collections::BTreeMap;

/// Hard cap on any suggestion list, matching the chat platform's
/// autocomplete limit.
pub const MAX_SUGGESTIONS: usize = 25;

impl KnowledgeBase {
    /// Distinct known classes matching `partial`.
    pub fn suggest_classes(&self, partial: &str) -> Vec<Suggestion> {
        let partial = partial.to_lowercase();
        self.classes
            .iter()
            .filter(|class| class.contains(&partial))
            .take(MAX_SUGGESTIONS)
            .map(|class| Suggestion {
                name: title_case(class),
                value: class.clone(),
            })
            .collect()
    }

    /// Specs belonging to a previously chosen class. An unknown class
    /// yields the empty list: spec narrowing is meaningless without a
    /// class.
    pub fn suggest_specs(&self, class: &str, partial: &str) -> Vec<Suggestion> {
        let class = class.to_lowercase();
        let partial = partial.to_lowercase();
        self.guides
            .keys()
            .filter(|key| key.class() == class && key.spec().contains(&partial))
            .take(MAX_SUGGESTIONS)
            .map(|key| Suggestion {
                name: title_case(key.spec()),
                value: key.spec().to_string(),
            })
            .collect()
    }

    /// Dungeons matching `partial` against slug or display name.
    pub fn suggest_dungeons(&self, partial: &str) -> Vec<Suggestion> {
        suggest_places(&self.dungeons, partial)
    }

    /// Raid bosses matching `partial` against slug or display name.
    pub fn suggest_bosses(&self, partial: &str) -> Vec<Suggestion> {
        suggest_places(&self.bosses, partial)
    }

    /// Murloc entries matching `partial` against slug or display name.
    pub fn suggest_murlocs(&self, partial: &str) -> Vec<Suggestion> {
        let partial = partial.to_lowercase();
        self.murlocs
            .iter()
            .filter_map(|(slug, entry)| {
                let name = entry.display_name(slug);
                (slug.contains(&partial) || name.to_lowercase().contains(&partial)).then(|| {
                    Suggestion {
                        name,
                        value: slug.clone(),
                    }
                })
            })
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}

fn suggest_places(index: &BTreeMap<String, PlaceEntry>, partial: &str) -> Vec<Suggestion> {
    let partial = partial.to_lowercase();
    index
        .iter()
        .filter(|(slug, entry)| {
            slug.contains(&partial) || entry.name.to_lowercase().contains(&partial)
        })
        .take(MAX_SUGGESTIONS)
        .map(|(slug, entry)| Suggestion {
            name: entry.name.clone(),
            value: slug.clone(),
        })
        .collect()
}
