//! Knowledge-base data model: the canonical lookup indices, built once
//! from the raw source tables and frozen for the life of the process.

use serde_yaml::Value;
use std::collections::{BTreeMap, BTreeSet};

/// One of the fixed external guide sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Provider {
    Wowhead,
    IcyVeins,
}

impl Provider {
    pub const ALL: [Self; 2] = [Self::Wowhead, Self::IcyVeins];

    /// Top-level key of this provider's block in the guides table.
    pub fn source_key(self) -> &'static str {
        match self {
            Self::Wowhead => "wowhead",
            Self::IcyVeins => "icy_veins",
        }
    }

    /// Human-facing provider name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Wowhead => "Wowhead",
            Self::IcyVeins => "Icy Veins",
        }
    }
}

/// Canonical `(class, spec)` key. Both components are lower-cased
/// exactly once here; nothing downstream re-normalizes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuideKey {
    class: String,
    spec: String,
}

impl GuideKey {
    pub fn new(class: &str, spec: &str) -> Self {
        Self {
            class: class.to_lowercase(),
            spec: spec.to_lowercase(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn spec(&self) -> &str {
        &self.spec
    }
}

/// Per-provider guide links for one class/spec pair. A pair may be
/// present under one provider and absent under the other.
pub type GuideLinks = BTreeMap<Provider, String>;

/// A dungeon or raid-boss record: display name plus an optional link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceEntry {
    pub name: String,
    pub url: Option<String>,
}

/// A murloc table record. The source table is polymorphic; the shape is
/// decided once at build time so consumers match on a closed set of
/// variants instead of probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MurlocEntry {
    /// Plain display text.
    Text(String),
    /// A single named link; `url` may be absent.
    Link { name: String, url: Option<String> },
    /// Spec label → guide URL.
    SpecLinks(BTreeMap<String, String>),
}

impl MurlocEntry {
    /// Human-facing name for suggestion lists; `slug` supplies the
    /// fallback for shapes that carry no name of their own.
    pub fn display_name(&self, slug: &str) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Link { name, .. } => name.clone(),
            Self::SpecLinks(_) => title_case(slug),
        }
    }
}

/// A display/value pair offered while narrowing a user's input; `value`
/// is the canonical key used for exact resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub value: String,
}

/// The frozen snapshot every handler reads: four indices plus the
/// derived class list. Built exactly once before any event is
/// processed, never mutated afterward.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub(crate) guides: BTreeMap<GuideKey, GuideLinks>,
    pub(crate) dungeons: BTreeMap<String, PlaceEntry>,
    pub(crate) bosses: BTreeMap<String, PlaceEntry>,
    pub(crate) murlocs: BTreeMap<String, MurlocEntry>,
    pub(crate) classes: Vec<String>,
}

impl KnowledgeBase {
    /// Build the indices from the four raw source documents. Malformed
    /// records are skipped at the narrowest scope; a `Null` document
    /// yields an empty index for its category.
    pub fn build(guides: &Value, routes: &Value, raid: &Value, murloc: &Value) -> Self {
        let guides = index_guides(guides);
        let dungeons = index_places(routes, "dungeons");
        let bosses = index_places(raid, "bosses");
        let murlocs = index_murlocs(murloc);
        let classes: Vec<String> = guides
            .keys()
            .map(|k| k.class().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        tracing::debug!(
            "knowledge base built: {} guide pairs, {} dungeons, {} bosses, {} murloc entries",
            guides.len(),
            dungeons.len(),
            bosses.len(),
            murlocs.len(),
        );
        Self {
            guides,
            dungeons,
            bosses,
            murlocs,
            classes,
        }
    }

    /// Distinct class names found in the guide index, sorted.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    pub fn dungeon_count(&self) -> usize {
        self.dungeons.len()
    }

    pub fn boss_count(&self) -> usize {
        self.bosses.len()
    }

    pub fn murloc_count(&self) -> usize {
        self.murlocs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
            && self.dungeons.is_empty()
            && self.bosses.is_empty()
            && self.murlocs.is_empty()
    }
}

/// Title-case a slug-ish string: underscores become spaces, each word
/// gets an upper-case initial.
pub fn title_case(s: &str) -> String {
    s.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn index_guides(doc: &Value) -> BTreeMap<GuideKey, GuideLinks> {
    let mut guides: BTreeMap<GuideKey, GuideLinks> = BTreeMap::new();
    for provider in Provider::ALL {
        let Some(classes) = doc.get(provider.source_key()).and_then(Value::as_mapping) else {
            continue;
        };
        for (class, specs) in classes {
            let Some(class) = class.as_str() else {
                tracing::warn!("skipping non-string class key under {}", provider.source_key());
                continue;
            };
            let Some(specs) = specs.as_mapping() else {
                tracing::warn!("skipping non-mapping spec table for class {class}");
                continue;
            };
            for (spec, url) in specs {
                let (Some(spec), Some(url)) = (spec.as_str(), url.as_str()) else {
                    tracing::warn!("skipping malformed guide entry under class {class}");
                    continue;
                };
                // Last write wins per (class, spec, provider).
                guides
                    .entry(GuideKey::new(class, spec))
                    .or_default()
                    .insert(provider, url.to_string());
            }
        }
    }
    guides
}

fn index_places(doc: &Value, table_key: &str) -> BTreeMap<String, PlaceEntry> {
    let mut places = BTreeMap::new();
    let Some(entries) = doc.get(table_key).and_then(Value::as_mapping) else {
        return places;
    };
    for (slug, entry) in entries {
        let Some(slug) = slug.as_str() else {
            tracing::warn!("skipping non-string slug in {table_key} table");
            continue;
        };
        if entry.as_mapping().is_none() {
            tracing::warn!("skipping non-mapping {table_key} entry `{slug}`");
            continue;
        }
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .map_or_else(|| title_case(slug), str::to_string);
        let url = entry.get("url").and_then(Value::as_str).map(str::to_string);
        // Slugs are normalized at insertion; every downstream lookup is
        // a plain map get after one to_lowercase on the probe.
        places.insert(slug.to_lowercase(), PlaceEntry { name, url });
    }
    places
}

/// Accepted top-level keys of the murloc table, in preference order.
const MURLOC_TABLE_KEYS: [&str; 2] = ["classes", "mplus_class_guides"];

fn index_murlocs(doc: &Value) -> BTreeMap<String, MurlocEntry> {
    let mut murlocs = BTreeMap::new();
    let Some(root) = doc.as_mapping() else {
        return murlocs;
    };
    // A bare mapping with neither known key is used wholesale.
    let table = MURLOC_TABLE_KEYS
        .into_iter()
        .find_map(|key| doc.get(key).and_then(Value::as_mapping))
        .unwrap_or(root);
    for (slug, value) in table {
        let Some(slug) = slug.as_str() else {
            tracing::warn!("skipping non-string slug in murloc table");
            continue;
        };
        match classify_murloc(slug, value) {
            Some(entry) => {
                murlocs.insert(slug.to_lowercase(), entry);
            }
            None => tracing::warn!("skipping unclassifiable murloc entry `{slug}`"),
        }
    }
    murlocs
}

/// Decide a murloc value's shape once, at build time.
fn classify_murloc(slug: &str, value: &Value) -> Option<MurlocEntry> {
    match value {
        Value::String(text) => Some(MurlocEntry::Text(text.clone())),
        Value::Mapping(map) => {
            let string_pairs: BTreeMap<String, String> = map
                .iter()
                .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.as_str()?.to_string())))
                .collect();
            if !string_pairs.is_empty() && string_pairs.values().all(|url| is_url_like(url)) {
                return Some(MurlocEntry::SpecLinks(string_pairs));
            }
            let name = value
                .get("name")
                .and_then(Value::as_str)
                .map_or_else(|| title_case(slug), str::to_string);
            let url = value.get("url").and_then(Value::as_str).map(str::to_string);
            Some(MurlocEntry::Link { name, url })
        }
        _ => None,
    }
}

fn is_url_like(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
