//! Exact resolution against the frozen indices.
//!
//! Keys are case-normalized and looked up exactly — no partial or fuzzy
//! matching. Suggestion lists exist precisely to narrow input down to
//! an exact key before resolution is attempted.

use crate::kb::{GuideKey, GuideLinks, KnowledgeBase, MurlocEntry, PlaceEntry};

/// Typed not-found outcomes. Non-fatal; the adapter layer renders them
/// as user-visible messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no guide found for `{class} {spec}`")]
    GuideNotFound { class: String, spec: String },
    #[error("dungeon `{0}` not found")]
    DungeonNotFound(String),
    #[error("boss `{0}` not found")]
    BossNotFound(String),
    #[error("murloc entry `{0}` not found")]
    MurlocNotFound(String),
}

impl KnowledgeBase {
    /// Resolve a class/spec pair to its per-provider links. A pair known
    /// to only one provider still resolves; the returned map simply has
    /// no entry for the other provider.
    pub fn resolve_guide(&self, class: &str, spec: &str) -> Result<&GuideLinks, ResolveError> {
        let key = GuideKey::new(class, spec);
        match self.guides.get(&key) {
            Some(links) => Ok(links),
            None => Err(ResolveError::GuideNotFound {
                class: key.class().to_string(),
                spec: key.spec().to_string(),
            }),
        }
    }

    /// Resolve a dungeon by slug. Display names participate only in
    /// suggestions and scanning, never in exact resolution.
    pub fn resolve_dungeon(&self, slug: &str) -> Result<&PlaceEntry, ResolveError> {
        let slug = slug.to_lowercase();
        self.dungeons
            .get(&slug)
            .ok_or_else(|| ResolveError::DungeonNotFound(slug))
    }

    /// Resolve a raid boss by slug.
    pub fn resolve_boss(&self, slug: &str) -> Result<&PlaceEntry, ResolveError> {
        let slug = slug.to_lowercase();
        self.bosses
            .get(&slug)
            .ok_or_else(|| ResolveError::BossNotFound(slug))
    }

    /// Resolve a murloc table entry by slug.
    pub fn resolve_murloc(&self, slug: &str) -> Result<&MurlocEntry, ResolveError> {
        let slug = slug.to_lowercase();
        self.murlocs
            .get(&slug)
            .ok_or_else(|| ResolveError::MurlocNotFound(slug))
    }
}
