//! Per-event decision: explicit command, passive mention, or nothing.
//!
//! One synchronous call per inbound event. The command path owns the
//! reply for prefixed text, so a prefixed message is never scanned —
//! that is what prevents double replies.

use crate::kb::{GuideLinks, KnowledgeBase};

/// An inbound chat event, reduced to what the guard needs.
#[derive(Debug, Clone, Copy)]
pub struct MessageEvent<'a> {
    pub text: &'a str,
    /// True when the message was authored by this process's own account.
    pub authored_by_self: bool,
}

/// A passive reply, as plain data for the adapter layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Guide {
        class: String,
        spec: String,
        links: GuideLinks,
    },
    Dungeon {
        name: String,
        url: String,
    },
    Boss {
        name: String,
        url: String,
    },
}

/// Decide whether `event` warrants a passive reply.
///
/// Self-authored messages are never scanned (feedback-loop
/// suppression), nor is text starting with the command prefix.
/// Otherwise the categories are consulted in guide → dungeon → boss
/// order and the first hit carrying a resolvable link produces the
/// single reply; remaining categories are not checked. A dungeon or
/// boss hit without a URL is not resolvable and falls through.
pub fn dispatch(kb: &KnowledgeBase, event: &MessageEvent<'_>, command_prefix: &str) -> Option<Reply> {
    if event.authored_by_self {
        return None;
    }
    if !command_prefix.is_empty() && event.text.starts_with(command_prefix) {
        return None;
    }

    let hits = kb.scan_mentions(event.text);
    if let Some(key) = hits.guide
        && let Ok(links) = kb.resolve_guide(key.class(), key.spec())
        && !links.is_empty()
    {
        return Some(Reply::Guide {
            class: key.class().to_string(),
            spec: key.spec().to_string(),
            links: links.clone(),
        });
    }
    if let Some(slug) = hits.dungeon
        && let Ok(entry) = kb.resolve_dungeon(slug)
        && let Some(url) = &entry.url
    {
        return Some(Reply::Dungeon {
            name: entry.name.clone(),
            url: url.clone(),
        });
    }
    if let Some(slug) = hits.boss
        && let Ok(entry) = kb.resolve_boss(slug)
        && let Some(url) = &entry.url
    {
        return Some(Reply::Boss {
            name: entry.name.clone(),
            url: url.clone(),
        });
    }
    None
}
