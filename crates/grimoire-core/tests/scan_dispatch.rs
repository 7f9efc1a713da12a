//! Mention scanning and the per-event dispatch guard.

use grimoire_core::dispatch::{MessageEvent, Reply, dispatch};
use grimoire_core::kb::{KnowledgeBase, Provider};
use serde_yaml::Value;

fn yaml(s: &str) -> Value {
    if s.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(s).unwrap()
    }
}

fn sample_kb() -> KnowledgeBase {
    let guides = yaml("wowhead:\n  warrior:\n    fury: https://wh/fury\n");
    let routes = yaml(
        "dungeons:\n  mists:\n    name: Mists of Tirna Scithe\n    url: https://route/mists\n  hoa:\n    name: Halls of Atonement\n    url: https://route/hoa\n",
    );
    let raid = yaml("bosses:\n  vexie:\n    name: Vexie\n    url: https://raid/vexie\n");
    KnowledgeBase::build(&guides, &routes, &raid, &Value::Null)
}

fn event(text: &str) -> MessageEvent<'_> {
    MessageEvent {
        text,
        authored_by_self: false,
    }
}

#[test]
fn test_scan_guide_spec_first_order() {
    let kb = sample_kb();
    let hits = kb.scan_mentions("check out the fury warrior build");
    let key = hits.guide.unwrap();
    assert_eq!((key.class(), key.spec()), ("warrior", "fury"));
}

#[test]
fn test_scan_guide_class_first_order() {
    let kb = sample_kb();
    let hits = kb.scan_mentions("Warrior Fury is strong this season");
    assert!(hits.guide.is_some());
}

#[test]
fn test_scan_empty_index_finds_nothing() {
    let kb = KnowledgeBase::default();
    let hits = kb.scan_mentions("check out the fury warrior build");
    assert!(hits.is_empty());
}

#[test]
fn test_scan_dungeon_by_display_name() {
    let kb = sample_kb();
    let hits = kb.scan_mentions("anyone up for Halls of Atonement tonight?");
    assert_eq!(hits.dungeon, Some("hoa"));
}

#[test]
fn test_scan_dungeon_by_slug() {
    let kb = sample_kb();
    let hits = kb.scan_mentions("need a tank for hoa +15");
    assert_eq!(hits.dungeon, Some("hoa"));
}

#[test]
fn test_scan_longest_needle_wins() {
    // "mists of tirna scithe" contains the slug "mists" of the same
    // entry and is also a superstring of nothing else; add a second
    // entry whose name is a prefix to force the tie-break.
    let routes = yaml(
        "dungeons:\n  mists:\n    name: Mists\n    url: https://a\n  tirna:\n    name: Mists of Tirna Scithe\n    url: https://b\n",
    );
    let kb = KnowledgeBase::build(&Value::Null, &routes, &Value::Null, &Value::Null);
    let hits = kb.scan_mentions("running mists of tirna scithe later");
    assert_eq!(hits.dungeon, Some("tirna"));
}

#[test]
fn test_scan_one_hit_per_category() {
    let kb = sample_kb();
    let hits = kb.scan_mentions("fury warrior run through hoa then vexie");
    assert!(hits.guide.is_some());
    assert_eq!(hits.dungeon, Some("hoa"));
    assert_eq!(hits.boss, Some("vexie"));
}

#[test]
fn test_dispatch_guide_takes_priority() {
    let kb = sample_kb();
    let reply = dispatch(&kb, &event("fury warrior route for hoa"), "!").unwrap();
    let Reply::Guide { class, spec, links } = reply else {
        panic!("expected guide reply");
    };
    assert_eq!((class.as_str(), spec.as_str()), ("warrior", "fury"));
    assert_eq!(links.get(&Provider::Wowhead).unwrap(), "https://wh/fury");
}

#[test]
fn test_dispatch_dungeon_before_boss() {
    let kb = sample_kb();
    let reply = dispatch(&kb, &event("hoa then vexie"), "!").unwrap();
    assert_eq!(
        reply,
        Reply::Dungeon {
            name: "Halls of Atonement".to_string(),
            url: "https://route/hoa".to_string(),
        }
    );
}

#[test]
fn test_dispatch_skips_command_prefixed_text() {
    let kb = sample_kb();
    assert_eq!(dispatch(&kb, &event("!guide warrior fury"), "!"), None);
}

#[test]
fn test_dispatch_skips_self_authored_messages() {
    let kb = sample_kb();
    let own = MessageEvent {
        text: "fury warrior",
        authored_by_self: true,
    };
    assert_eq!(dispatch(&kb, &own, "!"), None);
}

#[test]
fn test_dispatch_unlinked_hit_falls_through() {
    // The dungeon hit has no URL, so the boss category answers instead.
    let routes = yaml("dungeons:\n  hoa:\n    name: Halls of Atonement\n");
    let raid = yaml("bosses:\n  vexie:\n    name: Vexie\n    url: https://raid/vexie\n");
    let kb = KnowledgeBase::build(&Value::Null, &routes, &raid, &Value::Null);

    let reply = dispatch(&kb, &event("hoa first, vexie after"), "!").unwrap();
    assert_eq!(
        reply,
        Reply::Boss {
            name: "Vexie".to_string(),
            url: "https://raid/vexie".to_string(),
        }
    );
}

#[test]
fn test_dispatch_no_mention_no_reply() {
    let kb = sample_kb();
    assert_eq!(dispatch(&kb, &event("hello there"), "!"), None);
}
