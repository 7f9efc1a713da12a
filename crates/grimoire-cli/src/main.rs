//! CLI binary for grimoire: look up guides, routes, and bosses, list
//! suggestions, and run the inbound-message pipeline on sample text.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use grimoire_core::config::GrimoireConfig;
use grimoire_core::dispatch::{MessageEvent, Reply, dispatch};
use grimoire_core::kb::{KnowledgeBase, MurlocEntry, title_case};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grimoire", about = "WoW guide knowledge-base lookup")]
struct Cli {
    /// Mappings directory (overrides grimoire.toml and GRIMOIRE_MAPPINGS_DIR)
    #[arg(short, long, global = true)]
    mappings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up class/spec guides
    Guide { class: String, spec: String },

    /// Show the Mythic+ route link for a dungeon
    Route {
        /// Dungeon slug (use `suggest dungeon` to find one)
        slug: String,
    },

    /// Show the guide link for a raid boss
    Raid {
        /// Boss slug
        slug: String,
    },

    /// Show a murloc class-guide entry
    Murloc {
        /// Entry slug
        slug: String,
    },

    /// List suggestions for a partial input
    Suggest {
        /// What to suggest: class, spec, dungeon, boss, murloc
        kind: String,

        /// Partial input (empty matches everything)
        #[arg(default_value = "")]
        partial: String,

        /// Previously chosen class (required for spec suggestions)
        #[arg(long)]
        class: Option<String>,
    },

    /// Scan a text blob for known mentions
    Scan { text: String },

    /// Run the full inbound-message pipeline on a text blob
    Simulate {
        text: String,

        /// Treat the message as authored by the bot itself
        #[arg(long)]
        self_authored: bool,
    },

    /// Show index statistics
    Info,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config =
        GrimoireConfig::load(Path::new(".")).context("failed to load grimoire.toml")?;
    let mappings_dir = cli.mappings.unwrap_or(config.mappings.dir);
    let kb = KnowledgeBase::load_dir(&mappings_dir)?;
    tracing::debug!("loaded knowledge base from {}", mappings_dir.display());

    match cli.command {
        Commands::Guide { class, spec } => cmd_guide(&kb, &class, &spec),
        Commands::Route { slug } => cmd_route(&kb, &slug),
        Commands::Raid { slug } => cmd_raid(&kb, &slug),
        Commands::Murloc { slug } => cmd_murloc(&kb, &slug),
        Commands::Suggest {
            kind,
            partial,
            class,
        } => cmd_suggest(&kb, &kind, &partial, class.as_deref()),
        Commands::Scan { text } => cmd_scan(&kb, &text),
        Commands::Simulate {
            text,
            self_authored,
        } => cmd_simulate(&kb, &text, self_authored, &config.chat.command_prefix),
        Commands::Info => cmd_info(&kb),
    }
}

fn cmd_guide(kb: &KnowledgeBase, class: &str, spec: &str) -> Result<()> {
    match kb.resolve_guide(class, spec) {
        Ok(links) => {
            println!("Guides: {} {}", title_case(class), title_case(spec));
            for (provider, url) in links {
                println!("  {}: {}", provider.display_name(), url);
            }
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn cmd_route(kb: &KnowledgeBase, slug: &str) -> Result<()> {
    match kb.resolve_dungeon(slug) {
        Ok(entry) => {
            println!("M+ Route: {}", entry.name);
            match &entry.url {
                Some(url) => println!("  {url}"),
                None => println!("  (no route link)"),
            }
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn cmd_raid(kb: &KnowledgeBase, slug: &str) -> Result<()> {
    match kb.resolve_boss(slug) {
        Ok(entry) => {
            println!("Raid Boss: {}", entry.name);
            match &entry.url {
                Some(url) => println!("  {url}"),
                None => println!("  (no guide link)"),
            }
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn cmd_murloc(kb: &KnowledgeBase, slug: &str) -> Result<()> {
    match kb.resolve_murloc(slug) {
        Ok(MurlocEntry::Text(text)) => println!("{text}"),
        Ok(MurlocEntry::Link { name, url }) => {
            println!("{name}");
            if let Some(url) = url {
                println!("  {url}");
            }
        }
        Ok(MurlocEntry::SpecLinks(links)) => {
            println!("Class Guides: {}", title_case(slug));
            for (spec, url) in links {
                println!("  {}: {}", title_case(spec), url);
            }
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn cmd_suggest(kb: &KnowledgeBase, kind: &str, partial: &str, class: Option<&str>) -> Result<()> {
    let suggestions = match kind {
        "class" => kb.suggest_classes(partial),
        "spec" => {
            let Some(class) = class else {
                bail!("spec suggestions need --class");
            };
            kb.suggest_specs(class, partial)
        }
        "dungeon" => kb.suggest_dungeons(partial),
        "boss" => kb.suggest_bosses(partial),
        "murloc" => kb.suggest_murlocs(partial),
        other => bail!("unknown suggestion kind `{other}` (class, spec, dungeon, boss, murloc)"),
    };

    if suggestions.is_empty() {
        println!("(no suggestions)");
    }
    for s in suggestions {
        println!("{}  [{}]", s.name, s.value);
    }
    Ok(())
}

fn cmd_scan(kb: &KnowledgeBase, text: &str) -> Result<()> {
    let hits = kb.scan_mentions(text);
    if hits.is_empty() {
        println!("(no mentions)");
        return Ok(());
    }
    if let Some(key) = hits.guide {
        println!("guide: {} {}", key.class(), key.spec());
    }
    if let Some(slug) = hits.dungeon {
        println!("dungeon: {slug}");
    }
    if let Some(slug) = hits.boss {
        println!("boss: {slug}");
    }
    Ok(())
}

fn cmd_simulate(kb: &KnowledgeBase, text: &str, self_authored: bool, prefix: &str) -> Result<()> {
    let event = MessageEvent {
        text,
        authored_by_self: self_authored,
    };
    match dispatch(kb, &event, prefix) {
        Some(Reply::Guide { class, spec, links }) => {
            println!("Guides: {} {}", title_case(&class), title_case(&spec));
            for (provider, url) in &links {
                println!("  {}: {}", provider.display_name(), url);
            }
        }
        Some(Reply::Dungeon { name, url }) => println!("M+ Route: {name}\n  {url}"),
        Some(Reply::Boss { name, url }) => println!("Raid Boss: {name}\n  {url}"),
        None => println!("(no reply)"),
    }
    Ok(())
}

fn cmd_info(kb: &KnowledgeBase) -> Result<()> {
    println!("guide pairs:    {}", kb.guide_count());
    println!("classes:        {}", kb.classes().len());
    println!("dungeons:       {}", kb.dungeon_count());
    println!("bosses:         {}", kb.boss_count());
    println!("murloc entries: {}", kb.murloc_count());
    Ok(())
}
