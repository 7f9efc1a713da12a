//! Core knowledge-base engine for grimoire.
//!
//! Builds canonical lookup indices ([`kb::KnowledgeBase`]) from loosely
//! structured YAML source tables, and answers three kinds of questions
//! against them: exact resolution, capped suggestion lists for input
//! narrowing, and heuristic mention scanning over free-form chat text.

pub mod config;
pub mod dispatch;
pub mod kb;
pub mod resolve;
pub mod scan;
pub mod source;
pub mod suggest;
