//! Citation parsing and resolution for AI-generated analysis text.
//!
//! `parser` segments the text, `resolver` maps a citation to a file of the
//! RFP, `page` extracts the cited page, `origin` classifies source labels
//! for badges, and `render` composes the first three into the node tree the
//! view renders. Everything in this tree is pure and synchronous.

pub mod origin;
pub mod page;
pub mod parser;
pub mod render;
pub mod resolver;
