//! Core library for hero-scaffold.
//!
//! Scaffolds boilerplate for a Bevy game workspace. A [`catalog::Pattern`] creates new
//! files from templates and edits existing ones through [`catalog::Matcher`]s: the
//! current file is cut at literal anchors ([`splitter`]) into a [`segments::SegmentMap`],
//! and a template reassembles the segments around the inserted lines.
//!
//! Nothing here parses Rust or TOML. Anchors are plain substrings, and a missing
//! anchor aborts the run before any file is written.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generate;
pub mod naming;
pub mod segments;
pub mod splitter;
pub mod templates;
