// SPDX-License-Identifier: GPL-3.0-only

//! Classify and export study-assistant chat responses.
//!
//! A study assistant replies with untyped text: sometimes JSON following
//! one of four known schemas (to-do list, quiz, flashcard deck, schedule),
//! sometimes a quiz written in loose Markdown, sometimes plain prose. This
//! crate decides which shape a message body has, parses the structured
//! shapes into typed models, and projects them two ways: an abstract
//! presentation tree for on-screen display, and a canonical plain-text
//! document for download.
//!
//! # Overview
//!
//! 1. [`classifier::classify`] maps a raw string to a [`classifier::Content`]
//!    value — this never fails; unparseable input is a routing outcome.
//! 2. [`renderer::render`] projects the content into a presentation tree.
//! 3. [`export::to_plain_text`] independently projects the same content
//!    into the export document.
//!
//! # Example
//!
//! ```
//! use sa2txt::{classifier, export, renderer};
//!
//! let raw = r#"{"quiz_title":"Bio","questions":[{"question_text":"What is mitosis?"}]}"#;
//!
//! let content = classifier::classify(raw);
//! let tree = renderer::render(&content);
//! let text = export::to_plain_text(&content, raw);
//!
//! assert!(text.starts_with("Bio\n===\n"));
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: content-kind decision and the typed schema models
//! - [`markdown_quiz`]: heuristic quiz recovery from Markdown text
//! - [`renderer`]: presentation-tree projection for a UI layer
//! - [`export`]: plain-text export and download filename derivation

#![deny(missing_docs)]

pub mod classifier;
pub mod export;
pub mod markdown_quiz;
pub mod renderer;
