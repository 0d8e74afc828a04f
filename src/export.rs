// SPDX-License-Identifier: GPL-3.0-only

//! Canonical plain-text export for classified content.
//!
//! This module produces the downloadable text document for the four JSON
//! content shapes: a title underlined with `=`, then the entries in a
//! fixed layout per shape. Every other kind (Markdown quizzes, raw JSON,
//! prose) is exported as the original message body, unchanged.
//!
//! The export mirrors the renderer's structure but is independent of it;
//! both consume the classifier's output directly.
//!
//! # Example
//!
//! ```
//! use sa2txt::classifier::classify;
//! use sa2txt::export::to_plain_text;
//!
//! let raw = r#"{"deck_title":"Cell Biology","cards":[{"term":"Mitosis","definition":"Cell division"}]}"#;
//! let text = to_plain_text(&classify(raw), raw);
//!
//! assert!(text.starts_with("Cell Biology\n============\n\nCard 1\n"));
//! ```

use crate::classifier::{Content, FlashcardDeck, Quiz, Schedule, TodoList};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Width of the separator line between exported quiz questions.
const QUESTION_SEPARATOR_WIDTH: usize = 50;

/// Formats classified content as a canonical plain-text document.
///
/// Only the four JSON schemas have a structured export; for any other
/// kind, `raw_content` (the original message body) is returned verbatim.
///
/// Infallible for any model the classifier can produce.
#[must_use]
pub fn to_plain_text(content: &Content, raw_content: &str) -> String {
    match content {
        Content::TodoList(list) => todo_list_text(list),
        Content::QuizJson(quiz) => quiz_text(quiz),
        Content::FlashcardDeck(deck) => deck_text(deck),
        Content::Schedule(schedule) => schedule_text(schedule),
        Content::QuizMarkdown(_) | Content::RawJson(_) | Content::Unstructured => {
            raw_content.to_owned()
        }
    }
}

/// Derives the download filename for an export created at `now`.
///
/// The name embeds an ISO 8601 timestamp at second precision, with `:`
/// and `.` replaced by `-` so the name is safe on every filesystem.
#[must_use]
pub fn export_filename(now: DateTime<Utc>) -> String {
    let stamp = now
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
        .replace([':', '.'], "-");
    format!("study-assistant-response-{stamp}.txt")
}

/// Writes the title followed by a rule of `=` exactly as long as the
/// title, then a blank line.
fn title_rule(out: &mut String, title: &str) {
    writeln!(out, "{title}").unwrap();
    writeln!(out, "{}", "=".repeat(title.chars().count())).unwrap();
    out.push('\n');
}

fn todo_list_text(list: &TodoList) -> String {
    let mut out = String::new();
    title_rule(&mut out, &list.list_title);

    for (i, task) in list.tasks.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, task.task_description).unwrap();
        if let Some(priority) = task.given_priority() {
            writeln!(out, "   Priority: {priority}").unwrap();
        }
        if let Some(due_date) = task.given_due_date() {
            writeln!(out, "   Due: {due_date}").unwrap();
        }
        out.push('\n');
    }

    out
}

fn quiz_text(quiz: &Quiz) -> String {
    let mut out = String::new();
    title_rule(&mut out, &quiz.quiz_title);

    for (i, question) in quiz.questions.iter().enumerate() {
        writeln!(out, "Question {}: {}", i + 1, question.question_text).unwrap();
        out.push('\n');

        for (j, option) in question.options.iter().enumerate() {
            writeln!(out, "   {}. {option}", option_letter(j)).unwrap();
        }
        if !question.options.is_empty() {
            out.push('\n');
        }

        if let Some(answer) = &question.correct_answer {
            writeln!(out, "Answer: {answer}").unwrap();
        }
        if let Some(explanation) = &question.explanation {
            writeln!(out, "Explanation: {explanation}").unwrap();
        }
        out.push('\n');
        writeln!(out, "{}", "-".repeat(QUESTION_SEPARATOR_WIDTH)).unwrap();
        out.push('\n');
    }

    out
}

fn deck_text(deck: &FlashcardDeck) -> String {
    let mut out = String::new();
    title_rule(&mut out, &deck.deck_title);

    for (i, card) in deck.cards.iter().enumerate() {
        writeln!(out, "Card {}", i + 1).unwrap();
        writeln!(out, "Term: {}", card.term).unwrap();
        writeln!(out, "Definition: {}", card.definition).unwrap();
        out.push('\n');
    }

    out
}

fn schedule_text(schedule: &Schedule) -> String {
    let mut out = String::new();
    title_rule(&mut out, &schedule.schedule_title);

    writeln!(out, "{}", schedule.day).unwrap();
    out.push('\n');

    for activity in &schedule.activities {
        writeln!(out, "{}", activity.time_slot).unwrap();
        writeln!(out, "  {}", activity.activity_description).unwrap();
        out.push('\n');
    }

    out
}

/// Option labels: 'A' for the first option, 'B' for the second, and so on.
fn option_letter(index: usize) -> char {
    #[allow(clippy::cast_possible_truncation)]
    let offset = index as u8;
    char::from(b'A'.wrapping_add(offset))
}
