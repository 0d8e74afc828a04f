// SPDX-License-Identifier: GPL-3.0-only

//! Content classification for assistant message bodies.
//!
//! A study-assistant reply arrives as an untyped string. It may be JSON
//! conforming to one of four known schemas (to-do list, quiz, flashcard
//! deck, schedule), JSON matching none of them, a quiz written in loose
//! Markdown, or plain prose. [`classify`] decides which, and parses the
//! structured shapes into typed models.
//!
//! Classification never fails: every input string maps to some
//! [`Content`] variant. JSON that will not parse and text with no quiz
//! markers are routing outcomes, not errors.
//!
//! # Example
//!
//! ```
//! use sa2txt::classifier::{classify, Content};
//!
//! let json = r#"{"deck_title":"Cell Biology","cards":[{"term":"Mitosis","definition":"Cell division"}]}"#;
//!
//! match classify(json) {
//!     Content::FlashcardDeck(deck) => assert_eq!(deck.deck_title, "Cell Biology"),
//!     other => panic!("expected a flashcard deck, got {:?}", other.kind()),
//! }
//! ```

use crate::markdown_quiz::{self, MarkdownQuiz};
use serde::Deserialize;
use std::fmt;

/// The recognized content shapes, without their payloads.
///
/// Useful for labeling and dispatch where the parsed model is not needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// JSON to-do list (`list_title` + `tasks`).
    TodoList,
    /// JSON quiz (`quiz_title` + `questions`).
    QuizJson,
    /// JSON flashcard deck (`deck_title` + `cards`).
    FlashcardDeck,
    /// JSON schedule (`schedule_title` + `day` + `activities`).
    Schedule,
    /// Quiz recovered from Markdown text.
    QuizMarkdown,
    /// Valid JSON matching none of the four schemas.
    RawJson,
    /// Neither JSON nor a recognizable quiz.
    Unstructured,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TodoList => "todo-list",
            Self::QuizJson => "quiz",
            Self::FlashcardDeck => "flashcard-deck",
            Self::Schedule => "schedule",
            Self::QuizMarkdown => "markdown-quiz",
            Self::RawJson => "json",
            Self::Unstructured => "text",
        })
    }
}

/// A classified message body: the content kind together with its parsed
/// model.
///
/// Produced by [`classify`] and consumed by both the renderer and the
/// export formatter, so key-sniffing happens in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// A to-do list.
    TodoList(TodoList),
    /// A quiz from the JSON schema, possibly with answers and explanations.
    QuizJson(Quiz),
    /// A flashcard deck.
    FlashcardDeck(FlashcardDeck),
    /// A daily schedule.
    Schedule(Schedule),
    /// A quiz recovered from Markdown; never carries answers.
    QuizMarkdown(MarkdownQuiz),
    /// Valid JSON with no recognized key set, kept as an opaque value.
    RawJson(serde_json::Value),
    /// Plain prose; the caller falls back to generic rich-text rendering.
    Unstructured,
}

impl Content {
    /// The kind of this content, without the payload.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::TodoList(_) => ContentKind::TodoList,
            Self::QuizJson(_) => ContentKind::QuizJson,
            Self::FlashcardDeck(_) => ContentKind::FlashcardDeck,
            Self::Schedule(_) => ContentKind::Schedule,
            Self::QuizMarkdown(_) => ContentKind::QuizMarkdown,
            Self::RawJson(_) => ContentKind::RawJson,
            Self::Unstructured => ContentKind::Unstructured,
        }
    }
}

/// A to-do list from the JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoList {
    /// The list title (e.g. "Weekly Study Tasks").
    pub list_title: String,

    /// The tasks, in order.
    #[serde(default)]
    pub tasks: Vec<TodoTask>,
}

/// Priority value meaning "no priority was given"; suppressed in output.
pub const NO_PRIORITY: &str = "Not specified";

/// Due-date value meaning "no due date was given"; suppressed in output.
pub const NO_DUE_DATE: &str = "No due date";

/// A single task in a to-do list.
///
/// `priority` and `due_date` use sentinel strings rather than absence:
/// [`NO_PRIORITY`] and [`NO_DUE_DATE`] mean "leave this field out" at
/// render and export time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoTask {
    /// The full task description.
    #[serde(default)]
    pub task_description: String,

    /// The task priority (e.g. "High"), or the [`NO_PRIORITY`] sentinel.
    #[serde(default)]
    pub priority: String,

    /// The due date, or the [`NO_DUE_DATE`] sentinel.
    #[serde(default)]
    pub due_date: String,
}

impl TodoTask {
    /// The priority, unless it is empty or the [`NO_PRIORITY`] sentinel.
    #[must_use]
    pub fn given_priority(&self) -> Option<&str> {
        given(&self.priority, NO_PRIORITY)
    }

    /// The due date, unless it is empty or the [`NO_DUE_DATE`] sentinel.
    #[must_use]
    pub fn given_due_date(&self) -> Option<&str> {
        given(&self.due_date, NO_DUE_DATE)
    }
}

/// Folds sentinel and empty field values into `None`.
fn given<'a>(field: &'a str, sentinel: &str) -> Option<&'a str> {
    (!field.is_empty() && field != sentinel).then_some(field)
}

/// A quiz from the JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quiz {
    /// The quiz title.
    pub quiz_title: String,

    /// The questions, in order.
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// A single question in a JSON quiz.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizQuestion {
    /// The complete question text.
    #[serde(default)]
    pub question_text: String,

    /// Multiple-choice options; empty for short-answer questions.
    #[serde(default)]
    pub options: Vec<String>,

    /// The correct answer, when the assistant provided one.
    #[serde(default)]
    pub correct_answer: Option<String>,

    /// Why the answer is correct, when provided.
    #[serde(default)]
    pub explanation: Option<String>,
}

/// A flashcard deck from the JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlashcardDeck {
    /// The deck title.
    pub deck_title: String,

    /// The cards, in order.
    #[serde(default)]
    pub cards: Vec<Flashcard>,
}

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Flashcard {
    /// The front of the card.
    #[serde(default)]
    pub term: String,

    /// The back of the card.
    #[serde(default)]
    pub definition: String,
}

/// A daily schedule from the JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Schedule {
    /// The schedule title.
    pub schedule_title: String,

    /// The day or date this schedule applies to.
    #[serde(default)]
    pub day: String,

    /// The scheduled activities, in order.
    #[serde(default)]
    pub activities: Vec<ScheduleActivity>,
}

/// A single scheduled activity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleActivity {
    /// The scheduled time (e.g. "10:00 AM - 11:30 AM").
    #[serde(default)]
    pub time_slot: String,

    /// The activity being performed.
    #[serde(default)]
    pub activity_description: String,
}

/// The four JSON key sets, in precedence order. When an object satisfies
/// two key sets at once, the earlier-listed schema wins.
const SCHEMA_KEYS: [(&[&str], fn(serde_json::Value) -> Option<Content>); 4] = [
    (&["list_title", "tasks"], |v| {
        serde_json::from_value(v).ok().map(Content::TodoList)
    }),
    (&["quiz_title", "questions"], |v| {
        serde_json::from_value(v).ok().map(Content::QuizJson)
    }),
    (&["deck_title", "cards"], |v| {
        serde_json::from_value(v).ok().map(Content::FlashcardDeck)
    }),
    (&["schedule_title", "day", "activities"], |v| {
        serde_json::from_value(v).ok().map(Content::Schedule)
    }),
];

/// Classifies a raw assistant message body.
///
/// The string is first tried as JSON. On success, the object's top-level
/// keys are checked against the four schemas in precedence order (to-do
/// list, quiz, flashcard deck, schedule); the first match is parsed into
/// its typed model, and JSON matching no schema is kept as [`Content::RawJson`].
/// On JSON parse failure, the Markdown quiz scanner takes over; text with
/// no recognizable questions is [`Content::Unstructured`].
///
/// Pure and deterministic: the same string always classifies the same way.
#[must_use]
pub fn classify(content: &str) -> Content {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(value) => classify_json(value),
        Err(_) => markdown_quiz::parse_markdown_quiz(content)
            .map_or(Content::Unstructured, Content::QuizMarkdown),
    }
}

/// Routes a parsed JSON value by top-level key presence.
fn classify_json(value: serde_json::Value) -> Content {
    let Some(object) = value.as_object() else {
        return Content::RawJson(value);
    };

    for (keys, parse) in SCHEMA_KEYS {
        if keys.iter().all(|key| object.contains_key(*key)) {
            // Key set matched but the value shapes did not: schema
            // mismatch, which routes to RawJson rather than erroring.
            return parse(value.clone()).unwrap_or(Content::RawJson(value));
        }
    }

    Content::RawJson(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_todo_list() {
        let json = r#"{
            "list_title": "Finals Week",
            "tasks": [
                {"task_description": "Review chapter 5", "priority": "High", "due_date": "Friday"}
            ]
        }"#;

        match classify(json) {
            Content::TodoList(list) => {
                assert_eq!(list.list_title, "Finals Week");
                assert_eq!(list.tasks.len(), 1);
                assert_eq!(list.tasks[0].priority, "High");
            }
            other => panic!("expected TodoList, got {:?}", other.kind()),
        }
    }

    #[test]
    fn classifies_quiz_json() {
        let json = r#"{
            "quiz_title": "Biology Basics",
            "questions": [{
                "question_text": "What is mitosis?",
                "options": ["Cell division", "Protein synthesis"],
                "correct_answer": "Cell division",
                "explanation": "Mitosis splits one cell into two."
            }]
        }"#;

        match classify(json) {
            Content::QuizJson(quiz) => {
                assert_eq!(quiz.quiz_title, "Biology Basics");
                assert_eq!(
                    quiz.questions[0].correct_answer.as_deref(),
                    Some("Cell division")
                );
            }
            other => panic!("expected QuizJson, got {:?}", other.kind()),
        }
    }

    #[test]
    fn quiz_optional_fields_default() {
        let json = r#"{"quiz_title": "Short", "questions": [{"question_text": "Explain osmosis."}]}"#;

        match classify(json) {
            Content::QuizJson(quiz) => {
                assert!(quiz.questions[0].options.is_empty());
                assert!(quiz.questions[0].correct_answer.is_none());
                assert!(quiz.questions[0].explanation.is_none());
            }
            other => panic!("expected QuizJson, got {:?}", other.kind()),
        }
    }

    #[test]
    fn classifies_flashcard_deck() {
        let json = r#"{"deck_title":"Cell Biology","cards":[{"term":"Mitosis","definition":"Cell division"}]}"#;

        match classify(json) {
            Content::FlashcardDeck(deck) => {
                assert_eq!(deck.deck_title, "Cell Biology");
                assert_eq!(deck.cards[0].term, "Mitosis");
            }
            other => panic!("expected FlashcardDeck, got {:?}", other.kind()),
        }
    }

    #[test]
    fn classifies_schedule() {
        let json = r#"{
            "schedule_title": "Study Day",
            "day": "Monday",
            "activities": [{"time_slot": "9:00 AM", "activity_description": "CS 401 Lecture"}]
        }"#;

        match classify(json) {
            Content::Schedule(schedule) => {
                assert_eq!(schedule.day, "Monday");
                assert_eq!(schedule.activities[0].time_slot, "9:00 AM");
            }
            other => panic!("expected Schedule, got {:?}", other.kind()),
        }
    }

    #[test]
    fn precedence_prefers_todo_over_quiz() {
        // Satisfies both the to-do and quiz key sets; the to-do schema is
        // listed first and wins.
        let json = r#"{
            "list_title": "T", "tasks": [],
            "quiz_title": "Q", "questions": []
        }"#;

        assert_eq!(classify(json).kind(), ContentKind::TodoList);
    }

    #[test]
    fn precedence_prefers_quiz_over_deck() {
        let json = r#"{
            "quiz_title": "Q", "questions": [],
            "deck_title": "D", "cards": []
        }"#;

        assert_eq!(classify(json).kind(), ContentKind::QuizJson);
    }

    #[test]
    fn unrecognized_json_is_raw() {
        let content = classify(r#"{"recipient": "x@y.edu", "subject": "Hi", "body": "..."}"#);

        match content {
            Content::RawJson(value) => assert_eq!(value["subject"], "Hi"),
            other => panic!("expected RawJson, got {:?}", other.kind()),
        }
    }

    #[test]
    fn non_object_json_is_raw() {
        assert_eq!(classify("[1, 2, 3]").kind(), ContentKind::RawJson);
        assert_eq!(classify("\"just a string\"").kind(), ContentKind::RawJson);
        assert_eq!(classify("42").kind(), ContentKind::RawJson);
    }

    #[test]
    fn matching_keys_with_wrong_shapes_is_raw() {
        // Key set matches the to-do schema but tasks is not an array.
        let content = classify(r#"{"list_title": "T", "tasks": "oops"}"#);

        assert_eq!(content.kind(), ContentKind::RawJson);
    }

    #[test]
    fn non_json_quiz_text_is_markdown_quiz() {
        let text = "**Myopia Quiz**\n1. What causes myopia?\na) Genetics\nb) Diet\nAnswer: a";

        match classify(text) {
            Content::QuizMarkdown(quiz) => {
                assert_eq!(quiz.title.as_deref(), Some("Myopia Quiz"));
                assert_eq!(quiz.questions[0].options, vec!["Genetics", "Diet"]);
            }
            other => panic!("expected QuizMarkdown, got {:?}", other.kind()),
        }
    }

    #[test]
    fn prose_is_unstructured() {
        assert_eq!(
            classify("hello, how are you?").kind(),
            ContentKind::Unstructured
        );
    }

    #[test]
    fn truncated_json_falls_through_to_unstructured() {
        // Malformed JSON with no quiz markers ends up unstructured.
        let content = classify(r#"{"quiz_title": "X", "questions": ["#);

        assert_eq!(content.kind(), ContentKind::Unstructured);
    }

    #[test]
    fn classify_is_idempotent() {
        let inputs = [
            r#"{"deck_title":"D","cards":[]}"#,
            "1. Q?\na) X",
            "plain text",
            "[1]",
        ];
        for input in inputs {
            assert_eq!(classify(input), classify(input));
        }
    }
}
