// SPDX-License-Identifier: GPL-3.0-only

//! Presentation trees for classified content.
//!
//! This module projects a [`Content`] value into an abstract structured
//! view for a UI layer to paint: a titled document of blocks for the
//! structured shapes, pretty-printed text for unrecognized JSON, and an
//! explicit "no structured view" signal for prose, where the caller falls
//! back to its generic rich-text renderer.
//!
//! Sentinel field values (`"Not specified"` priorities, `"No due date"`
//! dates) are resolved here: they become absent fields in the tree, so
//! the UI never has to know about them.
//!
//! # Example
//!
//! ```
//! use sa2txt::classifier::classify;
//! use sa2txt::renderer::{render, Presentation};
//!
//! let content = classify(r#"{"deck_title":"Cells","cards":[]}"#);
//!
//! match render(&content) {
//!     Presentation::Structured(doc) => assert_eq!(doc.title, "Cells"),
//!     _ => panic!("expected a structured view"),
//! }
//! ```

use crate::classifier::Content;

/// Title used for Markdown quizzes that did not carry one.
const FALLBACK_QUIZ_TITLE: &str = "Quiz";

/// The structured view of a classified message, ready for a UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// A titled document of typed blocks.
    Structured(Document),

    /// Pretty-printed JSON with no further structure.
    Json(String),

    /// No structured view exists; the caller should fall back to its
    /// generic rich-text renderer.
    Unstructured,
}

/// A titled document: the common shape of all structured views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The document title.
    pub title: String,

    /// A subtitle line, used for the schedule's day label.
    pub subtitle: Option<String>,

    /// The document body, in order.
    pub blocks: Vec<Block>,
}

/// One entry in a structured document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A to-do task. Sentinel priority and due-date values have already
    /// been folded into `None`.
    Task {
        /// 1-based position in the list.
        number: usize,
        /// The task description.
        description: String,
        /// The priority, when one was given.
        priority: Option<String>,
        /// The due date, when one was given.
        due_date: Option<String>,
    },

    /// A quiz question. Markdown-sourced questions never have an answer
    /// or explanation.
    Question {
        /// 1-based question number.
        number: usize,
        /// The question text.
        text: String,
        /// Multiple-choice options; empty for short-answer questions.
        options: Vec<String>,
        /// The correct answer, when known.
        answer: Option<String>,
        /// The explanation, when known.
        explanation: Option<String>,
    },

    /// A flashcard.
    Card {
        /// 1-based card number.
        number: usize,
        /// The front of the card.
        term: String,
        /// The back of the card.
        definition: String,
    },

    /// A schedule row.
    Activity {
        /// The scheduled time.
        time_slot: String,
        /// The activity description.
        description: String,
    },
}

/// Projects classified content into its presentation tree.
///
/// Pure: the same content always renders to the same tree, and rendering
/// never fails for any model [`crate::classifier::classify`] can produce.
#[must_use]
pub fn render(content: &Content) -> Presentation {
    match content {
        Content::TodoList(list) => Presentation::Structured(Document {
            title: list.list_title.clone(),
            subtitle: None,
            blocks: list
                .tasks
                .iter()
                .enumerate()
                .map(|(i, task)| Block::Task {
                    number: i + 1,
                    description: task.task_description.clone(),
                    priority: task.given_priority().map(str::to_owned),
                    due_date: task.given_due_date().map(str::to_owned),
                })
                .collect(),
        }),
        Content::QuizJson(quiz) => Presentation::Structured(Document {
            title: quiz.quiz_title.clone(),
            subtitle: None,
            blocks: quiz
                .questions
                .iter()
                .enumerate()
                .map(|(i, q)| Block::Question {
                    number: i + 1,
                    text: q.question_text.clone(),
                    options: q.options.clone(),
                    answer: q.correct_answer.clone(),
                    explanation: q.explanation.clone(),
                })
                .collect(),
        }),
        Content::FlashcardDeck(deck) => Presentation::Structured(Document {
            title: deck.deck_title.clone(),
            subtitle: None,
            blocks: deck
                .cards
                .iter()
                .enumerate()
                .map(|(i, card)| Block::Card {
                    number: i + 1,
                    term: card.term.clone(),
                    definition: card.definition.clone(),
                })
                .collect(),
        }),
        Content::Schedule(schedule) => Presentation::Structured(Document {
            title: schedule.schedule_title.clone(),
            subtitle: Some(schedule.day.clone()),
            blocks: schedule
                .activities
                .iter()
                .map(|activity| Block::Activity {
                    time_slot: activity.time_slot.clone(),
                    description: activity.activity_description.clone(),
                })
                .collect(),
        }),
        Content::QuizMarkdown(quiz) => Presentation::Structured(Document {
            title: quiz
                .title
                .clone()
                .unwrap_or_else(|| FALLBACK_QUIZ_TITLE.to_owned()),
            subtitle: None,
            blocks: quiz
                .questions
                .iter()
                .enumerate()
                .map(|(i, q)| Block::Question {
                    number: i + 1,
                    text: q.text.clone(),
                    options: q.options.clone(),
                    answer: None,
                    explanation: None,
                })
                .collect(),
        }),
        Content::RawJson(value) => Presentation::Json(pretty_json(value)),
        Content::Unstructured => Presentation::Unstructured,
    }
}

/// Pretty-prints a JSON value with 2-space indentation.
///
/// Serializing a `serde_json::Value` cannot fail in practice; the compact
/// form is kept as a harmless fallback.
fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    fn structured(content: &Content) -> Document {
        match render(content) {
            Presentation::Structured(doc) => doc,
            other => panic!("expected Structured, got {other:?}"),
        }
    }

    #[test]
    fn renders_todo_list_with_all_fields() {
        let content = classify(
            r#"{"list_title":"Week","tasks":[
                {"task_description":"Read ch. 5","priority":"High","due_date":"Friday"}
            ]}"#,
        );
        let doc = structured(&content);

        assert_eq!(doc.title, "Week");
        assert_eq!(
            doc.blocks[0],
            Block::Task {
                number: 1,
                description: "Read ch. 5".into(),
                priority: Some("High".into()),
                due_date: Some("Friday".into()),
            }
        );
    }

    #[test]
    fn suppresses_sentinel_priority_and_due_date() {
        let content = classify(
            r#"{"list_title":"Week","tasks":[
                {"task_description":"Relax","priority":"Not specified","due_date":"No due date"}
            ]}"#,
        );
        let doc = structured(&content);

        let Block::Task {
            priority, due_date, ..
        } = &doc.blocks[0]
        else {
            panic!("expected a task block");
        };
        assert!(priority.is_none());
        assert!(due_date.is_none());
    }

    #[test]
    fn renders_quiz_with_answer_and_explanation() {
        let content = classify(
            r#"{"quiz_title":"Bio","questions":[{
                "question_text":"What is mitosis?",
                "options":["Cell division","Protein synthesis"],
                "correct_answer":"Cell division",
                "explanation":"One cell becomes two."
            }]}"#,
        );
        let doc = structured(&content);

        assert_eq!(
            doc.blocks[0],
            Block::Question {
                number: 1,
                text: "What is mitosis?".into(),
                options: vec!["Cell division".into(), "Protein synthesis".into()],
                answer: Some("Cell division".into()),
                explanation: Some("One cell becomes two.".into()),
            }
        );
    }

    #[test]
    fn renders_flashcard_deck() {
        let content = classify(
            r#"{"deck_title":"Cells","cards":[
                {"term":"Mitosis","definition":"Cell division"},
                {"term":"Meiosis","definition":"Gamete formation"}
            ]}"#,
        );
        let doc = structured(&content);

        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(
            doc.blocks[1],
            Block::Card {
                number: 2,
                term: "Meiosis".into(),
                definition: "Gamete formation".into(),
            }
        );
    }

    #[test]
    fn renders_schedule_with_day_subtitle() {
        let content = classify(
            r#"{"schedule_title":"Study Day","day":"Monday","activities":[
                {"time_slot":"9:00 AM","activity_description":"Lecture"}
            ]}"#,
        );
        let doc = structured(&content);

        assert_eq!(doc.subtitle.as_deref(), Some("Monday"));
        assert_eq!(
            doc.blocks[0],
            Block::Activity {
                time_slot: "9:00 AM".into(),
                description: "Lecture".into(),
            }
        );
    }

    #[test]
    fn markdown_quiz_has_no_answers() {
        let content = classify("**Myopia Quiz**\n1. What causes myopia?\na) Genetics\nAnswer: a");
        let doc = structured(&content);

        assert_eq!(doc.title, "Myopia Quiz");
        let Block::Question {
            answer,
            explanation,
            ..
        } = &doc.blocks[0]
        else {
            panic!("expected a question block");
        };
        assert!(answer.is_none());
        assert!(explanation.is_none());
    }

    #[test]
    fn markdown_quiz_title_falls_back() {
        let content = classify("1. Lone question?");
        let doc = structured(&content);

        assert_eq!(doc.title, "Quiz");
    }

    #[test]
    fn raw_json_is_pretty_printed() {
        let content = classify(r#"{"subject":"Hi","body":"..."}"#);

        match render(&content) {
            Presentation::Json(text) => {
                assert!(text.contains("\n  \"body\": \"...\""));
            }
            other => panic!("expected Json, got {other:?}"),
        }
    }

    #[test]
    fn unstructured_has_no_view() {
        assert_eq!(
            render(&classify("hello, how are you?")),
            Presentation::Unstructured
        );
    }

    #[test]
    fn rendering_never_panics_on_classifier_output() {
        let inputs = [
            r#"{"list_title":"T","tasks":[]}"#,
            r#"{"quiz_title":"Q","questions":[]}"#,
            r#"{"deck_title":"D","cards":[]}"#,
            r#"{"schedule_title":"S","day":"","activities":[]}"#,
            "1. Q?",
            "[null, 1, \"x\"]",
            "free text",
        ];
        for input in inputs {
            let _ = render(&classify(input));
        }
    }
}
