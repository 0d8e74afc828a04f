// SPDX-License-Identifier: GPL-3.0-only

//! Heuristic quiz recognition for Markdown-ish assistant replies.
//!
//! Assistant responses that are not JSON sometimes describe a quiz in loose
//! Markdown: a bolded title, numbered questions, lettered or bulleted
//! options, and inline `Answer:` lines. This module scans such text line by
//! line and recovers the quiz structure. Answers are deliberately discarded;
//! the Markdown path never carries correctness data.
//!
//! # Example
//!
//! ```
//! use sa2txt::markdown_quiz::parse_markdown_quiz;
//!
//! let text = "**Myopia Quiz**\n1. What causes myopia?\na) Genetics\nb) Diet\nAnswer: a";
//! let quiz = parse_markdown_quiz(text).unwrap();
//!
//! assert_eq!(quiz.title.as_deref(), Some("Myopia Quiz"));
//! assert_eq!(quiz.questions[0].options, vec!["Genetics", "Diet"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// A numbered question line, e.g. `1. What causes myopia?`.
static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*(.+)$").unwrap());

/// A lettered option line, e.g. `a) Genetics` or `B. Diet`.
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-dA-D][).]\s*(.+)$").unwrap());

/// A quiz recovered from Markdown text.
///
/// Unlike the JSON quiz schema, Markdown quizzes never carry correct answers
/// or explanations; any inline `Answer:` lines are dropped during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownQuiz {
    /// The quiz title, if a title line was found before the first question.
    pub title: Option<String>,

    /// The recognized questions, in source order. Never empty.
    pub questions: Vec<MarkdownQuestion>,
}

/// A single question recovered from Markdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownQuestion {
    /// The question text, with wrapped source lines rejoined by spaces.
    pub text: String,

    /// The answer options, in source order. May be empty for short-answer
    /// questions.
    pub options: Vec<String>,
}

/// Scanner state: either looking for the next question, or accumulating one.
enum Scan {
    Searching,
    InQuestion(MarkdownQuestion),
}

/// Scans `text` for a Markdown-style quiz.
///
/// Each non-blank line is matched against, in order: a title line (only
/// until a title is found), a numbered question, a lettered option, a
/// bulleted option, and finally free text, which continues the current
/// question unless it is an `Answer:` line. Lines that match nothing and
/// have no open question are ignored.
///
/// Returns `None` when no questions were recognized, so callers never see
/// an empty quiz.
#[must_use]
pub fn parse_markdown_quiz(text: &str) -> Option<MarkdownQuiz> {
    let mut title: Option<String> = None;
    let mut state = Scan::Searching;
    let mut questions = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if title.is_none()
            && let Some(found) = title_line(line)
        {
            title = Some(found);
            continue;
        }

        if let Some(caps) = QUESTION_LINE.captures(line) {
            if let Scan::InQuestion(done) = std::mem::replace(&mut state, Scan::Searching) {
                questions.push(done);
            }
            state = Scan::InQuestion(MarkdownQuestion {
                text: caps[1].trim().to_owned(),
                options: Vec::new(),
            });
            continue;
        }

        // Everything below only applies while a question is open.
        let Scan::InQuestion(question) = &mut state else {
            continue;
        };

        if let Some(caps) = OPTION_LINE.captures(line) {
            question.options.push(caps[1].trim().to_owned());
        } else if let Some(rest) = bullet_option(line) {
            question.options.push(rest.to_owned());
        } else if !is_answer_line(line) {
            // Wrapped question text: rejoin with a single space.
            if !question.text.is_empty() {
                question.text.push(' ');
            }
            question.text.push_str(line);
        }
    }

    if let Scan::InQuestion(done) = state {
        questions.push(done);
    }

    if questions.is_empty() {
        None
    } else {
        Some(MarkdownQuiz { title, questions })
    }
}

/// Recognizes a title line: after stripping emphasis markers and whitespace,
/// the text mentions "quiz" (case-insensitively). Returns the stripped text.
fn title_line(line: &str) -> Option<String> {
    let stripped = line.trim_matches(|c: char| matches!(c, '*' | '_' | '#') || c.is_whitespace());
    if stripped.to_lowercase().contains("quiz") {
        Some(stripped.to_owned())
    } else {
        None
    }
}

/// Recognizes a bulleted option (`- text` or `* text`) and returns the text.
fn bullet_option(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('-').or_else(|| line.strip_prefix('*'))?;
    rest.starts_with(char::is_whitespace).then(|| rest.trim())
}

/// Returns `true` for inline answer lines like `Answer: a` (case-insensitive).
fn is_answer_line(line: &str) -> bool {
    line.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("answer:"))
}
