//! Chain-of-thought reply parsing.
//!
//! Replies produced under the chain-of-thought prompt look like:
//!
//! ```text
//! Step 1: ...
//! Step 2: ...
//! Final Answer: ...
//! ```
//!
//! A step body runs, across line breaks, until the next line starting with
//! `Step ` or `Final Answer: `, or until the end of the text. The final
//! answer runs from its first marker to the end of the text and is always
//! placed after the steps, wherever it appears.

use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;

static STEP_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Step \d+: ").expect("step marker pattern is valid")
});

static STEP_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\nStep |\nFinal Answer: ")
        .expect("step boundary pattern is valid")
});

const FINAL_ANSWER_MARKER: &str = "Final Answer: ";

/// Prefix identifying the final-answer piece.
pub const FINAL_ANSWER_PREFIX: &str = "Final Answer:";

/// A piece of a chain-of-thought reply.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReasoningStep {
    /// A numbered `Step N: ...` block.
    Step(String),
    /// The `Final Answer: ...` block.
    FinalAnswer(String),
}

impl ReasoningStep {
    /// Returns the trimmed text of this piece, marker included.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            ReasoningStep::Step(text) | ReasoningStep::FinalAnswer(text) => {
                text
            }
        }
    }
}

impl Display for ReasoningStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Splits a reply into its steps followed by the final answer, if any.
///
/// Never fails; a reply without markers yields an empty list.
pub fn parse_steps(text: &str) -> Vec<ReasoningStep> {
    let mut steps = Vec::new();

    let mut pos = 0;
    while let Some(marker) = STEP_MARKER.find_at(text, pos) {
        let end = STEP_BOUNDARY
            .find_at(text, marker.end())
            .map_or(text.len(), |boundary| boundary.start());
        let piece = &text[marker.start()..end];
        push_trimmed(&mut steps, ReasoningStep::Step, piece);
        pos = end;
    }

    if let Some(idx) = text.find(FINAL_ANSWER_MARKER) {
        push_trimmed(&mut steps, ReasoningStep::FinalAnswer, &text[idx..]);
    }

    steps
}

#[inline]
fn push_trimmed(
    steps: &mut Vec<ReasoningStep>,
    make: fn(String) -> ReasoningStep,
    piece: &str,
) {
    let piece = piece.trim();
    if !piece.is_empty() {
        steps.push(make(piece.to_owned()));
    }
}

/// Returns the last piece that starts with `Final Answer:`.
pub fn final_answer(steps: &[ReasoningStep]) -> Option<&ReasoningStep> {
    steps
        .iter()
        .rev()
        .find(|step| step.text().starts_with(FINAL_ANSWER_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(steps: &[ReasoningStep]) -> Vec<&str> {
        steps.iter().map(ReasoningStep::text).collect()
    }

    #[test]
    fn test_simple_reply() {
        let steps = parse_steps("Step 1: A\nStep 2: B\nFinal Answer: C");
        assert_eq!(
            texts(&steps),
            ["Step 1: A", "Step 2: B", "Final Answer: C"]
        );
        assert_eq!(
            final_answer(&steps),
            Some(&ReasoningStep::FinalAnswer("Final Answer: C".to_owned()))
        );
    }

    #[test]
    fn test_multiline_bodies() {
        let reply = "Let me see.\n\
                     Step 1: Split the bill\ninto three parts.\n\n\
                     Step 2: Add the tip.\n\
                     Final Answer: 12 each\nand a bit.\n";
        let steps = parse_steps(reply);
        assert_eq!(
            texts(&steps),
            [
                "Step 1: Split the bill\ninto three parts.",
                "Step 2: Add the tip.",
                "Final Answer: 12 each\nand a bit.",
            ]
        );
    }

    #[test]
    fn test_no_markers() {
        let steps = parse_steps("Just an answer.");
        assert!(steps.is_empty());
        assert_eq!(final_answer(&steps), None);
    }

    #[test]
    fn test_steps_without_final_answer() {
        let steps = parse_steps("Step 1: A\nStep 2: B");
        assert_eq!(texts(&steps), ["Step 1: A", "Step 2: B"]);
        assert_eq!(final_answer(&steps), None);
    }

    #[test]
    fn test_inline_marker_does_not_split() {
        // Only markers at the start of a line end a step.
        let steps = parse_steps("Step 1: A then Step 2: B");
        assert_eq!(texts(&steps), ["Step 1: A then Step 2: B"]);
    }

    #[test]
    fn test_final_answer_moved_last() {
        let steps = parse_steps("Final Answer: C\nStep 1: A");
        assert_eq!(
            texts(&steps),
            ["Step 1: A", "Final Answer: C\nStep 1: A"]
        );
        assert_eq!(
            final_answer(&steps).unwrap().text(),
            "Final Answer: C\nStep 1: A"
        );
    }

    #[test]
    fn test_marker_needs_space() {
        let steps = parse_steps("Step 1:A\nFinal Answer:C");
        assert!(steps.is_empty());
    }
}
