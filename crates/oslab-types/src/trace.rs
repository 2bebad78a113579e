//! The derivation trace returned alongside every verdict.
//!
//! Simulators append blocks to an explicit [`Trace`] value and hand it back
//! as part of their output; there is no ambient accumulator. Rendering joins
//! blocks with blank lines, which is how the derivations read best when
//! printed.

use std::fmt;

use serde::Serialize;

/// An ordered sequence of derivation blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    blocks: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one block.
    pub fn push(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    /// Append every block of another trace, in order.
    pub fn extend(&mut self, other: Trace) {
        self.blocks.extend(other.blocks);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Render the full derivation as text.
    pub fn render(&self) -> String {
        self.blocks.join("\n\n")
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_blocks_with_blank_lines() {
        let mut trace = Trace::new();
        trace.push("Work vector:\n[ 3 3 2 ]");
        trace.push("Finish vector: [ F F F ]");
        assert_eq!(
            trace.render(),
            "Work vector:\n[ 3 3 2 ]\n\nFinish vector: [ F F F ]"
        );
    }

    #[test]
    fn extend_keeps_order() {
        let mut outer = Trace::new();
        outer.push("a");
        let mut inner = Trace::new();
        inner.push("b");
        inner.push("c");
        outer.extend(inner);
        assert_eq!(outer.render(), "a\n\nb\n\nc");
    }

    #[test]
    fn empty_trace() {
        let trace = Trace::new();
        assert!(trace.is_empty());
        assert_eq!(trace.render(), "");
    }
}
