//! Network model and parser
//!
//! Input layout:
//! ```text
//! LLR
//!
//! AAA = (BBB, BBB)
//! BBB = (AAA, ZZZ)
//! ZZZ = (ZZZ, ZZZ)
//! ```
//! Line 1 is the step sequence, every further non-blank line defines one node.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, instrument};

use crate::domain::{DomainError, DomainResult};

/// Direction taken at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Left,
    Right,
}

impl TryFrom<char> for Step {
    type Error = DomainError;

    fn try_from(symbol: char) -> DomainResult<Self> {
        match symbol {
            'L' => Ok(Step::Left),
            'R' => Ok(Step::Right),
            other => Err(DomainError::InvalidStep(other)),
        }
    }
}

/// The cyclic step tape.
///
/// Symbols are kept as read; validation happens when a symbol is consumed,
/// so a bad character only fails a walk that actually reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    symbols: Vec<char>,
}

impl Instructions {
    /// Parse the first input line (surrounding whitespace is ignored).
    pub fn parse(line: &str) -> DomainResult<Self> {
        let symbols: Vec<char> = line.trim().chars().collect();
        if symbols.is_empty() {
            return Err(DomainError::EmptySequence);
        }
        Ok(Self { symbols })
    }

    /// Number of symbols in one period of the tape.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a parsed tape; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Raw symbol read at step counter `step` (`step mod len`).
    pub fn symbol_at(&self, step: u64) -> char {
        let index = step % self.symbols.len() as u64;
        self.symbols[index as usize]
    }

    /// Decoded step at step counter `step`.
    pub fn step_at(&self, step: u64) -> DomainResult<Step> {
        Step::try_from(self.symbol_at(step))
    }
}

impl fmt::Display for Instructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// A labeled node with its two successor labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub label: String,
    pub left: String,
    pub right: String,
}

impl Node {
    /// Parse a `LABEL = (LEFT, RIGHT)` line.
    ///
    /// `line_no` is 1-based and only used for diagnostics.
    pub fn parse(line: &str, line_no: usize) -> DomainResult<Self> {
        let malformed = |reason: &'static str| DomainError::MalformedNode {
            line: line_no,
            content: line.to_string(),
            reason,
        };

        let (label, pair) = line.split_once('=').ok_or_else(|| malformed("missing '='"))?;
        let (left, right) = pair.split_once(',').ok_or_else(|| malformed("missing ','"))?;
        if right.contains(',') {
            return Err(malformed("more than two successors"));
        }

        let label = label.trim();
        let left = left.trim();
        let left = left.strip_prefix('(').unwrap_or(left).trim();
        let right = right.trim();
        let right = right.strip_suffix(')').unwrap_or(right).trim();

        if label.is_empty() || left.is_empty() || right.is_empty() {
            return Err(malformed("empty label"));
        }

        Ok(Self {
            label: label.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        })
    }

    /// Label of the successor selected by `step`.
    pub fn successor(&self, step: Step) -> &str {
        match step {
            Step::Left => &self.left,
            Step::Right => &self.right,
        }
    }
}

/// Parsed puzzle input: the step tape plus all nodes keyed by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub instructions: Instructions,
    nodes: HashMap<String, Node>,
}

impl Network {
    /// Build a network from an already parsed node list.
    ///
    /// On duplicate labels the first definition wins.
    pub fn new(instructions: Instructions, nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut map = HashMap::new();
        for node in nodes {
            map.entry(node.label.clone()).or_insert(node);
        }
        Self {
            instructions,
            nodes: map,
        }
    }

    /// Parse full input text.
    #[instrument(level = "debug", skip(content))]
    pub fn parse(content: &str) -> DomainResult<Self> {
        let mut lines = content.lines();
        let instructions = Instructions::parse(lines.next().unwrap_or_default())?;

        let mut nodes = Vec::new();
        for (idx, line) in lines.enumerate() {
            let trimmed = line.trim();
            // Skip empty lines
            if trimmed.is_empty() {
                continue;
            }
            // idx 0 is the second input line
            nodes.push(Node::parse(trimmed, idx + 2)?);
        }

        let network = Self::new(instructions, nodes);
        debug!(
            "parsed {} steps, {} nodes",
            network.instructions.len(),
            network.len()
        );
        Ok(network)
    }

    /// Look up a node by label.
    pub fn node(&self, label: &str) -> DomainResult<&Node> {
        self.nodes
            .get(label)
            .ok_or_else(|| DomainError::NodeNotFound(label.to_string()))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('L', Ok(Step::Left))]
    #[case('R', Ok(Step::Right))]
    #[case('X', Err(DomainError::InvalidStep('X')))]
    #[case('l', Err(DomainError::InvalidStep('l')))]
    fn test_step_from_char(#[case] symbol: char, #[case] expected: DomainResult<Step>) {
        assert_eq!(Step::try_from(symbol), expected);
    }

    #[test]
    fn test_node_parse_tolerates_spacing() {
        let node = Node::parse("AAA=(BBB,CCC)", 3).unwrap();
        assert_eq!(node.label, "AAA");
        assert_eq!(node.left, "BBB");
        assert_eq!(node.right, "CCC");

        let node = Node::parse("  11A =  ( 11B ,  XXX )  ", 3).unwrap();
        assert_eq!(node.label, "11A");
        assert_eq!(node.left, "11B");
        assert_eq!(node.right, "XXX");
    }

    #[rstest]
    #[case("AAA (BBB, CCC)", "missing '='")]
    #[case("AAA = (BBB CCC)", "missing ','")]
    #[case("AAA = (BBB, CCC, DDD)", "more than two successors")]
    #[case(" = (BBB, CCC)", "empty label")]
    #[case("AAA = (, CCC)", "empty label")]
    fn test_node_parse_rejects_malformed(#[case] line: &str, #[case] expected_reason: &str) {
        match Node::parse(line, 7) {
            Err(DomainError::MalformedNode { line: 7, reason, .. }) => {
                assert_eq!(reason, expected_reason)
            }
            other => panic!("expected MalformedNode, got {:?}", other),
        }
    }

    #[test]
    fn test_symbol_at_wraps_around() {
        let instructions = Instructions::parse("LRR").unwrap();
        let read: String = (0..7).map(|s| instructions.symbol_at(s)).collect();
        assert_eq!(read, "LRRLRRL");
    }

    #[test]
    fn test_instructions_display_round_trips_trimmed_line() {
        let instructions = Instructions::parse("  RLX \r").unwrap();
        assert_eq!(instructions.to_string(), "RLX");
        assert_eq!(instructions.len(), 3);
    }

    #[test]
    fn test_duplicate_label_keeps_first_definition() {
        let network = Network::parse("L\n\nAAA = (ZZZ, ZZZ)\nAAA = (BBB, BBB)\n").unwrap();
        assert_eq!(network.len(), 1);
        assert_eq!(network.node("AAA").unwrap().left, "ZZZ");
    }
}
