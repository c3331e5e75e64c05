//! Walker: follows the step tape from a start node to a terminal node.
//!
//! The walker is a small state machine. Its state is the current node, its
//! input is the tape symbol at `steps mod len`, and each transition moves to
//! the left or right successor and bumps the counter by exactly one.

use tracing::{debug, instrument, trace};

use crate::domain::{DomainError, DomainResult, Network, Node};

pub const DEFAULT_START: &str = "AAA";
pub const DEFAULT_TERMINAL: &str = "ZZZ";

/// Parameters of a single walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    pub start: String,
    pub terminal: String,
    /// Upper bound on transitions. `None` walks until the terminal is reached,
    /// which never returns for an unreachable terminal.
    pub max_steps: Option<u64>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            start: DEFAULT_START.into(),
            terminal: DEFAULT_TERMINAL.into(),
            max_steps: None,
        }
    }
}

/// Walk state over a borrowed network.
#[derive(Debug, Clone)]
pub struct Walker<'a> {
    network: &'a Network,
    current: &'a Node,
    steps: u64,
}

impl<'a> Walker<'a> {
    /// Position a walker on `start`. Fails if the label is unknown.
    pub fn new(network: &'a Network, start: &str) -> DomainResult<Self> {
        let current = network.node(start)?;
        Ok(Self {
            network,
            current,
            steps: 0,
        })
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_at(&self, label: &str) -> bool {
        self.current.label == label
    }

    /// Perform one transition and return the node moved to.
    pub fn advance(&mut self) -> DomainResult<&'a Node> {
        let step = self.network.instructions.step_at(self.steps)?;
        let next = self.network.node(self.current.successor(step))?;
        trace!(
            "step {}: {} -{:?}-> {}",
            self.steps,
            self.current.label,
            step,
            next.label
        );
        self.current = next;
        self.steps += 1;
        Ok(next)
    }
}

/// Count the steps from `options.start` to `options.terminal`.
#[instrument(level = "debug", skip(network))]
pub fn walk(network: &Network, options: &WalkOptions) -> DomainResult<u64> {
    let mut walker = Walker::new(network, &options.start)?;

    while !walker.is_at(&options.terminal) {
        if let Some(limit) = options.max_steps {
            if walker.steps() >= limit {
                return Err(DomainError::StepLimitExceeded {
                    limit,
                    terminal: options.terminal.clone(),
                });
            }
        }
        walker.advance()?;
    }

    debug!("reached {} after {} steps", options.terminal, walker.steps());
    Ok(walker.steps())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOP: &str = "LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";

    #[test]
    fn test_advance_increments_by_one() {
        let network = Network::parse(LOOP).unwrap();
        let mut walker = Walker::new(&network, "AAA").unwrap();

        let mut previous = walker.steps();
        for _ in 0..5 {
            walker.advance().unwrap();
            assert_eq!(walker.steps(), previous + 1);
            previous = walker.steps();
        }
    }

    #[test]
    fn test_advance_follows_tape() {
        let network = Network::parse(LOOP).unwrap();
        let mut walker = Walker::new(&network, "AAA").unwrap();

        let visited: Vec<String> = (0..6)
            .map(|_| walker.advance().unwrap().label.clone())
            .collect();
        assert_eq!(visited, ["BBB", "AAA", "BBB", "AAA", "BBB", "ZZZ"]);
    }

    #[test]
    fn test_start_equal_to_terminal_takes_no_steps() {
        let network = Network::parse(LOOP).unwrap();
        let options = WalkOptions {
            start: "ZZZ".into(),
            ..WalkOptions::default()
        };
        assert_eq!(walk(&network, &options), Ok(0));
    }

    #[test]
    fn test_unknown_start_is_node_not_found() {
        let network = Network::parse(LOOP).unwrap();
        let options = WalkOptions {
            start: "QQQ".into(),
            ..WalkOptions::default()
        };
        assert_eq!(
            walk(&network, &options),
            Err(DomainError::NodeNotFound("QQQ".into()))
        );
    }

    #[test]
    fn test_step_limit_stops_unreachable_walk() {
        let network = Network::parse("L\n\nAAA = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)\n").unwrap();
        let options = WalkOptions {
            max_steps: Some(100),
            ..WalkOptions::default()
        };
        assert_eq!(
            walk(&network, &options),
            Err(DomainError::StepLimitExceeded {
                limit: 100,
                terminal: "ZZZ".into()
            })
        );
    }

    #[test]
    fn test_step_limit_equal_to_answer_still_succeeds() {
        let network = Network::parse(LOOP).unwrap();
        let options = WalkOptions {
            max_steps: Some(6),
            ..WalkOptions::default()
        };
        assert_eq!(walk(&network, &options), Ok(6));
    }
}
