//! FIFO frontier shared by breadth-first search and Kahn's algorithm.

use std::collections::VecDeque;

use crate::types::NodeId;

/// Work queue of nodes waiting to be processed, oldest first.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    queue: VecDeque<NodeId>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a node at the back of the queue.
    pub(crate) fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
    }

    /// Take the oldest node, `None` once the frontier is exhausted.
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }
}

impl FromIterator<NodeId> for Frontier {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_in_first_out() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId::new(3));
        frontier.push(NodeId::new(1));
        frontier.push(NodeId::new(2));

        assert_eq!(frontier.pop(), Some(NodeId::new(3)));
        assert_eq!(frontier.pop(), Some(NodeId::new(1)));
        assert_eq!(frontier.pop(), Some(NodeId::new(2)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_pop_empty() {
        let mut frontier: Frontier = Vec::new().into_iter().collect();
        assert_eq!(frontier.pop(), None);
    }
}
