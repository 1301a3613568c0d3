use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, row, Table};
use separator::Separatable;

use crate::state::State;

#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add(counts: &mut Vec<i32>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while node.cost as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.cost as usize] += 1;
        ret
    }

    fn short_summary(&self) -> String {
        format!(
            "total created / unique visited / reached duplicates:\n{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }

    fn depth_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(row!["Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"]);

        // created_states should be the longest vec
        for (depth, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            let left = created - visited - duplicates;
            let depth = format!("{}:", depth);
            let created = created.separated_string();
            let visited = visited.separated_string();
            let duplicates = duplicates.separated_string();
            let left = left.separated_string();
            table.add_row(row![depth, created, visited, duplicates, left]);
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.short_summary())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.depth_table())
    }
}

/// Frontier entry.
///
/// Ordered by estimated total cost, ties are broken by insertion order
/// so the search is deterministic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State,
    pub(crate) cost: u32,
    pub(crate) h: u32,
    pub(crate) seq: u64,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: &'a State, cost: u32, h: u32, seq: u64) -> Self {
        Self { state, cost, h, seq }
    }

    fn priority(&self) -> u32 {
        self.cost.saturating_add(self.h)
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // used with Reverse in a max-heap, lower is popped first
        self.priority()
            .cmp(&other.priority())
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode<'_> {}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use crate::data::Pos;

    use super::*;

    #[test]
    fn lower_priority_first_then_fifo() {
        let a = State::new(Pos::new(1, 1), vec![]);
        let b = State::new(Pos::new(2, 1), vec![]);
        let c = State::new(Pos::new(3, 1), vec![]);
        let d = State::new(Pos::new(4, 1), vec![]);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(SearchNode::new(&a, 3, 2, 0)));
        heap.push(Reverse(SearchNode::new(&b, 1, 3, 1)));
        heap.push(Reverse(SearchNode::new(&c, 0, 4, 2)));
        heap.push(Reverse(SearchNode::new(&d, 0, 1, 3)));

        let order: Vec<_> = ::std::iter::from_fn(|| heap.pop())
            .map(|Reverse(node)| node.state.agent().x)
            .collect();
        assert_eq!(order, vec![4, 2, 3, 1]);
    }

    #[test]
    fn counting_by_depth() {
        let state = State::new(Pos::new(0, 0), vec![]);
        let mut stats = Stats::new();

        assert!(stats.add_created(&SearchNode::new(&state, 0, 0, 0)));
        assert!(stats.add_created(&SearchNode::new(&state, 2, 0, 1)));
        assert!(!stats.add_created(&SearchNode::new(&state, 2, 0, 2)));
        assert!(stats.add_unique_visited(&SearchNode::new(&state, 0, 0, 0)));
        assert!(stats.add_reached_duplicate(&SearchNode::new(&state, 2, 0, 1)));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.created_states, vec![1, 0, 2]);
        assert_eq!(stats.duplicate_states, vec![0, 0, 1]);
    }

    #[test]
    fn formatting_separators() {
        let state = State::new(Pos::new(0, 0), vec![]);
        let mut stats = Stats::new();
        for i in 0..1234 {
            stats.add_created(&SearchNode::new(&state, 0, 0, i));
        }
        let text = stats.to_string();
        assert!(text.starts_with("States created total: 1,234\n"));
        assert!(text.contains("Created but not reached total: 1,234\n"));
        assert!(format!("{:?}", stats).contains("1,234"));
    }
}
