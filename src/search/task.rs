//! Units of search work.

#![allow(dead_code)]

use crate::maze::Position;

/// One unit of search work: the path from the start cell to an unexplored
/// frontier cell.
///
/// The frontier is the last position and the path only ever grows at the
/// tail. Forking clones the whole path so every task owns its history
/// independently; the winning task's path is what the run reports as the
/// discovered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    path: Vec<Position>,
}

impl Task {
    /// The initial one-cell task at the start position.
    pub fn seed(start: Position) -> Self {
        Self { path: vec![start] }
    }

    /// The frontier cell this task will explore next.
    pub fn frontier(&self) -> Position {
        *self.path.last().expect("task path is never empty")
    }

    /// A new task extending this one by a single neighbor cell.
    pub fn fork(&self, next: Position) -> Self {
        let mut path = self.path.clone();
        path.push(next);
        Self { path }
    }

    /// Number of cells on the path, start and frontier included.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consume the task, yielding the full path.
    pub fn into_path(self) -> Vec<Position> {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_task() {
        let start = Position::new(2, 3);
        let task = Task::seed(start);

        assert_eq!(task.frontier(), start);
        assert_eq!(task.len(), 1);
    }

    #[test]
    fn test_fork_extends_the_tail() {
        let task = Task::seed(Position::new(0, 0));
        let forked = task.fork(Position::new(0, 1));

        assert_eq!(forked.frontier(), Position::new(0, 1));
        assert_eq!(forked.len(), 2);
        // The parent is unchanged; forks are independent owners.
        assert_eq!(task.frontier(), Position::new(0, 0));
        assert_eq!(task.len(), 1);
    }

    #[test]
    fn test_into_path_preserves_order() {
        let path = Task::seed(Position::new(0, 0))
            .fork(Position::new(0, 1))
            .fork(Position::new(1, 1))
            .into_path();

        assert_eq!(
            path,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }
}
