use alloc::collections::VecDeque;
use ndarray::Array2;

use crate::*;

/// Result of flooding a field from the start.
#[derive(Clone, Debug, PartialEq)]
pub struct Reachability {
    /// Cells the search reached, the start included.
    pub visited: Array2<bool>,
    /// Whether the goal turned up as a neighbour of an expanded cell.
    pub goal_found: bool,
}

/// Breadth-first flood from the start over open ground.
///
/// Neighbours in the last row or the last column are skipped before the goal test, so a goal placed there never
/// counts as reachable. Generation relies on exactly this rule; loosening it changes which fields get accepted.
pub fn explore(field: &Field) -> Reachability {
    let (rows, columns) = field.size();
    let mut visited = Array2::from_elem(field.size().to_nd_index(), false);
    let bounds = (rows.saturating_sub(1), columns.saturating_sub(1));

    let mut to_visit = VecDeque::from([START]);
    while let Some(coords) = to_visit.pop_front() {
        visited[coords.to_nd_index()] = true;

        for neighbor in NeighborIter::new(coords, bounds) {
            match field[neighbor] {
                Terrain::Goal => {
                    return Reachability {
                        visited,
                        goal_found: true,
                    };
                }
                terrain if terrain.is_passable() && !visited[neighbor.to_nd_index()] => {
                    // mark on enqueue so a cell never sits in the queue twice
                    visited[neighbor.to_nd_index()] = true;
                    to_visit.push_back(neighbor);
                }
                _ => {}
            }
        }
    }

    Reachability {
        visited,
        goal_found: false,
    }
}

/// Whether the goal can be reached from the start without stepping on a hazard.
pub fn is_reachable(field: &Field) -> bool {
    explore(field).goal_found
}

/// Cells the reachability search reaches, logged when generation rejects a candidate.
pub fn reachable_cells(field: &Field) -> Array2<bool> {
    explore(field).visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(s: &str) -> Field {
        s.parse().unwrap()
    }

    #[test]
    fn open_corridor_reaches_interior_goal() {
        let field = field(
            "
            *░OO
            O░OO
            O░^O
            OOOO
            ",
        );
        assert!(is_reachable(&field));
    }

    #[test]
    fn hazard_wall_blocks_the_goal() {
        let field = field(
            "
            *░O░░
            ░░O░░
            OOO░░
            ░░░^░
            ░░░░░
            ",
        );
        assert!(!is_reachable(&field));
    }

    #[test]
    fn goal_in_last_row_or_column_is_never_found() {
        let corner = field(
            "
            *░░
            ░░░
            ░░^
            ",
        );
        assert!(!is_reachable(&corner));

        let last_column = field(
            "
            *░░░
            ░░░^
            ░░░░
            ░░░░
            ",
        );
        assert!(!is_reachable(&last_column));
    }

    #[test]
    fn goal_in_open_interior_is_found() {
        let field = field(
            "
            *░░
            ░^░
            ░░░
            ",
        );
        assert!(is_reachable(&field));
    }

    #[test]
    fn search_leaves_the_field_untouched() {
        let original = field(
            "
            *░O░
            ░░O░
            OOO░
            ░░░^
            ",
        );
        let copy = original.clone();
        let reach = explore(&original);

        assert_eq!(original, copy);
        assert!(!reach.goal_found);
        assert!(reach.visited[[1, 1]]);
        assert!(!reach.visited[[0, 2]]);
        assert!(!reach.visited[[3, 3]]);
    }

    #[test]
    fn reachable_cells_stop_short_of_the_last_row_and_column() {
        let field = field(
            "
            *░░░
            ░░░░
            ░░░░
            ░░░^
            ",
        );
        let cells = reachable_cells(&field);
        for ((row, column), &seen) in cells.indexed_iter() {
            assert_eq!(seen, row < 3 && column < 3, "cell ({row}, {column})");
        }
    }
}
