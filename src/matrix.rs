use crate::calendar::CalendarGrid;
use serde::{Deserialize, Serialize};

/// Per-task completion flags addressed by `(week, day_in_week)`.
///
/// The matrix is expected to mirror the active [`CalendarGrid`] row for row.
/// Reads outside that shape report `false`; writes outside it are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMatrix(Vec<Vec<bool>>);

impl CompletionMatrix {
    pub fn shaped_for(grid: &CalendarGrid) -> Self {
        Self(grid.weeks.iter().map(|week| vec![false; week.len()]).collect())
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.0
    }

    pub fn is_set(&self, week: usize, day: usize) -> bool {
        self.0
            .get(week)
            .and_then(|row| row.get(day))
            .copied()
            .unwrap_or(false)
    }

    pub fn conforms_to(&self, grid: &CalendarGrid) -> bool {
        self.0.len() == grid.week_count()
            && self
                .0
                .iter()
                .zip(&grid.weeks)
                .all(|(row, week)| row.len() == week.len())
    }

    /// Flips one cell and returns its new value, or `None` when the cell lies
    /// outside `grid`. Missing rows up to `week` are created at their grid
    /// length first, and a row of the wrong length is resized to match.
    pub fn toggle(&mut self, grid: &CalendarGrid, week: usize, day: usize) -> Option<bool> {
        let week_len = grid.week_len(week)?;
        if day >= week_len {
            return None;
        }

        while self.0.len() <= week {
            let len = grid.week_len(self.0.len()).unwrap_or(0);
            self.0.push(vec![false; len]);
        }

        let row = &mut self.0[week];
        if row.len() != week_len {
            row.resize(week_len, false);
        }
        row[day] = !row[day];
        Some(row[day])
    }

    /// Reshapes the matrix to `grid`, keeping every in-bounds value and
    /// padding with `false`. Returns whether anything had to change.
    pub fn normalize_to(&mut self, grid: &CalendarGrid) -> bool {
        if self.conforms_to(grid) {
            return false;
        }
        self.0.truncate(grid.week_count());
        for (index, week) in grid.weeks.iter().enumerate() {
            match self.0.get_mut(index) {
                Some(row) => row.resize(week.len(), false),
                None => self.0.push(vec![false; week.len()]),
            }
        }
        true
    }
}

impl From<Vec<Vec<bool>>> for CompletionMatrix {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        Self(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2024() -> CalendarGrid {
        CalendarGrid::build(5, 2024)
    }

    #[test]
    fn shaped_matrix_matches_grid() {
        let grid = june_2024();
        let matrix = CompletionMatrix::shaped_for(&grid);
        assert!(matrix.conforms_to(&grid));
        assert_eq!(matrix.rows()[0], vec![false]);
        assert!(matrix.rows().iter().flatten().all(|cell| !cell));
    }

    #[test]
    fn toggle_twice_restores_cell() {
        let grid = june_2024();
        let mut matrix = CompletionMatrix::shaped_for(&grid);
        matrix.toggle(&grid, 2, 3);
        let snapshot = matrix.clone();

        assert_eq!(matrix.toggle(&grid, 1, 4), Some(true));
        assert!(matrix.is_set(1, 4));
        assert_eq!(matrix.toggle(&grid, 1, 4), Some(false));
        assert_eq!(matrix, snapshot);
    }

    #[test]
    fn toggle_outside_grid_is_ignored() {
        let grid = june_2024();
        let mut matrix = CompletionMatrix::shaped_for(&grid);
        assert_eq!(matrix.toggle(&grid, 0, 1), None);
        assert_eq!(matrix.toggle(&grid, 6, 0), None);
        assert!(matrix.conforms_to(&grid));
        assert!(!matrix.is_set(0, 1));
    }

    #[test]
    fn toggle_creates_missing_rows_at_grid_length() {
        let grid = june_2024();
        let mut matrix = CompletionMatrix::default();
        assert_eq!(matrix.toggle(&grid, 2, 6), Some(true));
        assert_eq!(matrix.rows().len(), 3);
        assert_eq!(matrix.rows()[0].len(), 1);
        assert_eq!(matrix.rows()[2].len(), 7);
        assert!(matrix.is_set(2, 6));
    }

    #[test]
    fn normalize_keeps_in_bounds_values() {
        let grid = june_2024();
        let mut matrix = CompletionMatrix::from(vec![vec![true, true], vec![false, true]]);
        assert!(matrix.normalize_to(&grid));
        assert!(matrix.conforms_to(&grid));
        assert!(matrix.is_set(0, 0));
        assert!(matrix.is_set(1, 1));
        assert!(!matrix.normalize_to(&grid));
    }
}
