use crate::cell::CellState;

/// Conway's rule for one cell given its live-neighbor count.
pub fn next_state(cell: CellState, live_neighbors: u8) -> CellState {
    match (cell, live_neighbors) {
        // Survival: just the right amount of company.
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,
        // Birth: exactly three parents.
        (CellState::Dead, 3) => CellState::Alive,
        // Underpopulation, overpopulation, or staying dead.
        _ => CellState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation_kills() {
        assert_eq!(next_state(CellState::Alive, 0), CellState::Dead);
        assert_eq!(next_state(CellState::Alive, 1), CellState::Dead);
    }

    #[test]
    fn test_survival_at_two_and_three() {
        assert_eq!(next_state(CellState::Alive, 2), CellState::Alive);
        assert_eq!(next_state(CellState::Alive, 3), CellState::Alive);
    }

    #[test]
    fn test_overpopulation_kills() {
        for n in 4..=8 {
            assert_eq!(next_state(CellState::Alive, n), CellState::Dead);
        }
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        assert_eq!(next_state(CellState::Dead, 3), CellState::Alive);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(next_state(CellState::Dead, n), CellState::Dead);
        }
    }
}
