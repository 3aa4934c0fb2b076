//! Tests for grid construction, indexing and emptiness queries

#[cfg(test)]
mod tests {
    use tilecollapse::AlgorithmError;
    use tilecollapse::algorithm::{AdjacencyTable, EdgeMatch, Solver};
    use tilecollapse::io::configuration::MAX_GRID_DIMENSION;
    use tilecollapse::spatial::{Direction, Grid, Tile};

    // Interchangeable tiles, so seeding never narrows other cells
    fn free_solver(tile_count: usize) -> Solver {
        let tiles: Vec<Tile> = (0..tile_count)
            .map(|index| Tile::new(index, ["A", "A", "A", "A"]))
            .collect();
        Solver::new(AdjacencyTable::build(&tiles, EdgeMatch::Exact))
    }

    #[test]
    fn test_create_fills_with_full_cells() {
        let Ok(grid) = Grid::with_tiles(4, 3, 5) else {
            unreachable!("valid dimensions");
        };
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.cells().iter().all(|c| c.entropy() == 5 && !c.is_collapsed()));
        assert!(!grid.is_filled());
        assert_eq!(grid.empty_cells().len(), 12);
    }

    // Verified by swapping zero and non-zero dimension checks
    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(AlgorithmError::InvalidParameter { parameter: "width", .. })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(AlgorithmError::InvalidParameter { parameter: "height", .. })
        ));
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        assert!(Grid::new(MAX_GRID_DIMENSION + 1, 1).is_err());
        assert!(Grid::new(MAX_GRID_DIMENSION, 1).is_ok());
    }

    // Zero tiles leaves no cells and counts as filled
    #[test]
    fn test_zero_tiles_is_vacuously_filled() {
        let Ok(grid) = Grid::with_tiles(3, 3, 0) else {
            unreachable!("valid dimensions");
        };
        assert!(grid.cells().is_empty());
        assert!(grid.is_filled());
        assert!(grid.empty_cells().is_empty());
    }

    // Non-square grid catches column + line * height indexing
    #[test]
    fn test_row_major_indexing() {
        let Ok(grid) = Grid::with_tiles(4, 2, 1) else {
            unreachable!("valid dimensions");
        };
        assert_eq!(grid.position(1, 3), Some(7));
        assert_eq!(grid.position(0, 2), Some(2));
        assert_eq!(grid.position(2, 0), None);
        assert_eq!(grid.position(0, 4), None);
        assert_eq!(grid.coordinates(7), (1, 3));
        assert_eq!(grid.coordinates(5), (1, 1));
    }

    #[test]
    fn test_seeded_cells_leave_empty_cells_in_order() {
        let solver = free_solver(2);
        let Ok(mut grid) = solver.create_grid(3, 2) else {
            unreachable!("valid dimensions");
        };
        assert!(solver.seed(&mut grid, 0, 1, 1).is_ok());
        assert!(solver.seed(&mut grid, 1, 0, 0).is_ok());

        let positions: Vec<usize> = grid.empty_cells().into_iter().map(|(i, _)| i).collect();
        assert_eq!(positions, vec![0, 2, 4, 5]);
        assert_eq!(grid.collapsed_count(), 2);
        assert_eq!(grid.cell(0, 1).and_then(|c| c.collapsed_tile()), Some(1));
    }

    #[test]
    fn test_neighbours_stop_at_edges() {
        let solver = free_solver(3);
        let Ok(mut grid) = solver.create_grid(2, 2) else {
            unreachable!("valid dimensions");
        };
        assert!(solver.seed(&mut grid, 0, 1, 2).is_ok());

        assert!(grid.neighbour(0, 0, Direction::Up).is_none());
        assert!(grid.neighbour(0, 0, Direction::Left).is_none());
        assert!(grid.neighbour(1, 1, Direction::Down).is_none());
        assert!(grid.neighbour(1, 1, Direction::Right).is_none());
        assert_eq!(
            grid.neighbour(0, 0, Direction::Right).and_then(|c| c.collapsed_tile()),
            Some(2)
        );
        assert_eq!(
            grid.neighbour(1, 1, Direction::Up).and_then(|c| c.collapsed_tile()),
            Some(2)
        );
    }

    // Recreating discards every collapse
    #[test]
    fn test_create_resets_grid() {
        let solver = free_solver(3);
        let Ok(mut grid) = solver.create_grid(2, 2) else {
            unreachable!("valid dimensions");
        };
        assert!(solver.seed(&mut grid, 1, 1, 0).is_ok());
        grid.create(3);
        assert_eq!(grid.collapsed_count(), 0);
        assert_eq!(grid.tile_count(), 3);
        assert_eq!(grid.cells().len(), 4);
    }
}
