//! Tests for grid rendering and PNG export

#[cfg(test)]
mod tests {
    use tilecollapse::AlgorithmError;
    use tilecollapse::algorithm::{AdjacencyTable, EdgeMatch, Solver};
    use tilecollapse::io::configuration::MAX_GRID_DIMENSION;
    use tilecollapse::io::image::{export_grid_as_png, render_grid, tile_color};
    use tilecollapse::spatial::{Grid, Tile};

    fn free_solver(tile_count: usize) -> Solver {
        let tiles: Vec<Tile> = (0..tile_count)
            .map(|index| Tile::new(index, ["A", "A", "A", "A"]))
            .collect();
        Solver::new(AdjacencyTable::build(&tiles, EdgeMatch::Exact))
    }

    #[test]
    fn test_tile_colors_are_opaque_and_distinct() {
        let colors: Vec<[u8; 4]> = (0..12).map(tile_color).collect();
        for (i, a) in colors.iter().enumerate() {
            assert_eq!(a.get(3), Some(&255));
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // Uncollapsed cells render as transparent placeholders
    // Verified by painting every cell regardless of state
    #[test]
    fn test_render_grid_blocks() {
        let solver = free_solver(2);
        let Ok(mut grid) = solver.create_grid(3, 2) else {
            unreachable!("valid dimensions");
        };
        assert!(solver.seed(&mut grid, 1, 2, 1).is_ok());

        let Ok(img) = render_grid(&grid, 4) else {
            unreachable!("tile index in range");
        };

        assert_eq!(img.dimensions(), (12, 8));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(8, 4).0, tile_color(1));
        assert_eq!(img.get_pixel(11, 7).0, tile_color(1));
        assert_eq!(img.get_pixel(7, 7).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_export_grid_as_png_creates_file() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let solver = free_solver(1);
        let Ok(mut grid) = solver.create_grid(2, 2) else {
            unreachable!("valid dimensions");
        };
        assert!(solver.seed(&mut grid, 0, 0, 0).is_ok());

        let output = dir.path().join("nested").join("grid.png");
        assert!(export_grid_as_png(&grid, 2, &output).is_ok());
        assert!(output.exists());
    }

    // Verified by ignoring the save error
    #[test]
    fn test_export_to_unwritable_path_fails() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let Ok(grid) = Grid::with_tiles(1, 1, 1) else {
            unreachable!("valid dimensions");
        };

        let output = dir.path().join("grid.unknownformat");
        assert!(export_grid_as_png(&grid, 1, &output).is_err());
    }

    // Verified by multiplying the side lengths unchecked
    #[test]
    fn test_oversized_cell_pixels_rejected() {
        let Ok(grid) = Grid::with_tiles(MAX_GRID_DIMENSION, 1, 1) else {
            unreachable!("valid dimensions");
        };

        assert!(matches!(
            render_grid(&grid, u32::MAX),
            Err(AlgorithmError::InvalidParameter { parameter: "cell_pixels", .. })
        ));
        assert!(matches!(
            render_grid(&grid, 0),
            Err(AlgorithmError::InvalidParameter { parameter: "cell_pixels", .. })
        ));
    }
}
