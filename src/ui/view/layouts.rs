use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 将区域等分为 rows 行，每行再按该行按键数等分
pub fn keypad_grid(area: Rect, row_widths: &[usize]) -> Vec<Vec<Rect>> {
    let row_count = row_widths.len() as u32;
    if row_count == 0 {
        return Vec::new();
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_widths.iter().map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    rows.iter()
        .zip(row_widths)
        .map(|(row, &width)| {
            let width = width.max(1) as u32;
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..width).map(|_| Constraint::Ratio(1, width)))
                .split(*row)
                .to_vec()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let grid = keypad_grid(Rect::new(0, 0, 40, 20), &[4, 4, 4, 4, 1]);
        assert_eq!(grid.len(), 5);
        assert!(grid[..4].iter().all(|row| row.len() == 4));
        assert_eq!(grid[4].len(), 1);
        assert_eq!(grid[4][0].width, 40);
        assert_eq!(grid[0][0].width, 10);
        assert_eq!(grid[0][0].height, 4);
    }

    #[test]
    fn test_grid_cells_do_not_overlap() {
        let grid = keypad_grid(Rect::new(3, 2, 37, 23), &[4, 4, 4, 4, 1]);
        let cells: Vec<Rect> = grid.into_iter().flatten().collect();
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_empty_grid() {
        assert!(keypad_grid(Rect::new(0, 0, 10, 10), &[]).is_empty());
    }
}
