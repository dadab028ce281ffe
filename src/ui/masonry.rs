/// Masonry placement
///
/// Tiles keep gallery order but each one drops into whichever column is
/// currently shortest, so tall portraits and wide landscapes pack tightly.

/// Distribute tiles over `columns` columns.
///
/// `heights` are relative tile heights (height / width of the tile at
/// column width). Returns the tile indices of every column, top to bottom.
pub fn assign_columns(heights: &[f32], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut placed: Vec<Vec<usize>> = vec![Vec::new(); columns];
    let mut filled = vec![0.0f32; columns];

    for (index, &height) in heights.iter().enumerate() {
        // Leftmost column wins ties
        let shortest = filled
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(column, _)| column)
            .unwrap_or(0);

        placed[shortest].push(index);
        filled[shortest] += height.max(0.0);
    }

    placed
}

/// Columns that fit into `width` pixels, between 1 and `max_columns`
pub fn columns_for_width(width: f32, max_columns: usize, min_column_width: f32) -> usize {
    let fitting = (width / min_column_width.max(1.0)).floor() as usize;
    fitting.clamp(1, max_columns.max(1))
}
