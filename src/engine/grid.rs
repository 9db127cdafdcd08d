//! Near-square grid geometry for laying out palette swatches.

/// Columns and rows for `count` cells, with `columns = ceil(sqrt(count))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    pub fn for_count(count: usize) -> Self {
        if count == 0 {
            return Self { columns: 0, rows: 0 };
        }
        let columns = ceil_sqrt(count);
        Self {
            columns,
            rows: count.div_ceil(columns),
        }
    }
}

/// Smallest `c` with `c * c >= n`, computed without floating point.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = n.isqrt();
    if c * c < n {
        c += 1;
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_ceil_sqrt() {
        let cols: Vec<usize> = [1, 2, 4, 5, 9, 10, 16, 17]
            .into_iter()
            .map(|n| GridLayout::for_count(n).columns)
            .collect();
        assert_eq!(cols, vec![1, 2, 2, 3, 3, 4, 4, 5]);
    }

    #[test]
    fn rows_cover_every_cell() {
        let g = GridLayout::for_count(5);
        assert_eq!(g, GridLayout { columns: 3, rows: 2 });
        assert_eq!(GridLayout::for_count(9), GridLayout { columns: 3, rows: 3 });
        assert_eq!(GridLayout::for_count(10), GridLayout { columns: 4, rows: 3 });
    }

    #[test]
    fn empty_palette_has_no_grid() {
        assert_eq!(GridLayout::for_count(0), GridLayout { columns: 0, rows: 0 });
    }
}
