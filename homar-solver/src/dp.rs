use anyhow::{anyhow, Result};
use homar_instances::{Selection, TestCase};
use ndarray::Array2;

/// Maximum total value of lobsters catchable with the given net capacity.
///
/// Bottom-up 0/1 knapsack: cell `[i, w]` holds the best value achievable
/// using only the first `i` lobsters with total size at most `w`, so the
/// answer is the last cell. O(n * capacity) time and space; capacity is a
/// magnitude, not a count, so large nets are expensive.
///
/// Value sums use checked arithmetic and overflow is an error. The table is
/// allocated fresh per call and dropped before returning.
pub fn max_catch_value(capacity: u64, sizes: &[u64], values: &[u64]) -> Result<u64> {
    let table = build_table(capacity, sizes, values)?;
    let (num_rows, num_cols) = table.dim();
    Ok(table[[num_rows - 1, num_cols - 1]])
}

/// Reconstructs one optimal catch by walking the table back from the last
/// cell: whenever the optimum changes between rows `i-1` and `i`, lobster
/// `i-1` was taken and the remaining capacity shrinks by its size.
pub fn best_selection(capacity: u64, sizes: &[u64], values: &[u64]) -> Result<Selection> {
    let table = build_table(capacity, sizes, values)?;
    let (_, num_cols) = table.dim();

    let mut items = Vec::new();
    let mut w = num_cols - 1;
    for i in (1..=sizes.len()).rev() {
        if table[[i, w]] != table[[i - 1, w]] {
            items.push(i - 1);
            w -= sizes[i - 1] as usize;
        }
    }
    items.reverse();
    Ok(Selection { items })
}

pub fn solve_case(case: &TestCase) -> Result<u64> {
    max_catch_value(case.capacity, &case.sizes, &case.values)
}

fn build_table(capacity: u64, sizes: &[u64], values: &[u64]) -> Result<Array2<u64>> {
    if sizes.len() != values.len() {
        return Err(anyhow!(
            "Mismatched input lengths: {} sizes vs {} values",
            sizes.len(),
            values.len()
        ));
    }

    let num_rows = sizes.len() + 1;
    let num_cols = usize::try_from(capacity)
        .ok()
        .and_then(|c| c.checked_add(1))
        .ok_or_else(|| anyhow!("Capacity ({}) does not fit in memory", capacity))?;
    let num_cells = num_rows.checked_mul(num_cols).ok_or_else(|| {
        anyhow!("DP table ({} x {}) is too large to allocate", num_rows, num_cols)
    })?;

    let mut cells: Vec<u64> = Vec::new();
    cells
        .try_reserve_exact(num_cells)
        .map_err(|e| anyhow!("Failed to allocate DP table ({} cells): {}", num_cells, e))?;
    cells.resize(num_cells, 0);

    // Row 0 and column 0 stay zero: no lobsters or no capacity catches nothing.
    let mut table = Array2::from_shape_vec((num_rows, num_cols), cells)?;
    for i in 1..num_rows {
        let size = sizes[i - 1];
        let value = values[i - 1];
        for w in 0..num_cols {
            let without = table[[i - 1, w]];
            // The bound check must happen before the subtraction below:
            // w - size underflows when the lobster does not fit.
            table[[i, w]] = if size > w as u64 {
                without
            } else {
                let with = table[[i - 1, w - size as usize]]
                    .checked_add(value)
                    .ok_or_else(|| anyhow!("Value sum overflows u64 at item {}", i - 1))?;
                without.max(with)
            };
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_base_row_and_column_are_zero() {
        let table = build_table(5, &[2, 3], &[10, 20]).unwrap();
        for w in 0..=5 {
            assert_eq!(table[[0, w]], 0);
        }
        for i in 0..=2 {
            assert_eq!(table[[i, 0]], 0);
        }
    }

    #[test]
    fn test_table_is_monotonic() {
        let table = build_table(10, &[2, 3, 4, 5], &[3, 4, 5, 6]).unwrap();
        let (num_rows, num_cols) = table.dim();
        for i in 0..num_rows {
            for w in 1..num_cols {
                assert!(table[[i, w]] >= table[[i, w - 1]]);
            }
        }
        for w in 0..num_cols {
            for i in 1..num_rows {
                assert!(table[[i, w]] >= table[[i - 1, w]]);
            }
        }
    }

    #[test]
    fn test_table_dimensions() {
        let table = build_table(7, &[1, 2, 3], &[1, 1, 1]).unwrap();
        assert_eq!(table.dim(), (4, 8));
    }
}
