use crate::layout::lattice::{Lattice, Slot, Track, row_with_copies, row_with_insert};

/// Rewrite a declared grid so every slot occupies exactly one row and one
/// column, tagging expanded duplicates as shadows per axis.
///
/// Columns are walked outer, rows inner: vertical duplication must finish
/// before horizontal duplication touches the same slot, because one slot can
/// carry both spans. Bounds of a spanning slot are divided by the span
/// factor with integer division; the discarded remainder (up to `span - 1`
/// units of under-allocation) is an accepted approximation.
///
/// Short rows are padded with filler slots as the walk reaches them, so the
/// returned lattice is rectangular.
pub(crate) fn expand_spans(declared: &[Vec<Slot>]) -> Lattice {
    let mut grid: Vec<Vec<Slot>> = declared.to_vec();
    let mut longest = grid.iter().map(Vec::len).max().unwrap_or(0);

    let mut col = 0;
    while col < longest {
        let mut row = 0;
        while row < grid.len() {
            if grid[row].len() <= col {
                grid[row].push(Slot::filler());
            }

            // Vertical duplication. A slot that is already a width shadow is
            // skipped: its vertical copies arise when the canonical column's
            // height shadows expand horizontally in the rows below.
            let slot = grid[row][col];
            let vspan = slot.span_height;
            let width_copy = slot.span_width > 1 && slot.width.is_shadow();
            if vspan > 1 && !slot.height.is_shadow() && !width_copy {
                let divided = slot.height.bound().divided(vspan);
                grid[row][col].height = Track::Canonical(divided);
                let shadow = Slot {
                    height: Track::Shadow(divided),
                    ..grid[row][col]
                };
                for offset in 1..vspan as usize {
                    let target = row + offset;
                    if grid.len() <= target {
                        // fresh row padded up to the current column
                        grid.push(vec![Slot::filler(); col]);
                    }
                    if grid[target].len() <= col {
                        while grid[target].len() < col {
                            grid[target].push(Slot::filler());
                        }
                        grid[target].push(shadow);
                    } else {
                        grid[target] = row_with_insert(&grid[target], col, shadow);
                    }
                }
            }

            // Horizontal duplication.
            let slot = grid[row][col];
            let hspan = slot.span_width;
            if hspan > 1 && !slot.width.is_shadow() {
                let divided = slot.width.bound().divided(hspan);
                grid[row][col].width = Track::Canonical(divided);
                let shadow = Slot {
                    width: Track::Shadow(divided),
                    ..grid[row][col]
                };
                grid[row] = row_with_copies(&grid[row], col, shadow, hspan as usize - 1);
                longest = longest.max(grid[row].len());
            }

            row += 1;
        }
        col += 1;
    }

    for row in &mut grid {
        while row.len() < longest {
            row.push(Slot::filler());
        }
    }

    Lattice::new(grid)
}
