//! Finding tile selections that match a roll.
//!
//! Used for hints and to list legal moves. The rules never consult this:
//! a player with no matching selection still has to concede explicitly.

use crate::core::tile::{tile_value, TileSet};

/// Every subset of `open` whose tile values sum to `target`.
///
/// `open` holds tile indices in ascending order. Each result is ascending,
/// and results come out in lexicographic order.
#[must_use]
pub fn selections_for(target: u32, open: &[usize]) -> Vec<TileSet> {
    let mut out = Vec::new();
    let mut current = TileSet::new();
    gather(target, open, &mut current, &mut out);
    out
}

/// True if at least one subset of `open` sums to `target`.
#[must_use]
pub fn has_selection(target: u32, open: &[usize]) -> bool {
    if target == 0 {
        return true;
    }
    match open.split_first() {
        None => false,
        Some((&first, rest)) => {
            let value = tile_value(first);
            if value > target {
                return false;
            }
            has_selection(target - value, rest) || has_selection(target, rest)
        }
    }
}

fn gather(remaining: u32, open: &[usize], current: &mut TileSet, out: &mut Vec<TileSet>) {
    if remaining == 0 {
        if !current.is_empty() {
            out.push(current.clone());
        }
        return;
    }

    for (pos, &index) in open.iter().enumerate() {
        let value = tile_value(index);
        // ascending input: nothing further fits
        if value > remaining {
            break;
        }
        current.push(index);
        gather(remaining - value, &open[pos + 1..], current, out);
        current.pop();
    }
}
