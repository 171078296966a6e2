use std::cmp::Ordering;

use super::types::TieBreak;
use crate::domain::Team;

/// Team indices ordered by `keys` descending.
///
/// `keys[i]` belongs to `teams[i]`. The sort is stable, so with
/// [`TieBreak::OriginalOrder`] equal keys keep page order.
pub fn order_by(keys: &[f64], teams: &[Team], tie_break: TieBreak) -> Vec<usize> {
    let mut order: Vec<usize> = (0..teams.len()).collect();
    order.sort_by(|&a, &b| {
        keys[b]
            .partial_cmp(&keys[a])
            .unwrap_or(Ordering::Equal)
            .then_with(|| break_tie(&teams[a], &teams[b], tie_break))
    });
    order
}

fn break_tie(a: &Team, b: &Team, tie_break: TieBreak) -> Ordering {
    match tie_break {
        TieBreak::OriginalOrder => Ordering::Equal,
        TieBreak::Alphabetical => a.name.cmp(&b.name),
    }
}

/// Fold pairing over a ranked order: first with last, second with
/// second-to-last, and so on. An odd team out gets `None` (the placeholder).
pub fn fold_pair(order: &[usize]) -> Vec<(usize, Option<usize>)> {
    let mut pairs = Vec::with_capacity(order.len().div_ceil(2));
    let mut head = 0;
    let mut tail = order.len();

    while head < tail {
        tail -= 1;
        if head == tail {
            pairs.push((order[head], None));
            break;
        }
        pairs.push((order[head], Some(order[tail])));
        head += 1;
    }

    pairs
}

/// Partner index for every team, `None` meaning the placeholder.
pub fn competitors(pairs: &[(usize, Option<usize>)], team_count: usize) -> Vec<Option<usize>> {
    let mut partners = vec![None; team_count];
    for &(high, low) in pairs {
        partners[high] = low;
        if let Some(low) = low {
            partners[low] = Some(high);
        }
    }
    partners
}
