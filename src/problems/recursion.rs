//! Recursion and dynamic-programming problems.

use log::trace;

/// Ways to climb `steps` stairs taking 1, 2 or 3 at a time. Zero steps has
/// zero ways. Saturates at `u64::MAX`.
pub fn ways_to_climb(steps: usize) -> u64 {
    fn count(n: usize, memo: &mut [Option<u64>]) -> u64 {
        if let Some(known) = memo[n] {
            return known;
        }
        let ways = (1..=3)
            .filter(|&hop| hop <= n)
            .map(|hop| count(n - hop, memo))
            .fold(0u64, u64::saturating_add);
        memo[n] = Some(ways);
        ways
    }

    if steps == 0 {
        return 0;
    }
    let mut memo = vec![None; steps + 1];
    memo[0] = Some(1);
    // Fill bottom-up so the recursion never goes deeper than one level.
    for n in 1..=steps {
        count(n, &mut memo);
    }
    memo[steps].unwrap_or(0)
}

/// A path of right/down moves from the top-left to the bottom-right of
/// `grid`, indexed `grid[row][col]` with `true` marking a blocked cell.
/// Moves right before down. Cells proven to be dead ends are remembered so
/// each is explored once. The returned path lists `(row, col)` from start
/// to finish inclusive.
pub fn robot_path(grid: &[Vec<bool>]) -> Option<Vec<(usize, usize)>> {
    let rows = grid.len();
    let cols = grid.first()?.len();
    if cols == 0 {
        return None;
    }
    let blocked = |r: usize, c: usize| grid.get(r).and_then(|row| row.get(c)).copied().unwrap_or(true);

    fn search(
        pos: (usize, usize),
        goal: (usize, usize),
        blocked: &dyn Fn(usize, usize) -> bool,
        dead: &mut [Vec<bool>],
        path: &mut Vec<(usize, usize)>,
    ) -> bool {
        let (r, c) = pos;
        if blocked(r, c) || dead[r][c] {
            return false;
        }
        trace!("robot at ({r},{c})");
        path.push(pos);
        if pos == goal
            || (c < goal.1 && search((r, c + 1), goal, blocked, dead, path))
            || (r < goal.0 && search((r + 1, c), goal, blocked, dead, path))
        {
            return true;
        }
        path.pop();
        dead[r][c] = true;
        false
    }

    let mut dead = vec![vec![false; cols]; rows];
    let mut path = Vec::with_capacity(rows + cols - 1);
    search((0, 0), (rows - 1, cols - 1), &blocked, &mut dead, &mut path).then_some(path)
}
