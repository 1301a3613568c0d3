use crate::data::{bounding_box, Pos, DIRECTIONS};
use crate::map::Map;
use crate::vec2d::{self, Vec2d};

/// Extra cells around walls and targets. Everything in this ring is wall-free
/// so a block there is treated as alive.
const MARGIN: i32 = 2;

/// Maps covering more cells than this are searched without dead end pruning.
const MAX_CELLS: usize = 1 << 24;

/// Marks cells from which a block can never reach a target,
/// even if it was the only block on the map.
///
/// Works backwards from targets by pulling: a block could have come to `cur` from `prev`
/// only if both `prev` and the cell behind it (where the agent stood) are free.
/// Agent reachability is ignored which can only leave more cells alive than necessary.
///
/// The map is unbounded so only the rectangle around walls and targets is checked.
/// Cells outside of it are never dead.
/// Returns `None` if there are no walls or targets or the rectangle is too big.
#[inline(never)] // this is called only once and this way it's easier to see in callgrind
pub(crate) fn find_dead_ends(map: &Map) -> Option<Vec2d<bool>> {
    let (min, max) = bounding_box(map.walls.iter().chain(&map.targets).cloned())?;
    let outer_min = Pos::new(min.x.saturating_sub(MARGIN), min.y.saturating_sub(MARGIN));
    let outer_max = Pos::new(max.x.saturating_add(MARGIN), max.y.saturating_add(MARGIN));
    let cells = vec2d::cell_count(outer_min, outer_max)?;
    if cells > MAX_CELLS {
        debug!("Not looking for dead ends, map has {} cells", cells);
        return None;
    }

    let mut alive = Vec2d::new(outer_min, outer_max, false)?;
    let inside = |pos: Pos| min.x <= pos.x && pos.x <= max.x && min.y <= pos.y && pos.y <= max.y;
    let mut to_visit = Vec::new();
    // a block that gets outside of walls and targets can be pushed freely
    // so treat the whole ring as reachable, it's only ever a superset of the truth
    for pos in alive.positions() {
        if !inside(pos) && !map.is_wall(pos) {
            to_visit.push(pos);
        }
    }
    to_visit.extend(&map.targets);
    for &pos in &to_visit {
        alive[pos] = true;
    }

    while let Some(cur) = to_visit.pop() {
        for &dir in &DIRECTIONS {
            let prev = cur - dir;
            let agent = prev - dir;
            if alive.contains(prev) && !map.is_wall(prev) && !map.is_wall(agent) && !alive[prev] {
                alive[prev] = true;
                to_visit.push(prev);
            }
        }
    }

    let mut dead_ends = alive.scratchpad();
    for pos in alive.positions() {
        dead_ends[pos] = !map.is_wall(pos) && !alive[pos];
    }
    debug!(
        "Found {} dead ends",
        alive.positions().filter(|&pos| dead_ends[pos]).count()
    );
    trace!("Dead ends:\n{}", dead_ends);
    Some(dead_ends)
}

/// Positions outside the checked area are never dead.
pub(crate) fn is_dead_end(dead_ends: &Vec2d<bool>, pos: Pos) -> bool {
    dead_ends.get(pos).cloned().unwrap_or(false)
}
