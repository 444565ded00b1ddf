//! Weighted A* over the tile grid with a dynamic-obstacle filter.
//! Used for mouse-click movement and monster pursuit alike.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use crate::game::visibility::FovMap;
use crate::state::{GameState, Map};
use crate::types::Pos;

const ORTHOGONAL_COST: u32 = 2;
const DIAGONAL_COST: u32 = 3;

pub trait Graph {
    fn in_dimensions(&self, pos: Pos) -> bool;
    fn is_opaque(&self, pos: Pos) -> bool;
    /// Walkable Moore neighbors, excluding `pos`.
    fn neighbors(&self, pos: Pos) -> Vec<Pos>;
    fn distance(&self, a: Pos, b: Pos) -> f64;
}

impl Graph for Map {
    fn in_dimensions(&self, pos: Pos) -> bool {
        Map::in_dimensions(self, pos)
    }

    fn is_opaque(&self, pos: Pos) -> bool {
        Map::is_opaque(self, pos)
    }

    fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        Map::neighbors(self, pos)
    }

    fn distance(&self, a: Pos, b: Pos) -> f64 {
        Map::distance(self, a, b)
    }
}

pub trait Obstacles {
    fn occupied(&self, pos: Pos) -> bool;
}

impl<F> Obstacles for F
where
    F: Fn(Pos) -> bool,
{
    fn occupied(&self, pos: Pos) -> bool {
        self(pos)
    }
}

pub struct NoObstacles;

impl Obstacles for NoObstacles {
    fn occupied(&self, _pos: Pos) -> bool {
        false
    }
}

/// Living blocking entities, restricted to tiles the observer has seen when one is given.
pub struct EntityObstacles<'a> {
    state: &'a GameState,
    observer: Option<&'a FovMap>,
}

impl<'a> EntityObstacles<'a> {
    pub fn new(state: &'a GameState, observer: Option<&'a FovMap>) -> Self {
        Self { state, observer }
    }
}

impl Obstacles for EntityObstacles<'_> {
    fn occupied(&self, pos: Pos) -> bool {
        if self.observer.is_some_and(|fov| !fov.seen(pos)) {
            return false;
        }
        self.state.blocking_entity_at(pos).is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct OpenNode {
    priority: f64,
    pos: Pos,
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    // Reversed so the max-heap pops the lowest priority first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority).then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn step_cost(from: Pos, to: Pos) -> u32 {
    if from.x != to.x && from.y != to.y { DIAGONAL_COST } else { ORTHOGONAL_COST }
}

/// Total step cost of walking `path` from `start`.
pub fn path_cost(start: Pos, path: &[Pos]) -> u32 {
    let mut previous = start;
    let mut total = 0;
    for &step in path {
        total += step_cost(previous, step);
        previous = step;
    }
    total
}

/// Path from `start` (excluded) to `goal` (included); empty when no path exists.
///
/// Occupied tiles are skipped except for the goal itself, so a path may end on
/// an entity that is about to be attacked.
pub fn determine_astar_path(
    graph: &impl Graph,
    obstacles: &impl Obstacles,
    start: Pos,
    goal: Pos,
) -> Vec<Pos> {
    if !graph.in_dimensions(goal) || graph.is_opaque(goal) {
        return Vec::new();
    }

    let mut open = BinaryHeap::new();
    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();
    let mut cost_so_far: BTreeMap<Pos, u32> = BTreeMap::new();
    open.push(OpenNode { priority: 0.0, pos: start });
    cost_so_far.insert(start, 0);

    while let Some(OpenNode { pos: current, .. }) = open.pop() {
        if current == goal {
            break;
        }
        let current_cost = cost_so_far.get(&current).copied().unwrap_or_default();
        for next in graph.neighbors(current) {
            if next != goal && obstacles.occupied(next) {
                continue;
            }
            let new_cost = current_cost + step_cost(current, next);
            if cost_so_far.get(&next).is_none_or(|&known| new_cost < known) {
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, current);
                let priority = f64::from(new_cost) + graph.distance(next, goal);
                open.push(OpenNode { priority, pos: next });
            }
        }
    }

    reconstruct_path(&came_from, start, goal)
}

fn reconstruct_path(came_from: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    if !came_from.contains_key(&goal) {
        return Vec::new();
    }
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        match came_from.get(&current) {
            Some(&previous) => current = previous,
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
