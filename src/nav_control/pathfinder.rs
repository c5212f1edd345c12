use super::{
    common::Vec2D,
    nav_error::NavError,
    obstacle::{FieldBounds, Obstacle},
    route::{Route, RouteNode},
};
use crate::{event, warn};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// Integer lattice coordinates relative to the search start.
type Cell = (i64, i64);

/// Lattice moves in expansion order: the four axis directions, then the four diagonals.
const NEIGHBOR_OFFSETS: [Cell; 8] = [(0, 1), (1, 0), (0, -1), (-1, 0), (1, 1), (-1, 1), (1, -1), (-1, -1)];

/// A node of one search. Lives in the search arena, `parent` indexes into the same arena.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    cell: Cell,
    pos: Vec2D<f64>,
    g: f64,
    h: f64,
    parent: Option<usize>,
}

impl SearchNode {
    fn f(&self) -> f64 { self.g + self.h }
}

/// A* route search over an 8-connected lattice laid over continuous space.
///
/// The lattice is anchored at the start point and spaced by `grid_step`. A lattice point is
/// blocked if it lies closer than `radius + safety_margin` to any obstacle center. The search
/// terminates as soon as an expanded node is within one grid step of the goal, so the goal
/// does not have to coincide with a lattice point.
///
/// Expanded cells are never reopened, and among equal `f` scores the node that entered the
/// open set first is expanded first. Both rules keep routes reproducible between runs.
#[derive(Debug, Clone)]
pub struct Pathfinder<'a> {
    obstacles: &'a [Obstacle],
    grid_step: f64,
    safety_margin: f64,
    expansion_limit: Option<usize>,
    bounds: Option<FieldBounds>,
}

impl<'a> Pathfinder<'a> {
    pub const DEFAULT_GRID_STEP: f64 = 10.0;
    pub const DEFAULT_SAFETY_MARGIN: f64 = 50.0;

    /// Creates a new pathfinder over a fixed obstacle set.
    ///
    /// # Errors
    /// - [`NavError::InvalidGridStep`] if `grid_step` is not finite and positive.
    /// - [`NavError::InvalidSafetyMargin`] if `safety_margin` is negative or not finite.
    pub fn new(obstacles: &'a [Obstacle], grid_step: f64, safety_margin: f64) -> Result<Self, NavError> {
        if !grid_step.is_finite() || grid_step <= 0.0 {
            return Err(NavError::InvalidGridStep(grid_step));
        }
        if !safety_margin.is_finite() || safety_margin < 0.0 {
            return Err(NavError::InvalidSafetyMargin(safety_margin));
        }
        Ok(Self { obstacles, grid_step, safety_margin, expansion_limit: None, bounds: None })
    }

    /// Creates a pathfinder with a 10 km lattice and a 50 km safety margin.
    pub fn with_defaults(obstacles: &'a [Obstacle]) -> Self {
        Self {
            obstacles,
            grid_step: Self::DEFAULT_GRID_STEP,
            safety_margin: Self::DEFAULT_SAFETY_MARGIN,
            expansion_limit: None,
            bounds: None,
        }
    }

    /// Gives up with an empty route after `limit` expansions.
    #[must_use]
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// Restricts the lattice to points inside `bounds`, which keeps the frontier finite.
    #[must_use]
    pub fn with_bounds(mut self, bounds: FieldBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn grid_step(&self) -> f64 { self.grid_step }

    pub fn safety_margin(&self) -> f64 { self.safety_margin }

    pub fn obstacles(&self) -> &'a [Obstacle] { self.obstacles }

    /// Checks whether `point` violates the inflated circle of any obstacle.
    pub fn is_collision(&self, point: &Vec2D<f64>) -> bool {
        self.obstacles.iter().any(|o| o.collides(point, self.safety_margin))
    }

    /// Searches a route from `start` to `goal`.
    ///
    /// Start and goal are not checked against the obstacles.
    ///
    /// # Returns
    /// The route from `start` to the first lattice point within one grid step of `goal`,
    /// or an empty route if the reachable lattice is exhausted.
    ///
    /// # Errors
    /// [`NavError::NonFiniteCoordinate`] if `start` or `goal` is not finite.
    pub fn find_path(&self, start: Vec2D<f64>, goal: Vec2D<f64>) -> Result<Route, NavError> {
        NavError::check_point(start)?;
        NavError::check_point(goal)?;

        let mut arena = vec![SearchNode {
            cell: (0, 0),
            pos: start,
            g: 0.0,
            h: start.euclid_distance(&goal),
            parent: None,
        }];
        let mut open: Vec<usize> = vec![0];
        let mut open_lookup: HashMap<Cell, usize> = HashMap::from([((0, 0), 0)]);
        let mut closed: HashSet<Cell> = HashSet::new();
        let mut expanded = 0usize;

        loop {
            let Some(slot) = Self::min_f_slot(&arena, &open) else { break };
            let current = open.remove(slot);
            let node = arena[current];
            open_lookup.remove(&node.cell);
            closed.insert(node.cell);
            expanded += 1;

            if node.pos.euclid_distance(&goal) < self.grid_step {
                let route = Self::reconstruct(&arena, current);
                event!(
                    "Route found after {expanded} expansions: {} waypoints, {:.1} km",
                    route.len(),
                    route.length()
                );
                return Ok(route);
            }
            if self.expansion_limit.is_some_and(|limit| expanded >= limit) {
                warn!("Route search from {start} to {goal} aborted after {expanded} expansions");
                return Ok(Route::empty());
            }

            for (dx, dy) in NEIGHBOR_OFFSETS {
                let n_cell = (node.cell.0 + dx, node.cell.1 + dy);
                if closed.contains(&n_cell) {
                    continue;
                }
                let n_pos = self.cell_pos(start, n_cell);
                if self.bounds.is_some_and(|b| !b.contains(&n_pos)) || self.is_collision(&n_pos) {
                    continue;
                }
                let tentative_g = node.g + node.pos.euclid_distance(&n_pos);
                match open_lookup.get(&n_cell) {
                    None => {
                        let idx = arena.len();
                        arena.push(SearchNode {
                            cell: n_cell,
                            pos: n_pos,
                            g: tentative_g,
                            h: n_pos.euclid_distance(&goal),
                            parent: Some(current),
                        });
                        open.push(idx);
                        open_lookup.insert(n_cell, idx);
                    }
                    Some(&idx) if tentative_g < arena[idx].g => {
                        arena[idx].g = tentative_g;
                        arena[idx].parent = Some(current);
                    }
                    Some(_) => {}
                }
            }
        }
        event!("No route from {start} to {goal} after {expanded} expansions");
        Ok(Route::empty())
    }

    /// Position in `open` of the node with the lowest `f`, the earliest one on ties.
    fn min_f_slot(arena: &[SearchNode], open: &[usize]) -> Option<usize> {
        open.iter().position_min_by(|&&a, &&b| arena[a].f().total_cmp(&arena[b].f()))
    }

    #[allow(clippy::cast_precision_loss)]
    fn cell_pos(&self, origin: Vec2D<f64>, cell: Cell) -> Vec2D<f64> {
        Vec2D::new(
            origin.x() + cell.0 as f64 * self.grid_step,
            origin.y() + cell.1 as f64 * self.grid_step,
        )
    }

    fn reconstruct(arena: &[SearchNode], terminal: usize) -> Route {
        let mut nodes = Vec::new();
        let mut cursor = Some(terminal);
        while let Some(idx) = cursor {
            let node = &arena[idx];
            nodes.push(RouteNode::new(node.pos, node.g, node.h));
            cursor = node.parent;
        }
        nodes.reverse();
        Route::new(nodes)
    }
}

/// One-shot route search through `obstacles`.
///
/// # Errors
/// See [`Pathfinder::new`] and [`Pathfinder::find_path`].
pub fn find_path(
    start: Vec2D<f64>,
    goal: Vec2D<f64>,
    obstacles: &[Obstacle],
    grid_step: f64,
    safety_margin: f64,
) -> Result<Route, NavError> {
    Pathfinder::new(obstacles, grid_step, safety_margin)?.find_path(start, goal)
}
