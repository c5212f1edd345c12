use super::common::{Vec2D, math};

/// A single waypoint of a computed route together with the search costs it was reached with.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteNode {
    pos: Vec2D<f64>,
    /// Accumulated cost from the start.
    g: f64,
    /// Straight-line estimate to the goal.
    h: f64,
}

impl RouteNode {
    pub fn new(pos: Vec2D<f64>, g: f64, h: f64) -> Self { Self { pos, g, h } }

    pub fn pos(&self) -> Vec2D<f64> { self.pos }

    pub fn g(&self) -> f64 { self.g }

    pub fn h(&self) -> f64 { self.h }

    pub fn f(&self) -> f64 { self.g + self.h }
}

/// Ordered waypoints from start to goal, both inclusive.
///
/// An empty route means no collision-free path was found.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Route {
    nodes: Vec<RouteNode>,
}

impl Route {
    pub fn new(nodes: Vec<RouteNode>) -> Self { Self { nodes } }

    pub fn empty() -> Self { Self::default() }

    pub fn nodes(&self) -> &[RouteNode] { &self.nodes }

    pub fn points(&self) -> impl Iterator<Item = Vec2D<f64>> + '_ { self.nodes.iter().map(RouteNode::pos) }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn first(&self) -> Option<&RouteNode> { self.nodes.first() }

    pub fn last(&self) -> Option<&RouteNode> { self.nodes.last() }

    /// Total polyline length through all waypoints.
    pub fn length(&self) -> f64 { math::polyline_length(self.nodes.iter().map(|n| &n.pos)) }

    /// Search cost of the terminal waypoint, `0.0` for an empty route.
    pub fn cost(&self) -> f64 { self.nodes.last().map_or(0.0, RouteNode::g) }
}
