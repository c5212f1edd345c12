pub mod common;
mod nav_error;
mod obstacle;
mod pathfinder;
mod route;

pub use nav_error::NavError;
pub use obstacle::{FieldBounds, Obstacle, ObstacleField, ResourceProfile};
pub use pathfinder::{Pathfinder, find_path};
pub use route::{Route, RouteNode};
pub use common::{Vec2D, Vec3D};
