use super::{common::Vec2D, nav_error::NavError};
use rand::Rng;

/// Mineral composition of an asteroid, each entry a percentage in `[0, 100]`.
///
/// Carried for display purposes only, the pathfinder never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ResourceProfile {
    pub platinum: f64,
    pub gold: f64,
    pub water: f64,
    pub rare_earth: f64,
}

impl ResourceProfile {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            platinum: rng.random::<f64>() * 100.0,
            gold: rng.random::<f64>() * 100.0,
            water: rng.random::<f64>() * 100.0,
            rare_earth: rng.random::<f64>() * 100.0,
        }
    }
}

/// A circular obstacle in the navigation plane.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Obstacle {
    id: String,
    pos: Vec2D<f64>,
    radius: f64,
    resources: ResourceProfile,
}

impl Obstacle {
    /// Creates a new obstacle, rejecting non-finite centers and non-positive radii.
    pub fn new(
        id: impl Into<String>,
        pos: Vec2D<f64>,
        radius: f64,
        resources: ResourceProfile,
    ) -> Result<Self, NavError> {
        let id = id.into();
        NavError::check_point(pos)?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(NavError::InvalidRadius { id, radius });
        }
        Ok(Self { id, pos, radius, resources })
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn pos(&self) -> Vec2D<f64> { self.pos }

    pub fn radius(&self) -> f64 { self.radius }

    pub fn resources(&self) -> &ResourceProfile { &self.resources }

    /// Returns `true` if `point` lies strictly closer to the center than `radius + margin`.
    pub fn collides(&self, point: &Vec2D<f64>, margin: f64) -> bool {
        point.strictly_within(&self.pos, self.radius + margin)
    }
}

/// Axis-aligned extent of an obstacle field.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl FieldBounds {
    pub fn contains(&self, point: &Vec2D<f64>) -> bool {
        (self.min_x..=self.max_x).contains(&point.x()) && (self.min_y..=self.max_y).contains(&point.y())
    }
}

/// A generated asteroid field.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ObstacleField {
    id: String,
    obstacles: Vec<Obstacle>,
    bounds: FieldBounds,
}

impl ObstacleField {
    /// Keeps generated centers this far away from the field edges.
    const EDGE_CLEARANCE: f64 = 50.0;
    const MIN_RADIUS: f64 = 10.0;
    const RADIUS_SPAN: f64 = 20.0;

    /// Generates `count` random asteroids inside a `width` x `height` field.
    ///
    /// Centers are uniform in `[50, width - 50) x [50, height - 50)`, radii uniform in `[10, 30)`.
    ///
    /// # Errors
    /// Returns [`NavError::NonFiniteCoordinate`] if the dimensions are not finite or leave
    /// no room for the edge clearance.
    pub fn generate<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        count: usize,
    ) -> Result<Self, NavError> {
        let usable = Vec2D::new(width - 2.0 * Self::EDGE_CLEARANCE, height - 2.0 * Self::EDGE_CLEARANCE);
        if !usable.is_finite() || usable.x() < 0.0 || usable.y() < 0.0 {
            return Err(NavError::NonFiniteCoordinate { x: width, y: height });
        }
        let obstacles = (0..count)
            .map(|i| {
                let pos = Vec2D::new(
                    rng.random::<f64>() * usable.x() + Self::EDGE_CLEARANCE,
                    rng.random::<f64>() * usable.y() + Self::EDGE_CLEARANCE,
                );
                let radius = rng.random::<f64>() * Self::RADIUS_SPAN + Self::MIN_RADIUS;
                Obstacle::new(format!("asteroid-{i}"), pos, radius, ResourceProfile::random(&mut *rng))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: format!("field-{}", chrono::Utc::now().timestamp_millis()),
            obstacles,
            bounds: FieldBounds { min_x: 0.0, max_x: width, min_y: 0.0, max_y: height },
        })
    }

    /// Wraps an existing obstacle set.
    pub fn from_obstacles(id: impl Into<String>, obstacles: Vec<Obstacle>, bounds: FieldBounds) -> Self {
        Self { id: id.into(), obstacles, bounds }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn obstacles(&self) -> &[Obstacle] { &self.obstacles }

    pub fn bounds(&self) -> FieldBounds { self.bounds }

    /// Returns the first obstacle whose inflated circle contains `point`.
    pub fn first_collision(&self, point: &Vec2D<f64>, margin: f64) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.collides(point, margin))
    }
}
