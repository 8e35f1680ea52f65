use geobound_core::{GeoError, Result, Validate};
use serde::{Deserialize, Serialize};

use crate::{Bound, Point, Shape, ShapeKind};

/// An ordered sequence of points forming a closed loop (first == last).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ring(pub Vec<Point>);

impl Ring {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl From<Bound> for Ring {
    fn from(bound: Bound) -> Self {
        bound.to_ring()
    }
}

impl Shape for Ring {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn dimensions(&self) -> u8 {
        2
    }

    fn bound(&self) -> Bound {
        let Some((&first, rest)) = self.0.split_first() else {
            return Bound::default();
        };
        rest.iter()
            .fold(Bound::new(first, first), |bound, &p| bound.extend(p))
    }
}

impl Validate for Ring {
    fn validate(&self) -> Result<()> {
        if self.len() < 4 {
            log::debug!("ring with {} points rejected", self.len());
            return Err(GeoError::InvalidRing(format!(
                "expected at least 4 points, got {}",
                self.len()
            )));
        }
        if !self.is_closed() {
            log::debug!("open ring rejected");
            return Err(GeoError::InvalidRing(
                "first and last points differ".into(),
            ));
        }
        Ok(())
    }
}
