use geobound_core::{GeoError, Result, Validate};
use serde::{Deserialize, Serialize};

use crate::{Bound, Ring, Shape, ShapeKind};

/// An exterior ring followed by any number of holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon(pub Vec<Ring>);

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self(rings)
    }

    pub fn rings(&self) -> &[Ring] {
        &self.0
    }

    pub fn exterior(&self) -> Option<&Ring> {
        self.0.first()
    }
}

impl From<Ring> for Polygon {
    fn from(ring: Ring) -> Self {
        Self(vec![ring])
    }
}

impl From<Vec<Ring>> for Polygon {
    fn from(rings: Vec<Ring>) -> Self {
        Self(rings)
    }
}

impl From<Bound> for Polygon {
    fn from(bound: Bound) -> Self {
        bound.to_polygon()
    }
}

impl Shape for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn dimensions(&self) -> u8 {
        2
    }

    /// Holes lie inside the exterior, so only the exterior ring counts.
    fn bound(&self) -> Bound {
        self.exterior().map(Ring::bound).unwrap_or_default()
    }
}

impl Validate for Polygon {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            log::debug!("polygon without rings rejected");
            return Err(GeoError::InvalidPolygon("no rings".into()));
        }
        self.0.iter().try_for_each(Validate::validate)
    }
}
