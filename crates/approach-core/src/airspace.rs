//! Static airspace definition: bounds, entry/exit points, navaids,
//! no-fly cells and weighted routes.
//!
//! An [`Airspace`] is immutable once built. Planes borrow its entry points
//! for their whole lifetime, so identity comparisons ("is this my exit?")
//! stay consistent.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::AirspaceError;
use crate::types::{Direction, Position};

/// A named boundary or airport cell where planes appear and disappear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    /// Unique single-character key.
    pub sign: char,
    pub position: Position,
    /// Runway heading. Only meaningful for airports.
    pub direction: Direction,
    pub is_airport: bool,
}

/// A weighted entry-to-exit flight route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub entry: char,
    pub exit: char,
    /// Heading at the entry point.
    pub direction: Direction,
    pub weight: u32,
}

/// Validated, read-only airspace.
#[derive(Debug, Clone)]
pub struct Airspace {
    width: i32,
    height: i32,
    entry_points: BTreeMap<char, EntryPoint>,
    navaids: Vec<Position>,
    no_fly: HashSet<Position>,
    routes: Vec<Route>,
}

impl Airspace {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    pub fn navaid_at(&self, p: Position) -> Option<Position> {
        self.navaids.iter().copied().find(|n| *n == p)
    }

    pub fn entry_point_at(&self, p: Position) -> Option<&EntryPoint> {
        self.entry_points.values().find(|ep| ep.position == p)
    }

    pub fn entry_point(&self, sign: char) -> Option<&EntryPoint> {
        self.entry_points.get(&sign)
    }

    /// Entry points ordered by sign.
    pub fn entry_points(&self) -> impl Iterator<Item = &EntryPoint> {
        self.entry_points.values()
    }

    pub fn navaids(&self) -> &[Position] {
        &self.navaids
    }

    pub fn is_no_fly(&self, p: Position) -> bool {
        self.no_fly.contains(&p)
    }

    pub fn no_fly(&self) -> &HashSet<Position> {
        &self.no_fly
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Programmatic airspace construction with validation in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct AirspaceBuilder {
    width: i32,
    height: i32,
    entry_points: Vec<EntryPoint>,
    navaids: Vec<Position>,
    no_fly: Vec<Position>,
    routes: Vec<Route>,
}

impl AirspaceBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Add an open-airspace entry/exit point on the boundary.
    pub fn entry(mut self, sign: char, position: Position) -> Self {
        self.entry_points.push(EntryPoint {
            sign,
            position,
            direction: Direction::default(),
            is_airport: false,
        });
        self
    }

    /// Add an airport whose runway points along `direction`.
    pub fn airport(mut self, sign: char, position: Position, direction: Direction) -> Self {
        self.entry_points.push(EntryPoint {
            sign,
            position,
            direction,
            is_airport: true,
        });
        self
    }

    pub fn navaid(mut self, position: Position) -> Self {
        self.navaids.push(position);
        self
    }

    pub fn no_fly(mut self, position: Position) -> Self {
        self.no_fly.push(position);
        self
    }

    pub fn route(mut self, entry: char, exit: char, direction: Direction, weight: u32) -> Self {
        self.routes.push(Route {
            entry,
            exit,
            direction,
            weight,
        });
        self
    }

    /// Validate and freeze the airspace.
    pub fn build(self) -> Result<Airspace, AirspaceError> {
        let (width, height) = (self.width, self.height);
        if width <= 0 || height <= 0 {
            return Err(AirspaceError::EmptyBounds { width, height });
        }

        let in_bounds = |what: &'static str, position: Position| {
            if position.x >= 0 && position.y >= 0 && position.x < width && position.y < height {
                Ok(())
            } else {
                Err(AirspaceError::OutOfBounds {
                    what,
                    position,
                    width,
                    height,
                })
            }
        };

        let mut entry_points = BTreeMap::new();
        for ep in self.entry_points {
            in_bounds("entry point", ep.position)?;
            if entry_points.contains_key(&ep.sign) {
                return Err(AirspaceError::DuplicateSign(ep.sign));
            }
            entry_points.insert(ep.sign, ep);
        }
        for &p in &self.navaids {
            in_bounds("navaid", p)?;
        }
        for &p in &self.no_fly {
            in_bounds("no-fly cell", p)?;
        }

        for route in &self.routes {
            for sign in [route.entry, route.exit] {
                if !entry_points.contains_key(&sign) {
                    return Err(AirspaceError::UnknownEntryPoint {
                        entry: route.entry,
                        exit: route.exit,
                        missing: sign,
                    });
                }
            }
        }
        if !self.routes.is_empty() && self.routes.iter().all(|r| r.weight == 0) {
            return Err(AirspaceError::ZeroRouteWeights);
        }

        Ok(Airspace {
            width,
            height,
            entry_points,
            navaids: self.navaids,
            no_fly: self.no_fly.into_iter().collect(),
            routes: self.routes,
        })
    }
}
