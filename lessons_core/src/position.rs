//! # Bounded Position
//!
//! A 2D position whose coordinates are each capped by an upper bound fixed at
//! construction. Every write goes through the same validating path, including
//! the initial values passed to [`BoundedPosition::new`].
//!
//! ## Assign-then-validate
//!
//! A setter stores the new value *before* checking it. When the check fails the
//! error is returned, but the field keeps the rejected value:
//!
//! ```rust
//! use lessons_core::position::BoundedPosition;
//!
//! let mut p = BoundedPosition::new(0.0, 0.0, 10.0, 8.0).unwrap();
//! let err = p.set_y(13.0).unwrap_err();
//! assert_eq!(err.to_string(), "y cannot be bigger than 8");
//! assert_eq!(p.y(), 13.0);
//! assert!(!p.is_within_bounds());
//!
//! // Re-setting a valid value is the only way back
//! p.set_y(3.0).unwrap();
//! assert!(p.is_within_bounds());
//! ```
//!
//! There is no lower bound.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{LessonError, LessonResult};

/// Coordinate axis of a [`BoundedPosition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes, in assignment order
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Lowercase axis name as used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 2D position with per-axis upper bounds.
///
/// ## JSON Example
///
/// ```json
/// { "x": 2.0, "y": 3.0, "x_upper": 10.0, "y_upper": 15.0 }
/// ```
///
/// Deserialization runs the same checks as [`BoundedPosition::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct BoundedPosition {
    x: f64,
    y: f64,
    x_upper: f64,
    y_upper: f64,
}

/// Unvalidated wire form of a [`BoundedPosition`]
#[derive(Deserialize)]
struct RawPosition {
    x: f64,
    y: f64,
    x_upper: f64,
    y_upper: f64,
}

impl TryFrom<RawPosition> for BoundedPosition {
    type Error = LessonError;

    fn try_from(raw: RawPosition) -> LessonResult<Self> {
        BoundedPosition::new(raw.x, raw.y, raw.x_upper, raw.y_upper)
    }
}

impl BoundedPosition {
    /// Create a new position.
    ///
    /// The bounds are stored first, then `x` and `y` are assigned through
    /// [`set_x`](Self::set_x) and [`set_y`](Self::set_y), so an out-of-range
    /// initial value fails exactly like a later mutation would.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lessons_core::position::BoundedPosition;
    ///
    /// let p = BoundedPosition::new(2.0, 3.0, 10.0, 10.0).unwrap();
    /// assert_eq!((p.x(), p.y()), (2.0, 3.0));
    ///
    /// assert!(BoundedPosition::new(11.0, 0.0, 10.0, 10.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, x_upper: f64, y_upper: f64) -> LessonResult<Self> {
        log::trace!("new position: x={x}, y={y}, x_upper={x_upper}, y_upper={y_upper}");
        let mut position = BoundedPosition {
            x: 0.0,
            y: 0.0,
            x_upper,
            y_upper,
        };
        position.set_x(x)?;
        position.set_y(y)?;
        Ok(position)
    }

    /// Current x coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Current y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn x_upper(&self) -> f64 {
        self.x_upper
    }

    pub fn y_upper(&self) -> f64 {
        self.y_upper
    }

    /// Current coordinate on `axis`
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Upper bound on `axis`
    pub fn bound(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_upper,
            Axis::Y => self.y_upper,
        }
    }

    /// Store `value` on `axis`, then check it against the axis bound.
    ///
    /// On failure the value stays stored.
    pub fn set(&mut self, axis: Axis, value: f64) -> LessonResult<()> {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }

        let bound = self.bound(axis);
        if exceeds(value, bound) {
            log::debug!("rejected {axis}={value}: above bound {bound}");
            return Err(LessonError::out_of_range(axis, value, bound));
        }
        Ok(())
    }

    /// Set the x coordinate. See [`set`](Self::set).
    pub fn set_x(&mut self, value: f64) -> LessonResult<()> {
        self.set(Axis::X, value)
    }

    /// Set the y coordinate. See [`set`](Self::set).
    pub fn set_y(&mut self, value: f64) -> LessonResult<()> {
        self.set(Axis::Y, value)
    }

    /// Move along x by `delta` (the `p.x += delta` idiom)
    pub fn shift_x(&mut self, delta: f64) -> LessonResult<()> {
        self.set_x(self.x + delta)
    }

    /// Move along y by `delta` (the `p.y += delta` idiom)
    pub fn shift_y(&mut self, delta: f64) -> LessonResult<()> {
        self.set_y(self.y + delta)
    }

    /// False only after a rejected mutation left an out-of-range value stored
    pub fn is_within_bounds(&self) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| !exceeds(self.get(axis), self.bound(axis)))
    }
}

/// The single rejection rule. NaN on either side never exceeds.
fn exceeds(value: f64, bound: f64) -> bool {
    value > bound
}

impl fmt::Display for BoundedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} and y={}", self.x, self.y)
    }
}
