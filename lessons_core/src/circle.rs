//! # Circles
//!
//! Area and circumference using the lesson's fixed value of pi
//! ([`Circle::PI`]), not [`std::f64::consts::PI`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    /// Pi to five decimal places, shared by every circle
    #[allow(clippy::approx_constant)]
    pub const PI: f64 = 3.14159;

    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    /// PI * r²
    pub fn area(&self) -> f64 {
        Circle::PI * self.radius.powi(2)
    }

    /// 2 * PI * r
    pub fn circumference(&self) -> f64 {
        2.0 * Circle::PI * self.radius
    }
}
