//! # lessons_core - Introductory Object-Oriented Lessons
//!
//! Each module is one lesson: a small type, its behavior, and its tests. The
//! lessons are independent of each other.
//!
//! ## Quick Start
//!
//! ```rust
//! use lessons_core::BoundedPosition;
//!
//! let mut p = BoundedPosition::new(0.0, 0.0, 10.0, 15.0)?;
//! p.set_x(2.0)?;
//! p.shift_y(3.0)?;
//! assert_eq!(p.to_string(), "x=2 and y=3");
//!
//! let err = p.shift_y(13.0).unwrap_err();
//! assert_eq!(err.to_string(), "y cannot be bigger than 15");
//! # Ok::<(), lessons_core::LessonError>(())
//! ```
//!
//! ## Modules
//!
//! - [`greeting`] - Lesson 1: types that greet
//! - [`book`] - Lesson 2: book records with optional fields
//! - [`point`] - Lesson 3: 2D points with arithmetic operators
//! - [`circle`] - Lesson 4: circle geometry with a class-level constant
//! - [`person`] - Lesson 5: names with an associated formatter
//! - [`position`] - Lesson 6: bounds-checked 2D position
//! - [`errors`] - Structured error types
//!
//! ## Logging
//!
//! The crate emits records through the [`log`] facade (rejected position
//! mutations at `debug`). It never installs a logger.

pub mod book;
pub mod circle;
pub mod errors;
pub mod greeting;
pub mod person;
pub mod point;
pub mod position;

// Re-export commonly used types at crate root for convenience
pub use book::Book;
pub use circle::Circle;
pub use errors::{LessonError, LessonResult};
pub use greeting::{Greeter, Pet};
pub use person::Person;
pub use point::Point;
pub use position::{Axis, BoundedPosition};
