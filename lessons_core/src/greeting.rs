//! # Greetings
//!
//! Types that introduce themselves with a fixed line of text. The text is
//! available as a value for callers that want to route it somewhere, and
//! [`Greeter::greet`] prints it to stdout.
//!
//! ## Example
//!
//! ```rust
//! use lessons_core::greeting::{Greeter, Pet};
//!
//! let mut out = Vec::new();
//! Pet.greet_to(&mut out).unwrap();
//! assert_eq!(out, b"Hi, I am an instance of pet\n");
//! ```

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Something that can say hello.
pub trait Greeter {
    /// The greeting line, without a trailing newline
    fn greeting(&self) -> String;

    /// Write the greeting line to `out`
    fn greet_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.greeting())
    }

    /// Print the greeting line to stdout
    fn greet(&self) -> io::Result<()> {
        self.greet_to(&mut io::stdout().lock())
    }
}

/// A pet. Every instance greets the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pet;

impl Pet {
    /// Print this pet's greeting
    pub fn talk(&self) -> io::Result<()> {
        self.greet()
    }
}

impl Greeter for Pet {
    fn greeting(&self) -> String {
        "Hi, I am an instance of pet".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_greeting() {
        let pet_one = Pet;
        let pet_two = Pet::default();
        assert_eq!(pet_one.greeting(), "Hi, I am an instance of pet");
        assert_eq!(pet_one.greeting(), pet_two.greeting());
    }

    #[test]
    fn test_greet_to_writes_single_line() {
        let mut out = Vec::new();
        Pet.greet_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Hi, I am an instance of pet\n");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_talk_prints_to_stdout() {
        assert!(Pet.talk().is_ok());
    }
}
