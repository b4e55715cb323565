//! # People
//!
//! A person's name and age, displayed as "Surname, First". The formatting
//! rule is an associated function so it can be used without a `Person`.
//!
//! ## Example
//!
//! ```rust
//! use lessons_core::person::Person;
//!
//! assert_eq!(Person::format_name_comma("Joe", "Bloggs"), "Bloggs, Joe");
//!
//! let person = Person::new("Joe", "Bloggs", 27);
//! assert_eq!(person.to_string(), "Bloggs, Joe");
//! ```

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::greeting::Greeter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub surname: String,
    pub age: u32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>, age: u32) -> Self {
        Person {
            first_name: first_name.into(),
            surname: surname.into(),
            age,
        }
    }

    /// Format a name as "Surname, First"
    pub fn format_name_comma(first_name: &str, surname: &str) -> String {
        format!("{}, {}", surname, first_name)
    }

    /// Print this person's greeting
    pub fn wave(&self) -> io::Result<()> {
        self.greet()
    }
}

impl Greeter for Person {
    fn greeting(&self) -> String {
        "Hi, I am a person and I am waving!".to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Person::format_name_comma(&self.first_name, &self.surname))
    }
}
