//! # Book Records
//!
//! A book with a title, author and price, plus an optional page count and
//! publication year. [`Book::description`] renders a multi-line summary that
//! only mentions the optional fields when they are set.
//!
//! ## Example
//!
//! ```rust
//! use lessons_core::book::Book;
//!
//! let book = Book::new("1984", "George Orwell", 6.99).with_year(1949);
//! assert_eq!(
//!     book.description(),
//!     "Title: 1984\nAuthor: George Orwell\nPrice: £6.99\nYear Published: 1949"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// A book record.
///
/// ## JSON Example
///
/// ```json
/// {
///   "title": "1984",
///   "author": "George Orwell",
///   "price": 6.99,
///   "no_pages": 328,
///   "year": 1949
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,

    pub author: String,

    /// Price in pounds sterling
    pub price: f64,

    /// Number of pages, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_pages: Option<u32>,

    /// Year of first publication, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Book {
    /// Create a book with no page count or year
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            price,
            no_pages: None,
            year: None,
        }
    }

    /// Builder method to set the page count
    pub fn with_pages(mut self, no_pages: u32) -> Self {
        self.no_pages = Some(no_pages);
        self
    }

    /// Builder method to set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Multi-line summary of the book.
    ///
    /// The price uses `f64` display, so a whole-number price has no fractional
    /// part (`£7`, not `£7.0`). The year line comes before the page line. A zero year or page count is
    /// treated as unknown and left out.
    pub fn description(&self) -> String {
        let mut lines = vec![
            format!("Title: {}", self.title),
            format!("Author: {}", self.author),
            format!("Price: £{}", self.price),
        ];

        if let Some(year) = self.year.filter(|&y| y != 0) {
            lines.push(format!("Year Published: {}", year));
        }
        if let Some(no_pages) = self.no_pages.filter(|&n| n != 0) {
            lines.push(format!("No. of Pages: {}", no_pages));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orwell() -> Book {
        Book::new("1984", "George Orwell", 6.99)
    }

    #[test]
    fn test_description_required_fields_only() {
        assert_eq!(
            orwell().description(),
            "Title: 1984\nAuthor: George Orwell\nPrice: £6.99"
        );
    }

    #[test]
    fn test_description_with_pages() {
        assert_eq!(
            orwell().with_pages(328).description(),
            "Title: 1984\nAuthor: George Orwell\nPrice: £6.99\nNo. of Pages: 328"
        );
    }

    #[test]
    fn test_description_with_year() {
        assert_eq!(
            orwell().with_year(1949).description(),
            "Title: 1984\nAuthor: George Orwell\nPrice: £6.99\nYear Published: 1949"
        );
    }

    #[test]
    fn test_description_year_before_pages() {
        // Builder order does not affect line order
        let book = orwell().with_pages(328).with_year(1949);
        assert_eq!(
            book.description(),
            "Title: 1984\nAuthor: George Orwell\nPrice: £6.99\nYear Published: 1949\nNo. of Pages: 328"
        );
    }

    #[test]
    fn test_zero_optional_fields_are_omitted() {
        let book = orwell().with_pages(0).with_year(0);
        assert_eq!(book.description(), orwell().description());
    }

    #[test]
    fn test_whole_number_price_has_no_fraction() {
        let book = Book::new("Dune", "Frank Herbert", 7.0);
        assert_eq!(
            book.description(),
            "Title: Dune\nAuthor: Frank Herbert\nPrice: £7"
        );
    }

    #[test]
    fn test_title_change() {
        let mut book = orwell();
        book.title = "Changed the title".to_string();
        assert_eq!(book.title, "Changed the title");
        assert!(book.description().starts_with("Title: Changed the title\n"));
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let json = serde_json::to_string(&orwell()).unwrap();
        assert_eq!(json, r#"{"title":"1984","author":"George Orwell","price":6.99}"#);

        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, orwell());
    }
}
