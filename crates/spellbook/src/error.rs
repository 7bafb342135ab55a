//! Error types for the spellbook crate.
//!
//! # Error Handling
//!
//! The most common errors you'll encounter are:
//!
//! - [`Error::Api`]: Scryfall answered with an error object (e.g., no card matched a name)
//! - [`Error::Http`]: the request never completed (network failure, timeout)
//!
//! # Example
//!
//! ```no_run
//! use spellbook::{Error, ScryfallClient};
//!
//! # async fn example() {
//! let client = ScryfallClient::new();
//!
//! match client.cards().fuzzy("jukai presrver").await {
//!     Ok(card) => println!("Resolved to {:?}", card.name),
//!     Err(Error::Api { status: 404, details, .. }) => {
//!         eprintln!("No such card: {}", details);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for Scryfall operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Scryfall returned an error object.
    ///
    /// Common codes include:
    /// - `not_found`: no card matched the name or id
    /// - `ambiguous`: a fuzzy name matched more than one card
    /// - `bad_request`: the search query could not be parsed
    #[error("Scryfall error {status} ({code}): {details}")]
    Api {
        /// HTTP status reported by Scryfall.
        status: u16,
        /// Machine-readable error code.
        code: String,
        /// Human-readable explanation.
        details: String,
    },

    /// Response body was empty.
    #[error("Scryfall returned an empty response")]
    EmptyResponse,

    /// JSON serialization/deserialization error.
    ///
    /// May occur if Scryfall returns a shape these types don't model.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means the requested object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }
}

/// A specialized Result type for Scryfall operations.
pub type Result<T> = std::result::Result<T, Error>;
