use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored game server row carries a status outside `online`/`offline`.
    ///
    /// Only rows written before status enforcement, or by hand, can trigger this.
    #[error("Game server {id} has unknown status '{status}'")]
    UnknownServerStatus {
        /// ID of the game server row
        id: i32,
        /// The stored status value
        status: String,
    },
}
