//! Mapping from domain errors to status/body pairs.

use tracing::error;

use super::response::Response;
use crate::domain::error::NotesError;

/// Literal body message for unparseable request payloads.
pub const ERR_INVALID_PAYLOAD: &str = "invalid payload";

/// Maps a store-side error to its response. Validation failures are the
/// client's fault; everything that crossed the store boundary surfaces as
/// a 500 with the underlying error text.
pub fn map_notes_error(err: &NotesError) -> Response {
    match err {
        NotesError::Validation { message } => Response::bad_request(message),
        NotesError::AmbiguousRecord { .. } => {
            error!(error = %err, "store integrity violation");
            Response::internal_error(err)
        }
        NotesError::Store { .. } | NotesError::Serialization { .. } => {
            error!(error = %err, "store call failed");
            Response::internal_error(err)
        }
        NotesError::UnknownTopic { .. } => Response::internal_error(err),
    }
}
