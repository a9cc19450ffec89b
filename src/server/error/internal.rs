use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored room carries a size name outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Room {room_id} has unknown size '{value}'")]
    InvalidRoomSize {
        /// The room whose row is corrupt
        room_id: String,
        /// The stored size value
        value: String,
    },
}
