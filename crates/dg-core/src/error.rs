//! Generation errors.

use thiserror::Error;

/// Errors a generation run can fail with.
///
/// Generation is atomic: any error aborts the run and no partial dungeon
/// is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// The partition produced no room at least the minimum size.
    #[error(
        "no rooms fit: {width}x{height} region cannot hold a {min_width}x{min_height} room"
    )]
    NoRooms {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },

    /// The nearest-candidate search was handed an empty candidate list.
    #[error("corridor routing ran out of candidates")]
    NoCandidates,
}
