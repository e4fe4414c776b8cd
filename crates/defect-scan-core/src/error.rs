/// Errors produced by the region core.
///
/// All variants are recoverable by the caller; none abort processing.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    #[error("cannot insert points into a finalized region set")]
    InsertAfterFinalize,

    #[error("region set is already finalized")]
    AlreadyFinalized,

    #[error("geometry of region {id} queried before finalize")]
    NotFinalized { id: u64 },

    #[error("cannot finalize region {id}: it has no points")]
    EmptyRegion { id: u64 },
}
