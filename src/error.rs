use thiserror::Error;

/// The only failure this crate reports: the heap would not hand out a
/// `regex_t`-sized region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to allocate {size} bytes (align {align}) for regex_t")]
pub struct AllocError {
    pub size: usize,
    pub align: usize,
}
