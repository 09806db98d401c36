//! Size and alignment of `regex_t`.
//!
//! The numbers come from the system `<regex.h>` through a probe compiled by
//! `build.rs`. They are widened to cover `libc::regex_t` too, so the region
//! is valid whether C or Rust looks at it.

use std::alloc::Layout;
use std::cmp;
use std::mem;

use crate::error::AllocError;

extern "C" {
    fn regex_slim_sizeof_regex_t() -> usize;
    fn regex_slim_alignof_regex_t() -> usize;
}

/// `sizeof(regex_t)` as seen by the C compiler.
pub fn header_size() -> usize {
    unsafe { regex_slim_sizeof_regex_t() }
}

/// Alignment of `regex_t` as seen by the C compiler.
pub fn header_align() -> usize {
    unsafe { regex_slim_alignof_regex_t() }
}

/// Layout used for every allocation and release of a `regex_t` region.
pub fn regex_layout() -> Result<Layout, AllocError> {
    let size = cmp::max(header_size(), mem::size_of::<libc::regex_t>());
    let align = cmp::max(header_align(), mem::align_of::<libc::regex_t>());
    Layout::from_size_align(size, align).map_err(|_| AllocError { size, align })
}
