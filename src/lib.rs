//! Heap storage for POSIX `regex_t`.
//!
//! Some host languages can call `regcomp`/`regexec` but cannot allocate a
//! `regex_t` because its layout lives in a C header. This library exports a
//! matching allocate/free pair over the C ABI, and [`RegexStorage`] for Rust
//! callers. `regex_slim.h` declares the C side.

pub mod error;
pub mod handle;
pub mod layout;
pub mod memory;

use std::ptr;

use libc::regex_t;

pub use error::AllocError;
pub use handle::RegexStorage;

/// Returns uninitialized storage for one `regex_t`, or null if the heap is
/// exhausted.
#[no_mangle]
pub extern "C" fn alloc_regex_t() -> *mut regex_t {
    match memory::allocate() {
        Ok(ptr) => ptr.as_ptr(),
        Err(_) => ptr::null_mut(),
    }
}

/// Frees storage from `alloc_regex_t`. Null is a no-op; anything else must
/// be freed exactly once.
#[no_mangle]
pub unsafe extern "C" fn free_regex_t(ptr: *mut regex_t) {
    memory::release(ptr);
}

/// Size in bytes of the storage `alloc_regex_t` returns. 0 means the
/// layout was invalid and `alloc_regex_t` will return null.
#[no_mangle]
pub extern "C" fn regex_t_size() -> usize {
    layout::regex_layout().map(|l| l.size()).unwrap_or(0)
}

/// Alignment of the storage `alloc_regex_t` returns. 0 means the layout was
/// invalid.
#[no_mangle]
pub extern "C" fn regex_t_align() -> usize {
    layout::regex_layout().map(|l| l.align()).unwrap_or(0)
}
