use std::alloc::Layout;
use std::ptr::NonNull;

use libc::regex_t;
use tracing::{trace, warn};

use crate::error::AllocError;
use crate::layout;

/// Source of raw memory for `regex_t` regions.
///
/// # Safety
///
/// `alloc` must return either null or a pointer valid for `layout`, and
/// `dealloc` must accept any pointer `alloc` returned with the same layout.
pub unsafe trait RawAllocator {
    fn alloc(&self, layout: Layout) -> *mut u8;

    /// # Safety
    ///
    /// `ptr` came from `self.alloc(layout)` and has not been released yet.
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout);
}

/// The Rust global allocator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

unsafe impl RawAllocator for Global {
    fn alloc(&self, layout: Layout) -> *mut u8 {
        // regex_t is never zero-sized, so the layout is always valid for alloc
        unsafe { std::alloc::alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        std::alloc::dealloc(ptr, layout);
    }
}

/// Allocates one uninitialized `regex_t` region from `allocator`.
pub fn allocate_in<A: RawAllocator + ?Sized>(
    allocator: &A,
) -> Result<NonNull<regex_t>, AllocError> {
    let layout = layout::regex_layout()?;
    if layout.size() == 0 {
        return Err(AllocError { size: 0, align: layout.align() });
    }

    match NonNull::new(allocator.alloc(layout).cast::<regex_t>()) {
        Some(ptr) => {
            trace!(ptr = ?ptr.as_ptr(), size = layout.size(), "allocated regex_t");
            Ok(ptr)
        }
        None => {
            let err = AllocError {
                size: layout.size(),
                align: layout.align(),
            };
            warn!(%err, "regex_t allocation failed");
            Err(err)
        }
    }
}

/// Returns a region to `allocator`. Null is ignored.
///
/// # Safety
///
/// `ptr` is null or came from `allocate_in(allocator)` and has not been
/// released yet. Nothing is checked.
pub unsafe fn release_in<A: RawAllocator + ?Sized>(allocator: &A, ptr: *mut regex_t) {
    if ptr.is_null() {
        return;
    }
    // a region only exists if the layout was valid when it was allocated
    let layout = match layout::regex_layout() {
        Ok(layout) => layout,
        Err(_) => return,
    };
    trace!(?ptr, "released regex_t");
    allocator.dealloc(ptr.cast::<u8>(), layout);
}

pub fn allocate() -> Result<NonNull<regex_t>, AllocError> {
    allocate_in(&Global)
}

/// # Safety
///
/// See [`release_in`].
pub unsafe fn release(ptr: *mut regex_t) {
    release_in(&Global, ptr)
}
