use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;
use std::slice;

use libc::regex_t;

use crate::error::AllocError;
use crate::memory;

/// Owned heap storage for one `regex_t`, released when dropped.
///
/// The storage starts uninitialized. Whatever the regex library puts in it
/// is the caller's business: if `regcomp` succeeded on it, call `regfree`
/// before dropping, or the library's own allocations leak.
pub struct RegexStorage {
    ptr: NonNull<regex_t>,
}

// The region is plain heap memory with a single owner.
unsafe impl Send for RegexStorage {}

impl RegexStorage {
    pub fn new() -> Result<Self, AllocError> {
        memory::allocate().map(|ptr| RegexStorage { ptr })
    }

    pub fn as_ptr(&self) -> *const regex_t {
        self.ptr.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut regex_t {
        self.ptr.as_ptr()
    }

    /// Size of the region in bytes.
    pub fn len(&self) -> usize {
        crate::layout::regex_layout()
            .map(|layout| layout.size())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole region as raw bytes.
    pub fn as_uninit_bytes_mut(&mut self) -> &mut [MaybeUninit<u8>] {
        let len = self.len();
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast::<MaybeUninit<u8>>(), len) }
    }

    /// Gives the region to a foreign owner, who must hand it back through
    /// [`RegexStorage::from_raw`] or `free_regex_t`.
    pub fn into_raw(self) -> *mut regex_t {
        let ptr = self.ptr.as_ptr();
        mem::forget(self);
        ptr
    }

    /// Takes ownership of a region. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` is null or came from `alloc_regex_t` / [`RegexStorage::into_raw`]
    /// and is not owned by anything else.
    pub unsafe fn from_raw(ptr: *mut regex_t) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| RegexStorage { ptr })
    }
}

impl Drop for RegexStorage {
    fn drop(&mut self) {
        unsafe { memory::release(self.ptr.as_ptr()) }
    }
}

impl fmt::Debug for RegexStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexStorage").field("ptr", &self.ptr).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    #[test]
    fn storage_spans_full_layout() {
        let mut storage = RegexStorage::new().unwrap();
        let layout = layout::regex_layout().unwrap();
        assert_eq!(storage.len(), layout.size());
        assert!(!storage.is_empty());
        assert_eq!(storage.as_ptr() as usize % layout.align(), 0);

        for byte in storage.as_uninit_bytes_mut() {
            *byte = MaybeUninit::new(0xa5);
        }
        let bytes = storage.as_uninit_bytes_mut();
        assert!(bytes.iter().all(|b| unsafe { b.assume_init() } == 0xa5));
    }

    #[test]
    fn raw_round_trip_keeps_address() {
        let storage = RegexStorage::new().unwrap();
        let addr = storage.as_ptr();
        let raw = storage.into_raw();
        assert_eq!(raw as *const regex_t, addr);

        let storage = unsafe { RegexStorage::from_raw(raw) }.unwrap();
        assert_eq!(storage.as_ptr(), addr);
    }

    #[test]
    fn from_raw_null_is_none() {
        assert!(unsafe { RegexStorage::from_raw(std::ptr::null_mut()) }.is_none());
    }

    #[test]
    fn storage_moves_across_threads() {
        let mut storage = RegexStorage::new().unwrap();
        storage.as_uninit_bytes_mut()[0] = MaybeUninit::new(7);
        let handle = std::thread::spawn(move || {
            let mut storage = storage;
            unsafe { storage.as_uninit_bytes_mut()[0].assume_init() }
        });
        assert_eq!(handle.join().unwrap(), 7);
    }
}
