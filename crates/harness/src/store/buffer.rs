//! Record backing buffer.
//!
//! This module provides an owning wrapper around the raw memory that backs the
//! record store. On Unix systems the memory is an anonymous private `mmap`,
//! which the kernel hands out zero-filled and page-aligned; elsewhere it is a
//! `Vec` grown with `try_reserve_exact`. Either way an allocation failure is
//! reported as an error instead of aborting the process, and the memory is
//! released when the buffer is dropped.

use std::fmt;
use std::ptr::NonNull;
use std::slice;

use super::Record;
use crate::error::{BenchError, Result};

/// Where the records actually live.
enum Backing {
    /// Anonymous mapping obtained from `mmap`.
    #[cfg(unix)]
    Mapped { ptr: NonNull<Record>, len: usize },
    /// Ordinary heap allocation (non-Unix targets and empty buffers).
    Heap(Vec<Record>),
}

/// A fixed-length, zero-initialized buffer of records.
pub struct RecordBuffer {
    backing: Backing,
}

// SAFETY: the mapping is owned exclusively by this buffer; shared access only
// ever produces `&[Record]`, and `Record` is plain data.
unsafe impl Send for RecordBuffer {}
// SAFETY: see above; there is no interior mutability.
unsafe impl Sync for RecordBuffer {}

impl RecordBuffer {
    /// Allocates a buffer of `len` zeroed records.
    ///
    /// # Arguments
    ///
    /// * `len` - Number of records.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Allocation`] if the byte size overflows or the
    /// operating system refuses the allocation.
    pub fn zeroed(len: usize) -> Result<Self> {
        let bytes = len
            .checked_mul(size_of::<Record>())
            .ok_or(BenchError::Allocation {
                what: "record array",
                bytes: usize::MAX,
            })?;

        if len == 0 {
            return Ok(Self {
                backing: Backing::Heap(Vec::new()),
            });
        }

        #[cfg(unix)]
        {
            // SAFETY: anonymous private mapping with no fixed address; the
            // result is checked against MAP_FAILED before use.
            let raw = unsafe {
                libc::mmap(
                    std::ptr::null_mut(),
                    bytes,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };

            if raw == libc::MAP_FAILED {
                return Err(BenchError::Allocation {
                    what: "record array",
                    bytes,
                });
            }

            let ptr = NonNull::new(raw.cast::<Record>()).ok_or(BenchError::Allocation {
                what: "record array",
                bytes,
            })?;

            Ok(Self {
                backing: Backing::Mapped { ptr, len },
            })
        }

        #[cfg(not(unix))]
        {
            let mut records = Vec::new();
            records
                .try_reserve_exact(len)
                .map_err(|_| BenchError::Allocation {
                    what: "record array",
                    bytes,
                })?;
            records.resize(len, Record::default());
            Ok(Self {
                backing: Backing::Heap(records),
            })
        }
    }

    /// Number of records in the buffer.
    pub fn len(&self) -> usize {
        match &self.backing {
            #[cfg(unix)]
            Backing::Mapped { len, .. } => *len,
            Backing::Heap(records) => records.len(),
        }
    }

    /// Returns `true` if the buffer holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the records live in an `mmap` region.
    pub fn is_mapped(&self) -> bool {
        match &self.backing {
            #[cfg(unix)]
            Backing::Mapped { .. } => true,
            Backing::Heap(_) => false,
        }
    }

    /// Views the buffer as a slice of records.
    pub fn as_slice(&self) -> &[Record] {
        match &self.backing {
            #[cfg(unix)]
            // SAFETY: `ptr` covers `len` records of a live mapping that was
            // zero-filled by the kernel, and all-zero bits are a valid `Record`.
            Backing::Mapped { ptr, len } => unsafe { slice::from_raw_parts(ptr.as_ptr(), *len) },
            Backing::Heap(records) => records.as_slice(),
        }
    }

    /// Views the buffer as a mutable slice of records.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Record] {
        match &mut self.backing {
            #[cfg(unix)]
            // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
            Backing::Mapped { ptr, len } => unsafe {
                slice::from_raw_parts_mut(ptr.as_ptr(), *len)
            },
            Backing::Heap(records) => records.as_mut_slice(),
        }
    }
}

impl Drop for RecordBuffer {
    /// Unmaps the mapping; heap storage is freed by the `Vec` itself.
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Backing::Mapped { ptr, len } = self.backing {
            // SAFETY: the region was mapped in `zeroed` with exactly this size
            // and no slice borrowed from it can outlive `self`.
            unsafe {
                let _ = libc::munmap(ptr.as_ptr().cast(), len * size_of::<Record>());
            }
        }
    }
}

impl fmt::Debug for RecordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordBuffer")
            .field("len", &self.len())
            .field("mapped", &self.is_mapped())
            .finish()
    }
}
