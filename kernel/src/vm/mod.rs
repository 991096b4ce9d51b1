// SPDX-License-Identifier: MPL-2.0

//! Access to the caller's (untrusted) memory.
//!
//! Memory that belongs to the caller of a system call can never be
//! dereferenced directly. A [`UserSpace`] first validates that a range is
//! mapped with the required permissions and, if so, hands out a bounded
//! [`VmReader`] or [`VmWriter`]. Those views are the only way to copy data
//! across the trust boundary.

mod io;
mod perms;
mod vmar;

pub use io::{Pod, VmReader, VmWriter};
pub use perms::VmPerms;
pub use vmar::UserVmSpace;

use crate::prelude::*;

/// Virtual address in the caller's address space.
pub type Vaddr = usize;

/// The lowest address that may appear in a non-empty user range.
///
/// The null page is never mapped.
pub const VMAR_LOWEST_ADDR: Vaddr = 0x001_0000;
/// The exclusive upper bound of user addresses (47-bit canonical user half).
pub const VMAR_CAP_ADDR: Vaddr = 0x0000_8000_0000_0000;

/// Returns whether `vaddr` and `len` specify a legal user space virtual address range.
///
/// An empty range only has to start below [`VMAR_CAP_ADDR`]. This allows
/// callers to pass a null buffer together with a zero length, which libc
/// relies on to query the size of a list before allocating it.
pub fn is_userspace_vaddr_range(vaddr: Vaddr, len: usize) -> bool {
    if len == 0 {
        return vaddr < VMAR_CAP_ADDR;
    }

    vaddr >= VMAR_LOWEST_ADDR
        && VMAR_CAP_ADDR
            .checked_sub(vaddr)
            .is_some_and(|gap| gap >= len)
}

/// The boundary validator for the caller's memory.
///
/// Implementations must fail with [`Errno::EFAULT`] if the range is not
/// entirely accessible with the requested permission. The check is
/// performed even if `len` is zero.
pub trait UserSpace: Send + Sync {
    /// Validates that `[vaddr, vaddr + len)` is readable and returns a reader over it.
    fn reader(&self, vaddr: Vaddr, len: usize) -> Result<VmReader<'_>>;

    /// Validates that `[vaddr, vaddr + len)` is writable and returns a writer over it.
    fn writer(&self, vaddr: Vaddr, len: usize) -> Result<VmWriter<'_>>;
}
