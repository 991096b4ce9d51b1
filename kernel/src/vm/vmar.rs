// SPDX-License-Identifier: MPL-2.0

use core::sync::atomic::{AtomicU8, Ordering};

use super::{is_userspace_vaddr_range, UserSpace, VmPerms};
use crate::prelude::*;

/// An in-memory user address space.
///
/// It consists of non-overlapping mappings, each with its own permissions.
/// Mappings are installed while the address space is being set up and are
/// immutable afterwards, so validated views can be handed out with only a
/// shared borrow of the address space.
#[derive(Default)]
pub struct UserVmSpace {
    /// Mappings keyed by their start address.
    mappings: BTreeMap<Vaddr, VmMapping>,
}

struct VmMapping {
    perms: VmPerms,
    bytes: Box<[AtomicU8]>,
}

impl VmMapping {
    fn end(&self, base: Vaddr) -> Vaddr {
        base + self.bytes.len()
    }
}

impl UserVmSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `len` zero-filled bytes at `vaddr` with the given permissions.
    pub fn map(&mut self, vaddr: Vaddr, len: usize, perms: VmPerms) -> Result<()> {
        self.map_with(vaddr, &vec![0u8; len], perms)
    }

    /// Maps a copy of `contents` at `vaddr` with the given permissions.
    pub fn map_with(&mut self, vaddr: Vaddr, contents: &[u8], perms: VmPerms) -> Result<()> {
        if contents.is_empty() || !is_userspace_vaddr_range(vaddr, contents.len()) {
            return_errno_with_message!(Errno::EINVAL, "the mapping is not a user space range");
        }

        let end = vaddr + contents.len();
        let overlaps_prev = self
            .mappings
            .range(..end)
            .next_back()
            .is_some_and(|(base, mapping)| mapping.end(*base) > vaddr);
        if overlaps_prev {
            return_errno_with_message!(Errno::EINVAL, "the mapping overlaps an existing one");
        }

        let bytes = contents.iter().map(|byte| AtomicU8::new(*byte)).collect();
        self.mappings.insert(vaddr, VmMapping { perms, bytes });
        Ok(())
    }

    /// Finds the bytes of `[vaddr, vaddr + len)` if a single mapping with
    /// `perms` covers the range.
    fn lookup(&self, vaddr: Vaddr, len: usize, perms: VmPerms) -> Result<&[AtomicU8]> {
        if !is_userspace_vaddr_range(vaddr, len) {
            return_errno_with_message!(Errno::EFAULT, "the range is not in user space");
        }

        if len == 0 {
            return Ok(&[]);
        }

        let Some((base, mapping)) = self.mappings.range(..=vaddr).next_back() else {
            return_errno_with_message!(Errno::EFAULT, "the address is not mapped");
        };

        let offset = vaddr - base;
        let end = offset
            .checked_add(len)
            .ok_or(Error::with_message(Errno::EFAULT, "the range overflows"))?;
        if end > mapping.bytes.len() {
            return_errno_with_message!(Errno::EFAULT, "the range exceeds the mapping");
        }
        if !mapping.perms.contains(perms) {
            return_errno_with_message!(Errno::EFAULT, "the mapping lacks the permission");
        }

        Ok(&mapping.bytes[offset..end])
    }

    /// Copies the current contents of `[vaddr, vaddr + len)` regardless of
    /// permissions.
    ///
    /// This is the host-side view of the memory, e.g., to inspect what a
    /// system call has written into a write-only buffer.
    pub fn snapshot(&self, vaddr: Vaddr, len: usize) -> Result<Vec<u8>> {
        let bytes = self.lookup(vaddr, len, VmPerms::empty())?;
        Ok(bytes.iter().map(|b| b.load(Ordering::Relaxed)).collect())
    }
}

impl UserSpace for UserVmSpace {
    fn reader(&self, vaddr: Vaddr, len: usize) -> Result<VmReader<'_>> {
        let bytes = self.lookup(vaddr, len, VmPerms::READ)?;
        Ok(VmReader::new(bytes))
    }

    fn writer(&self, vaddr: Vaddr, len: usize) -> Result<VmWriter<'_>> {
        let bytes = self.lookup(vaddr, len, VmPerms::WRITE)?;
        Ok(VmWriter::new(bytes))
    }
}
