// SPDX-License-Identifier: MPL-2.0

//! Bounded views into the caller's memory.
//!
//! A [`VmReader`] or a [`VmWriter`] can only be obtained from a
//! [`UserSpace`](super::UserSpace), which validates the range first. The
//! views never outlive the validated range and never grow.
//!
//! The caller may modify its own memory concurrently with the LibOS, so
//! every byte is accessed with a relaxed atomic operation. A value read
//! through a reader is therefore a private copy that the caller can no
//! longer tamper with.

use core::{
    mem::size_of,
    sync::atomic::{AtomicU8, Ordering},
};

use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout};

use crate::prelude::*;

/// A marker trait for plain-old-data types.
///
/// Any bit pattern is a valid value of a `Pod` type, so it can be copied
/// from or into untrusted memory as raw bytes.
pub trait Pod: FromBytes + IntoBytes + Immutable + KnownLayout + Copy {}

impl<T: FromBytes + IntoBytes + Immutable + KnownLayout + Copy> Pod for T {}

/// `VmReader` is a reader for reading data from a validated range of user memory.
pub struct VmReader<'a> {
    cursor: &'a [AtomicU8],
}

impl<'a> VmReader<'a> {
    pub(super) fn new(range: &'a [AtomicU8]) -> Self {
        Self { cursor: range }
    }

    /// Returns the number of bytes for the remaining data.
    pub fn remain(&self) -> usize {
        self.cursor.len()
    }

    /// Reads a value of `Pod` type.
    ///
    /// If the length of the `Pod` type exceeds `self.remain()`,
    /// this method will return `Err` and consume nothing.
    pub fn read_val<T: Pod>(&mut self) -> Result<T> {
        if self.remain() < size_of::<T>() {
            return_errno_with_message!(Errno::EFAULT, "read beyond the validated range");
        }

        let (head, tail) = self.cursor.split_at(size_of::<T>());
        let mut val = T::new_zeroed();
        for (dst, src) in val.as_mut_bytes().iter_mut().zip(head) {
            *dst = src.load(Ordering::Relaxed);
        }
        self.cursor = tail;

        Ok(val)
    }
}

/// `VmWriter` is a writer for writing data to a validated range of user memory.
pub struct VmWriter<'a> {
    cursor: &'a [AtomicU8],
}

impl<'a> VmWriter<'a> {
    pub(super) fn new(range: &'a [AtomicU8]) -> Self {
        Self { cursor: range }
    }

    /// Returns the number of bytes for the available space.
    pub fn avail(&self) -> usize {
        self.cursor.len()
    }

    /// Writes a value of `Pod` type.
    ///
    /// If the length of the `Pod` type exceeds `self.avail()`,
    /// this method will return `Err` and write nothing.
    pub fn write_val<T: Pod>(&mut self, new_val: &T) -> Result<()> {
        if self.avail() < size_of::<T>() {
            return_errno_with_message!(Errno::EFAULT, "write beyond the validated range");
        }

        let (head, tail) = self.cursor.split_at(size_of::<T>());
        for (dst, src) in head.iter().zip(new_val.as_bytes()) {
            dst.store(*src, Ordering::Relaxed);
        }
        self.cursor = tail;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn backing(len: usize) -> Vec<AtomicU8> {
        (0..len).map(|_| AtomicU8::new(0)).collect()
    }

    #[test]
    fn write_then_read_in_place() {
        let bytes = backing(8);

        let mut writer = VmWriter::new(&bytes);
        writer.write_val(&0x1122_3344u32).unwrap();
        writer.write_val(&7u32).unwrap();
        assert_eq!(writer.avail(), 0);

        let mut reader = VmReader::new(&bytes);
        assert_eq!(reader.read_val::<u32>().unwrap(), 0x1122_3344);
        assert_eq!(reader.read_val::<u32>().unwrap(), 7);
        assert_eq!(reader.remain(), 0);
    }

    #[test]
    fn short_range_consumes_nothing() {
        let bytes = backing(3);

        let mut reader = VmReader::new(&bytes);
        let err = reader.read_val::<u32>().unwrap_err();
        assert_eq!(err.error(), Errno::EFAULT);
        assert_eq!(reader.remain(), 3);

        let mut writer = VmWriter::new(&bytes);
        let err = writer.write_val(&u32::MAX).unwrap_err();
        assert_eq!(err.error(), Errno::EFAULT);
        assert_eq!(writer.avail(), 3);
        assert!(bytes.iter().all(|b| b.load(Ordering::Relaxed) == 0));
    }
}
