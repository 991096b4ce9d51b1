// SPDX-License-Identifier: MPL-2.0

//! The context of a system call.
//!
//! There is no ambient "current thread" in this crate. Every system call
//! receives a [`Context`] naming the thread that issued it and the address
//! space its pointer arguments refer to.

use core::mem::size_of;

use crate::{
    prelude::*,
    process::posix_thread::PosixThread,
    vm::UserSpace,
};

/// The context that can be accessed from the calling POSIX thread.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub posix_thread: &'a PosixThread,
    pub user_space: &'a dyn UserSpace,
}

impl<'a> Context<'a> {
    pub fn new(posix_thread: &'a PosixThread, user_space: &'a dyn UserSpace) -> Self {
        Self {
            posix_thread,
            user_space,
        }
    }

    /// Gets the userspace of the calling thread.
    pub fn user_space(&self) -> CurrentUserSpace<'a> {
        CurrentUserSpace(self.user_space)
    }
}

/// The user's memory space of the calling thread.
///
/// It provides methods to read from or write to the user space.
pub struct CurrentUserSpace<'a>(&'a dyn UserSpace);

impl<'a> CurrentUserSpace<'a> {
    /// Creates a reader to read data from the user space.
    ///
    /// Returns `Err` if the `vaddr` and `len` do not represent a readable user space memory range.
    pub fn reader(&self, vaddr: Vaddr, len: usize) -> Result<VmReader<'a>> {
        self.0.reader(vaddr, len)
    }

    /// Creates a writer to write data into the user space.
    ///
    /// Returns `Err` if the `vaddr` and `len` do not represent a writable user space memory range.
    pub fn writer(&self, vaddr: Vaddr, len: usize) -> Result<VmWriter<'a>> {
        self.0.writer(vaddr, len)
    }

    /// Returns the byte length of an array of `count` values typed `T`.
    ///
    /// Fails with `EFAULT` if the length cannot be represented, since such
    /// an array can never lie in the user space.
    pub fn array_len<T: Pod>(count: usize) -> Result<usize> {
        count
            .checked_mul(size_of::<T>())
            .ok_or(Error::with_message(Errno::EFAULT, "the array is too large"))
    }
}
