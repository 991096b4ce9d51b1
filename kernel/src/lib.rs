// SPDX-License-Identifier: MPL-2.0

//! The credential-management core of the LibOS.
//!
//! Every POSIX thread owns a set of user and group IDs (real, effective and
//! saved) plus a list of supplementary groups. This crate keeps that state
//! behind a per-thread lock and implements the identity-related system calls
//! (`getuid`, `setreuid`, `setgroups`, ...) with the exact privilege-transition
//! rules of a POSIX kernel.
//!
//! All memory supplied by the caller is untrusted. It is only accessed
//! through the [`VmReader`]/[`VmWriter`] views handed out by a [`UserSpace`]
//! after the requested range has been validated.
//!
//! [`VmReader`]: vm::VmReader
//! [`VmWriter`]: vm::VmWriter
//! [`UserSpace`]: vm::UserSpace

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod context;
pub mod error;
pub mod prelude;
pub mod process;
pub mod syscall;
pub mod vm;

#[cfg(test)]
mod test_util;

pub use context::Context;
pub use error::{Errno, Error};
