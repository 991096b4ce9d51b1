// SPDX-License-Identifier: MPL-2.0

//! Syscall numbers of the ABI that the LibOS exposes to its applications.

mod x86;

pub use self::x86::*;
