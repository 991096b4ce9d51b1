// SPDX-License-Identifier: MPL-2.0

pub mod credentials;
pub mod posix_thread;

pub use credentials::{Gid, ThreadCredentials, Uid};
pub use posix_thread::{PosixThread, Tid};
