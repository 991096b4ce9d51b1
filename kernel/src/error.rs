// SPDX-License-Identifier: MPL-2.0

use alloc::collections::TryReserveError;
use core::fmt;

/// Error number.
///
/// Only the numbers that the credential syscalls can produce are listed.
/// The values follow the Linux ABI.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Errno {
    EPERM = 1,   /* Operation not permitted */
    ENOMEM = 12, /* Out of memory */
    EFAULT = 14, /* Bad address */
    EINVAL = 22, /* Invalid argument */
    /*
     * This error code is special: the syscall entry code returns -ENOSYS
     * if users try to call a syscall that doesn't exist. Syscall
     * implementations should refrain from returning -ENOSYS.
     */
    ENOSYS = 38, /* Invalid system call number */
}

/// error used in this crate
#[derive(Debug, Clone, Copy)]
pub struct Error {
    errno: Errno,
    msg: Option<&'static str>,
}

impl Error {
    pub const fn new(errno: Errno) -> Self {
        Error { errno, msg: None }
    }

    pub const fn with_message(errno: Errno, msg: &'static str) -> Self {
        Error {
            errno,
            msg: Some(msg),
        }
    }

    pub const fn error(&self) -> Errno {
        self.errno
    }
}

impl From<Errno> for Error {
    fn from(errno: Errno) -> Self {
        Error::new(errno)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.msg {
            Some(msg) => write!(f, "{:?}: {}", self.errno, msg),
            None => write!(f, "{:?}", self.errno),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::with_message(Errno::ENOMEM, "cannot allocate memory")
    }
}

impl From<core::num::ParseIntError> for Error {
    fn from(_: core::num::ParseIntError) -> Self {
        Error::with_message(Errno::EINVAL, "invalid integer")
    }
}

#[macro_export]
macro_rules! return_errno {
    ($errno: expr) => {
        return Err($crate::error::Error::new($errno))
    };
}

#[macro_export]
macro_rules! return_errno_with_message {
    ($errno: expr, $message: expr) => {
        return Err($crate::error::Error::with_message($errno, $message))
    };
}
