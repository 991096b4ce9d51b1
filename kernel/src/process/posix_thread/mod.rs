// SPDX-License-Identifier: MPL-2.0

use super::credentials::ThreadCredentials;
use crate::{config::IdentityConfig, prelude::*};

pub type Tid = u32;

/// The credential-bearing part of a POSIX thread.
///
/// The lifecycle and scheduling of the thread are managed elsewhere; this
/// type only owns what the credential syscalls need.
pub struct PosixThread {
    // Immutable part
    tid: Tid,

    // Mutable part
    /// Thread credentials. At the kernel level, credentials are a per-thread attribute.
    ///
    /// Anything that observes more than one field must do so under one
    /// acquisition of this lock.
    credentials: SpinLock<ThreadCredentials>,
}

impl PosixThread {
    pub fn new(tid: Tid, credentials: ThreadCredentials) -> Self {
        Self {
            tid,
            credentials: SpinLock::new(credentials),
        }
    }

    /// Creates the first thread of the LibOS with the configured identity.
    pub fn new_init(tid: Tid, config: &IdentityConfig) -> Result<Self> {
        let credentials = ThreadCredentials::from_config(config)?;
        Ok(Self::new(tid, credentials))
    }

    /// Returns the thread id
    pub fn tid(&self) -> Tid {
        self.tid
    }

    /// Locks the credentials of the thread.
    ///
    /// Other subsystems (e.g., permission checks for signals or files)
    /// inspect a thread's credentials through the same lock. The guard must
    /// not be held across a call that may acquire another thread's lock.
    pub fn credentials(&self) -> SpinLockGuard<'_, ThreadCredentials> {
        self.credentials.lock()
    }
}

impl Debug for PosixThread {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PosixThread")
            .field("tid", &self.tid)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::NGROUPS_MAX, process::Gid};

    #[test]
    fn init_thread_from_config() {
        let config = IdentityConfig::parse("uid=1000 gid=100 groups=4,24").unwrap();
        let thread = PosixThread::new_init(1, &config).unwrap();

        assert_eq!(thread.tid(), 1);
        let credentials = thread.credentials();
        assert_eq!(credentials.ruid().as_u32(), 1000);
        assert_eq!(credentials.sgid().as_u32(), 100);
        assert_eq!(credentials.groups(), [Gid::new(4), Gid::new(24)]);
    }

    #[test]
    fn init_thread_rejects_too_many_groups() {
        let config = IdentityConfig {
            groups: vec![Gid::new(1); NGROUPS_MAX + 1],
            ..IdentityConfig::default()
        };
        let err = PosixThread::new_init(1, &config).unwrap_err();
        assert_eq!(err.error(), Errno::EINVAL);
    }
}
