// SPDX-License-Identifier: MPL-2.0

//! User and group identities of a thread.
//!
//! The transition rules implemented here follow the Linux semantics of
//! `setuid(2)`, `setreuid(2)`, `setresuid(2)` and their group counterparts,
//! with one deliberate difference: `setuid`/`setgid` decide whether the
//! caller is privileged by its *real* uid.

mod credentials_;
mod group;
mod user;

pub use credentials_::ThreadCredentials;
pub use group::Gid;
pub use user::Uid;
