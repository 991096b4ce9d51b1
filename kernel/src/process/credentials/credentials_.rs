// SPDX-License-Identifier: MPL-2.0

use core::mem;

use super::{Gid, Uid};
use crate::{
    config::{IdentityConfig, NGROUPS_MAX},
    prelude::*,
};

/// The user IDs, group IDs and supplementary groups of a thread.
///
/// The record itself has no interior mutability. It is always accessed
/// through the lock of its [`PosixThread`], so a setter checks and updates
/// the IDs in one critical section and a reader never sees a torn triple.
///
/// [`PosixThread`]: crate::process::posix_thread::PosixThread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadCredentials {
    /// Real user id. The user to which the thread belongs.
    ruid: Uid,
    /// Effective user id. Used to determine the permissions granted to the thread.
    euid: Uid,
    /// Saved-set uid. Lets an unprivileged thread return to a previous effective uid.
    suid: Uid,

    /// Real group id. The group to which the thread belongs.
    rgid: Gid,
    /// Effective gid.
    egid: Gid,
    /// Saved-set gid.
    sgid: Gid,

    /// Additional groups to which the thread belongs, in the order they were set.
    supplementary_gids: Vec<Gid>,
}

impl ThreadCredentials {
    /// Creates new credentials. ruid, euid, suid will be set as the same uid, and gid is the same.
    pub fn new(uid: Uid, gid: Gid) -> Self {
        Self {
            ruid: uid,
            euid: uid,
            suid: uid,
            rgid: gid,
            egid: gid,
            sgid: gid,
            supplementary_gids: Vec::new(),
        }
    }

    /// Creates root credentials without supplementary groups.
    pub fn new_root() -> Self {
        Self::new(Uid::new_root(), Gid::new_root())
    }

    /// Creates the credentials of the first thread.
    ///
    /// Fails with `EINVAL` if the configuration lists more than
    /// [`NGROUPS_MAX`] supplementary groups.
    pub fn from_config(config: &IdentityConfig) -> Result<Self> {
        check_groups_len(config.groups.len())?;

        Ok(Self {
            supplementary_gids: config.groups.clone(),
            ..Self::new(config.uid, config.gid)
        })
    }

    /// Returns whether the thread acts as the superuser, i.e., its effective uid is root.
    pub fn is_privileged(&self) -> bool {
        self.euid.is_root()
    }

    //  ******* Uid methods *******

    pub fn ruid(&self) -> Uid {
        self.ruid
    }

    pub fn euid(&self) -> Uid {
        self.euid
    }

    pub fn suid(&self) -> Uid {
        self.suid
    }

    /// Returns the real, effective and saved-set uid.
    pub fn resuid(&self) -> (Uid, Uid, Uid) {
        (self.ruid, self.euid, self.suid)
    }

    /// Sets the effective uid.
    ///
    /// If the *real* uid is root, the real and saved-set uid are set as
    /// well. Otherwise `uid` must be the current real or saved-set uid.
    pub fn set_uid(&mut self, uid: Uid) -> Result<()> {
        if self.ruid.is_root() {
            self.ruid = uid;
            self.suid = uid;
        } else if uid != self.ruid && uid != self.suid {
            return_errno_with_message!(
                Errno::EPERM,
                "uid can only be one of old ruid and old suid."
            );
        }

        self.euid = uid;
        Ok(())
    }

    /// Sets the real and/or effective uid.
    ///
    /// The saved-set uid follows the new effective uid whenever the real uid
    /// is set or the new effective uid differs from the new real uid.
    pub fn set_reuid(&mut self, ruid: Option<Uid>, euid: Option<Uid>) -> Result<()> {
        if !self.is_privileged() && !may_set_re(ruid, euid, self.resuid()) {
            return_errno_with_message!(
                Errno::EPERM,
                "ruid can only be old euid (or swapped with it) and euid one of old ruid and old suid."
            );
        }

        let mut should_set_suid = false;
        if let Some(ruid) = ruid {
            self.ruid = ruid;
            should_set_suid = true;
        }
        if let Some(euid) = euid {
            should_set_suid |= euid != self.ruid;
            self.euid = euid;
        }
        if should_set_suid {
            self.suid = self.euid;
        }

        Ok(())
    }

    /// Sets any of the real, effective and saved-set uid.
    ///
    /// An unprivileged thread may only pick values from its current triple.
    pub fn set_resuid(
        &mut self,
        ruid: Option<Uid>,
        euid: Option<Uid>,
        suid: Option<Uid>,
    ) -> Result<()> {
        if !self.is_privileged() && !may_set_res([ruid, euid, suid], self.resuid()) {
            return_errno_with_message!(
                Errno::EPERM,
                "each uid can only be one of old ruid, old euid and old suid."
            );
        }

        if let Some(ruid) = ruid {
            self.ruid = ruid;
        }
        if let Some(euid) = euid {
            self.euid = euid;
        }
        if let Some(suid) = suid {
            self.suid = suid;
        }

        Ok(())
    }

    //  ******* Gid methods *******

    pub fn rgid(&self) -> Gid {
        self.rgid
    }

    pub fn egid(&self) -> Gid {
        self.egid
    }

    pub fn sgid(&self) -> Gid {
        self.sgid
    }

    /// Returns the real, effective and saved-set gid.
    pub fn resgid(&self) -> (Gid, Gid, Gid) {
        (self.rgid, self.egid, self.sgid)
    }

    /// Sets the effective gid.
    ///
    /// Privilege is decided by the real *uid*, exactly like [`Self::set_uid`].
    pub fn set_gid(&mut self, gid: Gid) -> Result<()> {
        if self.ruid.is_root() {
            self.rgid = gid;
            self.sgid = gid;
        } else if gid != self.rgid && gid != self.sgid {
            return_errno_with_message!(
                Errno::EPERM,
                "gid can only be one of old rgid and old sgid."
            );
        }

        self.egid = gid;
        Ok(())
    }

    pub fn set_regid(&mut self, rgid: Option<Gid>, egid: Option<Gid>) -> Result<()> {
        if !self.is_privileged() && !may_set_re(rgid, egid, self.resgid()) {
            return_errno_with_message!(
                Errno::EPERM,
                "rgid can only be old egid (or swapped with it) and egid one of old rgid and old sgid."
            );
        }

        let mut should_set_sgid = false;
        if let Some(rgid) = rgid {
            self.rgid = rgid;
            should_set_sgid = true;
        }
        if let Some(egid) = egid {
            should_set_sgid |= egid != self.rgid;
            self.egid = egid;
        }
        if should_set_sgid {
            self.sgid = self.egid;
        }

        Ok(())
    }

    pub fn set_resgid(
        &mut self,
        rgid: Option<Gid>,
        egid: Option<Gid>,
        sgid: Option<Gid>,
    ) -> Result<()> {
        if !self.is_privileged() && !may_set_res([rgid, egid, sgid], self.resgid()) {
            return_errno_with_message!(
                Errno::EPERM,
                "each gid can only be one of old rgid, old egid and old sgid."
            );
        }

        if let Some(rgid) = rgid {
            self.rgid = rgid;
        }
        if let Some(egid) = egid {
            self.egid = egid;
        }
        if let Some(sgid) = sgid {
            self.sgid = sgid;
        }

        Ok(())
    }

    //  ******* Supplementary groups methods *******

    pub fn groups(&self) -> &[Gid] {
        &self.supplementary_gids
    }

    /// Returns whether the thread is a member of `gid`, either through its
    /// effective gid or a supplementary group.
    pub fn in_group(&self, gid: Gid) -> bool {
        self.egid == gid || self.supplementary_gids.contains(&gid)
    }

    /// Installs a new list of supplementary groups and returns the old one.
    ///
    /// Fails with `EINVAL` and keeps the current list if `groups` is longer
    /// than [`NGROUPS_MAX`]. The caller should drop the returned list after
    /// releasing the lock.
    pub fn replace_groups(&mut self, groups: Vec<Gid>) -> Result<Vec<Gid>> {
        check_groups_len(groups.len())?;

        Ok(mem::replace(&mut self.supplementary_gids, groups))
    }
}

fn check_groups_len(len: usize) -> Result<()> {
    if len > NGROUPS_MAX {
        return_errno_with_message!(Errno::EINVAL, "too many supplementary groups");
    }
    Ok(())
}

/// Checks the `setreuid`/`setregid` rules for an unprivileged caller.
///
/// `old` is the current (real, effective, saved-set) triple.
fn may_set_re<T: PartialEq + Copy>(
    real: Option<T>,
    effective: Option<T>,
    old: (T, T, T),
) -> bool {
    let (old_real, old_effective, old_saved) = old;

    match (real, effective) {
        // Swapping, or assigning only existing values.
        (Some(real), Some(effective)) => {
            (real == old_real || real == old_effective)
                && (effective == old_real || effective == old_effective)
        }
        (Some(real), None) => real == old_effective,
        (None, Some(effective)) => effective == old_real || effective == old_saved,
        (None, None) => true,
    }
}

/// Checks the `setresuid`/`setresgid` rules for an unprivileged caller.
///
/// Every requested ID is compared against the triple before the call, never
/// against a partially updated one.
fn may_set_res<T: PartialEq + Copy>(new: [Option<T>; 3], old: (T, T, T)) -> bool {
    let (old_real, old_effective, old_saved) = old;

    new.into_iter()
        .flatten()
        .all(|id| id == old_real || id == old_effective || id == old_saved)
}
