// SPDX-License-Identifier: MPL-2.0

use super::{optional_id, SyscallReturn};
use crate::{prelude::*, process::Gid};

pub fn sys_setresgid(rgid: u32, egid: u32, sgid: u32, ctx: &Context) -> Result<SyscallReturn> {
    let rgid = optional_id::<Gid>(rgid);
    let egid = optional_id::<Gid>(egid);
    let sgid = optional_id::<Gid>(sgid);

    debug!("rgid = {:?}, egid = {:?}, sgid = {:?}", rgid, egid, sgid);

    let mut credentials = ctx.posix_thread.credentials();
    credentials.set_resgid(rgid, egid, sgid)?;

    Ok(SyscallReturn::Return(0))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        process::{ThreadCredentials, Uid},
        syscall::{sys_getresgid, sys_setregid, ID_UNCHANGED},
        test_util::{TestEnv, RW_BASE},
    };

    fn read_resgid(env: &TestEnv) -> (u32, u32, u32) {
        let ctx = env.ctx();
        sys_getresgid(RW_BASE, RW_BASE + 4, RW_BASE + 8, &ctx).unwrap();
        (env.read_u32(RW_BASE), env.read_u32(RW_BASE + 4), env.read_u32(RW_BASE + 8))
    }

    #[test]
    fn group_triple_under_unprivileged_user() {
        let env = TestEnv::new(ThreadCredentials::new(Uid::new_root(), Gid::new(10)));
        let ctx = env.ctx();

        sys_setresgid(10, 20, 30, &ctx).unwrap();
        sys_setresuid_to_user(&env);
        assert_eq!(read_resgid(&env), (10, 20, 30));

        sys_setresgid(30, ID_UNCHANGED, 10, &ctx).unwrap();
        assert_eq!(read_resgid(&env), (30, 20, 10));

        let err = sys_setresgid(40, ID_UNCHANGED, ID_UNCHANGED, &ctx).unwrap_err();
        assert_eq!(err.error(), Errno::EPERM);

        // `setregid` may not pick the saved gid as the new real gid.
        let err = sys_setregid(10, ID_UNCHANGED, &ctx).unwrap_err();
        assert_eq!(err.error(), Errno::EPERM);
        sys_setregid(20, 30, &ctx).unwrap();
        assert_eq!(read_resgid(&env), (20, 30, 30));
    }

    fn sys_setresuid_to_user(env: &TestEnv) {
        env.thread
            .credentials()
            .set_resuid(Some(Uid::new(1000)), Some(Uid::new(1000)), Some(Uid::new(1000)))
            .unwrap();
    }
}
