// SPDX-License-Identifier: MPL-2.0

use super::SyscallReturn;
use crate::{prelude::*, process::Gid};

pub fn sys_setgid(gid: u32, ctx: &Context) -> Result<SyscallReturn> {
    debug!("gid = {}", gid);

    let gid = Gid::new(gid);

    let mut credentials = ctx.posix_thread.credentials();
    credentials.set_gid(gid)?;

    Ok(SyscallReturn::Return(0))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        process::{ThreadCredentials, Uid},
        test_util::TestEnv,
    };

    #[test]
    fn privilege_follows_real_uid() {
        // The effective uid is root but the real uid is not.
        let env = TestEnv::new(ThreadCredentials::new_root());
        env.thread
            .credentials()
            .set_resuid(Some(Uid::new(1000)), None, None)
            .unwrap();
        let ctx = env.ctx();

        let err = sys_setgid(100, &ctx).unwrap_err();
        assert_eq!(err.error(), Errno::EPERM);

        env.thread
            .credentials()
            .set_resuid(Some(Uid::new(0)), None, None)
            .unwrap();
        sys_setgid(100, &ctx).unwrap();
        assert_eq!(
            env.thread.credentials().resgid(),
            (Gid::new(100), Gid::new(100), Gid::new(100))
        );
    }
}
