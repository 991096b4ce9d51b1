// SPDX-License-Identifier: MPL-2.0

use super::SyscallReturn;
use crate::{prelude::*, process::Uid};

pub fn sys_setuid(uid: u32, ctx: &Context) -> Result<SyscallReturn> {
    debug!("uid = {}", uid);

    // `(uid_t)-1` is not special here and is taken literally.
    let uid = Uid::new(uid);

    let mut credentials = ctx.posix_thread.credentials();
    credentials.set_uid(uid)?;

    Ok(SyscallReturn::Return(0))
}
