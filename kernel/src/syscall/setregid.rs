// SPDX-License-Identifier: MPL-2.0

use super::{optional_id, SyscallReturn};
use crate::{prelude::*, process::Gid};

pub fn sys_setregid(rgid: u32, egid: u32, ctx: &Context) -> Result<SyscallReturn> {
    let rgid = optional_id::<Gid>(rgid);
    let egid = optional_id::<Gid>(egid);

    debug!("rgid = {:?}, egid = {:?}", rgid, egid);

    let mut credentials = ctx.posix_thread.credentials();
    credentials.set_regid(rgid, egid)?;

    Ok(SyscallReturn::Return(0))
}
