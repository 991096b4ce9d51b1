// SPDX-License-Identifier: MPL-2.0

use super::{optional_id, SyscallReturn};
use crate::{prelude::*, process::Uid};

pub fn sys_setreuid(ruid: u32, euid: u32, ctx: &Context) -> Result<SyscallReturn> {
    let ruid = optional_id::<Uid>(ruid);
    let euid = optional_id::<Uid>(euid);

    debug!("ruid = {:?}, euid = {:?}", ruid, euid);

    let mut credentials = ctx.posix_thread.credentials();
    credentials.set_reuid(ruid, euid)?;

    Ok(SyscallReturn::Return(0))
}
