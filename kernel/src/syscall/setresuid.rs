// SPDX-License-Identifier: MPL-2.0

use super::{optional_id, SyscallReturn};
use crate::{prelude::*, process::Uid};

pub fn sys_setresuid(ruid: u32, euid: u32, suid: u32, ctx: &Context) -> Result<SyscallReturn> {
    let ruid = optional_id::<Uid>(ruid);
    let euid = optional_id::<Uid>(euid);
    let suid = optional_id::<Uid>(suid);

    debug!("ruid = {:?}, euid = {:?}, suid = {:?}", ruid, euid, suid);

    let mut credentials = ctx.posix_thread.credentials();
    credentials.set_resuid(ruid, euid, suid)?;

    Ok(SyscallReturn::Return(0))
}
