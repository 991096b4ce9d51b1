// SPDX-License-Identifier: MPL-2.0

use super::{id_writer, SyscallReturn};
use crate::{prelude::*, process::Gid};

pub fn sys_getresgid(
    rgid_ptr: Vaddr,
    egid_ptr: Vaddr,
    sgid_ptr: Vaddr,
    ctx: &Context,
) -> Result<SyscallReturn> {
    debug!("rgid_ptr = 0x{rgid_ptr:x}, egid_ptr = 0x{egid_ptr:x}, sgid_ptr = 0x{sgid_ptr:x}");

    let user_space = ctx.user_space();
    let rgid_writer = id_writer::<Gid>(&user_space, rgid_ptr)?;
    let egid_writer = id_writer::<Gid>(&user_space, egid_ptr)?;
    let sgid_writer = id_writer::<Gid>(&user_space, sgid_ptr)?;

    let (rgid, egid, sgid) = ctx.posix_thread.credentials().resgid();

    for (writer, gid) in [(rgid_writer, rgid), (egid_writer, egid), (sgid_writer, sgid)] {
        if let Some(mut writer) = writer {
            writer.write_val(&gid)?;
        }
    }

    Ok(SyscallReturn::Return(0))
}
