// SPDX-License-Identifier: MPL-2.0

use super::SyscallReturn;
use crate::{prelude::*, process::Gid};

pub fn sys_getgroups(size: i32, group_list_addr: Vaddr, ctx: &Context) -> Result<SyscallReturn> {
    debug!("size = {}, group_list_addr = 0x{:x}", size, group_list_addr);

    let Ok(size) = usize::try_from(size) else {
        return_errno_with_message!(Errno::EINVAL, "size cannot be negative");
    };

    let user_space = ctx.user_space();
    let len = CurrentUserSpace::array_len::<Gid>(size)?;
    let mut writer = user_space.writer(group_list_addr, len)?;

    let groups = {
        let credentials = ctx.posix_thread.credentials();
        let groups = credentials.groups();

        if size == 0 {
            return Ok(SyscallReturn::Return(groups.len() as _));
        }

        if groups.len() > size {
            return_errno_with_message!(
                Errno::EINVAL,
                "size is less than the number of supplementary groups"
            );
        }

        groups.to_vec()
    };

    for gid in groups.iter() {
        writer.write_val(gid)?;
    }

    Ok(SyscallReturn::Return(groups.len() as _))
}
