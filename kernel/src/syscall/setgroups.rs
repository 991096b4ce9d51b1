// SPDX-License-Identifier: MPL-2.0

use super::SyscallReturn;
use crate::{config::NGROUPS_MAX, prelude::*, process::Gid};

pub fn sys_setgroups(size: i32, group_list_addr: Vaddr, ctx: &Context) -> Result<SyscallReturn> {
    debug!("size = {}, group_list_addr = 0x{:x}", size, group_list_addr);

    let size = match usize::try_from(size) {
        Ok(size) if size <= NGROUPS_MAX => size,
        _ => return_errno_with_message!(Errno::EINVAL, "size cannot be negative or too large"),
    };

    let groups = if size == 0 {
        Vec::new()
    } else {
        read_groups_from_user(group_list_addr, size, ctx)?
    };

    let old_groups = ctx.posix_thread.credentials().replace_groups(groups)?;
    drop(old_groups);

    Ok(SyscallReturn::Return(0))
}

fn read_groups_from_user(addr: Vaddr, size: usize, ctx: &Context) -> Result<Vec<Gid>> {
    let user_space = ctx.user_space();
    let len = CurrentUserSpace::array_len::<Gid>(size)?;
    let mut reader = user_space.reader(addr, len)?;

    let mut groups = Vec::new();
    groups.try_reserve_exact(size)?;
    for _ in 0..size {
        groups.push(reader.read_val::<Gid>()?);
    }

    Ok(groups)
}
