// SPDX-License-Identifier: MPL-2.0

//! Read the syscall arguments then dispatch the syscall to the corresponding handler.
//! Each sub module contains functions that handle real syscall logic.

use core::mem::size_of;

use crate::{context::Context, prelude::*};

mod arch;
mod getegid;
mod geteuid;
mod getgid;
mod getgroups;
mod getresgid;
mod getresuid;
mod getuid;
mod setgid;
mod setgroups;
mod setregid;
mod setresgid;
mod setresuid;
mod setreuid;
mod setuid;

pub use arch::*;
pub use getegid::sys_getegid;
pub use geteuid::sys_geteuid;
pub use getgid::sys_getgid;
pub use getgroups::sys_getgroups;
pub use getresgid::sys_getresgid;
pub use getresuid::sys_getresuid;
pub use getuid::sys_getuid;
pub use setgid::sys_setgid;
pub use setgroups::sys_setgroups;
pub use setregid::sys_setregid;
pub use setresgid::sys_setresgid;
pub use setresuid::sys_setresuid;
pub use setreuid::sys_setreuid;
pub use setuid::sys_setuid;

/// This macro is used to define syscall handler.
/// The first param is the number of parameters,
/// The second param is the function name of syscall handler,
/// The third is the args,
/// The fourth is the context.
macro_rules! syscall_handler {
    (0, $fn_name: ident, $args: ident, $ctx: expr) => {
        $fn_name($ctx)
    };
    (1, $fn_name: ident, $args: ident, $ctx: expr) => {
        $fn_name($args[0] as _, $ctx)
    };
    (2, $fn_name: ident, $args: ident, $ctx: expr) => {
        $fn_name($args[0] as _, $args[1] as _, $ctx)
    };
    (3, $fn_name: ident, $args: ident, $ctx: expr) => {
        $fn_name($args[0] as _, $args[1] as _, $args[2] as _, $ctx)
    };
}

macro_rules! impl_syscall_nums_and_dispatch_fn {
    // $args and $ctx are needed since Rust macro is hygienic
    ( $( $name: ident = $num: literal => $handler: ident ( args[ .. $cnt: tt ] ) );* $(;)? ) => {
        // First, define the syscall numbers
        $(
            pub const $name: u64 = $num;
        )*

        // Then, define the dispatcher function
        pub fn syscall_dispatch(
            syscall_number: u64,
            args: [u64; 6],
            ctx: &$crate::context::Context,
        ) -> $crate::prelude::Result<$crate::syscall::SyscallReturn> {
            match syscall_number {
                $(
                    $num => {
                        $crate::log_syscall_entry!($name, ctx);
                        $crate::syscall::syscall_handler!($cnt, $handler, args, ctx)
                    }
                )*
                _ => {
                    log::warn!("Unimplemented syscall number: {}", syscall_number);
                    $crate::return_errno_with_message!($crate::error::Errno::ENOSYS, "Syscall was unimplemented");
                }
            }
        }
    }
}

// Export macros to sub-modules
use impl_syscall_nums_and_dispatch_fn;
use syscall_handler;

/// Syscall return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallReturn {
    /// return isize, this value will be used to set rax
    Return(isize),
}

/// Dispatches a syscall and encodes its result with the Linux convention.
///
/// On success the return value of the handler is returned as is. On
/// failure the negated error number is returned.
pub fn handle_syscall(syscall_number: u64, args: [u64; 6], ctx: &Context) -> isize {
    match syscall_dispatch(syscall_number, args, ctx) {
        Ok(SyscallReturn::Return(return_value)) => return_value,
        Err(err) => {
            debug!("syscall return error: {:?}", err);
            let errno = err.error() as i32;
            -(errno as isize)
        }
    }
}

#[macro_export]
macro_rules! log_syscall_entry {
    ($syscall_name: tt, $ctx: expr) => {
        if log::log_enabled!(log::Level::Info) {
            let syscall_name_str = stringify!($syscall_name);
            log::info!(
                "[tid={}][id={}][{}]",
                $ctx.posix_thread.tid(),
                $syscall_name,
                syscall_name_str
            );
        }
    };
}

/// The raw ID value `(uid_t)-1`, which asks a setter to leave the ID unchanged.
const ID_UNCHANGED: u32 = u32::MAX;

/// Decodes a raw ID argument of `setre*id`/`setres*id`.
fn optional_id<T: From<u32>>(id: u32) -> Option<T> {
    (id != ID_UNCHANGED).then(|| T::from(id))
}

/// Validates an optional output location for one ID.
///
/// A null address means the caller is not interested in the value.
fn id_writer<'a, T: Pod>(
    user_space: &CurrentUserSpace<'a>,
    addr: Vaddr,
) -> Result<Option<VmWriter<'a>>> {
    if addr == 0 {
        return Ok(None);
    }

    user_space.writer(addr, size_of::<T>()).map(Some)
}
