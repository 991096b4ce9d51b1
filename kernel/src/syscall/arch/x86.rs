// SPDX-License-Identifier: MPL-2.0

use crate::syscall::{
    impl_syscall_nums_and_dispatch_fn, sys_getegid, sys_geteuid, sys_getgid, sys_getgroups,
    sys_getresgid, sys_getresuid, sys_getuid, sys_setgid, sys_setgroups, sys_setregid,
    sys_setresgid, sys_setresuid, sys_setreuid, sys_setuid,
};

// This table follows the x86-64 Linux syscall numbers.
impl_syscall_nums_and_dispatch_fn! {
    SYS_GETUID = 102           => sys_getuid(args[..0]);
    SYS_GETGID = 104           => sys_getgid(args[..0]);
    SYS_SETUID = 105           => sys_setuid(args[..1]);
    SYS_SETGID = 106           => sys_setgid(args[..1]);
    SYS_GETEUID = 107          => sys_geteuid(args[..0]);
    SYS_GETEGID = 108          => sys_getegid(args[..0]);
    SYS_SETREUID = 113         => sys_setreuid(args[..2]);
    SYS_SETREGID = 114         => sys_setregid(args[..2]);
    SYS_GETGROUPS = 115        => sys_getgroups(args[..2]);
    SYS_SETGROUPS = 116        => sys_setgroups(args[..2]);
    SYS_SETRESUID = 117        => sys_setresuid(args[..3]);
    SYS_GETRESUID = 118        => sys_getresuid(args[..3]);
    SYS_SETRESGID = 119        => sys_setresgid(args[..3]);
    SYS_GETRESGID = 120        => sys_getresgid(args[..3]);
}
