// SPDX-License-Identifier: MPL-2.0

use super::{id_writer, SyscallReturn};
use crate::{prelude::*, process::Uid};

pub fn sys_getresuid(
    ruid_ptr: Vaddr,
    euid_ptr: Vaddr,
    suid_ptr: Vaddr,
    ctx: &Context,
) -> Result<SyscallReturn> {
    debug!("ruid_ptr = 0x{ruid_ptr:x}, euid_ptr = 0x{euid_ptr:x}, suid_ptr = 0x{suid_ptr:x}");

    // Nothing is written unless all destinations are valid.
    let user_space = ctx.user_space();
    let ruid_writer = id_writer::<Uid>(&user_space, ruid_ptr)?;
    let euid_writer = id_writer::<Uid>(&user_space, euid_ptr)?;
    let suid_writer = id_writer::<Uid>(&user_space, suid_ptr)?;

    let (ruid, euid, suid) = ctx.posix_thread.credentials().resuid();

    for (writer, uid) in [(ruid_writer, ruid), (euid_writer, euid), (suid_writer, suid)] {
        if let Some(mut writer) = writer {
            writer.write_val(&uid)?;
        }
    }

    Ok(SyscallReturn::Return(0))
}

#[cfg(test)]
mod test {
    extern crate std;

    use std::thread;

    use super::*;
    use crate::{
        process::{Gid, ThreadCredentials},
        syscall::sys_setresuid,
        test_util::{TestEnv, RO_BASE, RW_BASE, UNMAPPED},
    };

    fn user_env() -> TestEnv {
        let env = TestEnv::new(ThreadCredentials::new_root());
        env.thread
            .credentials()
            .set_resuid(Some(Uid::new(1000)), Some(Uid::new(2000)), Some(Uid::new(3000)))
            .unwrap();
        env
    }

    #[test]
    fn reads_all_three() {
        let env = user_env();
        let ctx = env.ctx();

        sys_getresuid(RW_BASE, RW_BASE + 4, RW_BASE + 8, &ctx).unwrap();
        assert_eq!(env.read_u32s(RW_BASE, 3), [1000, 2000, 3000]);
    }

    #[test]
    fn null_destinations_are_skipped() {
        let env = user_env();
        let ctx = env.ctx();

        sys_getresuid(0, RW_BASE, 0, &ctx).unwrap();
        assert_eq!(env.read_u32s(RW_BASE, 2), [2000, 0]);
    }

    #[test]
    fn bad_destination_writes_nothing() {
        let env = user_env();
        let ctx = env.ctx();

        for bad_ptr in [RO_BASE, UNMAPPED, 0x10] {
            let err = sys_getresuid(RW_BASE, RW_BASE + 4, bad_ptr, &ctx).unwrap_err();
            assert_eq!(err.error(), Errno::EFAULT);
            assert_eq!(env.read_u32s(RW_BASE, 2), [0, 0]);
        }
    }

    #[test]
    fn readers_never_see_a_torn_triple() {
        let env = TestEnv::new(ThreadCredentials::new(Uid::new_root(), Gid::new_root()));
        const ROUNDS: usize = 2000;

        thread::scope(|s| {
            s.spawn(|| {
                let ctx = env.ctx();
                for i in 0..ROUNDS {
                    let id = if i % 2 == 0 { 10 } else { 20 };
                    sys_setresuid(id, 0, id, &ctx).unwrap();
                }
            });

            for reader in 1..=2 {
                let env = &env;
                s.spawn(move || {
                    let ctx = env.ctx();
                    let buf = RW_BASE + reader * 0x100;
                    for _ in 0..ROUNDS {
                        sys_getresuid(buf, buf + 4, buf + 8, &ctx).unwrap();
                        let resuid = env.read_u32s(buf, 3);
                        assert_eq!(resuid[0], resuid[2], "torn triple {:?}", resuid);
                        assert_eq!(resuid[1], 0);
                    }
                });
            }
        });
    }
}
