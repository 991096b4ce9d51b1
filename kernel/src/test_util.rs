// SPDX-License-Identifier: MPL-2.0

//! Fixtures shared by the unit tests of the syscalls.

use crate::{
    prelude::*,
    process::{PosixThread, ThreadCredentials},
    vm::{UserSpace, UserVmSpace, VmPerms},
};

/// A readable and writable region.
pub(crate) const RW_BASE: Vaddr = 0x1000_0000;
/// A read-only region.
pub(crate) const RO_BASE: Vaddr = 0x2000_0000;
/// An address that no region covers.
pub(crate) const UNMAPPED: Vaddr = 0x3000_0000;

pub(crate) const REGION_SIZE: usize = 0x4_0000;

/// A thread together with the user space its syscalls refer to.
pub(crate) struct TestEnv {
    pub thread: PosixThread,
    pub vm: UserVmSpace,
}

impl TestEnv {
    pub fn new(credentials: ThreadCredentials) -> Self {
        let mut vm = UserVmSpace::new();
        vm.map(RW_BASE, REGION_SIZE, VmPerms::READ | VmPerms::WRITE)
            .unwrap();
        vm.map(RO_BASE, REGION_SIZE, VmPerms::READ).unwrap();

        Self {
            thread: PosixThread::new(1, credentials),
            vm,
        }
    }

    pub fn ctx(&self) -> Context<'_> {
        Context::new(&self.thread, &self.vm)
    }

    pub fn read_u32(&self, vaddr: Vaddr) -> u32 {
        let bytes = self.vm.snapshot(vaddr, 4).unwrap();
        u32::from_ne_bytes(bytes.try_into().unwrap())
    }

    pub fn read_u32s(&self, vaddr: Vaddr, count: usize) -> Vec<u32> {
        (0..count).map(|i| self.read_u32(vaddr + i * 4)).collect()
    }

    pub fn write_u32s(&self, vaddr: Vaddr, values: &[u32]) {
        let mut writer = self.vm.writer(vaddr, values.len() * 4).unwrap();
        for value in values {
            writer.write_val(value).unwrap();
        }
    }
}
