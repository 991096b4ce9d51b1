// SPDX-License-Identifier: MPL-2.0

#![expect(unused_imports)]

pub(crate) use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet},
    string::{String, ToString},
    sync::Arc,
    vec,
    vec::Vec,
};
pub(crate) use core::fmt::Debug;

pub(crate) use bitflags::bitflags;
pub(crate) use log::{debug, error, info, log_enabled, trace, warn};
pub(crate) use spin::{Mutex as SpinLock, MutexGuard as SpinLockGuard};

pub(crate) use crate::{
    context::{Context, CurrentUserSpace},
    error::{Errno, Error},
    vm::{Pod, Vaddr, VmReader, VmWriter},
};
pub(crate) type Result<T> = core::result::Result<T, Error>;
pub(crate) use crate::{return_errno, return_errno_with_message};
