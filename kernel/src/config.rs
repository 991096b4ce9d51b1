// SPDX-License-Identifier: MPL-2.0

//! Start-up configuration of the LibOS identity.
//!
//! The loader tells the LibOS which user and group the first thread runs
//! as. The configuration is given as whitespace-separated `key=value`
//! tokens, e.g., `uid=1000 gid=1000 groups=4,24,27`.

use crate::{
    prelude::*,
    process::{Gid, Uid},
};

/// The maximum number of supplementary group IDs.
///
/// It has to be the same as the host's `NGROUPS_MAX`.
pub const NGROUPS_MAX: usize = 65536;

/// The identity of the first thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityConfig {
    pub uid: Uid,
    pub gid: Gid,
    pub groups: Vec<Gid>,
}

impl IdentityConfig {
    /// Parses an identity from `key=value` tokens.
    ///
    /// Keys that are not given keep their default (root) values. Unknown
    /// keys are ignored.
    pub fn parse(args: &str) -> Result<Self> {
        let mut config = Self::default();

        for arg in args.split_whitespace() {
            let Some((key, value)) = arg.split_once('=') else {
                warn!("identity config: ignoring malformed argument {:?}", arg);
                continue;
            };

            match key {
                "uid" => config.uid = Uid::new(value.parse()?),
                "gid" => config.gid = Gid::new(value.parse()?),
                "groups" => config.groups = parse_groups(value)?,
                _ => warn!("identity config: ignoring unknown key {:?}", key),
            }
        }

        debug!("identity config: {:?}", config);
        Ok(config)
    }
}

fn parse_groups(value: &str) -> Result<Vec<Gid>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    if value.split(',').count() > NGROUPS_MAX {
        return_errno_with_message!(Errno::EINVAL, "too many supplementary groups");
    }

    let groups = value
        .split(',')
        .map(|gid| gid.parse().map(Gid::new))
        .collect::<core::result::Result<Vec<_>, _>>()?;
    Ok(groups)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_root() {
        let config = IdentityConfig::parse("").unwrap();
        assert!(config.uid.is_root());
        assert!(config.gid.is_root());
        assert!(config.groups.is_empty());
    }

    #[test]
    fn parse_all_keys() {
        let config = IdentityConfig::parse("uid=1000  gid=100 groups=4,24,27").unwrap();
        assert_eq!(config.uid, Uid::new(1000));
        assert_eq!(config.gid, Gid::new(100));
        assert_eq!(config.groups, [Gid::new(4), Gid::new(24), Gid::new(27)]);
    }

    #[test]
    fn unknown_and_malformed_keys_are_ignored() {
        let config = IdentityConfig::parse("quiet uid=7 loader.env=1 groups=").unwrap();
        assert_eq!(config.uid, Uid::new(7));
        assert!(config.groups.is_empty());
    }

    #[test]
    fn group_count_is_bounded() {
        let mut args = String::from("groups=");
        for i in 0..NGROUPS_MAX {
            if i > 0 {
                args.push(',');
            }
            args.push('1');
        }
        let config = IdentityConfig::parse(&args).unwrap();
        assert_eq!(config.groups.len(), NGROUPS_MAX);

        args.push_str(",1");
        let err = IdentityConfig::parse(&args).unwrap_err();
        assert_eq!(err.error(), Errno::EINVAL);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        for args in ["uid=-1", "gid=root", "groups=1,,2", "uid=4294967296"] {
            let err = IdentityConfig::parse(args).unwrap_err();
            assert_eq!(err.error(), Errno::EINVAL, "{}", args);
        }
    }
}
