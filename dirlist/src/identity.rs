//! Resolution of numeric user and group identifiers to display names.
//!
//! An identifier without an account entry, or one whose lookup fails, is
//! shown as its decimal value.

use nix::unistd::{Gid, Group, Uid, User};

/// Looks up the login name for `uid`. `None` when no passwd entry exists.
pub fn lookup_user(uid: u32) -> Option<String> {
    match User::from_uid(Uid::from_raw(uid)) {
        Ok(user) => user.map(|user| user.name),
        Err(err) => {
            crate::debug_eprintln!("DEBUG: passwd lookup for uid {} failed: {}", uid, err);
            None
        }
    }
}

/// Looks up the group name for `gid`. `None` when no group entry exists.
pub fn lookup_group(gid: u32) -> Option<String> {
    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(group) => group.map(|group| group.name),
        Err(err) => {
            crate::debug_eprintln!("DEBUG: group lookup for gid {} failed: {}", gid, err);
            None
        }
    }
}

pub fn user_name(uid: u32) -> String {
    lookup_user(uid).unwrap_or_else(|| uid.to_string())
}

pub fn group_name(gid: u32) -> String {
    lookup_group(gid).unwrap_or_else(|| gid.to_string())
}
