//! Role-scoped permissions
//!
//! A permission is granted to an address under a role. Checking asks whether
//! the address holds the named permission under any of the given roles; the
//! gateway uses this as its authorization oracle for oracle-only operations.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Map;

/// Granted permissions
/// Key: (address, permission, role), Value: true while granted
pub const PERMISSIONS: Map<(&Addr, &str, &str), bool> = Map::new("permissions");

pub fn grant_permission(
    storage: &mut dyn Storage,
    addr: &Addr,
    permission: &str,
    role: &str,
) -> StdResult<()> {
    PERMISSIONS.save(storage, (addr, permission, role), &true)
}

pub fn revoke_permission(storage: &mut dyn Storage, addr: &Addr, permission: &str, role: &str) {
    PERMISSIONS.remove(storage, (addr, permission, role));
}

/// Whether `addr` holds `permission` under at least one of `roles`
pub fn has_permission(
    storage: &dyn Storage,
    addr: &Addr,
    permission: &str,
    roles: &[&str],
) -> StdResult<bool> {
    for role in roles {
        if PERMISSIONS
            .may_load(storage, (addr, permission, *role))?
            .unwrap_or(false)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// All addresses holding `permission` under `role`, in key order
pub fn holders(storage: &dyn Storage, permission: &str, role: &str) -> StdResult<Vec<Addr>> {
    PERMISSIONS
        .keys(storage, None, None, Order::Ascending)
        .filter_map(|key| match key {
            Ok((addr, perm, r)) if perm == permission && r == role => Some(Ok(addr)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}
