// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-process map from an owner address to the id of their `user::User` object.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Owner address to user id. At most one entry per owner; the last write wins.
///
/// Every write is a single insert, so a poisoned lock still guards a
/// consistent map and is recovered.
#[derive(Clone, Default)]
pub struct UserIdCache(Arc<RwLock<HashMap<String, String>>>);

impl UserIdCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, owner: &str) -> Option<String> {
        let map = self.0.read().unwrap_or_else(PoisonError::into_inner);
        map.get(owner).cloned()
    }

    pub fn insert(&self, owner: &str, user_id: &str) {
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(owner.to_string(), user_id.to_string());
    }

    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let cache = UserIdCache::new();
        assert!(cache.get("0xowner").is_none());

        cache.insert("0xowner", "0xuser1");
        cache.insert("0xowner", "0xuser2");

        assert_eq!(cache.get("0xowner").as_deref(), Some("0xuser2"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_poisoned_lock_still_caches() {
        let cache = UserIdCache::new();
        cache.insert("0xowner", "0xuser1");

        let inner = cache.0.clone();
        let _ = std::thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(cache.0.is_poisoned());

        cache.insert("0xother", "0xuser2");
        assert_eq!(cache.get("0xowner").as_deref(), Some("0xuser1"));
        assert_eq!(cache.get("0xother").as_deref(), Some("0xuser2"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = UserIdCache::new();
        let clone = cache.clone();
        clone.insert("0xowner", "0xuser");
        assert_eq!(cache.get("0xowner").as_deref(), Some("0xuser"));
    }
}
