// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Correlating a transaction's object changes with a decoded call.

use crate::record::{ObjectChange, ObjectChangeRecord};

/// Which object change kinds a lookup accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Mutated,
    CreatedOrMutated,
}

impl ChangeKind {
    fn select(self, change: &ObjectChange) -> Option<&ObjectChangeRecord> {
        match (self, change) {
            (ChangeKind::Created | ChangeKind::CreatedOrMutated, ObjectChange::Created(rec))
            | (ChangeKind::Mutated | ChangeKind::CreatedOrMutated, ObjectChange::Mutated(rec)) => {
                Some(rec)
            }
            _ => None,
        }
    }
}

/// How an object's type tag is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMatch<'a> {
    /// `objectType` starts with the pattern, e.g. any `Auction<T>` instantiation.
    Prefix(&'a str),
    Exact(&'a str),
}

impl TypeMatch<'_> {
    pub fn matches(&self, object_type: &str) -> bool {
        match self {
            TypeMatch::Prefix(prefix) => object_type.starts_with(prefix),
            TypeMatch::Exact(exact) => object_type == *exact,
        }
    }
}

/// Finds the first change of an accepted kind whose type matches.
///
/// Kind and type are both required for every kind, including `CreatedOrMutated`:
/// a created object of an unrelated type never satisfies the lookup.
pub fn find_object_change<'a>(
    changes: &'a [ObjectChange],
    kind: ChangeKind,
    type_match: TypeMatch<'_>,
) -> Option<&'a ObjectChangeRecord> {
    changes
        .iter()
        .filter_map(|change| kind.select(change))
        .find(|rec| type_match.matches(&rec.object_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(object_type: &str, object_id: &str) -> ObjectChangeRecord {
        ObjectChangeRecord {
            object_type: object_type.to_string(),
            object_id: object_id.to_string(),
            sender: None,
            version: None,
            digest: None,
        }
    }

    const AUCTION: &str = "0xp::auction::Auction<";

    #[test]
    fn test_prefix_matches_any_coin_instantiation() {
        let changes = vec![
            ObjectChange::Mutated(record("0x2::coin::Coin<0x2::sui::SUI>", "0xc")),
            ObjectChange::Created(record("0xp::auction::Auction<0xd::usdc::USDC>", "0xa")),
        ];

        let found = find_object_change(&changes, ChangeKind::Created, TypeMatch::Prefix(AUCTION));
        assert_eq!(found.map(|r| r.object_id.as_str()), Some("0xa"));
    }

    #[test]
    fn test_kind_is_respected() {
        let changes = vec![ObjectChange::Mutated(record(
            "0xp::auction::Auction<0x2::sui::SUI>",
            "0xa",
        ))];

        assert!(
            find_object_change(&changes, ChangeKind::Created, TypeMatch::Prefix(AUCTION)).is_none()
        );
        assert!(
            find_object_change(&changes, ChangeKind::Mutated, TypeMatch::Prefix(AUCTION)).is_some()
        );
        assert!(
            find_object_change(
                &changes,
                ChangeKind::CreatedOrMutated,
                TypeMatch::Prefix(AUCTION)
            )
            .is_some()
        );
    }

    #[test]
    fn test_created_object_of_other_type_does_not_match() {
        let changes = vec![
            ObjectChange::Created(record("0x2::object_bag::ObjectBag", "0xbag")),
            ObjectChange::Other,
        ];

        let found = find_object_change(
            &changes,
            ChangeKind::CreatedOrMutated,
            TypeMatch::Exact("0xp::user::User"),
        );
        assert!(found.is_none());
    }

    #[test]
    fn test_exact_match_rejects_prefixes() {
        let changes = vec![ObjectChange::Created(record("0xp::user::UserRegistry", "0xr"))];
        assert!(
            find_object_change(
                &changes,
                ChangeKind::Created,
                TypeMatch::Exact("0xp::user::User")
            )
            .is_none()
        );
    }

    #[test]
    fn test_empty_changes() {
        assert!(find_object_change(&[], ChangeKind::Created, TypeMatch::Prefix(AUCTION)).is_none());
    }
}
