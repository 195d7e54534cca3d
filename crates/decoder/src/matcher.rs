// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Locating operations inside a transaction's operation sequence.

use crate::operation::{MoveCall, Operation};

/// A fully qualified Move function: `package::module::function`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTarget<'a> {
    pub package: &'a str,
    pub module: &'a str,
    pub function: &'a str,
}

impl CallTarget<'_> {
    pub fn matches(&self, call: &MoveCall) -> bool {
        call.package == self.package && call.module == self.module && call.function == self.function
    }
}

/// The shape of operation a scan is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationShape<'a> {
    Call(CallTarget<'a>),
    SplitCoins,
}

impl OperationShape<'_> {
    pub fn matches(&self, op: &Operation) -> bool {
        match (self, op) {
            (OperationShape::Call(target), Operation::MoveCall(call)) => target.matches(call),
            (OperationShape::SplitCoins, Operation::SplitCoins(..)) => true,
            _ => false,
        }
    }
}

/// Matches for two shapes gathered in a single pass, each in sequence order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DualMatch<'a> {
    pub first: Vec<&'a Operation>,
    pub second: Vec<&'a Operation>,
}

/// Returns the first call to `target`. Calls into the same module with a
/// different function do not stop the scan.
pub fn find_call<'a>(operations: &'a [Operation], target: &CallTarget<'_>) -> Option<&'a MoveCall> {
    operations
        .iter()
        .filter_map(Operation::as_move_call)
        .find(|call| target.matches(call))
}

/// Scans the whole sequence once, collecting operations of either shape.
pub fn dual_pass<'a>(
    operations: &'a [Operation],
    first: &OperationShape<'_>,
    second: &OperationShape<'_>,
) -> DualMatch<'a> {
    let mut found = DualMatch::default();
    for op in operations {
        if first.matches(op) {
            found.first.push(op);
        }
        if second.matches(op) {
            found.second.push(op);
        }
    }
    found
}

/// Calls into `package::module` that report both argument lists, in sequence order.
pub fn module_calls<'a>(
    operations: &'a [Operation],
    package: &'a str,
    module: &'a str,
) -> impl Iterator<Item = &'a MoveCall> + 'a {
    operations
        .iter()
        .filter_map(Operation::as_move_call)
        .filter(move |call| call.package == package && call.module == module && call.is_complete())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Argument;

    fn call(module: &str, function: &str) -> Operation {
        Operation::MoveCall(MoveCall {
            package: "0xp".to_string(),
            module: module.to_string(),
            function: function.to_string(),
            type_arguments: Some(vec![]),
            arguments: Some(vec![]),
        })
    }

    fn target(function: &str) -> CallTarget<'_> {
        CallTarget {
            package: "0xp",
            module: "auction",
            function,
        }
    }

    #[test]
    fn test_find_call_skips_other_functions_in_module() {
        let ops = vec![
            call("auction", "admin_adds_item"),
            Operation::Other("TransferObjects".to_string()),
            call("auction", "anyone_pays_funds"),
        ];

        let found = find_call(&ops, &target("anyone_pays_funds")).unwrap();
        assert_eq!(found.function, "anyone_pays_funds");
        assert!(find_call(&ops, &target("admin_accepts_bid")).is_none());
    }

    #[test]
    fn test_find_call_requires_package_and_module() {
        let mut foreign = MoveCall {
            package: "0xother".to_string(),
            module: "auction".to_string(),
            function: "anyone_bids".to_string(),
            type_arguments: None,
            arguments: None,
        };
        let ops = vec![Operation::MoveCall(foreign.clone())];
        assert!(find_call(&ops, &target("anyone_bids")).is_none());

        foreign.package = "0xp".to_string();
        foreign.module = "user".to_string();
        let ops = vec![Operation::MoveCall(foreign)];
        assert!(find_call(&ops, &target("anyone_bids")).is_none());
    }

    #[test]
    fn test_find_call_returns_first_match() {
        let mut second = call("auction", "anyone_bids");
        if let Operation::MoveCall(c) = &mut second {
            c.arguments = Some(vec![Argument::Input(1)]);
        }
        let ops = vec![call("auction", "anyone_bids"), second];

        let found = find_call(&ops, &target("anyone_bids")).unwrap();
        assert!(found.args().is_empty());
    }

    #[test]
    fn test_dual_pass_collects_both_shapes_in_one_scan() {
        let split = Operation::SplitCoins(Argument::GasCoin, vec![Argument::Input(0)]);
        let ops = vec![
            call("auction", "anyone_bids"),
            call("user", "new_user_request"),
            split.clone(),
        ];

        let found = dual_pass(
            &ops,
            &OperationShape::SplitCoins,
            &OperationShape::Call(target("anyone_bids")),
        );
        assert_eq!(found.first, vec![&split]);
        assert_eq!(found.second, vec![&ops[0]]);
    }

    #[test]
    fn test_module_calls_require_complete_calls() {
        let incomplete = Operation::MoveCall(MoveCall {
            package: "0xp".to_string(),
            module: "auction".to_string(),
            function: "anyone_bids".to_string(),
            type_arguments: None,
            arguments: Some(vec![]),
        });
        let ops = vec![incomplete, call("user", "x"), call("auction", "admin_accepts_bid")];

        let functions: Vec<_> = module_calls(&ops, "0xp", "auction")
            .map(|c| c.function.as_str())
            .collect();
        assert_eq!(functions, vec!["admin_accepts_bid"]);
    }
}
