// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Argument resolution.
//!
//! Turns an operation's argument handles into the literal inputs they point
//! at, and converts those literals into the Rust types a decoder expects.

use num::BigUint;
use serde_json::Value;

use crate::operation::{Argument, CallArg};

/// Resolves the `Input` handles of `args` against the input side table, in order.
///
/// Handles that reference gas or the result of an earlier operation carry no
/// literal and are skipped, as are indices past the end of the table. Callers
/// validate the resulting count themselves.
pub fn resolve_inputs<'a>(args: &[Argument], inputs: &'a [CallArg]) -> Vec<&'a CallArg> {
    args.iter()
        .filter_map(Argument::input_index)
        .filter_map(|idx| inputs.get(idx))
        .collect()
}

/// Conversion from a resolved input into a typed literal.
pub trait FromCallArg: Sized {
    fn from_call_arg(arg: &CallArg) -> Option<Self>;
}

impl CallArg {
    /// Reads this input as `T`. Object inputs read as their object id.
    pub fn value<T: FromCallArg>(&self) -> Option<T> {
        T::from_call_arg(self)
    }

    fn pure_value(&self) -> Option<&Value> {
        match self {
            CallArg::Pure { value, .. } => Some(value),
            CallArg::Object { .. } => None,
        }
    }
}

impl FromCallArg for String {
    fn from_call_arg(arg: &CallArg) -> Option<Self> {
        match arg {
            CallArg::Pure {
                value: Value::String(s),
                ..
            } => Some(s.clone()),
            CallArg::Object { object_id, .. } => Some(object_id.clone()),
            _ => None,
        }
    }
}

impl FromCallArg for u64 {
    fn from_call_arg(arg: &CallArg) -> Option<Self> {
        match arg.pure_value()? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromCallArg for BigUint {
    fn from_call_arg(arg: &CallArg) -> Option<Self> {
        match arg.pure_value()? {
            Value::Number(n) => n.as_u64().map(BigUint::from),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromCallArg for Vec<String> {
    fn from_call_arg(arg: &CallArg) -> Option<Self> {
        match arg.pure_value()? {
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => None,
        }
    }
}

impl FromCallArg for Vec<u8> {
    fn from_call_arg(arg: &CallArg) -> Option<Self> {
        match arg.pure_value()? {
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect(),
            Value::String(s) => hex::decode(s.strip_prefix("0x")?).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pure(value: Value) -> CallArg {
        CallArg::Pure {
            value_type: None,
            value,
        }
    }

    fn object(id: &str) -> CallArg {
        CallArg::Object {
            object_id: id.to_string(),
            object_type: Some("sharedObject".to_string()),
        }
    }

    #[test]
    fn test_resolve_inputs_keeps_order_and_skips_results() {
        let inputs = vec![pure(json!("a")), pure(json!("b")), object("0xc")];
        let args = vec![
            Argument::Input(2),
            Argument::Result(0),
            Argument::GasCoin,
            Argument::Input(0),
            Argument::NestedResult(1, 0),
        ];

        let resolved = resolve_inputs(&args, &inputs);
        assert_eq!(resolved, vec![&inputs[2], &inputs[0]]);
    }

    #[test]
    fn test_resolve_inputs_skips_out_of_range() {
        let inputs = vec![pure(json!("a"))];
        let resolved = resolve_inputs(&[Argument::Input(0), Argument::Input(9)], &inputs);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_string_values() {
        assert_eq!(pure(json!("hello")).value::<String>(), Some("hello".to_string()));
        assert_eq!(object("0xab").value::<String>(), Some("0xab".to_string()));
        assert_eq!(pure(json!(5)).value::<String>(), None);
    }

    #[test]
    fn test_integer_values() {
        assert_eq!(pure(json!("500")).value::<u64>(), Some(500));
        assert_eq!(pure(json!(250)).value::<u64>(), Some(250));
        assert_eq!(pure(json!("-1")).value::<u64>(), None);
        assert_eq!(object("0x6").value::<u64>(), None);

        let big = pure(json!("340282366920938463463374607431768211456"));
        assert_eq!(
            big.value::<BigUint>(),
            Some(BigUint::from(u128::MAX) + 1u8)
        );
        assert_eq!(pure(json!(7)).value::<BigUint>(), Some(BigUint::from(7u8)));
        assert_eq!(pure(json!("seven")).value::<BigUint>(), None);
    }

    #[test]
    fn test_address_list_values() {
        assert_eq!(
            pure(json!(["0x1", "0x2"])).value::<Vec<String>>(),
            Some(vec!["0x1".to_string(), "0x2".to_string()])
        );
        assert_eq!(pure(json!(["0x1", 2])).value::<Vec<String>>(), None);
        assert_eq!(pure(json!([])).value::<Vec<String>>(), Some(vec![]));
    }

    #[test]
    fn test_byte_values() {
        assert_eq!(
            pure(json!([104, 105])).value::<Vec<u8>>(),
            Some(b"hi".to_vec())
        );
        assert_eq!(pure(json!("0x6869")).value::<Vec<u8>>(), Some(b"hi".to_vec()));
        assert_eq!(pure(json!([256])).value::<Vec<u8>>(), None);
        assert_eq!(pure(json!("6869")).value::<Vec<u8>>(), None);
    }
}
