//! Fluent predicate chain over a single [`Value`]
//!
//! Each predicate consumes the chain and hands back a new one carrying the
//! same subject and the updated verdict. Once the verdict turns false every
//! later predicate is skipped, so the final answer is the logical AND of all
//! predicates invoked, evaluated left to right.
//!
//! ```rust
//! use lapse_core::{Value, ValueChain};
//!
//! let flag = Value::from(true);
//! assert!(ValueChain::new(&flag).is_set().is_boolean().is_true().is_valid());
//!
//! let text = Value::from("true");
//! assert!(!ValueChain::new(&text).is_boolean().is_valid());
//! ```

use crate::Value;

/// Short-circuiting validation chain
#[derive(Clone, Copy, Debug)]
#[must_use = "a chain does nothing until `is_valid` is called"]
pub struct ValueChain<'a> {
    subject: &'a Value,
    verdict: bool,
}

impl<'a> ValueChain<'a> {
    /// Start a chain with a passing verdict
    pub fn new(subject: &'a Value) -> Self {
        ValueChain {
            subject,
            verdict: true,
        }
    }

    /// Apply a predicate unless the chain has already failed.
    /// The verdict never goes from false back to true.
    pub fn check<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&Value) -> bool,
    {
        if !self.verdict {
            return self;
        }
        ValueChain {
            subject: self.subject,
            verdict: predicate(self.subject),
        }
    }

    /// Subject is not `Undefined`
    pub fn is_set(self) -> Self {
        self.check(|v| !v.is_undefined())
    }

    /// Subject is not `Null`
    pub fn is_not_null(self) -> Self {
        self.check(|v| !v.is_null())
    }

    /// Subject is a boolean. Strict type check, `1` and `"true"` fail.
    pub fn is_boolean(self) -> Self {
        self.check(|v| v.as_bool().is_some())
    }

    /// Subject is exactly `Bool(true)`
    pub fn is_true(self) -> Self {
        self.check(|v| v.as_bool() == Some(true))
    }

    /// Subject is exactly `Bool(false)`
    pub fn is_false(self) -> Self {
        self.check(|v| v.as_bool() == Some(false))
    }

    /// The subject the chain was built over
    pub fn subject(&self) -> &'a Value {
        self.subject
    }

    /// Current verdict without ending the chain
    pub fn verdict(&self) -> bool {
        self.verdict
    }

    /// Terminal: the AND of every predicate applied so far
    pub fn is_valid(self) -> bool {
        self.verdict
    }
}

impl From<ValueChain<'_>> for bool {
    fn from(chain: ValueChain<'_>) -> bool {
        chain.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_empty_chain_is_valid() {
        let v = Value::Undefined;
        assert!(ValueChain::new(&v).is_valid());
    }

    #[test]
    fn test_is_set_and_not_null() {
        assert!(!ValueChain::new(&Value::Undefined).is_set().is_valid());
        assert!(ValueChain::new(&Value::Null).is_set().is_valid());
        assert!(!ValueChain::new(&Value::Null).is_not_null().is_valid());
        assert!(ValueChain::new(&Value::Undefined).is_not_null().is_valid());
    }

    #[test]
    fn test_is_boolean_rejects_non_booleans() {
        for v in [
            Value::Int(1),
            Value::Int(0),
            Value::from("true"),
            Value::Null,
            Value::Undefined,
            Value::Float(1.0),
        ] {
            assert!(!ValueChain::new(&v).is_boolean().is_valid(), "{}", v);
        }
        assert!(ValueChain::new(&Value::Bool(false)).is_boolean().is_valid());
    }

    #[test]
    fn test_true_false() {
        let t = Value::Bool(true);
        let f = Value::Bool(false);
        assert!(ValueChain::new(&t).is_true().is_valid());
        assert!(!ValueChain::new(&t).is_false().is_valid());
        assert!(ValueChain::new(&f).is_false().is_valid());
        assert!(!ValueChain::new(&f).is_true().is_valid());
    }

    #[test]
    fn test_short_circuit_skips_later_predicates() {
        let v = Value::Int(3);
        let calls = Cell::new(0);
        let ok = ValueChain::new(&v)
            .is_boolean()
            .check(|_| {
                calls.set(calls.get() + 1);
                true
            })
            .is_valid();
        assert!(!ok);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_predicates_see_original_subject() {
        let v = Value::from("x");
        let chain = ValueChain::new(&v).is_set().is_not_null();
        assert_eq!(chain.subject(), &v);
        assert!(chain.verdict());
    }

    #[test]
    fn test_into_bool() {
        let v = Value::Bool(true);
        let b: bool = ValueChain::new(&v).is_true().into();
        assert!(b);
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            ".{0,8}".prop_map(Value::Str),
        ]
    }

    fn apply<'a>(chain: ValueChain<'a>, op: u8) -> ValueChain<'a> {
        match op % 5 {
            0 => chain.is_set(),
            1 => chain.is_not_null(),
            2 => chain.is_boolean(),
            3 => chain.is_true(),
            _ => chain.is_false(),
        }
    }

    proptest! {
        #[test]
        fn prop_chain_is_and_of_predicates(v in arb_value(), ops in prop::collection::vec(any::<u8>(), 0..8)) {
            let chained = ops
                .iter()
                .fold(ValueChain::new(&v), |c, op| apply(c, *op))
                .is_valid();
            let independent = ops
                .iter()
                .all(|op| apply(ValueChain::new(&v), *op).is_valid());
            prop_assert_eq!(chained, independent);
        }

        #[test]
        fn prop_verdict_never_recovers(v in arb_value(), ops in prop::collection::vec(any::<u8>(), 1..8)) {
            let mut chain = ValueChain::new(&v);
            let mut failed = false;
            for op in ops {
                chain = apply(chain, op);
                if failed {
                    prop_assert!(!chain.verdict());
                }
                failed |= !chain.verdict();
            }
        }
    }
}
