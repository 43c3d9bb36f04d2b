//! `+ - * /` — integer arithmetic, left-associative fold, any arity >= 1.

use std::rc::Rc;

use crate::env::Environment;
use crate::error::{division_by_zero, non_number};
use crate::value::Value;

pub fn register(env: &Rc<Environment>) {
    env.put("+".to_string(), Value::builtin("+", add));
    env.put("-".to_string(), Value::builtin("-", sub));
    env.put("*".to_string(), Value::builtin("*", mul));
    env.put("/".to_string(), Value::builtin("/", div));
}

fn numbers(name: &'static str, args: Vec<Value>) -> Result<Vec<i64>, Value> {
    if args.is_empty() {
        return Err(crate::error::arity_mismatch(name, 0, 1));
    }
    args.into_iter()
        .map(|v| match v {
            Value::Number(n) => Ok(n),
            _ => Err(non_number()),
        })
        .collect()
}

fn add(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    fold("+", args, 0, |a, b| a.wrapping_add(b))
}

fn mul(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    fold("*", args, 1, |a, b| a.wrapping_mul(b))
}

fn sub(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    let nums = match numbers("-", args) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if nums.len() == 1 {
        return Value::Number(nums[0].wrapping_neg());
    }
    Value::Number(nums[1..].iter().fold(nums[0], |a, &b| a.wrapping_sub(b)))
}

fn div(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    let nums = match numbers("/", args) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if nums.len() == 1 {
        return Value::Number(nums[0]);
    }
    let mut acc = nums[0];
    for &n in &nums[1..] {
        if n == 0 {
            return division_by_zero();
        }
        acc = acc.wrapping_div(n);
    }
    Value::Number(acc)
}

fn fold(name: &'static str, args: Vec<Value>, identity: i64, op: fn(i64, i64) -> i64) -> Value {
    let nums = match numbers(name, args) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if nums.len() == 1 {
        return Value::Number(op(identity, nums[0]));
    }
    Value::Number(nums[1..].iter().fold(nums[0], |a, &b| op(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Rc<Environment> {
        Environment::new()
    }

    #[test]
    fn add_folds_left_to_right() {
        assert!(matches!(add(&env(), vec![Value::Number(1), Value::Number(2), Value::Number(3)]), Value::Number(6)));
    }

    #[test]
    fn unary_minus_negates() {
        assert!(matches!(sub(&env(), vec![Value::Number(5)]), Value::Number(-5)));
    }

    #[test]
    fn binary_minus_subtracts() {
        assert!(matches!(sub(&env(), vec![Value::Number(10), Value::Number(3)]), Value::Number(7)));
    }

    #[test]
    fn multiply_folds() {
        assert!(matches!(mul(&env(), vec![Value::Number(2), Value::Number(3), Value::Number(4)]), Value::Number(24)));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        match div(&env(), vec![Value::Number(1), Value::Number(0)]) {
            Value::Error(msg) => assert_eq!(msg, "Division By Zero!"),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn non_number_operand_is_generic_error() {
        match add(&env(), vec![Value::Number(1), Value::Str("x".into())]) {
            Value::Error(msg) => assert_eq!(msg, "Cannot operate on non-number!"),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn unary_division_is_a_no_op() {
        assert!(matches!(div(&env(), vec![Value::Number(7)]), Value::Number(7)));
    }
}
