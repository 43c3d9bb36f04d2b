//! `< > <= >=` (Number-only, arity 2) and `== !=` (any kind, structural
//! equality, arity 2). All six return `1`/`0` rather than a boolean type —
//! this language has no separate Bool.

use std::rc::Rc;

use crate::env::Environment;
use crate::error::type_mismatch;
use crate::value::Value;

use super::check_arity;

pub fn register(env: &Rc<Environment>) {
    env.put("<".to_string(), Value::builtin("<", lt));
    env.put(">".to_string(), Value::builtin(">", gt));
    env.put("<=".to_string(), Value::builtin("<=", le));
    env.put(">=".to_string(), Value::builtin(">=", ge));
    env.put("==".to_string(), Value::builtin("==", eq));
    env.put("!=".to_string(), Value::builtin("!=", ne));
}

fn as_bool(b: bool) -> Value {
    Value::Number(if b { 1 } else { 0 })
}

fn ord(name: &'static str, args: Vec<Value>, op: fn(i64, i64) -> bool) -> Value {
    if let Some(e) = check_arity(name, &args, 2) {
        return e;
    }
    let (a, b) = (&args[0], &args[1]);
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => as_bool(op(*x, *y)),
        (Value::Number(_), other) => type_mismatch(name, 1, other, "Number"),
        (other, _) => type_mismatch(name, 0, other, "Number"),
    }
}

fn lt(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ord("<", args, |a, b| a < b)
}

fn gt(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ord(">", args, |a, b| a > b)
}

fn le(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ord("<=", args, |a, b| a <= b)
}

fn ge(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ord(">=", args, |a, b| a >= b)
}

fn eq(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("==", &args, 2) {
        return e;
    }
    as_bool(args[0].equals(&args[1]))
}

fn ne(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("!=", &args, 2) {
        return e;
    }
    as_bool(!args[0].equals(&args[1]))
}
