//! `list head tail join eval` — the Q-expression manipulation primitives.

use std::rc::Rc;

use crate::env::Environment;
use crate::error::{empty_argument, type_mismatch};
use crate::eval::eval as eval_expr;
use crate::value::Value;

use super::check_arity;

pub fn register(env: &Rc<Environment>) {
    env.put("list".to_string(), Value::builtin("list", list));
    env.put("head".to_string(), Value::builtin("head", head));
    env.put("tail".to_string(), Value::builtin("tail", tail));
    env.put("join".to_string(), Value::builtin("join", join));
    env.put("eval".to_string(), Value::builtin("eval", eval));
}

fn list(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

fn head(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("head", &args, 1) {
        return e;
    }
    match args.remove(0) {
        Value::QExpr(items) if items.is_empty() => empty_argument("head"),
        Value::QExpr(mut items) => Value::QExpr(vec![items.remove(0)]),
        other => type_mismatch("head", 0, &other, "Q-Expression"),
    }
}

fn tail(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("tail", &args, 1) {
        return e;
    }
    match args.remove(0) {
        Value::QExpr(items) if items.is_empty() => empty_argument("tail"),
        Value::QExpr(mut items) => {
            items.remove(0);
            Value::QExpr(items)
        }
        other => type_mismatch("tail", 0, &other, "Q-Expression"),
    }
}

fn join(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return crate::error::arity_mismatch("join", 0, 1);
    }
    let mut out = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        match arg {
            Value::QExpr(items) => out.extend(items),
            other => return type_mismatch("join", i, &other, "Q-Expression"),
        }
    }
    Value::QExpr(out)
}

pub fn eval(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("eval", &args, 1) {
        return e;
    }
    match args.remove(0) {
        Value::QExpr(items) => eval_expr(env, Value::SExpr(items)),
        other => type_mismatch("eval", 0, &other, "Q-Expression"),
    }
}
