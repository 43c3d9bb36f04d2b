//! `def` and `=` — both take a Q-expression of Symbols followed by one value
//! per name, and differ only in which environment they bind into.

use std::rc::Rc;

use crate::env::Environment;
use crate::error::type_mismatch;
use crate::value::{Fun, Value};

pub fn register(env: &Rc<Environment>) {
    env.put("def".to_string(), Value::builtin("def", def));
    env.put("=".to_string(), Value::builtin("=", put));
}

fn bind(name: &'static str, env: &Rc<Environment>, mut args: Vec<Value>, global: bool) -> Value {
    if args.is_empty() {
        return crate::error::arity_mismatch(name, 0, 1);
    }
    let names = match args.remove(0) {
        Value::QExpr(items) => items,
        other => return type_mismatch(name, 0, &other, "Q-Expression"),
    };

    let mut symbols = Vec::with_capacity(names.len());
    for (i, n) in names.iter().enumerate() {
        match n {
            Value::Symbol(s) => symbols.push(s.clone()),
            other => return type_mismatch(name, i, other, "Symbol"),
        }
    }

    if symbols.len() != args.len() {
        return crate::error::arity_mismatch(name, args.len(), symbols.len());
    }

    for (sym, mut value) in symbols.into_iter().zip(args.into_iter()) {
        if let Value::Fun(Fun::Closure(ref mut c)) = value {
            if c.name.is_none() {
                c.name = Some(sym.clone());
            }
        }
        if global {
            env.def(sym, value);
        } else {
            env.put(sym, value);
        }
    }
    Value::SExpr(vec![])
}

fn def(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    bind("def", env, args, true)
}

fn put(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    bind("=", env, args, false)
}
