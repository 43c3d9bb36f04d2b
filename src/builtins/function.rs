//! `\` — constructs a closure with a fresh, empty captured environment. The
//! environment's parent stays unset until the closure is actually called
//! (see `eval::apply_closure`); this is what makes capture late-bound.

use std::rc::Rc;

use crate::env::Environment;
use crate::error::type_mismatch;
use crate::value::{Closure, Fun, Value};

use super::check_arity;

pub fn register(env: &Rc<Environment>) {
    env.put("\\".to_string(), Value::builtin("\\", lambda));
}

fn lambda(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("\\", &args, 2) {
        return e;
    }
    let body = args.remove(1);
    let formals = args.remove(0);

    let formals = match formals {
        Value::QExpr(items) => items,
        other => return type_mismatch("\\", 0, &other, "Q-Expression"),
    };
    for (i, f) in formals.iter().enumerate() {
        if !matches!(f, Value::Symbol(_)) {
            return type_mismatch("\\", i, f, "Symbol");
        }
    }
    let body = match body {
        Value::QExpr(_) => body,
        other => return type_mismatch("\\", 1, &other, "Q-Expression"),
    };

    Value::Fun(Fun::Closure(Closure {
        formals,
        body: Box::new(body),
        env: Environment::new(),
        name: None,
    }))
}
