// ABOUTME: Evaluator module for executing parsed Lisp expressions

//! Uniform S-expression reduction. There are no special forms: `def`, `=`,
//! `\`, `if`, `eval`, `list`, `head`, `tail`, and `join` are ordinary
//! built-ins dispatched through the same reduction rule as everything else.
//! Laziness (an `if` branch never running) comes entirely from Q-expression
//! quoting, not from evaluator special-casing.

use std::rc::Rc;

use crate::env::Environment;
use crate::error::not_a_function;
use crate::value::{Fun, Value};

/// A Number, Error, String, Q-expression, or Function evaluates to itself; a
/// Symbol looks itself up; an S-expression reduces per `eval_sexpr`.
pub fn eval(env: &Rc<Environment>, expr: Value) -> Value {
    match expr {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(items) => eval_sexpr(env, items),
        other => other,
    }
}

fn eval_sexpr(env: &Rc<Environment>, items: Vec<Value>) -> Value {
    let mut evaluated: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        evaluated.push(eval(env, item));
    }
    if let Some(err) = evaluated.iter().position(|v| v.is_error()) {
        return evaluated.swap_remove(err);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }
    if evaluated.len() == 1 {
        return evaluated.pop().expect("checked len == 1");
    }

    let operator = evaluated.remove(0);
    let f = match operator {
        Value::Fun(f) => f,
        other => return not_a_function(&other),
    };
    apply(env, f, evaluated)
}

/// Invokes a built-in directly, or binds actual arguments against a
/// closure's formals (possibly only partially, yielding a narrower closure).
pub fn apply(env: &Rc<Environment>, f: Fun, args: Vec<Value>) -> Value {
    match f {
        Fun::Builtin(b) => (b.func)(env, args),
        Fun::Closure(c) => apply_closure(env, c, args),
    }
}

fn apply_closure(caller_env: &Rc<Environment>, mut closure: crate::value::Closure, mut args: Vec<Value>) -> Value {
    let total_formals = closure.formals.len();
    let mut args_iter = args.drain(..).peekable();

    while args_iter.peek().is_some() && !closure.formals.is_empty() {
        let formal = closure.formals.remove(0);
        let name = match formal {
            Value::Symbol(s) => s,
            other => return crate::error::type_mismatch("\\", 0, &other, "Symbol"),
        };

        if name == "&" {
            if closure.formals.len() != 1 {
                return crate::error::invalid_formals();
            }
            let rest_name = match closure.formals.remove(0) {
                Value::Symbol(s) => s,
                other => return crate::error::type_mismatch("\\", 0, &other, "Symbol"),
            };
            let rest: Vec<Value> = args_iter.collect();
            closure.env.put(rest_name, Value::QExpr(rest));
            return finish_closure_application(caller_env, closure);
        }

        let actual = args_iter.next().expect("peeked Some above");
        closure.env.put(name, actual);
    }

    if args_iter.peek().is_some() {
        let remaining = args_iter.count() + closure.formals.len();
        return crate::error::arity_mismatch(
            closure.name.as_deref().unwrap_or("\\"),
            total_formals + remaining,
            total_formals,
        );
    }

    if closure.formals.first().map(|v| matches!(v, Value::Symbol(s) if s == "&")).unwrap_or(false) {
        if closure.formals.len() != 2 {
            return crate::error::invalid_formals();
        }
        closure.formals.remove(0);
        let rest_name = match closure.formals.remove(0) {
            Value::Symbol(s) => s,
            other => return crate::error::type_mismatch("\\", 0, &other, "Symbol"),
        };
        closure.env.put(rest_name, Value::QExpr(vec![]));
        return finish_closure_application(caller_env, closure);
    }

    if closure.formals.is_empty() {
        finish_closure_application(caller_env, closure)
    } else {
        Value::Fun(Fun::Closure(closure))
    }
}

fn finish_closure_application(caller_env: &Rc<Environment>, closure: crate::value::Closure) -> Value {
    closure.env.set_parent(caller_env.clone());
    let body = match *closure.body {
        Value::QExpr(items) => Value::SExpr(items),
        other => other,
    };
    eval(&closure.env, body)
}
