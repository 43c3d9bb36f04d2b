//! `if` — the sole control-flow primitive. Laziness of the unchosen branch
//! comes from it arriving as an unevaluated Q-expression; only the chosen
//! branch is retagged to S-expression and evaluated.

use std::rc::Rc;

use crate::env::Environment;
use crate::error::type_mismatch;
use crate::eval::eval;
use crate::value::Value;

use super::check_arity;

pub fn register(env: &Rc<Environment>) {
    env.put("if".to_string(), Value::builtin("if", if_));
}

fn if_(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("if", &args, 3) {
        return e;
    }
    let else_branch = args.remove(2);
    let then_branch = args.remove(1);
    let cond = args.remove(0);

    let cond = match cond {
        Value::Number(n) => n,
        other => return type_mismatch("if", 0, &other, "Number"),
    };
    if !matches!(then_branch, Value::QExpr(_)) {
        return type_mismatch("if", 1, &then_branch, "Q-Expression");
    }
    if !matches!(else_branch, Value::QExpr(_)) {
        return type_mismatch("if", 2, &else_branch, "Q-Expression");
    }

    let chosen = if cond != 0 { then_branch } else { else_branch };
    match chosen {
        Value::QExpr(items) => eval(env, Value::SExpr(items)),
        _ => unreachable!("both branches checked to be Q-Expression above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Rc<Environment> {
        let env = Environment::new();
        super::super::register_builtins(&env);
        env
    }

    #[test]
    fn true_branch_is_evaluated() {
        let v = if_(
            &env(),
            vec![
                Value::Number(1),
                Value::QExpr(vec![Value::Number(10)]),
                Value::QExpr(vec![Value::Number(20)]),
            ],
        );
        assert!(matches!(v, Value::Number(10)));
    }

    #[test]
    fn false_branch_is_evaluated() {
        let v = if_(
            &env(),
            vec![
                Value::Number(0),
                Value::QExpr(vec![Value::Number(10)]),
                Value::QExpr(vec![Value::Number(20)]),
            ],
        );
        assert!(matches!(v, Value::Number(20)));
    }

    #[test]
    fn unchosen_branch_side_effects_never_run() {
        let v = if_(
            &env(),
            vec![
                Value::Number(1),
                Value::QExpr(vec![Value::Number(1)]),
                Value::QExpr(vec![Value::Symbol("nonexistent-symbol".into())]),
            ],
        );
        assert!(matches!(v, Value::Number(1)));
    }

    #[test]
    fn condition_must_be_a_number() {
        match if_(&env(), vec![Value::Str("x".into()), Value::QExpr(vec![]), Value::QExpr(vec![])]) {
            Value::Error(msg) => assert!(msg.contains("Expected Number")),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn unchosen_branch_is_still_type_checked() {
        match if_(&env(), vec![Value::Number(1), Value::QExpr(vec![Value::Number(10)]), Value::Number(20)]) {
            Value::Error(msg) => assert!(msg.contains("Expected Q-Expression")),
            other => panic!("expected error, got {other:?}"),
        }
    }
}
