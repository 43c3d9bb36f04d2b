//! `print error load` — the only I/O this language performs: writing to
//! stdout and reading source files.

use std::rc::Rc;

use crate::env::Environment;
use crate::error::{type_mismatch, DriverError};
use crate::eval::eval;
use crate::reader::read_program;
use crate::value::Value;

use super::check_arity;

pub fn register(env: &Rc<Environment>) {
    env.put("print".to_string(), Value::builtin("print", print));
    env.put("error".to_string(), Value::builtin("error", error));
    env.put("load".to_string(), Value::builtin("load", load));
}

fn print(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Value::SExpr(vec![])
}

fn error(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("error", &args, 1) {
        return e;
    }
    match args.remove(0) {
        Value::Str(msg) => Value::Error(msg),
        other => type_mismatch("error", 0, &other, "String"),
    }
}

fn load(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("load", &args, 1) {
        return e;
    }
    let path = match args.remove(0) {
        Value::Str(s) => s,
        other => return type_mismatch("load", 0, &other, "String"),
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(source) => {
            return Value::Error(DriverError::Io { path, source }.to_string());
        }
    };

    let forms = match read_program(&contents) {
        Ok(forms) => forms,
        Err(reason) => {
            return Value::Error(DriverError::Parse { path, reason }.to_string());
        }
    };

    for form in forms {
        let result = eval(env, form);
        if let Value::Error(msg) = result {
            println!("Error: {msg}");
        }
    }

    Value::SExpr(vec![])
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
    fn error_wraps_a_string_payload() {
        match error(&env(), vec![Value::Str("bad".into())]) {
            Value::Error(msg) => assert_eq!(msg, "bad"),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn error_requires_a_string() {
        assert!(error(&env(), vec![Value::Number(1)]).is_error());
    }

    #[test]
    fn print_returns_empty_sexpr() {
        assert!(matches!(print(&env(), vec![Value::Number(1)]), Value::SExpr(items) if items.is_empty()));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let v = load(&env(), vec![Value::Str("/nonexistent/path/to/nowhere.ls".into())]);
        assert!(v.is_error());
    }

    #[test]
    fn load_runs_each_top_level_form_against_the_caller_environment() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("lispy-io-test-{}.ls", std::process::id()));
        std::fs::write(&path, "(def {loaded} 42)\n").unwrap();

        let e = env();
        load(&e, vec![Value::Str(path.to_string_lossy().into_owned())]);
        assert!(matches!(e.get("loaded"), Value::Number(42)));

        std::fs::remove_file(&path).ok();
    }
}
