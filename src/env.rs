// ABOUTME: Environment module for lexical scoping and variable bindings

//! Lexical environments: a name-to-value mapping with an optional parent.
//!
//! The parent pointer is interior-mutable, not fixed at construction. Closure
//! application rewrites it at call time (see `eval::apply_closure`) rather than
//! at closure-creation time — this late binding is what makes recursive and
//! mutually-recursive top-level definitions resolve correctly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Replace an existing binding or append a new one in this frame.
    pub fn put(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Walk to the root frame via parent pointers, then `put` there.
    pub fn def(&self, name: String, value: Value) {
        let parent = self.parent.borrow().clone();
        match parent {
            Some(p) => p.def(name, value),
            None => self.put(name, value),
        }
    }

    /// Linear search of this frame, then the parent chain. An unbound name
    /// yields an Error Value, not an `Option`/`Result` — lookup failure is a
    /// language-level error, not a Rust-level one (spec §7).
    pub fn get(&self, name: &str) -> Value {
        if let Some(v) = self.bindings.borrow().get(name) {
            return v.deep_copy();
        }
        let parent = self.parent.borrow().clone();
        match parent {
            Some(p) => p.get(name),
            None => crate::error::unbound_symbol(name),
        }
    }

    /// Rewrite this environment's parent pointer. Used at closure-call time to
    /// chain the closure's captured frame to the caller's environment.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Shallow on the parent pointer, deep on stored values. Used whenever a
    /// closure is copied (every `get` that returns a closure, and every
    /// explicit `Value::deep_copy` on one).
    pub fn deep_copy(self: &Rc<Environment>) -> Rc<Environment> {
        let bindings = self
            .bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.deep_copy()))
            .collect();
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: RefCell::new(self.parent.borrow().clone()),
        })
    }
}
