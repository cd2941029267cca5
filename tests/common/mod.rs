#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use sprout::context::{Context, Data};
use sprout::error::Result;
use sprout::hooks::{Hook, HookLoader};

/// Writes a file below `root`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn data(value: serde_json::Value) -> Data {
    value.as_object().cloned().unwrap()
}

type HookFn = Rc<dyn Fn(&mut Context<'_>) -> Result<()>>;

/// In-process hooks keyed by the hook path stored in the tree.
///
/// Every call is recorded as `"<name>.before"` / `"<name>.after"`.
#[derive(Clone, Default)]
pub struct TestHooks {
    calls: Rc<RefCell<Vec<String>>>,
    before: Rc<RefCell<HashMap<String, HookFn>>>,
    after: Rc<RefCell<HashMap<String, HookFn>>>,
}

impl TestHooks {
    pub fn on_before<F>(&self, name: &str, f: F)
    where
        F: Fn(&mut Context<'_>) -> Result<()> + 'static,
    {
        self.before.borrow_mut().insert(name.to_string(), Rc::new(f));
    }

    pub fn on_after<F>(&self, name: &str, f: F)
    where
        F: Fn(&mut Context<'_>) -> Result<()> + 'static,
    {
        self.after.borrow_mut().insert(name.to_string(), Rc::new(f));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn call(&self, phase: &str, name: &str, ctx: &mut Context<'_>) -> Result<()> {
        self.calls.borrow_mut().push(format!("{name}.{phase}"));
        let hooks = if phase == "before" { &self.before } else { &self.after };
        let f = hooks.borrow().get(name).cloned();
        match f {
            Some(f) => f(ctx),
            None => Ok(()),
        }
    }
}

struct TestHook {
    name: String,
    hooks: TestHooks,
}

impl Hook for TestHook {
    fn before(&self, ctx: &mut Context<'_>) -> Result<()> {
        self.hooks.call("before", &self.name, ctx)
    }

    fn after(&self, ctx: &mut Context<'_>) -> Result<()> {
        self.hooks.call("after", &self.name, ctx)
    }
}

impl HookLoader for TestHooks {
    fn load(&self, path: &Path) -> Result<Box<dyn Hook>> {
        Ok(Box::new(TestHook { name: path.display().to_string(), hooks: self.clone() }))
    }
}
