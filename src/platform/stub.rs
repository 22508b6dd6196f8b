//! No-op decoration filter. On macOS the native traffic-light buttons and
//! drag behavior stay in charge; elsewhere it is the fallback for window
//! systems without an integration. Registration bookkeeping still works so
//! toolkit-observed state reaches the title bar callbacks.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;

use super::{DecorationFilter, DecorationHooks, WindowRecord, WindowTarget};

pub struct StubDecorationFilter {
    registry: RefCell<HashMap<u64, Rc<WindowRecord>>>,
}

impl StubDecorationFilter {
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for StubDecorationFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DecorationFilter for StubDecorationFilter {
    fn attach(&self, target: &WindowTarget, hooks: DecorationHooks) -> Result<()> {
        self.registry
            .borrow_mut()
            .insert(target.key(), Rc::new(WindowRecord::new(hooks)));
        Ok(())
    }

    fn detach(&self, target: &WindowTarget) {
        self.registry.borrow_mut().remove(&target.key());
    }

    fn record(&self, target: &WindowTarget) -> Option<Rc<WindowRecord>> {
        self.registry.borrow().get(&target.key()).cloned()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
