//! Exit function stack
//!
//! Callbacks registered by render hooks during a route's active
//! lifetime, invoked once each when that lifetime ends.

use parking_lot::Mutex;
use std::sync::Arc;

pub type ExitFn = Arc<dyn Fn() + Send + Sync>;

pub struct ExitStack {
    stack: Arc<Mutex<Vec<ExitFn>>>,
}

impl ExitStack {
    pub fn new() -> Self {
        Self {
            stack: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an exit callback
    pub fn push(&self, f: impl Fn() + Send + Sync + 'static) {
        self.stack.lock().push(Arc::new(f));
    }

    /// Pop and invoke callbacks until the stack is empty.
    ///
    /// LIFO over the live stack, not a frozen snapshot: a callback that
    /// pushes another callback during the drain extends the drain. This
    /// is deliberate semantics, not an oversight. The lock is released
    /// around each invocation so callbacks can push.
    ///
    /// Returns the number of callbacks run.
    pub fn drain_all(&self) -> usize {
        let mut drained = 0;

        loop {
            let next = self.stack.lock().pop();
            match next {
                Some(f) => {
                    f();
                    drained += 1;
                }
                None => break,
            }
        }

        drained
    }

    pub fn len(&self) -> usize {
        self.stack.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.lock().is_empty()
    }
}

impl Default for ExitStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ExitStack {
    fn clone(&self) -> Self {
        Self {
            stack: Arc::clone(&self.stack),
        }
    }
}
