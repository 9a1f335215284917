//! Member doubles shared by the unit tests of every wiring.

use std::cell::Cell;
use std::rc::Rc;

use domain::Member;

/// Returns a fixed value from every `call`.
#[derive(Debug)]
pub(crate) struct FixedMember {
    result: bool,
}

impl FixedMember {
    pub(crate) fn new(result: bool) -> Self {
        Self { result }
    }
}

impl Member for FixedMember {
    fn call(&self) -> bool {
        self.result
    }
}

/// Returns a fixed value and counts calls in a counter the test keeps a handle to.
#[derive(Debug)]
pub(crate) struct SpyMember {
    result: bool,
    calls: Rc<Cell<u32>>,
}

impl SpyMember {
    /// Build the spy and the shared call counter.
    pub(crate) fn new(result: bool) -> (Self, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        (Self { result, calls: Rc::clone(&calls) }, calls)
    }
}

impl Member for SpyMember {
    fn call(&self) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.result
    }
}
