// src/progress.rs
/// Progress reporting for the slow part of a run: reading every detail page
/// of a state. Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sites about to be read.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one site is read; `index` is 0-based in listing order.
    fn item_done(&mut self, _index: usize, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
