use std::{cell::RefCell, rc::Rc};

/// Shared mutable pointer for single-threaded writers and buffers.
pub type RcRefCell<T> = Rc<RefCell<T>>;

/// Namespace for constructing an `RcRefCell` without the nested `::new`.
pub struct RcRefCellT(());

impl RcRefCellT {
    pub fn new<T>(t: T) -> RcRefCell<T> {
        Rc::new(RefCell::new(t))
    }
}
