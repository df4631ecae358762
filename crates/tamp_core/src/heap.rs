//! Shared ownership for reference cells.
//!
//! Every reference cell goes through `Heap<T>`. The constructor is crate
//! private, so the only way to get a heap value from outside is through
//! [`IntoCell`](crate::IntoCell) or the [`Cell`](crate::Cell) factories.
//! The engine is single threaded, so the wrapper is an `Rc`.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared, immutable heap allocation used by reference cells.
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Take the value out, cloning it when other cells still share it.
    pub fn into_inner(self) -> T
    where
        T: Clone,
    {
        Rc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T: ?Sized> Heap<T> {
    pub(crate) fn from_rc(rc: Rc<T>) -> Self {
        Heap(rc)
    }

    /// Whether both handles point at the same allocation.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        Heap::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}
