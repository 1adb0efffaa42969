use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// A shared, mutable list that several widgets can page over at once.
pub type SharedSource<T> = Rc<RefCell<Vec<T>>>;

/// An ordered, indexable sequence owned outside the widget.
///
/// The widget only ever asks for the current length and for one item at a
/// time, so the owner is free to grow or shrink the sequence between frames.
pub trait DataSource {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `f` with the item at `index`, or returns `None` when out of bounds.
    fn with_item<R>(&self, index: usize, f: impl FnOnce(&Self::Item) -> R) -> Option<R>;
}

impl<T> DataSource for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn with_item<R>(&self, index: usize, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.get(index).map(f)
    }
}

impl<T> DataSource for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn with_item<R>(&self, index: usize, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.get(index).map(f)
    }
}

impl<S: DataSource + ?Sized> DataSource for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn with_item<R>(&self, index: usize, f: impl FnOnce(&Self::Item) -> R) -> Option<R> {
        (**self).with_item(index, f)
    }
}

impl<S: DataSource + ?Sized> DataSource for Rc<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn with_item<R>(&self, index: usize, f: impl FnOnce(&Self::Item) -> R) -> Option<R> {
        (**self).with_item(index, f)
    }
}

impl<S: DataSource + ?Sized> DataSource for Arc<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn with_item<R>(&self, index: usize, f: impl FnOnce(&Self::Item) -> R) -> Option<R> {
        (**self).with_item(index, f)
    }
}

// Borrows for the duration of a single lookup; the owner must not hold a
// mutable borrow while the widget renders.
impl<S: DataSource> DataSource for RefCell<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn with_item<R>(&self, index: usize, f: impl FnOnce(&Self::Item) -> R) -> Option<R> {
        self.borrow().with_item(index, f)
    }
}
