use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// An error raised when a shared value could not be accessed.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Trying to read a value which is being written to.
    #[error("cannot read `{type_name}`, it is being modified")]
    NotAccessibleRef {
        /// The type of the inaccessible value.
        type_name: &'static str,
    },
    /// Trying to write to a value which is being accessed.
    #[error("cannot write `{type_name}`, it is being accessed")]
    NotAccessibleMut {
        /// The type of the inaccessible value.
        type_name: &'static str,
    },
}

/// A shared handle to a value owned by the host runtime.
///
/// Cloning the handle does not clone the value. Access is checked at runtime,
/// so reading a value while it is being modified produces an [AccessError]
/// instead of a panic.
pub struct Shared<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Shared<T> {
    /// Construct a new shared value.
    pub fn new(data: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(data)),
        }
    }

    /// Get a reference to the interior value.
    pub fn borrow_ref(&self) -> Result<Ref<'_, T>, AccessError> {
        self.inner
            .try_borrow()
            .map_err(|_| AccessError::NotAccessibleRef {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// Get a mutable reference to the interior value.
    pub fn borrow_mut(&self) -> Result<RefMut<'_, T>, AccessError> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| AccessError::NotAccessibleMut {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// Test if two handles point to the same value.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Shared<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(value) => fmt::Debug::fmt(&*value, fmt),
            Err(..) => write!(fmt, "<borrowed>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessError, Shared};

    #[test]
    fn test_checked_access() {
        let shared = Shared::new(vec![1u32, 2]);
        let other = shared.clone();
        assert!(Shared::ptr_eq(&shared, &other));

        {
            let _guard = shared.borrow_mut().unwrap();
            assert!(matches!(
                other.borrow_ref(),
                Err(AccessError::NotAccessibleRef { .. })
            ));
        }

        let _a = shared.borrow_ref().unwrap();
        let _b = other.borrow_ref().unwrap();
        assert!(matches!(
            shared.borrow_mut(),
            Err(AccessError::NotAccessibleMut { .. })
        ));
    }
}
