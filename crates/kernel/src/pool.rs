use parking_lot::Mutex;

/// LIFO pool of idle, reusable handles.
///
/// Producers on any thread may acquire and release concurrently. A handle
/// handed out by [`acquire_with`](Self::acquire_with) is owned by the caller
/// until it is released again.
#[derive(Debug)]
pub struct ResourcePool<T> {
    idle: Mutex<Vec<T>>,
}

impl<T> ResourcePool<T> {
    pub fn new() -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Pop an idle handle, or build a new one with `create` when the pool is empty.
    ///
    /// The lock is not held while `create` runs.
    pub fn acquire_with<E>(&self, create: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if let Some(item) = self.idle.lock().pop() {
            return Ok(item);
        }
        create()
    }

    /// Pop an idle handle if there is one.
    pub fn pop(&self) -> Option<T> {
        self.idle.lock().pop()
    }

    /// Remove and return every idle handle.
    pub fn drain(&self) -> Vec<T> {
        std::mem::take(&mut *self.idle.lock())
    }

    pub fn len(&self) -> usize {
        self.idle.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.idle.lock().is_empty()
    }
}

impl<T: PartialEq + std::fmt::Debug> ResourcePool<T> {
    /// Return a handle to the pool.
    ///
    /// The caller must already have detached the handle from anything live.
    /// Releasing the same handle twice is a programming error.
    pub fn release(&self, item: T) {
        let mut idle = self.idle.lock();
        debug_assert!(
            !idle.contains(&item),
            "handle {item:?} released twice into the pool"
        );
        idle.push(item);
    }
}

impl<T> Default for ResourcePool<T> {
    fn default() -> Self {
        Self::new()
    }
}
