//! Scoped ownership of scheduled work.
//!
//! Every timer, animation-frame request and listener an effect obtains goes
//! into one [`EffectScope`]. Handles are released exactly once: explicitly by
//! key, by replacement, by [`EffectScope::release_all`], or on drop. A closed
//! scope releases anything handed to it straight away.

use fnv::FnvHashMap;

/// Something that must be cancelled/removed when its effect goes away.
pub trait Release {
    fn release(self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandleKey(u32);

pub struct EffectScope<H: Release> {
    handles: FnvHashMap<HandleKey, H>,
    next_key: u32,
    closed: bool,
}

impl<H: Release> Default for EffectScope<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Release> EffectScope<H> {
    pub fn new() -> Self {
        Self {
            handles: FnvHashMap::default(),
            next_key: 0,
            closed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, key: HandleKey) -> bool {
        self.handles.contains_key(&key)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The returned key is dead when the scope is closed.
    pub fn acquire(&mut self, handle: H) -> HandleKey {
        let key = HandleKey(self.next_key);
        self.next_key = self.next_key.wrapping_add(1);
        if self.closed {
            log::debug!("[fx] handle acquired after close, releasing");
            handle.release();
        } else {
            self.handles.insert(key, handle);
        }
        key
    }

    /// Store `handle` under `key`, releasing whatever was there.
    /// A `None` key acquires a fresh slot.
    pub fn replace(&mut self, key: Option<HandleKey>, handle: H) -> HandleKey {
        match key {
            Some(key) if self.closed => {
                handle.release();
                key
            }
            Some(key) => {
                if let Some(old) = self.handles.insert(key, handle) {
                    old.release();
                }
                key
            }
            None => self.acquire(handle),
        }
    }

    /// Release one handle. Returns false when the key was already released.
    pub fn release(&mut self, key: HandleKey) -> bool {
        match self.handles.remove(&key) {
            Some(h) => {
                h.release();
                true
            }
            None => false,
        }
    }

    /// Forget a handle that completed on its own (e.g. a fired timeout)
    /// without releasing it.
    pub fn forget(&mut self, key: HandleKey) -> Option<H> {
        self.handles.remove(&key)
    }

    /// Release every handle. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let n = self.handles.len();
        for (_, h) in self.handles.drain() {
            h.release();
        }
        n
    }

    /// Final teardown: release everything and refuse new handles.
    pub fn close(&mut self) -> usize {
        self.closed = true;
        self.release_all()
    }
}

impl<H: Release> Drop for EffectScope<H> {
    fn drop(&mut self) {
        let n = self.release_all();
        if n > 0 {
            log::debug!("[fx] scope dropped with {} live handles", n);
        }
    }
}
