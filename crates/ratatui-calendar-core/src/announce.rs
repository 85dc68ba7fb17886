//! Live-region announcements.
//!
//! The calendar reports screen-reader messages through an [`Announcer`] and never reads anything
//! back. Delivery is up to the app: forward to a platform accessibility API, print to a status
//! line, or collect them in an [`AnnouncementQueue`].
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub trait Announcer {
    fn announce(&self, message: &str);
}

impl<F> Announcer for F
where
    F: Fn(&str),
{
    fn announce(&self, message: &str) {
        self(message)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAnnouncer;

impl Announcer for NoopAnnouncer {
    fn announce(&self, _message: &str) {}
}

/// A bounded queue of pending announcements.
///
/// Clones share the same queue, so one handle can be given to the calendar while the UI keeps
/// another to drain or display messages.
#[derive(Clone, Debug)]
pub struct AnnouncementQueue {
    inner: Rc<RefCell<VecDeque<String>>>,
    capacity: usize,
}

impl Default for AnnouncementQueue {
    fn default() -> Self {
        Self::new(8)
    }
}

impl AnnouncementQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    pub fn latest(&self) -> Option<String> {
        self.inner.borrow().back().cloned()
    }

    pub fn drain(&self) -> Vec<String> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl Announcer for AnnouncementQueue {
    fn announce(&self, message: &str) {
        let mut queue = self.inner.borrow_mut();
        while queue.len() >= self.capacity {
            queue.pop_front();
        }
        queue.push_back(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drops_oldest_beyond_capacity() {
        let q = AnnouncementQueue::new(2);
        let handle = q.clone();
        handle.announce("a");
        handle.announce("b");
        handle.announce("c");
        assert_eq!(q.latest().as_deref(), Some("c"));
        assert_eq!(q.drain(), vec!["b".to_string(), "c".to_string()]);
        assert!(q.is_empty());
    }

    #[test]
    fn closures_are_announcers() {
        let seen = RefCell::new(Vec::new());
        let announcer = |m: &str| seen.borrow_mut().push(m.to_string());
        announcer.announce("hello");
        assert_eq!(seen.into_inner(), vec!["hello".to_string()]);
    }
}
