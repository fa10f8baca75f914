//! A fully safe rendition of the string queue, built on branded cells
//! ([`GhostCell`]) and fractional ownership ([`StaticRc`]).
//!
//! The unsafe ring in [`crate::queue`] trades safety proofs for pointer
//! surgery. This module explores the opposite corner: every link is one
//! half of a `StaticRc`, so each node is kept alive by exactly two owners
//! (its neighbors, or the queue ends), and all aliasing is checked at
//! compile time through the ghost token.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct SafeQueue<'id> {
    links: [Option<NodePtr<'id>>; 2],
}

struct Node<'id> {
    links: [Option<NodePtr<'id>>; 2],
    value: String,
}

type NodePtr<'id> = Half<GhostCell<'id, Node<'id>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id> Node<'id> {
    fn new(value: String) -> Self {
        let links = [None, None];
        Self { links, value }
    }
}

impl<'id> Default for SafeQueue<'id> {
    fn default() -> Self {
        let links = [None, None];
        Self { links }
    }
}

impl<'id> SafeQueue<'id> {
    const FRONT: usize = 0;
    const BACK: usize = 1;

    fn front_link(&self) -> Option<&NodePtr<'id>> {
        self.links[Self::FRONT].as_ref()
    }
    fn push_at(&mut self, side: usize, value: &str, token: &mut GhostToken<'id>) {
        let oppo = 1 - side;
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(value.to_owned()))));
        match self.links[side].take() {
            Some(this_side) => {
                this_side.deref().borrow_mut(token).links[oppo] = Some(left);
                right.deref().borrow_mut(token).links[side] = Some(this_side);
            }
            None => self.links[oppo] = Some(left),
        }
        self.links[side] = Some(right);
    }
    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<String> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let right = self.links[side].take()?;
        let left = match right.deref().borrow_mut(token).links[side].take() {
            Some(this_side) => {
                let left = this_side.deref().borrow_mut(token).links[oppo]
                    .take()
                    .unwrap();
                self.links[side] = Some(this_side);
                left
            }
            None => self.links[oppo].take().unwrap(),
        };
        Some(Full::into_box(Full::join(left, right)).into_inner().value)
    }
}

impl<'id> SafeQueue<'id> {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn is_empty(&self) -> bool {
        self.front_link().is_none()
    }
    pub fn push_back(&mut self, value: &str, token: &mut GhostToken<'id>) {
        self.push_at(Self::BACK, value, token);
    }
    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<String> {
        self.pop_at(Self::BACK, token)
    }
    pub fn push_front(&mut self, value: &str, token: &mut GhostToken<'id>) {
        self.push_at(Self::FRONT, value, token);
    }
    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<String> {
        self.pop_at(Self::FRONT, token)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::SafeQueue;
    use ghost_cell::GhostToken;

    #[test]
    fn safe_queue_push_pop() {
        GhostToken::new(|mut token| {
            let mut queue = SafeQueue::new();
            assert!(queue.is_empty());
            queue.push_back("alpha", &mut token);
            queue.push_back("beta", &mut token);
            queue.push_front("gamma", &mut token);
            assert!(!queue.is_empty());
            assert_eq!(queue.pop_front(&mut token).as_deref(), Some("gamma"));
            assert_eq!(queue.pop_front(&mut token).as_deref(), Some("alpha"));
            assert_eq!(queue.pop_back(&mut token).as_deref(), Some("beta"));
            assert!(queue.is_empty());
        })
    }
}
