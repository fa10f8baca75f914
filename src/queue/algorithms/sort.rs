use crate::queue::{connect, Node};
use crate::Queue;
use std::ptr::NonNull;

const INSERTION_SORT_THRESHOLD: usize = 8;

pub fn merge_sort(queue: &mut Queue) {
    let (start, end) = (queue.front_node(), queue.sentinel_node());
    // Nothing to sort in an empty or single-element queue.
    if start == end || unsafe { start.as_ref() }.next == end {
        return;
    }
    unsafe { merge_sort_range(start, end) };
}

/// Ascending byte-wise order of the payloads, the order `sort` establishes.
unsafe fn less(a: NonNull<Node>, b: NonNull<Node>) -> bool {
    a.as_ref().value < b.as_ref().value
}

unsafe fn mid_of_range(mut start: NonNull<Node>, end: NonNull<Node>) -> (NonNull<Node>, usize) {
    let mut mid = start;
    let mut len = 0;
    while start != end {
        len += 1;
        start = start.as_ref().next;
        if start != end {
            len += 1;
            start = start.as_ref().next;
            mid = mid.as_ref().next;
        }
    }
    (mid, len)
}

unsafe fn merge_sort_range(mut start: NonNull<Node>, end: NonNull<Node>) -> NonNull<Node> {
    let (mut mid, len) = mid_of_range(start, end);
    if len <= INSERTION_SORT_THRESHOLD {
        return insertion_sort_range(start, end);
    }

    if start != mid && start.as_ref().next != mid {
        start = merge_sort_range(start, mid);
    }
    if mid != end && mid.as_ref().next != end {
        mid = merge_sort_range(mid, end);
    }

    if start != mid && mid != end {
        start = merge_range(start, mid, end);
    }
    start
}

unsafe fn merge_range(
    mut start: NonNull<Node>,
    mid: NonNull<Node>,
    end: NonNull<Node>,
) -> NonNull<Node> {
    // This algorithm first logically partitions the range into
    // two sub-ranges, both of which are internally sorted:
    // - merged range: `start..mid`,
    // - unmerged range: `mid..end`.
    //
    // Then merge the nodes in the unmerged range one by one
    // into the merged range.
    let (mut merged, merged_back, mut to_merge) = (start, mid.as_ref().prev, mid);
    // If the back of merged range <= the front of unmerged range,
    // it is fully sorted, the algorithm stops here.
    while to_merge != end && less(to_merge, merged_back) {
        // Find a position of `merged` in the merged range,
        // where the payload of the current node to merge < `*merged`.
        while merged != to_merge && !less(to_merge, merged) {
            merged = merged.as_ref().next;
        }
        if merged == to_merge {
            break;
        }

        // Find a sub-range `to_merge..next_to_merge` in the unmerged range,
        // where all the payloads in it are < `*merged`.
        let mut next_to_merge = to_merge.as_ref().next;
        while next_to_merge != end && less(next_to_merge, merged) {
            next_to_merge = next_to_merge.as_ref().next;
        }
        if merged == start {
            start = to_merge;
        }
        // Move the sub-range `to_merge..next_to_merge` to the node before
        // `merged`. `next_to_merge` may be the sentinel, so its `prev` link
        // is read through a raw place.
        move_nodes(to_merge, (*next_to_merge.as_ptr()).prev, merged);
        to_merge = next_to_merge;
    }
    start
}

unsafe fn insertion_sort_range(mut start: NonNull<Node>, end: NonNull<Node>) -> NonNull<Node> {
    let (mut sorted_back, mut to_sort) = (start, start.as_ref().next);
    loop {
        // If the back of sorted range <= the current node to sort,
        // then it is already sorted. Move on to sort the next node.
        while to_sort != end && !less(to_sort, sorted_back) {
            sorted_back = to_sort;
            to_sort = to_sort.as_ref().next;
        }
        if to_sort == end {
            break;
        }
        // Find a position of `sorted` in the sorted range,
        // where the payload of the current node to sort < `*sorted`.
        let mut sorted = start;
        while sorted != to_sort && !less(to_sort, sorted) {
            sorted = sorted.as_ref().next;
        }
        if sorted == start {
            start = to_sort;
        }
        let next = to_sort.as_ref().next;
        // Move the node `to_sort` to the node before `sorted`.
        move_node(std::mem::replace(&mut to_sort, next), sorted);
    }
    start
}

unsafe fn move_node(from: NonNull<Node>, to: NonNull<Node>) {
    move_nodes(from, from, to);
}

unsafe fn move_nodes(from_front: NonNull<Node>, from_back: NonNull<Node>, to: NonNull<Node>) {
    connect(from_front.as_ref().prev, from_back.as_ref().next);
    connect(to.as_ref().prev, from_front);
    connect(from_back, to);
}
