// Allocation counters (memory_tracking feature)
//
// Wraps the underlying allocator (mimalloc or the system allocator) and
// keeps running totals so tests and profiling runs can check how much the
// parser allocates. The tokenizer itself should never move these counters.

use std::alloc::{GlobalAlloc, Layout};
use std::sync::atomic::{AtomicUsize, Ordering};

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static PEAK_ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

pub struct TrackingAllocator;

#[cfg(feature = "mimalloc")]
static UNDERLYING: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(not(feature = "mimalloc"))]
static UNDERLYING: std::alloc::System = std::alloc::System;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = UNDERLYING.alloc(layout);
        if !ptr.is_null() {
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
            let current = ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
            PEAK_ALLOCATED.fetch_max(current, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
        UNDERLYING.dealloc(ptr, layout)
    }
}

/// Bytes currently allocated through the global allocator.
pub fn allocated() -> usize {
    ALLOCATED.load(Ordering::SeqCst)
}

/// Highest value `allocated()` has reached since the last reset.
pub fn peak() -> usize {
    PEAK_ALLOCATED.load(Ordering::SeqCst)
}

/// Number of successful allocations since startup.
pub fn allocation_count() -> usize {
    ALLOCATIONS.load(Ordering::SeqCst)
}

/// Reset the peak to the current level. Returns `(current, previous_peak)`.
pub fn reset_peak() -> (usize, usize) {
    let current = ALLOCATED.load(Ordering::SeqCst);
    let peak = PEAK_ALLOCATED.swap(current, Ordering::SeqCst);
    (current, peak)
}
