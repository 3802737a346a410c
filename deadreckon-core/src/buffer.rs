//! Fixed-Capacity Sample Window for Streaming Filters
//!
//! ## Overview
//!
//! Streaming transforms need the last few samples: the moving average needs
//! the whole trailing window, other filters only the most recent value. This
//! module provides a ring of `f64` samples whose capacity is fixed at compile
//! time through const generics, so streaming filters run without heap
//! allocation.
//!
//! ## Design Rationale
//!
//! ### Automatic Overwrite
//!
//! When full, pushing a new sample evicts the oldest one and hands it back to
//! the caller. `sum()` always recomputes over the held samples, so an
//! evicted spike leaves no residue behind.
//!
//! ### Truncated Start
//!
//! The window reports how many samples it actually holds. Before it fills,
//! averages are taken over `len()` samples, not `N`, which is the same
//! truncated-start boundary policy as the batch smoother.
//!
//! ### Storage
//!
//! Samples live in a `heapless::Deque`, which already gives a ring with
//! front/back access and no unsafe code in this crate.
//!
//! ```text
//! SampleWindow<4> after pushing 1..=6:
//! ┌─────┬─────┬─────┬─────┐
//! │  3  │  4  │  5  │  6  │   oldest → newest
//! └─────┴─────┴─────┴─────┘
//! pushes of 1 and 2 were evicted and returned to the caller
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use deadreckon_core::buffer::SampleWindow;
//!
//! let mut window: SampleWindow<3> = SampleWindow::new();
//! assert_eq!(window.push(1.0), None);
//! assert_eq!(window.push(2.0), None);
//! assert_eq!(window.push(3.0), None);
//!
//! // Fourth push evicts the oldest sample
//! assert_eq!(window.push(4.0), Some(1.0));
//! assert_eq!(window.last(), Some(4.0));
//! ```

use heapless::Deque;

/// Fixed-capacity ring of samples, oldest first
///
/// ## Type Parameter
///
/// - `N`: maximum number of samples held. Must be greater than zero; this
///   is checked at compile time by the underlying deque.
///
/// ## Thread Safety
///
/// Not thread-safe. One window belongs to one filter on one channel.
#[derive(Clone, Debug)]
pub struct SampleWindow<const N: usize> {
    samples: Deque<f64, N>,
}

impl<const N: usize> SampleWindow<N> {
    /// Creates an empty window
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Adds a sample, returning the evicted oldest sample when full
    pub fn push(&mut self, sample: f64) -> Option<f64> {
        let evicted = if self.samples.is_full() {
            self.samples.pop_front()
        } else {
            None
        };

        // Cannot fail: a slot was freed above if the deque was full
        let _ = self.samples.push_back(sample);
        evicted
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if the window is at capacity
    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    /// Maximum number of samples
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most recent sample
    pub fn last(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Oldest sample still in the window
    pub fn first(&self) -> Option<f64> {
        self.samples.front().copied()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Sum of the held samples, recomputed oldest to newest
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}
