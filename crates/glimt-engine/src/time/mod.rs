//! Frame timing.

mod frame_stats;

pub use frame_stats::FrameStats;
