pub mod playback;

pub use playback::QueuePlayback;
