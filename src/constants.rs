// Constants shared by the runners and the terminal front end

/// Largest value counting sort accepts (one bucket per value up to this)
pub const MAX_COUNTING_VALUE: i64 = 1_000_000;

/// Radix sort digit base
pub const RADIX_BASE: i64 = 10;

/// Playback speed bounds, in steps per second
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 10;
pub const DEFAULT_SPEED: u32 = 5;

/// How long the event loop waits for input before re-checking playback
pub const EVENT_POLL_MS: u64 = 50;

/// Debounce for the play/pause key (ms)
pub const PLAY_TOGGLE_DEBOUNCE_MS: u64 = 200;
