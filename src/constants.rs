/// Front-end defaults.
///
/// Runtime changes go through `PickSession`; these only seed a new session.
// Highlight every ball under the pointer instead of only the nearest one
pub const HIGHLIGHT_ALL_HITS: bool = false;

// Console logging
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Matrices arrive from JS as column-major Float32Array(16)
pub const MAT4_LEN: usize = 16;

// Events that release a held pointer and clear highlights
pub const RELEASE_EVENTS: [&str; 2] = ["pointerup", "pointercancel"];
