//! Resource Guard Feature
//!
//! Size and wall-clock limits that keep one bad file from monopolizing a run.
//! The size check happens before any content is read; the parse budget is
//! handed to the parser and re-checked against the clock afterwards.

mod guard;

pub use guard::ResourceGuard;
