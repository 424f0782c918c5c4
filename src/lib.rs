//! Elapsed/remaining time labels for a media seek bar.
//!
//! [`SeekTimes`] is called with the seek input on every drag event. It finds
//! the two labels inside the seek-bar container once, through an injected
//! [`ElementProvider`], then rewrites them as `HH:MM:SS` on each call.

pub mod config;
pub mod error;
pub mod labels;
pub mod logging;
pub mod markup;
pub mod provider;
pub mod seek;
pub mod ui_time;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use config::SeekBarConfig;
pub use error::{LabelKind, SeekError};
pub use labels::{LabelCache, LocatedSeekBar};
pub use markup::{render_seek_bar, SeekBarState};
pub use provider::{ElementProvider, SeekControl, TextLabel};
pub use seek::{SeekReadout, SeekTimes};
pub use ui_time::{format_clock, ClockPolicy};
pub use util::SeekPosition;
