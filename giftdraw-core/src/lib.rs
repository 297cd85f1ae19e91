//! Gift exchange draw engine
//!
//! This library implements an interactive gift drawing tool: gift numbers
//! 1..=n are shuffled with an unbiased Fisher–Yates permutation and revealed
//! to participants one at a time. A small state machine walks the tool
//! through its three phases (Setup, Drawing, Results) and a bilingual text
//! layer renders every visible string in Traditional Chinese or English.

pub mod controller;
pub mod error;
pub mod i18n;
pub mod session;
pub mod shuffle;

pub use controller::{Command, Controller, Frame, Outcome, Phase};
pub use error::{DrawError, Result};
pub use i18n::Language;
pub use session::{DrawSession, SessionInfo};
