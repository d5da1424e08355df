//! Errors raised while attaching the field to the page.
//!
//! None of these reach the surrounding page. The simulator logs them and stays
//! idle, leaving a transparent region where the animation would have been.

use std::fmt;

/// Why a drawable surface could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
	/// No global `window` (not running in a browser).
	NoWindow,
	/// The canvas node has not been mounted yet.
	CanvasNotMounted,
	/// `getContext("2d")` threw or returned `null`.
	ContextUnavailable(String),
	/// `getContext("2d")` returned something other than a 2D context.
	WrongContextType,
}

impl fmt::Display for MountError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MountError::NoWindow => write!(f, "no browser window available"),
			MountError::CanvasNotMounted => write!(f, "canvas element is not mounted"),
			MountError::ContextUnavailable(msg) => {
				write!(f, "2D drawing context unavailable: {}", msg)
			}
			MountError::WrongContextType => {
				write!(f, "canvas returned a context that is not CanvasRenderingContext2d")
			}
		}
	}
}

impl std::error::Error for MountError {}
