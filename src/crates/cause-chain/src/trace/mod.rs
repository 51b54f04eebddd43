//! Stack trace capture
//!
//! Every error records the source location that constructed it. When
//! backtraces are enabled through [`crate::config`], the resolved call stack is
//! captured as well, with the frames of the capture machinery removed so the
//! first frame is the function that built the error.

use crate::config;
use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

/// Symbol prefixes of frames that belong to error construction itself
const INTERNAL_FRAME_MARKERS: &[&str] = &[
    "backtrace::",
    "cause_chain::trace::",
    "cause_chain::error::",
];

/// One resolved call-stack frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    function: String,
    file: Option<PathBuf>,
    line: Option<u32>,
}

impl Frame {
    /// Create a frame from its parts
    pub fn new(function: impl Into<String>, file: Option<PathBuf>, line: Option<u32>) -> Self {
        Self {
            function: function.into(),
            file,
            line,
        }
    }

    /// Demangled function name, without the symbol hash
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file, when debug info is available
    pub fn file(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }

    /// Source line, when debug info is available
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => {
                write!(f, "at {} ({}:{})", self.function, file.display(), line)
            }
            (Some(file), None) => write!(f, "at {} ({})", self.function, file.display()),
            _ => write!(f, "at {}", self.function),
        }
    }
}

/// Construction site and, optionally, the call stack of an error
#[derive(Debug, Clone)]
pub struct StackTrace {
    location: &'static Location<'static>,
    frames: Vec<Frame>,
}

impl StackTrace {
    /// Capture at the caller's location using the process-wide config
    #[track_caller]
    pub fn capture() -> Self {
        let location = Location::caller();
        let config = config::current();

        let frames = if config.backtrace {
            resolve_frames(config.max_frames)
        } else {
            Vec::new()
        };

        Self { location, frames }
    }

    /// Build a trace from a location and already resolved frames
    pub fn from_parts(location: &'static Location<'static>, frames: Vec<Frame>) -> Self {
        Self { location, frames }
    }

    /// Source location that constructed the error
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Resolved frames, empty when backtraces are disabled
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Indented `at ...` lines, one per frame
    ///
    /// Falls back to the construction location when no frames were captured,
    /// so there is always at least one line.
    pub fn frame_lines(&self) -> Vec<String> {
        if self.frames.is_empty() {
            return vec![format!("    at {}", self.location)];
        }
        self.frames.iter().map(|frame| format!("    {}", frame)).collect()
    }
}

fn resolve_frames(max_frames: usize) -> Vec<Frame> {
    let backtrace = backtrace::Backtrace::new();

    let symbols = backtrace.frames().iter().flat_map(|frame| frame.symbols());
    symbols
        .filter_map(|symbol| {
            let name = symbol.name()?;
            Some(Frame {
                function: format!("{:#}", name),
                file: symbol.filename().map(PathBuf::from),
                line: symbol.lineno(),
            })
        })
        .skip_while(|frame| is_internal(&frame.function))
        .take(max_frames)
        .collect()
}

fn is_internal(function: &str) -> bool {
    let path = function.trim_start_matches('<');
    INTERNAL_FRAME_MARKERS
        .iter()
        .any(|marker| path.starts_with(marker))
        || function.contains(" as cause_chain::error::")
}
