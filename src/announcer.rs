//! One-way observability for game events.

/// Receives play-by-play notifications from a running game.
///
/// The game only ever calls into an announcer; nothing flows back. A no-op
/// implementation must leave game outcomes unchanged.
pub trait Announcer {
    /// Reports one game event.
    fn announce(&mut self, message: &str);

    /// Raises the nesting level for subsequent announcements. Called when a
    /// decision round deepens (each turn, and again for each tie level).
    fn increment(&mut self);

    /// Lowers the nesting level.
    fn decrement(&mut self);
}

/// An announcer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn announce(&mut self, _message: &str) {}

    fn increment(&mut self) {}

    fn decrement(&mut self) {}
}

/// Prints each event to stdout, indented one space per nesting level.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAnnouncer {
    indent: usize,
}

#[cfg(feature = "std")]
impl ConsoleAnnouncer {
    /// Creates an announcer with no indentation.
    #[must_use]
    pub const fn new() -> Self {
        Self { indent: 0 }
    }
}

#[cfg(feature = "std")]
impl Announcer for ConsoleAnnouncer {
    fn announce(&mut self, message: &str) {
        println!("{:indent$}{message}", "", indent = self.indent);
    }

    fn increment(&mut self) {
        self.indent += 1;
    }

    fn decrement(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }
}
