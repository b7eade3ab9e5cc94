//! Input buffer model for the new-file dialog.
//!
//! A small bounded text buffer with append/backspace semantics. Appends
//! past the capacity are silently dropped; the dialog is a best-effort
//! bounded input, not an error surface.

/// Maximum input length in bytes.
pub const INPUT_CAPACITY: usize = 128;

/// The text buffer behind the modal new-file dialog.
///
/// The buffer is cleared on every dialog exit, whether the input was
/// submitted or cancelled.
#[derive(Debug, Default)]
pub struct DialogState {
    buffer: String,
}

impl DialogState {
    #[inline]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Appends a character if capacity remains; dropped otherwise.
    pub fn push(&mut self, ch: char) {
        if self.buffer.len() + ch.len_utf8() <= INPUT_CAPACITY {
            self.buffer.push(ch);
        }
    }

    /// Removes the last character. No-op on an empty buffer.
    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    /// Returns the buffer contents and leaves the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
