//! VT100 escape sequence decoder
//!
//! Recognizes `ESC [ A` (up) and `ESC [ B` (down) inline in the input
//! stream. Bytes that are still part of a possible sequence are swallowed;
//! a byte that breaks a sequence is handed back for normal processing.

/// Escape character
pub const ESC: u8 = 0x1B;

/// Decoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeState {
    Idle,
    SawEsc,     // Got ESC
    SawBracket, // Got ESC [
}

/// Cursor key recognized by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKey {
    Up,
    Down,
}

/// Result of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// Byte belongs to a pending sequence, do not echo
    Consumed,
    /// A complete cursor-key sequence
    Key(CursorKey),
    /// Not part of a sequence, process normally
    Pass(u8),
}

/// Escape sequence state machine
#[derive(Debug, Clone)]
pub struct EscapeDecoder {
    state: EscapeState,
}

impl EscapeDecoder {
    pub const fn new() -> Self {
        Self {
            state: EscapeState::Idle,
        }
    }

    /// Feed one input byte
    pub fn feed(&mut self, byte: u8) -> Decoded {
        // ESC always (re)starts a sequence
        if byte == ESC {
            self.state = EscapeState::SawEsc;
            return Decoded::Consumed;
        }

        match self.state {
            EscapeState::Idle => Decoded::Pass(byte),
            EscapeState::SawEsc => {
                if byte == b'[' {
                    self.state = EscapeState::SawBracket;
                    Decoded::Consumed
                } else {
                    self.state = EscapeState::Idle;
                    Decoded::Pass(byte)
                }
            }
            EscapeState::SawBracket => {
                self.state = EscapeState::Idle;
                match byte {
                    b'A' => Decoded::Key(CursorKey::Up),
                    b'B' => Decoded::Key(CursorKey::Down),
                    _ => Decoded::Pass(byte),
                }
            }
        }
    }

    /// Current state
    pub fn state(&self) -> EscapeState {
        self.state
    }
}

impl Default for EscapeDecoder {
    fn default() -> Self {
        Self::new()
    }
}
