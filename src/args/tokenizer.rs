// src/args/tokenizer.rs

//! Quote-aware splitting of a single argument string.
//!
//! Rules:
//! - newlines and tabs are normalised to spaces first;
//! - unquoted whitespace separates tokens;
//! - `'...'` and `"..."` group their content verbatim (no escapes inside);
//! - quoted and unquoted parts glue together (`-Dk="a b"` → `-Dk=a b`);
//! - an empty quoted string yields an empty token;
//! - a backslash is an ordinary character, so `C:\tmp` survives as written;
//! - an unterminated quote is a [`BootrunError::ParseError`].

use crate::errors::{BootrunError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenizerState {
    Normal,
    SingleQuote,
    DoubleQuote,
}

struct TokenizerFsm {
    tokens: Vec<String>,
    current: String,
    /// The current token contained a quoted section, so it is emitted even
    /// when empty.
    quoted: bool,
    state: TokenizerState,
}

impl TokenizerFsm {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            current: String::new(),
            quoted: false,
            state: TokenizerState::Normal,
        }
    }

    fn feed(&mut self, c: char) {
        match self.state {
            TokenizerState::SingleQuote => self.in_quote(c, '\''),
            TokenizerState::DoubleQuote => self.in_quote(c, '"'),
            TokenizerState::Normal => match c {
                '\'' => self.state = TokenizerState::SingleQuote,
                '"' => self.state = TokenizerState::DoubleQuote,
                c if c.is_whitespace() => self.flush(),
                c => self.current.push(c),
            },
        }
    }

    fn in_quote(&mut self, c: char, closing: char) {
        if c == closing {
            self.quoted = true;
            self.state = TokenizerState::Normal;
        } else {
            self.current.push(c);
        }
    }

    fn flush(&mut self) {
        if self.quoted || !self.current.is_empty() {
            self.tokens.push(std::mem::take(&mut self.current));
        }
        self.quoted = false;
    }

    fn finish(mut self, input: &str) -> Result<Vec<String>> {
        if self.state != TokenizerState::Normal {
            return Err(BootrunError::ParseError {
                input: input.to_string(),
                reason: "unbalanced quotes".to_string(),
            });
        }
        self.flush();
        Ok(self.tokens)
    }
}

/// Split `raw` into tokens. Blank input yields an empty vector.
pub fn tokenize(raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let normalized = raw.replace(['\n', '\t'], " ");
    let mut fsm = TokenizerFsm::new();
    for c in normalized.chars() {
        fsm.feed(c);
    }
    fsm.finish(&normalized)
}
