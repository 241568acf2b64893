//! Portable Game Notation: tag pairs, movetext import and export.

use log::{debug, warn};

use super::error::PgnError;
use super::fen::START_FEN;
use super::types::Color;
use super::Board;

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Options for reading and writing PGN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PgnOptions {
    /// Wrap movetext at this column; 0 disables wrapping.
    pub max_width: usize,
    /// Line separator used on output and accepted on input.
    pub newline: String,
    /// Accept only SAN exactly as this crate writes it.
    pub strict: bool,
}

impl Default for PgnOptions {
    fn default() -> Self {
        PgnOptions {
            max_width: 0,
            newline: "\n".to_string(),
            strict: false,
        }
    }
}

impl Board {
    /// PGN tag pairs in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a tag pair, keeping the position of an existing key.
    pub fn set_header(&mut self, key: &str, value: &str) {
        match self.headers.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove_header(&mut self, key: &str) -> Option<String> {
        let idx = self.headers.iter().position(|(k, _)| k == key)?;
        Some(self.headers.remove(idx).1)
    }

    /// Record a non-standard start position in the `SetUp`/`FEN` tags.
    pub(crate) fn update_setup_headers(&mut self) {
        if !self.history.is_empty() {
            return;
        }
        let fen = self.fen();
        if fen == START_FEN {
            self.remove_header("SetUp");
            self.remove_header("FEN");
        } else {
            self.set_header("SetUp", "1");
            self.set_header("FEN", &fen);
        }
    }

    /// Replace the game with the one described by a PGN string.
    ///
    /// On error the board is left exactly as it was.
    pub fn load_pgn(&mut self, pgn: &str, options: &PgnOptions) -> Result<(), PgnError> {
        let text = if options.newline == "\n" {
            pgn.to_string()
        } else {
            pgn.replace(options.newline.as_str(), "\n")
        };

        let mut headers = Vec::new();
        let mut movetext = String::new();
        let mut in_headers = true;
        for line in text.lines() {
            let trimmed = line.trim();
            if in_headers {
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed.starts_with('[') {
                    match parse_header_line(trimmed) {
                        Some(pair) => headers.push(pair),
                        None => {
                            warn!("rejected PGN header {trimmed}");
                            return Err(PgnError::InvalidHeader {
                                line: trimmed.to_string(),
                            });
                        }
                    }
                    continue;
                }
                in_headers = false;
            }
            movetext.push_str(line);
            movetext.push('\n');
        }

        let fen = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("FEN"))
            .map(|(_, v)| v.clone());
        let mut game = match fen {
            Some(fen) => Board::try_from_fen(&fen)?,
            None => Board::new(),
        };
        game.headers = headers;

        let mut result = None;
        for token in movetext_tokens(&movetext) {
            if RESULT_TOKENS.contains(&token.as_str()) {
                result = Some(token);
                continue;
            }
            match game.parse_san(&token, options.strict) {
                Ok(mv) => game.play(mv),
                Err(error) => {
                    warn!("rejected PGN move {token}: {error}");
                    return Err(PgnError::IllegalMove {
                        ply: game.ply_count() + 1,
                        error,
                    });
                }
            }
        }

        if let Some(result) = result {
            if game.header("Result").is_none() {
                game.set_header("Result", &result);
            }
        }

        debug!("loaded PGN with {} moves", game.ply_count());
        *self = game;
        Ok(())
    }

    /// Export the game as PGN.
    pub fn pgn(&mut self, options: &PgnOptions) -> String {
        let newline = options.newline.as_str();
        let mut out = String::new();
        for (key, value) in &self.headers {
            let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
            out.push_str(&format!("[{key} \"{escaped}\"]{newline}"));
        }
        if !self.headers.is_empty() && !self.history.is_empty() {
            out.push_str(newline);
        }

        let mut undone = Vec::with_capacity(self.history.len());
        while let Some(mv) = self.unmake_move() {
            undone.push(mv);
        }

        let mut items: Vec<String> = Vec::new();
        let mut current = String::new();
        while let Some(mv) = undone.pop() {
            if self.history.is_empty() && mv.color == Color::Black {
                current = format!("{}. ...", self.move_number);
            } else if mv.color == Color::White {
                if !current.is_empty() {
                    items.push(std::mem::take(&mut current));
                }
                current = format!("{}.", self.move_number);
            }
            current.push(' ');
            current.push_str(&self.move_to_san(mv));
            self.make_move(mv);
        }
        if !current.is_empty() {
            items.push(current);
        }
        if let Some(result) = self.header("Result") {
            items.push(result.to_string());
        }

        if options.max_width == 0 {
            out.push_str(&items.join(" "));
            return out;
        }

        let mut width = 0;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                if width + 1 + item.len() > options.max_width {
                    out.push_str(newline);
                    width = 0;
                } else {
                    out.push(' ');
                    width += 1;
                }
            }
            out.push_str(item);
            width += item.len();
        }
        out
    }
}

/// Parse `[Key "Value"]`, unescaping `\"` and `\\` in the value.
fn parse_header_line(line: &str) -> Option<(String, String)> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    let (key, rest) = inner.split_once(char::is_whitespace)?;
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let quoted = rest.trim().strip_prefix('"')?.strip_suffix('"')?;

    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                value.push(next);
            }
        } else {
            value.push(c);
        }
    }
    Some((key.to_string(), value))
}

/// Split movetext into SAN and result tokens, dropping comments,
/// variations, move numbers and numeric annotation glyphs.
fn movetext_tokens(text: &str) -> Vec<String> {
    let mut raw = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars();
    let mut depth = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                for inner in chars.by_ref() {
                    if inner == '}' {
                        break;
                    }
                }
                flush(&mut current, &mut raw);
            }
            ';' if depth == 0 => {
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        break;
                    }
                }
                flush(&mut current, &mut raw);
            }
            '(' => {
                depth += 1;
                flush(&mut current, &mut raw);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.clear();
            }
            _ if depth > 0 => {}
            c if c.is_whitespace() => flush(&mut current, &mut raw),
            _ => current.push(c),
        }
    }
    flush(&mut current, &mut raw);

    raw.into_iter()
        .filter_map(|token| {
            if token.starts_with('$') {
                return None;
            }
            let body = strip_move_number(&token);
            if body.is_empty() || body.chars().all(|c| c == '.') {
                None
            } else {
                Some(body.to_string())
            }
        })
        .collect()
}

fn flush(current: &mut String, out: &mut Vec<String>) {
    if !current.is_empty() {
        out.push(std::mem::take(current));
    }
}

/// `12.e4` -> `e4`, `3...Nf6` -> `Nf6`; tokens without a trailing dot pass through.
fn strip_move_number(token: &str) -> &str {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && token[digits..].starts_with('.') {
        token[digits..].trim_start_matches('.')
    } else {
        token
    }
}
