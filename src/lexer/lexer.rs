use std::{collections::VecDeque, iter::FusedIterator, str::CharIndices};

use crate::{
    config::LexerConfig,
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PUNCT, MK_TOKEN,
};

use super::{
    state::{finish, transition, Action, EndAction, LexState},
    tokens::{Token, TokenKind},
};

/// The token currently being collected.
#[derive(Debug, Clone)]
struct TokenAccumulator {
    kind: TokenKind,
    value: String,
    start: usize,
}

impl TokenAccumulator {
    fn new(kind: TokenKind, start: usize) -> Self {
        TokenAccumulator {
            kind,
            value: String::new(),
            start,
        }
    }

    fn into_token(self) -> Token {
        let end = self.start + self.value.len();
        MK_TOKEN!(self.kind, self.value, Span::new(self.start, end))
    }
}

/// Streaming lexer over one input.
///
/// Yields tokens as soon as they are complete. On malformed input the
/// tokens before the failure are yielded first, then the error, and then
/// the iterator is exhausted.
pub struct Lexer<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
    state: LexState,
    current: Option<TokenAccumulator>,
    pending: VecDeque<Token>,
    config: LexerConfig,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'a str, config: LexerConfig) -> Lexer<'a> {
        Lexer {
            source,
            chars: source.char_indices(),
            state: LexState::Start,
            current: None,
            pending: VecDeque::new(),
            config,
            finished: false,
        }
    }

    pub fn state(&self) -> LexState {
        self.state
    }

    fn push(&mut self, token: Token) {
        self.pending.push_back(token);
    }

    fn flush(&mut self) {
        if let Some(current) = self.current.take() {
            self.push(current.into_token());
        }
    }

    fn fail(&mut self, error_impl: ErrorImpl, pos: usize) -> Error {
        self.finished = true;
        self.current = None;
        self.pending.clear();
        tracing::debug!(state = ?self.state, pos, error = %error_impl, "tokenize failed");
        Error::new(error_impl, Position(pos))
    }

    /// Feeds one character through the transition table.
    fn step(&mut self, pos: usize, ch: char) -> Result<(), Error> {
        let (next, action) = match transition(self.state, ch) {
            Ok(step) => step,
            Err(error_impl) => return Err(self.fail(error_impl, pos)),
        };

        tracing::trace!(from = ?self.state, to = ?next, ?ch, ?action, "transition");

        match action {
            Action::Skip => {}
            Action::Emit(kind) => self.push(MK_PUNCT!(kind, ch, pos)),
            Action::Begin(kind) => {
                let mut current = TokenAccumulator::new(kind, pos);
                current.value.push(ch);
                self.current = Some(current);
            }
            Action::Open(kind) => {
                self.current = Some(TokenAccumulator::new(kind, pos + ch.len_utf8()));
            }
            Action::Extend => {
                if let Some(current) = self.current.as_mut() {
                    current.value.push(ch);
                }
            }
            Action::Flush => self.flush(),
            Action::FlushThen(kind) => {
                self.flush();
                self.push(MK_PUNCT!(kind, ch, pos));
            }
        }

        self.state = next;
        Ok(())
    }

    /// Handles the end of the input.
    fn end(&mut self) -> Result<(), Error> {
        self.finished = true;

        match finish(self.state, &self.config) {
            Ok(EndAction::Done) => Ok(()),
            Ok(EndAction::Flush) => {
                self.flush();
                Ok(())
            }
            Err(error_impl) => Err(self.fail(error_impl, self.source.len())),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            if self.finished {
                return None;
            }

            let step = match self.chars.next() {
                Some((pos, ch)) => self.step(pos, ch),
                None => self.end(),
            };

            if let Err(error) = step {
                return Some(Err(error));
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes `source` with the default configuration.
///
/// Fails on the first character without a valid transition; no tokens are
/// returned in that case.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(source, &LexerConfig::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with(source: &str, config: &LexerConfig) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::with_config(source, *config).collect::<Result<Vec<Token>, Error>>()?;

    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Best-effort tokenization for diagnostic tooling: every token completed
/// before the failure, together with the failure itself.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_partial(source: &str, config: &LexerConfig) -> (Vec<Token>, Option<Error>) {
    let mut tokens = vec![];

    for item in Lexer::with_config(source, *config) {
        match item {
            Ok(token) => tokens.push(token),
            Err(error) => return (tokens, Some(error)),
        }
    }

    (tokens, None)
}

pub fn validate(source: &str) -> bool {
    tokenize(source).is_ok()
}
