use crate::{
    error::ParseError,
    interpreter::lexer::{lines::LogicalLineReader, scanner::CharScanner},
};

/// The bare words which may open a block when they start a line.
pub const BLOCK_KEYWORDS: [&str; 7] = ["if", "else", "while", "for", "try", "def", "catch"];

/// Represents one token of a logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An unquoted word that contained no escape expansions. Only bare
    /// tokens can act as keywords or braces.
    Bare(String),
    /// A quoted string, or an unquoted word that expanded at least one
    /// escape.
    Quoted(String),
    /// A nested command expression, `( … )`. Never empty.
    Nested(Vec<Token>),
}

impl Token {
    /// Returns the token's text. Nested commands have no text of their own.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Bare(text) | Self::Quoted(text) => text,
            Self::Nested(_) => "",
        }
    }

    /// Returns `true` if the token is the bare word `word`.
    #[must_use]
    pub fn is_bare(&self, word: &str) -> bool {
        matches!(self, Self::Bare(text) if text == word)
    }
}

/// A fully tokenized logical line, with block punctuation factored out.
///
/// If `opens_block` is set, the line began with a bare block keyword and its
/// trailing `{` token has been stripped. If `closes_block` is set, its
/// leading `}` token has been stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalLine {
    /// The remaining tokens, braces excluded.
    pub tokens:       Vec<Token>,
    /// The line ends a block opened earlier.
    pub closes_block: bool,
    /// The line opens a new block.
    pub opens_block:  bool,
    /// The first physical line number of the logical line.
    pub number:       usize,
}

impl LexicalLine {
    /// Returns `true` if the line has no tokens and neither opens nor closes
    /// a block.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty() && !self.closes_block && !self.opens_block
    }
}

/// Tokenizes a whole script.
///
/// Produces one `LexicalLine` per non-blank logical line, along with a
/// parallel list of context strings (`"line N"`, where `N` is the first
/// physical line of the logical line) for error reporting.
///
/// # Errors
/// Returns the first lexical error encountered; there is no recovery.
pub fn tokenize(source: &str) -> Result<(Vec<LexicalLine>, Vec<String>), ParseError> {
    let mut lines = Vec::new();
    let mut contexts = Vec::new();

    for logical in LogicalLineReader::new(source) {
        let logical = logical?;
        if logical.text.is_empty() {
            continue;
        }

        let tokens = scan_line(&logical.text, logical.number)?;
        lines.push(classify(tokens, logical.number)?);
        contexts.push(format!("line {}", logical.number));
    }

    Ok((lines, contexts))
}

/// Tokenizes one logical line.
///
/// Top-level tokens must be separated by at least one whitespace character;
/// inside a nested command whitespace is optional.
///
/// # Errors
/// Any of the lexical errors: unterminated strings or commands, a stray
/// `)`, missing whitespace, empty parentheses, or a bad escape.
pub fn scan_line(text: &str, number: usize) -> Result<Vec<Token>, ParseError> {
    let mut scanner = CharScanner::new(text, number);
    let mut tokens = Vec::new();

    scanner.skip_whitespace();
    while let Some(next) = scanner.peek() {
        if next == ')' {
            return Err(ParseError::UnexpectedCloseParen { line: scanner.line() });
        }
        tokens.push(read_token(&mut scanner)?);

        match scanner.peek() {
            None => break,
            Some(next) if next.is_whitespace() => scanner.skip_whitespace(),
            Some(_) => return Err(ParseError::MissingWhitespace { line: scanner.line() }),
        }
    }

    Ok(tokens)
}

/// Reads one token, dispatching on its leading character.
fn read_token(scanner: &mut CharScanner<'_>) -> Result<Token, ParseError> {
    match scanner.peek() {
        Some(quote @ ('"' | '\'')) => {
            scanner.advance();
            Ok(Token::Quoted(scanner.read_quoted(quote)?))
        },
        Some('(') => {
            scanner.advance();
            Ok(Token::Nested(read_nested(scanner)?))
        },
        Some('$') => {
            // $name is sugar for (get name).
            scanner.advance();
            let (name, escaped) = scanner.read_bare()?;
            let name = if escaped { Token::Quoted(name) } else { Token::Bare(name) };
            Ok(Token::Nested(vec![Token::Bare("get".to_string()), name]))
        },
        _ => {
            let (word, escaped) = scanner.read_bare()?;
            Ok(if escaped { Token::Quoted(word) } else { Token::Bare(word) })
        },
    }
}

/// Reads the tokens of a nested command; the opening `(` has already been
/// consumed.
fn read_nested(scanner: &mut CharScanner<'_>) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    loop {
        scanner.skip_whitespace();
        match scanner.peek() {
            None => return Err(ParseError::MissingCloseParen { line: scanner.line() }),
            Some(')') => {
                scanner.advance();
                break;
            },
            Some(_) => tokens.push(read_token(scanner)?),
        }
    }

    if tokens.is_empty() {
        return Err(ParseError::EmptyParens { line: scanner.line() });
    }
    Ok(tokens)
}

/// Detects block punctuation on a tokenized line.
///
/// A leading bare `}` is stripped and marks the line as closing a block.
/// After that, a leading bare block keyword requires the last token to be a
/// bare `{`, which is stripped and marks the line as opening a block.
fn classify(mut tokens: Vec<Token>, number: usize) -> Result<LexicalLine, ParseError> {
    let mut closes_block = false;
    if tokens.first().is_some_and(|token| token.is_bare("}")) {
        tokens.remove(0);
        closes_block = true;
    }

    let mut opens_block = false;
    let is_keyword = tokens.first()
                           .is_some_and(|token| {
                               matches!(token, Token::Bare(word)
                                        if BLOCK_KEYWORDS.contains(&word.as_str()))
                           });
    if is_keyword {
        if !tokens.last().is_some_and(|token| token.is_bare("{")) {
            return Err(ParseError::MissingOpenCurlyBrace { line: number });
        }
        tokens.pop();
        opens_block = true;
    }

    Ok(LexicalLine { tokens, closes_block, opens_block, number })
}
