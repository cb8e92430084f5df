//! SQL lexer: turns source text into a finite stream of located tokens.
//!
//! The lexer is dialect-aware only through the character-classification and
//! capability methods on [`Dialect`]; everything else (statement structure,
//! keyword reservation) is the parser's business. Whitespace and comments are
//! emitted as tokens so callers can retain them; the parser cursor skips them.

use core::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::dialects::Dialect;
use crate::errors::ParserError;
use crate::keywords::{ALL_KEYWORDS, ALL_KEYWORDS_INDEX, Keyword};

/// A token produced by the lexer, without its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An end-of-file marker, not a real token
    EOF,
    /// A keyword (like SELECT) or an optionally quoted identifier
    Word(Word),
    /// An unsigned numeric literal; the flag records a trailing `L` suffix
    Number(String, bool),
    /// 'string'
    SingleQuotedString(String),
    /// A postgres-style dollar-quoted string: `$tag$...$tag$` or `$$...$$`
    DollarQuotedString(DollarQuotedString),
    /// N'string'
    NationalStringLiteral(String),
    /// X'abcd'
    HexStringLiteral(String),
    /// Whitespace or a comment
    Whitespace(Whitespace),
    /// `?` or `?n` or `:name` or `$name` parameter markers
    Placeholder(String),
    Comma,
    SemiColon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Period,
    Colon,
    /// `::`
    DoubleColon,
    /// `:=`
    Assignment,
    Eq,
    /// `==`
    DoubleEq,
    /// `<>` or `!=`
    Neq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    /// `<=>` null-safe equality
    Spaceship,
    Plus,
    Minus,
    /// `*`, also the wildcard
    Mul,
    Div,
    Mod,
    /// `||`
    StringConcat,
    Ampersand,
    Pipe,
    Caret,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `=>` named-argument assignment
    RArrow,
    /// `#`
    Sharp,
    Tilde,
    /// `~*` case-insensitive regex match
    TildeAsterisk,
    /// `!~`
    ExclamationMarkTilde,
    /// `!~*`
    ExclamationMarkTildeAsterisk,
    ExclamationMark,
    /// `!!`
    DoubleExclamationMark,
    AtSign,
    /// `|/` square root
    PGSquareRoot,
    /// `||/` cube root
    PGCubeRoot,
    /// `->`
    Arrow,
    /// `->>`
    LongArrow,
    /// `#>`
    HashArrow,
    /// `#>>`
    HashLongArrow,
    /// `@>`
    AtArrow,
    /// `<@`
    ArrowAt,
    /// `#-`
    HashMinus,
    /// `@?`
    AtQuestion,
    /// `@@`
    AtAt,
    Backslash,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EOF => f.write_str("EOF"),
            Token::Word(w) => write!(f, "{w}"),
            Token::Number(n, l) => write!(f, "{}{}", n, if *l { "L" } else { "" }),
            Token::SingleQuotedString(s) => write!(f, "'{s}'"),
            Token::DollarQuotedString(s) => write!(f, "{s}"),
            Token::NationalStringLiteral(s) => write!(f, "N'{s}'"),
            Token::HexStringLiteral(s) => write!(f, "X'{s}'"),
            Token::Whitespace(w) => write!(f, "{w}"),
            Token::Placeholder(s) => write!(f, "{s}"),
            Token::Comma => f.write_str(","),
            Token::SemiColon => f.write_str(";"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::LBrace => f.write_str("{"),
            Token::RBrace => f.write_str("}"),
            Token::Period => f.write_str("."),
            Token::Colon => f.write_str(":"),
            Token::DoubleColon => f.write_str("::"),
            Token::Assignment => f.write_str(":="),
            Token::Eq => f.write_str("="),
            Token::DoubleEq => f.write_str("=="),
            Token::Neq => f.write_str("<>"),
            Token::Lt => f.write_str("<"),
            Token::Gt => f.write_str(">"),
            Token::LtEq => f.write_str("<="),
            Token::GtEq => f.write_str(">="),
            Token::Spaceship => f.write_str("<=>"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Mul => f.write_str("*"),
            Token::Div => f.write_str("/"),
            Token::Mod => f.write_str("%"),
            Token::StringConcat => f.write_str("||"),
            Token::Ampersand => f.write_str("&"),
            Token::Pipe => f.write_str("|"),
            Token::Caret => f.write_str("^"),
            Token::ShiftLeft => f.write_str("<<"),
            Token::ShiftRight => f.write_str(">>"),
            Token::RArrow => f.write_str("=>"),
            Token::Sharp => f.write_str("#"),
            Token::Tilde => f.write_str("~"),
            Token::TildeAsterisk => f.write_str("~*"),
            Token::ExclamationMarkTilde => f.write_str("!~"),
            Token::ExclamationMarkTildeAsterisk => f.write_str("!~*"),
            Token::ExclamationMark => f.write_str("!"),
            Token::DoubleExclamationMark => f.write_str("!!"),
            Token::AtSign => f.write_str("@"),
            Token::PGSquareRoot => f.write_str("|/"),
            Token::PGCubeRoot => f.write_str("||/"),
            Token::Arrow => f.write_str("->"),
            Token::LongArrow => f.write_str("->>"),
            Token::HashArrow => f.write_str("#>"),
            Token::HashLongArrow => f.write_str("#>>"),
            Token::AtArrow => f.write_str("@>"),
            Token::ArrowAt => f.write_str("<@"),
            Token::HashMinus => f.write_str("#-"),
            Token::AtQuestion => f.write_str("@?"),
            Token::AtAt => f.write_str("@@"),
            Token::Backslash => f.write_str("\\"),
        }
    }
}

impl Token {
    pub fn make_keyword(keyword: &str) -> Self {
        Token::make_word(keyword, None)
    }

    pub fn make_word(word: &str, quote_style: Option<char>) -> Self {
        let word_uppercase = word.to_uppercase();
        Token::Word(Word {
            value: word.to_string(),
            quote_style,
            keyword: if quote_style.is_none() {
                ALL_KEYWORDS
                    .binary_search(&word_uppercase.as_str())
                    .map_or(Keyword::NoKeyword, |x| ALL_KEYWORDS_INDEX[x])
            } else {
                Keyword::NoKeyword
            },
        })
    }
}

/// A keyword (like SELECT) or an optionally quoted identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The value of the token, without the enclosing quotes, and with the
    /// escape sequences (if any) processed
    pub value: String,
    /// An identifier can be "quoted" (&lt;delimited identifier&gt; in ANSI
    /// parlance). The standard and most dialects use double quotes; MySQL
    /// uses backticks, MSSQL square brackets.
    pub quote_style: Option<char>,
    /// If the word was not quoted and it matched a known keyword, this is the
    /// keyword; `Keyword::NoKeyword` otherwise
    pub keyword: Keyword,
}

impl Word {
    pub fn matching_end_quote(quote_start: char) -> char {
        match quote_start {
            '[' => ']',
            other => other,
        }
    }

    pub fn to_ident(&self) -> crate::ast::Ident {
        crate::ast::Ident {
            value: self.value.clone(),
            quote_style: self.quote_style,
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote_style {
            Some(s) if s == '"' || s == '[' || s == '`' => {
                write!(f, "{}{}{}", s, self.value, Word::matching_end_quote(s))
            }
            None => f.write_str(&self.value),
            _ => panic!("Unexpected quote_style!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Whitespace {
    Space,
    Newline,
    Tab,
    SingleLineComment { comment: String, prefix: String },
    MultiLineComment(String),
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Whitespace::Space => f.write_str(" "),
            Whitespace::Newline => f.write_str("\n"),
            Whitespace::Tab => f.write_str("\t"),
            Whitespace::SingleLineComment { prefix, comment } => write!(f, "{prefix}{comment}"),
            Whitespace::MultiLineComment(s) => write!(f, "/*{s}*/"),
        }
    }
}

/// The string body of a dollar-quoted literal, with its optional tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DollarQuotedString {
    pub value: String,
    pub tag: Option<String>,
}

impl fmt::Display for DollarQuotedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "${tag}${}${tag}$", self.value),
            None => write!(f, "$${}$$", self.value),
        }
    }
}

/// A 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: u64,
    pub col: u64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            return Ok(());
        }
        write!(f, ", Line: {}, Col: {}", self.line, self.col)
    }
}

/// A [`Token`] bundled with the location where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWithLocation {
    pub token: Token,
    pub location: Location,
}

impl TokenWithLocation {
    pub fn new(token: Token, line: u64, col: u64) -> Self {
        Self {
            token,
            location: Location { line, col },
        }
    }

    pub fn wrap(token: Token) -> Self {
        Self::new(token, 0, 0)
    }
}

impl PartialEq<Token> for TokenWithLocation {
    fn eq(&self, other: &Token) -> bool {
        &self.token == other
    }
}

impl fmt::Display for TokenWithLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.token, self.location)
    }
}

struct State<'a> {
    peekable: Peekable<Chars<'a>>,
    /// Character index into the source, for pre-tokenization errors.
    index: usize,
    line: u64,
    col: u64,
}

impl State<'_> {
    fn next(&mut self) -> Option<char> {
        let ch = self.peekable.next()?;
        self.index += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn peek(&mut self) -> Option<&char> {
        self.peekable.peek()
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            col: self.col,
        }
    }
}

/// The lexer proper. Borrows the dialect and the source for the duration of
/// one tokenize call.
pub struct Lexer<'a> {
    dialect: &'a dyn Dialect,
    query: &'a str,
    /// When true (the default), `''` inside a single-quoted string is
    /// collapsed to `'` and backslash escapes are processed where the dialect
    /// allows them. When false the literal body is preserved byte-for-byte.
    unescape: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(dialect: &'a dyn Dialect, query: &'a str) -> Self {
        Self {
            dialect,
            query,
            unescape: true,
        }
    }

    pub fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }

    pub fn tokenize(&self) -> Result<Vec<Token>, ParserError> {
        let tokens = self.tokenize_with_location()?;
        Ok(tokens.into_iter().map(|t| t.token).collect())
    }

    pub fn tokenize_with_location(&self) -> Result<Vec<TokenWithLocation>, ParserError> {
        let mut state = State {
            peekable: self.query.chars().peekable(),
            index: 0,
            line: 1,
            col: 1,
        };

        let mut tokens: Vec<TokenWithLocation> = vec![];
        let mut location = state.location();
        while let Some(token) = self.next_token(&mut state)? {
            tokens.push(TokenWithLocation { token, location });
            location = state.location();
        }
        Ok(tokens)
    }

    fn next_token(&self, chars: &mut State) -> Result<Option<Token>, ParserError> {
        match chars.peek() {
            None => Ok(None),
            Some(&ch) => match ch {
                ' ' => self.consume_and_return(chars, Token::Whitespace(Whitespace::Space)),
                '\t' => self.consume_and_return(chars, Token::Whitespace(Whitespace::Tab)),
                '\n' => self.consume_and_return(chars, Token::Whitespace(Whitespace::Newline)),
                '\r' => {
                    // Emit a single Newline token for \r and \r\n
                    chars.next();
                    if let Some('\n') = chars.peek() {
                        chars.next();
                    }
                    Ok(Some(Token::Whitespace(Whitespace::Newline)))
                }
                'N' => {
                    chars.next();
                    match chars.peek() {
                        Some('\'') => {
                            let s = self.tokenize_single_quoted_string(chars)?;
                            Ok(Some(Token::NationalStringLiteral(s)))
                        }
                        _ => {
                            let s = self.tokenize_word('N', chars);
                            Ok(Some(Token::make_word(&s, None)))
                        }
                    }
                }
                x @ ('x' | 'X') => {
                    chars.next();
                    match chars.peek() {
                        Some('\'') => {
                            // Hex strings never unescape
                            let s = self.tokenize_quoted_string_raw(chars)?;
                            Ok(Some(Token::HexStringLiteral(s)))
                        }
                        _ => {
                            let s = self.tokenize_word(x, chars);
                            Ok(Some(Token::make_word(&s, None)))
                        }
                    }
                }
                '\'' => {
                    let s = self.tokenize_single_quoted_string(chars)?;
                    Ok(Some(Token::SingleQuotedString(s)))
                }
                ch if self.dialect.is_delimited_identifier_start(ch) => {
                    chars.next();
                    let quote_end = Word::matching_end_quote(ch);
                    let mut s = String::new();
                    loop {
                        match chars.next() {
                            Some(c) if c == quote_end => {
                                // A doubled closing quote is an escape
                                if chars.peek() == Some(&quote_end) {
                                    chars.next();
                                    s.push(quote_end);
                                } else {
                                    break;
                                }
                            }
                            Some(c) => s.push(c),
                            None => {
                                return self.tokenizer_error(format!(
                                    "Expected close delimiter '{quote_end}' before EOF"
                                ));
                            }
                        }
                    }
                    Ok(Some(Token::Word(Word {
                        value: s,
                        quote_style: Some(ch),
                        keyword: Keyword::NoKeyword,
                    })))
                }
                ch if self.dialect.is_identifier_start(ch) => {
                    chars.next();
                    let s = self.tokenize_word(ch, chars);
                    Ok(Some(Token::make_word(&s, None)))
                }
                '$' => Ok(Some(self.tokenize_dollar(chars)?)),
                '0'..='9' | '.' => self.tokenize_number(chars),
                '(' => self.consume_and_return(chars, Token::LParen),
                ')' => self.consume_and_return(chars, Token::RParen),
                ',' => self.consume_and_return(chars, Token::Comma),
                ';' => self.consume_and_return(chars, Token::SemiColon),
                '[' => self.consume_and_return(chars, Token::LBracket),
                ']' => self.consume_and_return(chars, Token::RBracket),
                '{' => self.consume_and_return(chars, Token::LBrace),
                '}' => self.consume_and_return(chars, Token::RBrace),
                '+' => self.consume_and_return(chars, Token::Plus),
                '*' => self.consume_and_return(chars, Token::Mul),
                '%' => self.consume_and_return(chars, Token::Mod),
                '\\' => self.consume_and_return(chars, Token::Backslash),
                '&' => self.consume_and_return(chars, Token::Ampersand),
                '^' => self.consume_and_return(chars, Token::Caret),
                '-' => {
                    chars.next();
                    match chars.peek() {
                        Some('-') => {
                            chars.next();
                            let comment = self.tokenize_single_line_comment(chars);
                            Ok(Some(Token::Whitespace(Whitespace::SingleLineComment {
                                comment,
                                prefix: "--".to_owned(),
                            })))
                        }
                        Some('>') => {
                            chars.next();
                            match chars.peek() {
                                Some('>') => self.consume_and_return(chars, Token::LongArrow),
                                _ => Ok(Some(Token::Arrow)),
                            }
                        }
                        _ => Ok(Some(Token::Minus)),
                    }
                }
                '/' => {
                    chars.next();
                    match chars.peek() {
                        Some('*') => {
                            chars.next();
                            self.tokenize_multiline_comment(chars)
                        }
                        _ => Ok(Some(Token::Div)),
                    }
                }
                '|' => {
                    chars.next();
                    match chars.peek() {
                        Some('/') => self.consume_and_return(chars, Token::PGSquareRoot),
                        Some('|') => {
                            chars.next();
                            match chars.peek() {
                                Some('/') => self.consume_and_return(chars, Token::PGCubeRoot),
                                _ => Ok(Some(Token::StringConcat)),
                            }
                        }
                        _ => Ok(Some(Token::Pipe)),
                    }
                }
                '=' => {
                    chars.next();
                    match chars.peek() {
                        Some('>') => self.consume_and_return(chars, Token::RArrow),
                        Some('=') => self.consume_and_return(chars, Token::DoubleEq),
                        _ => Ok(Some(Token::Eq)),
                    }
                }
                '!' => {
                    chars.next();
                    match chars.peek() {
                        Some('=') => self.consume_and_return(chars, Token::Neq),
                        Some('!') => self.consume_and_return(chars, Token::DoubleExclamationMark),
                        Some('~') => {
                            chars.next();
                            match chars.peek() {
                                Some('*') => self.consume_and_return(
                                    chars,
                                    Token::ExclamationMarkTildeAsterisk,
                                ),
                                _ => Ok(Some(Token::ExclamationMarkTilde)),
                            }
                        }
                        _ => Ok(Some(Token::ExclamationMark)),
                    }
                }
                '<' => {
                    chars.next();
                    match chars.peek() {
                        Some('=') => {
                            chars.next();
                            match chars.peek() {
                                Some('>') => self.consume_and_return(chars, Token::Spaceship),
                                _ => Ok(Some(Token::LtEq)),
                            }
                        }
                        Some('>') => self.consume_and_return(chars, Token::Neq),
                        Some('<') => self.consume_and_return(chars, Token::ShiftLeft),
                        Some('@') => self.consume_and_return(chars, Token::ArrowAt),
                        _ => Ok(Some(Token::Lt)),
                    }
                }
                '>' => {
                    chars.next();
                    match chars.peek() {
                        Some('=') => self.consume_and_return(chars, Token::GtEq),
                        Some('>') => self.consume_and_return(chars, Token::ShiftRight),
                        _ => Ok(Some(Token::Gt)),
                    }
                }
                ':' => {
                    chars.next();
                    match chars.peek() {
                        Some(':') => self.consume_and_return(chars, Token::DoubleColon),
                        Some('=') => self.consume_and_return(chars, Token::Assignment),
                        Some(&c)
                            if self.dialect.supports_named_colon_placeholder()
                                && self.dialect.is_identifier_start(c) =>
                        {
                            chars.next();
                            let word = self.tokenize_word(c, chars);
                            Ok(Some(Token::Placeholder(format!(":{word}"))))
                        }
                        _ => Ok(Some(Token::Colon)),
                    }
                }
                '~' => {
                    chars.next();
                    match chars.peek() {
                        Some('*') => self.consume_and_return(chars, Token::TildeAsterisk),
                        _ => Ok(Some(Token::Tilde)),
                    }
                }
                '#' if self.dialect.supports_hash_line_comment() => {
                    chars.next();
                    let comment = self.tokenize_single_line_comment(chars);
                    Ok(Some(Token::Whitespace(Whitespace::SingleLineComment {
                        comment,
                        prefix: "#".to_owned(),
                    })))
                }
                '#' => {
                    chars.next();
                    match chars.peek() {
                        Some('-') => self.consume_and_return(chars, Token::HashMinus),
                        Some('>') => {
                            chars.next();
                            match chars.peek() {
                                Some('>') => self.consume_and_return(chars, Token::HashLongArrow),
                                _ => Ok(Some(Token::HashArrow)),
                            }
                        }
                        _ => Ok(Some(Token::Sharp)),
                    }
                }
                '@' => {
                    chars.next();
                    match chars.peek() {
                        Some('>') => self.consume_and_return(chars, Token::AtArrow),
                        Some('?') => self.consume_and_return(chars, Token::AtQuestion),
                        Some('@') => self.consume_and_return(chars, Token::AtAt),
                        _ => Ok(Some(Token::AtSign)),
                    }
                }
                '?' => {
                    chars.next();
                    let mut s = String::from("?");
                    while let Some(&c) = chars.peek() {
                        if !c.is_ascii_digit() {
                            break;
                        }
                        s.push(c);
                        chars.next();
                    }
                    Ok(Some(Token::Placeholder(s)))
                }
                _ => self.tokenizer_error(format!(
                    "Parser unable to read character at index {}",
                    chars.index
                )),
            },
        }
    }

    fn consume_and_return(
        &self,
        chars: &mut State,
        t: Token,
    ) -> Result<Option<Token>, ParserError> {
        chars.next();
        Ok(Some(t))
    }

    fn tokenizer_error<T>(&self, message: impl Into<String>) -> Result<T, ParserError> {
        Err(ParserError::TokenizerError(message.into()))
    }

    /// Read the rest of a word, given its already-consumed first character.
    fn tokenize_word(&self, first_char: char, chars: &mut State) -> String {
        let mut s = String::new();
        s.push(first_char);
        while let Some(&ch) = chars.peek() {
            if !self.dialect.is_identifier_part(ch) {
                break;
            }
            s.push(ch);
            chars.next();
        }
        s
    }

    fn tokenize_single_quoted_string(&self, chars: &mut State) -> Result<String, ParserError> {
        let mut s = String::new();
        chars.next(); // the opening quote

        while let Some(&ch) = chars.peek() {
            match ch {
                '\'' => {
                    chars.next();
                    if chars.peek() == Some(&'\'') {
                        // An escaped quote
                        chars.next();
                        if self.unescape {
                            s.push('\'');
                        } else {
                            s.push_str("''");
                        }
                    } else {
                        return Ok(s);
                    }
                }
                '\\' if self.dialect.supports_string_literal_backslash_escape() => {
                    chars.next();
                    if let Some(next) = chars.next() {
                        if self.unescape {
                            s.push(match next {
                                '0' => '\0',
                                'n' => '\n',
                                'r' => '\r',
                                't' => '\t',
                                other => other,
                            });
                        } else {
                            s.push('\\');
                            s.push(next);
                        }
                    }
                }
                _ => {
                    chars.next();
                    s.push(ch);
                }
            }
        }
        self.tokenizer_error("Unterminated string literal")
    }

    /// Like [`Self::tokenize_single_quoted_string`] but never processes
    /// escapes beyond quote doubling (hex literals have none).
    fn tokenize_quoted_string_raw(&self, chars: &mut State) -> Result<String, ParserError> {
        let mut s = String::new();
        chars.next(); // the opening quote
        while let Some(ch) = chars.next() {
            if ch == '\'' {
                return Ok(s);
            }
            s.push(ch);
        }
        self.tokenizer_error("Unterminated string literal")
    }

    fn tokenize_single_line_comment(&self, chars: &mut State) -> String {
        let mut comment = String::new();
        while let Some(&ch) = chars.peek() {
            chars.next();
            comment.push(ch);
            if ch == '\n' {
                break;
            }
        }
        comment
    }

    fn tokenize_multiline_comment(&self, chars: &mut State) -> Result<Option<Token>, ParserError> {
        let mut s = String::new();
        let mut nested = 1;
        let mut last_ch = ' ';

        loop {
            match chars.next() {
                Some(ch) => {
                    if last_ch == '/' && ch == '*' {
                        nested += 1;
                    } else if last_ch == '*' && ch == '/' {
                        nested -= 1;
                        if nested == 0 {
                            s.pop();
                            break Ok(Some(Token::Whitespace(Whitespace::MultiLineComment(s))));
                        }
                    }
                    s.push(ch);
                    last_ch = ch;
                }
                None => {
                    break self.tokenizer_error("Unexpected EOF while in a multi-line comment");
                }
            }
        }
    }

    /// `$` introduces a dollar-quoted string in dialects that have them, or a
    /// `$name` / `$1` placeholder otherwise.
    fn tokenize_dollar(&self, chars: &mut State) -> Result<Token, ParserError> {
        chars.next(); // the `$`

        if chars.peek() == Some(&'$') && self.dialect.supports_dollar_quoted_strings() {
            chars.next();
            let mut s = String::new();
            loop {
                match chars.next() {
                    Some('$') if chars.peek() == Some(&'$') => {
                        chars.next();
                        return Ok(Token::DollarQuotedString(DollarQuotedString {
                            value: s,
                            tag: None,
                        }));
                    }
                    Some(ch) => s.push(ch),
                    None => {
                        return self.tokenizer_error("Unterminated dollar-quoted string");
                    }
                }
            }
        }

        let mut word = String::new();
        while let Some(&ch) = chars.peek() {
            if !self.dialect.is_identifier_part(ch) && !ch.is_ascii_digit() {
                break;
            }
            word.push(ch);
            chars.next();
        }

        if chars.peek() == Some(&'$')
            && self.dialect.supports_dollar_quoted_strings()
            && !word.is_empty()
        {
            chars.next();
            let mut s = String::new();
            loop {
                match chars.next() {
                    Some('$') => {
                        // Try to match the closing `$tag$` with a lookahead
                        let mut probe = chars.peekable.clone();
                        let mut matched = true;
                        for tag_ch in word.chars() {
                            if probe.next() != Some(tag_ch) {
                                matched = false;
                                break;
                            }
                        }
                        if matched && probe.next() == Some('$') {
                            for _ in 0..word.chars().count() + 1 {
                                chars.next();
                            }
                            return Ok(Token::DollarQuotedString(DollarQuotedString {
                                value: s,
                                tag: Some(word),
                            }));
                        }
                        s.push('$');
                    }
                    Some(ch) => s.push(ch),
                    None => {
                        return self.tokenizer_error("Unterminated dollar-quoted string");
                    }
                }
            }
        }

        Ok(Token::Placeholder(format!("${word}")))
    }

    fn tokenize_number(&self, chars: &mut State) -> Result<Option<Token>, ParserError> {
        let mut s = peeking_take_while(chars, |ch| ch.is_ascii_digit());

        // Dialects that allow digit-led identifiers claim the rest of the
        // word here, before any exponent handling.
        if self.dialect.supports_numeric_prefix() && !s.is_empty() {
            if let Some(&ch) = chars.peek() {
                if self.dialect.is_identifier_start(ch) {
                    chars.next();
                    let rest = self.tokenize_word(ch, chars);
                    s.push_str(&rest);
                    return Ok(Some(Token::make_word(&s, None)));
                }
            }
        }

        if chars.peek() == Some(&'.') {
            s.push('.');
            chars.next();
            s.push_str(&peeking_take_while(chars, |ch| ch.is_ascii_digit()));
        }

        // A lone `.` is the period punctuator, not a number
        if s == "." {
            return Ok(Some(Token::Period));
        }

        // An exponent is only consumed when digits actually follow; otherwise
        // the `e` starts a separate word.
        if matches!(chars.peek(), Some('e' | 'E')) {
            let mut probe = chars.peekable.clone();
            let mut exponent = String::new();
            exponent.push(probe.next().unwrap_or('e'));
            if matches!(probe.peek(), Some('+' | '-')) {
                exponent.push(probe.next().unwrap_or('+'));
            }
            if matches!(probe.peek(), Some(c) if c.is_ascii_digit()) {
                while matches!(probe.peek(), Some(c) if c.is_ascii_digit()) {
                    exponent.push(probe.next().unwrap_or('0'));
                }
                for _ in 0..exponent.chars().count() {
                    chars.next();
                }
                s.push_str(&exponent);
            }
        }

        let long = if chars.peek() == Some(&'L') {
            chars.next();
            true
        } else {
            false
        };
        Ok(Some(Token::Number(s, long)))
    }
}

fn peeking_take_while(chars: &mut State, mut predicate: impl FnMut(char) -> bool) -> String {
    let mut s = String::new();
    while let Some(&ch) = chars.peek() {
        if !predicate(ch) {
            break;
        }
        chars.next();
        s.push(ch);
    }
    s
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct TestDialect;

    impl Dialect for TestDialect {
        fn is_identifier_start(&self, ch: char) -> bool {
            ch.is_ascii_alphabetic() || ch == '_'
        }

        fn is_identifier_part(&self, ch: char) -> bool {
            ch.is_ascii_alphanumeric() || ch == '_'
        }

        fn supports_dollar_quoted_strings(&self) -> bool {
            true
        }
    }

    fn tokenize(sql: &str) -> Vec<Token> {
        Lexer::new(&TestDialect, sql).tokenize().unwrap()
    }

    #[test]
    fn tokenize_select_one() {
        assert_eq!(
            tokenize("SELECT 1"),
            vec![
                Token::make_keyword("SELECT"),
                Token::Whitespace(Whitespace::Space),
                Token::Number("1".to_owned(), false),
            ]
        );
    }

    #[test]
    fn tokenize_numbers() {
        assert_eq!(tokenize("12"), vec![Token::Number("12".into(), false)]);
        assert_eq!(tokenize("12L"), vec![Token::Number("12".into(), true)]);
        assert_eq!(tokenize(".5"), vec![Token::Number(".5".into(), false)]);
        assert_eq!(
            tokenize("1.5e10"),
            vec![Token::Number("1.5e10".into(), false)]
        );
        assert_eq!(
            tokenize("1e-2"),
            vec![Token::Number("1e-2".into(), false)]
        );
        // `e` not followed by digits starts a new word
        assert_eq!(
            tokenize("4e_x"),
            vec![
                Token::Number("4".into(), false),
                Token::make_word("e_x", None)
            ]
        );
    }

    #[test]
    fn tokenize_string_escapes() {
        assert_eq!(
            tokenize("'a''b'"),
            vec![Token::SingleQuotedString("a'b".into())]
        );
        let raw = Lexer::new(&TestDialect, "'a''b'")
            .with_unescape(false)
            .tokenize()
            .unwrap();
        assert_eq!(raw, vec![Token::SingleQuotedString("a''b".into())]);
    }

    #[test]
    fn tokenize_national_and_hex_strings() {
        assert_eq!(
            tokenize("N'foo' X'ab01'"),
            vec![
                Token::NationalStringLiteral("foo".into()),
                Token::Whitespace(Whitespace::Space),
                Token::HexStringLiteral("ab01".into()),
            ]
        );
    }

    #[test]
    fn tokenize_dollar_quoted_strings() {
        assert_eq!(
            tokenize("$$body$$"),
            vec![Token::DollarQuotedString(DollarQuotedString {
                value: "body".into(),
                tag: None
            })]
        );
        assert_eq!(
            tokenize("$fn$can contain $ signs$fn$"),
            vec![Token::DollarQuotedString(DollarQuotedString {
                value: "can contain $ signs".into(),
                tag: Some("fn".into())
            })]
        );
        assert_eq!(
            tokenize("$1"),
            vec![Token::Placeholder("$1".into())]
        );
    }

    #[test]
    fn tokenize_comments() {
        assert_eq!(
            tokenize("1-- comment\n2"),
            vec![
                Token::Number("1".into(), false),
                Token::Whitespace(Whitespace::SingleLineComment {
                    comment: " comment\n".into(),
                    prefix: "--".into()
                }),
                Token::Number("2".into(), false),
            ]
        );
        assert_eq!(
            tokenize("0/*multi\nline*/1"),
            vec![
                Token::Number("0".into(), false),
                Token::Whitespace(Whitespace::MultiLineComment("multi\nline".into())),
                Token::Number("1".into(), false),
            ]
        );
        // Nested block comments close at the matching depth
        assert_eq!(
            tokenize("/* outer /* inner */ still outer */"),
            vec![Token::Whitespace(Whitespace::MultiLineComment(
                " outer /* inner */ still outer ".into()
            ))]
        );
    }

    #[test]
    fn tokenize_longest_match_operators() {
        assert_eq!(
            tokenize("a->>b"),
            vec![
                Token::make_word("a", None),
                Token::LongArrow,
                Token::make_word("b", None),
            ]
        );
        assert_eq!(
            tokenize("a#>>b"),
            vec![
                Token::make_word("a", None),
                Token::HashLongArrow,
                Token::make_word("b", None),
            ]
        );
        assert_eq!(tokenize("<=>"), vec![Token::Spaceship]);
        assert_eq!(tokenize("||/"), vec![Token::PGCubeRoot]);
    }

    #[test]
    fn tokenize_unreadable_character() {
        let err = Lexer::new(&TestDialect, "select ยง").tokenize().unwrap_err();
        assert_eq!(
            err,
            ParserError::TokenizerError(
                "Parser unable to read character at index 7".to_owned()
            )
        );
    }

    #[test]
    fn token_locations_are_monotonic() {
        let tokens = Lexer::new(&TestDialect, "SELECT a,\n  b FROM t")
            .tokenize_with_location()
            .unwrap();
        let locations: Vec<_> = tokens.iter().map(|t| t.location).collect();
        let mut sorted = locations.clone();
        sorted.sort();
        assert_eq!(locations, sorted);
        assert_eq!(tokens[0].location, Location { line: 1, col: 1 });
    }

    #[test]
    fn tokenize_delimited_identifier_with_escape() {
        assert_eq!(
            tokenize(r#""fine ""quoted"" name""#),
            vec![Token::Word(Word {
                value: r#"fine "quoted" name"#.into(),
                quote_style: Some('"'),
                keyword: Keyword::NoKeyword,
            })]
        );
    }
}
