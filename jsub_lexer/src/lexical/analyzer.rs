//! Core lexical analyzer
//!
//! Hand-rolled single pass over the source. Each loop iteration records the
//! start position, dispatches on the current character, and consumes at least
//! one character. Lexical errors never abort the pass: each one becomes an
//! `Error` token in the output and scanning continues.

use super::classifier::{is_digit, is_identifier_part, is_identifier_start, is_whitespace};
use super::cursor::Cursor;
use crate::config::runtime::LexicalPreferences;
use crate::file_processor::SourceFile;
use crate::grammar::keywords::LexicalSets;
use crate::logging::codes;
use crate::symbols::SymbolTable;
use crate::tokens::{LexOutput, Token, TokenType};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success};
use std::collections::BTreeMap;

/// Lexical errors, reified as `Error` tokens by the analyzer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character: '{character}' at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("Unterminated block comment at line {line}, column {column}")]
    UnterminatedBlockComment { line: u32, column: u32 },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::UnterminatedBlockComment { .. } => {
                codes::lexical::UNTERMINATED_BLOCK_COMMENT
            }
        }
    }

    /// Lexeme carried by the `Error` token for this error
    pub fn lexeme(&self) -> String {
        match self {
            LexerError::InvalidCharacter { character, .. } => character.to_string(),
            LexerError::UnterminatedString { .. } => "Unterminated string".to_string(),
            LexerError::UnterminatedBlockComment { .. } => {
                "Unterminated block comment".to_string()
            }
        }
    }
}

/// Counters collected over one lexing session
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub number_tokens: usize,
    pub string_tokens: usize,
    pub operator_tokens: usize,
    pub delimiter_tokens: usize,
    pub invalid_chars: usize,
    pub unterminated_literals: usize,
    /// Closed comments, whether or not they were retained as tokens
    pub comment_count: usize,
    pub max_string_length: usize,

    // Runtime preference-controlled metrics
    pub operator_usage_patterns: BTreeMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        match token.kind {
            TokenType::Keyword => self.keyword_tokens += 1,
            TokenType::Identifier => self.identifier_tokens += 1,
            TokenType::Number => self.number_tokens += 1,
            TokenType::String => self.string_tokens += 1,
            TokenType::Delimiter => self.delimiter_tokens += 1,
            TokenType::Operator => {
                self.operator_tokens += 1;

                if preferences.track_operator_patterns {
                    *self
                        .operator_usage_patterns
                        .entry(token.lexeme.clone())
                        .or_insert(0) += 1;
                }
            }
            TokenType::Comment | TokenType::Eof | TokenType::Error => {}
        }
    }

    pub(crate) fn record_string_length(&mut self, length: usize, preferences: &LexicalPreferences) {
        self.max_string_length = self.max_string_length.max(length);

        if preferences.log_string_statistics {
            log_debug!("String literal processed",
                "length" => length,
                "max_so_far" => self.max_string_length
            );
        }
    }

    pub(crate) fn record_error(&mut self, error: &LexerError) {
        match error {
            LexerError::InvalidCharacter { .. } => self.invalid_chars += 1,
            LexerError::UnterminatedString { .. } | LexerError::UnterminatedBlockComment { .. } => {
                self.unterminated_literals += 1
            }
        }
    }

    pub fn error_count(&self) -> usize {
        self.invalid_chars + self.unterminated_literals
    }
}

/// Reusable lexer front end holding the recognition sets and preferences.
///
/// Each call to [`tokenize`](Self::tokenize) runs an independent session with
/// its own cursor and symbol table; the metrics of the last session are kept.
pub struct LexicalAnalyzer {
    sets: LexicalSets,
    preferences: LexicalPreferences,
    metrics: LexicalMetrics,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            sets: LexicalSets::java_subset(),
            preferences,
            metrics: LexicalMetrics::default(),
        }
    }

    /// Scan `source` into tokens and an identifier table
    pub fn tokenize(&mut self, source: &str) -> LexOutput {
        self.run(source, None)
    }

    /// Scan a file read by the file processor, tagging log events with its path
    pub fn tokenize_file(&mut self, file: &SourceFile) -> LexOutput {
        let path = file.path.display().to_string();
        self.run(&file.contents, Some(path.as_str()))
    }

    fn run(&mut self, source: &str, file: Option<&str>) -> LexOutput {
        let file = file.unwrap_or("<memory>");

        log_debug!("Starting lexical analysis",
            "file" => file,
            "char_count" => source.chars().count(),
            "byte_count" => source.len(),
            "retain_comments" => self.preferences.retain_comments
        );

        let scanner = Scanner::new(source, &self.sets, &self.preferences, file);
        let (output, metrics) = scanner.scan();
        self.metrics = metrics;

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed",
            "file" => file,
            "token_count" => output.tokens().len(),
            "keywords" => self.metrics.keyword_tokens,
            "identifiers" => self.metrics.identifier_tokens,
            "distinct_identifiers" => output.symbols().len(),
            "operators" => self.metrics.operator_tokens,
            "comments" => self.metrics.comment_count,
            "errors" => self.metrics.error_count()
        );

        output
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one pass over one buffer. Consumed by `scan`.
struct Scanner<'a, 'src> {
    cursor: Cursor<'src>,
    sets: &'a LexicalSets,
    preferences: &'a LexicalPreferences,
    file: &'a str,
    tokens: Vec<Token>,
    symbols: SymbolTable,
    metrics: LexicalMetrics,
}

impl<'a, 'src> Scanner<'a, 'src> {
    fn new(
        source: &'src str,
        sets: &'a LexicalSets,
        preferences: &'a LexicalPreferences,
        file: &'a str,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            sets,
            preferences,
            file,
            tokens: Vec::new(),
            symbols: SymbolTable::new(),
            metrics: LexicalMetrics::default(),
        }
    }

    fn scan(mut self) -> (LexOutput, LexicalMetrics) {
        while let Some(ch) = self.cursor.peek() {
            let start = self.cursor.position();
            self.scan_token(ch, start);
        }

        let eof = Token::new(TokenType::Eof, "", self.cursor.position());
        self.tokens.push(eof);

        (LexOutput::new(self.tokens, self.symbols), self.metrics)
    }

    /// Dispatch order matters: `/` must be tested for a comment opener before
    /// it is tried as an operator.
    fn scan_token(&mut self, ch: char, start: Position) {
        let next = self.cursor.peek_ahead();

        if is_whitespace(ch) {
            self.cursor.advance();
        } else if ch == '/' && next == Some('/') {
            self.scan_line_comment(start);
        } else if ch == '/' && next == Some('*') {
            self.scan_block_comment(start);
        } else if ch == '"' {
            self.scan_string(start);
        } else if self.sets.is_delimiter(ch) {
            self.cursor.advance();
            self.push(TokenType::Delimiter, ch.to_string(), start);
        } else if let Some(op) = self.sets.two_char_operator(ch, next) {
            self.cursor.advance();
            self.cursor.advance();
            self.push(TokenType::Operator, op, start);
        } else if self.sets.is_one_char_operator(ch) {
            self.cursor.advance();
            self.push(TokenType::Operator, ch.to_string(), start);
        } else if is_digit(ch) {
            self.scan_number(start);
        } else if is_identifier_start(ch) {
            self.scan_identifier(start);
        } else {
            self.cursor.advance();
            let error = LexerError::InvalidCharacter {
                character: ch,
                line: start.line,
                column: start.column,
            };
            self.report(error, start);
        }
    }

    fn scan_line_comment(&mut self, start: Position) {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.advance_while(|c| c != '\n');
        self.finish_comment(start);
    }

    fn scan_block_comment(&mut self, start: Position) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.at_end() {
            if self.cursor.peek() == Some('*') && self.cursor.peek_ahead() == Some('/') {
                self.cursor.advance();
                self.cursor.advance();
                self.finish_comment(start);
                return;
            }
            self.cursor.advance();
        }

        // Reported where scanning stopped, not at the opening marker
        let end = self.cursor.position();
        let error = LexerError::UnterminatedBlockComment {
            line: end.line,
            column: end.column,
        };
        self.report(error, end);
    }

    fn finish_comment(&mut self, start: Position) {
        self.metrics.comment_count += 1;
        if self.preferences.retain_comments {
            let text = self.cursor.slice_from(start);
            self.push(TokenType::Comment, text, start);
        }
    }

    fn scan_string(&mut self, start: Position) {
        self.cursor.advance();
        let body_start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"');

        if self.cursor.at_end() {
            let error = LexerError::UnterminatedString {
                line: start.line,
                column: start.column,
            };
            self.report(error, start);
            return;
        }

        let body = self.cursor.slice_from(body_start);
        self.cursor.advance();

        self.metrics
            .record_string_length(body.chars().count(), self.preferences);
        self.push(TokenType::String, body, start);
    }

    fn scan_number(&mut self, start: Position) {
        self.cursor.advance_while(is_digit);

        if self.cursor.peek() == Some('.') && self.cursor.peek_ahead().is_some_and(is_digit) {
            self.cursor.advance();
            self.cursor.advance_while(is_digit);
        }

        let text = self.cursor.slice_from(start);
        self.push(TokenType::Number, text, start);
    }

    fn scan_identifier(&mut self, start: Position) {
        self.cursor.advance_while(is_identifier_part);
        let word = self.cursor.slice_from(start);

        if self.sets.is_keyword(word) {
            self.push(TokenType::Keyword, word, start);
        } else {
            self.symbols.record(word);
            self.push(TokenType::Identifier, word, start);
        }
    }

    fn push(&mut self, kind: TokenType, lexeme: impl Into<String>, start: Position) {
        let token = Token::new(kind, lexeme, start);
        self.metrics.record_token(&token, self.preferences);
        self.tokens.push(token);
    }

    fn report(&mut self, error: LexerError, at: Position) {
        log_error!(error.error_code(), &error.to_string(),
            span = Span::new(at, self.cursor.position()),
            "file" => self.file,
            "lexeme" => error.lexeme(),
            "tokens_processed" => self.tokens.len()
        );

        self.metrics.record_error(&error);
        self.tokens
            .push(Token::new(TokenType::Error, error.lexeme(), at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::env_vars;
    use crate::grammar::keywords::TWO_CHAR_OPERATORS;
    use crate::logging::{with_scoped_logger, LogLevel, LoggingService, MemoryLogger};
    use assert_matches::assert_matches;
    use std::sync::Arc;

    fn lex(source: &str) -> LexOutput {
        LexicalAnalyzer::new().tokenize(source)
    }

    fn kinds_and_lexemes(output: &LexOutput) -> Vec<(TokenType, &str)> {
        output
            .tokens()
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect()
    }

    #[test]
    fn test_eof_is_always_last() {
        for source in ["", "   ", "class", "\"open", "/* open", "#", "a\n"] {
            let output = lex(source);
            let tokens = output.tokens();
            assert!(tokens.last().unwrap().is_eof(), "input {:?}", source);
            assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
            assert_eq!(tokens.last().unwrap().lexeme, "");
        }
    }

    #[test]
    fn test_eof_at_final_position() {
        let output = lex("int x;\n");
        let eof = output.tokens().last().unwrap();
        assert_eq!((eof.line, eof.column), (2, 1));
    }

    #[test]
    fn test_maximal_munch() {
        let output = lex("<=");
        assert_eq!(
            kinds_and_lexemes(&output),
            vec![(TokenType::Operator, "<="), (TokenType::Eof, "")]
        );

        let output = lex("a+++b");
        let ops: Vec<&str> = output
            .of_kind(TokenType::Operator)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(ops, vec!["++", "+"]);
    }

    #[test]
    fn test_every_two_char_operator_is_one_token() {
        for op in TWO_CHAR_OPERATORS {
            let source = format!("a{}b", op);
            assert_eq!(
                kinds_and_lexemes(&lex(&source)),
                vec![
                    (TokenType::Identifier, "a"),
                    (TokenType::Operator, op),
                    (TokenType::Identifier, "b"),
                    (TokenType::Eof, "")
                ],
                "source {:?}",
                source
            );
        }
    }

    #[test]
    fn test_lone_pipe_and_ampersand_are_errors() {
        for (source, bad) in [("a|b", "|"), ("a&b", "&"), ("a | | b", "|")] {
            let output = lex(source);
            assert!(output.errors().all(|t| t.lexeme == bad), "source {:?}", source);
            assert_eq!(output.of_kind(TokenType::Operator).count(), 0);
            assert_eq!(output.symbols().len(), 2);
        }
    }

    #[test]
    fn test_slash_rules() {
        assert_eq!(
            kinds_and_lexemes(&lex("a /= b")),
            vec![
                (TokenType::Identifier, "a"),
                (TokenType::Operator, "/="),
                (TokenType::Identifier, "b"),
                (TokenType::Eof, "")
            ]
        );
        // comment openers win over "/" and "/="
        assert_eq!(
            kinds_and_lexemes(&lex("a /*=x*/ b //= c")),
            vec![
                (TokenType::Identifier, "a"),
                (TokenType::Identifier, "b"),
                (TokenType::Eof, "")
            ]
        );
        assert_eq!(
            kinds_and_lexemes(&lex("a / *b")),
            vec![
                (TokenType::Identifier, "a"),
                (TokenType::Operator, "/"),
                (TokenType::Operator, "*"),
                (TokenType::Identifier, "b"),
                (TokenType::Eof, "")
            ]
        );
    }

    #[test]
    fn test_number_boundary() {
        assert_eq!(
            kinds_and_lexemes(&lex("100.")),
            vec![
                (TokenType::Number, "100"),
                (TokenType::Delimiter, "."),
                (TokenType::Eof, "")
            ]
        );
        assert_eq!(
            kinds_and_lexemes(&lex("100.0")),
            vec![(TokenType::Number, "100.0"), (TokenType::Eof, "")]
        );
        assert_eq!(
            kinds_and_lexemes(&lex("1.2.3")),
            vec![
                (TokenType::Number, "1.2"),
                (TokenType::Delimiter, "."),
                (TokenType::Number, "3"),
                (TokenType::Eof, "")
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let output = lex("\"abc");
        let tokens = output.tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenType::Error);
        assert_eq!(tokens[0].lexeme, "Unterminated string");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_string_excludes_quotes_and_tracks_lines() {
        let output = lex("x = \"two\nlines\"; y");
        let tokens = output.tokens();
        assert_eq!(tokens[2].kind, TokenType::String);
        assert_eq!(tokens[2].lexeme, "two\nlines");
        assert_eq!((tokens[2].line, tokens[2].column), (1, 5));
        assert_eq!(tokens[3].lexeme, ";");
        assert_eq!((tokens[3].line, tokens[3].column), (2, 7));
        assert_eq!((tokens[4].line, tokens[4].column), (2, 9));
    }

    #[test]
    fn test_identifier_charset() {
        for source in ["_x1", "$y", "変数", "café"] {
            let output = lex(source);
            assert_eq!(
                kinds_and_lexemes(&output),
                vec![(TokenType::Identifier, source), (TokenType::Eof, "")]
            );
        }
    }

    #[test]
    fn test_symbol_table_accumulation() {
        let output = lex("a a a");
        let symbols = output.symbols();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols.get("a"), Some(3));
    }

    #[test]
    fn test_keyword_vs_identifier() {
        let output = lex("class Foo");
        assert_eq!(
            kinds_and_lexemes(&output),
            vec![
                (TokenType::Keyword, "class"),
                (TokenType::Identifier, "Foo"),
                (TokenType::Eof, "")
            ]
        );
        assert!(output.symbols().contains("Foo"));
        assert!(!output.symbols().contains("class"));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let output = lex("String string Class");
        assert_eq!(output.tokens()[0].kind, TokenType::Keyword);
        assert_eq!(output.tokens()[1].kind, TokenType::Identifier);
        assert_eq!(output.tokens()[2].kind, TokenType::Identifier);
    }

    #[test]
    fn test_line_column_tracking() {
        let output = lex("a\nb");
        let tokens = output.tokens();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
    }

    #[test]
    fn test_invalid_character_recovery() {
        let output = lex("a # b @");
        assert_eq!(
            kinds_and_lexemes(&output),
            vec![
                (TokenType::Identifier, "a"),
                (TokenType::Error, "#"),
                (TokenType::Identifier, "b"),
                (TokenType::Error, "@"),
                (TokenType::Eof, "")
            ]
        );
        assert_eq!(output.tokens()[1].column, 3);
    }

    #[test]
    fn test_lone_ampersand_is_error() {
        let output = lex("a & b && c");
        let errors: Vec<&str> = output.errors().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(errors, vec!["&"]);
        assert!(output
            .of_kind(TokenType::Operator)
            .any(|t| t.lexeme == "&&"));
    }

    #[test]
    fn test_comments_are_discarded() {
        let output = lex("a // note\n/* block\n */ b / c");
        assert_eq!(
            kinds_and_lexemes(&output),
            vec![
                (TokenType::Identifier, "a"),
                (TokenType::Identifier, "b"),
                (TokenType::Operator, "/"),
                (TokenType::Identifier, "c"),
                (TokenType::Eof, "")
            ]
        );
        assert_eq!(output.tokens()[1].line, 3);
    }

    #[test]
    fn test_unterminated_block_comment_reports_end_position() {
        let output = lex("x /* never\nclosed");
        let tokens = output.tokens();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenType::Error);
        assert_eq!(tokens[1].lexeme, "Unterminated block comment");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 7));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 7));
    }

    #[test]
    fn test_comment_retention() {
        let preferences = LexicalPreferences {
            retain_comments: true,
            ..LexicalPreferences::default()
        };
        let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
        let output = analyzer.tokenize("// one\nx /* two */");

        let comments: Vec<(&str, u32, u32)> = output
            .of_kind(TokenType::Comment)
            .map(|t| (t.lexeme.as_str(), t.line, t.column))
            .collect();
        assert_eq!(comments, vec![("// one", 1, 1), ("/* two */", 2, 3)]);
        assert_eq!(analyzer.metrics().comment_count, 2);
    }

    #[test]
    fn test_default_analyzer_ignores_environment() {
        std::env::set_var(env_vars::LEXICAL_RETAIN_COMMENTS, "true");
        let from_fn = crate::lexical::tokenize("a // c\nb");
        let from_new = lex("a /* c */ b");
        std::env::remove_var(env_vars::LEXICAL_RETAIN_COMMENTS);

        assert_eq!(from_fn.of_kind(TokenType::Comment).count(), 0);
        assert_eq!(from_new.of_kind(TokenType::Comment).count(), 0);
        assert_eq!(from_fn.tokens().len(), 3);
    }

    #[test]
    fn test_retention_skips_unterminated_comment() {
        let preferences = LexicalPreferences {
            retain_comments: true,
            ..LexicalPreferences::default()
        };
        let output = LexicalAnalyzer::with_preferences(preferences).tokenize("/* open");
        assert_eq!(output.of_kind(TokenType::Comment).count(), 0);
        assert!(output.has_errors());
    }

    #[test]
    fn test_every_character_accounted_for() {
        let source = "int x = 10; //c\nx += 2.5 # \"s\"";
        let output = lex(source);
        let lexeme_chars: usize = output
            .tokens()
            .iter()
            .map(|t| match t.kind {
                TokenType::String => t.lexeme.chars().count() + 2,
                _ => t.lexeme.chars().count(),
            })
            .sum();
        let skipped = source.chars().filter(|c| c.is_whitespace()).count() + "//c".len();
        assert_eq!(lexeme_chars + skipped, source.chars().count());
    }

    #[test]
    fn test_metrics() {
        let preferences = LexicalPreferences {
            track_operator_patterns: true,
            ..LexicalPreferences::default()
        };
        let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
        analyzer.tokenize("int a = b + c + \"hey\"; # \"x");

        let metrics = analyzer.metrics();
        assert_eq!(metrics.keyword_tokens, 1);
        assert_eq!(metrics.identifier_tokens, 3);
        assert_eq!(metrics.operator_tokens, 3);
        assert_eq!(metrics.string_tokens, 1);
        assert_eq!(metrics.max_string_length, 3);
        assert_eq!(metrics.invalid_chars, 1);
        assert_eq!(metrics.unterminated_literals, 1);
        assert_eq!(metrics.error_count(), 2);
        assert_eq!(metrics.operator_usage_patterns.get("+"), Some(&2));
        assert_eq!(metrics.operator_usage_patterns.get("="), Some(&1));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut analyzer = LexicalAnalyzer::new();
        let first = analyzer.tokenize("a b");
        let second = analyzer.tokenize("c");
        assert_eq!(first.symbols().len(), 2);
        assert_eq!(second.symbols().len(), 1);
        assert!(!second.symbols().contains("a"));
        assert_eq!(analyzer.metrics().identifier_tokens, 1);
    }

    #[test]
    fn test_lexer_error_views() {
        let err = LexerError::InvalidCharacter {
            character: '#',
            line: 2,
            column: 4,
        };
        assert_matches!(err, LexerError::InvalidCharacter { character: '#', .. });
        assert_eq!(err.lexeme(), "#");
        assert_eq!(err.error_code().as_str(), "E020");

        let err = LexerError::UnterminatedBlockComment { line: 1, column: 1 };
        assert_eq!(err.error_code().as_str(), "E029");
        assert_eq!(err.lexeme(), "Unterminated block comment");
    }

    #[test]
    fn test_errors_are_logged() {
        let memory = Arc::new(MemoryLogger::new());
        let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));

        with_scoped_logger(service, || {
            lex("# \"open");
        });

        assert!(memory.has_error_with_code(codes::lexical::INVALID_CHARACTER));
        assert!(memory.has_error_with_code(codes::lexical::UNTERMINATED_STRING));
        assert!(memory.has_success_with_code(codes::success::TOKENIZATION_COMPLETE));

        let errors = memory.get_errors();
        let span = errors[0].span.unwrap();
        assert_eq!((span.start.line, span.start.column), (1, 1));
    }

    #[test]
    fn test_sample_program() {
        let source = include_str!("../../samples/PotionBrewer.java");
        let output = lex(source);

        assert!(!output.has_errors());
        assert_eq!(output.tokens().len(), 253);

        let first: Vec<(TokenType, &str)> = kinds_and_lexemes(&output)[..4].to_vec();
        assert_eq!(
            first,
            vec![
                (TokenType::Keyword, "public"),
                (TokenType::Keyword, "class"),
                (TokenType::Identifier, "PotionBrewer"),
                (TokenType::Delimiter, "{")
            ]
        );

        let symbols = output.symbols();
        assert_eq!(symbols.len(), 21);
        assert_eq!(symbols.entries()[0].name, "PotionBrewer");
        assert_eq!(symbols.get("PotionBrewer"), Some(4));
        assert_eq!(symbols.get("this"), Some(9));
        assert_eq!(symbols.get("totalCost"), Some(5));
        assert_eq!(symbols.get("println"), Some(6));
        assert!(!symbols.contains("String"));

        let eof = output.tokens().last().unwrap();
        assert_eq!((eof.line, eof.column), (45, 1));
    }
}
