use runa::{
    error::LexErrorKind,
    interpreter::lexer::{Lexer, Position, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, _) = Lexer::new(source).tokenize();
    tokens.into_iter().map(|t| t.kind).collect()
}

fn error_kinds(source: &str) -> Vec<LexErrorKind> {
    let (_, errors) = Lexer::new(source).tokenize();
    errors.into_iter().map(|e| e.kind).collect()
}

#[test]
fn keywords() {
    let input = "if else false true for in while fun return val var continue fall match";

    assert_eq!(kinds(input),
               vec![TokenKind::If,
                    TokenKind::Else,
                    TokenKind::False,
                    TokenKind::True,
                    TokenKind::For,
                    TokenKind::In,
                    TokenKind::While,
                    TokenKind::Fun,
                    TokenKind::Return,
                    TokenKind::Val,
                    TokenKind::Var,
                    TokenKind::Continue,
                    TokenKind::Fall,
                    TokenKind::Match,
                    TokenKind::Eof]);
}

#[test]
fn numbers() {
    let input = "123.3 1991we723 2345 123.4.5.5";

    assert_eq!(kinds(input),
               vec![TokenKind::Real,
                    TokenKind::Illegal,
                    TokenKind::Integer,
                    TokenKind::Illegal,
                    TokenKind::Eof]);
    assert_eq!(error_kinds(input),
               vec![LexErrorKind::InvalidNumber, LexErrorKind::InvalidNumber]);
}

#[test]
fn decimal_point_needs_a_following_digit() {
    // `1.` is an integer followed by a stray dot, not a real.
    let (tokens, errors) = Lexer::new("1. 2").tokenize();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(errors[0].kind, LexErrorKind::UnexpectedCharacter);
}

#[test]
fn strings_and_chars() {
    let input = "\"Hello world\" 'c' 'a' 'invalid'";

    let (tokens, errors) = Lexer::new(input).tokenize();
    let token_kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(token_kinds,
               vec![TokenKind::Str,
                    TokenKind::Char,
                    TokenKind::Char,
                    TokenKind::Illegal,
                    TokenKind::Eof]);

    // Lexemes keep the exact source text, delimiters included.
    assert_eq!(tokens[0].text, "\"Hello world\"");
    assert_eq!(tokens[1].text, "'c'");
    assert_eq!(tokens[2].text, "'a'");
    assert_eq!(errors[0].kind, LexErrorKind::MalformedChar);
}

#[test]
fn malformed_string_and_char_literals() {
    assert_eq!(error_kinds("\"abc"), vec![LexErrorKind::UnterminatedString]);
    assert_eq!(error_kinds("''"), vec![LexErrorKind::EmptyChar]);
    assert_eq!(error_kinds("'a"), vec![LexErrorKind::UnterminatedChar]);
}

#[test]
fn strings_may_span_lines_without_escapes() {
    let (tokens, errors) = Lexer::new("\"a\nb\" 1").tokenize();

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, "\"a\nb\"");
    // The token after the literal still gets an exact position.
    assert_eq!(tokens[1].pos, Position { row: 2, col: 4 });
}

#[test]
fn operators_use_maximal_munch() {
    let input = "** **= *= * && & &= ~ ~= ^ ^= -> |= || != ! <= <";

    assert_eq!(kinds(input),
               vec![TokenKind::DoubleStar,
                    TokenKind::DoubleStarEqual,
                    TokenKind::StarEqual,
                    TokenKind::Star,
                    TokenKind::DoubleAmpersand,
                    TokenKind::Ampersand,
                    TokenKind::AmpersandEqual,
                    TokenKind::Tilde,
                    TokenKind::TildeEqual,
                    TokenKind::Caret,
                    TokenKind::CaretEqual,
                    TokenKind::MinusGreater,
                    TokenKind::PipeEqual,
                    TokenKind::DoublePipe,
                    TokenKind::BangEqual,
                    TokenKind::Bang,
                    TokenKind::LessEqual,
                    TokenKind::Less,
                    TokenKind::Eof]);
}

#[test]
fn underscore_alone_is_not_an_identifier() {
    assert_eq!(kinds("_ _x x_1"),
               vec![TokenKind::Underscore, TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn comments_are_skipped() {
    let input = "1 // line comment\n+ 2; /* block\ncomment */ 3;";

    assert_eq!(kinds(input),
               vec![TokenKind::Integer,
                    TokenKind::Plus,
                    TokenKind::Integer,
                    TokenKind::Semicolon,
                    TokenKind::Integer,
                    TokenKind::Semicolon,
                    TokenKind::Eof]);
}

#[test]
fn block_comments_stop_at_the_first_terminator() {
    assert_eq!(kinds("/* a * b ** c */ 1"), vec![TokenKind::Integer, TokenKind::Eof]);
    assert_eq!(error_kinds("/* never closed"),
               vec![LexErrorKind::UnterminatedBlockComment]);
}

#[test]
fn positions_are_one_based_rows_and_columns() {
    let (tokens, _) = Lexer::new("val x\n  = 1;").tokenize();

    assert_eq!(tokens[0].pos, Position { row: 1, col: 1 });
    assert_eq!(tokens[1].pos, Position { row: 1, col: 5 });
    assert_eq!(tokens[2].pos, Position { row: 2, col: 3 });
    assert_eq!(tokens[3].pos, Position { row: 2, col: 5 });
    assert_eq!(tokens[4].pos, Position { row: 2, col: 6 });
    assert_eq!(tokens[5].pos, Position { row: 2, col: 7 });
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn relexing_a_lexeme_reproduces_its_token() {
    let (tokens, errors) = Lexer::new("val answer = 6 * 7; \"text\" 'c' 1.25").tokenize();
    assert!(errors.is_empty());

    for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
        let (again, again_errors) = Lexer::new(&token.text).tokenize();
        assert!(again_errors.is_empty(), "re-lexing {:?}", token.text);
        assert_eq!(again[0].kind, token.kind, "re-lexing {:?}", token.text);
        assert_eq!(again[0].text, token.text, "re-lexing {:?}", token.text);
    }
}

#[test]
fn illegal_lexemes_do_not_stop_the_scan() {
    let (tokens, errors) = Lexer::new("1we2 + 3").tokenize();

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               vec![TokenKind::Illegal, TokenKind::Plus, TokenKind::Integer, TokenKind::Eof]);
    assert_eq!(errors.len(), 1);
    assert_eq!(tokens[0].text, "1we2");
}
