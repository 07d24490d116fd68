use std::sync::LazyLock;

use regex::bytes::{Matches, Regex};

/// One token of the corpus stream.
///
/// Only the two document-structure tags are surfaced; every other SGML tag
/// is consumed by the lexer and dropped, so its contents never become
/// tokens. Words are maximal alphanumeric runs with internal hyphens
/// (TREC DOCNOs such as `WSJ870324-0001` stay in one piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    DocOpen,
    DocnoOpen,
    Word(&'a [u8]),
}

impl<'a> Token<'a> {
    /// The literal bytes of the token, used when a `<DOCNO>` capture is
    /// pending and the very next token of any kind becomes the primary key.
    pub fn text(&self) -> &'a [u8] {
        match self {
            Token::DocOpen => b"<DOC>",
            Token::DocnoOpen => b"<DOCNO>",
            Token::Word(word) => word,
        }
    }
}

// A word, or a tag running to the next '>' (or end of line if unterminated).
// Newlines are excluded from the tag class so tokens never cross lines.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9][A-Za-z0-9-]*|<[^>\n]*>?").unwrap());

/// Lazy token stream over raw corpus bytes.
pub struct Lexer<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Lexer {
            matches: TOKEN.find_iter(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        for found in self.matches.by_ref() {
            let text = found.as_bytes();
            if text[0] != b'<' {
                return Some(Token::Word(text));
            }
            match text {
                b"<DOC>" => return Some(Token::DocOpen),
                b"<DOCNO>" => return Some(Token::DocnoOpen),
                _ => continue, // unrecognised markup, skipped whole
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &[u8]) -> Vec<Token<'_>> {
        Lexer::new(input).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        let tokens = lex(b"the quick, brown fox!");
        assert_eq!(
            tokens,
            vec![
                Token::Word(b"the"),
                Token::Word(b"quick"),
                Token::Word(b"brown"),
                Token::Word(b"fox"),
            ]
        );
    }

    #[test]
    fn test_hyphenated_docno_is_one_token() {
        assert_eq!(lex(b"WSJ870324-0001"), vec![Token::Word(b"WSJ870324-0001")]);
        // A leading hyphen is punctuation, not part of a word.
        assert_eq!(lex(b"-fox"), vec![Token::Word(b"fox")]);
    }

    #[test]
    fn test_structure_tags_are_tokens() {
        let tokens = lex(b"<DOC><DOCNO>A-1</DOCNO>text</DOC>");
        assert_eq!(
            tokens,
            vec![
                Token::DocOpen,
                Token::DocnoOpen,
                Token::Word(b"A-1"),
                Token::Word(b"text"),
            ]
        );
    }

    #[test]
    fn test_other_tags_are_swallowed() {
        // The bytes inside a skipped tag never become words.
        assert_eq!(lex(b"<HEADLINE>fox</HEADLINE>"), vec![Token::Word(b"fox")]);
        assert_eq!(lex(b"<DOCS>"), Vec::<Token>::new());
    }

    #[test]
    fn test_tags_do_not_cross_lines() {
        // The '<' opens a tag that dies at end of line; the next line is
        // tokenised normally.
        assert_eq!(lex(b"<BAD\nfox"), vec![Token::Word(b"fox")]);
    }

    #[test]
    fn test_token_text() {
        assert_eq!(Token::DocOpen.text(), b"<DOC>");
        assert_eq!(Token::DocnoOpen.text(), b"<DOCNO>");
        assert_eq!(Token::Word(b"fox").text(), b"fox");
    }
}
