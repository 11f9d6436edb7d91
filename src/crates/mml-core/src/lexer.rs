use crate::length::{saturating_digits, Duration, Length};
use crate::pitch::Accidental;
use crate::span::Span;
use logos::Logos;
use serde::Serialize;

/// Relative note such as `c`, `f+8` or `b-4.`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativeNote {
    pub letter: char,
    pub accidental: Accidental,
    pub duration: Duration,
}

/// Absolute note such as `n35`. `digits` is kept exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsoluteNote {
    pub digits: String,
    pub duration: Duration,
}

// Every pattern starts with its own character, so longest match here is the
// same as trying the alternatives in order.
#[derive(Logos, Debug, Clone, PartialEq, Serialize)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
pub enum Token {
    #[regex(r"o[0-9]+", octave_set)]
    OctaveSet(i64),
    #[token(">")]
    OctaveUp,
    #[token("<")]
    OctaveDown,

    #[regex(r"l[0-9]+\.?", length_macro)]
    LengthMacro(Length),
    #[token("&")]
    Tie,

    #[regex(r"[a-g][+\-]?[0-9]*\.?", relative_note, priority = 3)]
    Note(RelativeNote),
    #[regex(r"r[0-9]*\.?", rest)]
    Rest(Duration),
    // The digit run is greedy, so an absolute note never carries its own length
    #[regex(r"n[0-9]+\.?", absolute_note)]
    Absolute(AbsoluteNote),

    #[regex(r"v[0-9]+")]
    Volume,
    #[regex(r"t[0-9]+")]
    Tempo,
    #[regex(r"[0-9]+\.?|\.", priority = 3)]
    Number,

    // Anything else, one character at a time. Never yielded by `Lexer`.
    #[regex(r"[^ \t\r\n]", priority = 1)]
    Stray,
}

fn octave_set(lex: &mut logos::Lexer<Token>) -> i64 {
    i64::try_from(saturating_digits(&lex.slice()[1..])).unwrap_or(i64::MAX)
}

fn length_macro(lex: &mut logos::Lexer<Token>) -> Option<Length> {
    Length::parse_macro(lex.slice())
}

fn rest(lex: &mut logos::Lexer<Token>) -> Option<Duration> {
    Duration::parse(&lex.slice()[1..])
}

fn relative_note(lex: &mut logos::Lexer<Token>) -> Option<RelativeNote> {
    let slice = lex.slice();
    let mut chars = slice.chars();
    let letter = chars.next()?;
    let rest = chars.as_str();

    let suffix = rest.chars().next().filter(|c| matches!(c, '+' | '-'));
    let accidental = Accidental::from_suffix(suffix);
    let rest = if suffix.is_some() { &rest[1..] } else { rest };

    Some(RelativeNote {
        letter,
        accidental,
        duration: Duration::parse(rest)?,
    })
}

fn absolute_note(lex: &mut logos::Lexer<Token>) -> Option<AbsoluteNote> {
    let body = &lex.slice()[1..];
    let (digits, dotted) = match body.strip_suffix('.') {
        Some(digits) => (digits, true),
        None => (body, false),
    };
    Some(AbsoluteNote {
        digits: digits.to_string(),
        duration: Duration { value: None, dotted },
    })
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::OctaveSet(o) => write!(f, "octave-set {}", o),
            Token::OctaveUp => write!(f, "octave-up"),
            Token::OctaveDown => write!(f, "octave-down"),
            Token::LengthMacro(length) => write!(f, "length-macro {}", length),
            Token::Tie => write!(f, "tie"),
            Token::Note(note) => write!(f, "relative-note {}", note.letter),
            Token::Rest(_) => write!(f, "rest"),
            Token::Absolute(note) => write!(f, "absolute-note {}", note.digits),
            Token::Volume => write!(f, "volume"),
            Token::Tempo => write!(f, "tempo"),
            Token::Number => write!(f, "other"),
            Token::Stray => write!(f, "stray"),
        }
    }
}

/// A classified token together with the text it was read from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lexeme<'source> {
    pub token: Token,
    pub raw: &'source str,
    pub span: Span,
}

/// Lexer over one voice string. Unrecognised characters are dropped silently.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            inner: Token::lexer(source),
        }
    }

    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    pub fn slice(&self, span: Span) -> &'source str {
        &self.source()[span.to_range()]
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Lexeme<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.inner.next()?;
            let span = Span::from(self.inner.span());

            match token {
                Ok(Token::Stray) | Err(()) => {
                    tracing::trace!(
                        "dropping unrecognised input {:?} at {}",
                        self.source().get(span.to_range()),
                        span
                    );
                    continue;
                }
                Ok(token) => {
                    return Some(Lexeme {
                        token,
                        raw: self.slice(span),
                        span,
                    });
                }
            }
        }
    }
}

/// Classify a whole voice string
pub fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|l| l.token).collect()
    }

    fn raw(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|l| l.raw).collect()
    }

    #[test]
    fn test_lex_octaves() {
        assert_eq!(
            lex("o3><o12"),
            vec![
                Token::OctaveSet(3),
                Token::OctaveUp,
                Token::OctaveDown,
                Token::OctaveSet(12)
            ]
        );
    }

    #[test]
    fn test_lex_length_macro() {
        assert_eq!(
            lex("l8 l16."),
            vec![
                Token::LengthMacro(Length::new(8, false)),
                Token::LengthMacro(Length::new(16, true))
            ]
        );
    }

    #[test]
    fn test_lex_relative_notes() {
        assert_eq!(
            lex("c f+8 b-4."),
            vec![
                Token::Note(RelativeNote {
                    letter: 'c',
                    accidental: Accidental::Natural,
                    duration: Duration { value: None, dotted: false },
                }),
                Token::Note(RelativeNote {
                    letter: 'f',
                    accidental: Accidental::Sharp,
                    duration: Duration { value: Some(8), dotted: false },
                }),
                Token::Note(RelativeNote {
                    letter: 'b',
                    accidental: Accidental::Flat,
                    duration: Duration { value: Some(4), dotted: true },
                }),
            ]
        );
    }

    #[test]
    fn test_lex_rests() {
        assert_eq!(
            lex("r r8 r."),
            vec![
                Token::Rest(Duration { value: None, dotted: false }),
                Token::Rest(Duration { value: Some(8), dotted: false }),
                Token::Rest(Duration { value: None, dotted: true }),
            ]
        );
    }

    #[test]
    fn test_lex_absolute_keeps_all_digits() {
        assert_eq!(
            lex("n35 n0478."),
            vec![
                Token::Absolute(AbsoluteNote {
                    digits: "35".to_string(),
                    duration: Duration { value: None, dotted: false },
                }),
                Token::Absolute(AbsoluteNote {
                    digits: "0478".to_string(),
                    duration: Duration { value: None, dotted: true },
                }),
            ]
        );
    }

    #[test]
    fn test_lex_passthrough_kinds() {
        assert_eq!(
            lex("v12 t120 & 8. ."),
            vec![Token::Volume, Token::Tempo, Token::Tie, Token::Number, Token::Number]
        );
        assert_eq!(raw("v12t120 8."), vec!["v12", "t120", "8."]);
    }

    #[test]
    fn test_lex_drops_unrecognised() {
        assert_eq!(raw("C x l o n v c"), vec!["c"]);
        assert_eq!(raw("[c]|e"), vec!["c", "e"]);
        assert_eq!(raw("드럼 c4"), vec!["c4"]);
    }

    #[test]
    fn test_lex_adjacent_tokens() {
        assert_eq!(raw("o3c8.&d+r16l4n35"), vec!["o3", "c8.", "&", "d+", "r16", "l4", "n35"]);
    }

    #[test]
    fn test_lex_double_dot() {
        assert_eq!(raw("c4.."), vec!["c4.", "."]);
    }

    #[test]
    fn test_lexeme_spans() {
        let lexemes = tokenize("o4 c8");
        assert_eq!(lexemes[0].span, Span::new(0, 2));
        assert_eq!(lexemes[1].span, Span::new(3, 5));

        let lexer = Lexer::new("o4 c8");
        assert_eq!(lexer.slice(Span::new(3, 5)), "c8");
    }

    #[test]
    fn test_huge_octave_saturates() {
        assert_eq!(lex("o99999999999999999999999"), vec![Token::OctaveSet(i64::MAX)]);
    }
}
