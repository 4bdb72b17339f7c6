//! Query tokenizer shared by the validator and the parser

/// Boolean operator keywords, matched ignoring ASCII case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    /// Recognize an operator keyword.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("AND") {
            Some(Self::And)
        } else if word.eq_ignore_ascii_case("OR") {
            Some(Self::Or)
        } else if word.eq_ignore_ascii_case("NOT") {
            Some(Self::Not)
        } else {
            None
        }
    }

    /// `AND` and `OR` take an operand on each side.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

/// One lexical unit of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Open,
    Close,
    Op(Operator),
    Word(&'a str),
}

/// Split a query into tokens. Parentheses are always tokens of their own,
/// everything else is separated by whitespace.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (idx, c) in input.char_indices() {
        if c.is_whitespace() || c == '(' || c == ')' {
            if let Some(start) = word_start.take() {
                tokens.push(word_token(&input[start..idx]));
            }
            match c {
                '(' => tokens.push(Token::Open),
                ')' => tokens.push(Token::Close),
                _ => {}
            }
        } else if word_start.is_none() {
            word_start = Some(idx);
        }
    }
    if let Some(start) = word_start {
        tokens.push(word_token(&input[start..]));
    }

    tokens
}

fn word_token(word: &str) -> Token<'_> {
    Operator::from_word(word).map_or(Token::Word(word), Token::Op)
}
