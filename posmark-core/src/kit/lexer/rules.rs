//! Production rules
//!
//! A rule pairs a token kind with a [`Matcher`]: something that looks at the
//! unconsumed input and reports how many bytes it would take.

/// Match against the start of the remaining input
pub trait Matcher {
    /// Byte length of the match at the start of `input`
    fn match_len(&self, input: &str) -> Option<usize>;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> Option<usize>,
{
    fn match_len(&self, input: &str) -> Option<usize> {
        self(input)
    }
}

/// Match `text` exactly
pub fn literal(text: impl Into<String>) -> impl Matcher {
    let text = text.into();
    move |input: &str| input.starts_with(text.as_str()).then_some(text.len())
}

/// Match a single `expected` character
pub fn one_char(expected: char) -> impl Matcher {
    move |input: &str| input.starts_with(expected).then_some(expected.len_utf8())
}

/// Match the longest non-empty run of characters satisfying `pred`
pub fn take_while<P>(pred: P) -> impl Matcher
where
    P: Fn(char) -> bool,
{
    move |input: &str| {
        let len = input
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(input.len(), |(index, _)| index);
        (len > 0).then_some(len)
    }
}

/// Named production rule
pub struct Rule {
    kind: String,
    matcher: Box<dyn Matcher>,
}

impl Rule {
    pub fn new(kind: impl Into<String>, matcher: impl Matcher + 'static) -> Self {
        Self {
            kind: kind.into(),
            matcher: Box::new(matcher),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Byte length matched at the start of `input`; empty matches count as none
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.matcher.match_len(input).filter(|&len| len > 0)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish_non_exhaustive()
    }
}
