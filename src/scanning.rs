/// A read position over one expression's text.
///
/// Positions are byte offsets and always sit on a character boundary.
pub struct Cursor<'a> {
    string: &'a str,
    index: usize,
}

pub fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

impl<'a> Cursor<'a> {
    pub fn new(string: &'a str) -> Self {
        Self { string, index: 0 }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.string.len()
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    pub fn peek(&self) -> Option<char> {
        self.view().chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let character = self.peek()?;
        self.index += character.len_utf8();
        Some(character)
    }

    fn count<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        self.view()
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum()
    }

    /// Consumes the longest run of characters matching `predicate`.
    pub fn take_while<P: Fn(char) -> bool>(&mut self, predicate: P) -> &'a str {
        let start = self.index;
        self.index += self.count(predicate);
        &self.string[start..self.index]
    }

    pub fn skip_whitespace(&mut self) {
        self.index += self.count(char::is_whitespace);
    }
}
