
/// Characters that survive normalization: the `\w` class (letters, digits and underscore).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Single-character case folding. Characters whose lower case is more than
/// one character are left alone.
pub fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

pub fn fold_case(s: &str) -> String {
    s.chars().map(fold).collect()
}

pub fn normalize(s: &str) -> String {
    s.chars().map(fold).filter(|&x| is_word_char(x)).collect()
}

/// The letter multiset of `s`, as a sorted sequence so that equal letters are adjacent.
pub fn letters(s: &str) -> Vec<char> {
    let mut letters: Vec<char> = normalize(s).chars().collect();
    letters.sort_unstable();
    letters
}

pub fn letter_count(s: &str) -> usize {
    s.chars().filter(|&x| is_word_char(x)).count()
}
