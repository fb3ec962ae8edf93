use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Capitalizes every word that starts with a letter and lowercases the rest
/// of it. Words are runs of non-whitespace, so `charizard-gmax` becomes
/// `Charizard-gmax`.
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_whitespace() {
            in_word = false;
            output.push(c);
        } else if in_word {
            output.extend(c.to_lowercase());
        } else if c.is_alphabetic() {
            in_word = true;
            output.extend(c.to_uppercase());
        } else {
            output.push(c);
        }
    }

    output
}

/// Removes accents and other combining marks (`Flabébé` → `Flabebe`).
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}
