//! English plural forms, so that plurals of dictionary headwords are searchable.

use crate::alphabet::fold_case;

fn uncountable(word: &str) -> bool {
    matches!(word,
        "advice" | "aircraft" | "bison" | "cattle" | "deer" | "equipment" | "fish"
        | "information" | "moose" | "news" | "rice" | "series" | "sheep" | "species"
        | "swine" | "trout" | "offspring" | "salmon" | "furniture" | "luggage")
}

fn irregular(word: &str) -> Option<&'static str> {
    Some(match word {
        "man" => "men",
        "woman" => "women",
        "child" => "children",
        "person" => "people",
        "mouse" => "mice",
        "louse" => "lice",
        "goose" => "geese",
        "tooth" => "teeth",
        "foot" => "feet",
        "ox" => "oxen",
        "die" => "dice",
        "quiz" => "quizzes",
        _ => return None,
    })
}

const VES: [&str; 14] = ["knife", "wife", "life", "midwife", "housewife", "leaf", "wolf",
    "half", "shelf", "loaf", "thief", "calf", "elf", "self"];

const OES: [&str; 7] = ["hero", "potato", "tomato", "echo", "veto", "torpedo", "volcano"];

const MAN_EXCEPTIONS: [&str; 5] = ["human", "german", "roman", "shaman", "talisman"];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

pub fn pluralize(word: &str) -> String {
    let word = fold_case(word);
    if word.is_empty() || uncountable(&word) {
        return word;
    }
    if let Some(plural) = irregular(&word) {
        return plural.to_string();
    }
    if word.ends_with("man") && !MAN_EXCEPTIONS.contains(&word.as_str()) {
        return format!("{}men", &word[..word.len() - 3]);
    }
    if VES.iter().any(|w| word.ends_with(w)) {
        let stem = word.strip_suffix("fe").or_else(|| word.strip_suffix('f')).unwrap_or(&word);
        return format!("{}ves", stem);
    }
    if OES.contains(&word.as_str()) {
        return format!("{}es", word);
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{}es", word);
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().map_or(false, |c| !is_vowel(c)) {
            return format!("{}ies", stem);
        }
    }
    format!("{}s", word)
}
