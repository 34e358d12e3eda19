//! Text normalization shared by the sentiment scorer and the keyword extractor.

use regex::Regex;
use std::sync::LazyLock;

/// Real tags and comments only; a bare `<` (`<3`, `->`) is prose.
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][A-Za-z0-9-]*(?:\s[^<>]*)?/?>").unwrap()
});
static MD_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
static MD_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static MD_LINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:#{1,6}[ \t]+|>[ \t]?|[-*+][ \t]+(?:\[[ xX]\][ \t]+)?|\d+\.[ \t]+)")
        .unwrap()
});
static MD_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_~`]+").unwrap());

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

/// Remove Markdown and HTML artifacts while keeping the visible text.
pub fn strip_markup(text: &str) -> String {
    let s = HTML_TAG.replace_all(text, " ");
    let s = MD_IMAGE.replace_all(&s, "$1");
    let s = MD_LINK.replace_all(&s, "$1");
    let s = MD_LINE_PREFIX.replace_all(&s, "");
    let mut out = MD_EMPHASIS.replace_all(&s, "").into_owned();

    for (entity, plain) in ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, plain);
        }
    }

    out
}

/// Lower-cased word tokens of `text`, markup removed.
///
/// A token is a run of alphabetic characters; an apostrophe between two
/// letters stays inside the token (`don't`), typographic ones included.
pub fn tokenize(text: &str) -> Vec<String> {
    let clean = strip_markup(text);
    let chars: Vec<char> = clean.chars().collect();

    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphabetic() {
            current.extend(c.to_lowercase());
            continue;
        }

        let is_apostrophe = c == '\'' || c == '\u{2019}';
        let next_is_letter = chars.get(i + 1).is_some_and(|n| n.is_alphabetic());

        if is_apostrophe && !current.is_empty() && next_is_letter {
            current.push('\'');
            continue;
        }

        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
