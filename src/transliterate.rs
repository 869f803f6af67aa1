use unicode_normalization::UnicodeNormalization;

/// Converts `s` into its closest printable-ASCII approximation.
///
/// The input is decomposed (NFKD) so accented Latin letters split into a base
/// letter plus combining marks. ASCII survives, a handful of letters and
/// symbols without a decomposition are folded through a small table, and
/// everything else is dropped.
pub fn ascii_equivalent(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfkd() {
        if ch.is_ascii() {
            if is_printable_ascii(ch) { out.push(ch); }
        } else if let Some(folded) = fold(ch) {
            out.push_str(folded);
        }
    }
    out
}

/// Printable ASCII (0x20..=0x7E) plus the ASCII whitespace controls.
pub fn is_printable_ascii(ch: char) -> bool {
    matches!(ch, ' '..='~' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

// Letters and symbols NFKD leaves untouched. Values must stay printable ASCII
// and must not contain path separators.
fn fold(ch: char) -> Option<&'static str> {
    let s = match ch {
        // Latin
        'ß' => "ss", 'ẞ' => "SS",
        'Æ' => "AE", 'æ' => "ae",
        'Œ' => "OE", 'œ' => "oe",
        'Ø' => "O", 'ø' => "o",
        'Ð' | 'Đ' => "D", 'ð' | 'đ' => "d",
        'Þ' => "Th", 'þ' => "th",
        'Ł' => "L", 'ł' => "l",
        'Ħ' => "H", 'ħ' => "h",
        'ı' => "i",
        'Ŋ' => "NG", 'ŋ' => "ng",
        'ĸ' => "q",
        'ſ' => "s",
        // Punctuation
        '‘' | '’' | '‚' | '‛' | '′' | '´' => "'",
        '“' | '”' | '„' | '‟' | '″' | '«' | '»' => "\"",
        '‹' => "<", '›' => ">",
        '‐' | '‑' | '‒' | '–' | '—' | '―' | '−' => "-",
        '•' | '·' => "*",
        '¡' => "!", '¿' => "?",
        '×' => "x",
        '€' => "EUR", '£' => "GBP", '¥' => "JPY", '¢' => "c",
        '©' => "(c)", '®' => "(r)", '°' => "deg", '§' => "S", '¶' => "P",
        _ => return greek(ch).or_else(|| cyrillic(ch)),
    };
    Some(s)
}

fn greek(ch: char) -> Option<&'static str> {
    let s = match ch {
        'Α' => "A", 'α' => "a", 'Β' => "B", 'β' => "b", 'Γ' => "G", 'γ' => "g",
        'Δ' => "D", 'δ' => "d", 'Ε' => "E", 'ε' => "e", 'Ζ' => "Z", 'ζ' => "z",
        'Η' => "I", 'η' => "i", 'Θ' => "Th", 'θ' => "th", 'Ι' => "I", 'ι' => "i",
        'Κ' => "K", 'κ' => "k", 'Λ' => "L", 'λ' => "l", 'Μ' => "M", 'μ' => "m",
        'Ν' => "N", 'ν' => "n", 'Ξ' => "X", 'ξ' => "x", 'Ο' => "O", 'ο' => "o",
        'Π' => "P", 'π' => "p", 'Ρ' => "R", 'ρ' => "r", 'Σ' => "S", 'σ' | 'ς' => "s",
        'Τ' => "T", 'τ' => "t", 'Υ' => "Y", 'υ' => "y", 'Φ' => "Ph", 'φ' => "ph",
        'Χ' => "Ch", 'χ' => "ch", 'Ψ' => "Ps", 'ψ' => "ps", 'Ω' => "O", 'ω' => "o",
        _ => return None,
    };
    Some(s)
}

fn cyrillic(ch: char) -> Option<&'static str> {
    let s = match ch {
        'А' => "A", 'а' => "a", 'Б' => "B", 'б' => "b", 'В' => "V", 'в' => "v",
        'Г' => "G", 'г' => "g", 'Д' => "D", 'д' => "d", 'Е' => "E", 'е' => "e",
        'Ж' => "Zh", 'ж' => "zh", 'З' => "Z", 'з' => "z", 'И' => "I", 'и' => "i",
        'К' => "K", 'к' => "k", 'Л' => "L", 'л' => "l", 'М' => "M", 'м' => "m",
        'Н' => "N", 'н' => "n", 'О' => "O", 'о' => "o", 'П' => "P", 'п' => "p",
        'Р' => "R", 'р' => "r", 'С' => "S", 'с' => "s", 'Т' => "T", 'т' => "t",
        'У' => "U", 'у' => "u", 'Ф' => "F", 'ф' => "f", 'Х' => "Kh", 'х' => "kh",
        'Ц' => "Ts", 'ц' => "ts", 'Ч' => "Ch", 'ч' => "ch", 'Ш' => "Sh", 'ш' => "sh",
        'Щ' => "Shch", 'щ' => "shch", 'Ы' => "Y", 'ы' => "y", 'Э' => "E", 'э' => "e",
        'Ю' => "Yu", 'ю' => "yu", 'Я' => "Ya", 'я' => "ya",
        'Ъ' | 'ъ' | 'Ь' | 'ь' => "",
        'Є' => "Ye", 'є' => "ye", 'І' => "I", 'і' => "i",
        _ => return None,
    };
    Some(s)
}
