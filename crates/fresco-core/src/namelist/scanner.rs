//! Token-level scanning of namelist text.
//!
//! Everything here is line-local and stateless; block tracking lives in the
//! parser's `ScanState`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    pub text: String,
    pub quoted: bool,
}

/// Largest absolute array index accepted in `name(i:j)=`.
pub const MAX_SLOT_INDEX: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    pub start: i32,
    pub end: i32,
}

impl SlotRange {
    pub fn len(self) -> usize {
        usize::try_from(i64::from(self.end) - i64::from(self.start) + 1).unwrap_or(0)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Assign {
        name: String,
        range: Option<SlotRange>,
        value: Option<RawValue>,
    },
    Value(RawValue),
    /// Text that is neither an assignment nor a usable value.
    Junk(String),
}

/// Opening line of a block: `&NAME rest...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOpening<'a> {
    pub name: String,
    pub rest: &'a str,
}

pub fn is_comment_line(trimmed: &str) -> bool {
    if trimmed.starts_with('&') {
        return false;
    }
    trimmed.starts_with('!')
        || trimmed.starts_with('#')
        || trimmed.starts_with('*')
        || trimmed.starts_with("C ")
        || trimmed.starts_with("c ")
        || trimmed == "C"
        || trimmed == "c"
}

pub fn is_block_close(trimmed: &str) -> bool {
    trimmed == "/"
        || trimmed.eq_ignore_ascii_case("&end")
        || trimmed.eq_ignore_ascii_case("$end")
}

pub fn parse_block_opening(trimmed: &str) -> Option<BlockOpening<'_>> {
    let body = trimmed.strip_prefix('&')?;
    let name_end = body
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(body.len());
    let name = &body[..name_end];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(BlockOpening {
        name: name.to_ascii_lowercase(),
        rest: &body[name_end..],
    })
}

/// Splits off everything from the first unquoted `/` (or trailing `&end`).
/// Returns the parameter text and whether the block was closed on this line.
pub fn split_terminator(text: &str) -> (&str, bool) {
    let mut quote: Option<char> = None;
    for (index, c) in text.char_indices() {
        match (quote, c) {
            (Some(open), _) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '/') => return (&text[..index], true),
            (None, '&' | '$') => {
                let tail = &text[index + 1..];
                if tail.get(..3).is_some_and(|head| head.eq_ignore_ascii_case("end")) {
                    let after = tail.get(3..).unwrap_or_default();
                    if after.chars().next().is_none_or(|next| !next.is_ascii_alphanumeric()) {
                        return (&text[..index], true);
                    }
                }
            }
            _ => {}
        }
    }
    (text, false)
}

/// Whitespace and comma separated words, keeping quoted runs intact.
pub fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in text.chars() {
        match quote {
            Some(open) => {
                current.push(c);
                if c == open {
                    quote = None;
                }
            }
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                current.push(c);
            }
            None if c.is_whitespace() || c == ',' => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Re-attaches `=` that was separated from its key or value by spaces.
pub fn fold_assignments(words: Vec<String>) -> Vec<String> {
    let mut folded: Vec<String> = Vec::with_capacity(words.len());
    let mut pending_equals = false;

    for word in words {
        if pending_equals {
            pending_equals = false;
            if let Some(last) = folded.last_mut()
                && !contains_unquoted_equals(&word)
            {
                last.push_str(&word);
                continue;
            }
        }

        if word == "=" {
            if let Some(last) = folded.last_mut()
                && last_is_bare_key(last)
            {
                last.push('=');
                pending_equals = true;
            } else {
                folded.push(word);
            }
            continue;
        }

        if let Some(rest) = word.strip_prefix('=')
            && let Some(last) = folded.last_mut()
            && last_is_bare_key(last)
        {
            last.push('=');
            last.push_str(rest);
            pending_equals = rest.is_empty();
            continue;
        }

        pending_equals = word.ends_with('=') && !word.starts_with(['\'', '"']);
        folded.push(word);
    }
    folded
}

pub fn classify_word(word: &str) -> Token {
    let Some(equals) = find_unquoted_equals(word) else {
        let value = dequote(word);
        if value.text.is_empty() {
            return Token::Junk(word.to_string());
        }
        return Token::Value(value);
    };

    let (lhs, rhs) = (&word[..equals], &word[equals + 1..]);
    let Some((name, range)) = parse_key(lhs) else {
        return Token::Junk(word.to_string());
    };
    let value = dequote(rhs);
    Token::Assign {
        name,
        range,
        value: (!value.text.is_empty() || value.quoted).then_some(value),
    }
}

pub fn tokenize(text: &str) -> Vec<Token> {
    fold_assignments(split_words(text))
        .iter()
        .map(|word| classify_word(word))
        .collect()
}

/// Strips trailing `,`/`/` and one level of matching quotes.
pub fn dequote(raw: &str) -> RawValue {
    let trimmed = raw.trim().trim_end_matches([',', '/']);
    for quote in ['\'', '"'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return RawValue {
                text: trimmed[1..trimmed.len() - 1].to_string(),
                quoted: true,
            };
        }
    }
    RawValue {
        text: trimmed.to_string(),
        quoted: false,
    }
}

fn parse_key(lhs: &str) -> Option<(String, Option<SlotRange>)> {
    let lhs = lhs.trim();
    let (base, range) = match lhs.find('(') {
        Some(open) => {
            let close = lhs.rfind(')')?;
            if close < open {
                return None;
            }
            (&lhs[..open], Some(parse_range(&lhs[open + 1..close])?))
        }
        None => (lhs, None),
    };
    let valid = !base.is_empty()
        && base.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && base.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then(|| (base.to_ascii_lowercase(), range))
}

fn parse_range(inner: &str) -> Option<SlotRange> {
    let inner = inner.trim();
    let (start, end) = match inner.split_once(':') {
        Some((start, end)) => (start.trim().parse().ok()?, end.trim().parse().ok()?),
        None => {
            let index = inner.parse().ok()?;
            (index, index)
        }
    };
    let in_bounds = |index: i32| (-MAX_SLOT_INDEX..=MAX_SLOT_INDEX).contains(&index);
    (end >= start && in_bounds(start) && in_bounds(end)).then_some(SlotRange { start, end })
}

fn find_unquoted_equals(word: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (index, c) in word.char_indices() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == '=' => return Some(index),
            None => {}
        }
    }
    None
}

fn contains_unquoted_equals(word: &str) -> bool {
    find_unquoted_equals(word).is_some()
}

fn last_is_bare_key(word: &str) -> bool {
    !contains_unquoted_equals(word) && parse_key(word).is_some()
}

#[cfg(test)]
mod tests {
    use super::{
        MAX_SLOT_INDEX, RawValue, SlotRange, Token, dequote, is_block_close, is_comment_line,
        parse_block_opening, split_terminator, split_words, tokenize,
    };

    fn assign(name: &str, range: Option<SlotRange>, value: &str) -> Token {
        Token::Assign {
            name: name.to_string(),
            range,
            value: Some(RawValue {
                text: value.to_string(),
                quoted: false,
            }),
        }
    }

    #[test]
    fn comment_markers_never_swallow_namelist_openings() {
        assert!(is_comment_line("! comment"));
        assert!(is_comment_line("# note"));
        assert!(is_comment_line("* star"));
        assert!(is_comment_line("C fortran column one"));
        assert!(!is_comment_line("&FRESCO hcm=0.1 /"));
        assert!(!is_comment_line("Calculation header"));
    }

    #[test]
    fn block_opening_lowercases_name_and_keeps_rest() {
        let opening = parse_block_opening("&POT kp=1 type=0 /").expect("opening should parse");
        assert_eq!(opening.name, "pot");
        assert_eq!(opening.rest, " kp=1 type=0 /");

        let compact = parse_block_opening("&BIN/").expect("compact opening should parse");
        assert_eq!(compact.name, "bin");
        assert_eq!(compact.rest, "/");
    }

    #[test]
    fn terminator_ignores_slashes_inside_quotes() {
        assert_eq!(
            split_terminator("tmp='/tmp/' hcm=0.1 /"),
            ("tmp='/tmp/' hcm=0.1 ", true)
        );
        assert_eq!(split_terminator("hcm=0.1"), ("hcm=0.1", false));
        assert_eq!(split_terminator("iter=1 &end"), ("iter=1 ", true));
        assert!(is_block_close("&END"));
        assert!(is_block_close("/"));
    }

    #[test]
    fn words_split_on_whitespace_and_commas_outside_quotes() {
        assert_eq!(
            split_words("namep='11 Be', massp=11,zp=4"),
            vec!["namep='11 Be'", "massp=11", "zp=4"]
        );
    }

    #[test]
    fn spaced_equals_signs_are_folded() {
        let tokens = tokenize("be = 0.504 n =1 l= 0");
        assert_eq!(
            tokens,
            vec![
                assign("be", None, "0.504"),
                assign("n", None, "1"),
                assign("l", None, "0"),
            ]
        );
    }

    #[test]
    fn array_keys_capture_slot_range() {
        let tokens = tokenize("p(1:3)=10 20 30");
        assert_eq!(
            tokens[0],
            assign("p", Some(SlotRange { start: 1, end: 3 }), "10")
        );
        assert_eq!(tokens.len(), 3);
        assert!(matches!(tokens[2], Token::Value(_)));
    }

    #[test]
    fn dangling_key_reports_missing_value() {
        let tokens = tokenize("elab=");
        assert_eq!(
            tokens,
            vec![Token::Assign {
                name: "elab".to_string(),
                range: None,
                value: None,
            }]
        );
    }

    #[test]
    fn malformed_keys_become_junk() {
        let tokens = tokenize("9x=1 p(3:1)=2");
        assert!(matches!(tokens[0], Token::Junk(_)));
        assert!(matches!(tokens[1], Token::Junk(_)));
    }

    #[test]
    fn terminator_scan_survives_multibyte_text_after_ampersand() {
        assert_eq!(split_terminator("hcm=0.1 &éé rmatch=60 /"), ("hcm=0.1 &éé rmatch=60 ", true));
        assert_eq!(split_terminator("&é"), ("&é", false));
        assert_eq!(split_terminator("x=1 $énd"), ("x=1 $énd", false));
    }

    #[test]
    fn out_of_bounds_ranges_become_junk() {
        let tokens = tokenize("p(-2147483648:2147483647)=1 p(1:2000000000)=1 p(0:9999)=1");
        assert!(matches!(tokens[0], Token::Junk(_)));
        assert!(matches!(tokens[1], Token::Junk(_)));
        assert_eq!(
            tokens[2],
            assign("p", Some(SlotRange { start: 0, end: MAX_SLOT_INDEX }), "1")
        );
        assert!(!SlotRange { start: i32::MIN, end: i32::MAX }.is_empty());
        assert!(SlotRange { start: i32::MAX, end: i32::MIN }.is_empty());
    }

    #[test]
    fn dequote_strips_quotes_and_trailing_separators() {
        assert_eq!(
            dequote("'11Be'"),
            RawValue {
                text: "11Be".to_string(),
                quoted: true
            }
        );
        assert_eq!(dequote("60,").text, "60");
        assert_eq!(dequote("1.2/").text, "1.2");
    }
}
