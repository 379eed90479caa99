use super::scanner::{
    RawValue, SlotRange, Token, is_block_close, is_comment_line, parse_block_opening,
    split_terminator, tokenize,
};
use super::value::{NamelistValue, Numeric};
use super::{Namelist, NamelistDocument, is_multi_value};
use crate::domain::InputProfile;
use serde::Serialize;
use std::collections::HashMap;
use std::iter::Peekable;
use std::vec::IntoIter;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MalformedToken,
    MissingValue,
    StrayText,
    UnclosedBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedText {
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseReport {
    pub skipped: Vec<SkippedText>,
}

impl ParseReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    fn skip(&mut self, line: usize, text: impl Into<String>, reason: SkipReason) {
        let text = text.into();
        debug!(line, text = %text, ?reason, "skipping namelist text");
        self.skipped.push(SkippedText { line, text, reason });
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParsedInput {
    pub document: NamelistDocument,
    pub report: ParseReport,
}

/// Best-effort parse of a FRESCO input deck. Never fails: anything that does
/// not read as an assignment is recorded in the report and skipped.
pub fn parse(text: &str) -> ParsedInput {
    let mut parser = DeckParser::default();
    for (index, line) in text.lines().enumerate() {
        parser.feed_line(index + 1, line);
    }
    parser.finish()
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Outside,
    Inside(Namelist),
}

#[derive(Debug, Default)]
struct DeckParser {
    state: ScanState,
    document: NamelistDocument,
    report: ParseReport,
    occurrences: HashMap<String, usize>,
}

impl DeckParser {
    fn feed_line(&mut self, line_number: usize, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment_line(trimmed) {
            return;
        }

        match std::mem::take(&mut self.state) {
            ScanState::Outside => self.feed_outside(line_number, trimmed),
            ScanState::Inside(block) => {
                if is_block_close(trimmed) {
                    self.close(block);
                } else if parse_block_opening(trimmed).is_some() {
                    self.report
                        .skip(block.source_line, format!("&{}", block.name), SkipReason::UnclosedBlock);
                    self.close(block);
                    self.feed_outside(line_number, trimmed);
                } else {
                    self.feed_parameters(block, line_number, trimmed);
                }
            }
        }
    }

    fn feed_outside(&mut self, line_number: usize, trimmed: &str) {
        if let Some(opening) = parse_block_opening(trimmed) {
            let key = self.block_key(&opening.name);
            let block = Namelist::new(opening.name, key, line_number);
            self.feed_parameters(block, line_number, opening.rest);
            return;
        }

        if trimmed.eq_ignore_ascii_case("NAMELIST") {
            self.document.profile = Some(InputProfile::Fresco);
        } else if trimmed.eq_ignore_ascii_case("CDCC") {
            self.document.profile = Some(InputProfile::Cdcc);
        } else if self.document.header.is_none()
            && self.document.profile.is_none()
            && self.document.blocks.is_empty()
        {
            self.document.header = Some(trimmed.to_string());
        } else {
            self.report.skip(line_number, trimmed, SkipReason::StrayText);
        }
    }

    fn feed_parameters(&mut self, mut block: Namelist, line_number: usize, text: &str) {
        let (body, closed) = split_terminator(text);
        assign_tokens(&mut block, tokenize(body), line_number, &mut self.report);
        if closed {
            self.close(block);
        } else {
            self.state = ScanState::Inside(block);
        }
    }

    fn close(&mut self, block: Namelist) {
        self.document.blocks.push(block);
    }

    fn block_key(&mut self, name: &str) -> String {
        let count = self.occurrences.entry(name.to_string()).or_insert(0);
        *count += 1;
        if name == "pot" {
            format!("pot{count}")
        } else if *count == 1 {
            name.to_string()
        } else {
            format!("{name}{count}")
        }
    }

    fn finish(mut self) -> ParsedInput {
        if let ScanState::Inside(block) = std::mem::take(&mut self.state) {
            self.report
                .skip(block.source_line, format!("&{}", block.name), SkipReason::UnclosedBlock);
            self.close(block);
        }
        ParsedInput {
            document: self.document,
            report: self.report,
        }
    }
}

fn assign_tokens(
    block: &mut Namelist,
    tokens: Vec<Token>,
    line_number: usize,
    report: &mut ParseReport,
) {
    let mut tokens = tokens.into_iter().peekable();
    while let Some(token) = tokens.next() {
        match token {
            Token::Assign {
                name,
                range: Some(range),
                value,
            } => assign_indexed(block, &name, range, value, &mut tokens, line_number, report),
            Token::Assign {
                name,
                range: None,
                value,
            } if is_multi_value(&name) => {
                assign_multi_value(block, name, value, &mut tokens, line_number, report)
            }
            Token::Assign {
                name,
                range: None,
                value,
            } => {
                let value = value.or_else(|| next_bare_value(&mut tokens));
                match value {
                    Some(raw) => block.assign(name, NamelistValue::from_token(&raw.text, raw.quoted)),
                    None => report.skip(line_number, format!("{name}="), SkipReason::MissingValue),
                }
            }
            Token::Value(raw) => report.skip(line_number, raw.text, SkipReason::MalformedToken),
            Token::Junk(text) => report.skip(line_number, text, SkipReason::MalformedToken),
        }
    }
}

fn assign_indexed(
    block: &mut Namelist,
    name: &str,
    range: SlotRange,
    first: Option<RawValue>,
    tokens: &mut Peekable<IntoIter<Token>>,
    line_number: usize,
    report: &mut ParseReport,
) {
    let mut values = Vec::new();
    match first {
        Some(raw) => match Numeric::parse(&raw.text) {
            Some(number) => values.push(number),
            None => report.skip(line_number, raw.text, SkipReason::MalformedToken),
        },
        None => values.extend(next_numeric(tokens)),
    }
    while values.len() < range.len() {
        let Some(number) = next_numeric(tokens) else {
            break;
        };
        values.push(number);
    }

    if values.is_empty() {
        report.skip(
            line_number,
            format!("{name}({}:{})=", range.start, range.end),
            SkipReason::MissingValue,
        );
        return;
    }
    block.assign_slots(name, range.start, values);
}

fn assign_multi_value(
    block: &mut Namelist,
    name: String,
    first: Option<RawValue>,
    tokens: &mut Peekable<IntoIter<Token>>,
    line_number: usize,
    report: &mut ParseReport,
) {
    let Some(first) = first.or_else(|| next_bare_value(tokens)) else {
        report.skip(line_number, format!("{name}="), SkipReason::MissingValue);
        return;
    };

    let parts: Option<Vec<Numeric>> = first
        .text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(Numeric::parse)
        .collect();
    let Some(mut values) = parts.filter(|values| !values.is_empty()) else {
        block.assign(name, NamelistValue::from_token(&first.text, first.quoted));
        return;
    };

    while let Some(number) = next_numeric(tokens) {
        values.push(number);
    }

    let value = if values.len() == 1 {
        NamelistValue::Number(values.remove(0))
    } else {
        NamelistValue::List(values)
    };
    block.assign(name, value);
}

fn next_bare_value(tokens: &mut Peekable<IntoIter<Token>>) -> Option<RawValue> {
    if !matches!(tokens.peek(), Some(Token::Value(_))) {
        return None;
    }
    match tokens.next() {
        Some(Token::Value(raw)) => Some(raw),
        _ => None,
    }
}

fn next_numeric(tokens: &mut Peekable<IntoIter<Token>>) -> Option<Numeric> {
    let Some(Token::Value(raw)) = tokens.peek() else {
        return None;
    };
    if raw.quoted {
        return None;
    }
    let number = Numeric::parse(&raw.text)?;
    tokens.next();
    Some(number)
}
