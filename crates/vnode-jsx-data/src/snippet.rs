//! JSX snippet reader.
//!
//! Reads a single JSX element like `<input type="checkbox" checked on-change={toggle} />`
//! into a tag, a flat property bag and children, so it can be pushed through
//! a [`Renderer`]. Expressions are not evaluated: `{...}` values that are not
//! JSON literals stay as [`PropValue::Expression`].

use regex::Regex;
use std::sync::LazyLock;

use crate::shim::{Host, Renderer};
use crate::tag::Tag;
use crate::value::{PropValue, PropertyBag};

/// A parsed snippet element.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetElement {
    pub tag: Tag,

    /// Props as written, in source order
    pub props: PropertyBag,

    pub children: Vec<SnippetChild>,

    /// Whether self-closing
    pub self_closing: bool,
}

/// A child of a snippet element.
#[derive(Debug, Clone, PartialEq)]
pub enum SnippetChild {
    Text(String),
    Element(SnippetElement),
}

/// Errors that can occur when reading a snippet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnippetError {
    #[error("Snippet is empty")]
    Empty,

    #[error("Unexpected end of snippet while reading {0}")]
    UnexpectedEnd(&'static str),

    #[error("Malformed tag at offset {0}")]
    MalformedTag(usize),

    #[error("Unterminated value starting at offset {0}")]
    UnterminatedValue(usize),

    #[error("Mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedClose { expected: String, found: String },

    #[error("Unexpected content after root element at offset {0}")]
    TrailingContent(usize),

    #[error("Spread attributes are not supported (offset {0})")]
    UnsupportedSpread(usize),
}

static TAG_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$.:\-]*").expect("Invalid tag name regex")
});

static ATTR_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Anything up to whitespace, '=', the end of the tag, a quote or a brace
    Regex::new(r#"^[^\s=/>"'{}]+"#).expect("Invalid attribute name regex")
});

/// Read a JSX snippet containing exactly one root element.
pub fn parse_snippet(source: &str) -> Result<SnippetElement, SnippetError> {
    let mut cursor = Cursor::new(source);
    cursor.skip_whitespace();
    if cursor.at_end() {
        return Err(SnippetError::Empty);
    }

    let element = cursor.element()?;

    cursor.skip_whitespace();
    if !cursor.at_end() {
        return Err(SnippetError::TrailingContent(cursor.pos));
    }
    Ok(element)
}

impl SnippetElement {
    /// Render this element and its children through a renderer.
    pub fn render<H: Host>(&self, renderer: &mut Renderer<H>) -> H::Node {
        let children = self
            .children
            .iter()
            .map(|child| match child {
                SnippetChild::Text(text) => renderer.host_mut().create_text(text),
                SnippetChild::Element(element) => element.render(renderer),
            })
            .collect();

        let data = if self.props.is_empty() {
            None
        } else {
            Some(self.props.clone())
        };
        renderer.h(self.tag.clone(), data, children)
    }
}

struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn take_match(&mut self, re: &Regex) -> Option<&'a str> {
        let found = re.find(self.rest())?.as_str();
        self.pos += found.len();
        Some(found)
    }

    fn element(&mut self) -> Result<SnippetElement, SnippetError> {
        let start = self.pos;
        if !self.eat("<") {
            return Err(SnippetError::MalformedTag(start));
        }
        let name = self
            .take_match(&TAG_NAME_RE)
            .ok_or(SnippetError::MalformedTag(start))?;
        let tag = Tag::from_name(name);

        let mut props = PropertyBag::new();
        loop {
            self.skip_whitespace();
            if self.eat("/>") {
                return Ok(SnippetElement {
                    tag,
                    props,
                    children: Vec::new(),
                    self_closing: true,
                });
            }
            if self.eat(">") {
                break;
            }
            match self.peek() {
                None => return Err(SnippetError::UnexpectedEnd("tag")),
                Some('{') => return Err(SnippetError::UnsupportedSpread(self.pos)),
                Some(_) => {}
            }

            let key = self
                .take_match(&ATTR_NAME_RE)
                .ok_or(SnippetError::MalformedTag(self.pos))?;
            self.skip_whitespace();
            let value = if self.eat("=") {
                self.skip_whitespace();
                self.attr_value()?
            } else {
                PropValue::Bool(true)
            };
            props.insert(key.to_string(), value);
        }

        let children = self.children(name)?;
        Ok(SnippetElement {
            tag,
            props,
            children,
            self_closing: false,
        })
    }

    fn attr_value(&mut self) -> Result<PropValue, SnippetError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let start = self.pos;
                self.pos += 1;
                let rest = self.rest();
                let end = rest
                    .find(quote)
                    .ok_or(SnippetError::UnterminatedValue(start))?;
                self.pos += end + 1;
                Ok(PropValue::String(rest[..end].to_string()))
            }
            Some('{') => {
                let inner = self.braced()?;
                Ok(expression_value(inner))
            }
            Some(_) => Err(SnippetError::MalformedTag(self.pos)),
            None => Err(SnippetError::UnexpectedEnd("attribute value")),
        }
    }

    /// Read a `{...}` block, returning its contents. Nested braces and quoted
    /// strings are skipped over.
    fn braced(&mut self) -> Result<&'a str, SnippetError> {
        let start = self.pos;
        let mut depth = 0usize;
        let mut quote: Option<char> = None;
        let mut escaped = false;

        for (offset, c) in self.rest().char_indices() {
            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
                continue;
            }
            match c {
                '"' | '\'' | '`' => quote = Some(c),
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let inner = &self.source[start + 1..start + offset];
                        self.pos = start + offset + 1;
                        if inner.trim_start().starts_with("...") {
                            return Err(SnippetError::UnsupportedSpread(start));
                        }
                        return Ok(inner);
                    }
                }
                _ => {}
            }
        }

        Err(SnippetError::UnterminatedValue(start))
    }

    fn children(&mut self, name: &str) -> Result<Vec<SnippetChild>, SnippetError> {
        let mut children = Vec::new();

        loop {
            if self.at_end() {
                return Err(SnippetError::UnexpectedEnd("children"));
            }

            if self.rest().starts_with("</") {
                self.closing_tag(name)?;
                return Ok(children);
            }

            if self.rest().starts_with('<') {
                children.push(SnippetChild::Element(self.element()?));
            } else if self.rest().starts_with('{') {
                let inner = self.braced()?;
                let text = match expression_value(inner) {
                    PropValue::String(s) => s,
                    _ => inner.trim().to_string(),
                };
                children.push(SnippetChild::Text(text));
            } else {
                let rest = self.rest();
                let end = rest.find(['<', '{']).unwrap_or(rest.len());
                if let Some(text) = clean_jsx_text(&rest[..end]) {
                    children.push(SnippetChild::Text(text));
                }
                self.pos += end;
            }
        }
    }

    fn closing_tag(&mut self, expected: &str) -> Result<(), SnippetError> {
        let start = self.pos;
        self.eat("</");
        self.skip_whitespace();
        let found = self.take_match(&TAG_NAME_RE).unwrap_or("");
        self.skip_whitespace();
        if !self.eat(">") {
            return Err(SnippetError::MalformedTag(start));
        }
        if found != expected {
            return Err(SnippetError::MismatchedClose {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }
}

/// Collapse a raw text run the way JSX does.
///
/// Whitespace touching a line break is removed and the remaining lines are
/// joined with single spaces; whitespace within a line is kept. Returns
/// `None` when nothing is left.
fn clean_jsx_text(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let last_line = lines.len() - 1;
    let last_non_empty = lines
        .iter()
        .rposition(|line| line.chars().any(|c| c != ' ' && c != '\t'));

    let mut text = String::new();
    for (i, line) in lines.iter().enumerate() {
        let mut line: &str = line;
        if i != 0 {
            line = line.trim_start_matches([' ', '\t']);
        }
        if i != last_line {
            line = line.trim_end_matches([' ', '\t']);
        }
        if line.is_empty() {
            continue;
        }
        text.push_str(&line.replace('\t', " "));
        if Some(i) != last_non_empty {
            text.push(' ');
        }
    }

    (!text.is_empty()).then_some(text)
}

/// Interpret the contents of a `{...}` block.
///
/// JSON literals (`123`, `true`, `"x"`, `[1, 2]`) and single-quoted strings
/// become values; everything else stays an opaque expression.
fn expression_value(source: &str) -> PropValue {
    let source = source.trim();

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(source) {
        return PropValue::from(json);
    }

    if let Some(inner) = source
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
    {
        if !inner.contains('\'') {
            return PropValue::String(inner.to_string());
        }
    }

    PropValue::Expression(source.to_string())
}
