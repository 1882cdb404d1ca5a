//! Parsing of document text into a node tree.
//!
//! Handles the XML subset that saved sheets use, plus what a hand-edited file
//! may reasonably contain: declarations, comments, CDATA, attributes (ignored)
//! and character references. Whitespace between child nodes is layout and is
//! dropped; text of a leaf node is kept exactly.

use super::{DocumentError, Node};

/// Parse document text. The returned node is the document's root element.
pub fn parse_document(input: &str) -> Result<Node, DocumentError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut parser = Parser { input, pos: 0 };

    parser.skip_misc()?;
    if parser.at_end() {
        return Err(DocumentError::malformed(parser.pos, "no root node"));
    }
    let root = parser.parse_element()?;
    parser.skip_misc()?;
    if !parser.at_end() {
        return Err(DocumentError::malformed(
            parser.pos,
            "content after the root node",
        ));
    }
    Ok(root)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn starts_with(&self, pattern: &str) -> bool {
        self.rest().starts_with(pattern)
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Advance past the next occurrence of `terminator`.
    fn skip_past(&mut self, terminator: &str) -> Result<&'a str, DocumentError> {
        let rest = self.rest();
        let end = rest.find(terminator).ok_or(DocumentError::UnexpectedEof)?;
        self.pos += end + terminator.len();
        Ok(&rest[..end])
    }

    fn expect(&mut self, pattern: &str) -> Result<(), DocumentError> {
        if self.at_end() {
            return Err(DocumentError::UnexpectedEof);
        }
        if !self.starts_with(pattern) {
            return Err(DocumentError::malformed(
                self.pos,
                format!("expected '{}'", pattern),
            ));
        }
        self.pos += pattern.len();
        Ok(())
    }

    /// Skip declarations, processing instructions, comments, doctype and
    /// whitespace outside the root element.
    fn skip_misc(&mut self) -> Result<(), DocumentError> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<?") {
                self.skip_past("?>")?;
            } else if self.starts_with("<!--") {
                self.skip_past("-->")?;
            } else if self.starts_with("<!") {
                self.skip_past(">")?;
            } else {
                return Ok(());
            }
        }
    }

    fn read_name(&mut self) -> Result<&'a str, DocumentError> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || matches!(c, '/' | '>' | '=' | '<'))
            .unwrap_or(rest.len());
        if end == 0 {
            return Err(DocumentError::malformed(self.pos, "expected a name"));
        }
        self.pos += end;
        Ok(&rest[..end])
    }

    /// Skip attributes of an opening tag. Returns `true` when the tag
    /// self-closes.
    fn skip_attributes(&mut self) -> Result<bool, DocumentError> {
        loop {
            self.skip_whitespace();
            if self.at_end() {
                return Err(DocumentError::UnexpectedEof);
            }
            if self.starts_with("/>") {
                self.pos += 2;
                return Ok(true);
            }
            if self.starts_with(">") {
                self.pos += 1;
                return Ok(false);
            }

            self.read_name()?;
            self.skip_whitespace();
            self.expect("=")?;
            self.skip_whitespace();
            let quote = if self.starts_with("\"") {
                "\""
            } else if self.starts_with("'") {
                "'"
            } else {
                return Err(DocumentError::malformed(
                    self.pos,
                    "attribute value must be quoted",
                ));
            };
            self.pos += 1;
            self.skip_past(quote)?;
        }
    }

    /// Parse one element, starting at its `<`.
    fn parse_element(&mut self) -> Result<Node, DocumentError> {
        self.expect("<")?;
        let name = self.read_name()?.to_string();
        if self.skip_attributes()? {
            return Ok(Node::empty(name));
        }

        let mut text = String::new();
        let mut children = Vec::new();
        loop {
            if self.at_end() {
                return Err(DocumentError::UnexpectedEof);
            }

            if self.starts_with("</") {
                self.pos += 2;
                let closing = self.skip_past(">")?.trim();
                if closing != name {
                    return Err(DocumentError::MismatchedTag {
                        expected: name,
                        found: closing.to_string(),
                    });
                }
                break;
            } else if self.starts_with("<!--") {
                self.skip_past("-->")?;
            } else if self.starts_with("<![CDATA[") {
                self.pos += "<![CDATA[".len();
                text.push_str(self.skip_past("]]>")?);
            } else if self.starts_with("<?") {
                self.skip_past("?>")?;
            } else if self.starts_with("<") {
                children.push(self.parse_element()?);
            } else {
                let rest = self.rest();
                let end = rest.find('<').unwrap_or(rest.len());
                let start = self.pos;
                self.pos += end;
                text.push_str(&unescape(&rest[..end], start)?);
            }
        }

        if children.is_empty() {
            Ok(Node::text(name, text))
        } else {
            Ok(Node::parent(name, children))
        }
    }
}

/// Resolve entity and character references in raw text.
fn unescape(raw: &str, offset: usize) -> Result<String, DocumentError> {
    if !raw.contains('&') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let semi = after.find(';').ok_or_else(|| {
            DocumentError::malformed(
                offset + (raw.len() - rest.len()) + amp,
                "unterminated entity reference",
            )
        })?;
        let entity = &after[..semi];
        out.push(resolve_entity(entity)?);
        rest = &after[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn resolve_entity(entity: &str) -> Result<char, DocumentError> {
    let code = match entity {
        "amp" => return Ok('&'),
        "lt" => return Ok('<'),
        "gt" => return Ok('>'),
        "quot" => return Ok('"'),
        "apos" => return Ok('\''),
        _ => {
            if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok()
            } else {
                None
            }
        }
    };

    code.and_then(char::from_u32)
        .ok_or_else(|| DocumentError::InvalidEntity(entity.to_string()))
}
