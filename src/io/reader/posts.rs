//! Post extraction from sanitized author files.
//!
//! Documents are expected to look like
//!
//! ```xml
//! <Blog>
//!   <date>02,August,2004</date>
//!   <post>text</post>
//!   ...
//! </Blog>
//! ```
//!
//! Only `post` elements that are direct children of the root are yielded.
//! The text of a post is the text preceding its first child element, if any,
//! and is kept verbatim.
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Error;

const BOM: char = '\u{feff}';

/// XML `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{d7ff}'
        | '\u{e000}'..='\u{fffd}'
        | '\u{10000}'..='\u{10ffff}')
}

/// XML `S` production, which is narrower than ASCII whitespace.
fn is_xml_space(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn check_chars(text: &str) -> Result<(), String> {
    match text.char_indices().find(|(_, c)| !is_xml_char(*c)) {
        Some((i, c)) => Err(format!("invalid character {:?} at offset {} in text", c, i)),
        None => Ok(()),
    }
}

/// Lazy iterator over the post texts of a document, in document order.
///
/// Structural problems (unbalanced tags, several roots, text outside of the root...)
/// are yielded as [Error::Parse], after which the iterator is exhausted.
pub struct Posts<'a> {
    reader: Reader<&'a [u8]>,
    post_tag: Vec<u8>,
    depth: usize,
    seen_root: bool,
    current: Option<String>,
    collecting: bool,
    done: bool,
}

impl<'a> Posts<'a> {
    pub fn new(content: &'a str, post_tag: &str) -> Self {
        let content = content.strip_prefix(BOM).unwrap_or(content);
        let mut reader = Reader::from_str(content);
        reader.trim_text(false);
        reader.check_end_names(true);

        Self {
            reader,
            post_tag: post_tag.as_bytes().to_vec(),
            depth: 0,
            seen_root: false,
            current: None,
            collecting: false,
            done: false,
        }
    }

    fn fail(&mut self, msg: String) -> Option<Result<String, Error>> {
        self.done = true;
        let pos = self.reader.buffer_position();
        Some(Err(Error::Parse(format!("{} (at byte {})", msg, pos))))
    }

    /// Bookkeeping for a new element at the current depth.
    /// Returns an error message on a second root.
    fn open(&mut self, name: &[u8]) -> Result<bool, String> {
        match self.depth {
            0 if self.seen_root => Err("more than one root element".to_string()),
            0 => {
                self.seen_root = true;
                Ok(false)
            }
            1 => Ok(name == self.post_tag.as_slice()),
            _ => {
                // a child element ends the post text
                self.collecting = false;
                Ok(false)
            }
        }
    }
}

impl<'a> Iterator for Posts<'a> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => return self.fail(e.to_string()),
            };

            match event {
                Event::Start(e) => {
                    match self.open(e.name().as_ref()) {
                        Ok(true) => {
                            self.current = Some(String::new());
                            self.collecting = true;
                        }
                        Ok(false) => (),
                        Err(msg) => return self.fail(msg),
                    }
                    self.depth += 1;
                }
                Event::Empty(e) => match self.open(e.name().as_ref()) {
                    Ok(true) => return Some(Ok(String::new())),
                    Ok(false) => (),
                    Err(msg) => return self.fail(msg),
                },
                Event::Text(t) => {
                    if self.depth == 0 {
                        if !t.iter().all(is_xml_space) {
                            return self.fail("text outside of the root element".to_string());
                        }
                        continue;
                    }
                    let text = match t.unescape() {
                        Ok(text) => text,
                        Err(e) => return self.fail(e.to_string()),
                    };
                    if let Err(msg) = check_chars(&text) {
                        return self.fail(msg);
                    }
                    if self.collecting {
                        if let Some(current) = self.current.as_mut() {
                            current.push_str(&text);
                        }
                    }
                }
                Event::CData(c) => {
                    if self.depth == 0 {
                        return self.fail("CDATA outside of the root element".to_string());
                    }
                    let text = match std::str::from_utf8(&c) {
                        Ok(text) => text,
                        Err(e) => return self.fail(e.to_string()),
                    };
                    if let Err(msg) = check_chars(text) {
                        return self.fail(msg);
                    }
                    if self.collecting {
                        if let Some(current) = self.current.as_mut() {
                            current.push_str(text);
                        }
                    }
                }
                Event::End(_) => {
                    if self.depth == 0 {
                        return self.fail("closing tag without opening tag".to_string());
                    }
                    self.depth -= 1;
                    if self.depth == 1 {
                        if let Some(post) = self.current.take() {
                            self.collecting = false;
                            return Some(Ok(post));
                        }
                    }
                }
                Event::Eof => {
                    if self.depth != 0 {
                        return self.fail(format!("{} unclosed element(s)", self.depth));
                    }
                    if !self.seen_root {
                        return self.fail("no root element".to_string());
                    }
                    debug!("reached end of document");
                    self.done = true;
                    return None;
                }
                // declarations, comments, processing instructions
                _ => (),
            }
        }
    }
}
