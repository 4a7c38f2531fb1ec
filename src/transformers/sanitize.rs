/*! Markup sanitization

Blog files are only loosely XML: posts contain stray angle brackets, undeclared
entities and control characters that make parsers choke.

[Sanitizer] keeps a table of protected structural tags (`<Blog>`, `</Blog>`, `<post>`, ...)
and rewrites everything else in a single pass:

- `<` and `>` that are not part of a protected tag become `(` and `)`,
- `&nbsp` becomes a space,
- any other `&` is removed (entities are *not* decoded),
- characters of the Unicode general category `Cc` are removed.

This is lossy, and removed characters cannot be recovered.
Sanitizing already sanitized content is a no-op.
 !*/
use unic_ucd::GeneralCategory;

use super::Transform;

const NBSP: &str = "&nbsp";

pub struct Sanitizer {
    protected: Vec<String>,
}

impl Sanitizer {
    /// Protect the opening and closing forms of each of `tags`.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let protected = tags
            .into_iter()
            .flat_map(|tag| {
                let tag = tag.as_ref();
                [format!("<{}>", tag), format!("</{}>", tag)]
            })
            .collect();
        Self { protected }
    }

    /// Protected tag `rest` starts with, if any.
    fn protected_at(&self, rest: &str) -> Option<&str> {
        self.protected
            .iter()
            .find(|tag| rest.starts_with(tag.as_str()))
            .map(String::as_str)
    }

    pub fn sanitize(&self, content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(c) = rest.chars().next() {
            let mut consumed = c.len_utf8();
            match c {
                '<' => match self.protected_at(rest) {
                    Some(tag) => {
                        out.push_str(tag);
                        consumed = tag.len();
                    }
                    None => out.push('('),
                },
                '>' => out.push(')'),
                '&' => {
                    if rest.starts_with(NBSP) {
                        out.push(' ');
                        consumed = NBSP.len();
                    }
                }
                c if is_control(c) => (),
                c => out.push(c),
            }
            rest = &rest[consumed..];
        }

        out
    }
}

impl Default for Sanitizer {
    /// Protects the tags of the blog corpus: `Blog`, `post` and `date`.
    fn default() -> Self {
        Self::new(["Blog", "post", "date"])
    }
}

impl Transform for Sanitizer {
    fn transform_own(&self, content: String) -> String {
        self.sanitize(&content)
    }
}

#[inline]
fn is_control(c: char) -> bool {
    GeneralCategory::of(c) == GeneralCategory::Control
}
