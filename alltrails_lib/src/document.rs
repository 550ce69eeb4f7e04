//! Parsed HTML document with typed, optional-returning queries.
//!
//! Parsing goes through html5ever, which recovers from unclosed tags, stray
//! attributes and broken nesting the same way a browser does. Queries take an
//! ordered list of CSS selectors; the first selector that matches anything
//! wins, so a list doubles as "current markup, then older markup".

use scraper::{ElementRef, Html, Selector};

/// Raised when a response body cannot produce any document tree.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("page body is empty")]
    Empty,
}

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

/// An element inside a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl Document {
    /// Builds a tree from raw HTML. Only an empty body is rejected.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let html = Html::parse_document(raw);
        if !html.errors.is_empty() {
            tracing::debug!("Recovered from {} HTML parse errors", html.errors.len());
        }
        Ok(Self { html })
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
        }
    }

    pub fn find_first(&self, selectors: &[&str]) -> Option<Node<'_>> {
        self.root().find_first(selectors)
    }

    pub fn find_all(&self, selectors: &[&str]) -> Vec<Node<'_>> {
        self.root().find_all(selectors)
    }

    /// Visible text of the whole page.
    pub fn text(&self) -> Option<String> {
        self.root().text()
    }
}

impl<'a> Node<'a> {
    /// First element matching the first selector that matches at all.
    pub fn find_first(&self, selectors: &[&str]) -> Option<Node<'a>> {
        selectors.iter().find_map(|raw| {
            let selector = compile(raw)?;
            let found = self.element.select(&selector).next();
            found.map(|element| Node { element })
        })
    }

    /// Every element matching the first selector that matches at all.
    pub fn find_all(&self, selectors: &[&str]) -> Vec<Node<'a>> {
        for raw in selectors {
            let Some(selector) = compile(raw) else {
                continue;
            };
            let found: Vec<Node<'a>> = self
                .element
                .select(&selector)
                .map(|element| Node { element })
                .collect();
            if !found.is_empty() {
                tracing::debug!("Selector {:?} matched {} element(s)", raw, found.len());
                return found;
            }
        }
        Vec::new()
    }

    /// Whitespace-collapsed text content, skipping script and style bodies.
    /// `None` when nothing visible remains.
    pub fn text(&self) -> Option<String> {
        let mut parts: Vec<&str> = Vec::new();
        for node in self.element.descendants() {
            if let scraper::Node::Text(text) = node.value() {
                let hidden = node
                    .parent()
                    .and_then(|parent| parent.value().as_element())
                    .is_some_and(|el| {
                        matches!(el.name(), "script" | "style" | "noscript" | "template")
                    });
                if !hidden {
                    parts.push(&**text);
                }
            }
        }
        let collapsed = parts
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if collapsed.is_empty() {
            None
        } else {
            Some(collapsed)
        }
    }

    /// Attribute value, `None` when missing or blank.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element
            .value()
            .attr(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

fn compile(raw: &str) -> Option<Selector> {
    match Selector::parse(raw) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!("Skipping invalid selector {:?}: {:?}", raw, e);
            None
        }
    }
}
