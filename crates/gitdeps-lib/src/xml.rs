use crate::error::GitDepsError;
use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A parsed XML element with its attributes and children in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Element>,
    /// Concatenated character data, `None` when absent or whitespace-only.
    pub text: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn required_attribute(&self, name: &str) -> Result<&str, GitDepsError> {
        self.attribute(name).ok_or_else(|| {
            GitDepsError::schema(format!("attribute {} on <{}>", name, self.name))
        })
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn required_child(&self, name: &str) -> Result<&Element, GitDepsError> {
        self.child(name).ok_or_else(|| {
            GitDepsError::schema(format!("element <{}> inside <{}>", name, self.name))
        })
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Parses a complete XML document and returns its single root element.
///
/// Comments, processing instructions and the XML declaration are skipped.
pub fn parse_document(text: &str) -> Result<Element, GitDepsError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<(Element, String)> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| GitDepsError::Parse {
            position: reader.error_position() as u64,
            reason: e.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                let element = element_from_start(&start, position)?;
                stack.push((element, String::new()));
            }
            Event::Empty(start) => {
                let element = element_from_start(&start, position)?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::End(_) => {
                // quick-xml verifies that end names match their start tags.
                let Some((mut element, text)) = stack.pop() else {
                    return Err(GitDepsError::Parse {
                        position,
                        reason: "closing tag without a matching opening tag".to_string(),
                    });
                };
                if !text.trim().is_empty() {
                    element.text = Some(text);
                }
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::Text(content) => {
                let content = content.unescape().map_err(|e| GitDepsError::Parse {
                    position,
                    reason: e.to_string(),
                })?;
                match stack.last_mut() {
                    Some((_, text)) => text.push_str(&content),
                    None if content.trim().is_empty() => {}
                    None => {
                        return Err(GitDepsError::Parse {
                            position,
                            reason: "text outside of the root element".to_string(),
                        });
                    }
                }
            }
            Event::CData(content) => {
                let content = content.into_inner();
                match stack.last_mut() {
                    Some((_, text)) => text.push_str(&String::from_utf8_lossy(&content)),
                    None => {
                        return Err(GitDepsError::Parse {
                            position,
                            reason: "CDATA outside of the root element".to_string(),
                        });
                    }
                }
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some((open, _)) = stack.last() {
        return Err(GitDepsError::Parse {
            position: reader.buffer_position() as u64,
            reason: format!("unexpected end of input, <{}> is not closed", open.name),
        });
    }

    root.ok_or_else(|| GitDepsError::Parse {
        position: 0,
        reason: "document has no root element".to_string(),
    })
}

fn element_from_start(start: &BytesStart<'_>, position: u64) -> Result<Element, GitDepsError> {
    let parse_error = |e: quick_xml::Error| GitDepsError::Parse {
        position,
        reason: e.to_string(),
    };

    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| parse_error(e.into()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(parse_error)?;
        element.attributes.insert(key, value.into_owned());
    }
    Ok(element)
}

fn attach(
    stack: &mut [(Element, String)],
    root: &mut Option<Element>,
    element: Element,
    position: u64,
) -> Result<(), GitDepsError> {
    match stack.last_mut() {
        Some((parent, _)) => parent.children.push(element),
        None if root.is_some() => {
            return Err(GitDepsError::Parse {
                position,
                reason: format!("second root element <{}>", element.name),
            });
        }
        None => *root = Some(element),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_keeps_attributes_and_children_in_order() {
        let root = parse_document(
            r#"<?xml version="1.0" encoding="utf-8"?>
            <DependencyManifest BaseUrl="https://cdn.test/base" Version="2">
              <!-- packs -->
              <Packs>
                <Pack Hash="h1" RemotePath="r1"/>
                <Pack Hash="h2" RemotePath="r2"></Pack>
              </Packs>
            </DependencyManifest>"#,
        )
        .unwrap();

        assert_eq!(root.name, "DependencyManifest");
        assert_eq!(
            root.attributes.keys().collect::<Vec<_>>(),
            vec!["BaseUrl", "Version"]
        );
        assert_eq!(root.text, None);

        let packs = root.required_child("Packs").unwrap();
        let hashes: Vec<_> = packs
            .children_named("Pack")
            .map(|pack| pack.attribute("Hash").unwrap())
            .collect();
        assert_eq!(hashes, vec!["h1", "h2"]);
    }

    #[test]
    fn test_parse_document_unescapes_text_and_attributes() {
        let root = parse_document(r#"<a href="x?a=1&amp;b=2">Tom &amp; <![CDATA[<Jerry>]]></a>"#)
            .unwrap();

        assert_eq!(root.attribute("href"), Some("x?a=1&b=2"));
        assert_eq!(root.text.as_deref(), Some("Tom & <Jerry>"));
    }

    #[test]
    fn test_parse_document_rejects_unclosed_element() {
        let err = parse_document("<DependencyManifest><Packs>").unwrap_err();
        assert!(matches!(err, GitDepsError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn test_parse_document_rejects_mismatched_end_tag() {
        let err = parse_document("<a><b></a></b>").unwrap_err();
        assert!(matches!(err, GitDepsError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn test_parse_document_rejects_duplicate_attribute() {
        let err = parse_document(r#"<Pack Hash="h1" Hash="h2"/>"#).unwrap_err();
        assert!(matches!(err, GitDepsError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn test_parse_document_rejects_second_root() {
        let err = parse_document("<a/><b/>").unwrap_err();
        assert!(matches!(err, GitDepsError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn test_parse_document_rejects_empty_input() {
        let err = parse_document("   ").unwrap_err();
        assert!(matches!(err, GitDepsError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn test_required_accessors_report_schema_errors() {
        let root = parse_document("<DependencyManifest/>").unwrap();

        let err = root.required_attribute("BaseUrl").unwrap_err();
        assert!(matches!(err, GitDepsError::Schema { .. }));
        assert!(err.to_string().contains("BaseUrl"));

        let err = root.required_child("Packs").unwrap_err();
        assert!(matches!(err, GitDepsError::Schema { .. }));
        assert!(err.to_string().contains("Packs"));
    }
}
