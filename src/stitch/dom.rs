//! Owned XML element tree used by the tree stitching backend.
//!
//! Covers exactly what VAST creatives need: elements with attributes, text,
//! and CDATA children. Namespaces are carried opaquely in element names.

use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::StitchError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
    CData(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace an existing attribute or add it at the end.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn serialize(&self) -> Result<String, StitchError> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self)?;
        String::from_utf8(writer.into_inner()).map_err(|e| StitchError::Xml(e.to_string()))
    }
}

/// Parse a document into its root element.
pub(crate) fn parse(input: &str) -> Result<Element, StitchError> {
    let mut reader = Reader::from_str(input);
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => return Ok(element),
                }
            }
            Ok(Event::End(_)) => {
                let done = match stack.pop() {
                    Some(e) => e,
                    None => {
                        return Err(StitchError::Xml("unexpected closing tag".to_string()))
                    }
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(done)),
                    None => return Ok(done),
                }
            }
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| StitchError::Xml(e.to_string()))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(cdata)) => {
                let content = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::CData(content));
                }
            }
            Ok(Event::Decl(_)) | Ok(Event::Comment(_)) | Ok(Event::PI(_))
            | Ok(Event::DocType(_)) => {}
            Ok(Event::Eof) => {
                return Err(StitchError::Structural("document has no root element".to_string()))
            }
            Err(e) => return Err(StitchError::Xml(e.to_string())),
        }
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, StitchError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| StitchError::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| StitchError::Xml(e.to_string()))?
            .into_owned();
        element.attrs.push((key, value));
    }
    Ok(element)
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &Element,
) -> Result<(), StitchError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (k, v) in &element.attrs {
        start.push_attribute((k.as_str(), v.as_str()));
    }

    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| StitchError::Xml(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| StitchError::Xml(e.to_string()))?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e)?,
            Node::Text(t) => writer
                .write_event(Event::Text(BytesText::new(t)))
                .map_err(|e| StitchError::Xml(e.to_string()))?,
            Node::CData(c) => writer
                .write_event(Event::CData(BytesCData::new(c.as_str())))
                .map_err(|e| StitchError::Xml(e.to_string()))?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(|e| StitchError::Xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize_round_trip() {
        let input = "<VAST version=\"3.0\"><Ad id=\"a\"><InLine><AdTitle>hi</AdTitle></InLine></Ad></VAST>";
        let root = parse(input).unwrap();
        assert_eq!(root.name, "VAST");
        assert_eq!(root.attr("version"), Some("3.0"));
        assert_eq!(root.serialize().unwrap(), input);
    }

    #[test]
    fn test_cdata_preserved() {
        let input = "<Wrapper><VASTAdTagURI><![CDATA[https://a.com?x=1&y=2]]></VASTAdTagURI></Wrapper>";
        let root = parse(input).unwrap();
        assert_eq!(root.serialize().unwrap(), input);
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut e = Element::new("VAST");
        e.set_attr("version", "2.0");
        e.set_attr("version", "4.0");
        assert_eq!(e.attrs.len(), 1);
        assert_eq!(e.attr("version"), Some("4.0"));
    }

    #[test]
    fn test_empty_element_self_closes() {
        let e = Element::new("VAST");
        assert_eq!(e.serialize().unwrap(), "<VAST/>");
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse("no xml here").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_declaration_is_skipped() {
        let root = parse("<?xml version=\"1.0\"?><VAST version=\"2.0\"/>").unwrap();
        assert_eq!(root.name, "VAST");
    }
}
