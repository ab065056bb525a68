//! Namespace-resolved element tree built from quick-xml events
//!
//! The checks ask questions like "every `w:hyperlink` below this element, in
//! document order", so XML parts are loaded into a small owned tree instead of
//! being streamed.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use super::error::{DocxError, DocxResult};

/// WordprocessingML main namespace (`w:`)
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace (`r:`)
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Package relationships namespace, default namespace of `.rels` parts
pub const PACKAGE_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Deepest element nesting accepted by [`XmlElement::parse`]
///
/// The tree is dropped recursively; deeper input is rejected as malformed.
pub const MAX_DEPTH: usize = 256;

/// An element or attribute name with its resolved namespace URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlName {
    pub namespace: Option<String>,
    pub local: String,
}

impl XmlName {
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local == local
    }
}

#[derive(Debug, Clone)]
pub struct XmlAttribute {
    pub name: XmlName,
    pub value: String,
}

#[derive(Debug, Clone)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct XmlElement {
    pub name: XmlName,
    pub attributes: Vec<XmlAttribute>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Parse a complete XML document and return its root element
    pub fn parse(xml: &[u8]) -> DocxResult<Self> {
        let mut reader = NsReader::from_reader(xml);
        let mut buf = Vec::new();
        let mut open: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(start) => {
                    check_depth(&open)?;
                    open.push(element_from_start(&reader, &start)?);
                }
                Event::Empty(start) => {
                    check_depth(&open)?;
                    let element = element_from_start(&reader, &start)?;
                    close_element(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| DocxError::Malformed("unexpected closing tag".to_string()))?;
                    close_element(&mut open, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(parent) = open.last_mut() {
                        parent
                            .children
                            .push(XmlNode::Text(text.unescape()?.into_owned()));
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = open.last_mut() {
                        let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                        parent.children.push(XmlNode::Text(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(unclosed) = open.last() {
            return Err(DocxError::Malformed(format!(
                "unclosed element '{}'",
                unclosed.name.local
            )));
        }

        root.ok_or_else(|| DocxError::Malformed("no root element".to_string()))
    }

    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.name.is(namespace, local)
    }

    /// Value of a namespaced attribute, e.g. `w:val`
    pub fn attr(&self, namespace: &str, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.is(namespace, local))
            .map(|a| a.value.as_str())
    }

    /// Value of an unprefixed attribute, e.g. `Id` on a relationship
    pub fn plain_attr(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace.is_none() && a.name.local == local)
            .map(|a| a.value.as_str())
    }

    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    pub fn children_named<'a>(
        &'a self,
        namespace: &'a str,
        local: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.child_elements().filter(move |e| e.is(namespace, local))
    }

    pub fn child(&self, namespace: &str, local: &str) -> Option<&XmlElement> {
        self.child_elements().find(|e| e.is(namespace, local))
    }

    /// All descendant elements in document order, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            pending: self.child_elements().rev().collect(),
        }
    }

    pub fn descendants_named<'a>(
        &'a self,
        namespace: &'a str,
        local: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.descendants().filter(move |e| e.is(namespace, local))
    }

    /// Concatenated direct text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }
}

/// Pre-order iterator over descendant elements
pub struct Descendants<'a> {
    pending: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.pending.pop()?;
        self.pending.extend(next.child_elements().rev());
        Some(next)
    }
}

fn element_from_start<R>(reader: &NsReader<R>, start: &BytesStart<'_>) -> DocxResult<XmlElement> {
    let (namespace, local) = reader.resolve_element(start.name());
    let name = XmlName {
        namespace: namespace_uri(namespace),
        local: String::from_utf8_lossy(local.as_ref()).into_owned(),
    };

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (namespace, local) = reader.resolve_attribute(attr.key);
        attributes.push(XmlAttribute {
            name: XmlName {
                namespace: namespace_uri(namespace),
                local: String::from_utf8_lossy(local.as_ref()).into_owned(),
            },
            value: attr.unescape_value()?.into_owned(),
        });
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn check_depth(open: &[XmlElement]) -> DocxResult<()> {
    if open.len() >= MAX_DEPTH {
        return Err(DocxError::Malformed(format!(
            "element nesting exceeds {} levels",
            MAX_DEPTH
        )));
    }
    Ok(())
}

fn close_element(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> DocxResult<()> {
    match open.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Element(element));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(DocxError::Malformed("multiple root elements".to_string())),
    }
}

fn namespace_uri(result: ResolveResult<'_>) -> Option<String> {
    match result {
        ResolveResult::Bound(namespace) => {
            Some(String::from_utf8_lossy(namespace.as_ref()).into_owned())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolves_prefixes() {
        let xml = br#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body><w:p><w:r><w:t xml:space="preserve"> Hello &amp; bye </w:t></w:r></w:p></w:body>
</w:document>"#;

        let root = XmlElement::parse(xml).unwrap();
        assert!(root.is(W_NS, "document"));

        let texts: Vec<String> = root.descendants_named(W_NS, "t").map(|t| t.text()).collect();
        assert_eq!(texts, vec![" Hello & bye ".to_string()]);
    }

    #[test]
    fn test_descendants_in_document_order() {
        let xml = br#"<a xmlns="urn:x"><b><c/></b><d/></a>"#;
        let root = XmlElement::parse(xml).unwrap();
        let order: Vec<&str> = root.descendants().map(|e| e.name.local.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_plain_and_namespaced_attributes() {
        let xml = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships" xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<Relationship Id="rId1" Target="https://example.com" w:val="x"/></Relationships>"#;
        let root = XmlElement::parse(xml).unwrap();
        let rel = root.child(PACKAGE_RELS_NS, "Relationship").unwrap();
        assert_eq!(rel.plain_attr("Id"), Some("rId1"));
        assert_eq!(rel.attr(W_NS, "val"), Some("x"));
        assert_eq!(rel.plain_attr("val"), None);
    }

    #[test]
    fn test_nesting_depth_is_bounded() {
        let nested = |depth: usize| format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth));

        assert!(XmlElement::parse(nested(MAX_DEPTH).as_bytes()).is_ok());

        let err = XmlElement::parse(nested(200_000).as_bytes()).unwrap_err();
        assert!(matches!(err, DocxError::Malformed(_)));
        assert_eq!(
            err.to_string(),
            format!("Malformed XML: element nesting exceeds {} levels", MAX_DEPTH)
        );

        let empty_too_deep = format!("{}<b/>{}", "<a>".repeat(MAX_DEPTH), "</a>".repeat(MAX_DEPTH));
        assert!(XmlElement::parse(empty_too_deep.as_bytes()).is_err());
    }

    #[test]
    fn test_malformed_xml_is_error() {
        assert!(XmlElement::parse(b"<a><b></a>").is_err());
        assert!(XmlElement::parse(b"").is_err());
    }
}
