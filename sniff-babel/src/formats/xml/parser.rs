use super::tree::{XmlElement, XmlNode};
use crate::error::ConversionError;
use crate::format::Format;
use roxmltree::{Node, NodeType};

const XML_PREFIX: &str = "xml";

/// Parse XML text into an owned element tree rooted at the document element
pub fn parse(source: &str) -> Result<XmlElement, ConversionError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| ConversionError::new(Format::Xml, e.to_string()))?;
    Ok(convert_element(doc.root_element()))
}

fn convert_element(node: Node) -> XmlElement {
    let mut attributes = declared_namespaces(node);
    for attr in node.attributes() {
        attributes.push((
            qualified_name(node, attr.namespace(), attr.name()),
            attr.value().to_string(),
        ));
    }

    let children = node
        .children()
        .filter_map(|child| match child.node_type() {
            NodeType::Element => Some(XmlNode::Element(convert_element(child))),
            NodeType::Text => child.text().map(|text| XmlNode::Text(text.to_string())),
            _ => None,
        })
        .collect();

    let tag = node.tag_name();
    XmlElement {
        name: qualified_name(node, tag.namespace(), tag.name()),
        attributes,
        children,
    }
}

/// `xmlns` attributes for namespaces that are in scope here but not on the parent
fn declared_namespaces(node: Node) -> Vec<(String, String)> {
    let parent = node.parent_element();
    node.namespaces()
        .filter(|ns| ns.name() != Some(XML_PREFIX))
        .filter(|ns| {
            !parent.is_some_and(|parent| {
                parent
                    .namespaces()
                    .any(|inherited| inherited.name() == ns.name() && inherited.uri() == ns.uri())
            })
        })
        .map(|ns| {
            let key = match ns.name() {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_string(),
            };
            (key, ns.uri().to_string())
        })
        .collect()
}

fn qualified_name(node: Node, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}
