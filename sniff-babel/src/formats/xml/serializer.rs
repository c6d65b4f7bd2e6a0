use super::tree::{XmlElement, XmlNode};
use super::XmlOptions;
use crate::error::ConversionError;
use crate::format::Format;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt;

/// Build XML text from an element tree
///
/// Output starts with the XML declaration; each nested element goes on its
/// own line, indented by `options.indent` spaces per level. Text stays on the
/// line of its element and there is no newline after the root's closing tag.
pub fn serialize(root: &XmlElement, options: &XmlOptions) -> Result<String, ConversionError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', options.indent);

    let standalone = options.standalone.then_some("yes");
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), standalone)))
        .map_err(xml_error)?;
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), ConversionError> {
    let mut start = BytesStart::new(element.name.as_str());
    start.extend_attributes(
        element
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );

    let children: Vec<&XmlNode> = element
        .children
        .iter()
        .filter(|child| !child.is_blank())
        .collect();
    if children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(xml_error);
    }

    writer.write_event(Event::Start(start)).map_err(xml_error)?;
    for child in children {
        match child {
            XmlNode::Element(nested) => write_element(writer, nested)?,
            XmlNode::Text(text) => writer
                .write_event(Event::Text(BytesText::from_escaped(partial_escape(
                    text.as_str(),
                ))))
                .map_err(xml_error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(xml_error)
}

fn xml_error(err: impl fmt::Display) -> ConversionError {
    ConversionError::new(Format::Xml, err.to_string())
}
