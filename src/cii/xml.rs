use quick_xml::de::from_str;
use quick_xml::se::Serializer;
use serde::Serialize;

use super::Document;
use crate::core::ConversionError;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Decode CII XML bytes into a document tree.
///
/// Unknown elements are ignored; a malformed document or a missing mandatory
/// element is reported as [`ConversionError::Xml`].
pub fn from_cii_xml(data: &[u8]) -> Result<Document, ConversionError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| ConversionError::Xml(format!("XML UTF-8 error: {e}")))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    from_str(text).map_err(|e| ConversionError::Xml(format!("XML parse error: {e}")))
}

/// Encode a document tree as indented CII XML with an XML declaration.
pub fn to_cii_xml(doc: &Document) -> Result<String, ConversionError> {
    let mut buf = String::from(XML_DECLARATION);
    let mut ser = Serializer::new(&mut buf);
    ser.indent(' ', 2);
    doc.serialize(ser)
        .map_err(|e| ConversionError::Xml(format!("XML write error: {e}")))?;
    Ok(buf)
}
