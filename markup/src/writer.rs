use crate::Element;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// One indentation step per nesting level.
const INDENT: &str = "    ";

/// Serializes an element tree to pretty-printed XML text: declaration
/// header, one element per line, leaf text inline. Identical trees
/// always serialize to byte-identical text.
pub fn write_document(root: &Element) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }

    let text = element.text.as_deref().unwrap_or("");

    if element.children.is_empty() && text.is_empty() {
        out.push('<');
        out.push_str(&element.name);
        out.push_str("/>\n");
        return;
    }

    out.push('<');
    out.push_str(&element.name);
    out.push('>');
    out.push_str(&escape_xml(text));

    if element.children.is_empty() {
        out.push_str("</");
        out.push_str(&element.name);
        out.push_str(">\n");
        return;
    }

    out.push('\n');
    for child in &element.children {
        write_element(out, child, depth + 1);
    }
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push_str(">\n");
}

/// Escape XML special characters in text content.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
