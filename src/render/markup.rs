/// One markup node: an element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Escaped character data.
    Text(String),
}

/// A markup element with ordered attributes and children.
///
/// Attribute and child order is preserved exactly as built, so a projection
/// over the same input yields byte-equal output.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, written verbatim.
    pub name: String,
    /// Ordered `(key, value)` attribute pairs.
    pub attrs: Vec<(String, String)>,
    /// Ordered child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute, builder-style.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Append a child element, builder-style.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text child, builder-style.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Look up the first attribute with the given key.
    pub fn attr_value(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text runs.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Serialize to a markup string.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (k, v) in &self.attrs {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            escape_into(v, out, true);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write(out),
                Node::Text(t) => escape_into(t, out, false),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

fn escape_into(s: &str, out: &mut String, in_attr: bool) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Format a float attribute value without trailing zeros (`0.85`, `12`, `-4`).
pub(crate) fn fmt_num(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_nested_elements_and_self_closing_tags() {
        let el = Element::new("g")
            .attr("id", "row")
            .child(Element::new("rect").attr("width", "3"))
            .child(Element::new("text").text("Świt"));
        assert_eq!(
            el.to_markup(),
            "<g id=\"row\"><rect width=\"3\"/><text>Świt</text></g>"
        );
    }

    #[test]
    fn escapes_attribute_values_and_text() {
        let el = Element::new("a")
            .attr("href", "https://example.com/?a=1&b=\"2\"")
            .text("fish & <chips>");
        let markup = el.to_markup();
        assert!(markup.contains("a=1&amp;b=&quot;2&quot;"));
        assert!(markup.contains("fish &amp; &lt;chips&gt;"));
    }

    #[test]
    fn fmt_num_drops_trailing_zeros() {
        assert_eq!(fmt_num(0.85), "0.85");
        assert_eq!(fmt_num(12.0), "12");
        assert_eq!(fmt_num(-4.0), "-4");
    }
}
