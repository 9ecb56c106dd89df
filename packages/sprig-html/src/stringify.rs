use sprig_traits::to_kebab_case;
use sprig_vdom::{Props, VElement, VNode, Value, resolve_name};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Serialize a node description to HTML without mounting it.
///
/// Properties are written the way mounting would apply them: `className` becomes `class`, style
/// maps become a `style` attribute and `true` becomes a bare attribute. Keys, refs, listeners and
/// falsy values produce nothing. Portals render elsewhere and produce an empty string.
pub fn to_html_string(node: &VNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &VNode) {
    match node {
        VNode::Text(text) => out.push_str(&html_escape::encode_text(text)),
        VNode::Element(element) => write_element(out, element),
        VNode::Portal(_) => {}
    }
}

fn write_element(out: &mut String, element: &VElement) {
    let name = resolve_name(&element.tag);
    let tag = &*name.local;

    out.push('<');
    out.push_str(tag);
    write_props(out, &element.props);

    if VOID_ELEMENTS.contains(&tag) && element.children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_props(out: &mut String, props: &Props) {
    for (name, value) in props.iter() {
        if name == "key" || name == "ref" || name.starts_with("on") {
            continue;
        }
        let name = if name == "className" { "class" } else { name };

        let text = match value {
            Value::Null | Value::Bool(false) => continue,
            Value::Bool(true) => {
                out.push(' ');
                out.push_str(name);
                continue;
            }
            Value::Map(styles) if name == "style" => style_text(styles),
            Value::Listener(_) | Value::Component(_) | Value::Ref(_) | Value::Node(_) => continue,
            other => match other.to_text() {
                Some(text) => text,
                None => continue,
            },
        };

        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(&text));
        out.push('"');
    }
}

fn style_text(styles: &Props) -> String {
    let mut css = String::new();
    for (name, value) in styles.iter() {
        let Some(value) = value.to_text().filter(|v| !v.is_empty()) else {
            continue;
        };
        if !css.is_empty() {
            css.push(' ');
        }
        css.push_str(&to_kebab_case(name));
        css.push_str(": ");
        css.push_str(&value);
        css.push(';');
    }
    css
}
