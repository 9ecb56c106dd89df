use sprig_traits::NodeId;

use crate::{Error, Props, VElement, VNode, VPortal, Value};

/// Build a node description.
///
/// A non-empty string `ty` becomes an element with that tag, lower-cased and trimmed. A component
/// `ty` is called straight away with the props and the children as given, and whatever it
/// returns is returned unchanged. Anything else is an error.
pub fn make(ty: Value, props: Option<Props>, children: Vec<Value>) -> Result<Value, Error> {
    match ty {
        Value::Str(tag) if !tag.trim().is_empty() => Ok(Value::Node(VNode::Element(VElement {
            tag: tag.trim().to_lowercase(),
            props: props.unwrap_or_default(),
            children: flatten(children),
        }))),
        Value::Component(component) => component.call(props.unwrap_or_default(), children),
        other => Err(Error::InvalidElementType(other.type_name().to_string())),
    }
}

/// Build an element description from already-built children
pub fn element(tag: &str, props: Props, children: Vec<VNode>) -> VNode {
    VNode::Element(VElement {
        tag: tag.trim().to_lowercase(),
        props,
        children,
    })
}

pub fn text(content: impl Into<String>) -> VNode {
    VNode::Text(content.into())
}

/// Describe `children` as rendering into the live node `target` instead of in place.
pub fn portal(children: impl Into<Value>, target: NodeId) -> VNode {
    VNode::Portal(VPortal {
        target,
        children: flatten(vec![children.into()]),
    })
}

/// Flatten nested lists into a list of nodes.
///
/// Nulls are dropped, scalars become text nodes. Maps, listeners, components and refs have
/// nothing to render and are dropped as well.
pub fn flatten(children: Vec<Value>) -> Vec<VNode> {
    fn flatten_into(out: &mut Vec<VNode>, value: Value) {
        match value {
            Value::Node(node) => out.push(node),
            Value::List(items) => {
                for item in items {
                    flatten_into(out, item);
                }
            }
            Value::Str(s) => out.push(VNode::Text(s)),
            Value::Number(_) | Value::Bool(_) => {
                if let Some(text) = value.to_text() {
                    out.push(VNode::Text(text));
                }
            }
            Value::Null
            | Value::Map(_)
            | Value::Listener(_)
            | Value::Component(_)
            | Value::Ref(_) => {}
        }
    }

    let mut out = Vec::with_capacity(children.len());
    for child in children {
        flatten_into(&mut out, child);
    }
    out
}
