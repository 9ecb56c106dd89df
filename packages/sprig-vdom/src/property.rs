use sprig_traits::{Field, FieldValue, LiveTree, NodeId, attr_name};

use crate::Value;

/// Apply the change of a single property on a live element from `old` to `new`.
///
/// `None` and `Value::Null` both mean the property is absent. Only the element itself is touched.
///
/// - `key` is ignored
/// - `ref` points the new [`NodeRef`](crate::NodeRef) at `node_id` and clears the old one if it
///   still points there
/// - `class` and `className` set the `class` attribute, to an empty string when absent
/// - `checked`, `value` and `disabled` are element fields rather than attributes
/// - `style` takes either style text or a map of declarations
/// - names starting with `on` attach listeners for the lower-cased remainder of the name
/// - anything else is a plain attribute, removed when absent
pub fn set_property<T: LiveTree + ?Sized>(
    tree: &mut T,
    node_id: NodeId,
    name: &str,
    new: Option<&Value>,
    old: Option<&Value>,
) {
    let new = new.filter(|value| !value.is_null());
    let old = old.filter(|value| !value.is_null());

    match name {
        "key" => {}
        "ref" => {
            if let Some(Value::Ref(handle)) = old {
                if handle.current() == Some(node_id) {
                    handle.set(None);
                }
            }
            if let Some(Value::Ref(handle)) = new {
                handle.set(Some(node_id));
            }
        }
        "class" | "className" => {
            let class = new.and_then(Value::to_text).unwrap_or_default();
            tree.set_attribute(node_id, attr_name("class"), &class);
        }
        "style" => match new {
            Some(Value::Str(css)) => tree.set_style_text(node_id, css),
            Some(Value::Map(declarations)) => {
                tree.set_style_text(node_id, "");
                for (property, value) in declarations.iter() {
                    let value = value.to_text().unwrap_or_default();
                    tree.set_style_property(node_id, property, &value);
                }
            }
            _ => tree.set_style_text(node_id, ""),
        },
        "checked" => set_field(tree, node_id, Field::Checked, new),
        "value" => set_field(tree, node_id, Field::Value, new),
        "disabled" => set_field(tree, node_id, Field::Disabled, new),
        _ if name.starts_with("on") => {
            let event_name = name[2..].to_lowercase();
            if let Some(Value::Listener(listener)) = old {
                tree.remove_event_listener(node_id, &event_name, listener);
            }
            if let Some(Value::Listener(listener)) = new {
                tree.add_event_listener(node_id, &event_name, listener.clone());
            }
        }
        _ => match new.and_then(Value::to_text) {
            Some(text) => tree.set_attribute(node_id, attr_name(name), &text),
            None => tree.clear_attribute(node_id, attr_name(name)),
        },
    }
}

fn set_field<T: LiveTree + ?Sized>(
    tree: &mut T,
    node_id: NodeId,
    field: Field,
    new: Option<&Value>,
) {
    let value = match new {
        None => FieldValue::Null,
        Some(Value::Bool(b)) => FieldValue::Bool(*b),
        Some(value) => value.to_text().map_or(FieldValue::Null, FieldValue::Text),
    };
    tree.set_field(node_id, field, value);
}
