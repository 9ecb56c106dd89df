use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use sprig_traits::NodeId;
use sprig_traits::events::{DomEvent, Listener};

use crate::{Error, Props, VNode};

/// Anything that can be embedded in a template: text, numbers, nested node descriptions, lists,
/// property maps, listeners, components and refs.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Node(VNode),
    List(Vec<Value>),
    Map(Props),
    Listener(Listener),
    Component(Component),
    Ref(NodeRef),
}

impl Value {
    pub fn listener(f: impl Fn(&mut DomEvent) + 'static) -> Self {
        Value::Listener(Listener::new(f))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `null`, `false`, `0`, `NaN` and the empty string are falsy. Everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&VNode> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn into_node(self) -> Option<VNode> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// The text of a scalar value, as it would appear in a text node or attribute.
    ///
    /// Lists join the text of their entries with a space. Everything else has no text.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s.clone()),
            Value::Number(n) => Some(format_number(*n)),
            Value::Bool(b) => Some(b.to_string()),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().filter_map(Value::to_text).collect();
                Some(parts.join(" "))
            }
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Node(_) => "node",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Listener(_) => "listener",
            Value::Component(_) => "component",
            Value::Ref(_) => "ref",
        }
    }
}

/// Numbers compare equal when both are `NaN`, so an unchanged value never looks changed.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Node(a), Value::Node(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Listener(a), Value::Listener(b)) => a == b,
            (Value::Component(a), Value::Component(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            _ => false,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        n.to_string()
    }
}

/// A function which renders a node description from its props and children.
///
/// Components are invoked as soon as the node referring to them is made, and are not retained.
#[derive(Clone)]
pub struct Component(Rc<dyn Fn(Props, Vec<Value>) -> Result<Value, Error>>);

impl Component {
    pub fn new(f: impl Fn(Props, Vec<Value>) -> Result<Value, Error> + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, props: Props, children: Vec<Value>) -> Result<Value, Error> {
        (self.0)(props, children)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// A handle which is pointed at the live node of the element it is bound to with `ref`.
///
/// The handle is cleared when that element is removed or the handle is unbound.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<NodeId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<NodeId> {
        self.0.get()
    }

    pub fn set(&self, node_id: Option<NodeId>) {
        self.0.set(node_id)
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.current()).finish()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}
impl_from_number!(f64, f32, i32, i64, u32, u64, usize);

impl From<VNode> for Value {
    fn from(value: VNode) -> Self {
        Value::Node(value)
    }
}

impl From<Props> for Value {
    fn from(value: Props) -> Self {
        Value::Map(value)
    }
}

impl From<Listener> for Value {
    fn from(value: Listener) -> Self {
        Value::Listener(value)
    }
}

impl From<Component> for Value {
    fn from(value: Component) -> Self {
        Value::Component(value)
    }
}

impl From<NodeRef> for Value {
    fn from(value: NodeRef) -> Self {
        Value::Ref(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::from(-1).is_truthy());
        assert!(Value::List(vec![]).is_truthy());
        assert!(Value::Map(Props::new()).is_truthy());
    }

    #[test]
    fn text_of_scalars() {
        assert_eq!(Value::from(1).to_text().as_deref(), Some("1"));
        assert_eq!(Value::from(1.5).to_text().as_deref(), Some("1.5"));
        assert_eq!(Value::Number(f64::INFINITY).to_text().as_deref(), Some("Infinity"));
        assert_eq!(Value::from(true).to_text().as_deref(), Some("true"));
        assert_eq!(
            Value::from(vec!["a", "b"]).to_text().as_deref(),
            Some("a b")
        );
        assert_eq!(Value::Null.to_text(), None);
        assert_eq!(Value::from(NodeRef::new()).to_text(), None);
    }

    #[test]
    fn nan_equals_itself() {
        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_eq!(Value::from(vec![f64::NAN]), Value::from(vec![f64::NAN]));
        assert_ne!(Value::Number(f64::NAN), Value::from(0));
        assert_ne!(Value::from(1), Value::from("1"));
    }

    #[test]
    fn options_become_null() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = NodeRef::new();
        assert_eq!(Value::from(a.clone()), Value::from(a.clone()));
        assert_ne!(Value::from(a), Value::from(NodeRef::new()));

        let c = Component::new(|_, _| Ok(Value::Null));
        assert_eq!(c, c.clone());
        assert_ne!(c, Component::new(|_, _| Ok(Value::Null)));
    }

    #[test]
    fn node_refs_are_shared() {
        let handle = NodeRef::new();
        let alias = handle.clone();
        handle.set(Some(4));
        assert_eq!(alias.current(), Some(4));
    }
}
