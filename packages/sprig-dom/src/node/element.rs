use markup5ever::QualName;
use sprig_traits::events::Listener;
use sprig_traits::{Field, FieldValue};

use super::{Attributes, InlineStyle};

#[derive(Debug, Clone)]
pub struct ElementData {
    /// The elements tag name, namespace and prefix
    pub name: QualName,

    /// The elements attributes
    pub attrs: Attributes,

    /// The elements inline style. Kept apart from `attrs` and serialized as the `style` attribute.
    pub style: InlineStyle,

    pub checked: FieldValue,
    pub value: FieldValue,
    pub disabled: FieldValue,

    /// Event listeners keyed by event name, in registration order
    pub listeners: Vec<(String, Listener)>,
}

impl ElementData {
    pub fn new(name: QualName) -> Self {
        ElementData {
            name,
            attrs: Attributes::default(),
            style: InlineStyle::default(),
            checked: FieldValue::Null,
            value: FieldValue::Null,
            disabled: FieldValue::Null,
            listeners: Vec::new(),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        let attr = self.attrs.iter().find(|attr| &*attr.name.local == name)?;
        Some(&attr.value)
    }

    /// Detects the presence of the attribute, treating *any* value as truthy.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    pub fn field(&self, field: Field) -> &FieldValue {
        match field {
            Field::Checked => &self.checked,
            Field::Value => &self.value,
            Field::Disabled => &self.disabled,
        }
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> &mut FieldValue {
        match field {
            Field::Checked => &mut self.checked,
            Field::Value => &mut self.value,
            Field::Disabled => &mut self.disabled,
        }
    }

    pub fn listeners_for<'a>(&'a self, event_name: &'a str) -> impl Iterator<Item = &'a Listener> {
        self.listeners
            .iter()
            .filter(move |(name, _)| name == event_name)
            .map(|(_, listener)| listener)
    }

    /// Adds a listener unless the same listener is already registered for this event.
    pub(crate) fn add_listener(&mut self, event_name: &str, listener: Listener) -> bool {
        if self.listeners_for(event_name).any(|l| *l == listener) {
            return false;
        }
        self.listeners.push((event_name.to_string(), listener));
        true
    }

    pub(crate) fn remove_listener(&mut self, event_name: &str, listener: &Listener) -> bool {
        let idx = self
            .listeners
            .iter()
            .position(|(name, l)| name == event_name && l == listener);
        idx.map(|idx| self.listeners.remove(idx)).is_some()
    }
}
