use std::ops::Deref;

use markup5ever::QualName;

/// A single `name="value"` pair set on an element
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// The attributes of an element, in the order they were first set
#[derive(Clone, Debug, Default)]
pub struct Attributes {
    inner: Vec<Attribute>,
}

impl Attributes {
    pub fn new(inner: Vec<Attribute>) -> Self {
        Self { inner }
    }

    pub fn get(&self, name: &QualName) -> Option<&str> {
        self.inner
            .iter()
            .find(|attr| attr.name == *name)
            .map(|attr| attr.value.as_str())
    }

    /// Set the value of an attribute. Returns `false` if it already had that value.
    pub fn set(&mut self, name: QualName, value: &str) -> bool {
        match self.inner.iter_mut().find(|attr| attr.name == name) {
            Some(attr) if attr.value == value => false,
            Some(attr) => {
                attr.value = value.to_string();
                true
            }
            None => {
                self.inner.push(Attribute {
                    name,
                    value: value.to_string(),
                });
                true
            }
        }
    }

    pub fn remove(&mut self, name: &QualName) -> Option<Attribute> {
        let idx = self.inner.iter().position(|attr| attr.name == *name);
        idx.map(|idx| self.inner.remove(idx))
    }
}

impl Deref for Attributes {
    type Target = [Attribute];
    fn deref(&self) -> &[Attribute] {
        &self.inner
    }
}
