use crate::Value;

/// The properties of an element description, in the order they were written.
///
/// Two `Props` are equal when they hold the same names with equal values, in any order.
#[derive(Clone, Debug, Default)]
pub struct Props {
    inner: Vec<(String, Value)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a property, replacing any previous value in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.inner.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.inner.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.inner.iter().position(|(n, _)| n == name)?;
        Some(self.inner.remove(idx).1)
    }

    /// Copy every property of `other` into this map, overwriting on conflict
    pub fn assign(&mut self, other: &Props) {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
    }

    /// The `key` property, used to force replacement of an element
    pub fn key(&self) -> Option<&Value> {
        self.get("key")
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (name, value) in iter {
            props.insert(name, value);
        }
        props
    }
}

impl IntoIterator for Props {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

/// Build a [`Props`] from `name => value` pairs
///
/// ```
/// let props = sprig_vdom::props! { "align" => "center", "tabindex" => 2 };
/// assert_eq!(props.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $(props.insert($name, $value);)+
        props
    }};
}
