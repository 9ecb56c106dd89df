use std::fmt::Write;

use sprig_traits::to_kebab_case;

/// The inline style of an element, as an ordered list of declarations.
///
/// Property names are stored in their CSS (kebab-case) form. Names passed in camelCase, as a
/// script would write them (`backgroundColor`), are converted on the way in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    /// Parse a `style` attribute such as `color: red; margin-top: 4px`.
    ///
    /// Declarations without a `:` or with an empty name are skipped.
    pub fn parse(css: &str) -> Self {
        let mut style = InlineStyle::default();
        for declaration in css.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            style.set(name, value.trim());
        }
        style
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = to_kebab_case(name);
        self.declarations
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a declaration. An empty value removes it.
    pub fn set(&mut self, name: &str, value: &str) {
        let name = to_kebab_case(name);
        let idx = self.declarations.iter().position(|(n, _)| *n == name);
        match (idx, value.is_empty()) {
            (Some(idx), true) => {
                self.declarations.remove(idx);
            }
            (Some(idx), false) => {
                self.declarations[idx].1 = value.to_string();
            }
            (None, true) => {}
            (None, false) => self.declarations.push((name, value.to_string())),
        }
    }

    pub fn clear(&mut self) {
        self.declarations.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize back into `style` attribute syntax
    pub fn to_css_text(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{name}: {value};");
        }
        out
    }
}
