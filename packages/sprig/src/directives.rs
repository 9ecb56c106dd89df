//! Helpers for building property values in templates

use rand::Rng;

/// Length of the ids returned by [`uid`] when no length is given
pub const DEFAULT_UID_LEN: usize = 15;

const UID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Join the class names whose flag is set, in order.
///
/// ```
/// assert_eq!(sprig::directives::class_map(&[("foo bar", true), ("baz", false)]), "foo bar");
/// ```
pub fn class_map(classes: &[(&str, bool)]) -> String {
    class_names(classes.iter().filter(|(_, on)| *on).map(|(name, _)| *name))
}

/// Join class names with a space, skipping empty ones
pub fn class_names<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random id of `len` lower-case letters and digits
pub fn uid(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| UID_CHARS[rng.gen_range(0..UID_CHARS.len())] as char)
        .collect()
}
