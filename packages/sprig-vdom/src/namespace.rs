use markup5ever::{LocalName, Namespace, QualName, ns};

/// The namespace registered for a tag prefix, if any
pub fn namespace_for_prefix(prefix: &str) -> Option<Namespace> {
    match prefix {
        "svg" => Some(ns!(svg)),
        "xhtml" => Some(ns!(html)),
        "xlink" => Some(ns!(xlink)),
        "xml" => Some(ns!(xml)),
        "xmlns" => Some(ns!(xmlns)),
        _ => None,
    }
}

/// Resolve a tag name to the name of the element to create.
///
/// - `svg:g` creates a `g` in the SVG namespace (the prefix must be at least two characters)
/// - `svg` creates an `svg` in the SVG namespace
/// - anything else creates an HTML element
///
/// Children do not inherit the namespace of their parent.
pub fn resolve_name(tag: &str) -> QualName {
    if let Some(idx) = tag.find(':').filter(|idx| *idx > 1) {
        let prefix = &tag[..idx];
        let local = tag[idx + 1..].split(':').next().unwrap_or_default();
        let ns = namespace_for_prefix(prefix).unwrap_or(ns!(html));
        return QualName::new(None, ns, LocalName::from(local));
    }

    let ns = namespace_for_prefix(tag).unwrap_or(ns!(html));
    QualName::new(None, ns, LocalName::from(tag))
}
