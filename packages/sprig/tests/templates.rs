use sprig::directives::{class_map, uid};
use sprig::{Error, Props, Value, compile, element, html, props, text, to_html_string};

#[test]
fn self_closing_tags_compile_to_bare_elements() {
    assert_eq!(
        compile(&["<div />"], vec![]).unwrap(),
        vec![Value::Node(element("div", Props::new(), vec![]))]
    );
    assert_eq!(
        compile(&["<input disabled />"], vec![]).unwrap(),
        vec![Value::Node(element("input", props! { "disabled" => true }, vec![]))]
    );
}

#[test]
fn macro_placeholders() {
    let extra = Value::Map(props! { "id" => "nav", "role" => "menu" });
    let node = html!("<ul ...{} class={}>{}</ul>", extra, class_map(&[("open", true), ("hidden", false)]), "x")
        .unwrap()
        .unwrap();
    assert_eq!(
        node,
        element(
            "ul",
            props! { "id" => "nav", "role" => "menu", "class" => "open" },
            vec![text("x")]
        )
    );
    assert_eq!(to_html_string(&node), "<ul id=\"nav\" role=\"menu\" class=\"open\">x</ul>");
}

#[test]
fn generated_ids_can_be_used_as_attributes() {
    let id = uid(8);
    let node = html!("<label for={}>Name</label>", id.clone()).unwrap().unwrap();
    assert_eq!(to_html_string(&node), format!("<label for=\"{id}\">Name</label>"));
}

#[test]
fn mismatched_closing_tags_are_errors() {
    assert_eq!(
        html!("<b>{}</i>", "x"),
        Err(Error::UnexpectedClosingTag {
            expected: "b".into(),
            found: "i".into()
        })
    );
}
