use std::cell::Cell;
use std::rc::Rc;

use sprig::sprig_traits::{Field, FieldValue, NodeId};
use sprig::sprig_vdom::resolve_name;
use sprig::{
    BaseDocument, DocumentConfig, DomEventData, Listener, LiveTree, MouseEventData, Mutation,
    Props, Renderer, VNode, Value, element, html, props, text,
};

fn recording_doc() -> BaseDocument {
    BaseDocument::new(DocumentConfig {
        record_mutations: true,
        ..Default::default()
    })
}

fn container(doc: &mut BaseDocument) -> NodeId {
    let mut mutr = doc.mutate();
    let id = mutr.create_element(resolve_name("main"));
    mutr.append_children(0, &[id]);
    drop(mutr);
    doc.take_mutations();
    id
}

fn children(doc: &BaseDocument, id: NodeId) -> Vec<NodeId> {
    doc.get_node(id).map(|node| node.children.clone()).unwrap_or_default()
}

fn count(mutations: &[Mutation], f: impl Fn(&Mutation) -> bool) -> usize {
    mutations.iter().filter(|m| f(m)).count()
}

#[test]
fn rerendering_updates_text_in_place() {
    let mut doc = recording_doc();
    let root = container(&mut doc);
    let mut renderer = Renderer::new();
    let view = |name: &str| html!("<div>Hello {}</div>", name).unwrap();

    let first = renderer.render(&mut doc.mutate(), view("Bob"), Some(root));
    doc.take_mutations();
    let second = renderer.render(&mut doc.mutate(), view("Susan"), Some(root));

    assert_eq!(first, second);
    assert_eq!(children(&doc, root).len(), 1);
    assert_eq!(doc.text_content(root), "Hello Susan");

    let mutations = doc.take_mutations();
    assert_eq!(count(&mutations, |m| matches!(m, Mutation::ReplaceNode { .. })), 1);
    assert!(!mutations.iter().any(|m| matches!(m, Mutation::CreateElement { .. })));
}

#[test]
fn identical_renders_change_nothing() {
    let mut doc = recording_doc();
    let root = container(&mut doc);
    let mut renderer = Renderer::new();
    let on_click = Listener::new(|_| {});
    let view = || {
        html!(
            "<form class=\"f\" onSubmit={}><input value={} disabled /><p style={}>x</p></form>",
            on_click.clone(),
            "text",
            Value::Map(props! { "color" => "red" }),
        )
        .unwrap()
    };

    renderer.render(&mut doc.mutate(), view(), Some(root));
    doc.take_mutations();
    renderer.render(&mut doc.mutate(), view(), Some(root));
    assert!(doc.take_mutations().is_empty());
}

#[test]
fn only_the_changed_sibling_is_replaced() {
    let mut doc = recording_doc();
    let root = container(&mut doc);
    let mut renderer = Renderer::new();
    let view = |middle: &str| {
        Some(element(
            "nav",
            Props::new(),
            vec![
                element("button", Props::new(), vec![text("a")]),
                element(middle, Props::new(), vec![text("b")]),
                element("button", Props::new(), vec![text("c")]),
            ],
        ))
    };

    let nav = renderer.render(&mut doc.mutate(), view("button"), Some(root)).unwrap();
    let before = children(&doc, nav);
    doc.take_mutations();

    renderer.render(&mut doc.mutate(), view("div"), Some(root));
    let after = children(&doc, nav);
    let mutations = doc.take_mutations();

    assert_eq!(count(&mutations, |m| matches!(m, Mutation::ReplaceNode { .. })), 1);
    assert_eq!(count(&mutations, |m| matches!(m, Mutation::RemoveNode { .. })), 0);
    assert_eq!(before[0], after[0]);
    assert_ne!(before[1], after[1]);
    assert_eq!(before[2], after[2]);
    assert_eq!(doc.outer_html(nav), "<nav><button>a</button><div>b</div><button>c</button></nav>");
}

#[test]
fn child_lists_grow_and_shrink() {
    let mut doc = BaseDocument::default();
    let root = container(&mut doc);
    let mut renderer = Renderer::new();
    let view = |items: &[&str]| {
        let items: Vec<VNode> = items
            .iter()
            .filter_map(|item| html!("<li>{}</li>", *item).unwrap())
            .collect();
        html!("<ul>{}</ul>", items).unwrap()
    };

    let list = renderer.render(&mut doc.mutate(), view(&["a"]), Some(root)).unwrap();
    renderer.render(&mut doc.mutate(), view(&["a", "b", "c"]), Some(root));
    assert_eq!(doc.outer_html(list), "<ul><li>a</li><li>b</li><li>c</li></ul>");

    renderer.render(&mut doc.mutate(), view(&[]), Some(root));
    assert_eq!(doc.outer_html(list), "<ul></ul>");
    assert_eq!(children(&doc, root), vec![list]);
}

#[test]
fn styles_are_removed_between_renders() {
    let mut doc = BaseDocument::default();
    let root = container(&mut doc);
    let mut renderer = Renderer::new();

    let styled = html!(
        "<div style={}>Hi</div>",
        Value::Map(props! { "backgroundColor" => "red", "fontSize" => "12px" })
    )
    .unwrap();
    let div = renderer.render(&mut doc.mutate(), styled, Some(root)).unwrap();
    let style = |doc: &BaseDocument| {
        doc.get_node(div)
            .and_then(|node| node.element_data())
            .map(|el| el.style.to_css_text())
            .unwrap_or_default()
    };
    assert_eq!(style(&doc), "background-color: red; font-size: 12px;");

    let restyled = html!("<div style={}>Hi</div>", Value::Map(props! { "color" => "blue" })).unwrap();
    renderer.render(&mut doc.mutate(), restyled, Some(root));
    assert_eq!(style(&doc), "color: blue;");

    renderer.render(&mut doc.mutate(), html!("<div>Hi</div>").unwrap(), Some(root));
    assert_eq!(style(&doc), "");
    assert_eq!(doc.outer_html(div), "<div>Hi</div>");
}

#[test]
fn fields_follow_their_props() {
    let mut doc = BaseDocument::default();
    let root = container(&mut doc);
    let mut renderer = Renderer::new();
    let view = |value: &str, checked: bool| {
        html!("<input type=\"checkbox\" value={} checked={} />", value, checked).unwrap()
    };

    let input = renderer.render(&mut doc.mutate(), view("a", true), Some(root)).unwrap();
    let field = |doc: &BaseDocument, field: Field| {
        doc.get_node(input)
            .and_then(|node| node.element_data())
            .map(|el| el.field(field).clone())
            .unwrap_or_default()
    };
    assert_eq!(field(&doc, Field::Value), FieldValue::Text("a".into()));
    assert_eq!(field(&doc, Field::Checked), FieldValue::Bool(true));

    renderer.render(&mut doc.mutate(), view("b", false), Some(root));
    assert_eq!(field(&doc, Field::Value), FieldValue::Text("b".into()));
    assert_eq!(field(&doc, Field::Checked), FieldValue::Null);
}

#[test]
fn listeners_receive_bubbling_events() {
    let mut doc = BaseDocument::default();
    let root = container(&mut doc);
    let mut renderer = Renderer::new();
    let clicks = Rc::new(Cell::new(0));

    let c = clicks.clone();
    let first = Listener::new(move |_| c.set(c.get() + 1));
    let c = clicks.clone();
    let second = Listener::new(move |_| c.set(c.get() + 10));
    let view = |listener: &Listener| {
        html!("<div onClick={}><button id=\"go\">Go</button></div>", listener.clone()).unwrap()
    };

    renderer.render(&mut doc.mutate(), view(&first), Some(root));
    let button = doc.get_element_by_id("go").unwrap();
    doc.dispatch_event(button, DomEventData::Click(MouseEventData::default()));
    assert_eq!(clicks.get(), 1);

    renderer.render(&mut doc.mutate(), view(&second), Some(root));
    doc.dispatch_event(button, DomEventData::Click(MouseEventData::default()));
    assert_eq!(clicks.get(), 11);
}
