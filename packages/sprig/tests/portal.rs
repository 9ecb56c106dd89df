use sprig::sprig_traits::NodeId;
use sprig::sprig_vdom::resolve_name;
use sprig::{BaseDocument, LiveTree, NodeRef, Props, Renderer, VNode, element, html, portal, props, text};

fn container(doc: &mut BaseDocument, tag: &str) -> NodeId {
    let mut mutr = doc.mutate();
    let id = mutr.create_element(resolve_name(tag));
    mutr.append_children(0, &[id]);
    id
}

fn node_types(doc: &BaseDocument, id: NodeId) -> Vec<u16> {
    doc.get_node(id)
        .map(|node| {
            node.children
                .iter()
                .filter_map(|child| doc.get_node(*child))
                .map(|child| child.node_type())
                .collect()
        })
        .unwrap_or_default()
}

fn dialog(message: &str, target: NodeId) -> VNode {
    portal(html!("<p class=\"dialog\">{}</p>", message).unwrap(), target)
}

fn page(content: Vec<VNode>) -> Option<VNode> {
    let mut children = vec![text("before")];
    children.extend(content);
    children.push(text("after"));
    Some(element("section", Props::new(), children))
}

#[test]
fn portal_mounts_elsewhere_and_is_cleaned_up() {
    let mut doc = BaseDocument::default();
    let overlay = container(&mut doc, "aside");
    let root = container(&mut doc, "main");
    let mut renderer = Renderer::new();

    let section = renderer
        .render(&mut doc.mutate(), page(vec![dialog("Saved", overlay)]), Some(root))
        .unwrap();
    assert_eq!(node_types(&doc, section), vec![3, 8, 3]);
    assert_eq!(doc.text_content(section), "beforeafter");
    assert_eq!(doc.inner_html(overlay), "<p class=\"dialog\">Saved</p>");

    renderer.render(&mut doc.mutate(), page(vec![]), Some(root));
    assert_eq!(node_types(&doc, section), vec![3, 3]);
    assert_eq!(doc.text_content(section), "beforeafter");
    assert_eq!(doc.inner_html(overlay), "");
}

#[test]
fn portal_children_are_updated_in_place() {
    let mut doc = BaseDocument::default();
    let overlay = container(&mut doc, "aside");
    let root = container(&mut doc, "main");
    let mut renderer = Renderer::new();

    renderer.render(&mut doc.mutate(), page(vec![dialog("One", overlay)]), Some(root));
    let paragraph = doc.elements_by_tag_name(overlay, "p");

    renderer.render(&mut doc.mutate(), page(vec![dialog("Two", overlay)]), Some(root));
    assert_eq!(doc.inner_html(overlay), "<p class=\"dialog\">Two</p>");
    assert_eq!(doc.elements_by_tag_name(overlay, "p"), paragraph);
}

#[test]
fn retargeting_moves_the_children() {
    let mut doc = BaseDocument::default();
    let first = container(&mut doc, "aside");
    let second = container(&mut doc, "aside");
    let root = container(&mut doc, "main");
    let mut renderer = Renderer::new();

    renderer.render(&mut doc.mutate(), page(vec![dialog("Hi", first)]), Some(root));
    renderer.render(&mut doc.mutate(), page(vec![dialog("Hi", second)]), Some(root));

    assert_eq!(doc.inner_html(first), "");
    assert_eq!(doc.inner_html(second), "<p class=\"dialog\">Hi</p>");
}

#[test]
fn portals_and_elements_replace_each_other() {
    let mut doc = BaseDocument::default();
    let overlay = container(&mut doc, "aside");
    let root = container(&mut doc, "main");
    let mut renderer = Renderer::new();
    let inline = || element("p", Props::new(), vec![text("inline")]);

    let section = renderer
        .render(&mut doc.mutate(), page(vec![inline()]), Some(root))
        .unwrap();
    renderer.render(&mut doc.mutate(), page(vec![dialog("Away", overlay)]), Some(root));
    assert_eq!(doc.text_content(section), "beforeafter");
    assert_eq!(doc.text_content(overlay), "Away");

    renderer.render(&mut doc.mutate(), page(vec![inline()]), Some(root));
    assert_eq!(doc.text_content(section), "beforeinlineafter");
    assert_eq!(doc.text_content(overlay), "");
}

#[test]
fn refs_inside_removed_portals_are_cleared() {
    let mut doc = BaseDocument::default();
    let overlay = container(&mut doc, "aside");
    let root = container(&mut doc, "main");
    let mut renderer = Renderer::new();
    let handle = NodeRef::new();

    let content = element("input", props! { "ref" => handle.clone() }, vec![]);
    renderer.render(
        &mut doc.mutate(),
        page(vec![portal(content, overlay)]),
        Some(root),
    );
    let input = handle.current().unwrap();
    assert_eq!(doc.get_node(input).unwrap().parent, Some(overlay));

    renderer.render(&mut doc.mutate(), None, Some(root));
    assert_eq!(handle.current(), None);
    assert!(doc.get_node(root).unwrap().children.is_empty());
    assert!(doc.get_node(overlay).unwrap().children.is_empty());
}
