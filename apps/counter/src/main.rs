//! A counter rendered into a headless document.
//!
//! Clicks are simulated by dispatching events at the buttons. Every click queues a state
//! mutation and the queue is drained once per "frame", so several clicks between frames lead to
//! a single re-render. The document is printed after each frame.
//!
//! Usage: `counter [CLICKS_PER_FRAME...]`

use std::cell::RefCell;
use std::rc::Rc;

use sprig::directives::class_map;
use sprig::sprig_traits::NodeId;
use sprig::{
    BaseDocument, DomEventData, Error, Listener, MicrotaskQueue, MouseEventData, Renderer, State,
    VNode, html,
};

#[derive(Clone, Debug, Default)]
struct Counter {
    count: i64,
    history: Vec<i64>,
}

struct Actions {
    increment: Listener,
    decrement: Listener,
    reset: Listener,
}

impl Actions {
    fn new(state: &State<Counter>) -> Self {
        let update = |delta: i64| {
            let state = state.clone();
            Listener::new(move |_| {
                state.set_state(move |counter| {
                    counter.history.push(counter.count);
                    counter.count += delta;
                })
            })
        };
        let s = state.clone();
        Actions {
            increment: update(1),
            decrement: update(-1),
            reset: Listener::new(move |_| s.replace(Counter::default())),
        }
    }
}

fn view(counter: &Counter, actions: &Actions) -> Result<Option<VNode>, Error> {
    let history: Vec<VNode> = counter
        .history
        .iter()
        .map(|value| html!("<li>{}</li>", *value))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();
    let class = class_map(&[
        ("count", true),
        ("negative", counter.count < 0),
        ("zero", counter.count == 0),
    ]);

    html!(
        "<div id=\"app\">
            <h1 class={}>{}</h1>
            <button id=\"dec\" onClick={}>-</button>
            <button id=\"inc\" onClick={}>+</button>
            <button id=\"reset\" onClick={}>reset</button>
            <ul>{}</ul>
        </div>",
        class,
        counter.count,
        actions.decrement.clone(),
        actions.increment.clone(),
        actions.reset.clone(),
        history,
    )
}

fn click(doc: &Rc<RefCell<BaseDocument>>, id: &str) {
    let mut doc = doc.borrow_mut();
    if let Some(target) = doc.get_element_by_id(id) {
        doc.dispatch_event(target, DomEventData::Click(MouseEventData::default()));
    }
}

fn main() -> Result<(), Error> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt::init();

    let frames: Vec<i64> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    let frames = if frames.is_empty() { vec![3, -1, 2] } else { frames };

    let queue = MicrotaskQueue::new();
    let state = State::new(Counter::default(), &queue);
    let actions = Rc::new(Actions::new(&state));
    let doc = Rc::new(RefCell::new(BaseDocument::default()));
    let renderer = Rc::new(RefCell::new(Renderer::new()));
    let root: NodeId = doc.borrow().root_node().id;

    let render = {
        let (doc, renderer, actions) = (doc.clone(), renderer.clone(), actions.clone());
        move |counter: &Counter| match view(counter, &actions) {
            Ok(node) => {
                let mut doc = doc.borrow_mut();
                renderer.borrow_mut().render(&mut doc.mutate(), node, Some(root));
            }
            Err(err) => eprintln!("Failed to render: {err}"),
        }
    };
    render(&state.get());
    state.on(render);

    for (frame, clicks) in frames.iter().enumerate() {
        let button = if *clicks < 0 { "dec" } else { "inc" };
        for _ in 0..clicks.unsigned_abs() {
            click(&doc, button);
        }
        queue.run_until_idle();

        println!("Frame {frame}: count = {}", state.get().count);
        doc.borrow().print_tree();
    }

    click(&doc, "reset");
    queue.run_until_idle();
    println!("{}", doc.borrow().outer_html(root));

    Ok(())
}
