//! DOM events and the listeners which receive them

use std::fmt;
use std::rc::Rc;

use crate::NodeId;

/// A callback attached to an element with `add_event_listener`.
///
/// Two listeners are equal when they share the same allocation, which is what
/// `remove_event_listener` matches on.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn(&mut DomEvent)>);

impl Listener {
    pub fn new(f: impl Fn(&mut DomEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &mut DomEvent) {
        (self.0)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

impl<F: Fn(&mut DomEvent) + 'static> From<F> for Listener {
    fn from(f: F) -> Self {
        Listener::new(f)
    }
}

#[derive(Debug, Clone)]
pub struct DomEvent {
    pub target: NodeId,
    /// Which is true if the event bubbles up through the DOM tree.
    pub bubbles: bool,
    /// which is true if the event can be canceled.
    pub cancelable: bool,
    pub current_target: Option<NodeId>,
    composed_path: Vec<NodeId>,
    /// Where true indicates that the default user agent action was prevented,
    /// and false indicates that it was not.
    pub default_prevented: bool,

    pub stop_propagation: bool,
    pub data: DomEventData,
}

impl DomEvent {
    pub fn new(target: NodeId, data: DomEventData, composed_path: Vec<NodeId>) -> Self {
        let mut cancelable = true;
        let mut bubbles = true;

        match data.name() {
            "input" => {
                cancelable = false;
            }
            "focus" | "blur" => {
                cancelable = false;
                bubbles = false;
            }
            _ => {}
        }

        Self {
            target,
            bubbles,
            cancelable,
            current_target: None,
            composed_path,
            default_prevented: false,

            stop_propagation: false,
            data,
        }
    }

    /// The target followed by its ancestors, innermost first
    pub fn composed_path(&self) -> &Vec<NodeId> {
        &self.composed_path
    }

    pub fn prevent_default(&mut self) {
        if !self.cancelable {
            return;
        }
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.stop_propagation = true;
    }

    /// Returns the name of the event ("click", "input", "keydown", etc)
    pub fn name(&self) -> &str {
        self.data.name()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomEventData {
    Click(MouseEventData),
    DoubleClick(MouseEventData),
    MouseDown(MouseEventData),
    MouseUp(MouseEventData),
    Input(InputEventData),
    Change(InputEventData),
    KeyDown(KeyEventData),
    KeyUp(KeyEventData),
    Focus,
    Blur,
    Submit,
    /// An application defined event, dispatched by name
    Custom(String),
}

impl DomEventData {
    pub fn name(&self) -> &str {
        match self {
            Self::Click(_) => "click",
            Self::DoubleClick(_) => "dblclick",
            Self::MouseDown(_) => "mousedown",
            Self::MouseUp(_) => "mouseup",
            Self::Input(_) => "input",
            Self::Change(_) => "change",
            Self::KeyDown(_) => "keydown",
            Self::KeyUp(_) => "keyup",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Submit => "submit",
            Self::Custom(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseEventData {
    pub client_x: f32,
    pub client_y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputEventData {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyEventData {
    pub key: String,
    pub shift_key: bool,
    pub ctrl_key: bool,
}
