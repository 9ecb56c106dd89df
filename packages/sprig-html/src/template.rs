use std::fmt;

use sprig_vdom::{Error, Props, VNode, Value, flatten, make};

/// Compile a template into the list of its top-level items.
///
/// `segments` are the literal pieces of the template and `values` the values embedded between
/// them, so `segments.len()` is expected to be `values.len() + 1`. Text and embedded values are
/// returned as-is at the top level; elements are built with [`make`], which also expands
/// components.
///
/// Fails when a closing tag does not match the element it closes. Other malformed markup is not
/// detected and gives unspecified results.
pub fn compile(segments: &[&str], values: Vec<Value>) -> Result<Vec<Value>, Error> {
    Compiler::new(segments, values).run()
}

/// Compile a template and return its first top-level item as a node.
///
/// An empty template (or one holding nothing but whitespace) gives `None`. A template without
/// any tags gives its text unchanged.
pub fn html(segments: &[&str], values: Vec<Value>) -> Result<Option<VNode>, Error> {
    let first = compile(segments, values)?.into_iter().next();
    Ok(first.and_then(|value| flatten(vec![value]).into_iter().next()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Text,
    TagStart,
    TagEnd,
    PropName,
    PropValue,
}

/// Position of the next character to read
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cursor {
    segment: usize,
    offset: usize,
}

/// The name of an element: literal text, or a value embedded in tag position
#[derive(Clone, Debug, PartialEq)]
enum TagName {
    Name(String),
    Value(Value),
}

impl TagName {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Str(name) => TagName::Name(name.trim().to_string()),
            other => TagName::Value(other),
        }
    }

    fn into_value(self) -> Value {
        match self {
            TagName::Name(name) => Value::Str(name),
            TagName::Value(value) => value,
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagName::Name(name) => f.write_str(name),
            TagName::Value(value) => write!(f, "<{}>", value.type_name()),
        }
    }
}

/// An element whose opening tag is being read
struct OpenTag {
    name: TagName,
    props: Props,
    /// The property name waiting for its value
    prop_name: String,
}

/// An element whose children are being read
struct Frame {
    /// `None` for the top level
    element: Option<(TagName, Props)>,
    children: Vec<Value>,
}

struct Compiler {
    segments: Vec<Vec<char>>,
    values: Vec<Option<Value>>,
    cursor: Cursor,

    mode: Mode,
    buffer: String,
    /// A value embedded in tag position, which replaces the buffer as the tag name
    tag_value: Option<Value>,
    open_tag: Option<OpenTag>,
    quote: Option<char>,

    stack: Vec<Frame>,
}

impl Compiler {
    fn new(segments: &[&str], values: Vec<Value>) -> Self {
        Compiler {
            segments: segments.iter().map(|s| s.chars().collect()).collect(),
            values: values.into_iter().map(Some).collect(),
            cursor: Cursor::default(),
            mode: Mode::Text,
            buffer: String::new(),
            tag_value: None,
            open_tag: None,
            quote: None,
            stack: vec![Frame {
                element: None,
                children: Vec::new(),
            }],
        }
    }

    fn run(mut self) -> Result<Vec<Value>, Error> {
        while self.cursor.segment < self.segments.len() {
            while let Some(c) = self.char_at(self.cursor.offset) {
                let next = self.char_at(self.cursor.offset + 1);
                self.step(c, next)?;
                self.cursor.offset += 1;
            }

            self.cursor.offset = 0;
            let value = self
                .values
                .get_mut(self.cursor.segment)
                .and_then(Option::take);
            if let Some(value) = value {
                self.embed(value);
            }
            self.cursor.segment += 1;
        }

        self.finish()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.segments
            .get(self.cursor.segment)
            .and_then(|segment| segment.get(offset))
            .copied()
    }

    fn step(&mut self, c: char, next: Option<char>) -> Result<(), Error> {
        match self.mode {
            Mode::Text => {
                if c == '<' {
                    self.flush_text();
                    self.mode = Mode::TagStart;
                } else {
                    self.buffer.push(c);
                }
            }
            Mode::TagStart => {
                let empty = self.buffer.trim().is_empty() && self.tag_value.is_none();
                if c == '/' && empty {
                    self.buffer.clear();
                    self.mode = Mode::TagEnd;
                } else if c == '/' && next == Some('>') {
                    let name = self.take_tag_name();
                    self.push_child(make(name.into_value(), Some(Props::new()), Vec::new())?);
                    self.mode = Mode::Text;
                    self.cursor.offset += 1;
                } else if c == '>' {
                    let name = self.take_tag_name();
                    self.open(name, Props::new());
                } else if c.is_whitespace() {
                    if !empty {
                        self.open_tag = Some(OpenTag {
                            name: self.take_tag_name(),
                            props: Props::new(),
                            prop_name: String::new(),
                        });
                        self.mode = Mode::PropName;
                    }
                } else {
                    self.buffer.push(c);
                }
            }
            Mode::TagEnd => {
                if c == '>' {
                    self.close()?;
                } else {
                    self.buffer.push(c);
                }
            }
            Mode::PropName => {
                if c == '/' && next == Some('>') {
                    self.commit_flag();
                    if let Some(tag) = self.open_tag.take() {
                        self.push_child(make(tag.name.into_value(), Some(tag.props), Vec::new())?);
                    }
                    self.mode = Mode::Text;
                    self.cursor.offset += 1;
                } else if c == '>' {
                    self.commit_flag();
                    if let Some(tag) = self.open_tag.take() {
                        self.open(tag.name, tag.props);
                    }
                } else if c == '=' {
                    if let Some(tag) = self.open_tag.as_mut() {
                        tag.prop_name = self.buffer.trim().to_string();
                    }
                    self.buffer.clear();
                    self.mode = Mode::PropValue;
                    self.quote = next.filter(|q| *q == '"' || *q == '\'');
                    if self.quote.is_some() {
                        self.cursor.offset += 1;
                    }
                } else if c.is_whitespace() {
                    self.commit_flag();
                } else {
                    self.buffer.push(c);
                }
            }
            Mode::PropValue => {
                if Some(c) == self.quote {
                    let value = std::mem::take(&mut self.buffer);
                    self.commit_value(Value::Str(value));
                } else {
                    self.buffer.push(c);
                }
            }
        }
        Ok(())
    }

    /// Handle the value embedded after the current segment
    fn embed(&mut self, value: Value) {
        match self.mode {
            Mode::PropValue => {
                let quote = self.quote;
                self.buffer.clear();
                self.commit_value(value);
                // Skip the closing quote of `name="${value}"`
                let next_segment = self.segments.get(self.cursor.segment + 1);
                if quote.is_some() && next_segment.and_then(|s| s.first()).copied() == quote {
                    self.cursor.offset = 1;
                }
            }
            Mode::PropName if self.buffer.trim() == "..." => {
                if let (Some(tag), Value::Map(props)) = (self.open_tag.as_mut(), &value) {
                    tag.props.assign(props);
                }
                self.buffer.clear();
            }
            Mode::TagStart | Mode::TagEnd => {
                self.buffer.clear();
                self.tag_value = Some(value);
            }
            Mode::Text => {
                self.flush_text();
                self.push_child(value);
            }
            Mode::PropName => {}
        }
    }

    fn flush_text(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        if !text.trim().is_empty() {
            self.push_child(Value::Str(text));
        }
    }

    fn take_tag_name(&mut self) -> TagName {
        let buffer = std::mem::take(&mut self.buffer);
        match self.tag_value.take() {
            Some(value) => TagName::from_value(value),
            None => TagName::Name(buffer.trim().to_string()),
        }
    }

    fn push_child(&mut self, child: Value) {
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(child);
        }
    }

    /// Start reading the children of an element
    fn open(&mut self, name: TagName, props: Props) {
        self.stack.push(Frame {
            element: Some((name, props)),
            children: Vec::new(),
        });
        self.mode = Mode::Text;
    }

    /// Finish the element on top of the stack, checking it against the closing tag just read
    fn close(&mut self) -> Result<(), Error> {
        let found = self.take_tag_name();
        let expected = match self.stack.last().and_then(|frame| frame.element.as_ref()) {
            Some((name, _)) => name,
            None => {
                return Err(Error::UnexpectedClosingTag {
                    expected: String::new(),
                    found: found.to_string(),
                });
            }
        };
        if *expected != found {
            return Err(Error::UnexpectedClosingTag {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }

        self.pop_element()?;
        self.mode = Mode::Text;
        Ok(())
    }

    fn pop_element(&mut self) -> Result<(), Error> {
        if self.stack.len() < 2 {
            return Ok(());
        }
        let Some(Frame {
            element: Some((name, props)),
            children,
        }) = self.stack.pop()
        else {
            return Ok(());
        };
        let element = make(name.into_value(), Some(props), children)?;
        self.push_child(element);
        Ok(())
    }

    /// Commit a bare property name as `true`
    fn commit_flag(&mut self) {
        let name = std::mem::take(&mut self.buffer);
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(tag) = self.open_tag.as_mut() {
            tag.props.insert(name, true);
        }
    }

    fn commit_value(&mut self, value: Value) {
        if let Some(tag) = self.open_tag.as_mut() {
            let name = std::mem::take(&mut tag.prop_name);
            tag.props.insert(name, value);
        }
        self.quote = None;
        self.mode = Mode::PropName;
    }

    /// Flush trailing text and close any elements left open
    fn finish(mut self) -> Result<Vec<Value>, Error> {
        if self.mode == Mode::Text {
            self.flush_text();
        }
        while self.stack.len() > 1 {
            self.pop_element()?;
        }
        Ok(self.stack.pop().map(|frame| frame.children).unwrap_or_default())
    }
}
