use crate::node::Node;
use crate::visitor::{visit_root, Scalar, Visitor};

/// One callback observed during a traversal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    PreVisit {
        type_name: &'static str,
    },
    Start {
        name: String,
        index: Option<usize>,
        type_name: &'static str,
    },
    Visit {
        name: String,
        index: Option<usize>,
    },
    Value {
        name: String,
        kind: &'static str,
        value: String,
    },
    End {
        name: String,
        index: Option<usize>,
    },
    PostVisit {
        type_name: &'static str,
    },
}

/// Visitor that records every callback in order
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<Event>,
}

impl EventRecorder {
    /// Record a full traversal rooted at `node`.
    pub fn record<N: Node + ?Sized>(node: &N) -> Vec<Event> {
        let mut recorder = Self::default();
        visit_root(node, &mut recorder);
        recorder.events
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Visitor for EventRecorder {
    fn pre_visit(&mut self, node: &dyn Node) -> bool {
        self.events.push(Event::PreVisit {
            type_name: node.type_name(),
        });
        true
    }

    fn visit_start(&mut self, name: &str, index: Option<usize>, node: &dyn Node) {
        self.events.push(Event::Start {
            name: name.to_string(),
            index,
            type_name: node.type_name(),
        });
    }

    fn visit(&mut self, name: &str, index: Option<usize>, _node: &dyn Node) -> bool {
        self.events.push(Event::Visit {
            name: name.to_string(),
            index,
        });
        true
    }

    fn visit_value(&mut self, name: &str, value: Scalar<'_>) {
        self.events.push(Event::Value {
            name: name.to_string(),
            kind: value.kind_name(),
            value: value.render(),
        });
    }

    fn visit_end(&mut self, name: &str, index: Option<usize>, _node: &dyn Node) {
        self.events.push(Event::End {
            name: name.to_string(),
            index,
        });
    }

    fn post_visit(&mut self, node: &dyn Node) {
        self.events.push(Event::PostVisit {
            type_name: node.type_name(),
        });
    }
}
