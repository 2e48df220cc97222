use crate::node::Node;
use crate::visitor::{visit_root, Visitor};

/// Every node of concrete type `T` in the tree, in traversal order.
pub fn collect<T, N>(root: &N) -> Vec<T>
where
    T: Node + Clone,
    N: Node + ?Sized,
{
    let mut collector = Collector { found: Vec::new() };
    visit_root(root, &mut collector);
    collector.found
}

/// The first node of type `T` matching `predicate`. Traversal stops as soon
/// as a match is found; every later subtree is refused at `pre_visit`.
pub fn find_first<T, N>(root: &N, predicate: impl Fn(&T) -> bool) -> Option<T>
where
    T: Node + Clone,
    N: Node + ?Sized,
{
    let mut finder = Finder {
        predicate,
        found: None,
    };
    visit_root(root, &mut finder);
    finder.found
}

struct Collector<T> {
    found: Vec<T>,
}

impl<T: Node + Clone> Visitor for Collector<T> {
    fn pre_visit(&mut self, node: &dyn Node) -> bool {
        if let Some(node) = node.as_any().downcast_ref::<T>() {
            self.found.push(node.clone());
        }
        true
    }
}

struct Finder<T, F> {
    predicate: F,
    found: Option<T>,
}

impl<T, F> Visitor for Finder<T, F>
where
    T: Node + Clone,
    F: Fn(&T) -> bool,
{
    fn pre_visit(&mut self, node: &dyn Node) -> bool {
        if self.found.is_some() {
            return false;
        }
        if let Some(node) = node.as_any().downcast_ref::<T>() {
            if (self.predicate)(node) {
                self.found = Some(node.clone());
                return false;
            }
        }
        true
    }

    fn visit(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) -> bool {
        self.found.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{CodeableConcept, Coding};
    use crate::primitive::{Code, Uri};
    use crate::visitor::{Event, EventRecorder};

    fn coding(code: &str) -> Coding {
        Coding::builder().code(Code::new(code).unwrap()).build().unwrap()
    }

    fn concept() -> CodeableConcept {
        CodeableConcept::builder()
            .coding([coding("a"), coding("b"), coding("c")])
            .build()
            .unwrap()
    }

    #[test]
    fn test_collect_in_order() {
        let codes: Vec<Code> = collect(&concept());
        let values: Vec<_> = codes.iter().filter_map(|c| c.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);

        let uris: Vec<Uri> = collect(&concept());
        assert!(uris.is_empty());
    }

    #[test]
    fn test_find_first_stops_early() {
        let found: Option<Coding> =
            find_first(&concept(), |c: &Coding| c.code().and_then(|c| c.as_str()) == Some("b"));
        assert_eq!(found, Some(coding("b")));

        let missing: Option<Coding> = find_first(&concept(), |_: &Coding| false);
        assert_eq!(missing, None);
    }

    #[test]
    fn test_refused_subtree_fires_no_events() {
        struct SkipCodings(EventRecorder);

        impl Visitor for SkipCodings {
            fn pre_visit(&mut self, node: &dyn Node) -> bool {
                node.type_name() != "Coding" && self.0.pre_visit(node)
            }

            fn visit_start(&mut self, name: &str, index: Option<usize>, node: &dyn Node) {
                self.0.visit_start(name, index, node)
            }
        }

        let mut visitor = SkipCodings(EventRecorder::default());
        visit_root(&concept(), &mut visitor);
        let events = visitor.0.into_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[1], Event::Start { name, .. } if name == "CodeableConcept"));
    }
}
