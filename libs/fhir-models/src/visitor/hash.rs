use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::node::Node;
use crate::visitor::{visit_root, Scalar, Visitor};

/// Structural hash, cached on the node after the first call.
///
/// Equal trees hash equally within one process. The value comes from
/// `DefaultHasher`, whose algorithm is not fixed across Rust releases, so it
/// must not be persisted or compared between processes.
pub fn structural_hash<N: Node + ?Sized>(node: &N) -> u64 {
    node.hash_cache().get_or_compute(|| {
        let mut visitor = HashVisitor {
            hasher: DefaultHasher::new(),
        };
        visit_root(node, &mut visitor);
        visitor.hasher.finish()
    })
}

struct HashVisitor {
    hasher: DefaultHasher,
}

impl Visitor for HashVisitor {
    fn visit_start(&mut self, name: &str, index: Option<usize>, node: &dyn Node) {
        0u8.hash(&mut self.hasher);
        name.hash(&mut self.hasher);
        index.hash(&mut self.hasher);
        node.type_name().hash(&mut self.hasher);
    }

    fn visit_value(&mut self, name: &str, value: Scalar<'_>) {
        1u8.hash(&mut self.hasher);
        name.hash(&mut self.hasher);
        value.kind_name().hash(&mut self.hasher);
        value.render().hash(&mut self.hasher);
    }

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) {
        2u8.hash(&mut self.hasher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::Period;
    use crate::primitive::DateTime;

    fn period(start: &str) -> Period {
        Period::builder()
            .start(DateTime::parse(start).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_hash_is_deterministic_and_cached() {
        let a = period("2024-01-01");
        let b = period("2024-01-01");
        assert_eq!(a.hash_cache().get(), None);

        let hash = structural_hash(&a);
        assert_eq!(a.hash_cache().get(), Some(hash));
        assert_eq!(structural_hash(&b), hash);
        assert_eq!(structural_hash(&a), hash);
    }

    #[test]
    fn test_hash_distinguishes_field_position() {
        let start = period("2024-01-01");
        let end = Period::builder()
            .end(DateTime::parse("2024-01-01").unwrap())
            .build()
            .unwrap();
        assert_ne!(structural_hash(&start), structural_hash(&end));
    }
}
