use crate::node::Node;
use crate::visitor::EventRecorder;

/// Deep structural equality: same types, same field names and positions,
/// same scalar values, in the same order.
pub fn structurally_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Node + ?Sized,
    B: Node + ?Sized,
{
    if a.type_name() != b.type_name() {
        return false;
    }
    if let (Some(left), Some(right)) = (a.hash_cache().get(), b.hash_cache().get()) {
        if left != right {
            return false;
        }
    }
    EventRecorder::record(a) == EventRecorder::record(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::Coding;
    use crate::primitive::{Code, FhirString, Uri};
    use crate::visitor::structural_hash;

    fn coding(code: &str) -> Coding {
        Coding::builder()
            .system(Uri::new("http://snomed.info/sct").unwrap())
            .code(Code::new(code).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_equal_trees() {
        assert!(structurally_equal(&coding("38341003"), &coding("38341003")));
        assert!(!structurally_equal(&coding("38341003"), &coding("73211009")));
    }

    #[test]
    fn test_different_types_are_not_equal() {
        let text = FhirString::new("abc").unwrap();
        let code = Code::new("abc").unwrap();
        assert!(!structurally_equal(&text, &code));
    }

    #[test]
    fn test_cached_hash_short_circuit_agrees() {
        let a = coding("38341003");
        let b = coding("73211009");
        structural_hash(&a);
        structural_hash(&b);
        assert!(!structurally_equal(&a, &b));
        assert!(structurally_equal(&a, &a.clone()));
    }
}
