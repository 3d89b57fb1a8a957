//! Default values for arbitrary types.

/// Returns the default value of `T`.
///
/// This is the value a freshly declared `T` would hold if Rust let you declare
/// one without initialising it: `0` for numbers, `false`, the empty string,
/// empty collections, `None`, and aggregates with every field defaulted.
#[must_use]
pub fn zero<T: Default>() -> T {
    T::default()
}

#[cfg(test)]
mod test {
    use std::collections::{BTreeSet, HashMap};

    use crate::zero::zero;

    #[derive(Debug, Default, PartialEq)]
    struct Endpoint {
        host:    String,
        port:    u16,
        secure:  bool,
        aliases: Vec<String>,
        parent:  Option<Box<Endpoint>>,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Route {
        endpoint: Endpoint,
        weight:   f64,
    }

    #[test]
    fn numbers_are_zero() {
        assert_eq!(zero::<i8>(), 0);
        assert_eq!(zero::<i64>(), 0);
        assert_eq!(zero::<u32>(), 0);
        assert_eq!(zero::<usize>(), 0);
        assert_eq!(zero::<i128>(), 0);
        assert!(zero::<f32>().abs() < f32::EPSILON);
        assert!(zero::<f64>().abs() < f64::EPSILON);
    }

    #[test]
    fn scalars_are_empty() {
        assert!(!zero::<bool>());
        assert_eq!(zero::<char>(), '\0');
        assert_eq!(zero::<String>(), "");
        assert_eq!(zero::<&str>(), "");
    }

    #[test]
    fn containers_are_empty() {
        assert!(zero::<Vec<u8>>().is_empty());
        assert!(zero::<HashMap<String, i32>>().is_empty());
        assert!(zero::<BTreeSet<u64>>().is_empty());
        assert_eq!(zero::<[i32; 4]>(), [0; 4]);
        assert_eq!(zero::<(u8, String, bool)>(), (0, String::new(), false));
    }

    #[test]
    fn references_are_absent() {
        assert!(zero::<Option<Box<i32>>>().is_none());
        assert!(zero::<Option<&Endpoint>>().is_none());
    }

    #[test]
    fn aggregates_default_every_field() {
        let route = zero::<Route>();

        assert_eq!(route.endpoint.host, "");
        assert_eq!(route.endpoint.port, 0);
        assert!(!route.endpoint.secure);
        assert!(route.endpoint.aliases.is_empty());
        assert!(route.endpoint.parent.is_none());
        assert!(route.weight.abs() < f64::EPSILON);
    }

    #[test]
    fn matches_a_defaulted_declaration() {
        let declared: Route = Default::default();
        assert_eq!(zero::<Route>(), declared);

        let declared: Vec<String> = Default::default();
        assert_eq!(zero::<Vec<String>>(), declared);
    }

    #[test]
    fn resets_a_variable() {
        let mut counter = 41_u32;
        counter += 1;
        assert_eq!(counter, 42);

        counter = zero();
        assert_eq!(counter, 0);
    }
}
