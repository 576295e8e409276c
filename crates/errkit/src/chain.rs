//! Matching against the cause chain.

use std::error::Error as StdError;

/// A sentinel error identified by a fixed string.
///
/// Useful for states callers want to check for rather than report,
/// similar to an end-of-file marker:
///
/// ```
/// use errkit::{Error, Op, StateCode};
///
/// const EOF: StateCode = StateCode("EOF");
///
/// #[derive(Debug)]
/// struct Internal;
/// impl errkit::Kind for Internal {
///     fn kind(&self) -> &str {
///         "internal error"
///     }
/// }
///
/// let err = Error::wrap(Internal, "unexpected end of file", Op("config.read"), EOF);
/// assert!(errkit::is(&err, &EOF));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{0}")]
pub struct StateCode(pub &'static str);

/// Iterate over `err` and all of its causes, outermost first.
pub fn iter<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

/// Whether `code` is `err` or one of its causes.
pub fn is(err: &(dyn StdError + 'static), code: &StateCode) -> bool {
    iter(err).any(|e| e.downcast_ref::<StateCode>() == Some(code))
}

/// First error of type `T` in the chain starting at `err`.
pub fn find<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    iter(err).find_map(|e| e.downcast_ref::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::tests::TestKind;
    use crate::{Error, Op};
    use std::fmt;

    #[derive(Debug, PartialEq, Eq)]
    struct PathError {
        path: String,
        msg: String,
    }

    impl fmt::Display for PathError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}: {}", self.path, self.msg)
        }
    }

    impl StdError for PathError {}

    const EOF: StateCode = StateCode("EOF");

    #[test]
    fn test_is_state_code() {
        let err = Error::wrap(
            TestKind::Internal,
            "unexpected end of file",
            Op("config.read"),
            EOF,
        );
        assert!(is(&err, &EOF));
        assert!(err.is(&EOF));
        assert!(!is(&err, &StateCode("EOL")));
    }

    #[test]
    fn test_is_through_annotations() {
        let err = Error::annotate(
            "loading settings",
            Op("app.load"),
            Error::wrap(TestKind::Internal, "truncated", Op("config.read"), EOF),
        );
        assert!(is(&err, &EOF));
    }

    #[test]
    fn test_is_bare_state_code() {
        assert!(is(&EOF, &EOF));
        assert_eq!(EOF.to_string(), "EOF");
    }

    #[test]
    fn test_find_concrete_cause() {
        let path_err = PathError {
            path: "/foo/bar".to_string(),
            msg: "file not found".to_string(),
        };
        let err = Error::wrap(
            TestKind::Invalid,
            "source does not exist",
            Op("config.read"),
            PathError {
                path: path_err.path.clone(),
                msg: path_err.msg.clone(),
            },
        );
        let found = find::<PathError>(&err).expect("want a PathError in the chain");
        assert_eq!(*found, path_err);
        assert!(err.find::<std::io::Error>().is_none());
    }

    fn innermost<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
        let mut last = err;
        for e in iter(err) {
            last = e;
        }
        last
    }

    #[test]
    fn test_causes_outlive_iterator() {
        let err = Error::annotate(
            "loading settings",
            Op("app.load"),
            Error::wrap(TestKind::Internal, "truncated", Op("config.read"), EOF),
        );
        let root = innermost(&err);
        assert_eq!(root.downcast_ref::<StateCode>(), Some(&EOF));
        let found: Option<&StateCode> = find(&err);
        assert_eq!(found, Some(&EOF));
    }

    #[test]
    fn test_iter_order() {
        let err = Error::wrap(
            TestKind::Invalid,
            "outer",
            Op("a"),
            Error::wrap(TestKind::Internal, "inner", Op("b"), "root cause"),
        );
        let messages: Vec<String> = iter(&err).skip(2).map(ToString::to_string).collect();
        assert_eq!(messages, vec!["root cause".to_string()]);
        assert_eq!(iter(&err).count(), 3);
    }
}
