//! The structured [`Error`] type and its building blocks.

use std::fmt;
use std::sync::Arc;

/// Boxed error used for wrapped causes.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of an error, independent of its message.
///
/// Applications usually implement this on a small enum:
///
/// ```
/// #[derive(Debug)]
/// enum AppKind {
///     Invalid,
///     Internal,
/// }
///
/// impl errkit::Kind for AppKind {
///     fn kind(&self) -> &str {
///         match self {
///             AppKind::Invalid => "invalid operation",
///             AppKind::Internal => "internal error",
///         }
///     }
/// }
/// ```
///
/// Two kinds are considered the same when their [`Kind::kind`] strings match.
pub trait Kind: fmt::Debug + Send + Sync {
    /// Human readable name of the kind, used as the message prefix.
    fn kind(&self) -> &str;
}

/// Label identifying the call site that produced or wrapped an error.
///
/// An empty label means "no operation" and is left out of the detailed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Op(pub &'static str);

impl Op {
    /// Whether the label is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl From<&'static str> for Op {
    fn from(label: &'static str) -> Self {
        Self(label)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A structured error with a kind, an operation label, a reason and an
/// optional cause.
///
/// Use `{}` for the short form and `{:#}` for the detailed form that lists
/// the operation of every layer.
#[derive(Debug)]
pub struct Error {
    kind: Option<Arc<dyn Kind>>,
    op: Op,
    reason: String,
    source: Option<BoxError>,
}

impl Error {
    /// Create an error without a cause.
    pub fn new(kind: impl Kind + 'static, reason: impl Into<String>, op: impl Into<Op>) -> Self {
        Self {
            kind: Some(Arc::new(kind)),
            op: op.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create an error of the given kind wrapping `source`.
    pub fn wrap(
        kind: impl Kind + 'static,
        reason: impl Into<String>,
        op: impl Into<Op>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            kind: Some(Arc::new(kind)),
            op: op.into(),
            reason: reason.into(),
            source: Some(source.into()),
        }
    }

    /// Wrap `source` with extra context, keeping its kind.
    ///
    /// If `source` is an [`Error`], its kind is copied onto the new error.
    /// `source` itself is left untouched.
    pub fn annotate(reason: impl Into<String>, op: impl Into<Op>, source: impl Into<BoxError>) -> Self {
        let source = source.into();
        let kind = source.downcast_ref::<Self>().and_then(|inner| inner.kind.clone());
        Self {
            kind,
            op: op.into(),
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// The kind of this error, if any.
    pub fn kind(&self) -> Option<&dyn Kind> {
        self.kind.as_deref()
    }

    /// Whether this error has the same kind as `kind`.
    pub fn has_kind(&self, kind: &dyn Kind) -> bool {
        self.kind_str() == Some(kind.kind())
    }

    /// The operation label.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The human readable reason, without kind or cause.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Whether `code` appears anywhere in this error's cause chain.
    pub fn is(&self, code: &crate::StateCode) -> bool {
        crate::is(self, code)
    }

    /// First cause of type `T` in this error's chain.
    pub fn find<T: std::error::Error + 'static>(&self) -> Option<&T> {
        crate::find(self)
    }

    fn kind_str(&self) -> Option<&str> {
        self.kind.as_deref().map(Kind::kind)
    }

    fn write_plain(&self, w: &mut dyn fmt::Write, outer_kind: Option<&str>) -> fmt::Result {
        let kind = self.kind_str();
        let mut out = Joined::new(w);
        if let Some(k) = kind.filter(|k| Some(*k) != outer_kind) {
            out.part(k)?;
        }
        if !self.reason.is_empty() {
            out.part(&self.reason)?;
        }
        let Some(source) = self.source.as_deref() else {
            return Ok(());
        };
        match source.downcast_ref::<Self>() {
            Some(inner) => {
                out.sep()?;
                inner.write_plain(out.w, kind.or(outer_kind))
            }
            None => out.part(source),
        }
    }

    fn write_detailed(&self, w: &mut dyn fmt::Write, outer_kind: Option<&str>) -> fmt::Result {
        let kind = self.kind_str();
        let mut out = Joined::new(w);
        if !self.op.is_empty() {
            out.part(self.op)?;
        }
        if let Some(k) = kind.filter(|k| Some(*k) != outer_kind) {
            out.part(k)?;
        }
        if !self.reason.is_empty() {
            out.part(&self.reason)?;
        }
        let Some(source) = self.source.as_deref() else {
            return Ok(());
        };
        match source.downcast_ref::<Self>() {
            Some(inner) => {
                out.w.write_str(":\n\t")?;
                inner.write_detailed(&mut Indented { inner: out.w }, kind.or(outer_kind))
            }
            None => {
                out.sep()?;
                write!(out.w, "{source:#}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_detailed(f, None)
        } else {
            self.write_plain(f, None)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

/// Writes parts separated by `": "`.
struct Joined<'a> {
    w: &'a mut dyn fmt::Write,
    empty: bool,
}

impl<'a> Joined<'a> {
    fn new(w: &'a mut dyn fmt::Write) -> Self {
        Self { w, empty: true }
    }

    fn sep(&mut self) -> fmt::Result {
        if !self.empty {
            self.w.write_str(": ")?;
        }
        self.empty = false;
        Ok(())
    }

    fn part(&mut self, part: impl fmt::Display) -> fmt::Result {
        self.sep()?;
        write!(self.w, "{part}")
    }
}

/// Indents every continuation line by one tab.
struct Indented<'a> {
    inner: &'a mut dyn fmt::Write,
}

impl fmt::Write for Indented<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                self.inner.write_str("\n\t")?;
            }
            self.inner.write_str(line)?;
        }
        Ok(())
    }
}
