use derive_more::Display;

///
/// OnConflict
///
/// Insert-time conflict resolution. `None` renders no `OR` clause.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum OnConflict {
    #[display("ABORT")]
    Abort,

    #[default]
    #[display("NONE")]
    None,

    #[display("REPLACE")]
    Replace,

    #[display("ROLLBACK")]
    Rollback,

    #[display("FAIL")]
    Fail,

    #[display("IGNORE")]
    Ignore,
}

impl OnConflict {
    pub const ALL: [Self; 6] = [
        Self::Abort,
        Self::None,
        Self::Replace,
        Self::Rollback,
        Self::Fail,
        Self::Ignore,
    ];

    /// `INSERT OR <policy>` keyword, if any.
    #[must_use]
    pub const fn or_clause(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Abort => Some("ABORT"),
            Self::Replace => Some("REPLACE"),
            Self::Rollback => Some("ROLLBACK"),
            Self::Fail => Some("FAIL"),
            Self::Ignore => Some("IGNORE"),
        }
    }
}
