//! The tag data model produced by the parser.

/// Type assigned to a tag that declares no type at all, e.g. `<help>`.
pub const LITERAL_TYPE: &str = "literal";
/// Type assigned by the `@@name` shorthand.
pub const MEMBER_TYPE: &str = "member";
/// Type assigned by the `@name` shorthand.
pub const USER_TYPE: &str = "user";
/// Type assigned to tags declaring alternatives with `|`.
pub const OPTIONS_TYPE: &str = "options";
/// Type suffix marking a variadic tag.
pub const REST_MARKER: &str = "...";

/// One argument slot in a usage signature.
///
/// Tags are produced by [`parse`](crate::parse). A finalized sequence holds
/// at most one tag with `rest` set, and only in last position; `options` is
/// present exactly when the alternatives syntax `a|b` was used, in which case
/// `kind` is [`OPTIONS_TYPE`].
///
/// # Examples
/// ```
/// use usage_tags::{Tag, parse};
/// let tags = parse("<name:string>").expect("usage should parse");
/// assert_eq!(
///     tags,
///     vec![Tag {
///         name: "name".into(),
///         kind: "string".into(),
///         required: true,
///         ..Tag::default()
///     }]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    /// Identifier of the argument, with any `@`/`@@` shorthand removed.
    pub name: String,
    /// Classification: a reserved type name or a user-supplied one.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// `true` for `<...>` tags, `false` for `[...]` tags.
    pub required: bool,
    /// `true` when the tag accepts a variable number of trailing values.
    pub rest: bool,
    /// Alternative type names collected from `a|b` syntax.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub options: Option<Vec<String>>,
    /// Render the options list instead of the name; set by `::`.
    pub literal: bool,
}

impl Tag {
    /// Return the opening and closing brackets used to display the tag.
    ///
    /// # Examples
    /// ```
    /// use usage_tags::Tag;
    /// let tag = Tag { required: true, ..Tag::default() };
    /// assert_eq!(tag.brackets(), ('<', '>'));
    /// assert_eq!(Tag::default().brackets(), ('[', ']'));
    /// ```
    #[must_use]
    pub const fn brackets(&self) -> (char, char) {
        if self.required { ('<', '>') } else { ('[', ']') }
    }

    /// Whether the tag lists alternative types.
    #[must_use]
    pub fn is_options(&self) -> bool {
        self.kind == OPTIONS_TYPE
    }

    /// Whether the tag was declared with the `@name` shorthand.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.kind == USER_TYPE
    }

    /// Whether the tag was declared with the `@@name` shorthand.
    #[must_use]
    pub fn is_member(&self) -> bool {
        self.kind == MEMBER_TYPE
    }

    /// Whether the tag declared no type.
    ///
    /// This is unrelated to the `literal` display flag.
    #[must_use]
    pub fn is_literal_type(&self) -> bool {
        self.kind == LITERAL_TYPE
    }
}
