//! List formatting policies.
//!
//! Every list of children in the grammar (statements of a block, call
//! arguments, object properties, ...) is printed by one generic routine,
//! `Printer::emit_list`, under a `ListFormat` describing its brackets,
//! delimiter, spacing and line behaviour. The associated constants below are
//! the complete table of policies; emit code picks one per production.

/// How a list decides between line breaks and spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineMode {
    /// Always on one line.
    SingleLine,
    /// One item per line.
    MultiLine,
    /// Keep the line structure of the original source where it is known.
    PreserveLines,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    None,
    /// `,`
    Comma,
    /// ` |`
    Bar,
    /// ` &`
    Ampersand,
    /// ` * `
    Asterisk,
}

impl Delimiter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::None => "",
            Delimiter::Comma => ",",
            Delimiter::Bar => " |",
            Delimiter::Ampersand => " &",
            Delimiter::Asterisk => " * ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brackets {
    None,
    Braces,
    Parens,
    Angle,
    Square,
}

impl Brackets {
    pub const fn open(self) -> Option<&'static str> {
        match self {
            Brackets::None => None,
            Brackets::Braces => Some("{"),
            Brackets::Parens => Some("("),
            Brackets::Angle => Some("<"),
            Brackets::Square => Some("["),
        }
    }

    pub const fn close(self) -> Option<&'static str> {
        match self {
            Brackets::None => None,
            Brackets::Braces => Some("}"),
            Brackets::Parens => Some(")"),
            Brackets::Angle => Some(">"),
            Brackets::Square => Some("]"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListFormat {
    pub lines: LineMode,
    pub delimiter: Delimiter,
    pub brackets: Brackets,
    /// A trailing `,` would be legal after the last item.
    pub allow_trailing_comma: bool,
    /// Items are printed one indentation level deeper.
    pub indented: bool,
    /// Space after the opening and before the closing bracket.
    pub space_between_braces: bool,
    pub space_between_siblings: bool,
    /// Print nothing at all when the list is absent.
    pub optional_if_absent: bool,
    /// Print nothing at all when the list is empty.
    pub optional_if_empty: bool,
    /// Break lines around synthesized items.
    pub prefer_new_line: bool,
    /// No line break after the last item of a multi-line list.
    pub no_trailing_new_line: bool,
    pub no_intervening_comments: bool,
    /// Empty lists print as `{}` rather than `{ }`.
    pub no_space_if_empty: bool,
}

impl ListFormat {
    // =========================================================================
    // Building blocks
    // =========================================================================

    pub const SINGLE_LINE: ListFormat = ListFormat {
        lines: LineMode::SingleLine,
        delimiter: Delimiter::None,
        brackets: Brackets::None,
        allow_trailing_comma: false,
        indented: false,
        space_between_braces: false,
        space_between_siblings: false,
        optional_if_absent: false,
        optional_if_empty: false,
        prefer_new_line: false,
        no_trailing_new_line: false,
        no_intervening_comments: false,
        no_space_if_empty: false,
    };

    pub const MULTI_LINE: ListFormat = Self::SINGLE_LINE.lines(LineMode::MultiLine);

    pub const PRESERVE_LINES: ListFormat = Self::SINGLE_LINE.lines(LineMode::PreserveLines);

    pub const fn lines(self, lines: LineMode) -> Self {
        ListFormat { lines, ..self }
    }

    pub const fn delimited(self, delimiter: Delimiter) -> Self {
        ListFormat { delimiter, ..self }
    }

    pub const fn comma(self) -> Self {
        self.delimited(Delimiter::Comma)
    }

    pub const fn bracketed(self, brackets: Brackets) -> Self {
        ListFormat { brackets, ..self }
    }

    pub const fn allow_trailing_comma(self) -> Self {
        ListFormat {
            allow_trailing_comma: true,
            ..self
        }
    }

    pub const fn indented(self) -> Self {
        ListFormat {
            indented: true,
            ..self
        }
    }

    pub const fn space_between_braces(self) -> Self {
        ListFormat {
            space_between_braces: true,
            ..self
        }
    }

    pub const fn space_between_siblings(self) -> Self {
        ListFormat {
            space_between_siblings: true,
            ..self
        }
    }

    pub const fn optional_if_absent(self) -> Self {
        ListFormat {
            optional_if_absent: true,
            ..self
        }
    }

    pub const fn optional_if_empty(self) -> Self {
        ListFormat {
            optional_if_empty: true,
            ..self
        }
    }

    pub const fn optional(self) -> Self {
        self.optional_if_absent().optional_if_empty()
    }

    pub const fn prefer_new_line(self) -> Self {
        ListFormat {
            prefer_new_line: true,
            ..self
        }
    }

    pub const fn no_trailing_new_line(self) -> Self {
        ListFormat {
            no_trailing_new_line: true,
            ..self
        }
    }

    pub const fn no_intervening_comments(self) -> Self {
        ListFormat {
            no_intervening_comments: true,
            ..self
        }
    }

    pub const fn no_space_if_empty(self) -> Self {
        ListFormat {
            no_space_if_empty: true,
            ..self
        }
    }

    /// The single-line, unindented counterpart used in compact mode.
    pub const fn collapsed(self) -> Self {
        ListFormat {
            lines: LineMode::SingleLine,
            indented: false,
            prefer_new_line: false,
            ..self
        }
    }

    /// Single-line, unindented variant of a statement list, used for
    /// `case x: stmt` when the case body is a single synthesized statement.
    pub const fn inline(self) -> Self {
        ListFormat {
            lines: LineMode::SingleLine,
            indented: false,
            ..self
        }
    }

    #[inline]
    pub const fn is_multi_line(&self) -> bool {
        matches!(self.lines, LineMode::MultiLine)
    }

    #[inline]
    pub const fn preserves_lines(&self) -> bool {
        matches!(self.lines, LineMode::PreserveLines)
    }

    // =========================================================================
    // Precomputed formats
    // =========================================================================

    pub const MODIFIERS: ListFormat = Self::SINGLE_LINE
        .space_between_siblings()
        .no_intervening_comments();

    pub const HERITAGE_CLAUSES: ListFormat = Self::SINGLE_LINE.space_between_siblings();

    pub const TUPLE_TYPE_ELEMENTS: ListFormat = Self::SINGLE_LINE
        .comma()
        .space_between_siblings()
        .bracketed(Brackets::Square);

    pub const UNION_TYPE_CONSTITUENTS: ListFormat = Self::SINGLE_LINE
        .delimited(Delimiter::Bar)
        .space_between_siblings();

    pub const INTERSECTION_TYPE_CONSTITUENTS: ListFormat = Self::SINGLE_LINE
        .delimited(Delimiter::Ampersand)
        .space_between_siblings();

    pub const OBJECT_BINDING_PATTERN_ELEMENTS: ListFormat = Self::SINGLE_LINE
        .allow_trailing_comma()
        .space_between_braces()
        .comma()
        .space_between_siblings()
        .no_space_if_empty()
        .bracketed(Brackets::Braces);

    pub const ARRAY_BINDING_PATTERN_ELEMENTS: ListFormat = Self::SINGLE_LINE
        .allow_trailing_comma()
        .comma()
        .space_between_siblings()
        .no_space_if_empty()
        .bracketed(Brackets::Square);

    pub const OBJECT_LITERAL_EXPRESSION_PROPERTIES: ListFormat = Self::PRESERVE_LINES
        .comma()
        .space_between_siblings()
        .space_between_braces()
        .indented()
        .no_space_if_empty()
        .bracketed(Brackets::Braces);

    pub const ARRAY_LITERAL_EXPRESSION_ELEMENTS: ListFormat = Self::PRESERVE_LINES
        .comma()
        .space_between_siblings()
        .allow_trailing_comma()
        .indented()
        .bracketed(Brackets::Square);

    pub const COMMA_LIST_ELEMENTS: ListFormat = Self::SINGLE_LINE.comma().space_between_siblings();

    pub const CALL_EXPRESSION_ARGUMENTS: ListFormat = Self::COMMA_LIST_ELEMENTS.bracketed(Brackets::Parens);

    pub const NEW_EXPRESSION_ARGUMENTS: ListFormat = Self::CALL_EXPRESSION_ARGUMENTS.optional_if_absent();

    pub const TEMPLATE_EXPRESSION_SPANS: ListFormat = Self::SINGLE_LINE.no_intervening_comments();

    pub const SINGLE_LINE_BLOCK_STATEMENTS: ListFormat = Self::SINGLE_LINE
        .space_between_braces()
        .space_between_siblings()
        .bracketed(Brackets::Braces);

    pub const MULTI_LINE_BLOCK_STATEMENTS: ListFormat = Self::MULTI_LINE
        .indented()
        .bracketed(Brackets::Braces);

    pub const VARIABLE_DECLARATION_LIST: ListFormat = Self::COMMA_LIST_ELEMENTS;

    pub const CLASS_HERITAGE_CLAUSES: ListFormat = Self::SINGLE_LINE;

    pub const CLASS_MEMBERS: ListFormat = Self::MULTI_LINE
        .indented()
        .bracketed(Brackets::Braces);

    pub const INTERFACE_MEMBERS: ListFormat = Self::CLASS_MEMBERS;

    pub const ENUM_MEMBERS: ListFormat = Self::MULTI_LINE
        .comma()
        .indented()
        .bracketed(Brackets::Braces);

    pub const CASE_BLOCK_CLAUSES: ListFormat = Self::MULTI_LINE
        .indented()
        .bracketed(Brackets::Braces);

    pub const NAMED_IMPORTS_OR_EXPORTS_ELEMENTS: ListFormat = Self::SINGLE_LINE
        .comma()
        .space_between_siblings()
        .allow_trailing_comma()
        .space_between_braces()
        .no_space_if_empty()
        .bracketed(Brackets::Braces);

    pub const JSX_ELEMENT_OR_FRAGMENT_CHILDREN: ListFormat = Self::SINGLE_LINE.no_intervening_comments();

    pub const JSX_ELEMENT_ATTRIBUTES: ListFormat = Self::SINGLE_LINE
        .space_between_siblings()
        .no_intervening_comments();

    pub const CASE_OR_DEFAULT_CLAUSE_STATEMENTS: ListFormat = Self::MULTI_LINE
        .indented()
        .no_trailing_new_line()
        .optional_if_empty();

    pub const HERITAGE_CLAUSE_TYPES: ListFormat = Self::COMMA_LIST_ELEMENTS;

    pub const SOURCE_FILE_STATEMENTS: ListFormat = Self::MULTI_LINE.no_trailing_new_line();

    pub const DECORATORS: ListFormat = Self::MULTI_LINE.optional();

    pub const TYPE_ARGUMENTS: ListFormat = Self::COMMA_LIST_ELEMENTS
        .bracketed(Brackets::Angle)
        .optional();

    pub const TYPE_PARAMETERS: ListFormat = Self::TYPE_ARGUMENTS;

    pub const PARAMETERS: ListFormat = Self::COMMA_LIST_ELEMENTS.bracketed(Brackets::Parens);

    pub const INDEX_SIGNATURE_PARAMETERS: ListFormat = Self::COMMA_LIST_ELEMENTS
        .indented()
        .bracketed(Brackets::Square);

    pub const JSDOC_COMMENT: ListFormat = Self::MULTI_LINE.delimited(Delimiter::Asterisk);
}

#[cfg(test)]
#[path = "tests/list_format.rs"]
mod tests;
