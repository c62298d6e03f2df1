//! Input kind enumeration for column metadata

/// Kind of input a column renders as. Closed set; rendering and behavior
/// match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
    DateTime,
    /// Option list fetched from the lookup endpoint, possibly narrowed by
    /// other fields' values.
    Select,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Select => "select",
        }
    }

    /// HTML `type` attribute for the non-select kinds.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::DateTime => "datetime-local",
            Self::Select => "text",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select)
    }
}
