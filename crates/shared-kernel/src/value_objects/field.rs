// crates/shared-kernel/src/value_objects/field.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the table a field bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Row => "rows",
            Self::Column => "columns",
        }
    }
}

/// One of the four range inputs, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    RowStart,
    RowEnd,
    ColumnStart,
    ColumnEnd,
}

impl Field {
    /// All fields in the order they are checked.
    pub const ALL: [Self; 4] = [Self::RowStart, Self::RowEnd, Self::ColumnStart, Self::ColumnEnd];

    pub const fn axis(self) -> Axis {
        match self {
            Self::RowStart | Self::RowEnd => Axis::Row,
            Self::ColumnStart | Self::ColumnEnd => Axis::Column,
        }
    }

    pub const fn is_start(self) -> bool {
        matches!(self, Self::RowStart | Self::ColumnStart)
    }

    /// Identifier used in structured output and logs.
    pub const fn key(self) -> &'static str {
        match self {
            Self::RowStart => "rowStart",
            Self::RowEnd => "rowEnd",
            Self::ColumnStart => "columnStart",
            Self::ColumnEnd => "columnEnd",
        }
    }

    /// Message shown when the field was left empty.
    pub fn missing_message(self) -> String {
        let which = if self.is_start() { "a start" } else { "an end" };
        format!("Please enter {which} value for {}", self.axis().plural())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_messages_name_the_axis() {
        assert_eq!(Field::RowStart.missing_message(), "Please enter a start value for rows");
        assert_eq!(Field::RowEnd.missing_message(), "Please enter an end value for rows");
        assert_eq!(Field::ColumnStart.missing_message(), "Please enter a start value for columns");
        assert_eq!(Field::ColumnEnd.missing_message(), "Please enter an end value for columns");
    }

    #[test]
    fn axis_grouping() {
        assert_eq!(Field::RowEnd.axis(), Axis::Row);
        assert_eq!(Field::ColumnStart.axis(), Axis::Column);
        assert!(!Field::ColumnEnd.is_start());
    }
}
