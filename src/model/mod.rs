/// One raw row of field values split from a data file line. No schema is
/// attached, so a record may be shorter or longer than the column catalog.
pub type Record = Vec<String>;

/// A single `index|name` entry from the column catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Declared position of the column.
    pub index: i128,
    /// Column name, kept verbatim.
    pub name: String,
}

impl ColumnDefinition {
    /// Creates a new definition.
    pub fn new(index: i128, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// Ordered column names, sorted by declared index rather than file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnCatalog {
    names: Vec<String>,
}

impl ColumnCatalog {
    /// Builds the catalog by sorting definitions on their index. Ties keep
    /// their original relative order; duplicates are not removed.
    pub fn from_definitions(mut definitions: Vec<ColumnDefinition>) -> Self {
        definitions.sort_by_key(|definition| definition.index);
        Self {
            names: definitions
                .into_iter()
                .map(|definition| definition.name)
                .collect(),
        }
    }

    /// Column names in header order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The fully materialised header plus records for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub columns: ColumnCatalog,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: ColumnCatalog, records: Vec<Record>) -> Self {
        Self { columns, records }
    }
}
