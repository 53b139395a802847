use std::collections::HashMap;

use crate::entities::Column;

/// Position of each recognized canonical column in a source header row.
#[derive(Debug, Default)]
pub(crate) struct ColumnHeaderModel {
    positions: HashMap<Column, usize>,
}

impl ColumnHeaderModel {
    /// When several headers resolve to the same column, the leftmost wins and
    /// the others are carried along as unrecognized columns.
    pub(crate) fn resolve(headers: &[String]) -> Self {
        let mut positions = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            if let Some(column) = Column::from_header(header) {
                positions.entry(column).or_insert(i);
            }
        }
        Self { positions }
    }

    pub(crate) fn position(&self, column: impl Into<Column>) -> Option<usize> {
        self.positions.get(&column.into()).copied()
    }

    pub(crate) fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.positions.keys().copied()
    }
}
