use fractic_server_error::ServerError;

use crate::{
    entities::{Column, FilterSet, FilteredView, RecordStore, TradeRecord},
    errors::ColumnNotInSource,
};

/// Narrows a view to the records admitted by every active filter.
pub struct FilterStage<'f> {
    filters: &'f FilterSet,
}

impl<'f> FilterStage<'f> {
    pub fn new(filters: &'f FilterSet) -> Self {
        Self { filters }
    }

    /// Fails if a filter refers to a column the store does not have.
    pub fn check_columns(&self, store: &RecordStore) -> Result<(), ServerError> {
        for (dimension, _) in self.filters.active_dimensions() {
            if !store.has_column(dimension) {
                return Err(ColumnNotInSource::new(dimension.label()));
            }
        }
        if self.filters.active_years().is_some() && !store.has_column(Column::ReceiptDate) {
            return Err(ColumnNotInSource::new(Column::ReceiptDate.label()));
        }
        Ok(())
    }

    /// Keeps surviving records in their original relative order.
    pub fn apply<'a>(&self, view: FilteredView<'a>) -> FilteredView<'a> {
        if self.filters.is_unrestricted() {
            return view;
        }
        let store = view.store();
        let records = store.all_records();
        let indices = view
            .indices()
            .iter()
            .copied()
            .filter(|&i| self.admits(&records[i]))
            .collect();
        FilteredView::with_indices(store, indices)
    }

    fn admits(&self, record: &TradeRecord) -> bool {
        let dimensions_match = self.filters.active_dimensions().all(|(dimension, accepted)| {
            record
                .dimension(dimension)
                .is_some_and(|value| accepted.contains(value))
        });
        let year_matches = match self.filters.active_years() {
            Some(years) => record.receipt_year().is_some_and(|y| years.contains(&y)),
            None => true,
        };
        dimensions_match && year_matches
    }
}
