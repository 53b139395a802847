// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod dashboard_config_ron_datasource;
        pub(crate) mod trades_csv_datasource;
        pub(crate) mod trades_spreadsheet_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod column_header_model;
        pub(crate) mod dashboard_config_model;
        pub(crate) mod raw_table_model;
        pub(crate) mod receipt_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod record_store_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod aggregate;
        pub(crate) mod column;
        pub(crate) mod dashboard_config;
        pub(crate) mod dashboard_report;
        pub(crate) mod filter_set;
        pub(crate) mod record_store;
        pub(crate) mod trade_record;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod filter_stage;
        pub(crate) mod monthly_trend;
        pub(crate) mod ranker;
        pub(crate) mod summary;
    }
    pub(crate) mod repositories {
        pub(crate) mod record_store_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod dashboard_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_export;
    pub(crate) mod scale_fmt;
    pub(crate) mod text_report_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::aggregate::*;
        pub use crate::domain::entities::column::*;
        pub use crate::domain::entities::dashboard_config::*;
        pub use crate::domain::entities::dashboard_report::*;
        pub use crate::domain::entities::filter_set::*;
        pub use crate::domain::entities::record_store::*;
        pub use crate::domain::entities::trade_record::*;
    }

    pub mod pipeline {
        pub use crate::domain::logic::aggregator::Aggregator;
        pub use crate::domain::logic::filter_stage::FilterStage;
        pub use crate::domain::logic::monthly_trend::MonthlyTrend;
        pub use crate::domain::logic::ranker::Ranker;
        pub use crate::domain::logic::summary::SummaryCalculator;
    }

    pub mod format {
        pub use crate::presentation::scale_fmt::{axis_label, humanize, ScaleUnit, ScaledValue};
        pub use crate::presentation::utils::{format_amount, format_grouped};
    }
}
