use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file.");
define_client_error!(
    UnsupportedSourceFormat,
    "Unsupported source file '{path}'. Expected a .csv, .xlsx, .xlsm, .xls or .ods file.",
    { path: &str }
);

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidSpreadsheet, "Invalid spreadsheet: {details}.", { details: &str });
define_client_error!(EmptySource, "Source contains no header row.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(
    InvalidAmount,
    "Invalid amount '{value}' in column '{column}' (row {row}).",
    { value: &str, column: &str, row: usize }
);
define_client_error!(
    MissingRequiredColumn,
    "Required column '{column}' is missing from the source.",
    { column: &str }
);
define_client_error!(UnknownDimension, "Unknown categorical column: '{name}'.", { name: &str });
define_client_error!(
    InvalidFilterExpression,
    "Invalid filter '{expression}'. Expected COLUMN=VALUE.",
    { expression: &str }
);

// Configuration-related.
define_client_error!(
    InvalidTopN,
    "Invalid top-N value {top_n}. Must be between 1 and {max}.",
    { top_n: usize, max: usize }
);

// View-related.
define_client_error!(
    ColumnNotInSource,
    "Column '{column}' is not available in this dataset.",
    { column: &str }
);

// Export.
define_internal_error!(CsvWriteFailed, "Failed to serialize filtered rows as CSV.");
define_internal_error!(ReportSerializationFailed, "Failed to serialize dashboard report as JSON.");
