//! Observable events for neodb
//!
//! Every lifecycle step of loading, linking, querying and exporting has an
//! explicit, typed event.

use std::fmt;

use super::logger::Severity;

/// Observable events in neodb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded
    ConfigLoaded,

    // Ingest
    /// Reading a source dataset begins
    DatasetLoadStart,
    /// Source dataset read
    DatasetLoaded,

    // Linking
    /// NEOs and close approaches linked
    DatabaseLinked,
    /// Two NEOs share a designation; the later one wins the index slot
    DuplicateDesignation,
    /// Two NEOs share a name; both stay reachable by name
    DuplicateName,

    // Query
    /// Query begins
    QueryStart,
    /// Query stream drained
    QueryComplete,
    /// Query halted by a fatal predicate error
    QueryFailed,

    // Export
    /// Results written to an output file
    ExportComplete,
    /// Results could not be written
    ExportFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoadStart => "DATASET_LOAD_START",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatabaseLinked => "DATABASE_LINKED",
            Event::DuplicateDesignation => "DUPLICATE_DESIGNATION",
            Event::DuplicateName => "DUPLICATE_NAME",
            Event::QueryStart => "QUERY_START",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::QueryFailed => "QUERY_FAILED",
            Event::ExportComplete => "EXPORT_COMPLETE",
            Event::ExportFailed => "EXPORT_FAILED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::QueryFailed => Severity::Fatal,
            Event::ExportFailed => Severity::Error,
            Event::DuplicateDesignation | Event::DuplicateName => Severity::Warn,
            _ => Severity::Info,
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
