//! Query/retrieve levels and information model roots.

use dcmkit_dictionary_std::uids;
use snafu::Snafu;
use std::fmt;
use std::str::FromStr;

/// The level of a query,
/// as given by the _Query/Retrieve Level_ attribute (0008,0052).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryLevel {
    Patient,
    Study,
    Series,
    /// Composite object instance level.
    /// Both `IMAGE` and `FRAME` map to this level.
    Image,
}

/// All query levels, from top to bottom.
pub const ALL_LEVELS: [QueryLevel; 4] = [
    QueryLevel::Patient,
    QueryLevel::Study,
    QueryLevel::Series,
    QueryLevel::Image,
];

impl QueryLevel {
    /// The code string of the level, as written in a query.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryLevel::Patient => "PATIENT",
            QueryLevel::Study => "STUDY",
            QueryLevel::Series => "SERIES",
            QueryLevel::Image => "IMAGE",
        }
    }

    /// The level immediately above this one, if any.
    pub fn parent(self) -> Option<QueryLevel> {
        match self {
            QueryLevel::Patient => None,
            QueryLevel::Study => Some(QueryLevel::Patient),
            QueryLevel::Series => Some(QueryLevel::Study),
            QueryLevel::Image => Some(QueryLevel::Series),
        }
    }
}

impl fmt::Display for QueryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The query level value is not one of the known levels.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("Unknown query/retrieve level `{}`", value))]
pub struct UnknownLevelError {
    pub value: String,
}

impl FromStr for QueryLevel {
    type Err = UnknownLevelError;

    /// Parse a level code string.
    /// Trailing padding is ignored. Matching is case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches(&[' ', '\0'][..]) {
            "PATIENT" => Ok(QueryLevel::Patient),
            "STUDY" => Ok(QueryLevel::Study),
            "SERIES" => Ok(QueryLevel::Series),
            "IMAGE" | "FRAME" => Ok(QueryLevel::Image),
            value => UnknownLevelSnafu { value }.fail(),
        }
    }
}

/// The root of a query/retrieve information model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QueryRootType {
    PatientRoot,
    StudyRoot,
}

impl QueryRootType {
    /// A short human readable description of the root.
    pub fn description(self) -> &'static str {
        match self {
            QueryRootType::PatientRoot => "Patient-level root query",
            QueryRootType::StudyRoot => "Study-level root query",
        }
    }

    /// The SOP class UID of the C-FIND information model.
    pub fn find_sop_class_uid(self) -> &'static str {
        match self {
            QueryRootType::PatientRoot => uids::PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_FIND,
            QueryRootType::StudyRoot => uids::STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_FIND,
        }
    }

    /// The SOP class UID of the C-MOVE information model.
    pub fn move_sop_class_uid(self) -> &'static str {
        match self {
            QueryRootType::PatientRoot => uids::PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE,
            QueryRootType::StudyRoot => uids::STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE,
        }
    }

    /// The topmost level which can be addressed from this root.
    pub fn top_level(self) -> QueryLevel {
        match self {
            QueryRootType::PatientRoot => QueryLevel::Patient,
            QueryRootType::StudyRoot => QueryLevel::Study,
        }
    }

    /// Whether a query at the given level can be issued from this root.
    pub fn admits(self, level: QueryLevel) -> bool {
        level >= self.top_level()
    }
}

impl fmt::Display for QueryRootType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
