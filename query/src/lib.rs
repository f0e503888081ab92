//! Building and validating DICOM query/retrieve identifiers.
//!
//! A [`RootQuery`] holds the data set of a C-FIND or C-MOVE query
//! issued against the _Patient Root_ or the _Study Root_
//! query/retrieve information model.
//! Before a query is sent to a peer,
//! it can be checked against the attribute schema
//! of the level it addresses.
//!
//! ```
//! use dcmkit_query::{QueryLevel, RootQuery};
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut query = RootQuery::study_root();
//! query.set_search_parameter_by_keyword("QueryRetrieveLevel", "STUDY")?;
//! query.set_search_parameter_by_keyword("StudyInstanceUID", "1.2.3")?;
//! assert_eq!(query.check_query(), Ok(QueryLevel::Study));
//!
//! // patient attributes are not keys of a study root study query
//! query.set_search_parameter_by_keyword("PatientName", "Doe^John")?;
//! assert!(!query.validate_query());
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
pub mod level;
pub mod query;
pub mod schema;

pub use crate::level::{QueryLevel, QueryRootType, UnknownLevelError};
pub use crate::query::{QueryError, RootQuery, ValidationError};
pub use crate::schema::{QueryBase, QueryImage, QueryPatient, QuerySeries, QueryStudy};
