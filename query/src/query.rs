//! Construction and validation of root queries.

use crate::level::{QueryLevel, QueryRootType, ALL_LEVELS};
use crate::schema::QueryBase;
use dcmkit_core::dictionary::{DataDictionary, DictionaryEntry};
use dcmkit_core::{ByteValue, DataElement, DataSet, Tag};
use dcmkit_dictionary_std::{tags, StandardDataDictionary};
use dcmkit_object::{write_dataset_with_ts, WriteError};
use dcmkit_transfer_syntax_registry::entries::IMPLICIT_VR_LITTLE_ENDIAN;
use snafu::{ensure, OptionExt, ResultExt, Snafu};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An error which may occur when setting search parameters or writing a query.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum QueryError {
    #[snafu(display("Tag {} is not in the data dictionary", tag))]
    UnknownTag { tag: Tag },
    #[snafu(display("Unknown attribute keyword `{}`", keyword))]
    UnknownKeyword { keyword: String },
    #[snafu(display("Could not create query file '{}'", path.display()))]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Could not write query data set"))]
    WriteDataSet {
        #[snafu(backtrace)]
        source: WriteError,
    },
    #[snafu(display("Could not write query file '{}'", path.display()))]
    FlushFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The reason why a query data set is not valid for its root.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[non_exhaustive]
pub enum ValidationError {
    /// The query is empty
    EmptyQuery,
    /// The query does not specify a query/retrieve level
    MissingQueryLevel,
    #[snafu(display("Unknown query/retrieve level `{}`", value))]
    InvalidQueryLevel { value: String },
    #[snafu(display("Level {} cannot be queried from a {}", level, root))]
    LevelNotAllowed {
        level: QueryLevel,
        root: QueryRootType,
    },
    #[snafu(display("Tag {} is not a key of the {} level", tag, level))]
    TagNotInSchema { tag: Tag, level: QueryLevel },
}

/// A query to be sent to a peer in a C-FIND or C-MOVE request,
/// tied to a query/retrieve information model root.
///
/// The query keeps its own data set:
/// search parameters replace any previous value of the same attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct RootQuery {
    root: QueryRootType,
    data: DataSet,
}

impl RootQuery {
    /// Create an empty query for the given root.
    pub fn new(root: QueryRootType) -> Self {
        RootQuery {
            root,
            data: DataSet::new(),
        }
    }

    /// Create an empty patient root query.
    pub fn patient_root() -> Self {
        Self::new(QueryRootType::PatientRoot)
    }

    /// Create an empty study root query.
    pub fn study_root() -> Self {
        Self::new(QueryRootType::StudyRoot)
    }

    pub fn root_type(&self) -> QueryRootType {
        self.root
    }

    pub fn help_description(&self) -> &'static str {
        self.root.description()
    }

    /// Retrieve the query data set.
    pub fn query_data_set(&self) -> &DataSet {
        &self.data
    }

    /// Retrieve a mutable reference to the query data set.
    pub fn query_data_set_mut(&mut self) -> &mut DataSet {
        &mut self.data
    }

    /// Discard the query, keeping its data set.
    pub fn into_data_set(self) -> DataSet {
        self.data
    }

    /// Set a search parameter with the attribute's dictionary entry at hand.
    ///
    /// Dual value representations are resolved
    /// and the value is padded to an even length.
    pub fn set_search_parameter<E>(&mut self, tag: Tag, entry: &E, value: &str)
    where
        E: DictionaryEntry + ?Sized,
    {
        let vr = entry.vr().resolve();
        self.data
            .put(DataElement::new(tag, vr, ByteValue::from_text(value, vr)));
    }

    /// Set a search parameter,
    /// looking up the attribute in the standard dictionary by tag.
    ///
    /// Only listed attributes are accepted:
    /// private creators and generic group lengths are unknown tags.
    pub fn set_search_parameter_by_tag(&mut self, tag: Tag, value: &str) -> Result<(), QueryError> {
        let entry = StandardDataDictionary::listed_by_tag(tag).context(UnknownTagSnafu { tag })?;
        self.set_search_parameter(tag, entry, value);
        Ok(())
    }

    /// Set a search parameter,
    /// looking up the attribute in the standard dictionary by keyword
    /// (such as `PatientName`).
    pub fn set_search_parameter_by_keyword(
        &mut self,
        keyword: &str,
        value: &str,
    ) -> Result<(), QueryError> {
        let entry = StandardDataDictionary
            .by_name(keyword)
            .context(UnknownKeywordSnafu { keyword })?;
        self.set_search_parameter(entry.tag(), entry, value);
        Ok(())
    }

    /// Merge all elements of the given data set into the query.
    ///
    /// Each element replaces the query's element of the same tag, if any.
    pub fn add_query_data_set(&mut self, ds: &DataSet) {
        for elem in ds {
            self.data.put(elem.clone());
        }
    }

    /// Write a listing of the required, unique, and optional attributes
    /// of every query level in this query's root.
    pub fn write_help_file<W>(&self, mut to: W) -> std::io::Result<()>
    where
        W: Write,
    {
        let sections: [(&str, fn(&dyn QueryBase, QueryRootType) -> Vec<Tag>); 3] = [
            ("must be supported by a C-FIND/C-MOVE", |q, r| q.required_tags(r)),
            ("are unique at each level of a", |q, r| q.unique_tags(r)),
            ("are optional at each level of a", |q, r| q.optional_tags(r)),
        ];

        for (heading, tags_of) in sections {
            writeln!(
                to,
                "The following tags {} {}:",
                heading,
                self.help_description()
            )?;
            for level in ALL_LEVELS {
                let schema = level.schema();
                writeln!(to, "Level: {}", schema.name())?;
                for tag in tags_of(schema, self.root) {
                    let keyword = StandardDataDictionary
                        .by_tag(tag)
                        .map(|e| e.alias())
                        .unwrap_or("Unknown");
                    writeln!(to, "Keyword: {} Tag: {}", keyword, tag)?;
                }
                writeln!(to)?;
            }
            writeln!(to)?;
        }
        Ok(())
    }

    /// Write the query data set to a file
    /// in _Implicit VR Little Endian_,
    /// without preamble nor file meta group.
    pub fn write_query<P>(&self, path: P) -> Result<(), QueryError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::create(path).context(CreateFileSnafu { path })?;
        let mut to = BufWriter::new(file);
        write_dataset_with_ts(&mut to, &self.data, &IMPLICIT_VR_LITTLE_ENDIAN)
            .context(WriteDataSetSnafu)?;
        to.flush().context(FlushFileSnafu { path })
    }

    /// Check whether the query is valid for its root,
    /// returning the level it addresses.
    ///
    /// A valid query names a level admitted by the root,
    /// and contains only attributes of that level's schema.
    pub fn check_query(&self) -> Result<QueryLevel, ValidationError> {
        ensure!(!self.data.is_empty(), EmptyQuerySnafu);

        let level = self
            .data
            .get(tags::QUERY_RETRIEVE_LEVEL)
            .context(MissingQueryLevelSnafu)?;
        let value = level.to_str().unwrap_or_default();
        let level: QueryLevel = match value.parse() {
            Ok(level) => level,
            Err(_) => return InvalidQueryLevelSnafu { value: &*value }.fail(),
        };

        ensure!(
            self.root.admits(level),
            LevelNotAllowedSnafu {
                level,
                root: self.root
            }
        );

        let allowed = level.schema().all_tags(self.root);
        if let Some(tag) = self.data.tags().find(|tag| !allowed.contains(tag)) {
            return TagNotInSchemaSnafu { tag, level }.fail();
        }
        Ok(level)
    }

    /// Check whether the query is valid for its root.
    pub fn validate_query(&self) -> bool {
        match self.check_query() {
            Ok(_) => true,
            Err(e) => {
                debug!("Invalid {}: {}", self.help_description(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::VR;

    #[test]
    fn search_parameters_replace() {
        let mut query = RootQuery::study_root();
        query
            .set_search_parameter_by_keyword("PatientName", "Doe^J*")
            .unwrap();
        query
            .set_search_parameter_by_tag(tags::PATIENT_NAME, "Doe^John")
            .unwrap();
        assert_eq!(query.query_data_set().len(), 1);

        let elem = query.query_data_set().get(tags::PATIENT_NAME).unwrap();
        assert_eq!(elem.vr(), VR::PN);
        assert_eq!(elem.byte_value().unwrap().as_bytes(), b"Doe^John");
    }

    #[test]
    fn search_parameters_are_padded() {
        let mut query = RootQuery::study_root();
        query
            .set_search_parameter_by_keyword("QueryRetrieveLevel", "STUDY")
            .unwrap();
        let elem = query
            .query_data_set()
            .get(tags::QUERY_RETRIEVE_LEVEL)
            .unwrap();
        assert_eq!(elem.vr(), VR::CS);
        assert_eq!(elem.byte_value().unwrap().as_bytes(), b"STUDY ");
    }

    #[test]
    fn dual_vr_is_resolved() {
        let mut query = RootQuery::study_root();
        // (0028,0106) SmallestImagePixelValue is US or SS
        query
            .set_search_parameter_by_tag(tags::SMALLEST_IMAGE_PIXEL_VALUE, "0")
            .unwrap();
        let elem = query
            .query_data_set()
            .get(tags::SMALLEST_IMAGE_PIXEL_VALUE)
            .unwrap();
        assert_eq!(elem.vr(), VR::US);
    }

    #[test]
    fn unknown_parameters() {
        let mut query = RootQuery::patient_root();
        assert!(matches!(
            query.set_search_parameter_by_keyword("NotAnAttribute", "x"),
            Err(QueryError::UnknownKeyword { .. })
        ));
        assert!(matches!(
            query.set_search_parameter_by_tag(Tag(0x0009, 0x0010), "x"),
            Err(QueryError::UnknownTag { .. })
        ));
        assert!(matches!(
            query.set_search_parameter_by_tag(Tag(0x0011, 0x0020), "x"),
            Err(QueryError::UnknownTag { .. })
        ));
        assert!(matches!(
            query.set_search_parameter_by_tag(Tag(0x0010, 0x0000), "0"),
            Err(QueryError::UnknownTag { .. })
        ));
        assert!(query.query_data_set().is_empty());
    }

    #[test]
    fn added_data_set_wins() {
        let mut query = RootQuery::study_root();
        query
            .set_search_parameter_by_tag(tags::STUDY_INSTANCE_UID, "")
            .unwrap();

        let ds: DataSet = vec![
            DataElement::new_str(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
            DataElement::new_str(tags::QUERY_RETRIEVE_LEVEL, VR::CS, "STUDY"),
        ]
        .into_iter()
        .collect();
        query.add_query_data_set(&ds);

        assert_eq!(query.query_data_set(), &ds);
        assert_eq!(query.check_query(), Ok(QueryLevel::Study));
    }

    #[test]
    fn help_file_lists_levels() {
        let query = RootQuery::patient_root();
        let mut out = Vec::new();
        query.write_help_file(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(
            "The following tags must be supported by a C-FIND/C-MOVE Patient-level root query:\n"
        ));
        assert_eq!(text.matches("Level: PATIENT").count(), 3);
        assert!(text.contains("Keyword: PatientName Tag: (0010,0010)"));
        assert!(text.contains("Keyword: SOPInstanceUID Tag: (0008,0018)"));
    }
}
