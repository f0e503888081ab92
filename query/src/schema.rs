//! Per-level attribute schemas of query identifiers.
//!
//! Each level of the query/retrieve information model declares
//! which attributes a query at that level may carry:
//! _required_ keys (matching or return keys every peer must support),
//! the _unique_ key identifying an entity at that level,
//! and _optional_ keys.
//! Queries below the top level of their root
//! also admit the unique keys of the levels above.

use crate::level::{QueryLevel, QueryRootType};
use dcmkit_core::Tag;
use dcmkit_dictionary_std::tags;

/// A provider of the attribute schema for one query level.
///
/// Implementors are stateless:
/// all lists are derived from the level and the given root type.
pub trait QueryBase {
    /// The query level this schema describes.
    fn level(&self) -> QueryLevel;

    /// The name of the level, as shown in listings.
    fn name(&self) -> &'static str {
        self.level().as_str()
    }

    /// Attributes which must be supported at this level.
    fn required_tags(&self, root: QueryRootType) -> Vec<Tag>;

    /// The attributes uniquely identifying an entity at this level.
    fn unique_tags(&self, root: QueryRootType) -> Vec<Tag>;

    /// Attributes which may optionally be queried at this level.
    fn optional_tags(&self, root: QueryRootType) -> Vec<Tag>;

    /// All attributes admitted at this level:
    /// required, then unique, then optional.
    fn all_tags(&self, root: QueryRootType) -> Vec<Tag> {
        let mut all = self.required_tags(root);
        all.extend(self.unique_tags(root));
        all.extend(self.optional_tags(root));
        all
    }

    /// Whether the given attribute is admitted at this level.
    fn admits_tag(&self, root: QueryRootType, tag: Tag) -> bool {
        self.all_tags(root).contains(&tag)
    }
}

/// The unique keys of the levels above `level`, down from the root's top.
fn upper_unique_keys(level: QueryLevel, root: QueryRootType) -> Vec<Tag> {
    let mut keys = Vec::new();
    let mut current = level.parent();
    while let Some(parent) = current {
        if !root.admits(parent) {
            break;
        }
        keys.push(unique_key(parent));
        current = parent.parent();
    }
    keys.reverse();
    keys
}

fn unique_key(level: QueryLevel) -> Tag {
    match level {
        QueryLevel::Patient => tags::PATIENT_ID,
        QueryLevel::Study => tags::STUDY_INSTANCE_UID,
        QueryLevel::Series => tags::SERIES_INSTANCE_UID,
        QueryLevel::Image => tags::SOP_INSTANCE_UID,
    }
}

/// Schema of the patient level.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct QueryPatient;

impl QueryBase for QueryPatient {
    fn level(&self) -> QueryLevel {
        QueryLevel::Patient
    }

    fn required_tags(&self, root: QueryRootType) -> Vec<Tag> {
        match root {
            QueryRootType::PatientRoot => vec![tags::QUERY_RETRIEVE_LEVEL, tags::PATIENT_NAME],
            QueryRootType::StudyRoot => Vec::new(),
        }
    }

    fn unique_tags(&self, root: QueryRootType) -> Vec<Tag> {
        match root {
            QueryRootType::PatientRoot => vec![tags::PATIENT_ID],
            QueryRootType::StudyRoot => Vec::new(),
        }
    }

    fn optional_tags(&self, root: QueryRootType) -> Vec<Tag> {
        match root {
            QueryRootType::PatientRoot => vec![
                tags::SPECIFIC_CHARACTER_SET,
                tags::REFERENCED_PATIENT_SEQUENCE,
                tags::ISSUER_OF_PATIENT_ID,
                tags::PATIENT_BIRTH_DATE,
                tags::PATIENT_BIRTH_TIME,
                tags::PATIENT_SEX,
                tags::OTHER_PATIENT_IDS,
                tags::OTHER_PATIENT_NAMES,
                tags::ETHNIC_GROUP,
                tags::PATIENT_COMMENTS,
                tags::NUMBER_OF_PATIENT_RELATED_STUDIES,
                tags::NUMBER_OF_PATIENT_RELATED_SERIES,
                tags::NUMBER_OF_PATIENT_RELATED_INSTANCES,
            ],
            QueryRootType::StudyRoot => Vec::new(),
        }
    }
}

/// Schema of the study level.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct QueryStudy;

impl QueryBase for QueryStudy {
    fn level(&self) -> QueryLevel {
        QueryLevel::Study
    }

    fn required_tags(&self, root: QueryRootType) -> Vec<Tag> {
        let mut keys = vec![
            tags::QUERY_RETRIEVE_LEVEL,
            tags::STUDY_DATE,
            tags::STUDY_TIME,
            tags::ACCESSION_NUMBER,
            tags::STUDY_ID,
        ];
        keys.extend(upper_unique_keys(QueryLevel::Study, root));
        keys
    }

    fn unique_tags(&self, _root: QueryRootType) -> Vec<Tag> {
        vec![tags::STUDY_INSTANCE_UID]
    }

    fn optional_tags(&self, _root: QueryRootType) -> Vec<Tag> {
        vec![
            tags::SPECIFIC_CHARACTER_SET,
            tags::REFERRING_PHYSICIAN_NAME,
            tags::STUDY_DESCRIPTION,
            tags::PROCEDURE_CODE_SEQUENCE,
            tags::NAME_OF_PHYSICIANS_READING_STUDY,
            tags::ADMITTING_DIAGNOSES_DESCRIPTION,
            tags::REFERENCED_STUDY_SEQUENCE,
            tags::PATIENT_AGE,
            tags::PATIENT_SIZE,
            tags::PATIENT_WEIGHT,
            tags::OCCUPATION,
            tags::ADDITIONAL_PATIENT_HISTORY,
            tags::OTHER_STUDY_NUMBERS,
            tags::MODALITIES_IN_STUDY,
            tags::SOP_CLASSES_IN_STUDY,
            tags::NUMBER_OF_STUDY_RELATED_SERIES,
            tags::NUMBER_OF_STUDY_RELATED_INSTANCES,
        ]
    }
}

/// Schema of the series level.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct QuerySeries;

impl QueryBase for QuerySeries {
    fn level(&self) -> QueryLevel {
        QueryLevel::Series
    }

    fn required_tags(&self, root: QueryRootType) -> Vec<Tag> {
        let mut keys = vec![
            tags::QUERY_RETRIEVE_LEVEL,
            tags::MODALITY,
            tags::SERIES_NUMBER,
        ];
        keys.extend(upper_unique_keys(QueryLevel::Series, root));
        keys
    }

    fn unique_tags(&self, _root: QueryRootType) -> Vec<Tag> {
        vec![tags::SERIES_INSTANCE_UID]
    }

    fn optional_tags(&self, _root: QueryRootType) -> Vec<Tag> {
        vec![
            tags::SPECIFIC_CHARACTER_SET,
            tags::SERIES_DATE,
            tags::SERIES_TIME,
            tags::SERIES_DESCRIPTION,
            tags::BODY_PART_EXAMINED,
            tags::PROTOCOL_NAME,
            tags::REQUEST_ATTRIBUTES_SEQUENCE,
            tags::PERFORMED_PROCEDURE_STEP_START_DATE,
            tags::PERFORMED_PROCEDURE_STEP_START_TIME,
            tags::NUMBER_OF_SERIES_RELATED_INSTANCES,
        ]
    }
}

/// Schema of the composite object instance level,
/// addressed as either `IMAGE` or `FRAME`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct QueryImage;

impl QueryBase for QueryImage {
    fn level(&self) -> QueryLevel {
        QueryLevel::Image
    }

    fn required_tags(&self, root: QueryRootType) -> Vec<Tag> {
        let mut keys = vec![tags::QUERY_RETRIEVE_LEVEL, tags::INSTANCE_NUMBER];
        keys.extend(upper_unique_keys(QueryLevel::Image, root));
        keys
    }

    fn unique_tags(&self, _root: QueryRootType) -> Vec<Tag> {
        vec![tags::SOP_INSTANCE_UID]
    }

    fn optional_tags(&self, _root: QueryRootType) -> Vec<Tag> {
        vec![
            tags::SPECIFIC_CHARACTER_SET,
            tags::SOP_CLASS_UID,
            tags::IMAGE_TYPE,
            tags::CONTENT_DATE,
            tags::CONTENT_TIME,
            tags::ACQUISITION_DATE,
            tags::ACQUISITION_TIME,
            tags::ACQUISITION_NUMBER,
            tags::INSTANCE_AVAILABILITY,
            tags::RETRIEVE_AE_TITLE,
            tags::NUMBER_OF_FRAMES,
            tags::ROWS,
            tags::COLUMNS,
            tags::BITS_ALLOCATED,
        ]
    }
}

impl QueryLevel {
    /// The schema of this level.
    pub fn schema(self) -> &'static dyn QueryBase {
        match self {
            QueryLevel::Patient => &QueryPatient,
            QueryLevel::Study => &QueryStudy,
            QueryLevel::Series => &QuerySeries,
            QueryLevel::Image => &QueryImage,
        }
    }
}
