use dcmkit_core::{DataElement, DataSet, Tag, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_query::{QueryLevel, QueryRootType, RootQuery, ValidationError};
use rstest::rstest;

fn query_from(root: QueryRootType, elements: &[(Tag, VR, &str)]) -> RootQuery {
    let ds: DataSet = elements
        .iter()
        .map(|&(tag, vr, value)| DataElement::new_str(tag, vr, value))
        .collect();
    let mut query = RootQuery::new(root);
    query.add_query_data_set(&ds);
    query
}

#[rstest]
#[case::empty(&[], false)]
#[case::patient_level(&[(tags::QUERY_RETRIEVE_LEVEL, VR::CS, "PATIENT")], false)]
#[case::study_uid(
    &[
        (tags::QUERY_RETRIEVE_LEVEL, VR::CS, "STUDY "),
        (tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
    ],
    true
)]
#[case::patient_name_at_study_level(
    &[
        (tags::QUERY_RETRIEVE_LEVEL, VR::CS, "STUDY "),
        (tags::PATIENT_NAME, VR::PN, "Doe^John"),
    ],
    false
)]
#[case::frame_level(
    &[
        (tags::QUERY_RETRIEVE_LEVEL, VR::CS, "FRAME"),
        (tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
        (tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4"),
        (tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5"),
        (tags::INSTANCE_NUMBER, VR::IS, "1"),
    ],
    true
)]
#[case::unknown_level(&[(tags::QUERY_RETRIEVE_LEVEL, VR::CS, "SLICE")], false)]
#[case::series_level(
    &[
        (tags::QUERY_RETRIEVE_LEVEL, VR::CS, "SERIES"),
        (tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
        (tags::MODALITY, VR::CS, "CT"),
        (tags::SERIES_INSTANCE_UID, VR::UI, ""),
    ],
    true
)]
#[case::no_level(&[(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3")], false)]
fn study_root_validation(#[case] elements: &[(Tag, VR, &str)], #[case] valid: bool) {
    let query = query_from(QueryRootType::StudyRoot, elements);
    assert_eq!(query.validate_query(), valid);
    assert_eq!(query.check_query().is_ok(), valid);
}

#[rstest]
#[case::patient_level(
    &[
        (tags::QUERY_RETRIEVE_LEVEL, VR::CS, "PATIENT"),
        (tags::PATIENT_NAME, VR::PN, "Doe^*"),
        (tags::PATIENT_ID, VR::LO, ""),
    ],
    true
)]
#[case::study_level_with_patient_id(
    &[
        (tags::QUERY_RETRIEVE_LEVEL, VR::CS, "STUDY"),
        (tags::PATIENT_ID, VR::LO, "12345"),
        (tags::STUDY_DATE, VR::DA, "20240101-"),
    ],
    true
)]
#[case::study_attribute_at_patient_level(
    &[
        (tags::QUERY_RETRIEVE_LEVEL, VR::CS, "PATIENT"),
        (tags::STUDY_DATE, VR::DA, "20240101"),
    ],
    false
)]
#[case::unknown_level(&[(tags::QUERY_RETRIEVE_LEVEL, VR::CS, "WORKLIST")], false)]
fn patient_root_validation(#[case] elements: &[(Tag, VR, &str)], #[case] valid: bool) {
    let query = query_from(QueryRootType::PatientRoot, elements);
    assert_eq!(query.validate_query(), valid);
}

#[test]
fn validation_reasons() {
    let query = RootQuery::study_root();
    assert_eq!(query.check_query(), Err(ValidationError::EmptyQuery));

    let query = query_from(
        QueryRootType::StudyRoot,
        &[(tags::QUERY_RETRIEVE_LEVEL, VR::CS, "PATIENT")],
    );
    assert_eq!(
        query.check_query(),
        Err(ValidationError::LevelNotAllowed {
            level: QueryLevel::Patient,
            root: QueryRootType::StudyRoot,
        })
    );

    let query = query_from(
        QueryRootType::StudyRoot,
        &[(tags::QUERY_RETRIEVE_LEVEL, VR::CS, "SLICE")],
    );
    assert_eq!(
        query.check_query(),
        Err(ValidationError::InvalidQueryLevel {
            value: "SLICE".to_string()
        })
    );

    let query = query_from(
        QueryRootType::StudyRoot,
        &[
            (tags::QUERY_RETRIEVE_LEVEL, VR::CS, "STUDY"),
            (tags::PATIENT_NAME, VR::PN, "Doe^John"),
        ],
    );
    assert_eq!(
        query.check_query(),
        Err(ValidationError::TagNotInSchema {
            tag: tags::PATIENT_NAME,
            level: QueryLevel::Study,
        })
    );
}

#[test]
fn write_query_as_implicit_vr_little_endian() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("query.dcm");

    let mut query = RootQuery::study_root();
    query
        .set_search_parameter_by_keyword("QueryRetrieveLevel", "STUDY")
        .unwrap();
    query
        .set_search_parameter_by_tag(tags::STUDY_INSTANCE_UID, "1.2.3")
        .unwrap();
    query.write_query(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    // no preamble, no file meta group: the first element is (0008,0052)
    assert_eq!(&bytes[..8], &[0x08, 0x00, 0x52, 0x00, 0x06, 0x00, 0x00, 0x00]);
    assert_eq!(&bytes[8..14], b"STUDY ");

    let ds = dcmkit_object::open_dataset(&path).unwrap();
    assert_eq!(&ds, query.query_data_set());
}

#[test]
fn write_query_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("query.dcm");
    let query = RootQuery::patient_root();
    assert!(query.write_query(path).is_err());
}
