//! Data element tag declarations.
//!
//! Each constant maps an attribute keyword to its tag,
//! and [`ENTRIES`] lists them with their value representation
//! for the run-time dictionary.

use dcmkit_core::dictionary::DictionaryEntryRef;
use dcmkit_core::header::{Tag, VirtualVr};
use dcmkit_core::VR::*;

type E = DictionaryEntryRef<'static>;

/// FileMetaInformationGroupLength (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SpecificCharacterSet (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// StudyTime (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// QueryRetrieveLevel (0008,0052) CS
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// RetrieveAETitle (0008,0054) AE
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// InstanceAvailability (0008,0056) CS
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// SOPClassesInStudy (0008,0062) UI
#[rustfmt::skip]
pub const SOP_CLASSES_IN_STUDY: Tag = Tag(0x0008, 0x0062);
/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// StationName (0008,1010) SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032) SQ
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// NameOfPhysiciansReadingStudy (0008,1060) PN
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// AdmittingDiagnosesDescription (0008,1080) LO
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// ReferencedStudySequence (0008,1110) SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPatientSequence (0008,1120) SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// ReferencedSOPClassUID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// PatientName (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// OtherPatientIDs (0010,1000) LO
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001) PN
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// PatientAge (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// EthnicGroup (0010,2160) SH
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation (0010,2180) SH
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// AdditionalPatientHistory (0010,21B0) LT
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PatientComments (0010,4000) LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// BodyPartExamined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// SliceThickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// ProtocolName (0018,1030) LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// StudyInstanceUID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// ImagePositionPatient (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// OtherStudyNumbers (0020,1070) IS
#[rustfmt::skip]
pub const OTHER_STUDY_NUMBERS: Tag = Tag(0x0020, 0x1070);
/// NumberOfPatientRelatedStudies (0020,1200) IS
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_STUDIES: Tag = Tag(0x0020, 0x1200);
/// NumberOfPatientRelatedSeries (0020,1202) IS
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_SERIES: Tag = Tag(0x0020, 0x1202);
/// NumberOfPatientRelatedInstances (0020,1204) IS
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1204);
/// NumberOfStudyRelatedSeries (0020,1206) IS
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_SERIES: Tag = Tag(0x0020, 0x1206);
/// NumberOfStudyRelatedInstances (0020,1208) IS
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// NumberOfSeriesRelatedInstances (0020,1209) IS
#[rustfmt::skip]
pub const NUMBER_OF_SERIES_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1209);
/// SamplesPerPixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US or SS
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US or SS
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// PixelPaddingValue (0028,0120) US or SS
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// WindowCenter (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RedPaletteColorLookupTableDescriptor (0028,1101) US or SS
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GrayLookupTableData (0028,1200) US or SS or OW
#[rustfmt::skip]
pub const GRAY_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1200);
/// LossyImageCompression (0028,2110) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// PerformedProcedureStepStartDate (0040,0244) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// RequestAttributesSequence (0040,0275) SQ
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// FloatPixelData (7FE0,0008) OF
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OB or OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// All attributes known to the standard dictionary.
#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: VirtualVr::Exact(UL) },
    E { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: VirtualVr::Exact(OB) },
    E { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: VirtualVr::Exact(UI) },
    E { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: VirtualVr::Exact(UI) },
    E { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: VirtualVr::Exact(UI) },
    E { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: VirtualVr::Exact(UI) },
    E { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: VirtualVr::Exact(SH) },
    E { tag: SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: VirtualVr::Exact(AE) },
    E { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: VirtualVr::Exact(CS) },
    E { tag: IMAGE_TYPE, alias: "ImageType", vr: VirtualVr::Exact(CS) },
    E { tag: INSTANCE_CREATION_DATE, alias: "InstanceCreationDate", vr: VirtualVr::Exact(DA) },
    E { tag: INSTANCE_CREATION_TIME, alias: "InstanceCreationTime", vr: VirtualVr::Exact(TM) },
    E { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: VirtualVr::Exact(UI) },
    E { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: VirtualVr::Exact(UI) },
    E { tag: STUDY_DATE, alias: "StudyDate", vr: VirtualVr::Exact(DA) },
    E { tag: SERIES_DATE, alias: "SeriesDate", vr: VirtualVr::Exact(DA) },
    E { tag: ACQUISITION_DATE, alias: "AcquisitionDate", vr: VirtualVr::Exact(DA) },
    E { tag: CONTENT_DATE, alias: "ContentDate", vr: VirtualVr::Exact(DA) },
    E { tag: STUDY_TIME, alias: "StudyTime", vr: VirtualVr::Exact(TM) },
    E { tag: SERIES_TIME, alias: "SeriesTime", vr: VirtualVr::Exact(TM) },
    E { tag: ACQUISITION_TIME, alias: "AcquisitionTime", vr: VirtualVr::Exact(TM) },
    E { tag: CONTENT_TIME, alias: "ContentTime", vr: VirtualVr::Exact(TM) },
    E { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: VirtualVr::Exact(SH) },
    E { tag: QUERY_RETRIEVE_LEVEL, alias: "QueryRetrieveLevel", vr: VirtualVr::Exact(CS) },
    E { tag: RETRIEVE_AE_TITLE, alias: "RetrieveAETitle", vr: VirtualVr::Exact(AE) },
    E { tag: INSTANCE_AVAILABILITY, alias: "InstanceAvailability", vr: VirtualVr::Exact(CS) },
    E { tag: MODALITY, alias: "Modality", vr: VirtualVr::Exact(CS) },
    E { tag: MODALITIES_IN_STUDY, alias: "ModalitiesInStudy", vr: VirtualVr::Exact(CS) },
    E { tag: SOP_CLASSES_IN_STUDY, alias: "SOPClassesInStudy", vr: VirtualVr::Exact(UI) },
    E { tag: MANUFACTURER, alias: "Manufacturer", vr: VirtualVr::Exact(LO) },
    E { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: VirtualVr::Exact(LO) },
    E { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: VirtualVr::Exact(PN) },
    E { tag: STATION_NAME, alias: "StationName", vr: VirtualVr::Exact(SH) },
    E { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: VirtualVr::Exact(LO) },
    E { tag: PROCEDURE_CODE_SEQUENCE, alias: "ProcedureCodeSequence", vr: VirtualVr::Exact(SQ) },
    E { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: VirtualVr::Exact(LO) },
    E { tag: NAME_OF_PHYSICIANS_READING_STUDY, alias: "NameOfPhysiciansReadingStudy", vr: VirtualVr::Exact(PN) },
    E { tag: ADMITTING_DIAGNOSES_DESCRIPTION, alias: "AdmittingDiagnosesDescription", vr: VirtualVr::Exact(LO) },
    E { tag: REFERENCED_STUDY_SEQUENCE, alias: "ReferencedStudySequence", vr: VirtualVr::Exact(SQ) },
    E { tag: REFERENCED_PATIENT_SEQUENCE, alias: "ReferencedPatientSequence", vr: VirtualVr::Exact(SQ) },
    E { tag: REFERENCED_SOP_CLASS_UID, alias: "ReferencedSOPClassUID", vr: VirtualVr::Exact(UI) },
    E { tag: REFERENCED_SOP_INSTANCE_UID, alias: "ReferencedSOPInstanceUID", vr: VirtualVr::Exact(UI) },
    E { tag: PATIENT_NAME, alias: "PatientName", vr: VirtualVr::Exact(PN) },
    E { tag: PATIENT_ID, alias: "PatientID", vr: VirtualVr::Exact(LO) },
    E { tag: ISSUER_OF_PATIENT_ID, alias: "IssuerOfPatientID", vr: VirtualVr::Exact(LO) },
    E { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: VirtualVr::Exact(DA) },
    E { tag: PATIENT_BIRTH_TIME, alias: "PatientBirthTime", vr: VirtualVr::Exact(TM) },
    E { tag: PATIENT_SEX, alias: "PatientSex", vr: VirtualVr::Exact(CS) },
    E { tag: OTHER_PATIENT_IDS, alias: "OtherPatientIDs", vr: VirtualVr::Exact(LO) },
    E { tag: OTHER_PATIENT_NAMES, alias: "OtherPatientNames", vr: VirtualVr::Exact(PN) },
    E { tag: PATIENT_AGE, alias: "PatientAge", vr: VirtualVr::Exact(AS) },
    E { tag: PATIENT_SIZE, alias: "PatientSize", vr: VirtualVr::Exact(DS) },
    E { tag: PATIENT_WEIGHT, alias: "PatientWeight", vr: VirtualVr::Exact(DS) },
    E { tag: ETHNIC_GROUP, alias: "EthnicGroup", vr: VirtualVr::Exact(SH) },
    E { tag: OCCUPATION, alias: "Occupation", vr: VirtualVr::Exact(SH) },
    E { tag: ADDITIONAL_PATIENT_HISTORY, alias: "AdditionalPatientHistory", vr: VirtualVr::Exact(LT) },
    E { tag: PATIENT_COMMENTS, alias: "PatientComments", vr: VirtualVr::Exact(LT) },
    E { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: VirtualVr::Exact(CS) },
    E { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: VirtualVr::Exact(DS) },
    E { tag: PROTOCOL_NAME, alias: "ProtocolName", vr: VirtualVr::Exact(LO) },
    E { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: VirtualVr::Exact(UI) },
    E { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: VirtualVr::Exact(UI) },
    E { tag: STUDY_ID, alias: "StudyID", vr: VirtualVr::Exact(SH) },
    E { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: VirtualVr::Exact(IS) },
    E { tag: ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: VirtualVr::Exact(IS) },
    E { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: VirtualVr::Exact(IS) },
    E { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: VirtualVr::Exact(DS) },
    E { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: VirtualVr::Exact(DS) },
    E { tag: OTHER_STUDY_NUMBERS, alias: "OtherStudyNumbers", vr: VirtualVr::Exact(IS) },
    E { tag: NUMBER_OF_PATIENT_RELATED_STUDIES, alias: "NumberOfPatientRelatedStudies", vr: VirtualVr::Exact(IS) },
    E { tag: NUMBER_OF_PATIENT_RELATED_SERIES, alias: "NumberOfPatientRelatedSeries", vr: VirtualVr::Exact(IS) },
    E { tag: NUMBER_OF_PATIENT_RELATED_INSTANCES, alias: "NumberOfPatientRelatedInstances", vr: VirtualVr::Exact(IS) },
    E { tag: NUMBER_OF_STUDY_RELATED_SERIES, alias: "NumberOfStudyRelatedSeries", vr: VirtualVr::Exact(IS) },
    E { tag: NUMBER_OF_STUDY_RELATED_INSTANCES, alias: "NumberOfStudyRelatedInstances", vr: VirtualVr::Exact(IS) },
    E { tag: NUMBER_OF_SERIES_RELATED_INSTANCES, alias: "NumberOfSeriesRelatedInstances", vr: VirtualVr::Exact(IS) },
    E { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: VirtualVr::Exact(US) },
    E { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: VirtualVr::Exact(CS) },
    E { tag: PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: VirtualVr::Exact(US) },
    E { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: VirtualVr::Exact(IS) },
    E { tag: ROWS, alias: "Rows", vr: VirtualVr::Exact(US) },
    E { tag: COLUMNS, alias: "Columns", vr: VirtualVr::Exact(US) },
    E { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: VirtualVr::Exact(DS) },
    E { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: VirtualVr::Exact(US) },
    E { tag: BITS_STORED, alias: "BitsStored", vr: VirtualVr::Exact(US) },
    E { tag: HIGH_BIT, alias: "HighBit", vr: VirtualVr::Exact(US) },
    E { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: VirtualVr::Exact(US) },
    E { tag: SMALLEST_IMAGE_PIXEL_VALUE, alias: "SmallestImagePixelValue", vr: VirtualVr::UsSs },
    E { tag: LARGEST_IMAGE_PIXEL_VALUE, alias: "LargestImagePixelValue", vr: VirtualVr::UsSs },
    E { tag: PIXEL_PADDING_VALUE, alias: "PixelPaddingValue", vr: VirtualVr::UsSs },
    E { tag: WINDOW_CENTER, alias: "WindowCenter", vr: VirtualVr::Exact(DS) },
    E { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: VirtualVr::Exact(DS) },
    E { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: VirtualVr::Exact(DS) },
    E { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: VirtualVr::Exact(DS) },
    E { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "RedPaletteColorLookupTableDescriptor", vr: VirtualVr::UsSs },
    E { tag: GRAY_LOOKUP_TABLE_DATA, alias: "GrayLookupTableData", vr: VirtualVr::UsSsOw },
    E { tag: LOSSY_IMAGE_COMPRESSION, alias: "LossyImageCompression", vr: VirtualVr::Exact(CS) },
    E { tag: PERFORMED_PROCEDURE_STEP_START_DATE, alias: "PerformedProcedureStepStartDate", vr: VirtualVr::Exact(DA) },
    E { tag: PERFORMED_PROCEDURE_STEP_START_TIME, alias: "PerformedProcedureStepStartTime", vr: VirtualVr::Exact(TM) },
    E { tag: REQUEST_ATTRIBUTES_SEQUENCE, alias: "RequestAttributesSequence", vr: VirtualVr::Exact(SQ) },
    E { tag: FLOAT_PIXEL_DATA, alias: "FloatPixelData", vr: VirtualVr::Exact(OF) },
    E { tag: DOUBLE_FLOAT_PIXEL_DATA, alias: "DoubleFloatPixelData", vr: VirtualVr::Exact(OD) },
    E { tag: PIXEL_DATA, alias: "PixelData", vr: VirtualVr::ObOw },
];
