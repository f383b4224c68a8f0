//! Tests for artview-model types.

use artview_model::{ArtworkId, ArtworkRecord, FetchedPage, NO_INSCRIPTIONS, PageIndex};

#[test]
fn artwork_deserializes_api_shape() {
    let json = r#"{
        "id": 27992,
        "title": "A Sunday on La Grande Jatte - 1884",
        "artist_display": "Georges Seurat\nFrench, 1859-1891",
        "place_of_origin": "France",
        "inscriptions": null,
        "date_start": 1884,
        "date_end": 1886
    }"#;

    let record: ArtworkRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, ArtworkId(27992));
    assert_eq!(record.place_of_origin, "France");
    assert_eq!(record.inscriptions, None);
    assert_eq!(record.date_start, 1884);
    assert_eq!(record.date_end, 1886);
    assert_eq!(record.inscriptions_or_default(), NO_INSCRIPTIONS);
}

#[test]
fn artwork_tolerates_null_and_missing_fields() {
    let json = r#"{
        "id": 5,
        "title": null,
        "artist_display": "Unknown",
        "date_start": null
    }"#;

    let record: ArtworkRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.title, "");
    assert_eq!(record.place_of_origin, "");
    assert_eq!(record.date_start, 0);
    assert_eq!(record.date_end, 0);
}

#[test]
fn artwork_requires_id() {
    let json = r#"{ "title": "No identity" }"#;
    assert!(serde_json::from_str::<ArtworkRecord>(json).is_err());
}

#[test]
fn empty_page_is_exhausted() {
    let page = FetchedPage::empty();
    assert!(page.is_exhausted());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.len(), 0);
}

#[test]
fn page_index_serializes_as_number() {
    let json = serde_json::to_string(&PageIndex::new(3)).unwrap();
    assert_eq!(json, "3");
}
