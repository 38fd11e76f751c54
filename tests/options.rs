use geowire::io::twkb::TwkbWriteOptions;
use geowire::io::wkb::{Endianness, WkbWriteOptions};
use geowire::io::wkt::WktWriteOptions;

#[test]
fn partial_json() {
    let options: WkbWriteOptions = serde_json::from_str(r#"{"byte_order": "BigEndian"}"#).unwrap();
    assert_eq!(options.byte_order, Endianness::BigEndian);
    assert_eq!(options.srid, None);

    let options: WktWriteOptions = serde_json::from_str(r#"{"srid": 4326}"#).unwrap();
    assert_eq!(options, WktWriteOptions::ewkt(4326));

    let options: TwkbWriteOptions =
        serde_json::from_str(r#"{"precision": 5, "include_size": true, "ids": [1, 2]}"#).unwrap();
    assert_eq!(options.precision, 5);
    assert!(options.include_size);
    assert!(!options.include_bbox);
    assert_eq!(options.ids, Some(vec![1, 2]));
    assert!(options.validate().is_ok());
}

#[test]
fn defaults() {
    let options: TwkbWriteOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, TwkbWriteOptions::default());
    assert_eq!(options.precision, 0);

    let options: WkbWriteOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options.byte_order, Endianness::LittleEndian);
}

#[test]
fn serialize() {
    let json = serde_json::to_string(&WkbWriteOptions::ewkb(4326)).unwrap();
    assert_eq!(json, r#"{"byte_order":"LittleEndian","srid":4326}"#);

    let out_of_range: TwkbWriteOptions = serde_json::from_str(r#"{"precision": 9}"#).unwrap();
    assert!(out_of_range.validate().is_err());
}
