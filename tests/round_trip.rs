mod common;

use approx::assert_relative_eq;
use geowire::coord::{Xy, Xyzm};
use geowire::datatypes::GeometryType;
use geowire::geometry::{AnyGeometry, Geometry, LineString, Point};
use geowire::io::twkb::{TwkbRecord, TwkbWriteOptions, TwkbWriter};
use geowire::io::wkb::{Endianness, WkbRecord, WkbWriteOptions, WkbWriter};
use geowire::io::wkt::{WktRecord, WktWriteOptions, WktWriter};
use geowire::{GeometryRecord, GeometryWriter};

fn wkb(geom: &AnyGeometry, options: WkbWriteOptions) -> Vec<u8> {
    let mut writer = WkbWriter::with_options(vec![], options);
    writer.write_any_geometry(geom).unwrap();
    writer.into_inner()
}

fn wkt(geom: &AnyGeometry, options: WktWriteOptions) -> String {
    let mut writer = WktWriter::with_options(String::new(), options);
    writer.write_any_geometry(geom).unwrap();
    writer.into_inner()
}

fn twkb(geom: &AnyGeometry, options: TwkbWriteOptions) -> Vec<u8> {
    let mut writer = TwkbWriter::try_new(vec![], options).unwrap();
    writer.write_any_geometry(geom).unwrap();
    writer.into_inner()
}

fn assert_round_trip(record: &dyn GeometryRecord, geom: &AnyGeometry, srid: Option<i32>) {
    assert_eq!(record.geometry_type(), geom.geometry_type());
    assert_eq!(record.srid(), srid);
    assert!(!record.is_null());
    assert_eq!(&record.get_geometry().unwrap(), geom);
}

#[test]
fn wkb_every_type() {
    for geometry_type in GeometryType::all() {
        let geom = common::sample(geometry_type, 1.5);
        for byte_order in [Endianness::LittleEndian, Endianness::BigEndian] {
            let options = WkbWriteOptions::default().with_byte_order(byte_order);
            let buf = wkb(&geom, options);
            assert_round_trip(&WkbRecord::try_new(&buf).unwrap(), &geom, None);
        }
    }
}

#[test]
fn ewkb_every_type() {
    for geometry_type in GeometryType::all() {
        let geom = common::sample(geometry_type, 1.5);
        let buf = wkb(&geom, WkbWriteOptions::ewkb(3857));
        let record = WkbRecord::try_new(&buf).unwrap();
        assert!(record.is_extended());
        assert_round_trip(&record, &geom, Some(3857));
    }
}

#[test]
fn wkt_every_type() {
    for geometry_type in GeometryType::all() {
        let geom = common::sample(geometry_type, 0.1);
        let text = wkt(&geom, Default::default());
        assert_round_trip(&WktRecord::try_new(&text).unwrap(), &geom, None);
    }
}

#[test]
fn ewkt_every_type() {
    for geometry_type in GeometryType::all() {
        let geom = common::sample(geometry_type, 0.1);
        let text = wkt(&geom, WktWriteOptions::ewkt(4326));
        assert!(text.starts_with("SRID=4326;"));
        assert_round_trip(&WktRecord::try_new(&text).unwrap(), &geom, Some(4326));
    }
}

#[test]
fn twkb_precision_zero() {
    for geometry_type in GeometryType::all() {
        let geom = common::sample(geometry_type, 1.);
        let buf = twkb(&geom, Default::default());
        assert_round_trip(&TwkbRecord::try_new(&buf).unwrap(), &geom, None);
    }
}

#[test]
fn twkb_precision_two() {
    let options = TwkbWriteOptions {
        precision: 2,
        z_precision: 2,
        m_precision: 2,
        include_bbox: true,
        include_size: true,
        ids: None,
    };
    for geometry_type in GeometryType::all() {
        let geom = common::sample(geometry_type, 0.25);
        let buf = twkb(&geom, options.clone());
        let record = TwkbRecord::try_new(&buf).unwrap();
        assert_eq!(record.precision(), 2);
        assert_eq!(record.byte_len().unwrap(), buf.len());
        assert_round_trip(&record, &geom, None);
    }
}

#[test]
fn twkb_rounds_to_precision() {
    let geom = common::sample(GeometryType::all().next().unwrap(), 0.123456);
    let buf = twkb(&geom, TwkbWriteOptions::default().with_precision(3));
    let decoded = TwkbRecord::try_new(&buf).unwrap().get_point().unwrap();
    let coord = decoded.coord().unwrap();
    assert_relative_eq!(coord.x, 3.704, epsilon = 1e-9);
    assert_relative_eq!(coord.y, 3.827, epsilon = 1e-9);
}

#[test]
fn wkt_fixed_precision() {
    let geom = common::sample(GeometryType::all().next().unwrap(), 0.123456);
    let text = wkt(&geom, WktWriteOptions::default().with_precision(3));
    assert_eq!(text, "POINT (3.704 3.827)");
}

#[test]
fn twkb_mixed_precisions() {
    let options = TwkbWriteOptions {
        precision: 2,
        z_precision: -1,
        m_precision: 3,
        include_bbox: true,
        include_size: true,
        ids: None,
    };
    let geom = AnyGeometry::XYZM(Geometry::LineString(LineString::new(vec![
        Xyzm::new(1.23, -4.56, 120., 0.125),
        Xyzm::new(-7.89, 10.01, -3450., 9.999),
        Xyzm::new(0.5, 0., 0., -0.001),
    ])));
    let buf = twkb(&geom, options.clone());
    let record = TwkbRecord::try_new(&buf).unwrap();
    assert_eq!(record.precision(), 2);
    assert_eq!(record.byte_len().unwrap(), buf.len());
    assert_round_trip(&record, &geom, None);

    for geometry_type in GeometryType::all() {
        let geom = common::sample(geometry_type, 10.);
        let buf = twkb(&geom, options.clone());
        assert_round_trip(&TwkbRecord::try_new(&buf).unwrap(), &geom, None);
    }
}

#[test]
fn twkb_negative_precision() {
    let options = TwkbWriteOptions::default().with_precision(-2);
    for geometry_type in GeometryType::all() {
        let geom = common::sample(geometry_type, 100.);
        let buf = twkb(&geom, options.clone());
        let record = TwkbRecord::try_new(&buf).unwrap();
        assert_eq!(record.precision(), -2);
        assert_round_trip(&record, &geom, None);
    }

    // rounds half away from zero to the nearest hundred
    let geom = AnyGeometry::XY(Geometry::Point(Point::new(Xy::new(1249., -1250.))));
    let buf = twkb(&geom, options);
    let coord = TwkbRecord::try_new(&buf)
        .unwrap()
        .get_point()
        .unwrap()
        .coord()
        .unwrap();
    assert_eq!(coord, Xy::new(1200., -1300.));
}
