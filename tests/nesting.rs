mod common;

use geowire::coord::Xy;
use geowire::geometry::{AnyGeometry, Geometry, MultiPolygon};
use geowire::io::twkb::{to_twkb, TwkbRecord, TwkbWriteOptions};
use geowire::io::wkb::{to_ewkb, to_wkb, Endianness, WkbRecord};
use geowire::io::wkt::{to_ewkt, to_wkt, WktRecord};
use geowire::GeometryRecord;

fn assert_same_structure(decoded: &MultiPolygon<Xy>, expected: &MultiPolygon<Xy>) {
    assert_eq!(decoded.num_polygons(), expected.num_polygons());
    for (polygon, expected) in decoded.polygons().iter().zip(expected.polygons()) {
        assert_eq!(polygon.num_rings(), expected.num_rings());
        assert_eq!(polygon.holes().len(), polygon.num_rings() - 1);
        for i in 0..polygon.holes().len() {
            assert!(std::ptr::eq(&polygon.holes()[i], &polygon.rings()[i + 1]));
        }
        for (ring, expected) in polygon.rings().iter().zip(expected.rings()) {
            assert_eq!(ring.coords(), expected.coords());
        }
    }
}

#[test]
fn multi_polygon_with_hole() {
    let multi_polygon = common::nested_multi_polygon();
    let geom = AnyGeometry::XY(Geometry::MultiPolygon(multi_polygon.clone()));

    let wkb = to_wkb(&geom, Endianness::LittleEndian).unwrap();
    let decoded = WkbRecord::try_new(&wkb).unwrap().get_multi_polygon().unwrap();
    assert_same_structure(&decoded, &multi_polygon);

    let ewkb = to_ewkb(&geom, 4326, Endianness::BigEndian).unwrap();
    let record = WkbRecord::try_new(&ewkb).unwrap();
    assert_eq!(record.srid(), Some(4326));
    assert_same_structure(&record.get_multi_polygon().unwrap(), &multi_polygon);

    let wkt = to_wkt(&geom).unwrap();
    let decoded = WktRecord::try_new(&wkt).unwrap().get_multi_polygon().unwrap();
    assert_same_structure(&decoded, &multi_polygon);

    let ewkt = to_ewkt(&geom, 4326).unwrap();
    let decoded = WktRecord::try_new(&ewkt).unwrap().get_multi_polygon().unwrap();
    assert_same_structure(&decoded, &multi_polygon);

    for precision in [0, 3] {
        let options = TwkbWriteOptions::default().with_precision(precision);
        let twkb = to_twkb(&geom, options).unwrap();
        let decoded = TwkbRecord::try_new(&twkb).unwrap().get_multi_polygon().unwrap();
        assert_same_structure(&decoded, &multi_polygon);
    }
}

#[test]
fn twkb_ids_and_bbox() {
    let multi_polygon = common::nested_multi_polygon();
    let geom = AnyGeometry::XY(Geometry::MultiPolygon(multi_polygon.clone()));
    let options = TwkbWriteOptions {
        include_bbox: true,
        include_size: true,
        ids: Some(vec![42, -3]),
        ..Default::default()
    };
    let buf = to_twkb(&geom, options).unwrap();
    let record = TwkbRecord::try_new(&buf).unwrap();

    assert_eq!(record.ids().unwrap(), Some(vec![42, -3]));
    let bbox = record.bbox().unwrap();
    assert_eq!((bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y), (0., 0., 30., 30.));
    assert_eq!(record.byte_len().unwrap(), buf.len());
    assert_same_structure(&record.get_multi_polygon().unwrap(), &multi_polygon);
}
