use approx::assert_relative_eq;
use geowire::coord::{Xy, Xyz};
use geowire::geometry::{LineString, Point};
use geowire::io::twkb::{TwkbRecord, TwkbWriteOptions, TwkbWriter};
use geowire::io::wkt::{WktRecord, WktWriteOptions, WktWriter};
use geowire::{GeometryRecord, GeometryWriter};

const POINT: [u8; 4] = [0x01, 0x00, 0x3c, 0x14];
const POINT_Z: [u8; 6] = [0x01, 0x08, 0x01, 0x3c, 0x14, 0x28];
const LINE_STRING: [u8; 15] = [
    0x22, 0x00, 0x03, 0xda, 0x04, 0xcc, 0x01, 0x8b, 0x03, 0x94, 0x03, 0xdc, 0x04, 0xcc, 0x01,
];

#[test]
fn twkb_point() {
    let point = Point::new(Xy::new(30., 10.));
    let mut writer = TwkbWriter::new(vec![]);
    writer.write_point(&point).unwrap();
    assert_eq!(writer.into_inner(), POINT);

    let record = TwkbRecord::try_new(&POINT).unwrap();
    assert_eq!(record.get_point().unwrap(), point);
}

#[test]
fn twkb_point_z() {
    let point = Point::new(Xyz::new(30., 10., 20.));
    let mut writer = TwkbWriter::new(vec![]);
    writer.write_point(&point).unwrap();
    assert_eq!(writer.into_inner(), POINT_Z);

    let record = TwkbRecord::try_new(&POINT_Z).unwrap();
    assert_eq!(record.get_point_z().unwrap(), point);
}

#[test]
fn twkb_line_string() {
    let coords = [(30.1, 10.2), (10.3, 30.4), (40.5, 40.6)];
    let line_string: LineString<Xy> = coords.iter().map(|&(x, y)| Xy::new(x, y)).collect();
    let options = TwkbWriteOptions::default().with_precision(1);
    let mut writer = TwkbWriter::try_new(vec![], options).unwrap();
    writer.write_line_string(&line_string).unwrap();
    assert_eq!(writer.into_inner(), LINE_STRING);

    let decoded = TwkbRecord::try_new(&LINE_STRING)
        .unwrap()
        .get_line_string()
        .unwrap();
    assert_eq!(decoded.num_coords(), coords.len());
    for (coord, (x, y)) in decoded.coords().iter().zip(coords) {
        assert_relative_eq!(coord.x, x);
        assert_relative_eq!(coord.y, y);
    }
}

#[test]
fn ewkt_literal() {
    let text = "SRID=4326;POINT Z (1 1 80)";
    let record = WktRecord::try_new(text).unwrap();
    assert_eq!(record.srid(), Some(4326));
    let point = record.get_point_z().unwrap();
    assert_eq!(point, Point::new(Xyz::new(1., 1., 80.)));

    let srid = record.srid().unwrap();
    let mut writer = WktWriter::with_options(String::new(), WktWriteOptions::ewkt(srid));
    writer.write_point(&point).unwrap();
    assert_eq!(writer.into_inner(), text);
}
