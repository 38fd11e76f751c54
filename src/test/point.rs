use crate::coord::Xy;
use crate::geometry::Point;

pub(crate) fn p0() -> Point<Xy> {
    Point::new(Xy::new(0., 1.))
}

pub(crate) fn p1() -> Point<Xy> {
    Point::new(Xy::new(1., 2.))
}

pub(crate) fn p2() -> Point<Xy> {
    Point::new(Xy::new(2., 3.))
}
