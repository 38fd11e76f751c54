use crate::coord::Xy;
use crate::geometry::LineString;

pub(crate) fn ls0() -> LineString<Xy> {
    LineString::new(vec![Xy::new(0., 1.), Xy::new(1., 2.)])
}

pub(crate) fn ls1() -> LineString<Xy> {
    LineString::new(vec![Xy::new(3., 4.), Xy::new(5., 6.)])
}
