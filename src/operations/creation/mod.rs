mod make_polygon;

pub use make_polygon::MakePolygon;
