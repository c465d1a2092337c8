use crate::bounds::GeoBoundingBox;

/// Overpass QL selecting toilet nodes, and wheelchair-accessible toilet nodes,
/// inside `b`.
pub fn toilet_query(b: &GeoBoundingBox) -> String {
    let bbox = format!("({}, {}, {}, {})", b.south, b.west, b.north, b.east);

    format!(
        "[out:json];
(
  node
    [amenity=toilets]
    {bbox};
  node
    [\"toilets:wheelchair\"=yes]
    {bbox};
);
out;
"
    )
}
