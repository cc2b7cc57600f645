#![no_main]

use callout_table::core::{constrain_tail, polygon_contains, table_vertices};
use callout_table::{load_or_default, ShapeId, TableOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let opts = TableOptions::default();
    let shape = load_or_default(json, ShapeId::new("shape:fuzz"), &opts);

    let expected = shape.grid().map_or(0, |g| g.cell_count());
    assert_eq!(shape.text().len(), expected);
    assert!(shape.height() >= shape.min_height());

    let shape = constrain_tail(shape, &opts);
    let vertices = table_vertices(&shape);
    let _ = polygon_contains(&vertices, shape.center());
});
