use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wargame_viewer::core::{default_maps, square_tiles_into, HexLayout, TerrainGrid, ViewportState};
use wargame_viewer::term::DotCanvas;
use wargame_viewer::types::Rgb;

fn largest_map() -> TerrainGrid {
    let (_, doc) = default_maps()
        .into_iter()
        .max_by_key(|(_, d)| d.width * d.height)
        .unwrap();
    TerrainGrid::from_document(doc).unwrap()
}

fn bench_square_tiles(c: &mut Criterion) {
    let grid = largest_map();
    let view = ViewportState::new(-120.0, -80.0, 1.3);
    let mut shapes = Vec::with_capacity(grid.len());

    c.bench_function("square_tiles_40x30", |b| {
        b.iter(|| {
            square_tiles_into(black_box(&grid), black_box(&view), 50.0, &mut shapes);
        })
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let grid = largest_map();
    let view = ViewportState::new(0.0, 0.0, 0.5);
    let mut shapes = Vec::new();
    square_tiles_into(&grid, &view, 50.0, &mut shapes);
    let mut canvas = DotCanvas::new(200, 60, 10.0);

    c.bench_function("rasterize_40x30_200x60", |b| {
        b.iter(|| {
            canvas.clear(Rgb::new(50, 50, 50));
            for shape in &shapes {
                canvas.draw_shape(black_box(shape));
            }
        })
    });
}

fn bench_hex_shapes(c: &mut Criterion) {
    let layout = HexLayout::default();
    let view = ViewportState::new(15.0, -5.0, 2.0);

    c.bench_function("hex_shapes_10x10", |b| {
        b.iter(|| black_box(layout.shapes(black_box(&view))))
    });
}

criterion_group!(benches, bench_square_tiles, bench_rasterize, bench_hex_shapes);
criterion_main!(benches);
