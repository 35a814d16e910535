use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paint_palette::{ExtractionConfig, MixRecipeSolver, PaletteExtractor, PixelBuffer, RgbColor};

/// Diagonal gradient, large enough to exercise the downscale
fn gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / width) as u8);
            data.push((y * 255 / height) as u8);
            data.push(((x + y) * 255 / (width + height)) as u8);
        }
    }
    PixelBuffer::new(data, width, height, 3)
}

fn benchmark_extraction(c: &mut Criterion) {
    let buffer = gradient_buffer(640, 480);
    let extractor = PaletteExtractor::with_config(ExtractionConfig {
        seed: Some(42),
        ..ExtractionConfig::default()
    })
    .expect("default extraction config is valid");

    c.bench_function("extract_palette_640x480_k6", |b| {
        b.iter(|| extractor.extract(black_box(&buffer), black_box(6)))
    });
    c.bench_function("extract_palette_640x480_k12", |b| {
        b.iter(|| extractor.extract(black_box(&buffer), black_box(12)))
    });
}

fn benchmark_recipe(c: &mut Criterion) {
    let solver = MixRecipeSolver::new();
    c.bench_function("solve_recipe", |b| {
        b.iter(|| solver.solve(black_box(RgbColor::new(0xFF, 0x6B, 0x6B))))
    });
}

criterion_group!(benches, benchmark_extraction, benchmark_recipe);
criterion_main!(benches);
