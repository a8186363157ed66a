use ad_area::downsample;
use ad_core::{Image, PackedRgb};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn test_image(width: usize, height: usize) -> Image<PackedRgb> {
    let mut pixels = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        let v = (i % 251) as u8;
        pixels.push(PackedRgb::from_channels([v, v.wrapping_add(85), v.wrapping_add(170)]));
    }
    Image::from_vec(width, height, pixels).expect("valid image")
}

fn bench_downsample_halving(c: &mut Criterion) {
    let img = test_image(1280, 1024);
    let view = img.as_view();

    c.bench_function("downsample_1280x1024_to_640x512", |b| {
        b.iter(|| {
            let out = downsample(black_box(&view), 640, 512).expect("valid target");
            black_box(out);
        });
    });
}

fn bench_downsample_fractional(c: &mut Criterion) {
    let img = test_image(1280, 1024);
    let view = img.as_view();

    c.bench_function("downsample_1280x1024_to_853x683", |b| {
        b.iter(|| {
            let out = downsample(black_box(&view), 853, 683).expect("valid target");
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_downsample_halving, bench_downsample_fractional);
criterion_main!(benches);
