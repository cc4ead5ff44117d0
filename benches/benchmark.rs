use std::ffi::OsString;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unicode_conv::{
    length_in_code_points, remove_special_chars, utf16_to_utf8, utf8_to_unicode, utf8_to_utf16,
};

const FILE_LIST: [&str; 6] = [
    "./test_files/ascii.txt",
    "./test_files/iso8859-1.txt",
    "./test_files/utf8.txt",
    "./test_files/le_utf16.txt",
    "./test_files/be_utf16.txt",
    "./test_files/data.data",
];

fn sample_text() -> Vec<u8> {
    let line = "Voix ambigu\u{eb} d'un c\u{153}ur qui, au z\u{e9}phyr, pr\u{e9}f\u{e8}re les jattes \
                de kiwis. \u{1F600}\n";
    line.repeat(256).into_bytes()
}

fn conversions(c: &mut Criterion) {
    let text = sample_text();
    let units = utf8_to_utf16(&text);
    let mut group = c.benchmark_group("conversions");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("length_in_code_points", |b| b.iter(|| length_in_code_points(&text)));
    group.bench_function("utf8_to_unicode", |b| b.iter(|| utf8_to_unicode(&text)));
    group.bench_function("utf8_to_utf16", |b| b.iter(|| utf8_to_utf16(&text)));
    group.bench_function("utf16_to_utf8", |b| b.iter(|| utf16_to_utf8(&units)));
    group.bench_function("remove_special_chars", |b| b.iter(|| remove_special_chars(&text)));
    group.finish();
}

fn files(c: &mut Criterion) {
    let mut group = c.benchmark_group("files");
    for path in FILE_LIST.iter().map(OsString::from) {
        group.bench_with_input(
            BenchmarkId::from_parameter(path.to_string_lossy()),
            &path,
            |b, path| b.iter(|| unicode_conv::cli::run(vec![path.to_owned()])),
        );
    }
    group.finish();
}

criterion_group!(benches, conversions, files);

criterion_main!(benches);
