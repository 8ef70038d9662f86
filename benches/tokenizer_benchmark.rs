use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use csvline::csv::tokenize_lines;
use csvline::{CsvReader, CsvWriter, LineTokenizer};
use tempfile::NamedTempFile;

fn sample_line(fields: usize) -> String {
    (0..fields)
        .map(|i| match i % 3 {
            0 => format!("plain_{}", i),
            1 => format!("\"quoted; {} with \"\"escapes\"\"\"", i),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let tokenizer = LineTokenizer::new();

    for fields in [4, 32, 256].iter() {
        let line = sample_line(*fields);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fields), &line, |b, line| {
            b.iter(|| black_box(tokenizer.tokenize(black_box(line))));
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let lines: Vec<String> = (0..10_000).map(|_| sample_line(12)).collect();

    c.bench_function("tokenize_lines_10000", |b| {
        b.iter(|| black_box(tokenize_lines(&lines)));
    });
}

fn benchmark_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for size in [1000, 10000, 100000].iter() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().to_path_buf();

        {
            let mut writer = CsvWriter::new(&path).unwrap();
            writer.write_row(["ID", "Name", "Value"]).unwrap();
            for i in 0..*size {
                writer
                    .write_row([
                        i.to_string(),
                        format!("Name; {}", i),
                        (i * 100).to_string(),
                    ])
                    .unwrap();
            }
            writer.save().unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut reader = CsvReader::open(&path).unwrap();
                for row_result in reader.rows() {
                    black_box(row_result.unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_tokenize, benchmark_batch, benchmark_read);
criterion_main!(benches);
