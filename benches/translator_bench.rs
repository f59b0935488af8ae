use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use meeting_translator::sentence_detector::default_splitter;
use meeting_translator::{PhraseMatcher, PhraseTable, Translator};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SHORT_TEXT: &str = "Great question! Let's circle back on this.";
const TRANSCRIPT: &str = "Thanks everyone for joining. Just to clarify, we're aligned on the roadmap. \
    I don't have the bandwidth for a deep dive right now! Let's take this offline. \
    The deploy went out on Tuesday. Per my last email, the numbers are final. \
    Going forward, let's focus on the low-hanging fruit. Interesting. Sounds good? \
    Lunch is at noon. Let me know if you have any questions.";

fn long_transcript() -> String {
    TRANSCRIPT.repeat(200)
}

fn bench_split(c: &mut Criterion) {
    let splitter = default_splitter();
    let long = long_transcript();

    let mut group = c.benchmark_group("split");
    group.bench_function("short", |b| b.iter(|| splitter.split_borrowed(black_box(SHORT_TEXT))));
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("transcript", |b| b.iter(|| splitter.split_borrowed(black_box(&long))));
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let matcher = PhraseMatcher::new(PhraseTable::global());
    let mut rng = StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("match");
    group.bench_function("hit_early", |b| {
        b.iter(|| matcher.match_sentence(black_box("Let's circle back."), &mut rng))
    });
    group.bench_function("hit_late", |b| {
        b.iter(|| matcher.match_sentence(black_box("I'll get back to you."), &mut rng))
    });
    group.bench_function("miss", |b| {
        b.iter(|| matcher.match_sentence(black_box("The deploy went out on Tuesday."), &mut rng))
    });
    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let translator = Translator::global();
    let long = long_transcript();
    let mut rng = StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("translate");
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("transcript", |b| {
        b.iter(|| translator.translate(black_box(&long), &mut rng).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_split, bench_match, bench_translate);
criterion_main!(benches);
