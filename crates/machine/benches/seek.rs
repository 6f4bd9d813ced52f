use criterion::{criterion_group, criterion_main, Criterion};
use machine::MachineSystem;

fn bench_seek(c: &mut Criterion) {
    c.bench_function("seek_120_frames", |b| {
        b.iter(|| {
            let mut system = MachineSystem::new();
            system.seek_to_frame(120);
            system.machine().map_or(0, machine::Machine::total_score)
        });
    });

    c.bench_function("scrub_back_and_replay", |b| {
        let mut system = MachineSystem::new();
        system.seek_to_frame(60);
        b.iter(|| {
            system.seek_to_frame(30);
            system.seek_to_frame(60);
            system.frame()
        });
    });
}

criterion_group!(benches, bench_seek);
criterion_main!(benches);
