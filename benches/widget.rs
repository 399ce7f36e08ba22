//! Benchmark tests for the upload widget update and view functions
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use upload_progress::model::abort_handle::AbortHandle;
use upload_progress::model::file_descriptor::FileDescriptor;
use upload_progress::model::progress::ProgressEvent;
use upload_progress::model::state::State;
use upload_progress::view::options::{ProgressSpecs, RenderOptions};
use upload_progress::{init, update, view, Action, UploadModel};

fn create_files(count: usize) -> Vec<FileDescriptor> {
    (0..count)
        .map(|i| FileDescriptor::new(format!("file-{}.txt", i), Some(1024 * (i as u64 + 1))))
        .collect()
}

fn uploading_model(count: usize) -> UploadModel {
    let action = Action::progress(AbortHandle::new(|| {}), ProgressEvent::new(512, 1024)).unwrap();
    update(action, init(create_files(count)))
}

fn bench_update_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_progress");
    let abort = AbortHandle::new(|| {});

    for size in [1, 10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let model = init(create_files(size));
            b.iter(|| {
                let mut model = model.clone();
                for loaded in (0..=1024u64).step_by(128) {
                    let action = Action::progress(abort.clone(), ProgressEvent::new(loaded, 1024)).unwrap();
                    model = update(action, model);
                }
                black_box(model)
            });
        });
    }
    group.finish();
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("view");
    let options = RenderOptions::default();

    for size in [1, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let model = uploading_model(size);
            b.iter(|| black_box(view(&options, black_box(&model))));
        });
    }
    group.finish();
}

fn bench_view_to_json(c: &mut Criterion) {
    let model = uploading_model(1);
    c.bench_function("view_to_json", |b| {
        b.iter(|| serde_json::to_string(&view(&RenderOptions::default(), black_box(&model))))
    });
}

fn bench_state_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_apply");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let uploads = (0..size).map(|_| init(create_files(1))).collect();
            let state = State::new(uploads, ProgressSpecs::default());
            b.iter(|| {
                let mut state = state.clone();
                for id in 0..size {
                    state.apply(id, Action::Uploaded);
                }
                black_box(state)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_update_progress,
    bench_view,
    bench_view_to_json,
    bench_state_apply
);
criterion_main!(benches);
