use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nextperiod::prelude::*;

fn predict_ok_inputs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("2024-06-15", "28"),
        ("2024-01-30", "5"),
        ("2024-03-01", "-1"),
        ("2024-12-20", "35"),
        ("2024-02-29", "0"),
    ]
}

fn predict_str_ok(inputs: &[(&str, &str)]) {
    let predictor = Predictor::default();
    for (start, cycle) in inputs {
        let res = predictor.predict_str(start, cycle);
        assert!(res.is_ok());
    }
}

fn ovulation_ok_inputs() -> Vec<i32> {
    vec![21, 28, 35]
}

fn ovulation_ok(inputs: &[i32]) {
    for days in inputs {
        let res = OvulationPhase::for_cycle(CycleLength::new(*days));
        assert!(res.is_ok());
    }
}

fn hormone_series_ok(inputs: &[i32]) {
    for days in inputs {
        let res = HormoneLevels::series(CycleLength::new(*days));
        assert!(res.is_ok());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("predict_str_ok", |b| {
        b.iter(|| predict_str_ok(black_box(&predict_ok_inputs())))
    });
    c.bench_function("ovulation_ok", |b| {
        b.iter(|| ovulation_ok(black_box(&ovulation_ok_inputs())))
    });
    c.bench_function("hormone_series_ok", |b| {
        b.iter(|| hormone_series_ok(black_box(&ovulation_ok_inputs())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
