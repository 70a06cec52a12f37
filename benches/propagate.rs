use criterion::{criterion_group, criterion_main, Criterion};
#[path = "../test_cases.rs"]
mod test_cases;
use test_cases::*;

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let test_cases: TestCases = toml::from_str(include_str!("../test_cases.toml")).unwrap();
    criterion.bench_function("propagate all", |b| {
        b.iter(|| {
            let mut predictions = Vec::new();
            for test_case in test_cases.list.iter() {
                let tle =
                    norad_sgp4::decode_tle(None, &test_case.line1, &test_case.line2).unwrap();
                let state =
                    norad_sgp4::PropagatorState::build(&norad_sgp4::WGS72, &tle).unwrap();
                for test_state in &test_case.states {
                    if let State::Ok { time, .. } = test_state {
                        predictions.push(state.propagate(*time).unwrap());
                    }
                }
            }
            predictions
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
