//! Performance benchmarks for the attendance hour-type engine.
//!
//! Covers the night/day splitter on its own, the full attendance computation,
//! a batch of a month of attendances, and one request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_hour_type::api::{AppState, create_router};
use attendance_hour_type::calculation::{compute_attendance, local_date, split_hours};
use attendance_hour_type::config::{CompanyConfig, ConfigLoader, NightWindow};
use attendance_hour_type::models::{Employee, Shift, ShiftInstant};

use axum::{body::Body, http::Request};
use chrono::{NaiveDate, NaiveTime};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

/// Builds `count` night shifts, 21:00 to 06:00, on consecutive days.
fn night_shifts(count: usize) -> Vec<Shift> {
    let first = NaiveDate::from_ymd_opt(2021, 11, 1).unwrap();
    first
        .iter_days()
        .take(count)
        .enumerate()
        .map(|(i, day)| {
            let check_in = day.and_time(NaiveTime::from_hms_opt(21, 0, 0).unwrap());
            let check_out = day
                .succ_opt()
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(6, 0, 0).unwrap());
            Shift::new(format!("att_{:03}", i + 1), "emp_bench_001", check_in)
                .with_check_out(check_out)
        })
        .collect()
}

fn bench_split_hours(c: &mut Criterion) {
    let tz = chrono_tz::Europe::Paris;
    let window = NightWindow::default();
    let shift = night_shifts(1).remove(0);
    let check_out: ShiftInstant = shift.check_out.unwrap();
    let date = local_date(&shift.check_in, tz);

    c.bench_function("split_hours", |b| {
        b.iter(|| {
            split_hours(
                black_box(&shift.check_in),
                black_box(Some(&check_out)),
                tz,
                date,
                &window,
            )
        })
    });
}

fn bench_compute_attendance(c: &mut Criterion) {
    let config = load_config();
    let employee =
        Employee::new("emp_bench_001", chrono_tz::Europe::Paris).with_hours_per_day(8.0);
    let company = CompanyConfig {
        overtime_enabled: true,
        ..*config.company()
    };

    let mut group = c.benchmark_group("compute_attendance");
    for count in [1usize, 31] {
        let shifts = night_shifts(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &shifts, |b, shifts| {
            b.iter(|| {
                for shift in shifts {
                    black_box(compute_attendance(shift, &employee, &company, config.holidays()))
                        .ok();
                }
            })
        });
    }
    group.finish();
}

fn bench_http_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = serde_json::json!({
        "employee": {"id": "emp_bench_001", "timezone": "Europe/Paris", "hours_per_day": 8.0},
        "shift": {"id": "att_001", "check_in": "2021-12-02T21:00:00", "check_out": "2021-12-03T06:00:00"}
    })
    .to_string();

    c.bench_function("http_compute", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/attendance/compute")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_split_hours,
    bench_compute_attendance,
    bench_http_request
);
criterion_main!(benches);
