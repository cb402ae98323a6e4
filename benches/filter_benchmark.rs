//! Benchmarks for the schedule filter engine
//!
//! Every render derives the course list, the shift/period choices and the
//! grouped timetable from scratch, so these run once per frame.
//! Run with: cargo bench

use campus_portal::models::ScheduleEntry;
use campus_portal::schedule::{group_by_weekday, list_courses, list_periods, select_schedule};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const WEEKDAYS: [&str; 6] = ["Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado"];
const SHIFTS: [&str; 3] = ["Manhã", "Tarde", "Noite"];

/// A schedule with `courses` courses, each with three shifts, ten periods
/// and one class per weekday.
fn generate_schedule(courses: usize) -> Vec<ScheduleEntry> {
    let mut entries = Vec::new();
    for c in 0..courses {
        for shift in SHIFTS {
            for period in 1..=10 {
                for weekday in WEEKDAYS {
                    entries.push(ScheduleEntry {
                        course: format!("Curso {:03}", c),
                        shift: shift.to_string(),
                        period: format!("{}º Período", period),
                        weekday: weekday.to_string(),
                        subject: format!("Disciplina {}-{}", period, weekday),
                        instructor: None,
                        time_slot: "19:00 - 22:30".to_string(),
                        room: format!("Bloco A - {}", c),
                    });
                }
            }
        }
    }
    entries
}

fn bench_list_courses(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_courses");

    for size in [10, 50, 200].iter() {
        let entries = generate_schedule(*size);
        group.throughput(Throughput::Elements(entries.len() as u64));

        group.bench_with_input(BenchmarkId::new("no_search", size), &entries, |b, entries| {
            b.iter(|| black_box(list_courses(black_box(entries), "")));
        });
        group.bench_with_input(BenchmarkId::new("search", size), &entries, |b, entries| {
            b.iter(|| black_box(list_courses(black_box(entries), "curso 01")));
        });
    }

    group.finish();
}

fn bench_list_periods(c: &mut Criterion) {
    let entries = generate_schedule(50);
    c.bench_function("list_periods_50_courses", |b| {
        b.iter(|| black_box(list_periods(black_box(&entries), Some("Curso 025"), Some("Noite"))));
    });
}

fn bench_timetable(c: &mut Criterion) {
    let mut group = c.benchmark_group("timetable");

    for size in [10, 200].iter() {
        let entries = generate_schedule(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| {
                let selected = select_schedule(
                    black_box(entries),
                    Some("Curso 005"),
                    Some("Tarde"),
                    Some("3º Período"),
                );
                black_box(group_by_weekday(&selected))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_list_courses, bench_list_periods, bench_timetable);
criterion_main!(benches);
