use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::Utc;
use hirebridge_auth::{
    Permission, PermissionMatrix, Role, has_all_permissions, has_any_permission, has_permission,
};

// The decision functions sit on the render path of every protected surface;
// these benches keep an eye on the cost of a verdict.

fn bench_single_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_decision");

    group.bench_function("role_default_hit", |b| {
        b.iter(|| {
            has_permission(
                black_box(&Role::ADMIN),
                black_box(Permission::ViewAnalytics),
                None,
            )
        });
    });

    group.bench_function("role_default_miss", |b| {
        b.iter(|| {
            has_permission(
                black_box(&Role::JOBSEEKER),
                black_box(Permission::ManageUsers),
                None,
            )
        });
    });

    group.bench_function("explicit_override", |b| {
        let custom = vec![Permission::ViewAnalytics, Permission::ViewUsers];
        b.iter(|| {
            has_permission(
                black_box(&Role::JOBSEEKER),
                black_box(Permission::ViewAnalytics),
                Some(&custom),
            )
        });
    });

    group.finish();
}

fn bench_composite_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_decision");

    group.bench_function("any_over_full_vocabulary", |b| {
        b.iter(|| has_any_permission(black_box(&Role::MODERATOR), &Permission::ALL, None));
    });

    group.bench_function("all_over_full_vocabulary", |b| {
        b.iter(|| has_all_permissions(black_box(&Role::ADMIN), &Permission::ALL, None));
    });

    group.finish();
}

fn bench_matrix_snapshot(c: &mut Criterion) {
    c.bench_function("matrix_snapshot", |b| {
        b.iter(|| PermissionMatrix::snapshot(black_box(Utc::now())));
    });
}

criterion_group!(
    benches,
    bench_single_decision,
    bench_composite_decision,
    bench_matrix_snapshot
);
criterion_main!(benches);
