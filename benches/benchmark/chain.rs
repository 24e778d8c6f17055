use crate::common::{configure_criterion, realistic_signups, Signup};
use criterion::{criterion_group, Criterion};
use outcome_rail::{Outcome, Reason};
use std::hint::black_box;

fn guard_signup(signup: &Signup) -> Outcome<&Signup> {
    Outcome::condition(signup)
        .fail_when(|| signup.username.is_empty(), "username is required")
        .fail_when(|| signup.username.len() > 32, "username is too long")
        .fail_when(|| !signup.email.contains('@'), "email is malformed")
        .fail_when(|| signup.age < 18, "must be an adult")
        .pass(Reason::new("signup accepted"))
}

fn guard_signup_manual(signup: &Signup) -> Outcome<&Signup> {
    if signup.username.is_empty() {
        Outcome::fail(["username is required"])
    } else if signup.username.len() > 32 {
        Outcome::fail(["username is too long"])
    } else if !signup.email.contains('@') {
        Outcome::fail(["email is malformed"])
    } else if signup.age < 18 {
        Outcome::fail(["must be an adult"])
    } else {
        Outcome::pass(signup, ["signup accepted"])
    }
}

pub fn bench_fail_chain_realistic(c: &mut Criterion) {
    let signups = realistic_signups();
    let mut group = c.benchmark_group("fail_chain");

    group.bench_function("chain_realistic_mixed", |b| {
        b.iter(|| {
            let accepted = signups.iter().map(guard_signup).filter(Outcome::is_valid).count();
            black_box(accepted);
        })
    });

    group.bench_function("manual_realistic_mixed", |b| {
        b.iter(|| {
            let accepted = signups.iter().map(guard_signup_manual).filter(Outcome::is_valid).count();
            black_box(accepted);
        })
    });

    group.finish();
}

pub fn bench_pass_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("pass_chain");

    for depth in [1usize, 4, 16] {
        group.bench_function(format!("no_match_depth_{depth}"), |b| {
            b.iter(|| {
                let mut chain = Outcome::condition(black_box(depth)).pass_when(|| false, Reason::NONE);
                for _ in 1..depth {
                    chain = chain.pass_when(|| false, Reason::NONE);
                }
                black_box(chain.fail(Reason::new("nothing matched")))
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = chain_benches;
    config = configure_criterion();
    targets = bench_fail_chain_realistic, bench_pass_chain_depth,
}
