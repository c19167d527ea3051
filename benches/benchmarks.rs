criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scoring_single_move,
        dealing_fresh_round,
        playing_robot_session,
}

fn scoring_single_move(c: &mut criterion::Criterion) {
    c.bench_function("score a move against a Round", |b| {
        let round = Round::rigged(Item::Rock, Objective::Win);
        b.iter(|| round.score(Item::Scissors))
    });
}

fn dealing_fresh_round(c: &mut criterion::Criterion) {
    c.bench_function("reset an Engine to a fresh session", |b| {
        let mut engine = Engine::seeded(0);
        b.iter(|| engine.reset())
    });
}

fn playing_robot_session(c: &mut criterion::Criterion) {
    c.bench_function("play a full session with a random Player", |b| {
        b.iter(|| {
            Room::new(Engine::seeded(0), Fish::seeded(1, 1))
                .play()
                .expect("session")
        })
    });
}

use braingame::*;
