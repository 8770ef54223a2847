//! Cross-policy invariants over random workloads.

use cpu_schedule::models::{Occupant, ProcessSpec, Simulation};
use cpu_schedule::policies::PriorityDirection;
use cpu_schedule::simulator::{simulate, Policy, SimulationConfig};
use cpu_schedule::workload::WorkloadGenerator;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn all_configs() -> Vec<SimulationConfig> {
    let mut configs = Vec::new();
    for policy in Policy::ALL {
        for direction in [
            PriorityDirection::LowerIsHigher,
            PriorityDirection::HigherIsHigher,
        ] {
            for quantum in [1, 2, 3] {
                configs.push(
                    SimulationConfig::new(policy)
                        .with_priority_direction(direction)
                        .with_quantum(quantum),
                );
            }
        }
    }
    configs
}

/// Returns a description of the first broken invariant, if any.
fn check(processes: &[ProcessSpec], sim: &Simulation) -> Result<(), String> {
    let timeline = &sim.timeline;

    if sim.processes.len() != processes.len() || sim.metrics.len() != processes.len() {
        return Err("process count changed".into());
    }
    let issues = timeline.check_invariants();
    if !issues.is_empty() {
        return Err(format!("timeline issues: {issues:?}"));
    }

    for (p, m) in sim.rows() {
        if p.pid != m.pid {
            return Err(format!("rows misaligned: {} vs {}", p.pid, m.pid));
        }
        if m.turnaround_time != m.completion_time - p.arrival_time {
            return Err(format!("{}: turnaround mismatch", p.pid));
        }
        if m.waiting_time != m.turnaround_time - p.burst_time {
            return Err(format!("{}: waiting mismatch", p.pid));
        }
        if m.waiting_time < 0 || m.start_time < p.arrival_time {
            return Err(format!("{}: ran before arrival", p.pid));
        }
        if timeline.busy_time(&p.pid) != p.burst_time {
            return Err(format!("{}: busy time != burst", p.pid));
        }
        if timeline.first_start(&p.pid) != Some(m.start_time) {
            return Err(format!("{}: start time != first segment", p.pid));
        }
        let last_end = timeline.segments_for(&p.pid).last().map(|s| s.end);
        if last_end != Some(m.completion_time) {
            return Err(format!("{}: completion != last segment end", p.pid));
        }
    }

    if timeline.makespan() != sim.makespan() {
        return Err("timeline does not end at the last completion".into());
    }
    let total: i64 = timeline.segments.iter().map(|s| s.duration()).sum();
    if total != sim.makespan() {
        return Err("segment durations do not sum to makespan".into());
    }
    if timeline
        .segments
        .iter()
        .any(|s| matches!(&s.occupant, Occupant::Process(pid) if sim.process(pid).is_none()))
    {
        return Err("segment for unknown pid".into());
    }
    Ok(())
}

#[test]
fn test_invariants_on_seeded_workloads() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let configs = all_configs();
    for count in 1..=8 {
        let generator = WorkloadGenerator::new(count)
            .with_max_arrival(12)
            .with_max_burst(6)
            .with_max_priority(3);
        for _ in 0..25 {
            let processes = generator.generate(&mut rng);
            for config in &configs {
                let sim = simulate(&processes, config).unwrap();
                if let Err(msg) = check(&processes, &sim) {
                    panic!("{} on {processes:?}: {msg}", config.policy);
                }
            }
        }
    }
}

#[test]
fn test_runs_are_deterministic() {
    let mut rng = SmallRng::seed_from_u64(99);
    let processes = WorkloadGenerator::default().generate(&mut rng);
    for config in all_configs() {
        let a = simulate(&processes, &config).unwrap();
        let b = simulate(&processes, &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn test_non_preemptive_policies_run_each_process_once() {
    let mut rng = SmallRng::seed_from_u64(5);
    let generator = WorkloadGenerator::new(8).with_max_arrival(20);
    for _ in 0..50 {
        let processes = generator.generate(&mut rng);
        for policy in [Policy::Fcfs, Policy::Sjf, Policy::NonPreemptivePriority] {
            let sim = simulate(&processes, &SimulationConfig::new(policy)).unwrap();
            for p in &processes {
                assert_eq!(sim.timeline.segments_for(&p.pid).count(), 1);
            }
        }
    }
}

#[test]
fn test_srtf_matches_sjf_when_all_arrive_together() {
    let mut rng = SmallRng::seed_from_u64(11);
    let generator = WorkloadGenerator::new(6).with_max_arrival(0);
    for _ in 0..50 {
        // All arrive at 0: SRTF degenerates to SJF.
        let processes = generator.generate(&mut rng);
        let sjf = simulate(&processes, &SimulationConfig::new(Policy::Sjf)).unwrap();
        let srtf = simulate(&processes, &SimulationConfig::new(Policy::Srtf)).unwrap();
        assert_eq!(sjf.timeline, srtf.timeline);
    }
}

#[test]
fn test_simulation_json_shape() {
    let processes = vec![ProcessSpec::new("P1", 1, 2)];
    let sim = simulate(&processes, &SimulationConfig::new(Policy::Fcfs)).unwrap();
    let json = serde_json::to_value(&sim).unwrap();
    assert_eq!(json["timeline"]["segments"][0]["occupant"], "Idle");
    assert_eq!(json["timeline"]["segments"][1]["occupant"], "P1");
    assert_eq!(json["metrics"][0]["waiting_time"], 0);

    let back: Simulation = serde_json::from_value(json).unwrap();
    assert_eq!(back, sim);
}

fn arb_processes() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..15, 1i64..7, -3i32..4), 1..=8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessSpec::new(format!("P{}", i + 1), arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_all_policies_hold_invariants(
        processes in arb_processes(),
        quantum in 1i64..5,
        higher in any::<bool>(),
    ) {
        let direction = if higher {
            PriorityDirection::HigherIsHigher
        } else {
            PriorityDirection::LowerIsHigher
        };
        for policy in Policy::ALL {
            let config = SimulationConfig::new(policy)
                .with_priority_direction(direction)
                .with_quantum(quantum);
            let sim = simulate(&processes, &config).unwrap();
            prop_assert_eq!(check(&processes, &sim), Ok(()));
        }
    }
}
