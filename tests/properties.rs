//! Schedule invariants checked over random workloads for every policy.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_procsched::workload::{generate, WorkloadConfig};
use u_procsched::{
    Algorithm, Pid, ProcessSpec, SimulationConfig, SimulationRequest, SimulationResult, Simulator,
};

fn specs_strategy() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..20, 1i64..8, 0i64..4), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessSpec::new(format!("P{i}"), arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn run(algorithm: Algorithm, quantum: i64, specs: &[ProcessSpec]) -> SimulationResult {
    let request = SimulationRequest::new(algorithm, specs.to_vec()).with_quantum(quantum);
    Simulator::new(SimulationConfig::default().with_audit(false))
        .simulate(&request)
        .expect("valid workload must simulate")
}

/// Makespan of any policy that never idles while a process is ready.
fn work_conserving_makespan(specs: &[ProcessSpec]) -> i64 {
    let mut jobs: Vec<(i64, i64)> = specs
        .iter()
        .map(|s| (s.arrival.unwrap(), s.burst.unwrap()))
        .collect();
    jobs.sort();
    jobs.into_iter()
        .fold(0, |clock, (arrival, burst)| clock.max(arrival) + burst)
}

proptest! {
    #[test]
    fn prop_every_process_completes_once(
        specs in specs_strategy(),
        algorithm in algorithm_strategy(),
        quantum in 1i64..5,
    ) {
        let result = run(algorithm, quantum, &specs);
        prop_assert_eq!(result.processes.len(), specs.len());

        let mut seen: HashMap<&Pid, usize> = HashMap::new();
        for o in &result.processes {
            *seen.entry(&o.pid).or_default() += 1;
        }
        for spec in &specs {
            prop_assert_eq!(seen.get(spec.pid.as_ref().unwrap()).copied(), Some(1));
        }
    }

    #[test]
    fn prop_metric_identities(
        specs in specs_strategy(),
        algorithm in algorithm_strategy(),
        quantum in 1i64..5,
    ) {
        let result = run(algorithm, quantum, &specs);
        for o in &result.processes {
            prop_assert!(o.completion_time >= o.arrival + o.burst);
            prop_assert_eq!(o.turnaround_time, o.completion_time - o.arrival);
            prop_assert_eq!(o.waiting_time, o.turnaround_time - o.burst);
            prop_assert!(o.waiting_time >= 0);
            prop_assert!(o.response_time >= 0);
            prop_assert!(o.response_time <= o.waiting_time);
        }
    }

    #[test]
    fn prop_timeline_ordered_and_disjoint(
        specs in specs_strategy(),
        algorithm in algorithm_strategy(),
        quantum in 1i64..5,
    ) {
        let result = run(algorithm, quantum, &specs);
        for slice in result.timeline.iter() {
            prop_assert!(slice.start < slice.end);
        }
        for pair in result.timeline.slices().windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn prop_executed_time_equals_burst(
        specs in specs_strategy(),
        algorithm in algorithm_strategy(),
        quantum in 1i64..5,
    ) {
        let result = run(algorithm, quantum, &specs);
        for spec in &specs {
            let pid = spec.pid.as_ref().unwrap();
            prop_assert_eq!(result.timeline.executed_by(pid), spec.burst.unwrap());
        }
    }

    #[test]
    fn prop_no_slice_before_arrival(
        specs in specs_strategy(),
        algorithm in algorithm_strategy(),
        quantum in 1i64..5,
    ) {
        let result = run(algorithm, quantum, &specs);
        let arrivals: HashMap<&Pid, i64> = specs
            .iter()
            .map(|s| (s.pid.as_ref().unwrap(), s.arrival.unwrap()))
            .collect();
        for slice in result.timeline.iter() {
            prop_assert!(slice.start >= arrivals[&slice.pid]);
        }
    }

    #[test]
    fn prop_non_preemptive_single_slice(
        specs in specs_strategy(),
        algorithm in prop::sample::select(vec![Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority]),
    ) {
        let result = run(algorithm, 2, &specs);
        prop_assert_eq!(result.timeline.len(), specs.len());
        for o in &result.processes {
            prop_assert_eq!(o.response_time, o.waiting_time);
        }
    }

    #[test]
    fn prop_work_conserving_makespan(
        specs in specs_strategy(),
        algorithm in prop::sample::select(vec![
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::SjfPreemptive,
            Algorithm::Priority,
            Algorithm::PriorityPreemptive,
        ]),
    ) {
        let result = run(algorithm, 2, &specs);
        prop_assert_eq!(result.kpi.makespan, work_conserving_makespan(&specs));
    }

    #[test]
    fn prop_fcfs_completes_in_arrival_order(specs in specs_strategy()) {
        let result = run(Algorithm::Fcfs, 2, &specs);
        for pair in result.processes.windows(2) {
            prop_assert!(pair[0].arrival <= pair[1].arrival);
        }
    }

    #[test]
    fn prop_deterministic(
        specs in specs_strategy(),
        algorithm in algorithm_strategy(),
        quantum in 1i64..5,
    ) {
        let first = run(algorithm, quantum, &specs);
        let second = run(algorithm, quantum, &specs);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_merge_preserves_work(
        specs in specs_strategy(),
        algorithm in algorithm_strategy(),
        quantum in 1i64..5,
    ) {
        let raw = run(algorithm, quantum, &specs);
        let merged = raw.timeline.merged();
        prop_assert!(merged.len() <= raw.timeline.len());
        prop_assert_eq!(merged.busy_time(), raw.timeline.busy_time());
        prop_assert_eq!(merged.context_switches(), raw.timeline.context_switches());
        for spec in &specs {
            let pid = spec.pid.as_ref().unwrap();
            prop_assert_eq!(merged.executed_by(pid), raw.timeline.executed_by(pid));
        }
    }
}

#[test]
fn test_seeded_workloads_pass_audit() {
    let simulator = Simulator::default();
    let config = WorkloadConfig::default().with_count(15).with_max_arrival(40);

    for seed in 0..50 {
        let specs = generate(&config, &mut SmallRng::seed_from_u64(seed));
        for algorithm in Algorithm::ALL {
            let request = SimulationRequest::new(algorithm, specs.clone()).with_quantum(3);
            let result = simulator.simulate(&request);
            assert!(result.is_ok(), "seed {seed}, {algorithm}: {result:?}");
        }
    }
}

#[test]
fn test_srtf_beats_fcfs_on_average_waiting() {
    // SRTF minimizes mean waiting time, so it is never worse than FCFS
    let simulator = Simulator::default();
    let config = WorkloadConfig::default().with_count(10);

    for seed in 0..30 {
        let specs = generate(&config, &mut SmallRng::seed_from_u64(seed));
        let fcfs = simulator
            .simulate(&SimulationRequest::new(Algorithm::Fcfs, specs.clone()))
            .unwrap();
        let srtf = simulator
            .simulate(&SimulationRequest::new(Algorithm::SjfPreemptive, specs))
            .unwrap();
        assert!(srtf.avg_waiting_time <= fcfs.avg_waiting_time + 1e-9);
    }
}

#[test]
fn test_rr_textbook_sequence() {
    let result = Simulator::default()
        .simulate(
            &SimulationRequest::new(
                Algorithm::RoundRobin,
                vec![ProcessSpec::new("A", 0, 5), ProcessSpec::new("B", 1, 3)],
            )
            .with_quantum(2),
        )
        .unwrap();

    let triples: Vec<(String, i64, i64)> = result
        .timeline
        .iter()
        .map(|s| (s.pid.to_string(), s.start, s.end))
        .collect();
    assert_eq!(
        triples,
        vec![
            ("A".to_string(), 0, 2),
            ("B".to_string(), 2, 4),
            ("A".to_string(), 4, 6),
            ("B".to_string(), 6, 7),
            ("A".to_string(), 7, 9),
        ]
    );
}
