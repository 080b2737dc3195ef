// File: src/modes.rs
//
// Non-interactive run modes driven from the command line:
// the fixed demo cases, the single built-in example and random data runs.

use crate::sorting::reporter::records_to_json;
use crate::sorting::{Algorithm, NoTrace, OutputFormat, Reporter, RunRecord, Sorter};
use colored::Colorize;
use std::error::Error;

/// Sequence sorted when the program runs without a mode
pub const EXAMPLE_SEQUENCE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Inputs exercised by the demo, in order
pub fn demo_cases() -> Vec<Vec<i64>> {
    vec![
        vec![64, 34, 25, 12, 22, 11, 90],
        vec![5, 2, 8, 1, 9],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![],
        vec![42],
    ]
}

/// Sort `input` with each of `algorithms`, collecting one record per run
pub fn run_algorithms(sorter: &mut Sorter<i64>, input: Option<&[i64]>, algorithms: &[Algorithm]) -> Vec<RunRecord<i64>> {
    let source = input.map(|s| s.to_vec()).unwrap_or_else(|| sorter.data().to_vec());
    algorithms
        .iter()
        .map(|&algorithm| {
            let (sorted, stats) = sorter.sort_with(algorithm, Some(source.as_slice()), &mut NoTrace);
            RunRecord::new(algorithm, &source, sorted, stats)
        })
        .collect()
}

fn print_records(records: &[RunRecord<i64>]) {
    for record in records {
        println!();
        Reporter::print_result(record.algorithm, &record.output, &record.statistics);
    }
    if let [basic, bidirectional] = records {
        Reporter::print_comparison(&basic.statistics, &bidirectional.statistics);
    }
}

/// Both algorithms over every demo case, one group of records per case
pub fn demo_runs() -> Vec<Vec<RunRecord<i64>>> {
    let mut sorter: Sorter<i64> = Sorter::new();
    demo_cases()
        .iter()
        .map(|case| run_algorithms(&mut sorter, Some(case.as_slice()), &Algorithm::ALL))
        .collect()
}

pub fn run_demo(format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let runs = demo_runs();

    if format == OutputFormat::Json {
        let records: Vec<RunRecord<i64>> = runs.into_iter().flatten().collect();
        println!("{}", records_to_json(&records)?);
        return Ok(());
    }

    Reporter::print_header("Bubble Sort Demo");
    for (i, records) in runs.iter().enumerate() {
        let case = records.first().map(|r| r.input.as_slice()).unwrap_or_default();
        println!();
        println!("{} {}", format!("Test case {}:", i + 1).bright_cyan().bold(), format!("{:?}", case).yellow());
        print_records(records);
        Reporter::print_separator();
    }
    Ok(())
}

/// The built-in example sorted with the basic algorithm
pub fn example_run() -> RunRecord<i64> {
    let mut sorter: Sorter<i64> = Sorter::new();
    let (sorted, stats) = sorter.sort_basic(Some(&EXAMPLE_SEQUENCE[..]));
    RunRecord::new(Algorithm::Basic, &EXAMPLE_SEQUENCE, sorted, stats)
}

/// Usage has already been printed by the caller; this sorts the built-in example
pub fn run_example(format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let record = example_run();

    if format == OutputFormat::Json {
        println!("{}", records_to_json(&[record])?);
        return Ok(());
    }

    println!();
    Reporter::print_sequence("Original", &record.input);
    Reporter::print_sequence("Sorted", &record.output);
    Reporter::print_statistics(&record.statistics);
    Ok(())
}

pub fn run_random(
    size: usize,
    min_value: i64,
    max_value: i64,
    algorithms: &[Algorithm],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let mut sorter: Sorter<i64> = Sorter::new();
    sorter.generate_test_data(size, min_value, max_value)?;
    let records = run_algorithms(&mut sorter, None, algorithms);

    if format == OutputFormat::Json {
        println!("{}", records_to_json(&records)?);
        return Ok(());
    }

    Reporter::print_header("Random Data Sort");
    Reporter::print_sequence("Generated", sorter.data());
    print_records(&records);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputError;

    #[test]
    fn test_demo_cases() {
        let cases = demo_cases();
        assert_eq!(cases.len(), 6);
        assert_eq!(cases[0], EXAMPLE_SEQUENCE.to_vec());
        assert!(cases[4].is_empty());
        assert_eq!(cases[5], vec![42]);
    }

    #[test]
    fn test_demo_runs_cover_every_case_with_both_algorithms() {
        let runs = demo_runs();
        assert_eq!(runs.len(), 6);
        for (records, case) in runs.iter().zip(demo_cases()) {
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].algorithm, Algorithm::Basic);
            assert_eq!(records[1].algorithm, Algorithm::Bidirectional);
            let mut expected = case.clone();
            expected.sort();
            for record in records {
                assert_eq!(record.input, case);
                assert_eq!(record.output, expected);
            }
        }
        // empty and single-element cases do no work
        for records in &runs[4..] {
            for record in records {
                assert_eq!(record.statistics.comparisons, 0);
                assert_eq!(record.statistics.iterations, 0);
            }
        }
        assert!(run_demo(OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_example_run() {
        let record = example_run();
        assert_eq!(record.algorithm, Algorithm::Basic);
        assert_eq!(record.input, EXAMPLE_SEQUENCE.to_vec());
        assert_eq!(record.output, vec![11, 12, 22, 25, 34, 64, 90]);
        assert!(run_example(OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_run_algorithms_both() {
        let mut sorter: Sorter<i64> = Sorter::new();
        let records = run_algorithms(&mut sorter, Some(&[5, 2, 8, 1, 9][..]), &Algorithm::ALL);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].algorithm, Algorithm::Basic);
        assert_eq!(records[1].algorithm, Algorithm::Bidirectional);
        for record in &records {
            assert_eq!(record.input, vec![5, 2, 8, 1, 9]);
            assert_eq!(record.output, vec![1, 2, 5, 8, 9]);
        }
        assert!(records[1].statistics.iterations < records[0].statistics.iterations);
    }

    #[test]
    fn test_run_algorithms_uses_stored_data() {
        let mut sorter = Sorter::with_data(vec![3, 1, 2]);
        let records = run_algorithms(&mut sorter, None, &[Algorithm::Bidirectional]);
        assert_eq!(records[0].input, vec![3, 1, 2]);
        assert_eq!(records[0].output, vec![1, 2, 3]);
    }

    #[test]
    fn test_run_random_rejects_bad_range() {
        let err = run_random(5, 10, 0, &Algorithm::ALL, OutputFormat::Json).unwrap_err();
        let input_err = err.downcast_ref::<InputError>().unwrap();
        assert_eq!(input_err, &InputError::InvalidRange { min: 10, max: 0 });
    }
}
