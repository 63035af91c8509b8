use super::config::Config;
use super::count::count_records;
use super::error::Result;
use super::filter::{filter_groups, GroupSummary};
use super::sampler::Permutation;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Count (when needed), shuffle once, then filter every group in turn.
pub fn sample(config: &Config) -> Result<Vec<GroupSummary>> {
    let total = match config.total {
        Some(n) => n,
        None => count_records(&config.groups[0].input)?,
    };
    Config::check_keep(config.keep, total)?;

    let seed = config.seed.unwrap_or_else(time_seed);
    info!("random seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let perm = Permutation::with_rng(total, config.keep, config.mode, &mut rng);

    let summaries = filter_groups(&perm, &config.groups)?;
    let bases: usize = summaries.iter().map(|s| s.bases).sum();
    info!("sample size: {bases} bp");
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::common::tests::{heads, out_path, write_file, write_gz, PAIR_R1, PAIR_R2};
    use crate::utils::sampler::ShuffleMode;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn config(inputs: &[String], outputs: &[String], total: Option<usize>, keep: usize) -> Config {
        Config::new(
            inputs.to_vec(),
            outputs.to_vec(),
            Some(2013),
            total,
            keep,
            ShuffleMode::Exclusive,
        )
        .unwrap()
    }

    #[test]
    fn writes_exactly_w_records() {
        let dir = TempDir::new().unwrap();
        let input = vec![write_file(&dir, "r1.fq", PAIR_R1)];
        for keep in 1..5 {
            let output = vec![out_path(&dir, &format!("o{keep}.fq"))];
            let s = sample(&config(&input, &output, Some(5), keep)).unwrap();
            assert_eq!(s[0].written, keep);
            assert_eq!(heads(&output[0]).len(), keep);
        }
    }

    #[test]
    fn counts_when_total_missing() {
        let dir = TempDir::new().unwrap();
        let input = vec![write_file(&dir, "r1.fq", PAIR_R1)];
        let a = vec![out_path(&dir, "a.fq")];
        let b = vec![out_path(&dir, "b.fq")];
        sample(&config(&input, &a, None, 2)).unwrap();
        sample(&config(&input, &b, Some(5), 2)).unwrap();
        assert_eq!(fs::read(&a[0]).unwrap(), fs::read(&b[0]).unwrap());
    }

    #[test]
    fn same_seed_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let input = vec![write_gz(&dir, "r1.fq.gz", PAIR_R1)];
        let a = vec![out_path(&dir, "a.fq")];
        let b = vec![out_path(&dir, "b.fq")];
        sample(&config(&input, &a, Some(5), 3)).unwrap();
        sample(&config(&input, &b, Some(5), 3)).unwrap();
        assert_eq!(fs::read(&a[0]).unwrap(), fs::read(&b[0]).unwrap());
    }

    #[test]
    fn paired_files_keep_same_positions() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![write_file(&dir, "r1.fq", PAIR_R1), write_file(&dir, "r2.fq", PAIR_R2)];
        let outputs = vec![out_path(&dir, "o1.fq"), out_path(&dir, "o2.fq")];
        sample(&config(&inputs, &outputs, None, 2)).unwrap();

        let mate = |v: Vec<String>| -> Vec<String> {
            v.iter().map(|h| h.trim_end_matches(|c| c == '1' || c == '2').to_owned()).collect()
        };
        let r1 = mate(heads(&outputs[0]));
        let r2 = mate(heads(&outputs[1]));
        assert_eq!(r1.len(), 2);
        assert_eq!(r1, r2);
    }

    #[test]
    fn empty_counted_input_is_config_error() {
        let dir = TempDir::new().unwrap();
        let input = vec![write_file(&dir, "r1.fq", "")];
        let output = vec![out_path(&dir, "o.fq")];
        let err = sample(&config(&input, &output, None, 1)).unwrap_err();
        assert!(err.is_config(), "{err}");
        assert!(!Path::new(&output[0]).exists());
    }

    #[test]
    fn too_many_requested_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = vec![write_file(&dir, "r1.fq", PAIR_R1)];
        for keep in [5, 6] {
            let output = vec![out_path(&dir, &format!("o{keep}.fq"))];
            let err = sample(&config(&input, &output, None, keep)).unwrap_err();
            assert!(err.is_config());
            assert!(!Path::new(&output[0]).exists());
        }
    }
}
