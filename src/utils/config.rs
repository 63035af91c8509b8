use super::error::{Result, SampleError};
use super::filter::FileGroup;
use super::sampler::ShuffleMode;
use byte_unit::Byte;

/// Validated options of one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub groups: Vec<FileGroup>,
    pub seed: Option<u64>,
    /// Known record count; `None` asks for a counting pass over the first input.
    pub total: Option<usize>,
    pub keep: usize,
    pub mode: ShuffleMode,
}

/// Parses a count written as `int[G|M|K]`.
pub fn parse_count(name: &str, v: &str) -> Result<usize> {
    let bytes = Byte::from_str(v)
        .map_err(|_| SampleError::config(format!("not a valid {name}: {v:?}")))?
        .get_bytes();
    usize::try_from(bytes).map_err(|_| SampleError::config(format!("{name} is too large: {v:?}")))
}

pub fn parse_seed(v: &str) -> Result<u64> {
    v.trim()
        .parse::<u64>()
        .map_err(|_| SampleError::config(format!("not a valid seed: {v:?}")))
}

impl Config {
    /// Checks everything that can be checked before a stream is opened.
    /// A `total` of 0 counts as unknown.
    pub fn new(
        inputs: Vec<String>,
        outputs: Vec<String>,
        seed: Option<u64>,
        total: Option<usize>,
        keep: usize,
        mode: ShuffleMode,
    ) -> Result<Self> {
        if keep == 0 {
            return Err(SampleError::config(
                "surely you need more than zero records from this file",
            ));
        }
        if inputs.is_empty() {
            return Err(SampleError::config("no input file was provided"));
        }
        if outputs.is_empty() {
            return Err(SampleError::config("no output file was provided"));
        }
        if inputs.len() != outputs.len() {
            return Err(SampleError::config(format!(
                "number of output files ({}) must match number of input files ({})",
                outputs.len(),
                inputs.len()
            )));
        }
        if let Some(o) = outputs.iter().find(|o| inputs.contains(o)) {
            return Err(SampleError::config(format!(
                "output {o:?} is also an input file"
            )));
        }

        let total = total.filter(|&n| n > 0);
        if let Some(n) = total {
            Self::check_keep(keep, n)?;
        }
        Ok(Config {
            groups: inputs
                .into_iter()
                .zip(outputs)
                .map(|(i, o)| FileGroup::new(i, o))
                .collect(),
            seed,
            total,
            keep,
            mode,
        })
    }

    /// `keep` has to be strictly below the record count.
    pub fn check_keep(keep: usize, total: usize) -> Result<()> {
        if keep >= total {
            return Err(SampleError::config(format!(
                "the number of records requested ({keep}) either matches or exceeds the number of records provided ({total})"
            )));
        }
        Ok(())
    }
}
