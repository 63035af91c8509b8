use super::common::{for_each_record_in, open_fx, write_fx};
use super::error::{Result, SampleError};
use super::sampler::Permutation;
use kseq::record::Fastx;
use log::{info, warn};
use std::{
    fs::File,
    io::{BufWriter, Write},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub input: String,
    pub output: String,
}

impl FileGroup {
    pub fn new<S: Into<String>>(input: S, output: S) -> Self {
        FileGroup {
            input: input.into(),
            output: output.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroupSummary {
    pub read: usize,
    pub written: usize,
    pub bases: usize,
}

struct Outfile<'a> {
    name: &'a str,
    summary: GroupSummary,
    handle: BufWriter<File>,
}

impl<'a> Outfile<'a> {
    fn new(name: &'a str) -> Result<Self> {
        let file = File::create(name).map_err(|e| SampleError::output(name, e))?;
        Ok(Outfile {
            name,
            summary: GroupSummary::default(),
            handle: BufWriter::with_capacity(1024000, file),
        })
    }

    fn write(&mut self, r: &Fastx) -> Result<()> {
        write_fx(r, &mut self.handle).map_err(|e| SampleError::output(self.name, e))?;
        self.summary.written += 1;
        self.summary.bases += r.len();
        Ok(())
    }

    fn finish(mut self) -> Result<GroupSummary> {
        self.handle
            .flush()
            .map_err(|e| SampleError::output(self.name, e))?;
        Ok(self.summary)
    }
}

/// Copies the records of `group.input` whose position is selected by `perm`
/// into `group.output`, keeping input order.
pub fn filter_group(perm: &Permutation, group: &FileGroup) -> Result<GroupSummary> {
    info!("{} -> {}", group.input, group.output);
    let reader = open_fx(&group.input)?;
    let mut out = Outfile::new(&group.output)?;
    let read = for_each_record_in(&group.input, reader, |i, record| {
        if perm.is_selected(i) {
            out.write(&record)?;
        }
        Ok(())
    })?;
    let mut summary = out.finish()?;
    summary.read = read;

    if read != perm.len() {
        warn!(
            "{:?} has {read} records but {} were expected, pairing is only kept for the first {}",
            group.input,
            perm.len(),
            read.min(perm.len())
        );
    }
    info!(
        "{}: {} of {} records kept, {} bp",
        group.output, summary.written, summary.read, summary.bases
    );
    Ok(summary)
}

/// Runs every group in order against the same permutation; the first failure
/// stops the remaining groups.
pub fn filter_groups(perm: &Permutation, groups: &[FileGroup]) -> Result<Vec<GroupSummary>> {
    groups.iter().map(|g| filter_group(perm, g)).collect()
}
