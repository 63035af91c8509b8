use super::common::{for_each_record, is_stdin};
use super::error::{Result, SampleError};
use log::info;

/// Full pass over `path` to find the number of records. Stdin is refused since
/// it could not be read a second time for sampling.
pub fn count_records(path: &str) -> Result<usize> {
    if is_stdin(path) {
        return Err(SampleError::config(
            "the total record count (-t) is required when reading from stdin",
        ));
    }
    info!("the number of records was not provided, counting records in {path:?} may be time consuming");
    let n = for_each_record(path, |_, _| Ok(()))?;
    info!("total records in file: {n}");
    Ok(n)
}
