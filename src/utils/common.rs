use super::error::{Result, SampleError};
use kseq::{parse_reader, record::Fastx};
use std::{
    fs::File,
    io::{self, stdin, ErrorKind, Read, Write},
};

pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

// "-" reads stdin; gzip is unwrapped by kseq when the records are parsed
pub fn open_fx(path: &str) -> Result<Box<dyn Read + Send>> {
    if is_stdin(path) {
        if atty::is(atty::Stream::Stdin) {
            return Err(SampleError::input(
                path,
                io::Error::new(ErrorKind::NotFound, "missing input from stdin"),
            ));
        }
        Ok(Box::new(stdin()))
    } else {
        Ok(Box::new(File::open(path).map_err(|e| SampleError::input(path, e))?))
    }
}

/// Calls `f` with the zero-based position and the record for every record of
/// `path`, in stream order. Returns the number of records read.
pub fn for_each_record<F>(path: &str, f: F) -> Result<usize>
where
    F: FnMut(usize, Fastx) -> Result<()>,
{
    for_each_record_in(path, open_fx(path)?, f)
}

/// Same as [`for_each_record`] on a stream already opened with [`open_fx`].
pub fn for_each_record_in<F>(path: &str, reader: Box<dyn Read + Send>, mut f: F) -> Result<usize>
where
    F: FnMut(usize, Fastx) -> Result<()>,
{
    let mut records = match parse_reader(reader) {
        Ok(records) => records,
        // too short to hold a record header
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(0),
        Err(e) => {
            return Err(SampleError::InputFormat {
                path: path.to_owned(),
                msg: e.to_string(),
            })
        }
    };
    let mut i = 0;
    loop {
        let record = records
            .iter_record()
            .map_err(|e| SampleError::InputFormat {
                path: path.to_owned(),
                msg: format!("record {}: {e:?}", i + 1),
            })?;
        match record {
            Some(record) => {
                f(i, record)?;
                i += 1;
            }
            None => break,
        }
    }
    Ok(i)
}

pub fn is_fasta_record(r: &Fastx) -> bool {
    r.sep().is_empty()
}

/// Writes one record unwrapped: `@`/`>` header with the optional comment, the
/// sequence, and `+` plus quality only for FASTQ records.
pub fn write_fx<W>(r: &Fastx, writer: &mut W) -> io::Result<()>
where
    W: Write,
{
    let marker = if is_fasta_record(r) { '>' } else { '@' };
    // des() keeps the blank that separates it from the name
    let des = r.des().trim_start();
    if des.is_empty() {
        writeln!(writer, "{marker}{}", r.head())?;
    } else {
        writeln!(writer, "{marker}{} {des}", r.head())?;
    }
    writeln!(writer, "{}", r.seq())?;
    if !is_fasta_record(r) {
        writeln!(writer, "+\n{}", r.qual())?;
    }
    Ok(())
}
