use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use alnsites_core::{PrivateAllele, SeqCount, SiteAllele, SiteDepth};

/// Opens the provided path for writing, or stdout if no path is provided.
///
/// If the path already exists, it will be overwritten.
pub fn writer(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => File::create(path)
            .map(io::BufWriter::new)
            .map(|writer| Box::new(writer) as Box<dyn Write>),
        None => Ok(Box::new(io::stdout().lock())),
    }
}

pub fn write_alleles<W, I>(writer: &mut W, alleles: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = SiteAllele>,
{
    writeln!(writer, "file\tsite\tallele\towner\tcount")?;

    for allele in alleles {
        let owner = allele
            .owner
            .map_or(String::from("."), |owner| owner.to_string());

        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            allele.file, allele.site, allele.base, owner, allele.count
        )?;
    }

    Ok(())
}

pub fn write_depths<W, I>(writer: &mut W, depths: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = SiteDepth>,
{
    writeln!(writer, "file\tsite\tsnp\talleles\ttotal\tA\tC\tG\tT\tprivate")?;

    for depth in depths {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            depth.file,
            depth.site,
            depth.snp,
            depth.alleles,
            depth.total,
            depth.a,
            depth.c,
            depth.g,
            depth.t,
            depth.private
        )?;
    }

    Ok(())
}

pub fn write_privates<W, I>(writer: &mut W, privates: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = PrivateAllele>,
{
    writeln!(writer, "file\tsite\tallele\towner")?;

    for allele in privates {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            allele.file, allele.site, allele.base, allele.owner
        )?;
    }

    Ok(())
}

pub fn write_seqs<'a, W, I>(writer: &mut W, seqs: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, SeqCount)>,
{
    writeln!(writer, "file\tuid\tname\ttotal\tA\tC\tG\tT\tprivate")?;

    for (name, count) in seqs {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            count.file,
            count.seq,
            name,
            count.total,
            count.a,
            count.c,
            count.g,
            count.t,
            count.private
        )?;
    }

    Ok(())
}
