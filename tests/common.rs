#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use bio::io::fasta::Writer as FastaWriter;
use tempfile::TempDir;

pub const CHROM: &str = "chr1";
pub const CHROM_LEN: usize = 400;

/// Two-gene annotation on `chr1`: `g1/t1` on the forward strand with CDS
/// `c1` (51-56) and `c2` (101-106), `g2/t2` on the reverse strand with CDS
/// `r1` (201-206) and `r2` (251-256).
pub const DEMO_GFF: &str = "\
##gff-version 3
##sequence-region chr1 1 400
chr1\tdemo\tgene\t41\t120\t.\t+\t.\tID=g1;Name=alpha
chr1\tdemo\tmRNA\t51\t106\t.\t+\t.\tID=t1;Parent=g1
chr1\tdemo\texon\t51\t56\t.\t+\t.\tID=t1.e1;Parent=t1
chr1\tdemo\tCDS\t51\t56\t.\t+\t0\tID=c1;Parent=t1
chr1\tdemo\texon\t101\t106\t.\t+\t.\tID=t1.e2;Parent=t1
chr1\tdemo\tCDS\t101\t106\t.\t+\t0\tID=c2;Parent=t1
chr1\tdemo\tgene\t191\t270\t.\t-\t.\tID=g2;Name=beta
chr1\tdemo\tmRNA\t201\t256\t.\t-\t.\tID=t2;Parent=g2
chr1\tdemo\tCDS\t201\t206\t.\t-\t0\tID=r1;Parent=t2
chr1\tdemo\tCDS\t251\t256\t.\t-\t0\tID=r2;Parent=t2
";

pub const DEMO_VCF: &str = "\
##fileformat=VCFv4.2
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
chr1\t52\tv1\tT\tC\t60\tPASS\t.
chr1\t56\tv2\tT\tC\t60\tPASS\t.
chr1\t102\tv3\tG\tA\t60\tPASS\t.
chr1\t10\tv4\tC\tG\t60\tPASS\t.
chr1\t253\tv5\tT\tA\t60\tPASS\t.
chr1\t150\tv6\tCA\tC\t60\tPASS\t.
";

/// Reference for [`DEMO_GFF`]. The forward transcript reads `ATG GCT TGG
/// TAA`, the reverse transcript `ATG AAA GGG TGA`.
pub fn demo_sequence() -> Vec<u8> {
    let mut seq = vec![b'C'; CHROM_LEN];
    seq[50..56].copy_from_slice(b"ATGGCT");
    seq[100..106].copy_from_slice(b"TGGTAA");
    seq[200..206].copy_from_slice(b"TCACCC");
    seq[250..256].copy_from_slice(b"TTTCAT");
    seq
}

pub fn init_logger() {
    let _ = pretty_env_logger::formatted_builder()
        .is_test(true)
        .try_init();
}

/// Demo inputs written to a temporary directory, removed on drop.
pub struct DemoFiles {
    pub dir:       TempDir,
    pub gff:       PathBuf,
    pub reference: PathBuf,
    pub vcf:       PathBuf,
}

impl DemoFiles {
    pub fn new() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let gff = dir.path().join("demo.gff3");
        let reference = dir.path().join("demo.fa");
        let vcf = dir.path().join("demo.vcf");

        File::create(&gff)?.write_all(DEMO_GFF.as_bytes())?;
        File::create(&vcf)?.write_all(DEMO_VCF.as_bytes())?;

        let mut fasta = FastaWriter::new(File::create(&reference)?);
        fasta.write(CHROM, Some("demo chromosome"), &demo_sequence())?;
        fasta.flush()?;

        Ok(Self {
            dir,
            gff,
            reference,
            vcf,
        })
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("effects.tsv")
    }
}
