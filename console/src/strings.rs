macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod predict {
    define_strings! {
        REFERENCE =
            "Path to the reference FASTA. Sequence identifiers must match the \
            first column of the annotation and the CHROM column of the variants.";
        GFF =
            "Path to the GFF3 annotation.";
        VCF =
            "Path to the VCF-like variant file. Only the first five columns \
            (CHROM, POS, ID, REF, ALT) are read; indels are skipped.";
        OUTPUT =
            "Path of the effect table. Written to stdout if omitted.";
        CODING_TYPE =
            "Feature type assembled into coding sequences.";
        SKIP_NONCODING =
            "Do not report variants outside every coding feature.";
    }
}

pub mod query {
    define_strings! {
        GFF =
            "Path to the GFF3 annotation.";
        JSON =
            "Print matching features as a JSON array instead of GFF lines.";
        FEATURE_TYPE =
            "Only report features of this type.";
        LEFT =
            "Lower bound of the window (inclusive). Features starting or ending \
            in the window are reported.";
        RIGHT =
            "Upper bound of the window (exclusive).";
    }
}

pub mod utils {
    define_strings! {
        VERBOSE =
            "Log per-record decisions. RUST_LOG takes precedence when set.";
        PROGRESS =
            "Display a progress spinner.";
    }
}
