macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod scan {
    define_strings! {
        SEQUENCE =
            "Nucleotide sequence to scan (A/C/G/T, case-insensitive). If \
            omitted, a random sequence of --random-length bases is generated.";
        THREADS =
            "Number of workers scoring chunks in parallel. Defaults to \
            CPGSCAN_NUM_THREADS or 2.";
        CHUNK =
            "Chunk size. The sequence is sliced into chunks of this size or \
            less, and each chunk is scored independently.";
        THRESHOLD =
            "Minimum fraction of C/G bases for a chunk to qualify as part of \
            an island. Must be within [0, 1].";
        MIN_LENGTH =
            "Minimum island length. Merged runs of qualifying chunks shorter \
            than this value are discarded.";
        RANDOM_LENGTH =
            "Length of the random sequence generated when no sequence is \
            supplied.";
        SEED =
            "Seed for random sequence generation. Identical seeds produce \
            identical sequences.";
        STRATEGY =
            "How chunks are dispatched to workers. Both strategies produce \
            identical results.";
        FORMAT =
            "Output format. `chunks` prints every scored chunk instead of \
            islands.";
        OUTPUT =
            "Path to the output file. Writes to stdout if omitted.";
    }
}

pub mod utils {
    define_strings! {
        VERBOSE =
            "Increase logging verbosity (-v debug, -vv trace). RUST_LOG \
            overrides this setting.";
        QUIET =
            "Only log warnings and errors.";
        PROGRESS =
            "Display a progress spinner while scanning.";
    }
}
