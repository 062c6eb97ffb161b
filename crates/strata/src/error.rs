#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid slot range [{from}, {to}]")]
    InvalidRange { from: i64, to: i64 },

    #[error(
        "no free run of {width_slots} slots found within {probes} probes around slot {start_slot}"
    )]
    UnresolvedPlacement {
        start_slot: i64,
        width_slots: i64,
        probes: i64,
    },

    #[error("invalid layout config: {message}")]
    InvalidConfig { message: String },

    #[error(transparent)]
    Graph(#[from] strata_graph::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
