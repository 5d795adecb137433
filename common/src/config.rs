/// How the dual-stack simulation decides whether a host pair "communicates".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommunicationMode {
    /// Flip a fair coin for every pair.
    #[default]
    Random,
    /// Every pair communicates.
    Always,
    /// No pair communicates.
    Never,
}

/// Runtime options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the banner when set.
    pub no_banner: bool,

    /// Output reduction level.
    ///
    /// `1` hides headers and decorations, `2` also hides the per-host lines
    /// of the simulation.
    pub quiet: u8,

    /// Seeds the coin flip so a simulation can be replayed.
    pub seed: Option<u64>,

    pub mode: CommunicationMode,

    /// Refuses to enumerate subnets with more usable hosts than this.
    ///
    /// `None` leaves enumeration uncapped.
    pub max_hosts: Option<u64>,
}
