/// Status given to valid records that arrive without one.
pub const DEFAULT_STATUS: &str = "active";

pub mod limits {
    /// Cap on processed records per run, absent config or CLI override.
    pub const MAX_USERS: usize = 1000;
}
