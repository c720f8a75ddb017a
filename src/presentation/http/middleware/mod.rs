pub mod method_override;
pub mod rate_limit;
