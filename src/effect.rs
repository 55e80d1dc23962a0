//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the forecast for `city`, tagging the result with `seq`
    FetchForecast { seq: u64, city: String },
}
