use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// Snowflakes are never zero, so `"0"` is rejected as well; serenity's id types panic on it.
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
/// - `Err(AppError::InternalErr(ZeroId))` - The string is zero
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.clone(),
            source: e,
        })?;

    if result == 0 {
        return Err(InternalError::ZeroId { value }.into());
    }

    Ok(result)
}
